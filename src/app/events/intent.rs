use super::{EdgeField, SpaceField};
use crate::app::state::ModeKind;
use crate::core::{CompassDirection, LengthUnit, Point, SpaceId, TypeRef, TypeSlot};
use std::path::PathBuf;

/// App-Intents: Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // ── Zeiger ──────────────────────────────────────────────────
    /// Zeiger bewegt (absolute Pixel-Koordinaten)
    PointerMoved { pos: Point },
    /// Maustaste gedrückt
    PointerPressed { pos: Point },
    /// Maustaste losgelassen
    PointerReleased { pos: Point },

    // ── Modus & Tastatur ────────────────────────────────────────
    /// Modus wechseln (Werkzeugleiste)
    SetModeRequested { mode: ModeKind },
    /// Escape: aktuellen Modus abbrechen
    CancelRequested,
    /// Enter: laufende Zeichnung abschließen
    FinishDrawingRequested,
    /// Entf: selektierten Eckpunkt oder Raum löschen
    DeleteRequested,
    /// Auswahl aufheben
    ClearSelectionRequested,

    // ── Maßstab ─────────────────────────────────────────────────
    /// Reale Länge der Referenzstrecke neu eingeben
    EditScaleLengthRequested,
    /// Referenzstrecke ein-/ausblenden
    ToggleScaleOverlayRequested,
    /// Globale Anzeigeeinheit wechseln
    SetDisplayUnitRequested { unit: LengthUnit },

    // ── Kanten-Eigenschaften (selektierte Kante) ────────────────
    /// Außenwand-Flag setzen
    SetEdgeExteriorRequested { value: bool },
    /// Numerisches Kantenfeld aus Freitext setzen
    SetEdgeFieldRequested { field: EdgeField, input: String },
    /// Himmelsrichtung setzen
    SetEdgeDirectionRequested { direction: CompassDirection },
    /// Tür-Flag setzen
    SetEdgeDoorsRequested { value: bool },
    /// Typ-Referenz setzen/entfernen
    SetEdgeTypeRequested {
        slot: TypeSlot,
        type_ref: Option<TypeRef>,
    },

    // ── Raum-Eigenschaften (selektierter Raum) ──────────────────
    /// Raum umbenennen
    RenameSpaceRequested { name: String },
    /// Numerisches Raumfeld aus Freitext setzen
    SetSpaceFieldRequested { field: SpaceField, input: String },
    /// Oberlicht-Flag setzen
    SetSkylightRequested { value: bool },
    /// Oberlichttyp setzen/entfernen
    SetSkylightTypeRequested { type_ref: Option<TypeRef> },

    // ── Decke ───────────────────────────────────────────────────
    /// "Wie Boden" umschalten
    SetCeilingSameAsFloorRequested { value: bool },
    /// Manuelle Fläche umschalten
    SetCeilingManualOverrideRequested { value: bool },
    /// Deckenpolygon ein-/ausblenden
    ToggleCeilingVisibilityRequested,
    /// Deckenpolygon verwerfen
    ClearCeilingPolygonRequested,

    // ── Etagen ──────────────────────────────────────────────────
    /// Neue Etage anlegen (Name per Prompt)
    AddFloorRequested,
    /// Aktive Etage wechseln
    SelectFloorRequested { index: usize },
    /// Etage löschen (mit Bestätigung)
    DeleteFloorRequested { index: usize },
    /// Hintergrundbild der aktiven Etage setzen
    SetBackgroundRequested { path: Option<String> },

    // ── Prüfung & Export ────────────────────────────────────────
    /// Alle Räume prüfen
    ValidateAllRequested,
    /// Zu einem Raum navigieren (Etage wechseln + selektieren)
    FocusSpaceRequested { space_id: SpaceId },
    /// Aufmaß exportieren
    ExportRequested { path: PathBuf },

    // ── Datei ───────────────────────────────────────────────────
    /// Projekt speichern (None = aktueller Pfad)
    SaveRequested { path: Option<PathBuf> },
    /// Projekt laden
    LoadRequested { path: PathBuf },
}
