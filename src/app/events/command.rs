use super::{EdgeField, SpaceField};
use crate::app::state::{ModeKind, VertexRef};
use crate::core::{CompassDirection, LengthUnit, Point, SpaceId, TypeRef, TypeSlot};
use std::path::PathBuf;

/// Mutierende Commands, die ausschließlich der Controller ausführt.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // ── Hover & Selektion ───────────────────────────────────────
    /// Hover-Ziel an Position neu berechnen
    UpdateHover { pos: Point },
    /// Raum selektieren
    SelectSpace { space_id: SpaceId },
    /// Eckpunkt des selektierten Raums selektieren
    SelectVertex { vertex: VertexRef },
    /// Kante des selektierten Raums selektieren
    SelectEdge { edge_index: usize },
    /// Auswahl aufheben
    ClearSelection,

    // ── Drag ────────────────────────────────────────────────────
    /// Drag des aktuellen Hover-Ziels beginnen
    BeginDrag { pos: Point },
    /// Drag fortsetzen
    DragTo { pos: Point },
    /// Drag beenden
    EndDrag,

    // ── Modus & Zeichnen ────────────────────────────────────────
    /// Modus wechseln
    SetMode { mode: ModeKind },
    /// Entwurfspunkt anhängen
    AddDraftPoint { pos: Point },
    /// Entwurf abschließen
    FinishDraft,
    /// Punkt der Maßstabsstrecke setzen
    AddScalePoint { pos: Point },

    // ── Struktur ────────────────────────────────────────────────
    /// Eckpunkt auf Kante einfügen
    InsertVertex {
        on_ceiling: bool,
        edge_index: usize,
        pos: Point,
    },
    /// Selektierten Eckpunkt löschen
    DeleteSelectedVertex,
    /// Selektierten Raum löschen (mit Bestätigung)
    DeleteSelectedSpace,

    // ── Maßstab & Optionen ──────────────────────────────────────
    /// Reale Länge per Prompt abfragen
    PromptScaleLength,
    /// Referenzstrecke ein-/ausblenden
    ToggleScaleOverlay,
    /// Anzeigeeinheit setzen
    SetDisplayUnit { unit: LengthUnit },

    // ── Eigenschaften ───────────────────────────────────────────
    /// Außenwand-Flag der selektierten Kante
    SetEdgeExterior { value: bool },
    /// Numerisches Kantenfeld
    SetEdgeField { field: EdgeField, input: String },
    /// Himmelsrichtung der selektierten Kante
    SetEdgeDirection { direction: CompassDirection },
    /// Tür-Flag der selektierten Kante
    SetEdgeDoors { value: bool },
    /// Typ-Referenz der selektierten Kante
    SetEdgeType {
        slot: TypeSlot,
        type_ref: Option<TypeRef>,
    },
    /// Raumname
    RenameSpace { name: String },
    /// Numerisches Raumfeld
    SetSpaceField { field: SpaceField, input: String },
    /// Oberlicht-Flag
    SetSkylight { value: bool },
    /// Oberlichttyp
    SetSkylightType { type_ref: Option<TypeRef> },
    /// Decke "wie Boden"
    SetCeilingSameAsFloor { value: bool },
    /// Decke mit manueller Fläche
    SetCeilingManualOverride { value: bool },
    /// Deckenpolygon ein-/ausblenden
    ToggleCeilingVisibility,
    /// Deckenpolygon verwerfen
    ClearCeilingPolygon,

    // ── Etagen ──────────────────────────────────────────────────
    /// Etage per Prompt anlegen
    AddFloor,
    /// Aktive Etage wechseln
    SelectFloor { index: usize },
    /// Etage löschen (mit Bestätigung)
    DeleteFloor { index: usize },
    /// Hintergrundbild setzen
    SetBackground { path: Option<String> },

    // ── Prüfung, Export, Datei ──────────────────────────────────
    /// Alle Räume prüfen
    ValidateAll,
    /// Zu einem Raum navigieren
    FocusSpace { space_id: SpaceId },
    /// Aufmaß exportieren
    Export { path: PathBuf },
    /// Projekt speichern
    SaveProject { path: Option<PathBuf> },
    /// Projekt laden
    LoadProject { path: PathBuf },
}

impl AppCommand {
    /// Hochfrequente Zeigerbewegungen ohne eigenständige Bearbeitung.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::UpdateHover { .. } | Self::DragTo { .. })
    }
}
