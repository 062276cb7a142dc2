//! Application State — zentrale Datenhaltung.
//!
//! Modus, Selektion und Hover-Ziel sind explizite Felder; es gibt keinen
//! versteckten globalen Zustand.

use super::CommandLog;
use crate::core::takeoff::InvalidSpace;
use crate::core::{Floor, Point, Project, Space, SpaceId};
use crate::shared::EditorOptions;
use std::path::PathBuf;

// ── Interaktionsmodus ───────────────────────────────────────────────

/// Aktiver Interaktionsmodus (gegenseitig exklusiv).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionMode {
    /// Räume/Eckpunkte/Kanten selektieren und verschieben
    #[default]
    Select,
    /// Neuen Raum zeichnen
    DrawSpace {
        /// Bisher gesetzte Punkte
        points: Vec<Point>,
    },
    /// Deckenpolygon für einen Raum zeichnen
    DrawCeiling {
        /// Zielraum
        space_id: SpaceId,
        /// Bisher gesetzte Punkte
        points: Vec<Point>,
    },
    /// Maßstabs-Referenzstrecke zeichnen
    DrawScale {
        /// Erster Punkt (falls schon gesetzt)
        first: Option<Point>,
    },
    /// Einmaliges Einfügen eines Eckpunkts auf der nächsten getroffenen Kante
    InsertVertex,
}

/// Modus-Art ohne Nutzdaten (für Intents)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
    /// Select
    Select,
    /// Raum zeichnen
    DrawSpace,
    /// Decke zeichnen
    DrawCeiling,
    /// Maßstab zeichnen
    DrawScale,
    /// Eckpunkt einfügen
    InsertVertex,
}

impl InteractionMode {
    /// Art des Modus
    pub fn kind(&self) -> ModeKind {
        match self {
            InteractionMode::Select => ModeKind::Select,
            InteractionMode::DrawSpace { .. } => ModeKind::DrawSpace,
            InteractionMode::DrawCeiling { .. } => ModeKind::DrawCeiling,
            InteractionMode::DrawScale { .. } => ModeKind::DrawScale,
            InteractionMode::InsertVertex => ModeKind::InsertVertex,
        }
    }

    /// Punkte eines laufenden Polygon-Entwurfs
    pub fn draft_points(&self) -> Option<&[Point]> {
        match self {
            InteractionMode::DrawSpace { points } | InteractionMode::DrawCeiling { points, .. } => {
                Some(points)
            }
            _ => None,
        }
    }
}

// ── Hit-Test-Ergebnis ───────────────────────────────────────────────

/// Ergebnis eines Hit-Tests, einmal pro Zeigerbewegung berechnet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HitTarget {
    /// Nichts getroffen
    #[default]
    Background,
    /// Eckpunkt der Decke des selektierten Raums
    CeilingVertex(usize),
    /// Eckpunkt des selektierten Raums
    SpaceVertex(usize),
    /// Kante der Decke (nur im Einfügemodus)
    CeilingEdge(usize),
    /// Kante des selektierten Raums
    SpaceEdge(usize),
    /// Innenfläche des selektierten Raums
    Interior,
    /// Ein anderer (nicht selektierter) Raum
    OtherSpace(SpaceId),
}

impl HitTarget {
    /// Ob das Ziel per Drag verschoben werden kann
    pub fn is_movable(self) -> bool {
        matches!(
            self,
            HitTarget::CeilingVertex(_) | HitTarget::SpaceVertex(_) | HitTarget::Interior
        )
    }
}

// ── Selektion & Drag ────────────────────────────────────────────────

/// Selektierter Eckpunkt (Raum oder Decke)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexRef {
    /// Raum-Eckpunkt
    Space(usize),
    /// Decken-Eckpunkt
    Ceiling(usize),
}

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Selektierter Raum der aktiven Etage
    pub space_id: Option<SpaceId>,
    /// Selektierter Eckpunkt
    pub vertex: Option<VertexRef>,
    /// Selektierte Kante des Raums
    pub edge: Option<usize>,
    /// Letztes Hover-Ergebnis
    pub hover_target: HitTarget,
    /// Letzte Zeigerposition
    pub hover_pos: Option<Point>,
}

impl SelectionState {
    /// Selektiert einen Raum und verwirft Eckpunkt-/Kantenauswahl.
    pub fn select_space(&mut self, id: SpaceId) {
        self.space_id = Some(id);
        self.vertex = None;
        self.edge = None;
    }

    /// Hebt die gesamte Auswahl auf
    pub fn clear(&mut self) {
        self.space_id = None;
        self.vertex = None;
        self.edge = None;
        self.hover_target = HitTarget::Background;
    }
}

/// Was gerade gezogen wird
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    /// Raum-Eckpunkt
    SpaceVertex(usize),
    /// Decken-Eckpunkt
    CeilingVertex(usize),
    /// Ganzer Raum samt Decke
    WholeSpace,
}

/// Laufender Drag-Vorgang
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Gezogener Raum
    pub space_id: SpaceId,
    /// Ziel
    pub target: DragTarget,
    /// Letzte Zeigerposition
    pub last_pos: Point,
}

// ── UI-Zustand ──────────────────────────────────────────────────────

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Statusmeldung (z.B. abgelehnte Aktion)
    pub status_message: Option<String>,
    /// Ergebnis der letzten Gesamtprüfung
    pub validation_report: Vec<InvalidSpace>,
    /// Signalisiert dem Renderer, neu zu zeichnen
    pub redraw_requested: bool,
}

// ── AppState ────────────────────────────────────────────────────────

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Projekt (Etagen, Räume)
    pub project: Project,
    /// Aktiver Modus
    pub mode: InteractionMode,
    /// Selektion & Hover
    pub selection: SelectionState,
    /// Laufender Drag
    pub drag: Option<DragState>,
    /// UI-State
    pub ui: UiState,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Zuletzt geladene/gespeicherte Projektdatei
    pub current_file_path: Option<PathBuf>,
}

impl AppState {
    /// Erstellt einen neuen App-State mit leerem Projekt
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State mit den übergebenen (bereinigten) Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        let options = options.sanitized();
        Self {
            project: Project::default(),
            mode: InteractionMode::Select,
            selection: SelectionState::default(),
            drag: None,
            ui: UiState::default(),
            options,
            command_log: CommandLog::new(),
            current_file_path: None,
        }
    }

    /// Aktive Etage
    pub fn active_floor(&self) -> &Floor {
        self.project.active_floor()
    }

    /// Aktive Etage (mutabel)
    pub fn active_floor_mut(&mut self) -> &mut Floor {
        self.project.active_floor_mut()
    }

    /// Selektierter Raum der aktiven Etage
    pub fn selected_space(&self) -> Option<&Space> {
        let id = self.selection.space_id?;
        self.active_floor().spaces.get(&id)
    }

    /// Selektierter Raum (mutabel) mit seiner ID
    pub fn selected_space_mut(&mut self) -> Option<(SpaceId, &mut Space)> {
        let id = self.selection.space_id?;
        self.project
            .active_floor_mut()
            .spaces
            .get_mut(&id)
            .map(|space| (id, space))
    }

    /// Wechselt den Modus; laufende Drags und Entwurfspunkte werden verworfen.
    pub fn enter_mode(&mut self, mode: InteractionMode) {
        if self.drag.take().is_some() {
            log::debug!("Drag durch Moduswechsel abgebrochen");
        }
        self.mode = mode;
    }

    /// Setzt die Statusmeldung
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.ui.status_message = Some(message.into());
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_options_keeps_vertex_radius_above_edge_buffer() {
        let state = AppState::with_options(EditorOptions {
            vertex_radius_px: 4.0,
            edge_buffer_px: 12.0,
            ..EditorOptions::default()
        });
        assert!(state.options.vertex_radius_px > state.options.edge_buffer_px);
        assert_eq!(state.options.vertex_radius_px, 4.0);
    }
}
