//! Pflichtfeld-Prüfung eines Raums.
//!
//! Alle Regeln sind unabhängig und werden bei jeder Prüfung vollständig
//! ausgewertet. Kantennummern im Text sind 1-basiert.

use super::ceiling::CeilingSource;
use super::space::Space;
use thiserror::Error;

/// Ein nicht erfülltes Pflichtfeld
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    /// Durchschnittliche Deckenhöhe fehlt
    #[error("Durchschnittliche Deckenhöhe fehlt")]
    MissingAverageCeilingHeight,
    /// Manuelle Deckenfläche fehlt
    #[error("Manuelle Deckenfläche fehlt")]
    MissingManualCeilingArea,
    /// Deckenpolygon fehlt
    #[error("Deckenpolygon fehlt (mindestens 3 Punkte)")]
    MissingCeilingPolygon,
    /// Oberlichtfläche fehlt
    #[error("Oberlichtfläche fehlt")]
    MissingSkylightArea,
    /// Wandhöhe einer Außenwand fehlt
    #[error("Wand {}: Höhe fehlt", .edge + 1)]
    MissingWallHeight {
        /// Kantenindex (0-basiert)
        edge: usize,
    },
    /// Fensterbreite einer Außenwand fehlt
    #[error("Wand {}: Fensterbreite fehlt", .edge + 1)]
    MissingWindowWidth {
        /// Kantenindex (0-basiert)
        edge: usize,
    },
    /// Fensterhöhe einer Außenwand fehlt
    #[error("Wand {}: Fensterhöhe fehlt", .edge + 1)]
    MissingWindowHeight {
        /// Kantenindex (0-basiert)
        edge: usize,
    },
    /// Türanzahl fehlt trotz Tür-Flag
    #[error("Wand {}: Türanzahl fehlt", .edge + 1)]
    MissingDoorQuantity {
        /// Kantenindex (0-basiert)
        edge: usize,
    },
}

impl ValidationIssue {
    /// Betroffene Kante, falls die Regel kantenbezogen ist
    pub fn edge_index(&self) -> Option<usize> {
        match self {
            ValidationIssue::MissingWallHeight { edge }
            | ValidationIssue::MissingWindowWidth { edge }
            | ValidationIssue::MissingWindowHeight { edge }
            | ValidationIssue::MissingDoorQuantity { edge } => Some(*edge),
            _ => None,
        }
    }
}

/// Prüft alle Regeln für einen Raum.
pub fn validate_space(space: &Space) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if space.average_ceiling_height.is_none() {
        issues.push(ValidationIssue::MissingAverageCeilingHeight);
    }

    match space.ceiling.source() {
        CeilingSource::SameAsFloor => {}
        CeilingSource::Manual => {
            if space.ceiling.manual_area.is_none() {
                issues.push(ValidationIssue::MissingManualCeilingArea);
            }
        }
        CeilingSource::Polygon => {
            if !space.ceiling.has_polygon() {
                issues.push(ValidationIssue::MissingCeilingPolygon);
            }
        }
    }

    if space.has_skylight && space.skylight_area.is_none() {
        issues.push(ValidationIssue::MissingSkylightArea);
    }

    for (edge_index, edge) in space.edges().iter().enumerate() {
        if !edge.is_exterior {
            continue;
        }
        if edge.height.is_none() {
            issues.push(ValidationIssue::MissingWallHeight { edge: edge_index });
        }
        if edge.window_width.is_none() {
            issues.push(ValidationIssue::MissingWindowWidth { edge: edge_index });
        }
        if edge.window_height.is_none() {
            issues.push(ValidationIssue::MissingWindowHeight { edge: edge_index });
        }
        if edge.has_doors && edge.door_quantity.is_none() {
            issues.push(ValidationIssue::MissingDoorQuantity { edge: edge_index });
        }
    }

    issues
}
