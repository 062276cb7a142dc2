//! Aufmaß-Auswertung: festgeschriebene Werte je Raum in der Anzeigeeinheit.
//!
//! Der Export wird verweigert, solange irgendein Raum die Pflichtfeld-Prüfung
//! nicht besteht; der Fehler enthält die vollständige Liste.

use super::edge::CompassDirection;
use super::project::Project;
use super::scale::{to_display_area, to_display_length, LengthUnit};
use super::space::{Space, SpaceId};
use super::validation::ValidationIssue;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Ein Raum, der die Prüfung nicht besteht
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvalidSpace {
    /// Etagenindex
    pub floor: usize,
    /// Etagenname
    pub floor_name: String,
    /// Raum-ID
    pub space_id: SpaceId,
    /// Raumname
    pub name: String,
    /// Alle offenen Punkte als Text
    pub issues: Vec<String>,
}

impl fmt::Display for InvalidSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {}: {}",
            self.floor_name,
            self.name,
            self.issues.join(", ")
        )
    }
}

/// Fehler beim Erstellen des Aufmaßes
#[derive(Debug, Error)]
pub enum ExportError {
    /// Mindestens ein Raum ist unvollständig
    #[error("Export nicht möglich: {} Raum/Räume unvollständig", .0.len())]
    InvalidSpaces(Vec<InvalidSpace>),
}

/// Wand-/Fensterfläche einer Richtung in Anzeigeeinheit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DirectionRow {
    /// Wandfläche
    pub wall_area: f64,
    /// Fensteröffnungsfläche
    pub window_area: f64,
}

/// Aufmaß-Zeile eines Raums
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpaceTakeoff {
    /// Etagenname
    pub floor: String,
    /// Raum-ID
    pub space_id: SpaceId,
    /// Raumname
    pub name: String,
    /// Grundfläche
    pub area: f64,
    /// Außenumfang
    pub exterior_perimeter: f64,
    /// Effektive Deckenfläche
    pub ceiling_area: Option<f64>,
    /// Durchschnittliche Deckenhöhe
    pub average_ceiling_height: Option<f64>,
    /// Oberlichtfläche (nur wenn Oberlicht vorhanden)
    pub skylight_area: Option<f64>,
    /// Außenwände je Himmelsrichtung (Label → Werte)
    pub directions: IndexMap<&'static str, DirectionRow>,
}

/// Vollständiges Aufmaß
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TakeoffReport {
    /// Längeneinheit
    pub length_unit: &'static str,
    /// Flächeneinheit
    pub area_unit: &'static str,
    /// Zeilen in Etagen- und Zeichenreihenfolge
    pub spaces: Vec<SpaceTakeoff>,
}

/// Prüft alle Räume aller Etagen.
pub fn collect_invalid_spaces(project: &Project) -> Vec<InvalidSpace> {
    project
        .floors
        .iter()
        .enumerate()
        .flat_map(|(floor_index, floor)| {
            floor.spaces.iter().filter_map(move |(id, space)| {
                let issues = space.validate();
                (!issues.is_empty()).then(|| InvalidSpace {
                    floor: floor_index,
                    floor_name: floor.name.clone(),
                    space_id: *id,
                    name: space.name.clone(),
                    issues: issues.iter().map(ValidationIssue::to_string).collect(),
                })
            })
        })
        .collect()
}

/// Erstellt das Aufmaß in `unit`; verweigert bei unvollständigen Räumen.
pub fn build_takeoff(project: &Project, unit: LengthUnit) -> Result<TakeoffReport, ExportError> {
    let invalid = collect_invalid_spaces(project);
    if !invalid.is_empty() {
        log::warn!("Export verweigert: {} unvollständige Räume", invalid.len());
        return Err(ExportError::InvalidSpaces(invalid));
    }

    let spaces = project
        .floors
        .iter()
        .flat_map(|floor| {
            floor
                .spaces
                .iter()
                .map(move |(id, space)| space_row(&floor.name, *id, space, unit))
        })
        .collect();

    Ok(TakeoffReport {
        length_unit: unit.suffix(),
        area_unit: unit.area_suffix(),
        spaces,
    })
}

fn space_row(floor: &str, space_id: SpaceId, space: &Space, unit: LengthUnit) -> SpaceTakeoff {
    let area = |v: f64| to_display_area(v, unit);
    let length = |v: f64| to_display_length(v, unit);

    let totals = space.directional_totals();
    let directions = CompassDirection::ALL
        .into_iter()
        .map(|dir| {
            let t = totals.get(&dir).copied().unwrap_or_default();
            (
                dir.label(),
                DirectionRow {
                    wall_area: area(t.wall_area),
                    window_area: area(t.window_area),
                },
            )
        })
        .collect();

    SpaceTakeoff {
        floor: floor.to_string(),
        space_id,
        name: space.name.clone(),
        area: area(space.area()),
        exterior_perimeter: length(space.exterior_perimeter()),
        ceiling_area: space.effective_ceiling_area().map(area),
        average_ceiling_height: space.average_ceiling_height.map(length),
        skylight_area: if space.has_skylight {
            space.skylight_area.map(area)
        } else {
            None
        },
        directions,
    }
}
