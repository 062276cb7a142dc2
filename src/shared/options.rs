//! Zentrale Konfiguration für das Floorplan-Aufmaß.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::LengthUnit;
use serde::{Deserialize, Serialize};

// ── Hit-Test ────────────────────────────────────────────────────────

/// Fangradius für Eckpunkte in Pixeln. Muss größer als [`EDGE_BUFFER_PX`] sein.
pub const VERTEX_RADIUS_PX: f64 = 8.0;
/// Fangabstand für Kanten in Pixeln.
pub const EDGE_BUFFER_PX: f64 = 5.0;
/// Abstand zum ersten Punkt, ab dem ein Klick das Polygon schließt.
pub const CLOSE_THRESHOLD_PX: f64 = 10.0;
/// Mindestabstand zwischen Eckpunkt- und Kantenradius nach `sanitized()`.
const MIN_RADIUS_GAP_PX: f64 = 1.0;

// ── Darstellung ─────────────────────────────────────────────────────

/// Füllfarbe der Räume (RGBA).
pub const SPACE_FILL_COLOR: [f32; 4] = [0.2, 0.5, 0.9, 0.25];
/// Umrissfarbe des selektierten Raums (RGBA).
pub const SPACE_SELECTED_COLOR: [f32; 4] = [1.0, 0.6, 0.0, 1.0];
/// Umrissfarbe der Decke (RGBA).
pub const CEILING_COLOR: [f32; 4] = [0.6, 0.2, 0.8, 0.6];
/// Farbe der Außenwände (RGBA).
pub const EXTERIOR_EDGE_COLOR: [f32; 4] = [0.9, 0.1, 0.1, 1.0];
/// Farbe der Maßstabsreferenz (RGBA).
pub const SCALE_COLOR: [f32; 4] = [0.1, 0.8, 0.2, 1.0];
/// Breite der Kanten-Rechtecke in Pixeln.
pub const EDGE_THICKNESS_PX: f64 = 4.0;

/// Fangradien für den Hit-Test (aus den Optionen abgeleitet)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRadii {
    /// Eckpunkt-Fangradius
    pub vertex: f64,
    /// Kanten-Fangabstand
    pub edge: f64,
}

impl Default for HitRadii {
    fn default() -> Self {
        Self {
            vertex: VERTEX_RADIUS_PX,
            edge: EDGE_BUFFER_PX,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `floorplan_takeoff.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    /// Eckpunkt-Fangradius in Pixeln
    pub vertex_radius_px: f64,
    /// Kanten-Fangabstand in Pixeln
    pub edge_buffer_px: f64,
    /// Schließ-Abstand zum ersten Punkt beim Zeichnen
    pub close_threshold_px: f64,
    /// Globale Anzeigeeinheit
    pub display_unit: LengthUnit,
    /// Ob neue Decken sichtbar angelegt werden
    pub ceiling_visible_default: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            vertex_radius_px: VERTEX_RADIUS_PX,
            edge_buffer_px: EDGE_BUFFER_PX,
            close_threshold_px: CLOSE_THRESHOLD_PX,
            display_unit: LengthUnit::default(),
            ceiling_visible_default: true,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<EditorOptions>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("floorplan_takeoff"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("floorplan_takeoff.toml")
    }

    /// Korrigiert ungültige Werte; Eckpunktradius bleibt größer als der Kantenabstand.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.vertex_radius_px.is_finite() && self.vertex_radius_px > 0.0) {
            self.vertex_radius_px = defaults.vertex_radius_px;
        }
        if !(self.edge_buffer_px.is_finite() && self.edge_buffer_px > 0.0) {
            self.edge_buffer_px = defaults.edge_buffer_px;
        }
        if !(self.close_threshold_px.is_finite() && self.close_threshold_px > 0.0) {
            self.close_threshold_px = defaults.close_threshold_px;
        }
        if self.edge_buffer_px >= self.vertex_radius_px {
            let clamped = (self.vertex_radius_px - MIN_RADIUS_GAP_PX).max(self.vertex_radius_px * 0.5);
            log::warn!(
                "Kantenabstand {} >= Eckpunktradius {}, begrenzt auf {}",
                self.edge_buffer_px,
                self.vertex_radius_px,
                clamped
            );
            self.edge_buffer_px = clamped;
        }
        self
    }

    /// Fangradien für den Hit-Test
    pub fn hit_radii(&self) -> HitRadii {
        HitRadii {
            vertex: self.vertex_radius_px,
            edge: self.edge_buffer_px,
        }
    }
}
