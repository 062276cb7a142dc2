//! Maßstab pro Etage: Referenzstrecke in Pixeln + deklarierte reale Länge.
//!
//! Intern wird jede reale Länge in Fuß gespeichert. Umrechnungen in die
//! Anzeigeeinheit passieren ausschließlich an Anzeige- und Exportgrenzen.

use super::geometry::{distance, Point};
use serde::{Deserialize, Serialize};

/// Längeneinheit für Anzeige und Export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LengthUnit {
    /// Fuß (interne Speichereinheit)
    #[default]
    Feet,
    /// Zoll
    Inches,
    /// Meter
    Meters,
    /// Zentimeter
    Centimeters,
}

impl LengthUnit {
    /// Alle Einheiten in Anzeige-Reihenfolge
    pub const ALL: [LengthUnit; 4] = [
        LengthUnit::Feet,
        LengthUnit::Inches,
        LengthUnit::Meters,
        LengthUnit::Centimeters,
    ];

    /// Anzahl interner Einheiten (Fuß) pro Anzeigeeinheit.
    pub fn feet_per_unit(self) -> f64 {
        match self {
            LengthUnit::Feet => 1.0,
            LengthUnit::Inches => 1.0 / 12.0,
            LengthUnit::Meters => 1.0 / 0.3048,
            LengthUnit::Centimeters => 1.0 / 30.48,
        }
    }

    /// Kurzes Suffix für Längenangaben
    pub fn suffix(self) -> &'static str {
        match self {
            LengthUnit::Feet => "ft",
            LengthUnit::Inches => "in",
            LengthUnit::Meters => "m",
            LengthUnit::Centimeters => "cm",
        }
    }

    /// Suffix für Flächenangaben
    pub fn area_suffix(self) -> &'static str {
        match self {
            LengthUnit::Feet => "ft²",
            LengthUnit::Inches => "in²",
            LengthUnit::Meters => "m²",
            LengthUnit::Centimeters => "cm²",
        }
    }

    /// Parst ein Suffix (`ft`, `in`, `m`, `cm`), Groß-/Kleinschreibung egal.
    pub fn from_suffix(text: &str) -> Option<Self> {
        let text = text.trim();
        Self::ALL
            .into_iter()
            .find(|unit| unit.suffix().eq_ignore_ascii_case(text))
    }
}

// ── Umrechnung intern ↔ Anzeige ─────────────────────────────────────

/// Interne Länge → Anzeigeeinheit (linear).
pub fn to_display_length(internal: f64, unit: LengthUnit) -> f64 {
    internal / unit.feet_per_unit()
}

/// Interne Fläche → Anzeigeeinheit (quadratisch).
pub fn to_display_area(internal: f64, unit: LengthUnit) -> f64 {
    let f = unit.feet_per_unit();
    internal / (f * f)
}

/// Anzeige-Länge → interne Einheit.
pub fn from_display_length(display: f64, unit: LengthUnit) -> f64 {
    display * unit.feet_per_unit()
}

/// Anzeige-Fläche → interne Einheit.
pub fn from_display_area(display: f64, unit: LengthUnit) -> f64 {
    let f = unit.feet_per_unit();
    display * f * f
}

// ── Scale ───────────────────────────────────────────────────────────

/// Kalibrierung einer Etage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    /// Referenzstrecke in absoluten Pixel-Koordinaten
    pub reference: Option<[Point; 2]>,
    /// Länge der Referenzstrecke in Pixeln
    pub pixel_length: f64,
    /// Deklarierte reale Länge (intern, Fuß). 0 = nicht gesetzt.
    pub declared_length: f64,
    /// Ob die Referenzstrecke eingeblendet wird
    pub overlay_visible: bool,
}

impl Default for Scale {
    fn default() -> Self {
        Self {
            reference: None,
            pixel_length: 0.0,
            declared_length: 0.0,
            overlay_visible: true,
        }
    }
}

impl Scale {
    /// Speichert die Referenzstrecke und berechnet ihre Pixellänge neu.
    pub fn set_reference(&mut self, p1: Point, p2: Point) {
        self.reference = Some([p1, p2]);
        self.pixel_length = distance(p1, p2);
    }

    /// Leitet die Pixellänge neu aus der Referenzstrecke ab; ohne Strecke 0.
    pub fn refresh_pixel_length(&mut self) {
        self.pixel_length = match self.reference {
            Some([p1, p2]) => distance(p1, p2),
            None => 0.0,
        };
    }

    /// Setzt die deklarierte Länge (intern). Nicht-positive oder nicht-endliche
    /// Werte werden abgelehnt; der bisherige Wert bleibt dann erhalten.
    pub fn set_declared_length(&mut self, value: f64) -> bool {
        if !value.is_finite() || value <= 0.0 {
            log::warn!("Ungültige Referenzlänge abgelehnt: {}", value);
            return false;
        }
        self.declared_length = value;
        true
    }

    /// Ob bereits eine reale Länge deklariert wurde
    pub fn has_declared_length(&self) -> bool {
        self.declared_length > 0.0
    }

    /// Reale Einheiten pro Pixel, oder 0 wenn die Kalibrierung fehlt.
    pub fn scale_factor(&self) -> f64 {
        if self.pixel_length > 0.0 && self.declared_length > 0.0 {
            self.declared_length / self.pixel_length
        } else {
            0.0
        }
    }

    /// Ob die Kalibrierung einen nutzbaren Faktor liefert
    pub fn is_calibrated(&self) -> bool {
        self.scale_factor() > 0.0
    }
}
