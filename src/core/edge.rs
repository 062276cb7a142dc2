//! Wand-Metadaten einer Polygonkante.

use serde::{Deserialize, Serialize};

/// Himmelsrichtung einer Wand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CompassDirection {
    /// Norden
    #[default]
    N,
    /// Nordosten
    NE,
    /// Osten
    E,
    /// Südosten
    SE,
    /// Süden
    S,
    /// Südwesten
    SW,
    /// Westen
    W,
    /// Nordwesten
    NW,
}

impl CompassDirection {
    /// Alle Richtungen im Uhrzeigersinn ab Norden
    pub const ALL: [CompassDirection; 8] = [
        CompassDirection::N,
        CompassDirection::NE,
        CompassDirection::E,
        CompassDirection::SE,
        CompassDirection::S,
        CompassDirection::SW,
        CompassDirection::W,
        CompassDirection::NW,
    ];

    /// Kurzbezeichnung (z.B. "NE")
    pub fn label(self) -> &'static str {
        match self {
            CompassDirection::N => "N",
            CompassDirection::NE => "NE",
            CompassDirection::E => "E",
            CompassDirection::SE => "SE",
            CompassDirection::S => "S",
            CompassDirection::SW => "SW",
            CompassDirection::W => "W",
            CompassDirection::NW => "NW",
        }
    }

    /// Umkehrung von [`label`](Self::label)
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|dir| dir.label().eq_ignore_ascii_case(label))
    }
}

/// Undurchsichtige Referenz auf einen Wand-/Fenster-/Türtyp einer externen Typ-Verwaltung.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef(pub String);

/// Welcher Typ-Slot einer Kante gemeint ist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeSlot {
    /// Wandtyp
    Wall,
    /// Fenstertyp
    Window,
    /// Türtyp
    Door,
}

/// Metadaten einer Kante (Wand) eines Raums.
///
/// Kante `i` verbindet Eckpunkt `i` mit Eckpunkt `(i + 1) % n`.
/// `length` und `window_area` sind abgeleitet und werden bei jeder
/// Neuberechnung überschrieben.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Edge {
    /// Außenwand
    pub is_exterior: bool,
    /// Wandhöhe (intern, Fuß)
    pub height: Option<f64>,
    /// Fensterbreite (intern, Fuß)
    pub window_width: Option<f64>,
    /// Fensterhöhe (intern, Fuß)
    pub window_height: Option<f64>,
    /// Himmelsrichtung
    pub direction: CompassDirection,
    /// Ob die Wand Türen hat
    pub has_doors: bool,
    /// Anzahl Türen
    pub door_quantity: Option<u32>,
    /// Wandtyp
    pub wall_type: Option<TypeRef>,
    /// Fenstertyp
    pub window_type: Option<TypeRef>,
    /// Türtyp
    pub door_type: Option<TypeRef>,
    /// Abgeleitet: Kantenlänge (intern, Fuß)
    pub length: f64,
    /// Abgeleitet: Fensteröffnungsfläche (intern, Fuß²)
    pub window_area: f64,
}

impl Edge {
    /// Erzeugt eine Kante, die die geerbten Eigenschaften einer geteilten Kante übernimmt.
    pub fn inherited_from(split: &Edge) -> Self {
        Self {
            is_exterior: split.is_exterior,
            height: split.height,
            window_width: split.window_width,
            window_height: split.window_height,
            direction: split.direction,
            ..Self::default()
        }
    }

    /// Fensteröffnung, sofern Breite und Höhe beide positiv und endlich sind.
    pub fn opening_area(&self) -> f64 {
        match (self.window_width, self.window_height) {
            (Some(w), Some(h)) if is_positive_finite(w) && is_positive_finite(h) => w * h,
            _ => 0.0,
        }
    }

    /// Bruttowandfläche (Länge × Höhe). Ohne Höhe 0.
    pub fn wall_area(&self) -> f64 {
        self.length * self.height.unwrap_or(0.0)
    }

    /// Setzt die abgeleiteten Werte für Länge `length` (bereits skaliert).
    pub fn apply_length(&mut self, length: f64) {
        self.length = length;
        self.window_area = self.opening_area();
    }

    /// Nullt die abgeleiteten Werte (fehlende Kalibrierung).
    pub fn clear_derived(&mut self) {
        self.length = 0.0;
        self.window_area = 0.0;
    }

    /// Typ-Referenz des gewünschten Slots (mutabel)
    pub fn type_slot_mut(&mut self, slot: TypeSlot) -> &mut Option<TypeRef> {
        match slot {
            TypeSlot::Wall => &mut self.wall_type,
            TypeSlot::Window => &mut self.window_type,
            TypeSlot::Door => &mut self.door_type,
        }
    }
}

fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
