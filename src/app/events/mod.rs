//! App-Intent und App-Command Events.

mod command;
mod intent;

pub use command::AppCommand;
pub use intent::AppIntent;

/// Numerisches Feld einer Kante (Eingabe als Freitext)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeField {
    /// Wandhöhe (Länge)
    Height,
    /// Fensterbreite (Länge)
    WindowWidth,
    /// Fensterhöhe (Länge)
    WindowHeight,
    /// Türanzahl (Stück)
    DoorQuantity,
}

/// Numerisches Feld eines Raums (Eingabe als Freitext)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceField {
    /// Durchschnittliche Deckenhöhe (Länge)
    AverageCeilingHeight,
    /// Oberlichtfläche (Fläche)
    SkylightArea,
    /// Manuelle Deckenfläche (Fläche)
    CeilingManualArea,
}
