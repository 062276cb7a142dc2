//! Core-Domänentypen: Geometrie, Maßstab, Räume, Decken, Etagen, Projekt.

pub mod ceiling;
pub mod edge;
pub mod floor;
/// Zustandslose Punkt-/Segment-/Polygon-Mathematik
pub mod geometry;
pub mod numeric_input;
pub mod project;
pub mod scale;
pub mod space;
pub mod takeoff;
pub mod validation;

pub use ceiling::{Ceiling, CeilingSource};
pub use edge::{CompassDirection, Edge, TypeRef, TypeSlot};
pub use floor::Floor;
pub use geometry::Point;
pub use project::{Project, ProjectError};
pub use scale::{LengthUnit, Scale};
pub use space::{DirectionalTotals, Space, SpaceId};
pub use takeoff::{build_takeoff, ExportError, InvalidSpace, SpaceTakeoff, TakeoffReport};
pub use validation::ValidationIssue;
