//! Core-Domänentypen: Nodes, Handles, Pfad, Picker und Geometrie.

pub mod geometry;
/// Node mit Anker und zwei symmetrischen Handles
pub mod node;
pub mod path;
pub mod picker;
pub mod viewport;

pub use geometry::{cubic_bezier, distance, mirror, sample_curve, CurveSamples};
pub use node::{ControlPointKind, Handle, Node, Selection};
pub use path::{Path, DEFAULT_HANDLE_OFFSET};
pub use picker::{closest, hit_test, pick, PickFilter};
pub use viewport::Viewport2D;
