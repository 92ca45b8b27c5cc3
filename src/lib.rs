//! Spline Builder Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod cli;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppIntent, DragState, EditorController, EditorSession};
pub use core::{ControlPointKind, Handle, Node, Path, PickFilter, Selection, Viewport2D};
pub use shared::{EditorOptions, RenderScene};
