//! Application-Layer: Controller, Session, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Editor-Session und Interaktionszustand
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::EditorController;
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_render_scene;
pub use state::{DragState, EditorSession, InteractionState};
