//! UI-Komponenten: Input-Handling, Keyboard-Shortcuts und Status-Bar.

pub mod input;
mod keyboard;
pub mod status;

pub use input::InputState;
pub use status::render_status_bar;
