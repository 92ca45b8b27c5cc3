//! Use-Case: Hover-Ziel einmal pro Frame bestimmen.

use crate::app::EditorSession;
use crate::core::pick;
use glam::Vec2;

/// Berechnet das Element unter dem Zeiger und legt es in der Session ab.
pub fn refresh_hover(session: &mut EditorSession, world_pos: Vec2) {
    session.interaction.hover = pick(&session.path, world_pos, session.options.pick_radius);
}
