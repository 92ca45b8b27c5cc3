//! Handler für Maustaste, Drag und Hover.

use crate::app::use_cases;
use crate::app::EditorSession;
use crate::core::pick;
use glam::Vec2;

/// Maustaste gedrückt: Element unter dem Zeiger greifen oder Node platzieren.
pub fn press(session: &mut EditorSession, world_pos: Vec2) {
    session.interaction.primary_down = true;

    match pick(&session.path, world_pos, session.options.pick_radius) {
        Some(selection) => use_cases::drag::begin_drag(session, selection),
        None => {
            use_cases::editing::place_node(session, world_pos);
        }
    }
}

/// Gezogenes Element folgt dem Zeiger.
pub fn drag_to(session: &mut EditorSession, world_pos: Vec2) {
    use_cases::drag::drag_to(session, world_pos);
}

/// Maustaste losgelassen.
pub fn release(session: &mut EditorSession) {
    session.interaction.primary_down = false;
    use_cases::drag::end_drag(session);
}

/// Hover-Ziel für diesen Frame neu bestimmen.
pub fn refresh_hover(session: &mut EditorSession, world_pos: Vec2) {
    use_cases::hover::refresh_hover(session, world_pos);
}
