//! Use-Case: Anker oder Handles mit der Maus ziehen.

use crate::app::state::DragState;
use crate::app::EditorSession;
use crate::core::{ControlPointKind, Selection};
use glam::Vec2;

/// Greift das Element unter dem Zeiger. Der Pfad bleibt in diesem Frame unverändert.
pub fn begin_drag(session: &mut EditorSession, selection: Selection) {
    session.interaction.drag = DragState::Dragging(selection);
    log::debug!("Drag gestartet: {:?}", selection);
}

/// Setzt das gezogene Element auf `world_pos`.
///
/// Anker verschieben den ganzen Node starr, Handles spiegeln ihr Gegenstück.
pub fn drag_to(session: &mut EditorSession, world_pos: Vec2) {
    let Some(selection) = session.interaction.drag.selection() else {
        return;
    };

    match selection.kind {
        ControlPointKind::Anchor => session.path.move_node(selection.index, world_pos),
        kind => session.path.move_handle(selection.index, kind, world_pos),
    }
}

/// Beendet den Drag unabhängig vom aktuellen Zustand.
pub fn end_drag(session: &mut EditorSession) {
    if let Some(selection) = session.interaction.drag.selection() {
        log::debug!("Drag beendet: {:?}", selection);
    }
    session.interaction.drag = DragState::Idle;
}
