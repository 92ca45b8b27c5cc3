//! Use-Case: Nodes platzieren und den Pfad leeren.

use crate::app::EditorSession;
use crate::core::{closest, Path, PickFilter};
use glam::Vec2;

/// Wohin ein neuer Node angehängt wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementTarget {
    /// Leerer Pfad: erster Node
    First,
    /// Hinter den letzten Node
    End,
    /// Vor den ersten Node
    Start,
}

/// Bestimmt das Pfad-Ende, an das ein Klick bei `world_pos` anhängt.
///
/// Bei einem einzelnen Node wird immer hinten angehängt. Sonst entscheidet
/// der nähere der beiden End-Anker; bei Gleichstand gewinnt der Anfang.
pub fn placement_target(path: &Path, world_pos: Vec2) -> PlacementTarget {
    match path.len() {
        0 => PlacementTarget::First,
        1 => PlacementTarget::End,
        _ => match closest(path, world_pos, PickFilter::END_ANCHORS) {
            Some(selection) if Some(selection.index) == path.last_index() => PlacementTarget::End,
            _ => PlacementTarget::Start,
        },
    }
}

/// Platziert einen neuen Node an `world_pos` und gibt dessen Index zurück.
pub fn place_node(session: &mut EditorSession, world_pos: Vec2) -> usize {
    let target = placement_target(&session.path, world_pos);
    let index = match target {
        PlacementTarget::First => {
            session.path.create_first(world_pos);
            0
        }
        PlacementTarget::End => {
            session.path.append_end(world_pos);
            session.path.len() - 1
        }
        PlacementTarget::Start => {
            session.path.append_start(world_pos);
            0
        }
    };

    log::info!("Node placed at {}, {}", world_pos.x, world_pos.y);
    log::debug!("Platzierung {:?}, Pfad hat {} Nodes", target, session.path.len());
    index
}

/// Leert den Pfad und beendet einen laufenden Drag.
///
/// Der Maustasten-Pegel bleibt stehen: eine noch gehaltene Taste
/// platziert im nächsten Frame keinen Node.
pub fn clear_path(session: &mut EditorSession) {
    let removed = session.path.len();
    session.path.clear();
    session.interaction.drag = Default::default();
    session.interaction.hover = None;
    log::info!("Pfad geleert ({} Nodes entfernt)", removed);
}
