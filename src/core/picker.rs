//! Picker: nächster Kontrollpunkt, Hit-Test und Hover-Pick.
//!
//! Lineare Suche über alle Nodes. Bei Gleichstand gewinnt der zuerst
//! gescannte Punkt (niedrigerer Index, innerhalb eines Nodes Anker vor A vor B).

use super::geometry::distance;
use super::{ControlPointKind, Path, Selection};
use glam::Vec2;

/// Filter für `closest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PickFilter {
    /// Nur ersten und letzten Node betrachten
    pub ends_only: bool,
    /// Nur Anker betrachten, keine Handles
    pub nodes_only: bool,
}

impl PickFilter {
    /// Alle Nodes, Anker und aktive Handles.
    pub const ALL: Self = Self {
        ends_only: false,
        nodes_only: false,
    };
    /// Nur die Anker der beiden Pfad-Enden.
    pub const END_ANCHORS: Self = Self {
        ends_only: true,
        nodes_only: true,
    };
}

/// Findet den Kontrollpunkt mit der kleinsten Distanz zu `query`.
///
/// Deaktivierte Handles werden nie betrachtet. Leerer Pfad → `None`.
pub fn closest(path: &Path, query: Vec2, filter: PickFilter) -> Option<Selection> {
    let last_index = path.last_index()?;
    let mut best: Option<(Selection, f32)> = None;

    for (index, node) in path.nodes().iter().enumerate() {
        if filter.ends_only && index != 0 && index != last_index {
            continue;
        }
        for (kind, pos) in node.control_points() {
            if filter.nodes_only && kind != ControlPointKind::Anchor {
                continue;
            }
            let dist = distance(query, pos);
            let is_closer = match best {
                Some((_, best_dist)) => dist < best_dist,
                None => true,
            };
            if is_closer {
                best = Some((Selection::new(index, kind), dist));
            }
        }
    }

    best.map(|(selection, _)| selection)
}

/// `true`, wenn `point` strikt innerhalb von `radius` um `query` liegt.
pub fn hit_test(query: Vec2, point: Vec2, radius: f32) -> bool {
    distance(query, point) < radius
}

/// Ermittelt den Kontrollpunkt unter dem Zeiger.
///
/// Erst der nächste Punkt, dann der Hit-Test gegen genau diesen Punkt.
pub fn pick(path: &Path, pointer: Vec2, radius: f32) -> Option<Selection> {
    let selection = closest(path, pointer, PickFilter::ALL)?;
    let pos = path
        .node(selection.index)?
        .control_point(selection.kind)?;
    hit_test(pointer, pos, radius).then_some(selection)
}
