//! Der Bézier-Pfad: geordnete Nodes mit invariantenerhaltenden Mutationen.
//!
//! Einfügen geschieht nur vorne oder hinten. Ein angehängter End-Node hat sein
//! nach außen zeigendes Handle deaktiviert, bis auf dieser Seite ein Nachbar
//! dazukommt. Der mit `create_first` angelegte Node behält Handle A aktiv.
//! Innere Nodes haben immer beide Handles aktiv.

use super::geometry::mirror;
use super::{ControlPointKind, Handle, Node};
use glam::Vec2;

/// Standard-Versatz des ersten Handles eines neuen Nodes (nach oben).
pub const DEFAULT_HANDLE_OFFSET: Vec2 = Vec2::new(0.0, 50.0);

/// Offener Pfad aus kubischen Segmenten.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    nodes: Vec<Node>,
    /// Versatz des Handles beim Platzieren eines Nodes
    handle_offset: Vec2,
}

impl Default for Path {
    fn default() -> Self {
        Self::new()
    }
}

impl Path {
    /// Erstellt einen leeren Pfad mit Standard-Handle-Versatz.
    pub fn new() -> Self {
        Self::with_handle_offset(DEFAULT_HANDLE_OFFSET)
    }

    /// Erstellt einen leeren Pfad mit eigenem Handle-Versatz.
    pub fn with_handle_offset(handle_offset: Vec2) -> Self {
        Self {
            nodes: Vec::new(),
            handle_offset,
        }
    }

    pub fn handle_offset(&self) -> Vec2 {
        self.handle_offset
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Alle Nodes in Pfad-Reihenfolge.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn first(&self) -> Option<&Node> {
        self.nodes.first()
    }

    pub fn last(&self) -> Option<&Node> {
        self.nodes.last()
    }

    /// Index des letzten Nodes (`None` bei leerem Pfad).
    pub fn last_index(&self) -> Option<usize> {
        self.nodes.len().checked_sub(1)
    }

    /// Aufeinanderfolgende Node-Paare, je ein Kurvensegment.
    pub fn segments(&self) -> impl Iterator<Item = (&Node, &Node)> + '_ {
        self.nodes.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Entfernt alle Nodes.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Legt den ersten Node eines leeren Pfads an.
    ///
    /// Handle A liegt um den Standard-Versatz verschoben und ist aktiv,
    /// Handle B liegt gespiegelt und ist deaktiviert.
    pub fn create_first(&mut self, anchor: Vec2) {
        debug_assert!(self.nodes.is_empty(), "create_first auf nicht-leerem Pfad");
        self.nodes.push(self.node_facing_back(anchor));
    }

    /// Hängt einen Node hinten an und verbindet ihn mit dem bisherigen Ende.
    pub fn append_end(&mut self, anchor: Vec2) {
        let node = self.node_facing_back(anchor);
        if let Some(last) = self.nodes.last_mut() {
            last.handle_b.enable();
        }
        self.nodes.push(node);
    }

    /// Fügt einen Node vorne ein und verbindet ihn mit dem bisherigen Anfang.
    pub fn append_start(&mut self, anchor: Vec2) {
        let handle_b = anchor + self.handle_offset;
        let node = Node {
            anchor,
            handle_a: Handle::Disabled(mirror(handle_b, anchor)),
            handle_b: Handle::Enabled(handle_b),
        };
        if let Some(first) = self.nodes.first_mut() {
            first.handle_a.enable();
        }
        self.nodes.insert(0, node);
    }

    /// Verschiebt einen Node samt beiden Handles (starre Translation).
    pub fn move_node(&mut self, index: usize, new_anchor: Vec2) {
        let node = &mut self.nodes[index];
        let delta = new_anchor - node.anchor;
        node.anchor = new_anchor;
        node.handle_a.set_position(node.handle_a.position() + delta);
        node.handle_b.set_position(node.handle_b.position() + delta);
    }

    /// Setzt ein Handle und spiegelt das Geschwister-Handle am Anker.
    ///
    /// `which == Anchor` verschiebt stattdessen den Node.
    pub fn move_handle(&mut self, index: usize, which: ControlPointKind, new_pos: Vec2) {
        if which == ControlPointKind::Anchor {
            self.move_node(index, new_pos);
            return;
        }

        let node = &mut self.nodes[index];
        let mirrored = mirror(new_pos, node.anchor);
        let (moved, sibling) = match which {
            ControlPointKind::HandleB => (&mut node.handle_b, &mut node.handle_a),
            _ => (&mut node.handle_a, &mut node.handle_b),
        };
        moved.set_position(new_pos);
        sibling.set_position(mirrored);
    }

    fn node_facing_back(&self, anchor: Vec2) -> Node {
        let handle_a = anchor + self.handle_offset;
        Node {
            anchor,
            handle_a: Handle::Enabled(handle_a),
            handle_b: Handle::Disabled(mirror(handle_a, anchor)),
        }
    }
}
