//! Node-Datentyp: Anker plus zwei symmetrische Tangenten-Handles.

use glam::Vec2;

/// Tangenten-Handle eines Nodes.
///
/// Auch ein deaktiviertes Handle behält seine Position: sie wird übernommen,
/// sobald der Node einen Nachbarn auf dieser Seite bekommt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Handle {
    /// Nimmt an Kurvenauswertung, Hit-Test und Darstellung teil
    Enabled(Vec2),
    /// Nur gespeicherte Position (äußeres Handle eines Pfad-Endes)
    Disabled(Vec2),
}

impl Handle {
    /// Position unabhängig vom Aktivierungszustand.
    pub fn position(&self) -> Vec2 {
        match self {
            Handle::Enabled(pos) | Handle::Disabled(pos) => *pos,
        }
    }

    /// Position, falls das Handle aktiv ist.
    pub fn enabled(&self) -> Option<Vec2> {
        match self {
            Handle::Enabled(pos) => Some(*pos),
            Handle::Disabled(_) => None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Handle::Enabled(_))
    }

    /// Aktiviert das Handle an seiner gespeicherten Position.
    pub fn enable(&mut self) {
        *self = Handle::Enabled(self.position());
    }

    /// Setzt die Position, der Aktivierungszustand bleibt erhalten.
    pub fn set_position(&mut self, pos: Vec2) {
        match self {
            Handle::Enabled(p) | Handle::Disabled(p) => *p = pos,
        }
    }
}

/// Welcher Punkt eines Nodes gemeint ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlPointKind {
    /// Der Node selbst
    Anchor,
    /// Handle Richtung Vorgänger
    HandleA,
    /// Handle Richtung Nachfolger
    HandleB,
}

/// Referenz auf einen Kontrollpunkt im Pfad (Hover oder Drag-Ziel).
///
/// Wird nie im Pfad gespeichert, sondern pro Frame neu ermittelt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    /// Index des Nodes in der Pfad-Reihenfolge
    pub index: usize,
    /// Gewählter Punkt innerhalb des Nodes
    pub kind: ControlPointKind,
}

impl Selection {
    pub fn new(index: usize, kind: ControlPointKind) -> Self {
        Self { index, kind }
    }
}

/// Vom Benutzer gesetzter Punkt, durch den der Pfad läuft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// Position des Ankers
    pub anchor: Vec2,
    /// Handle Richtung Vorgänger
    pub handle_a: Handle,
    /// Handle Richtung Nachfolger
    pub handle_b: Handle,
}

impl Node {
    /// Position eines auswählbaren Kontrollpunkts.
    ///
    /// Deaktivierte Handles liefern `None`.
    pub fn control_point(&self, kind: ControlPointKind) -> Option<Vec2> {
        match kind {
            ControlPointKind::Anchor => Some(self.anchor),
            ControlPointKind::HandleA => self.handle_a.enabled(),
            ControlPointKind::HandleB => self.handle_b.enabled(),
        }
    }

    /// Alle auswählbaren Kontrollpunkte in Scan-Reihenfolge (Anker, A, B).
    pub fn control_points(&self) -> impl Iterator<Item = (ControlPointKind, Vec2)> + '_ {
        [
            ControlPointKind::Anchor,
            ControlPointKind::HandleA,
            ControlPointKind::HandleB,
        ]
        .into_iter()
        .filter_map(move |kind| self.control_point(kind).map(|pos| (kind, pos)))
    }
}
