//! Umrechnung zwischen Screen- und Editor-Koordinaten.

use glam::Vec2;

/// Editor-Koordinatensystem eines Viewports.
///
/// Ursprung unten links, Y nach oben (Screen: Ursprung oben links, Y nach unten).
/// Eine Einheit entspricht einem logischen Pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport2D {
    /// Größe des Viewports in logischen Pixeln
    pub size: Vec2,
}

impl Viewport2D {
    /// Erstellt einen Viewport der gegebenen Größe.
    pub fn new(size: Vec2) -> Self {
        Self { size }
    }

    /// Konvertiert Screen-Koordinaten (relativ zum Viewport) zu Welt-Koordinaten.
    pub fn screen_to_world(&self, screen_pos: Vec2) -> Vec2 {
        Vec2::new(screen_pos.x, self.size.y - screen_pos.y)
    }

    /// Konvertiert Welt-Koordinaten zu Screen-Koordinaten (relativ zum Viewport).
    pub fn world_to_screen(&self, world_pos: Vec2) -> Vec2 {
        Vec2::new(world_pos.x, self.size.y - world_pos.y)
    }
}

impl Default for Viewport2D {
    fn default() -> Self {
        Self::new(Vec2::new(1000.0, 1000.0))
    }
}
