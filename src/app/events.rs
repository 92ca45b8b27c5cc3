//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use glam::Vec2;

/// Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppIntent {
    /// Einmal pro Frame: Zeigerposition (Editor-Koordinaten) und Maustasten-Pegel
    FrameSampled { world_pos: Vec2, primary_down: bool },
    /// Löschtaste gedrückt (Flanke)
    ClearPathRequested,
}

/// Mutierende Commands, ausgeführt vom Controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppCommand {
    /// Maustaste wurde gedrückt: Drag starten oder Node platzieren
    PrimaryPressed { world_pos: Vec2 },
    /// Gezogenes Element an die Zeigerposition setzen
    DragTo { world_pos: Vec2 },
    /// Maustaste losgelassen: Drag beenden
    PrimaryReleased,
    /// Hover-Ziel gegen den aktuellen Pfad neu bestimmen
    RefreshHover { world_pos: Vec2 },
    /// Pfad leeren
    ClearPath,
}
