//! Kommandozeile: optionale Fenstergröße `[W H]`.

use clap::Parser;
use std::path::PathBuf;

/// Standard-Fensterbreite und -höhe in logischen Pixeln.
pub const DEFAULT_WINDOW_SIZE: u32 = 1000;

#[derive(Debug, Parser)]
#[command(
    name = "spline-builder",
    about = "Interactive editor for piecewise cubic Bezier paths",
    version
)]
pub struct Cli {
    /// Window width in pixels (requires HEIGHT).
    #[arg(
        value_name = "WIDTH",
        requires = "height",
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub width: Option<u32>,

    /// Window height in pixels.
    #[arg(
        value_name = "HEIGHT",
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub height: Option<u32>,

    /// Options file (default: spline_builder.toml next to the executable).
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Fenstergröße in logischen Pixeln.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_SIZE,
            height: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl WindowSize {
    /// Größe als `[Breite, Höhe]` für den Viewport-Builder.
    pub fn as_vec2(&self) -> glam::Vec2 {
        glam::Vec2::new(self.width as f32, self.height as f32)
    }
}

impl Cli {
    /// Gewünschte Fenstergröße; ohne Argumente 1000×1000.
    pub fn window_size(&self) -> WindowSize {
        match (self.width, self.height) {
            (Some(width), Some(height)) => WindowSize { width, height },
            _ => WindowSize::default(),
        }
    }
}
