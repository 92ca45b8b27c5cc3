//! Zentrale Konfiguration für den Spline Builder.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::Context;
use glam::Vec2;
use serde::{Deserialize, Serialize};

// ── Picking ─────────────────────────────────────────────────────────

/// Hit-Test-Radius in logischen Pixeln.
pub const PICK_RADIUS: f32 = 20.0;

// ── Pfad ────────────────────────────────────────────────────────────

/// Handle-Versatz beim Platzieren eines neuen Nodes.
pub const HANDLE_OFFSET: Vec2 = crate::core::DEFAULT_HANDLE_OFFSET;
/// Anzahl der Abtastpunkte pro Kurvensegment.
pub const CURVE_SEGMENTS: usize = 200;

// ── Rendering ──────────────────────────────────────────────────────

/// Kantenlänge der Node- und Handle-Marker.
pub const POINT_SIZE: f32 = 20.0;
/// Linienstärke der Kurve.
pub const CURVE_WIDTH: f32 = 5.0;
/// Hintergrundfarbe (RGBA: Weiß).
pub const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Kurvenfarbe (RGBA: Schwarz).
pub const CURVE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Farbe der gestrichelten Hilfslinien Anker → Handle.
pub const CONSTRUCTION_LINE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Anker-Farbe.
pub const NODE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Anker-Farbe unter dem Zeiger (RGBA: Grau).
pub const NODE_COLOR_HOVER: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
/// Handle-Farbe (RGBA: Blau).
pub const HANDLE_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Handle-Farbe unter dem Zeiger (RGBA: Hellblau).
pub const HANDLE_COLOR_HOVER: [f32; 4] = [0.5, 0.5, 1.0, 1.0];
/// Farbe des gerade gezogenen Markers (RGBA: Orange).
pub const DRAG_COLOR: [f32; 4] = [1.0, 0.5, 0.1, 1.0];

/// Dateiname der Optionen-Datei neben der Binary.
pub const CONFIG_FILE_NAME: &str = "spline_builder.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `spline_builder.toml` neben der Binary gelesen.
///
/// Fehlende Felder fallen auf die Standardwerte zurück.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Picking ─────────────────────────────────────────────────
    /// Hit-Test-Radius in logischen Pixeln
    pub pick_radius: f32,

    // ── Pfad ────────────────────────────────────────────────────
    /// Handle-Versatz für neu platzierte Nodes
    pub handle_offset: Vec2,
    /// Abtastpunkte pro Segment
    pub curve_segments: usize,

    // ── Darstellung ─────────────────────────────────────────────
    pub point_size: f32,
    pub curve_width: f32,
    pub background_color: [f32; 4],
    pub curve_color: [f32; 4],
    pub construction_line_color: [f32; 4],
    pub node_color: [f32; 4],
    pub node_color_hover: [f32; 4],
    pub handle_color: [f32; 4],
    pub handle_color_hover: [f32; 4],
    pub drag_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            pick_radius: PICK_RADIUS,

            handle_offset: HANDLE_OFFSET,
            curve_segments: CURVE_SEGMENTS,

            point_size: POINT_SIZE,
            curve_width: CURVE_WIDTH,
            background_color: BACKGROUND_COLOR,
            curve_color: CURVE_COLOR,
            construction_line_color: CONSTRUCTION_LINE_COLOR,
            node_color: NODE_COLOR,
            node_color_hover: NODE_COLOR_HOVER,
            handle_color: HANDLE_COLOR,
            handle_color_hover: HANDLE_COLOR_HOVER,
            drag_color: DRAG_COLOR,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei und meldet jeden Fehler.
    pub fn try_load_from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Optionen-Datei nicht lesbar: {}", path.display()))?;
        let options = toml::from_str(&content)
            .with_context(|| format!("Optionen-Datei fehlerhaft: {}", path.display()))?;
        Ok(options)
    }

    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        if !path.exists() {
            log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
            return Self::default();
        }
        match Self::try_load_from_file(path) {
            Ok(opts) => {
                log::info!("Optionen geladen aus: {}", path.display());
                opts
            }
            Err(e) => {
                log::warn!("{:#}, verwende Standardwerte", e);
                Self::default()
            }
        }
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("spline-builder"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(CONFIG_FILE_NAME)
    }
}
