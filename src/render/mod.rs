//! Zeichnen der Render-Szene mit dem egui-Painter.
//!
//! Reihenfolge: Hintergrund, Hilfslinien, Kurven, Anker, Handles.

mod curve_renderer;
mod marker_renderer;

pub use crate::shared::RenderScene;
use curve_renderer::CurveRenderer;
use marker_renderer::MarkerRenderer;

/// Gemeinsamer Kontext für die Sub-Renderer eines Frames.
pub(crate) struct RenderContext<'a> {
    pub scene: &'a RenderScene,
    /// Linke obere Ecke des Canvas in egui-Koordinaten
    pub origin: egui::Pos2,
}

impl RenderContext<'_> {
    /// Editor-Koordinaten → egui-Bildschirmposition.
    pub fn to_screen(&self, world: glam::Vec2) -> egui::Pos2 {
        let screen = self.scene.viewport.world_to_screen(world);
        self.origin + egui::vec2(screen.x, screen.y)
    }
}

/// Konvertiert eine RGBA-Farbe (sRGB, 0..1) aus den Optionen in eine egui-Farbe.
pub(crate) fn to_color32(rgba: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = rgba.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Haupt-Renderer für den Bezier-Pfad.
///
/// Zustandslos: jeder Frame wird vollständig aus der `RenderScene` gezeichnet.
#[derive(Debug, Default)]
pub struct Renderer {
    curve_renderer: CurveRenderer,
    marker_renderer: MarkerRenderer,
}

impl Renderer {
    /// Erstellt einen neuen Renderer
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut alle Shapes für die Szene innerhalb von `rect`.
    pub fn scene_shapes(&self, scene: &RenderScene, rect: egui::Rect) -> Vec<egui::Shape> {
        let ctx = RenderContext {
            scene,
            origin: rect.min,
        };

        let mut shapes = vec![egui::Shape::rect_filled(
            rect,
            0.0,
            to_color32(scene.options.background_color),
        )];
        self.curve_renderer.construction_lines(&ctx, &mut shapes);
        self.curve_renderer.curves(&ctx, &mut shapes);
        self.marker_renderer.markers(&ctx, &mut shapes);
        shapes
    }

    /// Rendert die komplette Szene in den Painter.
    pub fn render_scene(&self, painter: &egui::Painter, scene: &RenderScene) {
        let shapes = self.scene_shapes(scene, painter.clip_rect());
        log::trace!("{} Shapes für {} Marker", shapes.len(), scene.markers.len());
        painter.extend(shapes);
    }
}
