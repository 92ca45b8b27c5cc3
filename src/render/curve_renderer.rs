//! Kurven-Polylinien und gestrichelte Hilfslinien.

use super::{to_color32, RenderContext};

/// Strichlänge der Hilfslinien in Pixeln.
const DASH_LENGTH: f32 = 6.0;
/// Lückenlänge der Hilfslinien in Pixeln.
const GAP_LENGTH: f32 = 2.0;
/// Linienstärke der Hilfslinien.
const CONSTRUCTION_LINE_WIDTH: f32 = 1.0;

#[derive(Debug, Default)]
pub(crate) struct CurveRenderer;

impl CurveRenderer {
    /// Gestrichelte Linien vom Anker zu jedem aktiven Handle.
    pub fn construction_lines(&self, ctx: &RenderContext<'_>, shapes: &mut Vec<egui::Shape>) {
        let stroke = egui::Stroke::new(
            CONSTRUCTION_LINE_WIDTH,
            to_color32(ctx.scene.options.construction_line_color),
        );
        for &(anchor, handle) in &ctx.scene.construction_lines {
            let points = [ctx.to_screen(anchor), ctx.to_screen(handle)];
            shapes.extend(egui::Shape::dashed_line(
                &points,
                stroke,
                DASH_LENGTH,
                GAP_LENGTH,
            ));
        }
    }

    /// Eine Polylinie pro Segment.
    pub fn curves(&self, ctx: &RenderContext<'_>, shapes: &mut Vec<egui::Shape>) {
        let options = &ctx.scene.options;
        let stroke = egui::Stroke::new(options.curve_width, to_color32(options.curve_color));
        for curve in &ctx.scene.curves {
            if curve.len() < 2 {
                continue;
            }
            let points: Vec<egui::Pos2> = curve.iter().map(|&p| ctx.to_screen(p)).collect();
            shapes.push(egui::Shape::line(points, stroke));
        }
    }
}
