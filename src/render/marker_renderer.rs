//! Anker als Quadrate, Handles als Kreise.

use super::{to_color32, RenderContext};
use crate::shared::ControlPointMarker;

#[derive(Debug, Default)]
pub(crate) struct MarkerRenderer;

impl MarkerRenderer {
    /// Zeichnet erst alle Anker, dann alle Handles darüber.
    pub fn markers(&self, ctx: &RenderContext<'_>, shapes: &mut Vec<egui::Shape>) {
        let size = ctx.scene.options.point_size;
        let (anchors, handles): (Vec<&ControlPointMarker>, Vec<&ControlPointMarker>) =
            ctx.scene.markers.iter().partition(|m| m.is_anchor());

        for marker in anchors {
            let rect = egui::Rect::from_center_size(
                ctx.to_screen(marker.position),
                egui::vec2(size, size),
            );
            shapes.push(egui::Shape::rect_filled(rect, 0.0, self.color(ctx, marker)));
        }

        for marker in handles {
            shapes.push(egui::Shape::circle_filled(
                ctx.to_screen(marker.position),
                size * 0.5,
                self.color(ctx, marker),
            ));
        }
    }

    fn color(&self, ctx: &RenderContext<'_>, marker: &ControlPointMarker) -> egui::Color32 {
        let options = &ctx.scene.options;
        let rgba = match (marker.dragged, marker.hovered, marker.is_anchor()) {
            (true, _, _) => options.drag_color,
            (false, true, true) => options.node_color_hover,
            (false, true, false) => options.handle_color_hover,
            (false, false, true) => options.node_color,
            (false, false, false) => options.handle_color,
        };
        to_color32(rgba)
    }
}
