//! Builder für Render-Szenen aus der EditorSession.

use crate::app::EditorSession;
use crate::core::geometry::polyline_length;
use crate::core::{sample_curve, ControlPointKind, Selection, Viewport2D};
use crate::shared::{ControlPointMarker, RenderScene};
use glam::Vec2;

/// Baut eine RenderScene aus der aktuellen EditorSession.
pub fn build(session: &EditorSession, viewport: Viewport2D) -> RenderScene {
    let path = &session.path;
    let hover = session.interaction.hover;
    let drag = session.interaction.drag.selection();
    let segment_count = session.options.curve_segments;

    let mut construction_lines = Vec::new();
    let mut markers = Vec::with_capacity(path.len() * 3);

    for (index, node) in path.nodes().iter().enumerate() {
        for (kind, position) in node.control_points() {
            if kind != ControlPointKind::Anchor {
                construction_lines.push((node.anchor, position));
            }
            let selection = Selection::new(index, kind);
            markers.push(ControlPointMarker {
                position,
                selection,
                hovered: hover == Some(selection),
                dragged: drag == Some(selection),
            });
        }
    }

    let curves: Vec<Vec<Vec2>> = path
        .segments()
        .map(|(a, b)| sample_curve(a, b, segment_count).collect())
        .collect();

    // Abtastung endet vor t = 1, der End-Anker schließt jedes Segment
    let curve_length = curves
        .iter()
        .zip(path.segments())
        .map(|(samples, (_, b))| {
            polyline_length(samples)
                + samples.last().map_or(0.0, |&p| (b.anchor - p).length())
        })
        .sum();

    RenderScene {
        viewport,
        construction_lines,
        curves,
        markers,
        hover,
        drag,
        curve_length,
        options: session.options.clone(),
    }
}
