//! Status-Bar am unteren Bildschirmrand.

use crate::app::EditorSession;
use crate::core::{ControlPointKind, Selection};
use crate::shared::RenderScene;

/// Kurzbeschreibung eines Kontrollpunkts für die Anzeige.
fn describe(selection: Selection) -> String {
    let kind = match selection.kind {
        ControlPointKind::Anchor => "Anchor",
        ControlPointKind::HandleA => "Handle A",
        ControlPointKind::HandleB => "Handle B",
    };
    format!("Node {} {}", selection.index, kind)
}

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, session: &EditorSession, scene: &RenderScene) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Nodes: {} | Length: {:.1}",
                session.node_count(),
                scene.curve_length
            ));

            ui.separator();

            match scene.drag {
                Some(selection) => ui.label(format!("Dragging: {}", describe(selection))),
                None => ui.label(format!(
                    "Hover: {}",
                    scene.hover.map_or_else(|| "-".to_string(), describe)
                )),
            };

            ui.separator();

            ui.label("Click: place/drag | E: clear");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_names_node_and_kind() {
        assert_eq!(
            describe(Selection::new(3, ControlPointKind::HandleB)),
            "Node 3 Handle B"
        );
        assert_eq!(
            describe(Selection::new(0, ControlPointKind::Anchor)),
            "Node 0 Anchor"
        );
    }
}
