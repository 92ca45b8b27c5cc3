//! Canvas-Input-Handling: Zeiger und Maustaste → AppIntent.

use super::keyboard;
use crate::app::AppIntent;
use crate::core::Viewport2D;
use glam::Vec2;

/// Verwaltet den Input-Zustand für den Canvas.
#[derive(Debug, Default)]
pub struct InputState {
    /// Letzte bekannte Zeigerposition in Editor-Koordinaten
    last_pointer: Vec2,
    /// Zuletzt gemeldeter Maustasten-Pegel
    primary_down: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt die Canvas-Events eines Frames aus egui-Input.
    ///
    /// Tasten-Intents kommen vor dem Frame-Sample. Genau ein
    /// `FrameSampled` pro Aufruf.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport: Viewport2D,
    ) -> Vec<AppIntent> {
        let mut events = keyboard::collect_keyboard_intents(ui);

        let rect = response.rect;
        let (latest_pos, raw_primary_down) =
            ui.input(|i| (i.pointer.latest_pos(), i.pointer.primary_down()));
        let on_canvas = latest_pos.is_some_and(|pos| rect.contains(pos));
        let local_pos = latest_pos.map(|pos| Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y));

        events.push(self.sample_frame(local_pos, on_canvas, raw_primary_down, viewport));
        events
    }

    /// Erzeugt das Frame-Sample aus Zeiger (relativ zum Canvas) und Tastenpegel.
    ///
    /// Ein Druck zählt nur, wenn er auf dem Canvas beginnt. Solange er
    /// gehalten wird, folgt die Position dem Zeiger auch außerhalb des
    /// Canvas. Sonst wird dort die letzte Position wiederverwendet.
    pub fn sample_frame(
        &mut self,
        local_pos: Option<Vec2>,
        on_canvas: bool,
        raw_primary_down: bool,
        viewport: Viewport2D,
    ) -> AppIntent {
        let on_canvas = on_canvas && local_pos.is_some();
        self.primary_down = raw_primary_down && (self.primary_down || on_canvas);

        if let Some(screen_pos) = local_pos.filter(|_| on_canvas || self.primary_down) {
            self.last_pointer = viewport.screen_to_world(screen_pos);
        }

        AppIntent::FrameSampled {
            world_pos: self.last_pointer,
            primary_down: self.primary_down,
        }
    }

    /// Letzte bekannte Zeigerposition in Editor-Koordinaten.
    pub fn last_pointer(&self) -> Vec2 {
        self.last_pointer
    }
}
