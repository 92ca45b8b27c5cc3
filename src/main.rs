//! Spline Builder.
//!
//! Interaktiver Editor für stückweise kubische Bezier-Pfade mit egui.

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use spline_builder::cli::Cli;
use spline_builder::{
    render, ui, AppIntent, EditorController, EditorOptions, EditorSession, RenderScene,
    Viewport2D,
};

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Usage-Fehler beenden den Prozess vor dem Fenster
        let cli = Cli::parse();

        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Spline Builder v{} startet...", env!("CARGO_PKG_VERSION"));

        let editor_options = match &cli.config {
            Some(path) => EditorOptions::try_load_from_file(path)?,
            None => EditorOptions::load_from_file(&EditorOptions::config_path()),
        };

        let window_size = cli.window_size();
        log::info!("Fenster: {}x{}", window_size.width, window_size.height);
        let inner_size = window_size.as_vec2();

        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([inner_size.x, inner_size.y])
                .with_title("Spline Builder"),
            renderer: eframe::Renderer::Wgpu,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Spline Builder",
            native_options,
            Box::new(move |_cc| Ok(Box::new(EditorApp::new(editor_options)))),
        )
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("Editor-Fenster konnte nicht gestartet werden")
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    session: EditorSession,
    controller: EditorController,
    renderer: render::Renderer,
    input: ui::InputState,
    /// Szene des letzten Frames für die Status-Bar
    last_scene: Option<RenderScene>,
}

impl EditorApp {
    fn new(options: EditorOptions) -> Self {
        Self {
            session: EditorSession::with_options(options),
            controller: EditorController::new(),
            renderer: render::Renderer::new(),
            input: ui::InputState::new(),
            last_scene: None,
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(scene) = &self.last_scene {
            ui::render_status_bar(ctx, &self.session, scene);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
                let viewport = Viewport2D::new(glam::Vec2::new(rect.width(), rect.height()));

                let events = self.input.collect_viewport_events(ui, &response, viewport);
                self.process_events(events);

                let scene = self.controller.build_render_scene(&self.session, viewport);
                self.renderer.render_scene(&ui.painter_at(rect), &scene);
                self.last_scene = Some(scene);
            });

        self.maybe_request_repaint(ctx);
    }
}

impl EditorApp {
    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            self.controller.handle_intent(&mut self.session, event);
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context) {
        if self.session.interaction.drag.is_dragging() || ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }
    }
}
