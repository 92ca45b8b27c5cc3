//! Editor Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, EditorSession};
use crate::core::Viewport2D;
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf der EditorSession.
///
/// Einziger Ort, an dem der Pfad mutiert wird.
#[derive(Debug, Default)]
pub struct EditorController;

impl EditorController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, session: &mut EditorSession, intent: AppIntent) {
        let commands = self.map_intent_to_commands(session, intent);
        for command in commands {
            self.handle_command(session, command);
        }
    }

    fn map_intent_to_commands(
        &self,
        session: &EditorSession,
        intent: AppIntent,
    ) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(session, intent)
    }

    /// Führt mutierende Commands auf der EditorSession aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(&mut self, session: &mut EditorSession, command: AppCommand) {
        session.command_log.record(&command);
        use super::handlers;

        match command {
            // === Zeiger ===
            AppCommand::PrimaryPressed { world_pos } => {
                handlers::pointer::press(session, world_pos)
            }
            AppCommand::DragTo { world_pos } => handlers::pointer::drag_to(session, world_pos),
            AppCommand::PrimaryReleased => handlers::pointer::release(session),
            AppCommand::RefreshHover { world_pos } => {
                handlers::pointer::refresh_hover(session, world_pos)
            }

            // === Editing ===
            AppCommand::ClearPath => handlers::editing::clear_path(session),
        }
    }

    /// Baut die Render-Szene aus der aktuellen EditorSession.
    pub fn build_render_scene(&self, session: &EditorSession, viewport: Viewport2D) -> RenderScene {
        render_scene::build(session, viewport)
    }
}
