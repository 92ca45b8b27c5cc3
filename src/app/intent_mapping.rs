//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, EditorSession};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Die Flankenerkennung der Maustaste vergleicht den gemeldeten Pegel mit
/// dem Pegel des vorherigen Frames. `RefreshHover` kommt immer zuletzt,
/// damit das Hover-Ziel gegen den bereits mutierten Pfad bestimmt wird.
pub fn map_intent_to_commands(session: &EditorSession, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ClearPathRequested => vec![AppCommand::ClearPath],
        AppIntent::FrameSampled {
            world_pos,
            primary_down,
        } => {
            let was_down = session.interaction.primary_down;
            let mut commands = Vec::with_capacity(2);

            match (was_down, primary_down) {
                (false, true) => commands.push(AppCommand::PrimaryPressed { world_pos }),
                (true, true) if session.interaction.drag.is_dragging() => {
                    commands.push(AppCommand::DragTo { world_pos })
                }
                (true, false) => commands.push(AppCommand::PrimaryReleased),
                _ => {}
            }

            commands.push(AppCommand::RefreshHover { world_pos });
            commands
        }
    }
}
