//! Handler für Pfad-Editing.

use crate::app::use_cases;
use crate::app::EditorSession;

/// Leert den Pfad.
pub fn clear_path(session: &mut EditorSession) {
    use_cases::editing::clear_path(session);
}
