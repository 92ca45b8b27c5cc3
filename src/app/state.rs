//! Editor-Session: zentrale Datenhaltung ohne globalen Zustand.

use super::CommandLog;
use crate::core::{Path, Selection};
use crate::shared::EditorOptions;

/// Zustand der Drag-Interaktion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// Kein Element wird gezogen
    #[default]
    Idle,
    /// Das Element wurde beim Drücken gegriffen und folgt dem Zeiger
    Dragging(Selection),
}

impl DragState {
    /// Das gezogene Element, falls vorhanden.
    pub fn selection(&self) -> Option<Selection> {
        match self {
            Self::Idle => None,
            Self::Dragging(selection) => Some(*selection),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }
}

/// Per-Frame-Interaktionszustand.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    /// Maustasten-Pegel des letzten Frames (für Flankenerkennung)
    pub primary_down: bool,
    pub drag: DragState,
    /// Einmal pro Frame gegen den aktuellen Pfad berechnet
    pub hover: Option<Selection>,
}

/// Explizites Session-Objekt: Pfad, Interaktion, Optionen und Command-Log.
///
/// Nur der `EditorController` mutiert den Pfad.
#[derive(Debug)]
pub struct EditorSession {
    pub path: Path,
    pub interaction: InteractionState,
    /// Laufzeit-Optionen (Radius, Abtastung, Farben)
    pub options: EditorOptions,
    /// Protokoll aller ausgeführten Commands
    pub command_log: CommandLog,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    /// Erstellt eine leere Session mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt eine leere Session; der Handle-Versatz kommt aus den Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            path: Path::with_handle_offset(options.handle_offset),
            interaction: InteractionState::default(),
            options,
            command_log: CommandLog::new(),
        }
    }

    /// Anzahl der Nodes im Pfad.
    pub fn node_count(&self) -> usize {
        self.path.len()
    }
}
