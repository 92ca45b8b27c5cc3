//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.
//! Alle Positionen liegen in Editor-Koordinaten (Ursprung unten links).

use super::options::EditorOptions;
use crate::core::{ControlPointKind, Selection, Viewport2D};
use glam::Vec2;

/// Ein zu zeichnender Anker oder aktiver Handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPointMarker {
    pub position: Vec2,
    pub selection: Selection,
    /// Liegt unter dem Zeiger
    pub hovered: bool,
    /// Wird gerade gezogen
    pub dragged: bool,
}

impl ControlPointMarker {
    /// `true` für Anker, `false` für Handles.
    pub fn is_anchor(&self) -> bool {
        self.selection.kind == ControlPointKind::Anchor
    }
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Viewport für die Umrechnung in Screen-Koordinaten
    pub viewport: Viewport2D,
    /// Hilfslinien Anker → aktiver Handle
    pub construction_lines: Vec<(Vec2, Vec2)>,
    /// Abgetastete Polylinie pro Segment (aufeinanderfolgendes Node-Paar)
    pub curves: Vec<Vec<Vec2>>,
    /// Marker in Zeichenreihenfolge (Node für Node: Anker, A, B)
    pub markers: Vec<ControlPointMarker>,
    /// Hover-Ziel dieses Frames
    pub hover: Option<Selection>,
    /// Aktuelles Drag-Ziel
    pub drag: Option<Selection>,
    /// Näherung der Gesamtlänge aller Segmente
    pub curve_length: f32,
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob überhaupt etwas zu zeichnen ist.
    pub fn has_path(&self) -> bool {
        !self.markers.is_empty()
    }
}
