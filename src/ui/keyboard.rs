//! Keyboard-Shortcuts für den Canvas.
//!
//! Verarbeitet Tastendrücke und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Taste zum Leeren des Pfads.
pub(super) const CLEAR_KEY: egui::Key = egui::Key::E;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// Nur echte Druck-Flanken zählen, Tastenwiederholungen werden ignoriert.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    ui.input(|i| intents_from_events(&i.events))
}

fn intents_from_events(events: &[egui::Event]) -> Vec<AppIntent> {
    let clear_pressed = events.iter().any(|event| {
        matches!(
            event,
            egui::Event::Key {
                key: CLEAR_KEY,
                pressed: true,
                repeat: false,
                ..
            }
        )
    });

    if clear_pressed {
        vec![AppIntent::ClearPathRequested]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(key: egui::Key, pressed: bool, repeat: bool) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn e_press_requests_clear() {
        let intents = intents_from_events(&[key_event(egui::Key::E, true, false)]);
        assert_eq!(intents, vec![AppIntent::ClearPathRequested]);
    }

    #[test]
    fn repeat_release_and_other_keys_are_ignored() {
        assert!(intents_from_events(&[key_event(egui::Key::E, true, true)]).is_empty());
        assert!(intents_from_events(&[key_event(egui::Key::E, false, false)]).is_empty());
        assert!(intents_from_events(&[key_event(egui::Key::Q, true, false)]).is_empty());
    }
}
