use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextSection,
    PrevSection,
    CarouselNext,
    CarouselPrev,
    JumpToFirst,
    JumpToLast,
    PendingG, // First 'g' press, waiting for second 'g'
    /// Jump to a dot indicator (zero-based)
    GoToIndicator(usize),
    OpenLink,
    OpenContact,
    ShowHelp,
    ExitMode,
    // Contact form editing
    NextField,
    PrevField,
    Submit,
    InputChar(char),
    Backspace,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    if app.mode == Mode::Help {
        // Any key closes help
        return Action::ExitMode;
    }

    if app.is_input_mode() {
        return handle_form_key(key);
    }

    if let (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) = (key.code, key.modifiers) {
        return Action::GoToIndicator(c as usize - '1' as usize);
    }

    let binding = KeyBinding::new(key.code, key.modifiers);

    if keymap.is_g_prefix(&binding) {
        return if app.pending_key == Some('g') {
            keymap.get_pending_g_action().cloned().unwrap_or(Action::None)
        } else {
            Action::PendingG
        };
    }

    keymap.get(&binding).cloned().unwrap_or(Action::None)
}

/// Keys while the contact form has focus
fn handle_form_key(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::ExitMode,
        (KeyCode::Enter, _) => Action::Submit,
        (KeyCode::Tab, _) | (KeyCode::Down, _) => Action::NextField,
        (KeyCode::BackTab, _) | (KeyCode::Up, _) => Action::PrevField,
        (KeyCode::Backspace, _) => Action::Backspace,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::InputChar(c),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use folio_core::content::{Portfolio, Section};
    use folio_core::AppConfig;

    use crate::theme::Theme;

    fn app() -> App {
        App::new(
            Arc::new(AppConfig::default()),
            Theme::default(),
            Portfolio::bundled().unwrap(),
            120,
        )
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_mode_bindings() {
        let app = app();
        let keymap = Keymap::default();
        assert_eq!(handle_key_event(press(KeyCode::Char('l')), &app, &keymap), Action::CarouselNext);
        assert_eq!(handle_key_event(press(KeyCode::Left), &app, &keymap), Action::CarouselPrev);
        assert_eq!(handle_key_event(press(KeyCode::Tab), &app, &keymap), Action::NextSection);
        assert_eq!(handle_key_event(press(KeyCode::Char('x')), &app, &keymap), Action::None);
    }

    #[test]
    fn test_digits_jump_to_indicator() {
        let app = app();
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(press(KeyCode::Char('3')), &app, &keymap),
            Action::GoToIndicator(2)
        );
    }

    #[test]
    fn test_gg_sequence() {
        let mut app = app();
        let keymap = Keymap::default();
        assert_eq!(handle_key_event(press(KeyCode::Char('g')), &app, &keymap), Action::PendingG);
        app.pending_key = Some('g');
        assert_eq!(handle_key_event(press(KeyCode::Char('g')), &app, &keymap), Action::JumpToFirst);
    }

    #[test]
    fn test_contact_section_captures_typing() {
        let mut app = app();
        app.select_section(Section::Contact);
        let keymap = Keymap::default();
        assert_eq!(handle_key_event(press(KeyCode::Char('q')), &app, &keymap), Action::InputChar('q'));
        assert_eq!(handle_key_event(press(KeyCode::Tab), &app, &keymap), Action::NextField);
        assert_eq!(handle_key_event(press(KeyCode::Enter), &app, &keymap), Action::Submit);
        assert_eq!(handle_key_event(press(KeyCode::Esc), &app, &keymap), Action::ExitMode);
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let mut app = app();
        app.mode = Mode::Help;
        let keymap = Keymap::default();
        assert_eq!(handle_key_event(press(KeyCode::Char('l')), &app, &keymap), Action::ExitMode);
    }
}
