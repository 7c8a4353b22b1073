//! Translate terminal input into app actions.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::core::app::AppAction;

/// Lines moved per mouse wheel notch.
const WHEEL_STEP: u16 = 3;

/// Map a key press to an action. `page_height` is the transcript viewport
/// height used for PageUp/PageDown.
pub fn action_for_key(key: &KeyEvent, page_height: u16) -> Option<AppAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('c') if ctrl => Some(AppAction::Quit),
        KeyCode::Char('l') if ctrl => Some(AppAction::ClearChat),
        KeyCode::Char('u') if ctrl => Some(AppAction::ClearInput),
        KeyCode::Esc => Some(AppAction::Quit),
        KeyCode::Enter => Some(AppAction::SubmitInput),
        KeyCode::Backspace => Some(AppAction::Backspace),
        KeyCode::Up => Some(AppAction::ScrollUp { lines: 1 }),
        KeyCode::Down => Some(AppAction::ScrollDown { lines: 1 }),
        KeyCode::PageUp => Some(AppAction::ScrollUp {
            lines: page_height.max(1),
        }),
        KeyCode::PageDown => Some(AppAction::ScrollDown {
            lines: page_height.max(1),
        }),
        KeyCode::Home => Some(AppAction::ScrollToTop),
        KeyCode::End => Some(AppAction::ScrollToBottom),
        // AltGr arrives as Ctrl+Alt on Windows.
        KeyCode::Char(ch) if ctrl == alt => Some(AppAction::InsertChar { ch }),
        _ => None,
    }
}

pub fn action_for_mouse(mouse: &MouseEvent) -> Option<AppAction> {
    match mouse.kind {
        MouseEventKind::ScrollUp => Some(AppAction::ScrollUp { lines: WHEEL_STEP }),
        MouseEventKind::ScrollDown => Some(AppAction::ScrollDown { lines: WHEEL_STEP }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::KeyEventKind;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn control_chords_map_to_commands() {
        assert!(matches!(
            action_for_key(&key(KeyCode::Char('c'), KeyModifiers::CONTROL), 10),
            Some(AppAction::Quit)
        ));
        assert!(matches!(
            action_for_key(&key(KeyCode::Char('l'), KeyModifiers::CONTROL), 10),
            Some(AppAction::ClearChat)
        ));
        assert!(matches!(
            action_for_key(&key(KeyCode::Char('u'), KeyModifiers::CONTROL), 10),
            Some(AppAction::ClearInput)
        ));
    }

    #[test]
    fn plain_characters_are_typed() {
        assert!(matches!(
            action_for_key(&key(KeyCode::Char('L'), KeyModifiers::SHIFT), 10),
            Some(AppAction::InsertChar { ch: 'L' })
        ));
        assert!(action_for_key(&key(KeyCode::Char('x'), KeyModifiers::ALT), 10).is_none());
    }

    #[test]
    fn altgr_characters_are_typed() {
        let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
        for ch in ['@', '{', '}', '[', ']', '\\', '|'] {
            assert!(matches!(
                action_for_key(&key(KeyCode::Char(ch), altgr), 10),
                Some(AppAction::InsertChar { ch: typed }) if typed == ch
            ));
        }
        assert!(action_for_key(&key(KeyCode::Char('x'), KeyModifiers::CONTROL), 10).is_none());
    }

    #[test]
    fn paging_uses_viewport_height() {
        assert!(matches!(
            action_for_key(&key(KeyCode::PageUp, KeyModifiers::NONE), 17),
            Some(AppAction::ScrollUp { lines: 17 })
        ));
        assert!(matches!(
            action_for_key(&key(KeyCode::PageDown, KeyModifiers::NONE), 0),
            Some(AppAction::ScrollDown { lines: 1 })
        ));
    }

    #[test]
    fn enter_submits() {
        let mut enter = key(KeyCode::Enter, KeyModifiers::NONE);
        enter.kind = KeyEventKind::Press;
        assert!(matches!(
            action_for_key(&enter, 10),
            Some(AppAction::SubmitInput)
        ));
    }

    #[test]
    fn mouse_wheel_scrolls() {
        let wheel = |kind| MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert!(matches!(
            action_for_mouse(&wheel(MouseEventKind::ScrollUp)),
            Some(AppAction::ScrollUp { lines: WHEEL_STEP })
        ));
        assert!(matches!(
            action_for_mouse(&wheel(MouseEventKind::ScrollDown)),
            Some(AppAction::ScrollDown { lines: WHEEL_STEP })
        ));
        assert!(action_for_mouse(&wheel(MouseEventKind::Moved)).is_none());
    }
}
