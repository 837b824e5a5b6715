use crate::issues::bulk::BulkAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyHandler;

impl KeyHandler {
    pub fn handle_normal_mode_key(key_event: KeyEvent) -> NormalModeAction {
        match key_event.code {
            KeyCode::Char('q') => NormalModeAction::Quit,
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                NormalModeAction::Quit
            }
            KeyCode::Esc => NormalModeAction::DeselectAll,
            KeyCode::Up | KeyCode::Char('k') => NormalModeAction::MoveCursorUp,
            KeyCode::Down | KeyCode::Char('j') => NormalModeAction::MoveCursorDown,
            KeyCode::Char(' ') if key_event.modifiers.contains(KeyModifiers::SHIFT) => {
                NormalModeAction::RangeToggle
            }
            KeyCode::Char(' ') | KeyCode::Char('x') => NormalModeAction::ToggleSelect,
            KeyCode::Char('X') => NormalModeAction::RangeToggle,
            KeyCode::Char('a') => NormalModeAction::ToggleSelectPage,
            KeyCode::Char('A') => NormalModeAction::ToggleSelectAllInQuery,
            KeyCode::Char('n') | KeyCode::PageDown => NormalModeAction::NextPage,
            KeyCode::Char('p') | KeyCode::PageUp => NormalModeAction::PreviousPage,
            KeyCode::Char('L') => NormalModeAction::LoadMore,
            KeyCode::Char('/') => NormalModeAction::EnterSearchMode,
            KeyCode::Char('r') => NormalModeAction::Bulk(BulkAction::Resolve),
            KeyCode::Char('u') => NormalModeAction::Bulk(BulkAction::Unresolve),
            KeyCode::Char('i') => NormalModeAction::Bulk(BulkAction::Ignore),
            KeyCode::Char('d') => NormalModeAction::Bulk(BulkAction::Delete),
            KeyCode::Char('?') => NormalModeAction::ToggleHelpMode,
            _ => NormalModeAction::None,
        }
    }

    pub fn handle_help_mode_key(key_event: KeyEvent) -> HelpModeAction {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => {
                HelpModeAction::ExitHelpMode
            }
            _ => HelpModeAction::None,
        }
    }

    pub fn handle_search_mode_key(key_event: KeyEvent) -> SearchModeAction {
        match key_event.code {
            KeyCode::Esc => SearchModeAction::CancelSearch,
            KeyCode::Enter => SearchModeAction::ConfirmSearch,
            KeyCode::Backspace => SearchModeAction::Backspace,
            KeyCode::Char(c) => SearchModeAction::InsertChar(c),
            _ => SearchModeAction::None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum NormalModeAction {
    None,
    Quit,
    DeselectAll,
    MoveCursorUp,
    MoveCursorDown,
    ToggleSelect,
    RangeToggle,
    ToggleSelectPage,
    ToggleSelectAllInQuery,
    NextPage,
    PreviousPage,
    LoadMore,
    EnterSearchMode,
    Bulk(BulkAction),
    ToggleHelpMode,
}

#[derive(Debug, PartialEq)]
pub enum HelpModeAction {
    None,
    ExitHelpMode,
}

#[derive(Debug, PartialEq)]
pub enum SearchModeAction {
    None,
    CancelSearch,
    ConfirmSearch,
    Backspace,
    InsertChar(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_keys() {
        assert_eq!(
            KeyHandler::handle_normal_mode_key(KeyEvent::from(KeyCode::Char('x'))),
            NormalModeAction::ToggleSelect
        );
        assert_eq!(
            KeyHandler::handle_normal_mode_key(KeyEvent::from(KeyCode::Char('X'))),
            NormalModeAction::RangeToggle
        );
        assert_eq!(
            KeyHandler::handle_normal_mode_key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::SHIFT)),
            NormalModeAction::RangeToggle
        );
        assert_eq!(
            KeyHandler::handle_normal_mode_key(KeyEvent::from(KeyCode::Esc)),
            NormalModeAction::DeselectAll
        );
    }

    #[test]
    fn test_bulk_keys() {
        assert_eq!(
            KeyHandler::handle_normal_mode_key(KeyEvent::from(KeyCode::Char('r'))),
            NormalModeAction::Bulk(BulkAction::Resolve)
        );
        assert_eq!(
            KeyHandler::handle_normal_mode_key(KeyEvent::from(KeyCode::Char('d'))),
            NormalModeAction::Bulk(BulkAction::Delete)
        );
    }

    #[test]
    fn test_ctrl_c_quits() {
        assert_eq!(
            KeyHandler::handle_normal_mode_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            NormalModeAction::Quit
        );
    }

    #[test]
    fn test_search_mode_keys() {
        assert_eq!(
            KeyHandler::handle_search_mode_key(KeyEvent::from(KeyCode::Char('a'))),
            SearchModeAction::InsertChar('a')
        );
        assert_eq!(
            KeyHandler::handle_search_mode_key(KeyEvent::from(KeyCode::Enter)),
            SearchModeAction::ConfirmSearch
        );
    }
}
