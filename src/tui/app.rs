use crate::issues::bulk::{BulkAction, BulkActionExecutor, BulkTarget};
use crate::issues::feed::IssueFeed;
use crate::issues::models::{Issue, IssueList};
use crate::selection::{SelectionAction, SelectionError, SelectionStore};
use crate::tui::handlers::{HelpModeAction, KeyHandler, NormalModeAction, SearchModeAction};
use crate::tui::search::SearchState;
use anyhow::Result;
use crossterm::event::KeyEvent;
use tracing::{debug, info, warn};

pub struct App {
    pub issue_list: IssueList,
    pub feed: IssueFeed,
    pub selection: SelectionStore,
    pub search: SearchState,
    pub cursor: usize,
    pub should_quit: bool,
    pub help_mode: bool,
    pub status_message: Option<String>,
    visible_ids: Vec<String>,
}

impl App {
    pub fn new(issue_list: IssueList, query: &str, page_size: usize) -> Self {
        let feed = IssueFeed::new(query, page_size);
        let visible_ids = feed.visible_ids(&issue_list);
        let mut selection = SelectionStore::new();
        selection.mount(visible_ids.iter().cloned());

        Self {
            issue_list,
            feed,
            selection,
            search: SearchState::new(),
            cursor: 0,
            should_quit: false,
            help_mode: false,
            status_message: None,
            visible_ids,
        }
    }

    pub fn visible_ids(&self) -> &[String] {
        &self.visible_ids
    }

    pub fn visible_issues(&self) -> Vec<&Issue> {
        self.feed.visible_issues(&self.issue_list)
    }

    pub fn matching_count(&self) -> usize {
        self.feed.matching_count(&self.issue_list)
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        if self.help_mode {
            if KeyHandler::handle_help_mode_key(key_event) == HelpModeAction::ExitHelpMode {
                self.help_mode = false;
            }
            return Ok(());
        }

        if self.search.search_mode {
            return self.handle_search_mode_key(key_event);
        }

        self.status_message = None;
        match KeyHandler::handle_normal_mode_key(key_event) {
            NormalModeAction::None => {}
            NormalModeAction::Quit => self.should_quit = true,
            NormalModeAction::DeselectAll => {
                self.selection.dispatch(SelectionAction::DeselectAll)?;
            }
            NormalModeAction::MoveCursorUp => self.move_cursor_up(),
            NormalModeAction::MoveCursorDown => self.move_cursor_down(),
            NormalModeAction::ToggleSelect => self.toggle_select()?,
            NormalModeAction::RangeToggle => self.range_toggle()?,
            NormalModeAction::ToggleSelectPage => {
                self.selection.dispatch(SelectionAction::ToggleSelectAllVisible)?;
            }
            NormalModeAction::ToggleSelectAllInQuery => self.toggle_select_all_in_query()?,
            NormalModeAction::NextPage => {
                if self.feed.next_page(&self.issue_list) {
                    self.cursor = 0;
                    self.sync_visible()?;
                }
            }
            NormalModeAction::PreviousPage => {
                if self.feed.previous_page() {
                    self.cursor = 0;
                    self.sync_visible()?;
                }
            }
            NormalModeAction::LoadMore => {
                if self.feed.load_more(&self.issue_list) {
                    self.sync_visible()?;
                } else {
                    self.status_message = Some("No more issues to load".to_string());
                }
            }
            NormalModeAction::EnterSearchMode => {
                let current_query = self.feed.query().as_str().to_string();
                self.search.enter_search_mode(&current_query, &self.issue_list);
            }
            NormalModeAction::Bulk(action) => self.run_bulk_action(action)?,
            NormalModeAction::ToggleHelpMode => self.help_mode = true,
        }
        Ok(())
    }

    fn handle_search_mode_key(&mut self, key_event: KeyEvent) -> Result<()> {
        match KeyHandler::handle_search_mode_key(key_event) {
            SearchModeAction::None => {}
            SearchModeAction::CancelSearch => self.search.cancel_search(),
            SearchModeAction::ConfirmSearch => {
                let query = self.search.confirm_search();
                self.apply_query(&query)?;
            }
            SearchModeAction::Backspace => self.search.backspace(&self.issue_list),
            SearchModeAction::InsertChar(c) => self.search.insert_char(c, &self.issue_list),
        }
        Ok(())
    }

    pub fn apply_query(&mut self, query: &str) -> Result<(), SelectionError> {
        debug!(query, "query changed");
        let previous = self.feed.query().clone();
        self.feed.set_query(query);
        self.cursor = 0;
        // The query flag was confirmed for the old query only, even when the
        // first page looks the same under the new one.
        if *self.feed.query() != previous {
            self.selection
                .dispatch(SelectionAction::SetAllInQuerySelected(false))?;
        }
        self.sync_visible()
    }

    fn sync_visible(&mut self) -> Result<(), SelectionError> {
        let visible_ids = self.feed.visible_ids(&self.issue_list);
        if visible_ids != self.visible_ids {
            self.visible_ids = visible_ids.clone();
            self.selection
                .dispatch(SelectionAction::ReconcileVisibleIds(visible_ids))?;
        }
        self.cursor = self.cursor.min(self.visible_ids.len().saturating_sub(1));
        Ok(())
    }

    fn cursor_id(&self) -> Option<String> {
        self.visible_ids.get(self.cursor).cloned()
    }

    fn move_cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    fn move_cursor_down(&mut self) {
        if self.cursor + 1 < self.visible_ids.len() {
            self.cursor += 1;
        }
    }

    fn toggle_select(&mut self) -> Result<(), SelectionError> {
        if let Some(id) = self.cursor_id() {
            self.selection.dispatch(SelectionAction::ToggleSelect(id))?;
        }
        Ok(())
    }

    fn range_toggle(&mut self) -> Result<(), SelectionError> {
        if let Some(id) = self.cursor_id() {
            self.selection.dispatch(SelectionAction::ShiftToggleSelect {
                id,
                visible_ids: self.visible_ids.clone(),
            })?;
        }
        Ok(())
    }

    fn toggle_select_all_in_query(&mut self) -> Result<(), SelectionError> {
        let summary = self.selection.summary()?;
        if summary.all_in_query_selected {
            self.selection
                .dispatch(SelectionAction::SetAllInQuerySelected(false))?;
        } else if summary.page_selected {
            self.selection
                .dispatch(SelectionAction::SetAllInQuerySelected(true))?;
        } else {
            self.status_message = Some("Select the whole page (a) before selecting every match".to_string());
        }
        Ok(())
    }

    fn run_bulk_action(&mut self, action: BulkAction) -> Result<()> {
        let Some(target) = BulkTarget::from_summary(self.selection.summary()?) else {
            self.status_message = Some("No issues selected".to_string());
            return Ok(());
        };

        match self.issue_list.execute(action, &target, self.feed.query()) {
            Ok(affected) => {
                info!(action = action.verb(), affected, "bulk action finished");
                self.status_message = Some(format!("{} {} issue(s)", capitalize(action.verb()), affected));
            }
            Err(e) => {
                warn!(error = %e, "bulk action could not be saved");
                self.status_message = Some(format!("Failed to save: {}", e));
            }
        }

        self.feed.clamp(&self.issue_list);
        self.sync_visible()?;
        self.selection.dispatch(SelectionAction::DeselectAll)?;
        Ok(())
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
