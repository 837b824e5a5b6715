use super::action::SelectionAction;
use super::error::SelectionError;
use super::reducer::reduce;
use super::state::SelectionState;
use super::summary::SelectionSummary;
use std::rc::Rc;
use tracing::{debug, trace};

struct Mounted {
    state: Rc<SelectionState>,
    summary: SelectionSummary,
}

#[derive(Default)]
pub struct SelectionStore {
    mounted: Option<Mounted>,
    revision: u64,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount<I, S>(&mut self, visible_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let state = Rc::new(SelectionState::new(visible_ids));
        let summary = SelectionSummary::from_state(&state);
        debug!(records = state.len(), "selection mounted");
        self.mounted = Some(Mounted { state, summary });
        self.revision += 1;
    }

    pub fn unmount(&mut self) {
        if self.mounted.take().is_some() {
            debug!("selection unmounted");
            self.revision += 1;
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns whether the state changed.
    pub fn dispatch(&mut self, action: SelectionAction) -> Result<bool, SelectionError> {
        let mounted = self.mounted.as_mut().ok_or(SelectionError::NotMounted)?;

        let next = reduce(&mounted.state, &action);
        if Rc::ptr_eq(&next, &mounted.state) {
            trace!(action = action.name(), "selection unchanged");
            return Ok(false);
        }

        mounted.summary = SelectionSummary::from_state(&next);
        mounted.state = next;
        self.revision += 1;
        debug!(
            action = action.name(),
            selected = mounted.summary.selected_count(),
            all_in_query = mounted.summary.all_in_query_selected,
            revision = self.revision,
            "selection changed"
        );
        Ok(true)
    }

    pub fn state(&self) -> Result<&SelectionState, SelectionError> {
        self.mounted
            .as_ref()
            .map(|mounted| mounted.state.as_ref())
            .ok_or(SelectionError::NotMounted)
    }

    pub fn summary(&self) -> Result<&SelectionSummary, SelectionError> {
        self.mounted
            .as_ref()
            .map(|mounted| &mounted.summary)
            .ok_or(SelectionError::NotMounted)
    }
}
