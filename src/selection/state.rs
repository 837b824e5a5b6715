use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub(super) records: HashMap<String, bool>,
    // First-seen order, for deterministic iteration.
    pub(super) order: Vec<String>,
    pub(super) last_selected: Option<String>,
    pub(super) all_in_query_selected: bool,
}

impl SelectionState {
    pub fn new<I, S>(visible_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = Self::default();
        for id in visible_ids {
            state.insert(id.into(), false);
        }
        state
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.records.get(id).copied().unwrap_or(false)
    }

    pub fn records(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.order
            .iter()
            .map(|id| (id.as_str(), self.records.get(id).copied().unwrap_or(false)))
    }

    pub fn last_selected(&self) -> Option<&str> {
        self.last_selected.as_deref()
    }

    pub fn all_in_query_selected(&self) -> bool {
        self.all_in_query_selected
    }

    /// An empty record set is never "all selected".
    pub fn are_all_selected(&self) -> bool {
        !self.records.is_empty() && self.records.values().all(|selected| *selected)
    }

    pub(super) fn value(&self, id: &str) -> Option<bool> {
        self.records.get(id).copied()
    }

    pub(super) fn insert(&mut self, id: String, value: bool) {
        if self.records.contains_key(&id) {
            return;
        }
        self.records.insert(id.clone(), value);
        self.order.push(id);
    }

    pub(super) fn set(&mut self, id: &str, value: bool) {
        if let Some(selected) = self.records.get_mut(id) {
            *selected = value;
        }
    }

    pub(super) fn set_all(&mut self, value: bool) {
        for selected in self.records.values_mut() {
            *selected = value;
        }
    }

    pub(super) fn retain_visible(&mut self, visible: &HashSet<&str>) {
        self.records.retain(|id, _| visible.contains(id.as_str()));
        self.order.retain(|id| visible.contains(id.as_str()));
    }
}
