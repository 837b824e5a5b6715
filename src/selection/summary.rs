use super::state::SelectionState;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSummary {
    pub selected_ids: Vec<String>,
    pub any_selected: bool,
    pub multi_selected: bool,
    pub page_selected: bool,
    pub all_in_query_selected: bool,
}

impl SelectionSummary {
    pub fn from_state(state: &SelectionState) -> Self {
        let selected_ids: Vec<String> = state
            .records()
            .filter(|(_, selected)| *selected)
            .map(|(id, _)| id.to_string())
            .collect();
        let any_selected = !selected_ids.is_empty();

        Self {
            any_selected,
            multi_selected: selected_ids.len() > 1,
            page_selected: any_selected && selected_ids.len() == state.len(),
            all_in_query_selected: state.all_in_query_selected(),
            selected_ids,
        }
    }

    pub fn selected_count(&self) -> usize {
        self.selected_ids.len()
    }
}
