#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    ReconcileVisibleIds(Vec<String>),
    ToggleSelect(String),
    ShiftToggleSelect {
        id: String,
        visible_ids: Vec<String>,
    },
    ToggleSelectAllVisible,
    DeselectAll,
    SetAllInQuerySelected(bool),
}

impl SelectionAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ReconcileVisibleIds(_) => "reconcile_visible_ids",
            Self::ToggleSelect(_) => "toggle_select",
            Self::ShiftToggleSelect { .. } => "shift_toggle_select",
            Self::ToggleSelectAllVisible => "toggle_select_all_visible",
            Self::DeselectAll => "deselect_all",
            Self::SetAllInQuerySelected(_) => "set_all_in_query_selected",
        }
    }
}
