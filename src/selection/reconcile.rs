use super::state::SelectionState;
use std::collections::HashSet;

/// Aligns the record keys with a new visible-id sequence.
///
/// Returns `None` when the key set already matches, so the caller can keep the
/// existing state. New ids inherit `true` only when every surviving record was
/// selected; an empty survivor set fills with `false`.
pub fn reconcile(state: &SelectionState, visible_ids: &[String]) -> Option<SelectionState> {
    let visible: HashSet<&str> = visible_ids.iter().map(String::as_str).collect();

    let has_stale = state.order.iter().any(|id| !visible.contains(id.as_str()));
    let has_fresh = visible_ids.iter().any(|id| !state.contains(id));
    if !has_stale && !has_fresh {
        return None;
    }

    let mut next = state.clone();
    if has_stale {
        next.retain_visible(&visible);
    }

    let fill_value = next.are_all_selected();
    for id in visible_ids {
        next.insert(id.clone(), fill_value);
    }

    next.last_selected = None;
    next.all_in_query_selected = false;
    Some(next)
}
