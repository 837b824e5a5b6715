use super::models::{Issue, IssueList, IssueStatus};
use super::query::IssueQuery;
use super::writer;
use crate::selection::SelectionSummary;
use anyhow::Result;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    Resolve,
    Unresolve,
    Ignore,
    Delete,
}

impl BulkAction {
    pub fn verb(self) -> &'static str {
        match self {
            Self::Resolve => "resolved",
            Self::Unresolve => "unresolved",
            Self::Ignore => "ignored",
            Self::Delete => "deleted",
        }
    }

    fn target_status(self) -> Option<IssueStatus> {
        match self {
            Self::Resolve => Some(IssueStatus::Resolved),
            Self::Unresolve => Some(IssueStatus::Unresolved),
            Self::Ignore => Some(IssueStatus::Ignored),
            Self::Delete => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkTarget {
    MatchingQuery,
    Ids(Vec<String>),
}

impl BulkTarget {
    pub fn from_summary(summary: &SelectionSummary) -> Option<Self> {
        if summary.all_in_query_selected {
            Some(Self::MatchingQuery)
        } else if summary.any_selected {
            Some(Self::Ids(summary.selected_ids.clone()))
        } else {
            None
        }
    }

    fn includes(&self, issue: &Issue, query: &IssueQuery) -> bool {
        match self {
            Self::MatchingQuery => query.matches(issue),
            Self::Ids(ids) => ids.iter().any(|id| *id == issue.id),
        }
    }
}

pub trait BulkActionExecutor {
    fn execute(&mut self, action: BulkAction, target: &BulkTarget, query: &IssueQuery) -> Result<usize>;
}

impl BulkActionExecutor for IssueList {
    fn execute(&mut self, action: BulkAction, target: &BulkTarget, query: &IssueQuery) -> Result<usize> {
        let affected = apply_bulk_action(self, action, target, query);
        info!(
            action = action.verb(),
            affected,
            by_query = matches!(target, BulkTarget::MatchingQuery),
            query = query.as_str(),
            "bulk action applied"
        );
        if affected > 0 {
            writer::write_issue_file(self)?;
        }
        Ok(affected)
    }
}

pub fn apply_bulk_action(
    issue_list: &mut IssueList,
    action: BulkAction,
    target: &BulkTarget,
    query: &IssueQuery,
) -> usize {
    match action.target_status() {
        Some(status) => {
            let mut affected = 0;
            for issue in issue_list.issues.iter_mut() {
                if target.includes(issue, query) {
                    issue.status = status;
                    affected += 1;
                }
            }
            affected
        }
        None => {
            let before = issue_list.issues.len();
            issue_list.issues.retain(|issue| !target.includes(issue, query));
            before - issue_list.issues.len()
        }
    }
}
