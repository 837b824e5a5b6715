use super::models::{Issue, IssueStatus};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueQuery {
    raw: String,
    status: Option<IssueStatus>,
    project: Option<String>,
    terms: Vec<String>,
}

impl IssueQuery {
    pub fn parse(raw: &str) -> Self {
        let mut query = Self {
            raw: raw.trim().to_string(),
            ..Self::default()
        };

        for token in raw.split_whitespace() {
            if let Some(value) = token.strip_prefix("is:") {
                if let Some(status) = IssueStatus::from_name(value) {
                    query.status = Some(status);
                    continue;
                }
            }
            if let Some(value) = token.strip_prefix("project:") {
                if !value.is_empty() {
                    query.project = Some(value.to_lowercase());
                    continue;
                }
            }
            query.terms.push(token.to_lowercase());
        }

        query
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn matches(&self, issue: &Issue) -> bool {
        if let Some(status) = self.status {
            if issue.status != status {
                return false;
            }
        }

        if let Some(project) = &self.project {
            match &issue.project {
                Some(issue_project) if issue_project.to_lowercase() == *project => {}
                _ => return false,
            }
        }

        if self.terms.is_empty() {
            return true;
        }

        let id = issue.id.to_lowercase();
        let title = issue.title.to_lowercase();
        self.terms
            .iter()
            .all(|term| id.contains(term.as_str()) || title.contains(term.as_str()))
    }
}
