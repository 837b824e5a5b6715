#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueStatus {
    Unresolved,
    Resolved,
    Ignored,
}

impl IssueStatus {
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            ' ' => Some(Self::Unresolved),
            'x' | 'X' => Some(Self::Resolved),
            '-' => Some(Self::Ignored),
            _ => None,
        }
    }

    pub fn marker(self) -> char {
        match self {
            Self::Unresolved => ' ',
            Self::Resolved => 'x',
            Self::Ignored => '-',
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "unresolved" => Some(Self::Unresolved),
            "resolved" => Some(Self::Resolved),
            "ignored" => Some(Self::Ignored),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub id: String,
    pub title: String,
    pub status: IssueStatus,
    pub project: Option<String>,
}

impl Issue {
    pub fn new(id: String, title: String, status: IssueStatus, project: Option<String>) -> Self {
        Self {
            id,
            title,
            status,
            project,
        }
    }
}

#[derive(Debug, Clone)]
pub struct IssueList {
    pub issues: Vec<Issue>,
    pub file_path: String,
}

impl IssueList {
    pub fn new(file_path: String) -> Self {
        Self {
            issues: Vec::new(),
            file_path,
        }
    }

    pub fn add_issue(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub fn count_with_status(&self, status: IssueStatus) -> usize {
        self.issues.iter().filter(|issue| issue.status == status).count()
    }
}
