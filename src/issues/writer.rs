use super::models::IssueList;
use anyhow::{Context, Result};
use std::fs;
use tracing::info;

pub fn write_issue_file(issue_list: &IssueList) -> Result<()> {
    let content = serialize_issue_list(issue_list);
    fs::write(&issue_list.file_path, content)
        .with_context(|| format!("Failed to write issue file: {}", issue_list.file_path))?;
    info!(path = %issue_list.file_path, issues = issue_list.issues.len(), "issue file written");
    Ok(())
}

pub fn serialize_issue_list(issue_list: &IssueList) -> String {
    let mut lines = Vec::new();
    let mut current_project: Option<&str> = None;

    for issue in &issue_list.issues {
        let project = issue.project.as_deref();
        if project != current_project {
            if let Some(name) = project {
                if !lines.is_empty() {
                    lines.push(String::new());
                }
                lines.push(format!("# {}", name));
            }
            current_project = project;
        }

        let line = if issue.title.is_empty() {
            format!("- [{}] {}", issue.status.marker(), issue.id)
        } else {
            format!("- [{}] {} {}", issue.status.marker(), issue.id, issue.title)
        };
        lines.push(line);
    }

    lines.join("\n") + "\n"
}
