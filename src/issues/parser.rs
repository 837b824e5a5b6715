use super::models::{Issue, IssueList, IssueStatus};
use anyhow::{Context, Result, bail};
use std::collections::HashMap;
use std::fs;

pub fn parse_issue_file(file_path: &str) -> Result<IssueList> {
    let content = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read issue file: {}", file_path))?;

    parse_issues(&content, file_path)
        .with_context(|| format!("Failed to parse issue file: {}", file_path))
}

pub fn parse_issues(content: &str, file_path: &str) -> Result<IssueList> {
    let mut issue_list = IssueList::new(file_path.to_string());
    let mut in_yaml_frontmatter = false;
    let mut project: Option<String> = None;
    let mut seen: HashMap<String, usize> = HashMap::new();

    for (line_number, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        // Skip YAML frontmatter
        if trimmed == "---" {
            in_yaml_frontmatter = !in_yaml_frontmatter;
            continue;
        }
        if in_yaml_frontmatter || trimmed.is_empty() {
            continue;
        }

        if let Some(heading) = extract_heading_content(trimmed) {
            project = Some(heading);
            continue;
        }

        let Some((status, id, title)) = extract_issue(trimmed) else {
            continue;
        };

        if let Some(first_line) = seen.insert(id.clone(), line_number) {
            bail!(
                "duplicate issue id '{}' on lines {} and {}",
                id,
                first_line + 1,
                line_number + 1
            );
        }

        issue_list.add_issue(Issue::new(id, title, status, project.clone()));
    }

    Ok(issue_list)
}

fn extract_heading_content(line: &str) -> Option<String> {
    let level = line.chars().take_while(|&ch| ch == '#').count();
    if level == 0 {
        return None;
    }

    let content = line[level..].trim();
    if content.is_empty() {
        None
    } else {
        Some(content.to_string())
    }
}

fn extract_issue(line: &str) -> Option<(IssueStatus, String, String)> {
    let rest = line.strip_prefix("- [")?;
    let mut chars = rest.chars();
    let status = IssueStatus::from_marker(chars.next()?)?;
    let body = chars.as_str().strip_prefix(']')?.trim();

    let mut parts = body.splitn(2, char::is_whitespace);
    let id = parts.next().filter(|id| !id.is_empty())?;
    let title = parts.next().unwrap_or("").trim();

    Some((status, id.to_string(), title.to_string()))
}
