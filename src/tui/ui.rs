use crate::issues::models::IssueStatus;
use crate::selection::{SelectionState, SelectionSummary};
use crate::tui::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

pub fn draw(frame: &mut Frame, app: &App, selection: &SelectionState, summary: &SelectionSummary) {
    let banner = banner_text(app, summary);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(if banner.is_some() { 1 } else { 0 }),
            Constraint::Min(0), // Issue list
            Constraint::Length(3), // Footer
        ])
        .split(frame.size());

    draw_header(frame, chunks[0], app);
    if let Some(text) = banner {
        let banner = Paragraph::new(text).style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(banner, chunks[1]);
    }
    draw_issue_list(frame, chunks[2], app, selection, summary);
    draw_footer(frame, chunks[3], app, summary);

    if app.help_mode {
        draw_help_window(frame);
    }
}

fn banner_text(app: &App, summary: &SelectionSummary) -> Option<String> {
    let matching = app.matching_count();
    if summary.all_in_query_selected {
        Some(format!(
            " All {} issues matching this query are selected. Press A to select only this page.",
            matching
        ))
    } else if summary.page_selected && matching > summary.selected_count() {
        Some(format!(
            " {} issues on this page selected. Press A to select all {} issues that match this query.",
            summary.selected_count(),
            matching
        ))
    } else {
        None
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let header_text = format!(
        "{} | {} unresolved | query: {} | {} matching | page {}/{}",
        app.issue_list.file_path,
        app.issue_list.count_with_status(IssueStatus::Unresolved),
        app.feed.query().as_str(),
        app.matching_count(),
        app.feed.page() + 1,
        app.feed.page_count(&app.issue_list)
    );
    let header = Paragraph::new(header_text)
        .block(Block::default().borders(Borders::ALL).title("Triage"))
        .style(Style::default().fg(Color::Cyan));

    frame.render_widget(header, area);
}

fn draw_issue_list(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    selection: &SelectionState,
    summary: &SelectionSummary,
) {
    if selection.is_empty() {
        let empty = Paragraph::new("No issues match this query. Press / to change it.")
            .block(Block::default().borders(Borders::ALL).title("Issues"))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .visible_issues()
        .into_iter()
        .map(|issue| {
            // Rows read as selected while the whole query is selected, even
            // if their own record is not.
            let is_selected = summary.all_in_query_selected || selection.is_selected(&issue.id);
            let is_anchor = selection.last_selected() == Some(issue.id.as_str());

            let checkbox = if is_selected { "[x]" } else { "[ ]" };
            let anchor = if is_anchor { "›" } else { " " };
            let project = issue
                .project
                .as_deref()
                .map(|name| format!("  ({})", name))
                .unwrap_or_default();

            let style = if is_selected {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                match issue.status {
                    IssueStatus::Unresolved => Style::default().fg(Color::White),
                    IssueStatus::Resolved => Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT),
                    IssueStatus::Ignored => Style::default().fg(Color::DarkGray),
                }
            };

            let line = Line::from(vec![
                Span::raw(format!("{}{} ", anchor, checkbox)),
                Span::styled(format!("{:<10}", issue.id), style.add_modifier(Modifier::BOLD)),
                Span::styled(format!(" {}", issue.title), style),
                Span::styled(project, Style::default().fg(Color::DarkGray)),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Issues"))
        .highlight_style(
            Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default();
    list_state.select(Some(app.cursor));

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App, summary: &SelectionSummary) {
    let footer_text = if app.search.search_mode {
        format!(
            "QUERY: {}█ | {} matching | Enter: apply | Esc: cancel",
            app.search.search_query, app.search.match_count
        )
    } else if let Some(message) = &app.status_message {
        message.clone()
    } else {
        let selected = if summary.all_in_query_selected {
            format!("all {}", app.matching_count())
        } else {
            summary.selected_count().to_string()
        };
        format!(
            "Visible: {} | Selected: {} | x: select | X: range | a: page | r/u/i/d: bulk | ?: help | q: quit",
            app.visible_ids().len(),
            selected
        )
    };

    let footer = Paragraph::new(footer_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Yellow));

    frame.render_widget(footer, area);
}

fn draw_help_window(frame: &mut Frame) {
    let help_text = [
        "Triage - Keyboard Commands",
        "",
        "NAVIGATION:",
        "  ↑↓ / j/k          Move cursor",
        "  n / PageDown      Next page",
        "  p / PageUp        Previous page",
        "  L                 Load another page below",
        "  /                 Edit query (is:, project:, text)",
        "",
        "SELECTION:",
        "  x / Space         Select/deselect issue",
        "  X / Shift+Space   Select range from last selected issue",
        "  a                 Select/deselect whole page",
        "  A                 Select every issue matching the query",
        "  Esc               Deselect all",
        "",
        "BULK ACTIONS:",
        "  r                 Resolve selected issues",
        "  u                 Unresolve selected issues",
        "  i                 Ignore selected issues",
        "  d                 Delete selected issues",
        "",
        "OTHER:",
        "  ?                 Show this help (press ? or Esc to close)",
        "  q / Ctrl+C        Quit application",
    ];

    let help_paragraph = Paragraph::new(help_text.join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help - Keyboard Commands ")
                .style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White))
        .wrap(ratatui::widgets::Wrap { trim: true });

    let area = centered_rect(80, 80, frame.size());

    frame.render_widget(Clear, area);
    frame.render_widget(help_paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
