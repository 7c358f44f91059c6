//! Reports page view
//!
//! Report list with kind filter and search, plus the selected report's
//! content.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::models::format_short_date;
use crate::services::reports::filtered;
use crate::services::Selection;
use crate::tui::app::{App, FocusedPanel};

use super::Palette;

/// Render the reports page
pub fn render(frame: &mut Frame, app: &mut App, palette: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(4),    // List
            Constraint::Length(7), // Selected report content
        ])
        .split(area);

    let rows = filtered(&app.data.reports, &app.reports_query());

    render_header(frame, app, palette, chunks[0], rows.len());
    render_list(frame, app, palette, chunks[1], &rows);
    render_content(frame, app, palette, chunks[2], &rows);
}

fn render_header(frame: &mut Frame, app: &App, palette: &Palette, area: Rect, shown: usize) {
    let block = Block::default()
        .title(" Reports ")
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.dim));

    let page = &app.reports_page;
    let mut filters = Vec::new();
    if let Selection::Only(kind) = &page.kind {
        filters.push(format!("type={}", kind));
    }
    if !page.search.is_empty() {
        filters.push(format!("search=\"{}\"", page.search));
    }

    let summary = if filters.is_empty() {
        format!("{} of {} reports", shown, app.data.reports.len())
    } else {
        format!(
            "{} of {} reports ({})",
            shown,
            app.data.reports.len(),
            filters.join(", ")
        )
    };

    let paragraph = Paragraph::new(summary)
        .block(block)
        .style(Style::default().fg(palette.dim));
    frame.render_widget(paragraph, area);
}

fn render_list(
    frame: &mut Frame,
    app: &App,
    palette: &Palette,
    area: Rect,
    rows: &[crate::models::Report],
) {
    let is_focused = app.focused_panel == FocusedPanel::Main;
    let border_color = if is_focused { palette.accent } else { palette.dim };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if rows.is_empty() {
        let empty = Paragraph::new("No reports found. Try adjusting your search or filters.")
            .block(block)
            .style(Style::default().fg(palette.dim));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = rows
        .iter()
        .map(|report| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<12}", format_short_date(report.generated_on)),
                    Style::default().fg(palette.dim),
                ),
                Span::styled(
                    format!("[{}] ", report.kind),
                    Style::default().fg(palette.accent),
                ),
                Span::raw(report.title.clone()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    state.select(Some(app.reports_page.selected.min(rows.len() - 1)));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_content(
    frame: &mut Frame,
    app: &App,
    palette: &Palette,
    area: Rect,
    rows: &[crate::models::Report],
) {
    let block = Block::default()
        .title(" Report ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.dim));

    let selected = rows.get(app.reports_page.selected.min(rows.len().saturating_sub(1)));
    let content = match selected {
        Some(report) => report.content.clone(),
        None => "Select a report to read it.".to_string(),
    };

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
