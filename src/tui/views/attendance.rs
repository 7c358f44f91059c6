//! Attendance page view
//!
//! Month navigation header, stat cards, attendance gauge, and the records
//! table with its empty state.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::{format_short_date, weekday_name, AttendanceStatus};
use crate::services::attendance::month_view;
use crate::services::Selection;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::{columns, PageLayout};

use super::Palette;

/// Render the attendance page
pub fn render(frame: &mut Frame, app: &mut App, palette: &Palette, area: Rect) {
    let layout = PageLayout::new(area);
    let view = month_view(&app.data.attendance, &app.attendance_query());

    render_header(frame, app, palette, layout.header, view.rows.len(), view.month_total);
    render_stats(frame, palette, layout.stats, &view.summary);
    render_table(frame, app, palette, layout.content, &view.rows);
}

fn render_header(
    frame: &mut Frame,
    app: &App,
    palette: &Palette,
    area: Rect,
    shown: usize,
    month_total: usize,
) {
    let block = Block::default()
        .title(format!(" Attendance - {} ", app.month.title()))
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.dim));

    let page = &app.attendance_page;
    let mut filters = Vec::new();
    if let Selection::Only(status) = &page.status {
        filters.push(format!("status={}", status));
    }
    if let Selection::Only(subject) = &page.subject {
        filters.push(format!("subject={}", subject));
    }
    if !page.search.is_empty() {
        filters.push(format!("search=\"{}\"", page.search));
    }

    let summary = if filters.is_empty() {
        format!("Showing {} of {} records", shown, month_total)
    } else {
        format!(
            "Showing {} of {} records ({})",
            shown,
            month_total,
            filters.join(", ")
        )
    };

    let paragraph = Paragraph::new(summary)
        .block(block)
        .style(Style::default().fg(palette.dim));
    frame.render_widget(paragraph, area);
}

fn render_stats(
    frame: &mut Frame,
    palette: &Palette,
    area: Rect,
    summary: &crate::services::AttendanceSummary,
) {
    let cards = columns(area, 4);

    render_stat_card(
        frame,
        cards[1],
        "Present",
        summary.present.to_string(),
        palette,
        palette.good,
    );
    render_stat_card(
        frame,
        cards[2],
        "Absent",
        summary.absent.to_string(),
        palette,
        palette.bad,
    );
    render_stat_card(
        frame,
        cards[3],
        "Leave",
        summary.leave.to_string(),
        palette,
        palette.warn,
    );

    // Overall percentage as a gauge
    let block = Block::default()
        .title(" Overall ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.dim));
    let gauge = Gauge::default()
        .block(block)
        .gauge_style(Style::default().fg(palette.good))
        .percent(summary.percentage.min(100) as u16)
        .label(format!("{}%", summary.percentage));
    frame.render_widget(gauge, cards[0]);
}

fn render_stat_card(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: String,
    palette: &Palette,
    color: ratatui::style::Color,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.dim));
    let paragraph = Paragraph::new(value)
        .block(block)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    frame.render_widget(paragraph, area);
}

fn render_table(
    frame: &mut Frame,
    app: &App,
    palette: &Palette,
    area: Rect,
    rows: &[crate::models::AttendanceEntry],
) {
    let is_focused = app.focused_panel == FocusedPanel::Main;
    let border_color = if is_focused { palette.accent } else { palette.dim };

    let block = Block::default()
        .title(" Records ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if rows.is_empty() {
        let empty = Paragraph::new("No records found. Try adjusting your search or filters.")
            .block(block)
            .style(Style::default().fg(palette.dim));
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec!["Date", "Day", "Subject", "Status"]).style(
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    );

    let table_rows: Vec<Row> = rows
        .iter()
        .map(|entry| {
            let status_color = match entry.status {
                AttendanceStatus::Present => palette.good,
                AttendanceStatus::Absent => palette.bad,
                AttendanceStatus::Leave => palette.warn,
            };
            Row::new(vec![
                Cell::from(format_short_date(entry.date)),
                Cell::from(weekday_name(entry.date)),
                Cell::from(entry.subject.clone().unwrap_or_else(|| "N/A".to_string())),
                Cell::from(entry.status.to_string())
                    .style(Style::default().fg(status_color)),
            ])
        })
        .collect();

    let table = Table::new(
        table_rows,
        [
            Constraint::Length(13),
            Constraint::Length(10),
            Constraint::Min(12),
            Constraint::Length(9),
        ],
    )
    .header(header)
    .block(block)
    .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default();
    state.select(Some(app.attendance_page.selected.min(rows.len() - 1)));

    frame.render_stateful_widget(table, area, &mut state);
}
