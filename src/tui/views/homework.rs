//! Homework page view
//!
//! Month navigation header, stat cards, and the task table with checkbox
//! column, due-date annotations, and empty state.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::{format_short_date, Priority, TaskStatus};
use crate::services::homework::month_view;
use crate::services::Selection;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::{columns, PageLayout};

use super::Palette;

/// Render the homework page
pub fn render(frame: &mut Frame, app: &mut App, palette: &Palette, area: Rect) {
    let layout = PageLayout::new(area);
    let view = month_view(&app.data.homework, &app.homework_query(), app.today);

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
        .title(format!(" Homework & Tasks - {} ", app.month.title()))
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.dim));

    let page = &app.homework_page;
    let mut filters = Vec::new();
    if let Selection::Only(status) = &page.status {
        filters.push(format!("status={}", status));
    }
    if let Selection::Only(subject) = &page.subject {
        filters.push(format!("subject={}", subject));
    }
    if let Selection::Only(priority) = &page.priority {
        filters.push(format!("priority={}", priority));
    }
    if !page.search.is_empty() {
        filters.push(format!("search=\"{}\"", page.search));
    }

    let summary = if filters.is_empty() {
        format!("Showing {} of {} tasks", shown, month_total)
    } else {
        format!(
            "Showing {} of {} tasks ({})",
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
    summary: &crate::services::HomeworkSummary,
) {
    let cards = columns(area, 4);
    let values = [
        ("Completed", summary.completed.to_string(), palette.accent),
        ("High Priority", summary.high_priority.to_string(), palette.warn),
        ("Overdue", summary.overdue.to_string(), palette.bad),
        ("Pending", summary.pending.to_string(), palette.good),
    ];

    for (area, (title, value, color)) in cards.iter().zip(values) {
        let block = Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.dim));
        let paragraph = Paragraph::new(value)
            .block(block)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD));
        frame.render_widget(paragraph, *area);
    }
}

fn render_table(
    frame: &mut Frame,
    app: &App,
    palette: &Palette,
    area: Rect,
    rows: &[crate::models::HomeworkTask],
) {
    let is_focused = app.focused_panel == FocusedPanel::Main;
    let border_color = if is_focused { palette.accent } else { palette.dim };

    let block = Block::default()
        .title(" All Tasks ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if rows.is_empty() {
        let empty = Paragraph::new("No tasks found. Try adjusting your search or filters.")
            .block(block)
            .style(Style::default().fg(palette.dim));
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec!["", "Title", "Subject", "Due Date", "Priority", "Note"]).style(
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    );

    let table_rows: Vec<Row> = rows
        .iter()
        .map(|task| {
            let completed = task.status == TaskStatus::Completed;
            let overdue = task.is_overdue(app.today);
            let days_until = task.days_until(app.today);

            let check = if completed { "[x]" } else { "[ ]" };

            let title_style = if completed {
                Style::default()
                    .fg(palette.dim)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else if overdue {
                Style::default().fg(palette.bad)
            } else {
                Style::default()
            };

            let priority_color = match task.priority {
                Priority::High => palette.bad,
                Priority::Medium => palette.warn,
                Priority::Low => palette.good,
            };

            let note = if overdue {
                "Overdue".to_string()
            } else if !completed && (0..=3).contains(&days_until) {
                if days_until == 0 {
                    "Due Today".to_string()
                } else {
                    format!("{} days left", days_until)
                }
            } else {
                String::new()
            };
            let note_color = if overdue { palette.bad } else { palette.warn };

            Row::new(vec![
                Cell::from(check),
                Cell::from(task.title.clone()).style(title_style),
                Cell::from(task.subject.clone()),
                Cell::from(format_short_date(task.due_on)),
                Cell::from(task.priority.to_string())
                    .style(Style::default().fg(priority_color)),
                Cell::from(note).style(Style::default().fg(note_color)),
            ])
        })
        .collect();

    let table = Table::new(
        table_rows,
        [
            Constraint::Length(3),
            Constraint::Min(24),
            Constraint::Min(10),
            Constraint::Length(13),
            Constraint::Length(8),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(block)
    .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default();
    state.select(Some(app.homework_page.selected.min(rows.len() - 1)));

    frame.render_stateful_widget(table, area, &mut state);
}
