//! Grades page view
//!
//! Month navigation header, stat cards, a per-subject average bar chart,
//! and the grades table with its empty state.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{
        Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Sparkline, Table, TableState,
    },
    Frame,
};

use crate::models::format_short_date;
use crate::services::grades::{month_trend, month_view, subject_averages};
use crate::services::Selection;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::{columns, PageLayout};

use super::Palette;

/// Render the grades page
pub fn render(frame: &mut Frame, app: &mut App, palette: &Palette, area: Rect) {
    let layout = PageLayout::new(area);
    let view = month_view(&app.data.grades, &app.grades_query());

    render_header(frame, app, palette, layout.header, view.rows.len(), view.month_total);
    render_stats(frame, palette, layout.stats, &view.summary);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(48), Constraint::Length(32)])
        .split(layout.content);

    render_table(frame, app, palette, content[0], &view.rows);

    let charts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(5)])
        .split(content[1]);

    render_subject_chart(frame, app, palette, charts[0]);
    render_trend(frame, app, palette, charts[1]);
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
        .title(format!(" Grades - {} ", app.month.title()))
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.dim));

    let page = &app.grades_page;
    let mut filters = Vec::new();
    if let Selection::Only(subject) = &page.subject {
        filters.push(format!("subject={}", subject));
    }
    if !page.search.is_empty() {
        filters.push(format!("search=\"{}\"", page.search));
    }

    let summary = if filters.is_empty() {
        format!("Showing {} of {} grades", shown, month_total)
    } else {
        format!(
            "Showing {} of {} grades ({})",
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
    summary: &crate::services::GradeSummary,
) {
    let cards = columns(area, 4);
    let values = [
        ("Average", format!("{}%", summary.average_percentage), palette.accent),
        ("Marks Earned", summary.marks_earned.to_string(), palette.good),
        ("Marks Possible", summary.marks_possible.to_string(), palette.dim),
        ("Assessments", summary.count.to_string(), palette.warn),
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
    rows: &[crate::models::GradeEntry],
) {
    let is_focused = app.focused_panel == FocusedPanel::Main;
    let border_color = if is_focused { palette.accent } else { palette.dim };

    let block = Block::default()
        .title(" Assessments ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if rows.is_empty() {
        let empty = Paragraph::new("No grades found. Try adjusting your search or filters.")
            .block(block)
            .style(Style::default().fg(palette.dim));
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec!["Date", "Subject", "Assessment", "Marks", "%"]).style(
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    );

    let table_rows: Vec<Row> = rows
        .iter()
        .map(|grade| {
            let percent_color = if grade.percentage >= 85 {
                palette.good
            } else if grade.percentage >= 70 {
                palette.warn
            } else {
                palette.bad
            };
            Row::new(vec![
                Cell::from(format_short_date(grade.date)),
                Cell::from(grade.subject.clone()),
                Cell::from(grade.assessment.clone()),
                Cell::from(grade.marks_display()),
                Cell::from(format!("{}%", grade.percentage))
                    .style(Style::default().fg(percent_color)),
            ])
        })
        .collect();

    let table = Table::new(
        table_rows,
        [
            Constraint::Length(13),
            Constraint::Min(12),
            Constraint::Min(14),
            Constraint::Length(8),
            Constraint::Length(5),
        ],
    )
    .header(header)
    .block(block)
    .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default();
    state.select(Some(app.grades_page.selected.min(rows.len() - 1)));

    frame.render_stateful_widget(table, area, &mut state);
}

/// Bar chart of per-subject averages for the month
fn render_subject_chart(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let block = Block::default()
        .title(" Subject Averages ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.dim));

    let averages = subject_averages(&app.data.grades, app.month);
    if averages.iter().all(|a| a.average == 0) {
        let empty = Paragraph::new("No grades this month.")
            .block(block)
            .style(Style::default().fg(palette.dim));
        frame.render_widget(empty, area);
        return;
    }

    let bars: Vec<Bar> = averages
        .iter()
        .map(|average| {
            // Three-letter labels keep the chart narrow
            let label: String = average.subject.chars().take(3).collect();
            Bar::default()
                .value(average.average as u64)
                .label(label.into())
                .style(Style::default().fg(palette.accent))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .bar_width(4)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars))
        .max(100);

    frame.render_widget(chart, area);
}

/// Sparkline of the month's percentages in chronological order
fn render_trend(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let block = Block::default()
        .title(" Trend ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.dim));

    let trend: Vec<u64> = month_trend(&app.data.grades, app.month)
        .into_iter()
        .map(u64::from)
        .collect();

    if trend.is_empty() {
        let empty = Paragraph::new("No data")
            .block(block)
            .style(Style::default().fg(palette.dim));
        frame.render_widget(empty, area);
        return;
    }

    let sparkline = Sparkline::default()
        .block(block)
        .data(&trend)
        .style(Style::default().fg(palette.good));
    frame.render_widget(sparkline, area);
}
