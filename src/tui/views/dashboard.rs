//! Dashboard home view
//!
//! Headline numbers, trailing-month sparklines, upcoming events, and the
//! notifications panel.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Sparkline},
    Frame,
};

use crate::models::format_short_date;
use crate::services::dashboard::{
    attendance_history, grade_history, pending_history, upcoming_events, HomeSnapshot,
};
use crate::tui::app::App;
use crate::tui::layout::columns;

use super::Palette;

/// Months of history behind each sparkline
const SPARKLINE_MONTHS: usize = 6;

/// Render the dashboard home page
pub fn render(frame: &mut Frame, app: &mut App, palette: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Greeting
            Constraint::Length(6), // KPI cards
            Constraint::Min(5),    // Events + notifications
        ])
        .split(area);

    render_greeting(frame, app, palette, chunks[0]);
    render_kpis(frame, app, palette, chunks[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(chunks[2]);

    render_events(frame, app, palette, bottom[0]);
    render_notifications(frame, app, palette, bottom[1]);
}

/// Render the greeting header
fn render_greeting(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let snapshot = HomeSnapshot::compute(&app.data, app.month);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.dim));

    let line = Line::from(vec![
        Span::styled(
            format!("Welcome back, {}! ", app.settings.first_name()),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            "{} pending tasks, {} upcoming exams, {} unread notifications",
            snapshot.pending_tasks, snapshot.upcoming_exams, snapshot.unread_notifications
        )),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render the KPI cards with sparklines
fn render_kpis(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let snapshot = HomeSnapshot::compute(&app.data, app.month);
    let cards = columns(area, 3);

    render_kpi_card(
        frame,
        cards[0],
        "Attendance",
        format!("{}%", snapshot.attendance_percentage),
        &attendance_history(&app.data, app.month, SPARKLINE_MONTHS),
        palette,
        palette.good,
    );
    render_kpi_card(
        frame,
        cards[1],
        "Average Grade",
        format!("{}%", snapshot.average_grade),
        &grade_history(&app.data, app.month, SPARKLINE_MONTHS),
        palette,
        palette.accent,
    );
    render_kpi_card(
        frame,
        cards[2],
        "Pending Tasks",
        format!("{}", snapshot.pending_tasks),
        &pending_history(&app.data, app.month, SPARKLINE_MONTHS),
        palette,
        palette.warn,
    );
}

/// Render one KPI card: value line plus a sparkline of trailing months
fn render_kpi_card(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: String,
    history: &[u64],
    palette: &Palette,
    color: ratatui::style::Color,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.dim));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let value_line = Paragraph::new(value)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    frame.render_widget(value_line, rows[0]);

    let sparkline = Sparkline::default()
        .data(history)
        .style(Style::default().fg(color));
    frame.render_widget(sparkline, rows[1]);
}

/// Render the upcoming events timeline
fn render_events(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let block = Block::default()
        .title(" Upcoming Events ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.dim));

    let events = upcoming_events(&app.data, app.today);
    if events.is_empty() {
        let empty = Paragraph::new("No upcoming events.")
            .block(block)
            .style(Style::default().fg(palette.dim));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = events
        .iter()
        .map(|event| {
            let line = Line::from(vec![
                Span::styled(
                    format!("{:<12}", format_short_date(event.date)),
                    Style::default().fg(palette.dim),
                ),
                Span::styled(
                    format!("[{}] ", event.kind),
                    Style::default().fg(palette.accent),
                ),
                Span::raw(event.title.clone()),
            ]);
            ListItem::new(line)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// Render the notifications panel
fn render_notifications(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let block = Block::default()
        .title(" Notifications ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.dim));

    let items: Vec<ListItem> = app
        .data
        .notifications
        .iter()
        .map(|notification| {
            let marker = if notification.read { "  " } else { "* " };
            let style = if notification.read {
                Style::default().fg(palette.dim)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(palette.warn)),
                Span::styled(notification.title.clone(), style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
