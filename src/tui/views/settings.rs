//! Settings page view
//!
//! Profile details plus the editable preference rows; changes are saved to
//! the config file immediately.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::tui::app::{App, FocusedPanel};

use super::Palette;

/// Render the settings page
pub fn render(frame: &mut Frame, app: &mut App, palette: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Profile
            Constraint::Min(8),    // Preferences
        ])
        .split(area);

    render_profile(frame, app, palette, chunks[0]);
    render_preferences(frame, app, palette, chunks[1]);
}

/// Render the read-only profile card
fn render_profile(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let block = Block::default()
        .title(" Profile ")
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.dim));

    let lines = vec![
        Line::from(vec![
            Span::styled("Name:   ", Style::default().fg(palette.dim)),
            Span::raw(app.settings.student_name.clone()),
        ]),
        Line::from(vec![
            Span::styled("Email:  ", Style::default().fg(palette.dim)),
            Span::raw(app.settings.email.clone()),
        ]),
        Line::from(vec![
            Span::styled("Grade:  ", Style::default().fg(palette.dim)),
            Span::raw(app.settings.grade_level.clone()),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the editable preference rows
fn render_preferences(frame: &mut Frame, app: &mut App, palette: &Palette, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Main;
    let border_color = if is_focused { palette.accent } else { palette.dim };

    let block = Block::default()
        .title(" Preferences ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let on_off = |enabled: bool| if enabled { "on" } else { "off" };
    let notifications = &app.settings.notifications;

    let rows: [(String, String); 6] = [
        ("Theme".to_string(), format!("{:?}", app.settings.theme).to_lowercase()),
        (
            "Assignment notifications".to_string(),
            on_off(notifications.assignments).to_string(),
        ),
        (
            "Attendance notifications".to_string(),
            on_off(notifications.attendance).to_string(),
        ),
        (
            "Grade notifications".to_string(),
            on_off(notifications.grades).to_string(),
        ),
        (
            "Announcement notifications".to_string(),
            on_off(notifications.announcements).to_string(),
        ),
        (
            "Email digest".to_string(),
            format!("{:?}", app.settings.email_digest).to_lowercase(),
        ),
    ];

    let items: Vec<ListItem> = rows
        .iter()
        .map(|(label, value)| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<28}", label)),
                Span::styled(
                    value.clone(),
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    state.select(Some(app.settings_index));

    frame.render_stateful_widget(list, area, &mut state);
}
