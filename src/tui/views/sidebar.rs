//! Sidebar view
//!
//! Shows the student header and the page navigation list.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::tui::app::{ActiveView, App, FocusedPanel};

use super::Palette;

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &mut App, palette: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Navigation
        ])
        .split(area);

    render_header(frame, app, palette, chunks[0]);
    render_navigation(frame, app, palette, chunks[1]);
}

/// Render the student header
fn render_header(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let block = Block::default()
        .title(" Studesk ")
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.dim));

    let header = Paragraph::new(app.settings.student_name.clone())
        .block(block)
        .style(Style::default().fg(palette.dim));

    frame.render_widget(header, area);
}

/// Render the page navigation list
fn render_navigation(frame: &mut Frame, app: &mut App, palette: &Palette, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Sidebar;
    let border_color = if is_focused { palette.accent } else { palette.dim };

    let block = Block::default()
        .title(" Pages ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let items: Vec<ListItem> = ActiveView::ALL
        .iter()
        .map(|view| {
            let marker = if *view == app.active_view { "> " } else { "  " };
            ListItem::new(format!("{}{}", marker, view.title()))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = ListState::default();
    state.select(Some(app.sidebar_index));

    frame.render_stateful_widget(list, area, &mut state);
}
