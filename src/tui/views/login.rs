//! Login screen
//!
//! A centered form gating the dashboard; any non-empty credentials are
//! accepted and recorded as a session.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::{App, AuthFlow};
use crate::tui::layout::centered_rect_fixed;

use super::Palette;

/// Render the login screen
pub fn render(frame: &mut Frame, app: &App, palette: &Palette) {
    let AuthFlow::Login(form) = &app.auth else {
        return;
    };

    let area = centered_rect_fixed(48, 10, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Sign in to Studesk ")
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // spacer
            Constraint::Length(1), // name
            Constraint::Length(1), // spacer
            Constraint::Length(1), // password
            Constraint::Length(1), // spacer
            Constraint::Length(1), // error / hint
        ])
        .split(inner);

    let mut name = form.name.clone();
    name.focused = !form.focus_password;
    frame.render_widget(&name, chunks[1]);

    let mut password = form.password.clone();
    password.focused = form.focus_password;
    frame.render_widget(&password, chunks[3]);

    let footer = match &form.error {
        Some(error) => Paragraph::new(error.clone()).style(Style::default().fg(palette.bad)),
        None => Paragraph::new("Enter to sign in, Tab to switch fields, Esc to quit")
            .style(Style::default().fg(palette.dim)),
    };
    frame.render_widget(footer, chunks[5]);
}
