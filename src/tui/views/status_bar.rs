//! Status bar view
//!
//! Shows the month cursor, active filter state, transient messages, and
//! key hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{ActiveView, App, InputMode};

use super::Palette;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let mut spans = vec![];

    if app.active_view.is_month_scoped() {
        spans.push(Span::styled(
            format!(" {} ", app.month.title()),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw("│ "));
    }

    if app.input_mode == InputMode::Search {
        spans.push(Span::styled(
            "SEARCH ",
            Style::default()
                .fg(palette.warn)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw("type to filter, Enter/Esc to finish "));
    } else if let Some(message) = &app.status_message {
        spans.push(Span::styled(
            format!("{} ", message),
            Style::default().fg(palette.good),
        ));
    } else {
        let hints = match app.active_view {
            ActiveView::Homework => {
                "j/k:Move  SPACE:Toggle  [/]:Month  t:Today  /:Search  s:Status  b:Subject  p:Priority  c:Clear  q:Quit"
            }
            ActiveView::Attendance => {
                "j/k:Move  [/]:Month  t:Today  /:Search  s:Status  b:Subject  c:Clear  q:Quit"
            }
            ActiveView::Grades => {
                "j/k:Move  [/]:Month  t:Today  /:Search  b:Subject  c:Clear  q:Quit"
            }
            ActiveView::Reports => "j/k:Move  /:Search  s:Type  c:Clear  q:Quit",
            ActiveView::Settings => "j/k:Move  SPACE/Enter:Change  q:Quit",
            _ => "Tab:Focus  j/k:Navigate  q:Quit",
        };
        spans.push(Span::styled(hints, Style::default().fg(palette.dim)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
