//! AI assistant page view
//!
//! Weak-concept scores derived from the grade data plus a fixed set of
//! study suggestions.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::services::grades::subject_averages;
use crate::tui::app::App;

use super::Palette;

/// Fixed study suggestions, as the assistant would surface them
const SUGGESTIONS: [(&str, &str, &str); 4] = [
    (
        "Improve Grammar Skills",
        "Complete interactive grammar exercises and quizzes",
        "medium",
    ),
    (
        "Essay Writing Practice",
        "Practice structured essay writing with feedback",
        "medium",
    ),
    (
        "Advanced Problem Solving",
        "Master complex mathematical concepts step by step",
        "hard",
    ),
    (
        "Mathematical Reasoning",
        "Enhance logical thinking and problem-solving strategies",
        "medium",
    ),
];

/// Subjects at or below this average need attention
const WEAK_THRESHOLD: u32 = 80;

/// Render the AI assistant page
pub fn render(frame: &mut Frame, app: &mut App, palette: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(4),    // Concepts + suggestions
        ])
        .split(area);

    let block = Block::default()
        .title(" AI Assistant ")
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.dim));
    let header = Paragraph::new("Focus areas based on this month's grades")
        .block(block)
        .style(Style::default().fg(palette.dim));
    frame.render_widget(header, chunks[0]);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(chunks[1]);

    render_concepts(frame, app, palette, halves[0]);
    render_suggestions(frame, palette, halves[1]);
}

/// Render per-subject averages flagged weak/strong
fn render_concepts(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let block = Block::default()
        .title(" Concept Mastery ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.dim));

    let averages = subject_averages(&app.data.grades, app.month);
    let graded: Vec<_> = averages.iter().filter(|a| a.average > 0).collect();

    if graded.is_empty() {
        let empty = Paragraph::new("No grades this month to analyze.")
            .block(block)
            .style(Style::default().fg(palette.dim));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = graded
        .iter()
        .map(|average| {
            let weak = average.average <= WEAK_THRESHOLD;
            let color = if weak { palette.warn } else { palette.good };
            let flag = if weak { "needs focus" } else { "on track" };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<18}", average.subject)),
                Span::styled(
                    format!("{:>3}%  ", average.average),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(flag, Style::default().fg(color)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// Render the fixed suggestion list
fn render_suggestions(frame: &mut Frame, palette: &Palette, area: Rect) {
    let block = Block::default()
        .title(" Suggestions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.dim));

    let items: Vec<ListItem> = SUGGESTIONS
        .iter()
        .map(|(title, description, difficulty)| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(*title, Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(
                        format!("  ({})", difficulty),
                        Style::default().fg(palette.dim),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("  {}", description),
                    Style::default().fg(palette.dim),
                )),
            ])
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
