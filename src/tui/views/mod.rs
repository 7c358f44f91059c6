//! TUI views
//!
//! Contains all the pages (dashboard, homework, attendance, grades,
//! reports, AI assistant, settings), the sidebar, the status bar, and the
//! login screen.

pub mod assistant;
pub mod attendance;
pub mod dashboard;
pub mod grades;
pub mod homework;
pub mod login;
pub mod reports;
pub mod settings;
pub mod sidebar;
pub mod status_bar;

use ratatui::style::Color;
use ratatui::Frame;

use crate::config::settings::Theme;

use super::app::{ActiveView, App};
use super::layout::AppLayout;

/// Colors derived from the theme setting
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Accent for titles and focused borders
    pub accent: Color,
    /// Dimmed chrome (unfocused borders, hints)
    pub dim: Color,
    /// Positive values
    pub good: Color,
    /// Negative values
    pub bad: Color,
    /// Cautionary values
    pub warn: Color,
}

impl Palette {
    /// Build the palette for a theme
    pub fn from_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                accent: Color::Blue,
                dim: Color::Gray,
                good: Color::Green,
                bad: Color::Red,
                warn: Color::Yellow,
            },
            Theme::Dark => Self {
                accent: Color::Cyan,
                dim: Color::DarkGray,
                good: Color::LightGreen,
                bad: Color::LightRed,
                warn: Color::LightYellow,
            },
        }
    }
}

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = Palette::from_theme(app.settings.theme);

    // The login gate covers everything until a session exists
    if app.is_login() {
        login::render(frame, app, &palette);
        return;
    }

    let layout = AppLayout::new(frame.area());

    sidebar::render(frame, app, &palette, layout.sidebar);

    match app.active_view {
        ActiveView::Dashboard => dashboard::render(frame, app, &palette, layout.main),
        ActiveView::Homework => homework::render(frame, app, &palette, layout.main),
        ActiveView::Attendance => attendance::render(frame, app, &palette, layout.main),
        ActiveView::Grades => grades::render(frame, app, &palette, layout.main),
        ActiveView::Reports => reports::render(frame, app, &palette, layout.main),
        ActiveView::Assistant => assistant::render(frame, app, &palette, layout.main),
        ActiveView::Settings => settings::render(frame, app, &palette, layout.main),
    }

    status_bar::render(frame, app, &palette, layout.status_bar);
}
