//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state: login form, search entry, or normal navigation.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::app::{ActiveView, App, AuthFlow, FocusedPanel, InputMode};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            // Status messages live until the next keypress; nothing to do
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // The login gate swallows everything until a session exists
    if app.is_login() {
        return handle_login_key(app, key);
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Search => handle_search_key(app, key),
    }
}

/// Handle keys on the login screen
fn handle_login_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let AuthFlow::Login(form) = &mut app.auth else {
        return Ok(());
    };

    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Enter => {
            if form.focus_password {
                app.submit_login();
            } else {
                form.focus_password = true;
            }
        }
        KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
            form.focus_password = !form.focus_password;
        }
        KeyCode::Backspace => {
            if form.focus_password {
                form.password.backspace();
            } else {
                form.name.backspace();
            }
        }
        KeyCode::Char(c) => {
            if form.focus_password {
                form.password.insert(c);
            } else {
                form.name.insert(c);
            }
        }
        _ => {}
    }

    Ok(())
}

/// Handle keys while typing a search query
fn handle_search_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            if let Some(search) = app.search_mut() {
                search.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(search) = app.search_mut() {
                search.push(c);
            }
        }
        _ => {}
    }

    Ok(())
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    app.status_message = None;

    // Global keys (work everywhere)
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Tab => {
            app.toggle_panel_focus();
            return Ok(());
        }
        KeyCode::Char('h') | KeyCode::Left => {
            if app.focused_panel == FocusedPanel::Main {
                app.focused_panel = FocusedPanel::Sidebar;
                return Ok(());
            }
        }
        KeyCode::Char('l') | KeyCode::Right => {
            if app.focused_panel == FocusedPanel::Sidebar {
                app.focused_panel = FocusedPanel::Main;
                return Ok(());
            }
        }
        // Month navigation applies to whichever month-scoped page is open
        KeyCode::Char('[') => {
            if app.active_view.is_month_scoped() {
                app.retreat_month();
                return Ok(());
            }
        }
        KeyCode::Char(']') => {
            if app.active_view.is_month_scoped() {
                app.advance_month();
                return Ok(());
            }
        }
        KeyCode::Char('t') => {
            if app.active_view.is_month_scoped() {
                app.reset_month();
                return Ok(());
            }
        }
        _ => {}
    }

    match app.focused_panel {
        FocusedPanel::Sidebar => handle_sidebar_key(app, key),
        FocusedPanel::Main => handle_main_key(app, key),
    }
}

/// Handle keys when the sidebar is focused
fn handle_sidebar_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let view_count = ActiveView::ALL.len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.sidebar_index + 1 < view_count {
                app.sidebar_index += 1;
            }
            app.select_sidebar_view();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.sidebar_index = app.sidebar_index.saturating_sub(1);
            app.select_sidebar_view();
        }
        KeyCode::Enter => {
            app.select_sidebar_view();
            app.focused_panel = FocusedPanel::Main;
        }
        _ => {}
    }

    Ok(())
}

/// Handle keys when the main panel is focused
fn handle_main_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),

        KeyCode::Char('/') => {
            if app.search_mut().is_some() {
                app.input_mode = InputMode::Search;
            }
        }
        KeyCode::Char('s') => app.cycle_status_filter(),
        KeyCode::Char('b') => app.cycle_subject_filter(),
        KeyCode::Char('p') => app.cycle_priority_filter(),
        KeyCode::Char('c') => app.clear_filters(),

        KeyCode::Char(' ') => match app.active_view {
            ActiveView::Homework => app.toggle_selected_homework(),
            ActiveView::Settings => app.activate_settings_row(),
            _ => {}
        },
        KeyCode::Enter => {
            if app.active_view == ActiveView::Settings {
                app.activate_settings_row();
            }
        }
        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::StudeskPaths;
    use crate::config::settings::Settings;
    use crate::data::Dataset;
    use chrono::NaiveDate;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use tempfile::TempDir;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn logged_in_app(paths: &StudeskPaths) -> App<'_> {
        crate::auth::Session::login(paths, "Saad", "pw").unwrap();
        App::new(
            paths,
            Settings::default(),
            Dataset::generate(NaiveDate::from_ymd_opt(2026, 8, 5).unwrap(), 7),
            NaiveDate::from_ymd_opt(2026, 8, 5).unwrap(),
        )
    }

    #[test]
    fn test_q_quits_in_normal_mode() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StudeskPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut app = logged_in_app(&paths);

        handle_event(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_sidebar_navigation_changes_view() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StudeskPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut app = logged_in_app(&paths);

        handle_event(&mut app, key(KeyCode::Char('j'))).unwrap();
        assert_eq!(app.active_view, ActiveView::Homework);
        handle_event(&mut app, key(KeyCode::Char('j'))).unwrap();
        assert_eq!(app.active_view, ActiveView::Attendance);
        handle_event(&mut app, key(KeyCode::Char('k'))).unwrap();
        assert_eq!(app.active_view, ActiveView::Homework);
    }

    #[test]
    fn test_search_mode_captures_q() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StudeskPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut app = logged_in_app(&paths);

        // Move to the homework view and focus main
        handle_event(&mut app, key(KeyCode::Char('j'))).unwrap();
        handle_event(&mut app, key(KeyCode::Enter)).unwrap();

        handle_event(&mut app, key(KeyCode::Char('/'))).unwrap();
        assert_eq!(app.input_mode, InputMode::Search);

        handle_event(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(!app.should_quit);
        assert_eq!(app.homework_page.search, "q");

        handle_event(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_month_keys_on_month_scoped_view() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StudeskPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut app = logged_in_app(&paths);
        let start = app.month;

        // Dashboard is not month-scoped; keys are ignored
        handle_event(&mut app, key(KeyCode::Char('['))).unwrap();
        assert_eq!(app.month, start);

        // Homework is month-scoped
        handle_event(&mut app, key(KeyCode::Char('j'))).unwrap();
        handle_event(&mut app, key(KeyCode::Char('['))).unwrap();
        assert_eq!(app.month, start.prev());
        handle_event(&mut app, key(KeyCode::Char('t'))).unwrap();
        assert_eq!(app.month, start);
    }

    #[test]
    fn test_login_flow_via_keys() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StudeskPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut app = App::new(
            &paths,
            Settings::default(),
            Dataset::generate(NaiveDate::from_ymd_opt(2026, 8, 5).unwrap(), 7),
            NaiveDate::from_ymd_opt(2026, 8, 5).unwrap(),
        );
        assert!(app.is_login());

        handle_event(&mut app, key(KeyCode::Char('p'))).unwrap();
        handle_event(&mut app, key(KeyCode::Char('w'))).unwrap();
        handle_event(&mut app, key(KeyCode::Enter)).unwrap();
        assert!(!app.is_login());
    }
}
