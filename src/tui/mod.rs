//! Terminal User Interface module
//!
//! This module provides the full-screen dashboard for Studesk using
//! ratatui: a login screen, sidebar navigation across the seven pages,
//! month navigation, incremental search, filter cycling, and the homework
//! status toggle.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
