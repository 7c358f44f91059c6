//! Studesk - Terminal-based student dashboard
//!
//! This library provides the core functionality for the Studesk dashboard:
//! a student-facing view over attendance, grades, homework, reports, and
//! notifications, rendered through a TUI and a set of CLI subcommands. All
//! record data is generated in memory at startup; only user preferences
//! and the login session persist.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (attendance, grades, homework, reports, ...)
//! - `services`: The month-scoped filtering and aggregation engine
//! - `data`: Synthetic dataset generation
//! - `auth`: Mock login session
//! - `display`: Terminal table formatting for the CLI
//! - `export`: CSV/JSON/YAML exporters
//! - `cli`: Subcommand definitions and handlers
//! - `tui`: The ratatui dashboard
//!
//! # Example
//!
//! ```rust
//! use studesk::data::Dataset;
//! use studesk::models::SchoolMonth;
//! use studesk::services::attendance::{month_view, AttendanceQuery};
//!
//! let today = chrono::NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
//! let data = Dataset::generate(today, 7);
//!
//! let query = AttendanceQuery::new(SchoolMonth::containing(today)).search("monday");
//! let view = month_view(&data.attendance, &query);
//! assert!(view.month_total >= view.rows.len());
//! ```

pub mod auth;
pub mod cli;
pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod tui;

pub use error::DashboardError;
