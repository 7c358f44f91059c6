//! Mock login session
//!
//! The dashboard is gated behind a client-side login: a session marker
//! file in the data directory stands in for a browser's local storage.
//! There is no real authentication — any non-empty credentials are
//! accepted — but the TUI refuses to start without an active session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::paths::StudeskPaths;
use crate::error::{DashboardError, DashboardResult};

/// An active login session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Name the student logged in with
    pub student_name: String,

    /// When the session was created
    pub logged_in_at: DateTime<Utc>,
}

impl Session {
    /// Validate credentials and record a session
    ///
    /// Mock gate: both fields must be non-empty, nothing else is checked.
    pub fn login(
        paths: &StudeskPaths,
        student_name: &str,
        password: &str,
    ) -> DashboardResult<Self> {
        let student_name = student_name.trim();
        if student_name.is_empty() {
            return Err(DashboardError::Auth("Name cannot be empty".into()));
        }
        if password.is_empty() {
            return Err(DashboardError::Auth("Password cannot be empty".into()));
        }

        let session = Self {
            student_name: student_name.to_string(),
            logged_in_at: Utc::now(),
        };
        session.save(paths)?;

        Ok(session)
    }

    /// Remove any active session
    ///
    /// Logging out while logged out is a no-op.
    pub fn logout(paths: &StudeskPaths) -> DashboardResult<()> {
        let session_file = paths.session_file();
        if session_file.exists() {
            std::fs::remove_file(&session_file)
                .map_err(|e| DashboardError::Io(format!("Failed to remove session: {}", e)))?;
        }
        Ok(())
    }

    /// Load the active session, if one exists
    pub fn load(paths: &StudeskPaths) -> DashboardResult<Option<Self>> {
        let session_file = paths.session_file();
        if !session_file.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&session_file)
            .map_err(|e| DashboardError::Io(format!("Failed to read session: {}", e)))?;
        let session: Session = serde_json::from_str(&contents)
            .map_err(|e| DashboardError::Auth(format!("Corrupt session file: {}", e)))?;

        Ok(Some(session))
    }

    /// Whether a session is active
    pub fn is_authenticated(paths: &StudeskPaths) -> bool {
        matches!(Self::load(paths), Ok(Some(_)))
    }

    fn save(&self, paths: &StudeskPaths) -> DashboardResult<()> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| DashboardError::Auth(format!("Failed to serialize session: {}", e)))?;
        std::fs::write(paths.session_file(), contents)
            .map_err(|e| DashboardError::Io(format!("Failed to write session: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_paths() -> (TempDir, StudeskPaths) {
        let temp_dir = TempDir::new().unwrap();
        let paths = StudeskPaths::with_base_dir(temp_dir.path().to_path_buf());
        (temp_dir, paths)
    }

    #[test]
    fn test_login_logout_round_trip() {
        let (_temp_dir, paths) = test_paths();

        assert!(!Session::is_authenticated(&paths));

        let session = Session::login(&paths, "Saad Ahmed", "hunter2").unwrap();
        assert_eq!(session.student_name, "Saad Ahmed");
        assert!(Session::is_authenticated(&paths));

        let loaded = Session::load(&paths).unwrap().unwrap();
        assert_eq!(loaded.student_name, "Saad Ahmed");

        Session::logout(&paths).unwrap();
        assert!(!Session::is_authenticated(&paths));
    }

    #[test]
    fn test_login_rejects_empty_credentials() {
        let (_temp_dir, paths) = test_paths();

        assert!(Session::login(&paths, "", "pw").is_err());
        assert!(Session::login(&paths, "  ", "pw").is_err());
        assert!(Session::login(&paths, "Saad", "").is_err());
        assert!(!Session::is_authenticated(&paths));
    }

    #[test]
    fn test_logout_without_session_is_noop() {
        let (_temp_dir, paths) = test_paths();
        Session::logout(&paths).unwrap();
    }
}
