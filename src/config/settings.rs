//! User settings for Studesk
//!
//! Manages user preferences including profile details, theme selection,
//! and notification toggles. Record data is never persisted; these
//! preferences are the only state that survives a restart.

use serde::{Deserialize, Serialize};

use super::paths::StudeskPaths;
use crate::error::DashboardError;

/// Color theme preference for the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light palette (default)
    #[default]
    Light,
    /// Dark palette
    Dark,
}

impl Theme {
    /// Flip between light and dark
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// How often digest emails would be sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DigestFrequency {
    Daily,
    #[default]
    Weekly,
    Monthly,
    Never,
}

/// Per-channel notification toggles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationPrefs {
    /// New assignment notifications
    pub assignments: bool,
    /// Attendance warning notifications
    pub attendance: bool,
    /// Grade update notifications
    pub grades: bool,
    /// School announcement notifications
    pub announcements: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            assignments: true,
            attendance: true,
            grades: true,
            announcements: true,
        }
    }
}

/// User settings for Studesk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Student's display name
    #[serde(default = "default_student_name")]
    pub student_name: String,

    /// Student's email address
    #[serde(default = "default_email")]
    pub email: String,

    /// Grade level (free-form, e.g. "10")
    #[serde(default = "default_grade_level")]
    pub grade_level: String,

    /// Color theme for the TUI
    #[serde(default)]
    pub theme: Theme,

    /// Per-channel notification toggles
    #[serde(default)]
    pub notifications: NotificationPrefs,

    /// Email digest frequency
    #[serde(default)]
    pub email_digest: DigestFrequency,
}

fn default_schema_version() -> u32 {
    1
}

fn default_student_name() -> String {
    "Saad Ahmed".to_string()
}

fn default_email() -> String {
    "saad@school.edu".to_string()
}

fn default_grade_level() -> String {
    "10".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            student_name: default_student_name(),
            email: default_email(),
            grade_level: default_grade_level(),
            theme: Theme::default(),
            notifications: NotificationPrefs::default(),
            email_digest: DigestFrequency::default(),
        }
    }
}

impl Settings {
    /// First name of the student, for greetings
    pub fn first_name(&self) -> &str {
        self.student_name
            .split_whitespace()
            .next()
            .unwrap_or(&self.student_name)
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &StudeskPaths) -> Result<Self, DashboardError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| DashboardError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                DashboardError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &StudeskPaths) -> Result<(), DashboardError> {
        // Ensure the config directory exists
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| DashboardError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| DashboardError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.email_digest, DigestFrequency::Weekly);
        assert!(settings.notifications.assignments);
        assert_eq!(settings.first_name(), "Saad");
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StudeskPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.student_name = "Amina Yusuf".to_string();
        settings.theme = Theme::Dark;
        settings.notifications.grades = false;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.student_name, "Amina Yusuf");
        assert_eq!(loaded.theme, Theme::Dark);
        assert!(!loaded.notifications.grades);
    }

    #[test]
    fn test_load_or_create_defaults_when_missing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StudeskPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.student_name, "Saad Ahmed");
        assert!(!paths.settings_file().exists());
    }
}
