//! Configuration and path management
//!
//! Handles path resolution (config, data, exports) and persistent user
//! settings.

pub mod paths;
pub mod settings;

pub use paths::StudeskPaths;
pub use settings::{DigestFrequency, NotificationPrefs, Settings, Theme};
