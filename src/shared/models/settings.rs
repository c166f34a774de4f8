use std::{env, fs};
use serde::Deserialize;
use tracing::warn;

const SETTINGS_FILENAME: &str = "settings.json";

/// Name of the environment variable overriding the store location.
const DB_PATH_ENV: &str = "TASKBOX_DB";

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub tcp_socket_binding: String,
    pub tcp_socket_port: u16,
    pub database_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            tcp_socket_binding: "0.0.0.0".to_string(),
            tcp_socket_port: 3000,
            database_path: "tasks.redb".to_string(),
        }
    }
}

impl Settings {
    /// Read settings.json from the working directory, falling back to
    /// defaults when the file is absent or unreadable. TASKBOX_DB, when set,
    /// overrides the database path.
    pub fn load() -> Settings {
        let mut settings = match fs::read_to_string(SETTINGS_FILENAME) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!("Cannot parse {}: {}. Using defaults", SETTINGS_FILENAME, e);
                    Settings::default()
                }
            },
            Err(_) => {
                warn!("No {} found, using defaults", SETTINGS_FILENAME);
                Settings::default()
            }
        };

        if let Ok(path) = env::var(DB_PATH_ENV) {
            settings.database_path = path;
        }

        settings
    }
}
