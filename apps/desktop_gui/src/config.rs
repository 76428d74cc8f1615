use std::fs;

use serde::Deserialize;

/// Optional settings file read from the working directory.
pub const SETTINGS_FILE: &str = "employees.toml";

#[derive(Debug, Deserialize)]
struct FileSettings {
    database_url: Option<String>,
}

#[derive(Debug)]
pub struct Settings {
    pub database_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // The fixed data file name used by earlier versions of the
            // application; keeping it means old databases open unchanged.
            database_url: "sqlite://employee_management.db".into(),
        }
    }
}

/// Resolves settings with precedence: CLI flag > settings file > default.
pub fn load_settings(cli_database_url: Option<&str>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
        match toml::from_str::<FileSettings>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.database_url {
                    settings.database_url = v;
                }
            }
            Err(err) => {
                tracing::warn!(?err, file = SETTINGS_FILE, "ignoring malformed settings file");
            }
        }
    }

    if let Some(v) = cli_database_url {
        settings.database_url = v.to_string();
    }

    settings
}

/// Accepts either a database URL or a bare file path and returns a URL the
/// sqlite driver understands.
pub fn normalize_database_url(raw_database_url: &str) -> String {
    let raw_database_url = raw_database_url.trim();

    if raw_database_url.is_empty() {
        return Settings::default().database_url;
    }

    if raw_database_url.starts_with("sqlite::memory:")
        || raw_database_url.starts_with("sqlite://")
        || raw_database_url.contains("://")
    {
        return raw_database_url.to_string();
    }

    if let Some(path) = raw_database_url.strip_prefix("sqlite:") {
        let path = path.replace('\\', "/");
        return format!("sqlite://{path}");
    }

    format!("sqlite://{}", raw_database_url.replace('\\', "/"))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
