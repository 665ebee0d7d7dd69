//! Runtime settings for the reports service.
//!
//! Defaults match the address the viewer expects (`0.0.0.0:5000`). Each value
//! can be overridden through a `REPORTS_*` environment variable.

use log::warn;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// SQLite file holding the `reports` table.
    pub database_path: PathBuf,
    /// Folder where uploaded images are written.
    pub upload_dir: PathBuf,
    /// Open the embedded viewer in the default browser after startup.
    pub open_browser: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 5000,
            database_path: PathBuf::from("data.db"),
            upload_dir: PathBuf::from("./uploads"),
            open_browser: false,
        }
    }
}

impl Settings {
    /// URL printed in the logs and opened in the browser.
    pub fn public_url(&self) -> String {
        let host = if self.host == "0.0.0.0" {
            "127.0.0.1"
        } else {
            self.host.as_str()
        };
        format!("http://{}:{}", host, self.port)
    }
}

pub fn load_settings() -> Settings {
    settings_from(|key| std::env::var(key).ok())
}

/// Builds settings from an arbitrary variable lookup so tests do not have to
/// touch the process environment.
pub fn settings_from<F>(lookup: F) -> Settings
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = Settings::default();

    if let Some(v) = lookup("REPORTS_HOST") {
        settings.host = v;
    }

    if let Some(v) = lookup("REPORTS_PORT") {
        match v.trim().parse::<u16>() {
            Ok(port) => settings.port = port,
            Err(_) => warn!("Ignoring REPORTS_PORT={:?}: not a valid port", v),
        }
    }

    if let Some(v) = lookup("REPORTS_DATABASE") {
        settings.database_path = PathBuf::from(v);
    }

    if let Some(v) = lookup("REPORTS_UPLOAD_DIR") {
        settings.upload_dir = PathBuf::from(v);
    }

    if let Some(v) = lookup("REPORTS_OPEN_BROWSER") {
        match parse_flag(&v) {
            Some(flag) => settings.open_browser = flag,
            None => warn!("Ignoring REPORTS_OPEN_BROWSER={:?}: expected true/false", v),
        }
    }

    settings
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_listen_where_the_viewer_looks() {
        let settings = settings_from(|_| None);
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.port, 5000);
        assert_eq!(settings.public_url(), "http://127.0.0.1:5000");
    }

    #[test]
    fn environment_overrides_every_field() {
        let settings = settings_from(lookup_from(&[
            ("REPORTS_HOST", "127.0.0.1"),
            ("REPORTS_PORT", "8081"),
            ("REPORTS_DATABASE", "/tmp/r.db"),
            ("REPORTS_UPLOAD_DIR", "/tmp/up"),
            ("REPORTS_OPEN_BROWSER", "yes"),
        ]));

        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.port, 8081);
        assert_eq!(settings.database_path, PathBuf::from("/tmp/r.db"));
        assert_eq!(settings.upload_dir, PathBuf::from("/tmp/up"));
        assert!(settings.open_browser);
        assert_eq!(settings.public_url(), "http://127.0.0.1:8081");
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let settings = settings_from(lookup_from(&[
            ("REPORTS_PORT", "not-a-port"),
            ("REPORTS_OPEN_BROWSER", "maybe"),
        ]));

        assert_eq!(settings.port, 5000);
        assert!(!settings.open_browser);
    }
}
