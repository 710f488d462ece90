use log::Level;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Analytics API root, without a trailing slash (e.g. "http://127.0.0.1:8000/api")
    pub api_base_url: String,

    /// How often the dashboard refreshes its panels, in milliseconds
    pub poll_interval_ms: u32,

    /// Default log level for the application
    pub log_level: Level,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000/api".to_string(),
            poll_interval_ms: 30_000,
            log_level: Level::Info,
            toast_duration_ms: 5000,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            // Local development gets verbose logging
            if hostname == "localhost" || hostname == "127.0.0.1" {
                settings.log_level = Level::Debug;
            }
        }

        // Custom settings from localStorage
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(base_url)) = storage.get_item("ses_api_base_url") {
                settings.api_base_url = base_url.trim_end_matches('/').to_string();
            }

            if let Ok(Some(interval)) = storage.get_item("ses_poll_interval_ms") {
                if let Ok(interval) = interval.parse::<u32>() {
                    settings.poll_interval_ms = interval.max(1000);
                }
            }

            if let Ok(Some(log_level)) = storage.get_item("ses_log_level") {
                settings.log_level = match log_level.to_lowercase().as_str() {
                    "error" => Level::Error,
                    "warn" => Level::Warn,
                    "info" => Level::Info,
                    "debug" => Level::Debug,
                    "trace" => Level::Trace,
                    _ => settings.log_level,
                };
            }

            if let Ok(Some(duration)) = storage.get_item("ses_toast_duration_ms") {
                if let Ok(duration) = duration.parse::<u32>() {
                    settings.toast_duration_ms = duration;
                }
            }
        }

        settings
    }

    /// Get the full API URL for an endpoint such as "/forecast/"
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url, endpoint)
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
