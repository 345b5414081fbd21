//! Client Configuration
//!
//! Compile-time defaults with optional build-time overrides.

use log::LevelFilter;

use crate::models::UserId;

pub const DEFAULT_API_BASE_URL: &str = "https://mate.academy/students-api";
pub const DEFAULT_USER_ID: UserId = 1;
/// How long a transient error stays on screen
pub const DEFAULT_ERROR_DISPLAY_MS: u32 = 1500;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub user_id: UserId,
    pub error_display_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            user_id: DEFAULT_USER_ID,
            error_display_ms: DEFAULT_ERROR_DISPLAY_MS,
            log_level: LevelFilter::Info,
        }
    }
}

impl ClientConfig {
    /// Defaults, overridden by `TODO_API_BASE_URL` / `TODO_USER_ID` / `TODO_LOG_LEVEL`
    /// when they were set at build time.
    pub fn from_build_env() -> Self {
        Self::from_overrides(
            option_env!("TODO_API_BASE_URL"),
            option_env!("TODO_USER_ID"),
            option_env!("TODO_LOG_LEVEL"),
        )
    }

    fn from_overrides(
        base_url: Option<&str>,
        user_id: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let mut config = Self::default();

        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(id) = user_id.and_then(|s| s.trim().parse().ok()) {
            config.user_id = id;
        }
        if let Some(level) = log_level.and_then(|s| s.trim().parse().ok()) {
            config.log_level = level;
        }

        config
    }

    pub fn session(&self) -> Session {
        Session { user_id: self.user_id }
    }
}

/// The signed-in user this client acts for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub user_id: UserId,
}

impl Session {
    #[cfg(test)]
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}
