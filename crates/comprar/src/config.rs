//! Harness configuration: target base URL, credentials, timeouts, and the
//! session-store location. These are inputs to the harness, not part of the
//! page-object design.

use crate::browser::BrowserConfig;
use crate::locator::DEFAULT_TIMEOUT_MS;
use std::path::PathBuf;

/// Environment variable holding the shared account password
pub const PASSWORD_ENV: &str = "TEST_PASSWORD";

/// The public demo password used when [`PASSWORD_ENV`] is unset
pub const DEMO_PASSWORD: &str = "secret_sauce";

/// Bounded wait applied to tolerant error-surface queries (2 seconds)
pub const ERROR_SURFACE_TIMEOUT_MS: u64 = 2_000;

/// Configuration for the harness
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Base URL of the storefront under test
    pub base_url: String,
    /// Shared account password for every persona
    pub password: String,
    /// Directory holding one session capsule per role
    pub state_dir: PathBuf,
    /// Run the browser headless
    pub headless: bool,
    /// Timeout for `wait_for_*` and page-load waits
    pub default_timeout_ms: u64,
    /// Bounded wait for tolerant error-surface queries
    pub error_surface_timeout_ms: u64,
    /// Bounded wait for the post-login landing state during setup
    pub auth_timeout_ms: u64,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.saucedemo.com".to_string(),
            password: std::env::var(PASSWORD_ENV).unwrap_or_else(|_| DEMO_PASSWORD.to_string()),
            state_dir: PathBuf::from(".auth"),
            headless: true,
            default_timeout_ms: DEFAULT_TIMEOUT_MS,
            error_surface_timeout_ms: ERROR_SURFACE_TIMEOUT_MS,
            auth_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl HarnessConfig {
    /// Create a config with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the shared password
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Set the session-store directory
    #[must_use]
    pub fn with_state_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.state_dir = dir.into();
        self
    }

    /// Set headless mode
    #[must_use]
    pub const fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Set the default wait timeout
    #[must_use]
    pub const fn with_default_timeout(mut self, timeout_ms: u64) -> Self {
        self.default_timeout_ms = timeout_ms;
        self
    }

    /// Set the bounded wait for the post-login landing state
    #[must_use]
    pub const fn with_auth_timeout(mut self, timeout_ms: u64) -> Self {
        self.auth_timeout_ms = timeout_ms;
        self
    }

    /// Browser configuration derived from this harness config
    #[must_use]
    pub fn browser_config(&self) -> BrowserConfig {
        BrowserConfig::default()
            .with_base_url(self.base_url.clone())
            .with_headless(self.headless)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HarnessConfig::new();
        assert_eq!(config.base_url, "https://www.saucedemo.com");
        assert!(config.headless);
        assert_eq!(config.error_surface_timeout_ms, 2_000);
    }

    #[test]
    fn test_builders() {
        let config = HarnessConfig::new()
            .with_base_url("http://localhost:3000")
            .with_password("hunter2")
            .with_state_dir("/tmp/auth")
            .with_auth_timeout(250);
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.password, "hunter2");
        assert_eq!(config.state_dir, PathBuf::from("/tmp/auth"));
        assert_eq!(config.auth_timeout_ms, 250);
    }

    #[test]
    fn test_browser_config_inherits_base_url() {
        let config = HarnessConfig::new().with_base_url("http://localhost:9999");
        let browser = config.browser_config();
        assert_eq!(browser.base_url, "http://localhost:9999");
    }
}
