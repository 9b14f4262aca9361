//! Browser lifecycle and the element interaction facade.
//!
//! With the `browser` feature enabled the facade drives a real Chromium over
//! CDP; without it, the same API runs against the in-memory storefront
//! simulation, so the full suite is executable in CI with no browser binary.
//!
//! The facade is the only layer that touches element resolution. Page objects
//! hand it [`Selector`] values and get scalars back; element handles never
//! escape, so nothing upstream can go stale.
//!
//! Read-style queries (`text`, `is_visible`, `count`, ...) are tolerant and
//! degrade to a default when the element is missing. Actions (`click`,
//! `fill`, `select_option`) and `wait_for_*` fail hard.

use crate::locator::Selector;
use crate::session::StorageState;
use crate::wait::WaitOptions;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for launching a browser
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Run headless
    pub headless: bool,
    /// Viewport width in pixels
    pub viewport_width: u32,
    /// Viewport height in pixels
    pub viewport_height: u32,
    /// Explicit path to the Chromium executable
    pub chromium_path: Option<PathBuf>,
    /// Enable the Chromium sandbox
    pub sandbox: bool,
    /// Base URL that relative navigation targets resolve against
    pub base_url: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            viewport_width: 1280,
            viewport_height: 720,
            chromium_path: std::env::var("CHROMIUM_PATH").ok().map(PathBuf::from),
            sandbox: true,
            base_url: "https://www.saucedemo.com".to_string(),
        }
    }
}

impl BrowserConfig {
    /// Create a config with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set headless mode
    #[must_use]
    pub const fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Set the viewport size
    #[must_use]
    pub const fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    /// Set the Chromium executable path
    #[must_use]
    pub fn with_chromium_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.chromium_path = Some(path.into());
        self
    }

    /// Enable or disable the Chromium sandbox
    #[must_use]
    pub const fn with_sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Set the base URL for relative navigation
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

#[cfg(feature = "browser")]
mod cdp {
    use super::{BrowserConfig, Duration, Selector, StorageState, WaitOptions};
    use crate::result::{ComprarError, ComprarResult};
    use crate::session::Cookie;
    use crate::wait::poll_until;
    use base64::engine::general_purpose::STANDARD as BASE64;
    use base64::Engine;
    use chromiumoxide::browser::{Browser as CdpBrowser, BrowserConfig as CdpBrowserConfig};
    use chromiumoxide::cdp::browser_protocol::network::CookieParam;
    use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotParams;
    use chromiumoxide::page::Page as CdpPage;
    use futures::StreamExt;
    use std::path::Path;

    /// A running Chromium instance
    pub struct Browser {
        browser: CdpBrowser,
        handler_task: tokio::task::JoinHandle<()>,
        base_url: String,
    }

    impl std::fmt::Debug for Browser {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Browser")
                .field("base_url", &self.base_url)
                .finish_non_exhaustive()
        }
    }

    impl Browser {
        /// Launch Chromium with the given configuration.
        ///
        /// # Errors
        ///
        /// Returns an error if the executable cannot be found or the launch
        /// handshake fails.
        pub async fn launch(config: BrowserConfig) -> ComprarResult<Self> {
            let mut builder = CdpBrowserConfig::builder()
                .window_size(config.viewport_width, config.viewport_height);
            if !config.headless {
                builder = builder.with_head();
            }
            if !config.sandbox {
                builder = builder.no_sandbox();
            }
            if let Some(path) = &config.chromium_path {
                builder = builder.chrome_executable(path);
            }
            let cdp_config = builder
                .build()
                .map_err(|message| ComprarError::BrowserLaunch { message })?;

            let (browser, mut handler) =
                CdpBrowser::launch(cdp_config)
                    .await
                    .map_err(|e| ComprarError::BrowserLaunch {
                        message: e.to_string(),
                    })?;

            let handler_task = tokio::spawn(async move {
                while let Some(event) = handler.next().await {
                    if event.is_err() {
                        break;
                    }
                }
            });

            tracing::info!(headless = config.headless, "browser launched");
            Ok(Self {
                browser,
                handler_task,
                base_url: config.base_url,
            })
        }

        /// Open a new blank tab.
        ///
        /// # Errors
        ///
        /// Returns an error if the tab cannot be created.
        pub async fn new_page(&self) -> ComprarResult<Page> {
            let page = self
                .browser
                .new_page("about:blank")
                .await
                .map_err(|e| ComprarError::Page {
                    message: e.to_string(),
                })?;
            Ok(Page {
                page,
                base_url: self.base_url.clone(),
            })
        }

        /// Close the browser.
        ///
        /// # Errors
        ///
        /// Returns an error if the shutdown command fails.
        pub async fn close(mut self) -> ComprarResult<()> {
            self.browser
                .close()
                .await
                .map_err(|e| ComprarError::Page {
                    message: e.to_string(),
                })?;
            self.handler_task.abort();
            Ok(())
        }
    }

    /// A browser tab driven over CDP
    #[derive(Debug, Clone)]
    pub struct Page {
        page: CdpPage,
        base_url: String,
    }

    impl Page {
        /// The base URL relative navigation resolves against
        #[must_use]
        pub fn base_url(&self) -> &str {
            &self.base_url
        }

        fn resolve_url(&self, url: &str) -> String {
            if url.starts_with('/') {
                format!("{}{}", self.base_url, url)
            } else {
                url.to_string()
            }
        }

        async fn eval<T: serde::de::DeserializeOwned>(&self, js: String) -> ComprarResult<T> {
            let result = self.page.evaluate(js).await.map_err(|e| ComprarError::Page {
                message: e.to_string(),
            })?;
            result.into_value().map_err(|e| ComprarError::Page {
                message: e.to_string(),
            })
        }

        /// Tolerant evaluation: protocol and decode failures degrade to the
        /// caller's default
        async fn eval_or<T: serde::de::DeserializeOwned>(&self, js: String, default: T) -> T {
            self.eval(js).await.unwrap_or(default)
        }

        /// Navigate to an absolute URL or a path relative to the base URL.
        ///
        /// # Errors
        ///
        /// Returns an error if navigation fails.
        pub async fn goto(&self, url: &str) -> ComprarResult<()> {
            let target = self.resolve_url(url);
            self.page
                .goto(&target)
                .await
                .map_err(|e| ComprarError::Navigation {
                    url: target.clone(),
                    message: e.to_string(),
                })?;
            tracing::debug!(url = %target, "navigated");
            Ok(())
        }

        /// The tab's current URL, or an empty string before first navigation
        pub async fn current_url(&self) -> String {
            self.page.url().await.ok().flatten().unwrap_or_default()
        }

        /// Click the element, failing if it does not exist.
        ///
        /// # Errors
        ///
        /// Returns [`ComprarError::ElementNotFound`] if no element matches.
        pub async fn click(&self, selector: &Selector) -> ComprarResult<()> {
            let js = format!(
                "(() => {{ const el = {}; if (!el) return false; el.click(); return true; }})()",
                selector.to_query()
            );
            if self.eval::<bool>(js).await? {
                Ok(())
            } else {
                Err(ComprarError::ElementNotFound {
                    selector: selector.to_string(),
                })
            }
        }

        /// Replace an input's value, failing if the element does not exist.
        ///
        /// # Errors
        ///
        /// Returns [`ComprarError::ElementNotFound`] if no element matches.
        pub async fn fill(&self, selector: &Selector, text: &str) -> ComprarResult<()> {
            let js = format!(
                "(() => {{ const el = {}; if (!el) return false; \
                 el.value = {text:?}; \
                 el.dispatchEvent(new Event('input', {{ bubbles: true }})); \
                 el.dispatchEvent(new Event('change', {{ bubbles: true }})); \
                 return true; }})()",
                selector.to_query()
            );
            if self.eval::<bool>(js).await? {
                Ok(())
            } else {
                Err(ComprarError::ElementNotFound {
                    selector: selector.to_string(),
                })
            }
        }

        /// Clear an input's value.
        ///
        /// # Errors
        ///
        /// Returns [`ComprarError::ElementNotFound`] if no element matches.
        pub async fn clear(&self, selector: &Selector) -> ComprarResult<()> {
            self.fill(selector, "").await
        }

        /// Choose a `<select>` option by its value code.
        ///
        /// # Errors
        ///
        /// Returns [`ComprarError::ElementNotFound`] if the control is
        /// missing or has no option with the given value.
        pub async fn select_option(&self, selector: &Selector, value: &str) -> ComprarResult<()> {
            let js = format!(
                "(() => {{ const el = {}; if (!el) return false; \
                 if (![...el.options].some(o => o.value === {value:?})) return false; \
                 el.value = {value:?}; \
                 el.dispatchEvent(new Event('change', {{ bubbles: true }})); \
                 return true; }})()",
                selector.to_query()
            );
            if self.eval::<bool>(js).await? {
                Ok(())
            } else {
                Err(ComprarError::ElementNotFound {
                    selector: selector.to_string(),
                })
            }
        }

        /// The element's text content, or an empty string if absent
        pub async fn text(&self, selector: &Selector) -> String {
            let js = format!(
                "(() => {{ const el = {}; return el ? (el.textContent ?? '') : ''; }})()",
                selector.to_query()
            );
            self.eval_or(js, String::new()).await
        }

        /// An attribute value, or `None` if the element or attribute is absent
        pub async fn attribute(&self, selector: &Selector, name: &str) -> Option<String> {
            let js = format!(
                "(() => {{ const el = {}; return el ? el.getAttribute({name:?}) : null; }})()",
                selector.to_query()
            );
            self.eval_or(js, None).await
        }

        /// An input's current value, or an empty string if absent
        pub async fn input_value(&self, selector: &Selector) -> String {
            let js = format!(
                "(() => {{ const el = {}; return el ? (el.value ?? '') : ''; }})()",
                selector.to_query()
            );
            self.eval_or(js, String::new()).await
        }

        /// Whether the element exists and is rendered visible
        pub async fn is_visible(&self, selector: &Selector) -> bool {
            let js = format!(
                "(() => {{ const el = {}; if (!el) return false; \
                 const style = getComputedStyle(el); \
                 if (style.display === 'none' || style.visibility === 'hidden') return false; \
                 const rect = el.getBoundingClientRect(); \
                 return rect.width > 0 && rect.height > 0; }})()",
                selector.to_query()
            );
            self.eval_or(js, false).await
        }

        /// Whether the element exists and is not disabled
        pub async fn is_enabled(&self, selector: &Selector) -> bool {
            let js = format!(
                "(() => {{ const el = {}; return el ? !el.disabled : false; }})()",
                selector.to_query()
            );
            self.eval_or(js, false).await
        }

        /// A computed style property, or an empty string if the element is
        /// absent
        pub async fn computed_style(&self, selector: &Selector, property: &str) -> String {
            let js = format!(
                "(() => {{ const el = {}; \
                 return el ? getComputedStyle(el).getPropertyValue({property:?}) : ''; }})()",
                selector.to_query()
            );
            self.eval_or(js, String::new()).await
        }

        /// How many elements currently match
        pub async fn count(&self, selector: &Selector) -> usize {
            self.eval_or(selector.to_count_query(), 0).await
        }

        /// Wait until the element is visible.
        ///
        /// # Errors
        ///
        /// Returns [`ComprarError::Timeout`] if the wait expires.
        pub async fn wait_for_visible(
            &self,
            selector: &Selector,
            options: WaitOptions,
        ) -> ComprarResult<()> {
            if poll_until(options, || self.is_visible(selector)).await {
                Ok(())
            } else {
                Err(ComprarError::Timeout {
                    waited_for: format!("{selector} to be visible"),
                    ms: options.timeout.as_millis() as u64,
                })
            }
        }

        /// Wait until the element is hidden or gone.
        ///
        /// # Errors
        ///
        /// Returns [`ComprarError::Timeout`] if the wait expires.
        pub async fn wait_for_hidden(
            &self,
            selector: &Selector,
            options: WaitOptions,
        ) -> ComprarResult<()> {
            let gone = poll_until(options, || async { !self.is_visible(selector).await }).await;
            if gone {
                Ok(())
            } else {
                Err(ComprarError::Timeout {
                    waited_for: format!("{selector} to be hidden"),
                    ms: options.timeout.as_millis() as u64,
                })
            }
        }

        /// Sleep without touching the page
        pub async fn pause(&self, duration: Duration) {
            tokio::time::sleep(duration).await;
        }

        /// Capture a PNG screenshot to `path`.
        ///
        /// # Errors
        ///
        /// Returns an error if capture or the file write fails.
        pub async fn screenshot(&self, path: &Path) -> ComprarResult<()> {
            let response = self
                .page
                .execute(CaptureScreenshotParams::default())
                .await
                .map_err(|e| ComprarError::Screenshot {
                    message: e.to_string(),
                })?;
            let bytes =
                BASE64
                    .decode(response.data.as_bytes())
                    .map_err(|e| ComprarError::Screenshot {
                        message: e.to_string(),
                    })?;
            tokio::fs::write(path, bytes).await?;
            Ok(())
        }

        /// Export the tab's session state (cookies and web storage).
        ///
        /// # Errors
        ///
        /// Returns an error if the protocol calls fail.
        pub async fn storage_state(&self) -> ComprarResult<StorageState> {
            let cookies = self
                .page
                .get_cookies()
                .await
                .map_err(|e| ComprarError::Session {
                    message: e.to_string(),
                })?;
            let mut state = StorageState::new();
            for c in cookies {
                state.cookies.push(Cookie {
                    name: c.name,
                    value: c.value,
                    domain: c.domain,
                    path: c.path,
                    expires: (c.expires >= 0.0).then_some(c.expires as i64),
                    http_only: c.http_only,
                    secure: c.secure,
                });
            }
            let origin: String = self
                .eval_or("window.location.origin".to_string(), String::new())
                .await;
            if !origin.is_empty() && origin != "null" {
                let local: std::collections::HashMap<String, String> = self
                    .eval_or(
                        "Object.fromEntries(Object.entries(localStorage))".to_string(),
                        std::collections::HashMap::new(),
                    )
                    .await;
                if !local.is_empty() {
                    state.local_storage.insert(origin, local);
                }
            }
            Ok(state)
        }

        /// Import session state into the tab.
        ///
        /// Cookies apply immediately; web storage needs an origin, so it is
        /// written after navigating to the owning origin.
        ///
        /// # Errors
        ///
        /// Returns an error if the protocol calls fail.
        pub async fn restore_storage_state(&self, state: &StorageState) -> ComprarResult<()> {
            let mut params = Vec::with_capacity(state.cookies.len());
            for c in &state.cookies {
                let param = CookieParam::builder()
                    .name(&c.name)
                    .value(&c.value)
                    .domain(&c.domain)
                    .path(&c.path)
                    .build()
                    .map_err(|message| ComprarError::Session { message })?;
                params.push(param);
            }
            if !params.is_empty() {
                self.page
                    .set_cookies(params)
                    .await
                    .map_err(|e| ComprarError::Session {
                        message: e.to_string(),
                    })?;
            }
            for (origin, items) in &state.local_storage {
                self.goto(origin).await?;
                for (key, value) in items {
                    let js = format!("localStorage.setItem({key:?}, {value:?})");
                    let _: Option<String> = self.eval_or(js, None).await;
                }
            }
            Ok(())
        }
    }
}

#[cfg(not(feature = "browser"))]
mod sim_backend {
    use super::{BrowserConfig, Duration, Selector, StorageState, WaitOptions};
    use crate::result::{ComprarError, ComprarResult};
    use crate::sim::DemoStore;
    use crate::wait::poll_until;
    use std::path::Path;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    /// Minimal valid 1x1 PNG, written by the simulated screenshot capture
    const PLACEHOLDER_PNG: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48,
        0x44, 0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00,
        0x00, 0x1F, 0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78,
        0x9C, 0x62, 0x00, 0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00,
        0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ];

    /// A simulated browser instance
    #[derive(Debug)]
    pub struct Browser {
        base_url: String,
    }

    impl Browser {
        /// Start a simulated browser.
        ///
        /// # Errors
        ///
        /// Infallible in the simulation; the signature matches the CDP
        /// backend.
        pub async fn launch(config: BrowserConfig) -> ComprarResult<Self> {
            tracing::info!(headless = config.headless, "simulated browser launched");
            Ok(Self {
                base_url: config.base_url,
            })
        }

        /// Open a new simulated tab with fresh storefront state.
        ///
        /// # Errors
        ///
        /// Infallible in the simulation.
        pub async fn new_page(&self) -> ComprarResult<Page> {
            Ok(Page {
                base_url: self.base_url.clone(),
                store: Arc::new(Mutex::new(DemoStore::new(self.base_url.clone()))),
            })
        }

        /// Close the simulated browser.
        ///
        /// # Errors
        ///
        /// Infallible in the simulation.
        pub async fn close(self) -> ComprarResult<()> {
            Ok(())
        }
    }

    /// A simulated browser tab
    #[derive(Debug, Clone)]
    pub struct Page {
        base_url: String,
        store: Arc<Mutex<DemoStore>>,
    }

    impl Page {
        /// The base URL relative navigation resolves against
        #[must_use]
        pub fn base_url(&self) -> &str {
            &self.base_url
        }

        /// Navigate to an absolute URL or a path relative to the base URL.
        ///
        /// # Errors
        ///
        /// Infallible in the simulation.
        pub async fn goto(&self, url: &str) -> ComprarResult<()> {
            let target = if url.starts_with('/') {
                format!("{}{}", self.base_url, url)
            } else {
                url.to_string()
            };
            let delay = {
                let mut store = self.store.lock().await;
                let delay = store.navigation_delay();
                store.navigate(&target);
                delay
            };
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            tracing::debug!(url = %target, "navigated");
            Ok(())
        }

        /// The tab's current URL
        pub async fn current_url(&self) -> String {
            self.store.lock().await.current_url()
        }

        /// Click the element, failing if it does not exist.
        ///
        /// # Errors
        ///
        /// Returns [`ComprarError::ElementNotFound`] if no element matches.
        pub async fn click(&self, selector: &Selector) -> ComprarResult<()> {
            let delay = {
                let mut store = self.store.lock().await;
                let before = store.current_url();
                store.click(selector)?;
                if store.current_url() == before {
                    Duration::ZERO
                } else {
                    store.navigation_delay()
                }
            };
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            Ok(())
        }

        /// Replace an input's value.
        ///
        /// # Errors
        ///
        /// Returns [`ComprarError::ElementNotFound`] if no element matches.
        pub async fn fill(&self, selector: &Selector, text: &str) -> ComprarResult<()> {
            self.store.lock().await.fill(selector, text)
        }

        /// Clear an input's value.
        ///
        /// # Errors
        ///
        /// Returns [`ComprarError::ElementNotFound`] if no element matches.
        pub async fn clear(&self, selector: &Selector) -> ComprarResult<()> {
            self.fill(selector, "").await
        }

        /// Choose a `<select>` option by its value code.
        ///
        /// # Errors
        ///
        /// Returns [`ComprarError::ElementNotFound`] if the control is
        /// missing, or a page error for an unknown option code.
        pub async fn select_option(&self, selector: &Selector, value: &str) -> ComprarResult<()> {
            self.store.lock().await.select(selector, value)
        }

        /// The element's text content, or an empty string if absent
        pub async fn text(&self, selector: &Selector) -> String {
            self.store.lock().await.text(selector)
        }

        /// An attribute value, or `None` if the element or attribute is absent
        pub async fn attribute(&self, selector: &Selector, name: &str) -> Option<String> {
            self.store.lock().await.attribute(selector, name)
        }

        /// An input's current value, or an empty string if absent
        pub async fn input_value(&self, selector: &Selector) -> String {
            self.store.lock().await.input_value(selector)
        }

        /// Whether the element exists and is rendered visible
        pub async fn is_visible(&self, selector: &Selector) -> bool {
            self.store.lock().await.visible(selector)
        }

        /// Whether the element exists and is not disabled
        pub async fn is_enabled(&self, selector: &Selector) -> bool {
            self.store.lock().await.enabled(selector)
        }

        /// A computed style property, or an empty string if the element is
        /// absent
        pub async fn computed_style(&self, selector: &Selector, property: &str) -> String {
            self.store.lock().await.computed_style(selector, property)
        }

        /// How many elements currently match
        pub async fn count(&self, selector: &Selector) -> usize {
            self.store.lock().await.count(selector)
        }

        /// Wait until the element is visible.
        ///
        /// # Errors
        ///
        /// Returns [`ComprarError::Timeout`] if the wait expires.
        pub async fn wait_for_visible(
            &self,
            selector: &Selector,
            options: WaitOptions,
        ) -> ComprarResult<()> {
            if poll_until(options, || self.is_visible(selector)).await {
                Ok(())
            } else {
                Err(ComprarError::Timeout {
                    waited_for: format!("{selector} to be visible"),
                    ms: options.timeout.as_millis() as u64,
                })
            }
        }

        /// Wait until the element is hidden or gone.
        ///
        /// # Errors
        ///
        /// Returns [`ComprarError::Timeout`] if the wait expires.
        pub async fn wait_for_hidden(
            &self,
            selector: &Selector,
            options: WaitOptions,
        ) -> ComprarResult<()> {
            let gone = poll_until(options, || async { !self.is_visible(selector).await }).await;
            if gone {
                Ok(())
            } else {
                Err(ComprarError::Timeout {
                    waited_for: format!("{selector} to be hidden"),
                    ms: options.timeout.as_millis() as u64,
                })
            }
        }

        /// Sleep without touching the page
        pub async fn pause(&self, duration: Duration) {
            tokio::time::sleep(duration).await;
        }

        /// Write a placeholder PNG to `path`.
        ///
        /// # Errors
        ///
        /// Returns an error if the file write fails.
        pub async fn screenshot(&self, path: &Path) -> ComprarResult<()> {
            tokio::fs::write(path, PLACEHOLDER_PNG).await?;
            Ok(())
        }

        /// Export the tab's session state.
        ///
        /// # Errors
        ///
        /// Infallible in the simulation.
        pub async fn storage_state(&self) -> ComprarResult<StorageState> {
            Ok(self.store.lock().await.export_state())
        }

        /// Import session state into the tab.
        ///
        /// # Errors
        ///
        /// Infallible in the simulation.
        pub async fn restore_storage_state(&self, state: &StorageState) -> ComprarResult<()> {
            self.store.lock().await.import_state(state);
            Ok(())
        }
    }
}

#[cfg(feature = "browser")]
pub use cdp::{Browser, Page};
#[cfg(not(feature = "browser"))]
pub use sim_backend::{Browser, Page};

#[cfg(test)]
mod tests {
    use super::*;

    mod config_tests {
        use super::*;

        #[test]
        fn test_defaults() {
            let config = BrowserConfig::new();
            assert!(config.headless);
            assert!(config.sandbox);
            assert_eq!(config.viewport_width, 1280);
            assert_eq!(config.base_url, "https://www.saucedemo.com");
        }

        #[test]
        fn test_builders() {
            let config = BrowserConfig::new()
                .with_headless(false)
                .with_viewport(1920, 1080)
                .with_sandbox(false)
                .with_base_url("http://localhost:3000");
            assert!(!config.headless);
            assert_eq!(config.viewport_height, 1080);
            assert!(!config.sandbox);
            assert_eq!(config.base_url, "http://localhost:3000");
        }
    }

    #[cfg(not(feature = "browser"))]
    mod facade_tests {
        use super::*;

        async fn page() -> Page {
            let browser = Browser::launch(
                BrowserConfig::new().with_base_url("https://demo.test"),
            )
            .await
            .unwrap();
            browser.new_page().await.unwrap()
        }

        #[tokio::test]
        async fn test_relative_navigation_resolves_against_base() {
            let page = page().await;
            page.goto("/").await.unwrap();
            assert_eq!(page.current_url().await, "https://demo.test/");
        }

        #[tokio::test]
        async fn test_missing_element_reads_degrade_to_defaults() {
            let page = page().await;
            page.goto("/").await.unwrap();
            let ghost = Selector::css(".does_not_exist");
            assert_eq!(page.text(&ghost).await, "");
            assert_eq!(page.attribute(&ghost, "src").await, None);
            assert!(!page.is_visible(&ghost).await);
            assert_eq!(page.count(&ghost).await, 0);
        }

        #[tokio::test]
        async fn test_missing_element_action_fails_hard() {
            let page = page().await;
            page.goto("/").await.unwrap();
            let err = page.click(&Selector::css(".does_not_exist")).await;
            assert!(matches!(
                err,
                Err(crate::ComprarError::ElementNotFound { .. })
            ));
        }

        #[tokio::test]
        async fn test_wait_for_visible_times_out() {
            let page = page().await;
            page.goto("/").await.unwrap();
            let options = WaitOptions::new()
                .with_timeout_ms(20)
                .with_poll_interval_ms(5);
            let err = page
                .wait_for_visible(&Selector::css(".does_not_exist"), options)
                .await;
            assert!(matches!(err, Err(crate::ComprarError::Timeout { .. })));
        }

        #[tokio::test]
        async fn test_tabs_are_isolated() {
            let browser = Browser::launch(
                BrowserConfig::new().with_base_url("https://demo.test"),
            )
            .await
            .unwrap();
            let a = browser.new_page().await.unwrap();
            let b = browser.new_page().await.unwrap();
            a.goto("/").await.unwrap();
            a.fill(&Selector::css("#user-name"), "standard_user")
                .await
                .unwrap();
            b.goto("/").await.unwrap();
            assert_eq!(b.input_value(&Selector::css("#user-name")).await, "");
        }
    }
}
