//! The login page, including its error surface.

use crate::browser::Page;
use crate::config::ERROR_SURFACE_TIMEOUT_MS;
use crate::locator::Selector;
use crate::result::ComprarResult;
use crate::wait::{poll_until, WaitOptions};

const USERNAME_INPUT: &str = "#user-name";
const PASSWORD_INPUT: &str = "#password";
const LOGIN_BUTTON: &str = "#login-button";
const LOGO: &str = ".login_logo";
const BOT_IMAGE: &str = ".bot_column";
const ERROR_TEST_ID: &str = "error";
const ERROR_DISMISS: &str = ".error-button";
// Matched exactly so the container is only found in its error state
const ERROR_CONTAINER: &str = "[class=\"error-message-container error\"]";

/// Page object for the login page
#[derive(Debug, Clone)]
pub struct LoginPage {
    page: Page,
}

impl LoginPage {
    /// Attach to a tab
    #[must_use]
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// Navigate to the login page.
    ///
    /// # Errors
    ///
    /// Returns an error if navigation fails.
    pub async fn open(&self) -> ComprarResult<()> {
        self.page.goto("/").await
    }

    /// Wait for the form to be rendered.
    ///
    /// # Errors
    ///
    /// Returns a timeout error if the form never shows.
    pub async fn wait_until_loaded(&self) -> ComprarResult<()> {
        self.page
            .wait_for_visible(&Selector::css(LOGIN_BUTTON), WaitOptions::new())
            .await
    }

    /// Fill both credential fields and submit, as one atomic operation.
    ///
    /// # Errors
    ///
    /// Returns an error if any form element is missing.
    pub async fn login(&self, username: &str, password: &str) -> ComprarResult<()> {
        self.page
            .fill(&Selector::css(USERNAME_INPUT), username)
            .await?;
        self.page
            .fill(&Selector::css(PASSWORD_INPUT), password)
            .await?;
        self.page.click(&Selector::css(LOGIN_BUTTON)).await
    }

    /// Clear both credential fields.
    ///
    /// # Errors
    ///
    /// Returns an error if either field is missing.
    pub async fn clear_credentials(&self) -> ComprarResult<()> {
        self.page.clear(&Selector::css(USERNAME_INPUT)).await?;
        self.page.clear(&Selector::css(PASSWORD_INPUT)).await
    }

    /// The username field's current value
    pub async fn username_value(&self) -> String {
        self.page.input_value(&Selector::css(USERNAME_INPUT)).await
    }

    /// The password field's current value
    pub async fn password_value(&self) -> String {
        self.page.input_value(&Selector::css(PASSWORD_INPUT)).await
    }

    /// Whether the submit button is enabled
    pub async fn login_button_enabled(&self) -> bool {
        self.page.is_enabled(&Selector::css(LOGIN_BUTTON)).await
    }

    /// Whether an error message surfaced, waiting up to the bounded
    /// error-surface window. Tolerant: a timeout means `false`.
    pub async fn error_visible(&self) -> bool {
        let options = WaitOptions::new().with_timeout_ms(ERROR_SURFACE_TIMEOUT_MS);
        let error = Selector::test_id(ERROR_TEST_ID);
        poll_until(options, || self.page.is_visible(&error)).await
    }

    /// The error message text, or an empty string if none is shown
    pub async fn error_text(&self) -> String {
        self.page.text(&Selector::test_id(ERROR_TEST_ID)).await
    }

    /// Dismiss the error message.
    ///
    /// # Errors
    ///
    /// Returns an error if no error is currently shown.
    pub async fn dismiss_error(&self) -> ComprarResult<()> {
        self.page.click(&Selector::css(ERROR_DISMISS)).await
    }

    /// A computed style property of the error container, or an empty string
    /// if the container is not in its error state
    pub async fn error_css(&self, property: &str) -> String {
        self.page
            .computed_style(&Selector::css(ERROR_CONTAINER), property)
            .await
    }

    /// The error container's background color
    pub async fn error_background_color(&self) -> String {
        self.error_css("background-color").await
    }

    /// Whether the tab currently shows the login form
    pub async fn is_on_login_page(&self) -> bool {
        self.page.is_visible(&Selector::css(LOGIN_BUTTON)).await
    }

    /// Whether login landed on the inventory page
    pub async fn redirected_to_inventory(&self) -> bool {
        self.page.current_url().await.contains("inventory")
    }

    /// The header logo text
    pub async fn logo_text(&self) -> String {
        self.page.text(&Selector::css(LOGO)).await
    }

    /// Whether the decorative bot image is rendered
    pub async fn bot_image_visible(&self) -> bool {
        self.page.is_visible(&Selector::css(BOT_IMAGE)).await
    }
}
