//! The checkout information page (step one) and its validation surface.

use crate::browser::Page;
use crate::config::ERROR_SURFACE_TIMEOUT_MS;
use crate::data::CheckoutIdentity;
use crate::locator::Selector;
use crate::result::ComprarResult;
use crate::wait::{poll_until, WaitOptions};

const FIRST_NAME: &str = "firstName";
const LAST_NAME: &str = "lastName";
const POSTAL_CODE: &str = "postalCode";
const CONTINUE_BUTTON: &str = "continue";
const CANCEL_BUTTON: &str = "cancel";
const ERROR_TEST_ID: &str = "error";
const ERROR_DISMISS: &str = ".error-button";
const TITLE: &str = ".title";

/// Page object for the checkout information page
#[derive(Debug, Clone)]
pub struct CheckoutPage {
    page: Page,
}

impl CheckoutPage {
    /// Attach to a tab
    #[must_use]
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// Navigate to the checkout information page.
    ///
    /// # Errors
    ///
    /// Returns an error if navigation fails.
    pub async fn open(&self) -> ComprarResult<()> {
        self.page.goto("/checkout-step-one.html").await
    }

    /// Wait for the form to be rendered.
    ///
    /// # Errors
    ///
    /// Returns a timeout error if the form never shows.
    pub async fn wait_until_loaded(&self) -> ComprarResult<()> {
        self.page
            .wait_for_visible(&Selector::test_id(FIRST_NAME), WaitOptions::new())
            .await
    }

    /// The page title text
    pub async fn title(&self) -> String {
        self.page.text(&Selector::css(TITLE)).await
    }

    /// Fill the first-name field.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is missing.
    pub async fn fill_first_name(&self, value: &str) -> ComprarResult<()> {
        self.page.fill(&Selector::test_id(FIRST_NAME), value).await
    }

    /// Fill the last-name field.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is missing.
    pub async fn fill_last_name(&self, value: &str) -> ComprarResult<()> {
        self.page.fill(&Selector::test_id(LAST_NAME), value).await
    }

    /// Fill the postal-code field.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is missing.
    pub async fn fill_postal_code(&self, value: &str) -> ComprarResult<()> {
        self.page.fill(&Selector::test_id(POSTAL_CODE), value).await
    }

    /// Fill all three fields from an identity.
    ///
    /// # Errors
    ///
    /// Returns an error if any field is missing.
    pub async fn fill_information(&self, identity: CheckoutIdentity) -> ComprarResult<()> {
        self.fill_first_name(identity.first_name).await?;
        self.fill_last_name(identity.last_name).await?;
        self.fill_postal_code(identity.postal_code).await
    }

    /// Submit the form.
    ///
    /// # Errors
    ///
    /// Returns an error if the button is missing.
    pub async fn submit(&self) -> ComprarResult<()> {
        self.page.click(&Selector::test_id(CONTINUE_BUTTON)).await
    }

    /// Cancel back to the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the button is missing.
    pub async fn cancel(&self) -> ComprarResult<()> {
        self.page.click(&Selector::test_id(CANCEL_BUTTON)).await
    }

    /// Fill an identity and submit in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if any form element is missing.
    pub async fn complete(&self, identity: CheckoutIdentity) -> ComprarResult<()> {
        self.fill_information(identity).await?;
        self.submit().await
    }

    /// Whether submission advanced to the overview step
    pub async fn reached_overview(&self) -> bool {
        self.page
            .current_url()
            .await
            .contains("checkout-step-two")
    }

    /// Whether a validation error surfaced, waiting up to the bounded
    /// error-surface window. Tolerant: a timeout means `false`.
    pub async fn error_visible(&self) -> bool {
        let options = WaitOptions::new().with_timeout_ms(ERROR_SURFACE_TIMEOUT_MS);
        let error = Selector::test_id(ERROR_TEST_ID);
        poll_until(options, || self.page.is_visible(&error)).await
    }

    /// The validation error text, or an empty string if none is shown
    pub async fn error_text(&self) -> String {
        self.page.text(&Selector::test_id(ERROR_TEST_ID)).await
    }

    /// Dismiss the validation error.
    ///
    /// # Errors
    ///
    /// Returns an error if no error is currently shown.
    pub async fn dismiss_error(&self) -> ComprarResult<()> {
        self.page.click(&Selector::css(ERROR_DISMISS)).await
    }

    /// Whether all three fields currently hold a non-empty value
    pub async fn all_fields_filled(&self) -> bool {
        for field in [FIRST_NAME, LAST_NAME, POSTAL_CODE] {
            if self.page.input_value(&Selector::test_id(field)).await.is_empty() {
                return false;
            }
        }
        true
    }

    /// Clear all three fields.
    ///
    /// # Errors
    ///
    /// Returns an error if any field is missing.
    pub async fn clear_all(&self) -> ComprarResult<()> {
        for field in [FIRST_NAME, LAST_NAME, POSTAL_CODE] {
            self.page.clear(&Selector::test_id(field)).await?;
        }
        Ok(())
    }
}
