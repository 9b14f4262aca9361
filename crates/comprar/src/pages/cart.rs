//! The cart page.

use crate::browser::Page;
use crate::config::ERROR_SURFACE_TIMEOUT_MS;
use crate::locator::Selector;
use crate::pages::navigation::NavigationMenu;
use crate::result::{ComprarError, ComprarResult};
use crate::wait::{poll_until, WaitOptions};

const ROW: &str = ".cart_item";
const ROW_NAME: &str = ".inventory_item_name";
const ROW_REMOVE: &str = "button[id^=\"remove-\"]";
const TITLE: &str = ".title";
const CHECKOUT_BUTTON: &str = "checkout";
const CONTINUE_SHOPPING: &str = "continue-shopping";
const ERROR_SURFACE: &str = ".error-message";

/// Page object for the cart page
#[derive(Debug, Clone)]
pub struct CartPage {
    page: Page,
    /// The composed burger menu
    pub navigation: NavigationMenu,
}

impl CartPage {
    /// Attach to a tab
    #[must_use]
    pub fn new(page: Page) -> Self {
        let navigation = NavigationMenu::new(page.clone());
        Self { page, navigation }
    }

    /// Navigate to the cart page.
    ///
    /// # Errors
    ///
    /// Returns an error if navigation fails.
    pub async fn open(&self) -> ComprarResult<()> {
        self.page.goto("/cart.html").await
    }

    /// Wait for the page header to be rendered.
    ///
    /// # Errors
    ///
    /// Returns a timeout error if it never shows.
    pub async fn wait_until_loaded(&self) -> ComprarResult<()> {
        self.page
            .wait_for_visible(&Selector::css(TITLE), WaitOptions::new())
            .await
    }

    /// The page title text
    pub async fn title(&self) -> String {
        self.page.text(&Selector::css(TITLE)).await
    }

    /// How many cart rows are currently rendered
    pub async fn item_count(&self) -> usize {
        self.page.count(&Selector::css(ROW)).await
    }

    /// The product names in the cart, in row order
    pub async fn item_names(&self) -> Vec<String> {
        let count = self.item_count().await;
        let mut names = Vec::with_capacity(count);
        for i in 0..count {
            let name = Selector::nth(ROW, i).child(ROW_NAME);
            names.push(self.page.text(&name).await);
        }
        names
    }

    /// Remove the row at `index`, bounds-checked against the live cart.
    ///
    /// # Errors
    ///
    /// Returns [`ComprarError::OutOfBounds`] if the index is past the end.
    pub async fn remove_item(&self, index: usize) -> ComprarResult<()> {
        let count = self.item_count().await;
        if index >= count {
            return Err(ComprarError::OutOfBounds {
                index,
                count,
                collection: "Cart",
            });
        }
        let remove = Selector::nth(ROW, index).child(ROW_REMOVE);
        self.page.click(&remove).await
    }

    /// Proceed to checkout.
    ///
    /// # Errors
    ///
    /// Returns an error if the button is missing.
    pub async fn checkout(&self) -> ComprarResult<()> {
        self.page.click(&Selector::test_id(CHECKOUT_BUTTON)).await
    }

    /// Go back to the inventory page.
    ///
    /// # Errors
    ///
    /// Returns an error if the button is missing.
    pub async fn continue_shopping(&self) -> ComprarResult<()> {
        self.page.click(&Selector::test_id(CONTINUE_SHOPPING)).await
    }

    /// Whether a cart error surfaced, waiting up to the bounded
    /// error-surface window. Tolerant: a timeout means `false`.
    pub async fn error_visible(&self) -> bool {
        let options = WaitOptions::new().with_timeout_ms(ERROR_SURFACE_TIMEOUT_MS);
        let error = Selector::css(ERROR_SURFACE);
        poll_until(options, || self.page.is_visible(&error)).await
    }

    /// The cart error text, or an empty string if none is shown
    pub async fn error_text(&self) -> String {
        self.page.text(&Selector::css(ERROR_SURFACE)).await
    }
}
