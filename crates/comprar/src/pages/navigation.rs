//! The slide-out burger menu, composed into every authenticated page.

use crate::browser::Page;
use crate::locator::Selector;
use crate::result::ComprarResult;
use crate::wait::WaitOptions;

const MENU_BUTTON: &str = "#react-burger-menu-btn";
const CLOSE_BUTTON: &str = "#react-burger-cross-btn";
const MENU_PANEL: &str = ".bm-menu-wrap";
const ALL_ITEMS_LINK: &str = "#inventory_sidebar_link";
const ABOUT_LINK: &str = "#about_sidebar_link";
const LOGOUT_LINK: &str = "#logout_sidebar_link";
const RESET_LINK: &str = "#reset_sidebar_link";

/// The burger menu shared by all authenticated pages
#[derive(Debug, Clone)]
pub struct NavigationMenu {
    page: Page,
}

impl NavigationMenu {
    /// Attach to a tab
    #[must_use]
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// Open the menu and wait for the panel to slide in.
    ///
    /// # Errors
    ///
    /// Returns an error if the button is missing or the panel never shows.
    pub async fn open(&self) -> ComprarResult<()> {
        self.page.click(&Selector::css(MENU_BUTTON)).await?;
        self.page
            .wait_for_visible(&Selector::css(MENU_PANEL), WaitOptions::new())
            .await
    }

    /// Close the menu and wait for the panel to slide out.
    ///
    /// # Errors
    ///
    /// Returns an error if the button is missing or the panel never hides.
    pub async fn close(&self) -> ComprarResult<()> {
        self.page.click(&Selector::css(CLOSE_BUTTON)).await?;
        self.page
            .wait_for_hidden(&Selector::css(MENU_PANEL), WaitOptions::new())
            .await
    }

    /// Whether the menu panel is currently visible. Pure query, no waiting.
    pub async fn is_open(&self) -> bool {
        self.page.is_visible(&Selector::css(MENU_PANEL)).await
    }

    async fn ensure_open(&self) -> ComprarResult<()> {
        if self.is_open().await {
            Ok(())
        } else {
            self.open().await
        }
    }

    /// Navigate to the inventory page via the menu.
    ///
    /// # Errors
    ///
    /// Returns an error if the menu or link cannot be used.
    pub async fn go_to_all_items(&self) -> ComprarResult<()> {
        self.ensure_open().await?;
        self.page.click(&Selector::css(ALL_ITEMS_LINK)).await
    }

    /// Follow the About link, leaving the storefront.
    ///
    /// # Errors
    ///
    /// Returns an error if the menu or link cannot be used.
    pub async fn go_to_about(&self) -> ComprarResult<()> {
        self.ensure_open().await?;
        self.page.click(&Selector::css(ABOUT_LINK)).await
    }

    /// Log out, landing back on the login page.
    ///
    /// # Errors
    ///
    /// Returns an error if the menu or link cannot be used.
    pub async fn logout(&self) -> ComprarResult<()> {
        self.ensure_open().await?;
        self.page.click(&Selector::css(LOGOUT_LINK)).await
    }

    /// Reset the app state (empties the cart), then close the menu.
    ///
    /// Unlike the navigating links, reset leaves the panel open, so this
    /// closes it to hand the page back in a usable state.
    ///
    /// # Errors
    ///
    /// Returns an error if the menu or link cannot be used.
    pub async fn reset_app_state(&self) -> ComprarResult<()> {
        self.ensure_open().await?;
        self.page.click(&Selector::css(RESET_LINK)).await?;
        self.close().await
    }
}
