//! A single inventory row.
//!
//! Rows are addressed by position and every lookup is scoped under the row's
//! ancestor selector, re-resolved against the live DOM on each call. Nothing
//! here caches element state, so a row object stays valid across re-renders
//! and cart mutations.

use crate::browser::Page;
use crate::locator::Selector;
use crate::result::{ComprarError, ComprarResult};
use crate::wait::WaitOptions;

pub(crate) const ROW: &str = ".inventory_item";
const NAME: &str = ".inventory_item_name";
const DESCRIPTION: &str = ".inventory_item_desc";
const PRICE: &str = ".inventory_item_price";
const IMAGE: &str = ".inventory_item_img img";
const ADD_BUTTON: &str = "button[id^=\"add-to-cart\"]";
const REMOVE_BUTTON: &str = "button[id^=\"remove\"]";

/// One row of the inventory list
#[derive(Debug, Clone)]
pub struct InventoryItem {
    page: Page,
    root: Selector,
}

impl InventoryItem {
    pub(crate) fn new(page: Page, index: usize) -> Self {
        Self {
            page,
            root: Selector::nth(ROW, index),
        }
    }

    fn part(&self, child: &str) -> Selector {
        self.root.clone().child(child)
    }

    /// The product name
    pub async fn name(&self) -> String {
        self.page.text(&self.part(NAME)).await
    }

    /// The product description
    pub async fn description(&self) -> String {
        self.page.text(&self.part(DESCRIPTION)).await
    }

    /// The displayed price text, e.g. `$29.99`
    pub async fn price_text(&self) -> String {
        self.page.text(&self.part(PRICE)).await
    }

    /// The price as a number.
    ///
    /// # Errors
    ///
    /// Returns [`ComprarError::PriceFormat`] if the displayed text is not a
    /// currency amount.
    pub async fn price_value(&self) -> ComprarResult<f64> {
        parse_price(&self.price_text().await)
    }

    /// The image `src`, or `None` if the row has no image
    pub async fn image_src(&self) -> Option<String> {
        self.page.attribute(&self.part(IMAGE), "src").await
    }

    /// Whether the row currently shows the remove affordance
    pub async fn is_in_cart(&self) -> bool {
        self.page.is_visible(&self.part(REMOVE_BUTTON)).await
    }

    /// Add this item to the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the add button is absent (already in the cart).
    pub async fn add_to_cart(&self) -> ComprarResult<()> {
        self.page.click(&self.part(ADD_BUTTON)).await
    }

    /// Remove this item from the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the remove button is absent (not in the cart).
    pub async fn remove_from_cart(&self) -> ComprarResult<()> {
        self.page.click(&self.part(REMOVE_BUTTON)).await
    }

    /// Open the item detail page via the name link.
    ///
    /// # Errors
    ///
    /// Returns an error if the link is absent.
    pub async fn click_name(&self) -> ComprarResult<()> {
        self.page.click(&self.part(NAME)).await
    }

    /// Open the item detail page via the image.
    ///
    /// # Errors
    ///
    /// Returns an error if the image is absent.
    pub async fn click_image(&self) -> ComprarResult<()> {
        self.page.click(&self.part(IMAGE)).await
    }

    /// Wait for the row to be rendered.
    ///
    /// # Errors
    ///
    /// Returns [`ComprarError::Timeout`] if the row never shows.
    pub async fn wait_until_visible(&self) -> ComprarResult<()> {
        self.page.wait_for_visible(&self.root, WaitOptions::new()).await
    }
}

/// Parse displayed price text into a number. A leading `$` is stripped when
/// present, so both `$29.99` and a bare `29.99` are accepted.
pub(crate) fn parse_price(text: &str) -> ComprarResult<f64> {
    let trimmed = text.trim();
    let amount = trimmed.strip_prefix('$').unwrap_or(trimmed);
    amount.parse().map_err(|_| ComprarError::PriceFormat {
        text: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    mod parse_price_tests {
        use super::*;

        #[test]
        fn test_plain_amount() {
            assert_eq!(parse_price("$29.99").unwrap(), 29.99);
            assert_eq!(parse_price(" $7.99 ").unwrap(), 7.99);
        }

        #[test]
        fn test_bare_amount_without_currency_sign() {
            assert_eq!(parse_price("29.99").unwrap(), 29.99);
        }

        #[test]
        fn test_not_a_number() {
            let err = parse_price("$free").unwrap_err();
            assert!(err.to_string().contains("$free"));
        }

        #[test]
        fn test_empty() {
            assert!(parse_price("").is_err());
        }
    }
}
