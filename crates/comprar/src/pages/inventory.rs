//! The inventory (products) page: the item grid, sorting, the cart badge,
//! and the composed burger menu.

use crate::browser::Page;
use crate::locator::Selector;
use crate::pages::item::{InventoryItem, ROW};
use crate::pages::navigation::NavigationMenu;
use crate::result::{ComprarError, ComprarResult};
use crate::wait::WaitOptions;

const LIST: &str = ".inventory_list";
const TITLE: &str = ".title";
const SORT_SELECT: &str = ".product_sort_container";
const CART_BADGE: &str = ".shopping_cart_badge";
const CART_LINK: &str = ".shopping_cart_link";

/// The four sort orders offered by the sort control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOption {
    /// Name A to Z
    NameAscending,
    /// Name Z to A
    NameDescending,
    /// Price low to high
    PriceLowToHigh,
    /// Price high to low
    PriceHighToLow,
}

impl SortOption {
    /// The `<option>` value code the control uses for this order
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::NameAscending => "az",
            Self::NameDescending => "za",
            Self::PriceLowToHigh => "lohi",
            Self::PriceHighToLow => "hilo",
        }
    }

    /// All sort orders
    pub const ALL: [Self; 4] = [
        Self::NameAscending,
        Self::NameDescending,
        Self::PriceLowToHigh,
        Self::PriceHighToLow,
    ];
}

/// Page object for the inventory page
#[derive(Debug, Clone)]
pub struct InventoryPage {
    page: Page,
    /// The composed burger menu
    pub navigation: NavigationMenu,
}

impl InventoryPage {
    /// Attach to a tab
    #[must_use]
    pub fn new(page: Page) -> Self {
        let navigation = NavigationMenu::new(page.clone());
        Self { page, navigation }
    }

    /// Navigate to the inventory page.
    ///
    /// # Errors
    ///
    /// Returns an error if navigation fails.
    pub async fn open(&self) -> ComprarResult<()> {
        self.page.goto("/inventory.html").await
    }

    /// Wait for the item grid to be rendered.
    ///
    /// # Errors
    ///
    /// Returns a timeout error if the grid never shows.
    pub async fn wait_until_loaded(&self) -> ComprarResult<()> {
        self.page
            .wait_for_visible(&Selector::css(LIST), WaitOptions::new())
            .await
    }

    /// The page title text
    pub async fn title(&self) -> String {
        self.page.text(&Selector::css(TITLE)).await
    }

    /// How many item rows are currently rendered
    pub async fn item_count(&self) -> usize {
        self.page.count(&Selector::css(ROW)).await
    }

    /// The row at `index`, bounds-checked against the live grid.
    ///
    /// # Errors
    ///
    /// Returns [`ComprarError::OutOfBounds`] if the index is past the end.
    pub async fn item(&self, index: usize) -> ComprarResult<InventoryItem> {
        let count = self.item_count().await;
        if index >= count {
            return Err(ComprarError::OutOfBounds {
                index,
                count,
                collection: "Inventory",
            });
        }
        Ok(InventoryItem::new(self.page.clone(), index))
    }

    /// All currently rendered rows
    pub async fn items(&self) -> Vec<InventoryItem> {
        let count = self.item_count().await;
        (0..count)
            .map(|i| InventoryItem::new(self.page.clone(), i))
            .collect()
    }

    /// The row showing `name`, or `None` if no row matches.
    ///
    /// Absence is a legitimate outcome here; use [`Self::add_to_cart`] when
    /// a missing name should fail the test.
    pub async fn item_named(&self, name: &str) -> Option<InventoryItem> {
        for item in self.items().await {
            if item.name().await == name {
                return Some(item);
            }
        }
        None
    }

    /// Add the named product to the cart.
    ///
    /// # Errors
    ///
    /// Returns [`ComprarError::ItemNotFound`] if no row shows that name.
    pub async fn add_to_cart(&self, name: &str) -> ComprarResult<()> {
        match self.item_named(name).await {
            Some(item) => item.add_to_cart().await,
            None => Err(ComprarError::ItemNotFound {
                name: name.to_string(),
            }),
        }
    }

    /// Remove the named product from the cart.
    ///
    /// # Errors
    ///
    /// Returns [`ComprarError::ItemNotFound`] if no row shows that name.
    pub async fn remove_from_cart(&self, name: &str) -> ComprarResult<()> {
        match self.item_named(name).await {
            Some(item) => item.remove_from_cart().await,
            None => Err(ComprarError::ItemNotFound {
                name: name.to_string(),
            }),
        }
    }

    /// Add the row at `index` to the cart.
    ///
    /// # Errors
    ///
    /// Returns [`ComprarError::OutOfBounds`] for a bad index.
    pub async fn add_to_cart_by_index(&self, index: usize) -> ComprarResult<()> {
        self.item(index).await?.add_to_cart().await
    }

    /// Add several named products to the cart.
    ///
    /// # Errors
    ///
    /// Returns [`ComprarError::ItemNotFound`] on the first name with no row.
    pub async fn add_items(&self, names: &[&str]) -> ComprarResult<()> {
        for name in names {
            self.add_to_cart(name).await?;
        }
        Ok(())
    }

    /// Add every item not yet in the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if any add click fails.
    pub async fn add_all(&self) -> ComprarResult<()> {
        for item in self.items().await {
            if !item.is_in_cart().await {
                item.add_to_cart().await?;
            }
        }
        Ok(())
    }

    /// Add an item via its add-to-cart `data-test` hook.
    ///
    /// # Errors
    ///
    /// Returns an error if no button carries that hook.
    pub async fn add_by_test_id(&self, test_id: &str) -> ComprarResult<()> {
        self.page.click(&Selector::test_id(test_id)).await
    }

    /// The cart badge count. The badge is absent for an empty cart, which
    /// reads as zero.
    pub async fn cart_badge_count(&self) -> usize {
        let badge = Selector::css(CART_BADGE);
        if !self.page.is_visible(&badge).await {
            return 0;
        }
        self.page.text(&badge).await.parse().unwrap_or(0)
    }

    /// Open the cart page via the header cart link.
    ///
    /// # Errors
    ///
    /// Returns an error if the link is missing.
    pub async fn go_to_cart(&self) -> ComprarResult<()> {
        self.page.click(&Selector::css(CART_LINK)).await
    }

    /// Apply a sort order via the sort control.
    ///
    /// # Errors
    ///
    /// Returns an error if the control is missing.
    pub async fn sort_by(&self, option: SortOption) -> ComprarResult<()> {
        self.page
            .select_option(&Selector::css(SORT_SELECT), option.code())
            .await
    }

    /// The rendered item names in display order
    pub async fn item_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        for item in self.items().await {
            names.push(item.name().await);
        }
        names
    }

    /// The rendered item prices in display order.
    ///
    /// # Errors
    ///
    /// Returns [`ComprarError::PriceFormat`] if any row's price text is
    /// malformed.
    pub async fn item_prices(&self) -> ComprarResult<Vec<f64>> {
        let mut prices = Vec::new();
        for item in self.items().await {
            prices.push(item.price_value().await?);
        }
        Ok(prices)
    }

    /// Whether the grid is currently ordered per `option`.
    ///
    /// # Errors
    ///
    /// Returns an error if a price-based check hits malformed price text.
    pub async fn is_sorted(&self, option: SortOption) -> ComprarResult<bool> {
        let sorted = match option {
            SortOption::NameAscending => {
                let names = self.item_names().await;
                names.windows(2).all(|w| w[0] <= w[1])
            }
            SortOption::NameDescending => {
                let names = self.item_names().await;
                names.windows(2).all(|w| w[0] >= w[1])
            }
            SortOption::PriceLowToHigh => {
                let prices = self.item_prices().await?;
                prices.windows(2).all(|w| w[0] <= w[1])
            }
            SortOption::PriceHighToLow => {
                let prices = self.item_prices().await?;
                prices.windows(2).all(|w| w[0] >= w[1])
            }
        };
        Ok(sorted)
    }
}
