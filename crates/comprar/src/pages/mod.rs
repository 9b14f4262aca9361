//! Page objects for the storefront.
//!
//! Each page object holds a cloned tab handle and a set of selectors; all
//! element access goes through the interaction facade, so page objects carry
//! no element state of their own. Shared surfaces (the burger menu, item
//! rows) are composed into the pages that show them.

pub mod cart;
pub mod checkout;
pub mod inventory;
pub mod item;
pub mod login;
pub mod navigation;

pub use cart::CartPage;
pub use checkout::CheckoutPage;
pub use inventory::{InventoryPage, SortOption};
pub use item::InventoryItem;
pub use login::LoginPage;
pub use navigation::NavigationMenu;

use crate::browser::Page;

/// All page objects for one tab, handed to a test as a bundle
#[derive(Debug, Clone)]
pub struct Pages {
    page: Page,
}

impl Pages {
    /// Bundle page objects over a tab
    #[must_use]
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// The underlying tab
    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// The login page
    #[must_use]
    pub fn login(&self) -> LoginPage {
        LoginPage::new(self.page.clone())
    }

    /// The inventory page
    #[must_use]
    pub fn inventory(&self) -> InventoryPage {
        InventoryPage::new(self.page.clone())
    }

    /// The cart page
    #[must_use]
    pub fn cart(&self) -> CartPage {
        CartPage::new(self.page.clone())
    }

    /// The checkout information page
    #[must_use]
    pub fn checkout(&self) -> CheckoutPage {
        CheckoutPage::new(self.page.clone())
    }
}
