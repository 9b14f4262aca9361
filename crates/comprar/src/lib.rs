//! # Comprar
//!
//! Browser-driven end-to-end test harness for the Swag Labs demo storefront,
//! built around composable page objects and cached per-role sessions.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │ tests                                               │
//! │   SessionProvider ──► Pages (login/inventory/cart/  │
//! │        │                      checkout + menu/rows) │
//! │        │ one-shot auth,                             │
//! │        │ capsule per role          Selector values  │
//! │        ▼                                ▼           │
//! │   SessionStore (.auth/*.json)      Page facade      │
//! │                                         │           │
//! │                          ┌──────────────┴─────────┐ │
//! │                          │ CDP (feature "browser")│ │
//! │                          │ or in-memory storefront│ │
//! │                          └────────────────────────┘ │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Page objects never hold element handles. Every interaction goes through
//! the facade with a plain [`Selector`] value, resolved fresh against the
//! live DOM, so re-renders between calls cannot produce stale references.
//!
//! ## Example
//!
//! ```no_run
//! use comprar::{HarnessConfig, Role, SessionProvider};
//!
//! # async fn run() -> comprar::ComprarResult<()> {
//! let provider = SessionProvider::launch(HarnessConfig::new()).await?;
//! provider.authenticate_all().await?;
//!
//! let pages = provider.pages(Role::Standard).await?;
//! let inventory = pages.inventory();
//! inventory.open().await?;
//! inventory.add_to_cart("Sauce Labs Backpack").await?;
//! assert_eq!(inventory.cart_badge_count().await, 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod browser;
pub mod config;
pub mod data;
pub mod fixture;
pub mod locator;
pub mod pages;
pub mod result;
pub mod session;
pub mod wait;

#[cfg(not(feature = "browser"))]
mod sim;

pub use browser::{Browser, BrowserConfig, Page};
pub use config::HarnessConfig;
pub use fixture::SessionProvider;
pub use locator::Selector;
pub use pages::{
    CartPage, CheckoutPage, InventoryItem, InventoryPage, LoginPage, NavigationMenu, Pages,
    SortOption,
};
pub use result::{ComprarError, ComprarResult};
pub use session::{Cookie, Role, SessionStore, StorageState};
pub use wait::{poll_until, WaitOptions};
