//! Deterministic in-memory storefront backing the facade when the `browser`
//! feature is disabled.
//!
//! The simulation models the demo storefront exactly far enough for the page
//! objects to run unmodified: login validation per persona, the six-item
//! catalog, cart membership with mutually exclusive add/remove affordances,
//! four-way sorting, checkout step-one validation, the slide-out menu, and
//! cookie-based session restore. Persona quirks (locked-out rejection,
//! problem-user broken images and dead sorting, error-user checkout failure,
//! performance-glitch latency) are implemented here so regression guards for
//! them are executable in CI.
//!
//! Test the code, not the model: the real page objects and fixture provider
//! run against this, through the same facade API the CDP backend serves.

use crate::config::DEMO_PASSWORD;
use crate::locator::Selector;
use crate::result::{ComprarError, ComprarResult};
use crate::session::{Cookie, Role, StorageState};
use std::time::Duration;

/// Image served for every item when the problem persona is logged in
const BROKEN_IMAGE: &str = "/static/media/sl-404.168b1cce.jpg";

/// Extra navigation latency for the performance-glitch persona
const GLITCH_DELAY: Duration = Duration::from_millis(250);

struct CatalogItem {
    name: &'static str,
    description: &'static str,
    price: f64,
    image: &'static str,
}

const CATALOG: [CatalogItem; 6] = [
    CatalogItem {
        name: "Sauce Labs Backpack",
        description: "carry.allTheThings() with the sleek, streamlined Sly Pack that melds uncompromising style with unequaled laptop and tablet protection.",
        price: 29.99,
        image: "/static/media/sauce-backpack-1200x1500.0a0b85a3.jpg",
    },
    CatalogItem {
        name: "Sauce Labs Bike Light",
        description: "A red light isn't the desired state in testing but it sure helps when riding your bike at night. Water-resistant with 3 lighting modes, 1 AAA battery included.",
        price: 9.99,
        image: "/static/media/bike-light-1200x1500.37c843b0.jpg",
    },
    CatalogItem {
        name: "Sauce Labs Bolt T-Shirt",
        description: "Get your testing superhero on with the Sauce Labs bolt T-shirt. From American Apparel, 100% ringspun combed cotton, heather gray with red bolt.",
        price: 15.99,
        image: "/static/media/bolt-shirt-1200x1500.c2599ac5.jpg",
    },
    CatalogItem {
        name: "Sauce Labs Fleece Jacket",
        description: "It's not every day that you come across a midweight quarter-zip fleece jacket capable of handling everything from a relaxing day outdoors to a busy day at the office.",
        price: 49.99,
        image: "/static/media/sauce-pullover-1200x1500.51d7ffaf.jpg",
    },
    CatalogItem {
        name: "Sauce Labs Onesie",
        description: "Rib snap infant onesie for the junior automation engineer in development. Reinforced 3-snap bottom closure, two-needle hemmed sleeved and bottom won't unravel.",
        price: 7.99,
        image: "/static/media/red-onesie-1200x1500.2ec615b2.jpg",
    },
    CatalogItem {
        name: "Test.allTheThings() T-Shirt (Red)",
        description: "This classic Sauce Labs t-shirt is perfect to wear when cozying up to your keyboard to automate a few tests.",
        price: 15.99,
        image: "/static/media/red-tatt-1200x1500.30dadef4.jpg",
    },
];

/// Which logical node a selector resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    UsernameInput,
    PasswordInput,
    LoginButton,
    LoginLogo,
    BotColumn,
    ErrorBox,
    CartError,
    ErrorButton,
    ErrorContainer,
    Title,
    CartBadge,
    CartLink,
    InventoryList,
    SortSelect,
    InventoryRows,
    CartRows,
    ItemPart { index: usize, part: RowPart },
    CartItemPart { index: usize, part: RowPart },
    MenuButton,
    MenuClose,
    Menu,
    MenuAllItems,
    MenuAbout,
    MenuLogout,
    MenuReset,
    CheckoutButton,
    ContinueShopping,
    FirstName,
    LastName,
    PostalCode,
    ContinueButton,
    CancelButton,
    FinishButton,
    CompleteHeader,
    AddToCartTestId(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowPart {
    Root,
    Name,
    Description,
    Price,
    Image,
    AddButton,
    RemoveButton,
}

/// In-memory storefront state for one simulated tab
#[derive(Debug)]
pub(crate) struct DemoStore {
    base_url: String,
    path: String,
    persona: Option<Role>,
    username_field: String,
    password_field: String,
    login_error: Option<String>,
    menu_open: bool,
    /// Display order as indices into [`CATALOG`]
    order: Vec<usize>,
    /// Cart contents as catalog indices, in insertion order
    cart: Vec<usize>,
    first_name: String,
    last_name: String,
    postal_code: String,
    checkout_error: Option<String>,
}

impl DemoStore {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            path: "about:blank".to_string(),
            persona: None,
            username_field: String::new(),
            password_field: String::new(),
            login_error: None,
            menu_open: false,
            order: (0..CATALOG.len()).collect(),
            cart: Vec::new(),
            first_name: String::new(),
            last_name: String::new(),
            postal_code: String::new(),
            checkout_error: None,
        }
    }

    // ------------------------------------------------------------------
    // Page predicates
    // ------------------------------------------------------------------

    fn on_login(&self) -> bool {
        self.path == "/" || self.path == "/index.html"
    }

    fn on_inventory(&self) -> bool {
        self.path == "/inventory.html"
    }

    fn on_cart(&self) -> bool {
        self.path == "/cart.html"
    }

    fn on_checkout_one(&self) -> bool {
        self.path == "/checkout-step-one.html"
    }

    fn on_checkout_two(&self) -> bool {
        self.path == "/checkout-step-two.html"
    }

    fn on_complete(&self) -> bool {
        self.path == "/checkout-complete.html"
    }

    /// Pages carrying the header bar (cart link, badge, burger menu)
    fn on_header_page(&self) -> bool {
        self.on_inventory()
            || self.on_cart()
            || self.on_checkout_one()
            || self.on_checkout_two()
            || self.on_complete()
            || self.path == "/inventory-item.html"
    }

    fn in_cart(&self, catalog_index: usize) -> bool {
        self.cart.contains(&catalog_index)
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub(crate) fn navigation_delay(&self) -> Duration {
        if self.persona == Some(Role::PerformanceGlitch) {
            GLITCH_DELAY
        } else {
            Duration::ZERO
        }
    }

    pub(crate) fn navigate(&mut self, url: &str) {
        let path = if let Some(rest) = url.strip_prefix(self.base_url.as_str()) {
            if rest.is_empty() { "/" } else { rest }
        } else if url.starts_with('/') {
            url
        } else {
            // External URL (e.g. the About link target)
            self.path = url.to_string();
            self.menu_open = false;
            return;
        };
        let path = path.to_string();

        let protected = matches!(
            path.as_str(),
            "/inventory.html"
                | "/cart.html"
                | "/checkout-step-one.html"
                | "/checkout-step-two.html"
                | "/checkout-complete.html"
                | "/inventory-item.html"
        );
        if protected && self.persona.is_none() {
            self.path = "/".to_string();
            self.login_error = Some(format!(
                "Epic sadface: You can only access '{path}' when you are logged in."
            ));
        } else {
            self.path = path;
        }
        self.menu_open = false;
    }

    pub(crate) fn current_url(&self) -> String {
        if self.path.starts_with("http") || self.path.starts_with("about:") {
            self.path.clone()
        } else {
            format!("{}{}", self.base_url, self.path)
        }
    }

    // ------------------------------------------------------------------
    // Selector resolution
    // ------------------------------------------------------------------

    fn resolve(sel: &Selector) -> Option<Target> {
        match sel {
            Selector::Css(s) => Self::resolve_css(s),
            Selector::TestId(id) => Self::resolve_test_id(id),
            Selector::Nth { css, index } => match css.as_str() {
                ".inventory_item" => Some(Target::ItemPart {
                    index: *index,
                    part: RowPart::Root,
                }),
                ".cart_item" => Some(Target::CartItemPart {
                    index: *index,
                    part: RowPart::Root,
                }),
                _ => None,
            },
            Selector::Within { root, child } => {
                let part = Self::resolve_row_part(child)?;
                match Self::resolve(root)? {
                    Target::ItemPart { index, .. } => Some(Target::ItemPart { index, part }),
                    Target::CartItemPart { index, .. } => {
                        Some(Target::CartItemPart { index, part })
                    }
                    _ => None,
                }
            }
        }
    }

    fn resolve_css(s: &str) -> Option<Target> {
        Some(match s {
            "#user-name" => Target::UsernameInput,
            "#password" => Target::PasswordInput,
            "#login-button" => Target::LoginButton,
            ".login_logo" => Target::LoginLogo,
            ".bot_column" => Target::BotColumn,
            ".error-button" => Target::ErrorButton,
            "[class=\"error-message-container error\"]" => Target::ErrorContainer,
            ".error-message" => Target::CartError,
            ".title" => Target::Title,
            ".shopping_cart_badge" => Target::CartBadge,
            ".shopping_cart_link" => Target::CartLink,
            ".inventory_list" => Target::InventoryList,
            ".product_sort_container" => Target::SortSelect,
            ".inventory_item" => Target::InventoryRows,
            ".cart_item" => Target::CartRows,
            "#react-burger-menu-btn" => Target::MenuButton,
            "#react-burger-cross-btn" => Target::MenuClose,
            ".bm-menu-wrap" => Target::Menu,
            "#inventory_sidebar_link" => Target::MenuAllItems,
            "#about_sidebar_link" => Target::MenuAbout,
            "#logout_sidebar_link" => Target::MenuLogout,
            "#reset_sidebar_link" => Target::MenuReset,
            ".complete-header" => Target::CompleteHeader,
            _ => return None,
        })
    }

    fn resolve_test_id(id: &str) -> Option<Target> {
        Some(match id {
            "error" => Target::ErrorBox,
            "checkout" => Target::CheckoutButton,
            "continue-shopping" => Target::ContinueShopping,
            "firstName" => Target::FirstName,
            "lastName" => Target::LastName,
            "postalCode" => Target::PostalCode,
            "continue" => Target::ContinueButton,
            "cancel" => Target::CancelButton,
            "finish" => Target::FinishButton,
            other if other.starts_with("add-to-cart-") => {
                Target::AddToCartTestId(other.to_string())
            }
            _ => return None,
        })
    }

    fn resolve_row_part(child: &str) -> Option<RowPart> {
        if child.starts_with("button[id^=\"add-to-cart") {
            return Some(RowPart::AddButton);
        }
        if child.starts_with("button[id^=\"remove") {
            return Some(RowPart::RemoveButton);
        }
        Some(match child {
            ".inventory_item_name" => RowPart::Name,
            ".inventory_item_desc" => RowPart::Description,
            ".inventory_item_price" => RowPart::Price,
            ".inventory_item_img img" | "img" => RowPart::Image,
            _ => return None,
        })
    }

    // ------------------------------------------------------------------
    // Presence
    // ------------------------------------------------------------------

    /// Whether the target currently exists in the rendered page
    fn present(&self, target: &Target) -> bool {
        match target {
            Target::UsernameInput
            | Target::PasswordInput
            | Target::LoginButton
            | Target::LoginLogo
            | Target::BotColumn => self.on_login(),
            Target::ErrorBox | Target::ErrorButton | Target::ErrorContainer => {
                (self.on_login() && self.login_error.is_some())
                    || (self.on_checkout_one() && self.checkout_error.is_some())
            }
            // The cart's error surface exists in the markup contract but the
            // simulation never produces a cart failure
            Target::CartError => false,
            Target::Title => {
                self.on_inventory()
                    || self.on_cart()
                    || self.on_checkout_one()
                    || self.on_checkout_two()
            }
            Target::CartBadge => {
                self.on_header_page() && self.persona.is_some() && !self.cart.is_empty()
            }
            Target::CartLink | Target::MenuButton => {
                self.on_header_page() && self.persona.is_some()
            }
            Target::Menu
            | Target::MenuClose
            | Target::MenuAllItems
            | Target::MenuAbout
            | Target::MenuLogout
            | Target::MenuReset => self.on_header_page() && self.menu_open,
            Target::InventoryList | Target::SortSelect | Target::InventoryRows => {
                self.on_inventory()
            }
            Target::CartRows => self.on_cart(),
            Target::ItemPart { index, part } => {
                if !self.on_inventory() || *index >= self.order.len() {
                    return false;
                }
                let catalog_index = self.order[*index];
                match part {
                    RowPart::AddButton => !self.in_cart(catalog_index),
                    RowPart::RemoveButton => self.in_cart(catalog_index),
                    _ => true,
                }
            }
            Target::CartItemPart { index, part } => {
                if !self.on_cart() || *index >= self.cart.len() {
                    return false;
                }
                // Cart rows only carry a remove affordance
                !matches!(part, RowPart::AddButton | RowPart::Image)
            }
            Target::CheckoutButton | Target::ContinueShopping => self.on_cart(),
            Target::FirstName
            | Target::LastName
            | Target::PostalCode
            | Target::ContinueButton
            | Target::CancelButton => self.on_checkout_one(),
            Target::FinishButton => self.on_checkout_two(),
            Target::CompleteHeader => self.on_complete(),
            Target::AddToCartTestId(id) => {
                self.on_inventory() && self.catalog_index_for_test_id(id).is_some()
            }
        }
    }

    fn catalog_index_for_test_id(&self, test_id: &str) -> Option<usize> {
        let slug = test_id.strip_prefix("add-to-cart-")?;
        CATALOG
            .iter()
            .position(|item| slugify(item.name) == slug)
            .filter(|i| !self.in_cart(*i))
    }

    fn not_found(sel: &Selector) -> ComprarError {
        ComprarError::ElementNotFound {
            selector: sel.to_string(),
        }
    }

    // ------------------------------------------------------------------
    // Facade operations
    // ------------------------------------------------------------------

    pub(crate) fn click(&mut self, sel: &Selector) -> ComprarResult<()> {
        let target = Self::resolve(sel).filter(|t| self.present(t));
        let Some(target) = target else {
            return Err(Self::not_found(sel));
        };
        match target {
            Target::LoginButton => self.submit_login(),
            Target::ErrorButton => {
                if self.on_login() {
                    self.login_error = None;
                } else {
                    self.checkout_error = None;
                }
            }
            Target::CartLink => self.navigate("/cart.html"),
            Target::MenuButton => self.menu_open = true,
            Target::MenuClose => self.menu_open = false,
            Target::MenuAllItems => self.navigate("/inventory.html"),
            Target::MenuAbout => self.navigate("https://saucelabs.com/"),
            Target::MenuLogout => {
                self.persona = None;
                self.username_field.clear();
                self.password_field.clear();
                self.navigate("/");
            }
            Target::MenuReset => self.cart.clear(),
            Target::ItemPart { index, part } => {
                let catalog_index = self.order[index];
                match part {
                    RowPart::AddButton => self.cart.push(catalog_index),
                    RowPart::RemoveButton => self.cart.retain(|i| *i != catalog_index),
                    RowPart::Name | RowPart::Image => self.navigate("/inventory-item.html"),
                    _ => return Err(Self::not_found(sel)),
                }
            }
            Target::CartItemPart { index, part } => match part {
                RowPart::RemoveButton => {
                    let _ = self.cart.remove(index);
                }
                _ => return Err(Self::not_found(sel)),
            },
            Target::AddToCartTestId(id) => {
                if let Some(catalog_index) = self.catalog_index_for_test_id(&id) {
                    self.cart.push(catalog_index);
                }
            }
            Target::CheckoutButton => self.navigate("/checkout-step-one.html"),
            Target::ContinueShopping => self.navigate("/inventory.html"),
            Target::ContinueButton => self.submit_checkout(),
            Target::CancelButton => self.navigate("/cart.html"),
            Target::FinishButton => self.navigate("/checkout-complete.html"),
            _ => return Err(Self::not_found(sel)),
        }
        Ok(())
    }

    fn submit_login(&mut self) {
        if self.username_field.is_empty() {
            self.login_error = Some("Epic sadface: Username is required".to_string());
            return;
        }
        if self.password_field.is_empty() {
            self.login_error = Some("Epic sadface: Password is required".to_string());
            return;
        }
        let known = Role::from_username(&self.username_field);
        match known.filter(|_| self.password_field == DEMO_PASSWORD) {
            Some(Role::LockedOut) => {
                self.login_error =
                    Some("Epic sadface: Sorry, this user has been locked out.".to_string());
            }
            Some(role) => {
                self.persona = Some(role);
                self.login_error = None;
                self.order = (0..CATALOG.len()).collect();
                self.navigate("/inventory.html");
            }
            None => {
                self.login_error = Some(
                    "Epic sadface: Username and password do not match any user in this service"
                        .to_string(),
                );
            }
        }
    }

    fn submit_checkout(&mut self) {
        if self.first_name.is_empty() {
            self.checkout_error = Some("Error: First Name is required".to_string());
        } else if self.last_name.is_empty() {
            self.checkout_error = Some("Error: Last Name is required".to_string());
        } else if self.postal_code.is_empty() {
            self.checkout_error = Some("Error: Postal Code is required".to_string());
        } else {
            self.checkout_error = None;
            self.navigate("/checkout-step-two.html");
        }
    }

    pub(crate) fn fill(&mut self, sel: &Selector, text: &str) -> ComprarResult<()> {
        let target = Self::resolve(sel).filter(|t| self.present(t));
        let Some(target) = target else {
            return Err(Self::not_found(sel));
        };
        match target {
            Target::UsernameInput => self.username_field = text.to_string(),
            Target::PasswordInput => self.password_field = text.to_string(),
            Target::FirstName => self.first_name = text.to_string(),
            Target::LastName => {
                // error_user quirk: the last-name entry is silently dropped,
                // so checkout submission fails even with valid input
                if self.persona == Some(Role::Error) {
                    self.last_name.clear();
                } else {
                    self.last_name = text.to_string();
                }
            }
            Target::PostalCode => self.postal_code = text.to_string(),
            _ => {
                return Err(ComprarError::Page {
                    message: format!("element {sel} is not fillable"),
                })
            }
        }
        Ok(())
    }

    pub(crate) fn text(&self, sel: &Selector) -> String {
        let Some(target) = Self::resolve(sel).filter(|t| self.present(t)) else {
            return String::new();
        };
        match target {
            Target::Title => {
                if self.on_inventory() {
                    "Products".to_string()
                } else if self.on_cart() {
                    "Your Cart".to_string()
                } else if self.on_checkout_one() {
                    "Checkout: Your Information".to_string()
                } else if self.on_checkout_two() {
                    "Checkout: Overview".to_string()
                } else {
                    String::new()
                }
            }
            Target::ErrorBox => {
                if self.on_login() {
                    self.login_error.clone().unwrap_or_default()
                } else {
                    self.checkout_error.clone().unwrap_or_default()
                }
            }
            Target::CartBadge => self.cart.len().to_string(),
            Target::LoginLogo => "Swag Labs".to_string(),
            Target::CompleteHeader => "Thank you for your order!".to_string(),
            Target::ItemPart { index, part } => {
                let item = &CATALOG[self.order[index]];
                Self::row_text(item, part)
            }
            Target::CartItemPart { index, part } => {
                let item = &CATALOG[self.cart[index]];
                Self::row_text(item, part)
            }
            _ => String::new(),
        }
    }

    fn row_text(item: &CatalogItem, part: RowPart) -> String {
        match part {
            RowPart::Name => item.name.to_string(),
            RowPart::Description => item.description.to_string(),
            RowPart::Price => format!("${:.2}", item.price),
            _ => String::new(),
        }
    }

    pub(crate) fn attribute(&self, sel: &Selector, name: &str) -> Option<String> {
        let target = Self::resolve(sel).filter(|t| self.present(t))?;
        match target {
            Target::ItemPart { index, part } if part == RowPart::Image && name == "src" => {
                // problem_user quirk: every item serves the same broken image
                if self.persona == Some(Role::Problem) {
                    Some(BROKEN_IMAGE.to_string())
                } else {
                    Some(CATALOG[self.order[index]].image.to_string())
                }
            }
            _ => None,
        }
    }

    pub(crate) fn input_value(&self, sel: &Selector) -> String {
        let Some(target) = Self::resolve(sel).filter(|t| self.present(t)) else {
            return String::new();
        };
        match target {
            Target::UsernameInput => self.username_field.clone(),
            Target::PasswordInput => self.password_field.clone(),
            Target::FirstName => self.first_name.clone(),
            Target::LastName => self.last_name.clone(),
            Target::PostalCode => self.postal_code.clone(),
            _ => String::new(),
        }
    }

    pub(crate) fn visible(&self, sel: &Selector) -> bool {
        Self::resolve(sel).is_some_and(|t| self.present(&t))
    }

    pub(crate) fn enabled(&self, sel: &Selector) -> bool {
        self.visible(sel)
    }

    pub(crate) fn select(&mut self, sel: &Selector, value: &str) -> ComprarResult<()> {
        let target = Self::resolve(sel).filter(|t| self.present(t));
        if target != Some(Target::SortSelect) {
            return Err(Self::not_found(sel));
        }
        // problem_user quirk: the sort control is dead
        if self.persona == Some(Role::Problem) {
            return Ok(());
        }
        match value {
            "az" => self.order.sort_by(|a, b| CATALOG[*a].name.cmp(CATALOG[*b].name)),
            "za" => self.order.sort_by(|a, b| CATALOG[*b].name.cmp(CATALOG[*a].name)),
            "lohi" => self.order.sort_by(|a, b| {
                CATALOG[*a]
                    .price
                    .partial_cmp(&CATALOG[*b].price)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            "hilo" => self.order.sort_by(|a, b| {
                CATALOG[*b]
                    .price
                    .partial_cmp(&CATALOG[*a].price)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            other => {
                return Err(ComprarError::Page {
                    message: format!("unknown sort option code {other:?}"),
                })
            }
        }
        Ok(())
    }

    pub(crate) fn computed_style(&self, sel: &Selector, property: &str) -> String {
        if !self.visible(sel) {
            return String::new();
        }
        match Self::resolve(sel) {
            Some(Target::ErrorContainer) if property == "background-color" => {
                "rgb(226, 35, 26)".to_string()
            }
            _ => String::new(),
        }
    }

    pub(crate) fn count(&self, sel: &Selector) -> usize {
        match Self::resolve(sel) {
            Some(Target::InventoryRows) if self.on_inventory() => self.order.len(),
            Some(Target::CartRows) if self.on_cart() => self.cart.len(),
            Some(target) => usize::from(self.present(&target)),
            None => 0,
        }
    }

    // ------------------------------------------------------------------
    // Session capsule
    // ------------------------------------------------------------------

    pub(crate) fn export_state(&self) -> StorageState {
        match self.persona {
            Some(role) => {
                let domain = self
                    .base_url
                    .trim_start_matches("https://")
                    .trim_start_matches("http://")
                    .to_string();
                StorageState::new().with_cookie(Cookie::new(
                    "session-username",
                    role.username(),
                    &domain,
                ))
            }
            None => StorageState::new(),
        }
    }

    pub(crate) fn import_state(&mut self, state: &StorageState) {
        let session = state
            .cookies
            .iter()
            .find(|c| c.name == "session-username")
            .and_then(|c| Role::from_username(&c.value));
        if let Some(role) = session {
            self.persona = Some(role);
        }
    }
}

/// The storefront's add-to-cart test ids are slugified product names
fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}
