//! Well-known storefront fixtures: catalog names, test-hook ids, checkout
//! identities, and the exact error strings the app renders.

/// Every product name in the demo catalog, in default (alphabetical) order
pub const PRODUCT_NAMES: [&str; 6] = [
    "Sauce Labs Backpack",
    "Sauce Labs Bike Light",
    "Sauce Labs Bolt T-Shirt",
    "Sauce Labs Fleece Jacket",
    "Sauce Labs Onesie",
    "Test.allTheThings() T-Shirt (Red)",
];

/// The `data-test` ids of every add-to-cart button, aligned with
/// [`PRODUCT_NAMES`]
pub const ADD_TO_CART_TEST_IDS: [&str; 6] = [
    "add-to-cart-sauce-labs-backpack",
    "add-to-cart-sauce-labs-bike-light",
    "add-to-cart-sauce-labs-bolt-t-shirt",
    "add-to-cart-sauce-labs-fleece-jacket",
    "add-to-cart-sauce-labs-onesie",
    "add-to-cart-test.allthethings()-t-shirt-(red)",
];

/// Error rendered when the locked-out persona tries to log in
pub const LOCKED_OUT_MESSAGE: &str = "Epic sadface: Sorry, this user has been locked out.";

/// Error rendered for unknown credentials
pub const BAD_CREDENTIALS_MESSAGE: &str =
    "Epic sadface: Username and password do not match any user in this service";

/// Checkout validation error for a missing first name
pub const FIRST_NAME_REQUIRED: &str = "Error: First Name is required";

/// Checkout validation error for a missing last name
pub const LAST_NAME_REQUIRED: &str = "Error: Last Name is required";

/// Checkout validation error for a missing postal code
pub const POSTAL_CODE_REQUIRED: &str = "Error: Postal Code is required";

/// One set of checkout form entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutIdentity {
    /// First name field
    pub first_name: &'static str,
    /// Last name field
    pub last_name: &'static str,
    /// Postal code field
    pub postal_code: &'static str,
}

impl CheckoutIdentity {
    /// A complete, valid identity
    pub const VALID: Self = Self {
        first_name: "Max",
        last_name: "Test",
        postal_code: "12345",
    };

    /// All fields blank
    pub const EMPTY: Self = Self {
        first_name: "",
        last_name: "",
        postal_code: "",
    };

    /// First name and postal code only
    pub const PARTIAL: Self = Self {
        first_name: "John",
        last_name: "",
        postal_code: "54321",
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_and_test_ids_align() {
        assert_eq!(PRODUCT_NAMES.len(), ADD_TO_CART_TEST_IDS.len());
        for (name, id) in PRODUCT_NAMES.iter().zip(ADD_TO_CART_TEST_IDS) {
            let slug = name.to_lowercase().replace(' ', "-");
            assert_eq!(id, format!("add-to-cart-{slug}"));
        }
    }

    #[test]
    fn test_identities() {
        assert!(!CheckoutIdentity::VALID.last_name.is_empty());
        assert!(CheckoutIdentity::PARTIAL.last_name.is_empty());
        assert!(!CheckoutIdentity::PARTIAL.postal_code.is_empty());
    }
}
