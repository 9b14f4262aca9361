//! Cart and checkout flows, including the checkout validation surface and
//! the error persona's failing submission.

#![cfg(not(feature = "browser"))]

mod common;

use comprar::data::{
    CheckoutIdentity, FIRST_NAME_REQUIRED, LAST_NAME_REQUIRED, POSTAL_CODE_REQUIRED,
};
use comprar::{ComprarError, Pages, Role};

const BACKPACK: &str = "Sauce Labs Backpack";

async fn standard_pages(provider: &comprar::SessionProvider) -> Pages {
    provider.pages(Role::Standard).await.unwrap()
}

#[tokio::test]
async fn backpack_travels_from_grid_to_cart_and_back_out() {
    let (provider, _dir) = common::provider().await;
    let pages = standard_pages(&provider).await;

    let inventory = pages.inventory();
    inventory.open().await.unwrap();
    inventory.add_to_cart(BACKPACK).await.unwrap();
    assert_eq!(inventory.cart_badge_count().await, 1);

    inventory.go_to_cart().await.unwrap();
    let cart = pages.cart();
    cart.wait_until_loaded().await.unwrap();
    assert_eq!(cart.title().await, "Your Cart");
    assert_eq!(cart.item_count().await, 1);
    assert_eq!(cart.item_names().await, [BACKPACK]);

    cart.remove_item(0).await.unwrap();
    assert_eq!(cart.item_count().await, 0);
    assert_eq!(inventory.cart_badge_count().await, 0);
}

#[tokio::test]
async fn removing_from_an_empty_cart_is_rejected() {
    let (provider, _dir) = common::provider().await;
    let pages = standard_pages(&provider).await;

    let cart = pages.cart();
    cart.open().await.unwrap();

    let err = cart.remove_item(0).await.unwrap_err();
    match err {
        ComprarError::OutOfBounds {
            index,
            count,
            collection,
        } => {
            assert_eq!(index, 0);
            assert_eq!(count, 0);
            assert_eq!(collection, "Cart");
        }
        other => panic!("expected OutOfBounds, got {other}"),
    }
}

#[tokio::test]
async fn healthy_cart_shows_no_error_surface() {
    let (provider, _dir) = common::provider().await;
    let pages = standard_pages(&provider).await;

    let inventory = pages.inventory();
    inventory.open().await.unwrap();
    inventory.add_to_cart(BACKPACK).await.unwrap();
    inventory.go_to_cart().await.unwrap();

    let cart = pages.cart();
    assert!(!cart.error_visible().await);
    assert_eq!(cart.error_text().await, "");
}

#[tokio::test]
async fn continue_shopping_returns_to_the_grid() {
    let (provider, _dir) = common::provider().await;
    let pages = standard_pages(&provider).await;

    let cart = pages.cart();
    cart.open().await.unwrap();
    cart.continue_shopping().await.unwrap();

    assert!(pages.page().current_url().await.contains("inventory"));
}

#[tokio::test]
async fn empty_submission_demands_a_first_name() {
    let (provider, _dir) = common::provider().await;
    let pages = standard_pages(&provider).await;

    let checkout = pages.checkout();
    checkout.open().await.unwrap();
    checkout.wait_until_loaded().await.unwrap();
    checkout.submit().await.unwrap();

    assert!(checkout.error_visible().await);
    assert_eq!(checkout.error_text().await, FIRST_NAME_REQUIRED);
    assert!(!checkout.reached_overview().await);
}

#[tokio::test]
async fn partial_identity_demands_the_missing_field() {
    let (provider, _dir) = common::provider().await;
    let pages = standard_pages(&provider).await;

    let checkout = pages.checkout();
    checkout.open().await.unwrap();
    checkout.complete(CheckoutIdentity::PARTIAL).await.unwrap();

    assert!(checkout.error_visible().await);
    assert_eq!(checkout.error_text().await, LAST_NAME_REQUIRED);
}

#[tokio::test]
async fn missing_postal_code_is_reported_last() {
    let (provider, _dir) = common::provider().await;
    let pages = standard_pages(&provider).await;

    let checkout = pages.checkout();
    checkout.open().await.unwrap();
    checkout.fill_first_name("Max").await.unwrap();
    checkout.fill_last_name("Test").await.unwrap();
    checkout.submit().await.unwrap();

    assert_eq!(checkout.error_text().await, POSTAL_CODE_REQUIRED);
}

#[tokio::test]
async fn valid_identity_advances_to_the_overview() {
    let (provider, _dir) = common::provider().await;
    let pages = standard_pages(&provider).await;

    let inventory = pages.inventory();
    inventory.open().await.unwrap();
    inventory.add_to_cart(BACKPACK).await.unwrap();
    inventory.go_to_cart().await.unwrap();
    pages.cart().checkout().await.unwrap();

    let checkout = pages.checkout();
    checkout.wait_until_loaded().await.unwrap();
    assert_eq!(checkout.title().await, "Checkout: Your Information");

    checkout.complete(CheckoutIdentity::VALID).await.unwrap();
    assert!(checkout.reached_overview().await);
    assert!(!checkout.error_visible().await);
}

#[tokio::test]
async fn error_user_cannot_complete_a_valid_checkout() {
    let (provider, _dir) = common::provider().await;
    let pages = provider.pages(Role::Error).await.unwrap();

    let checkout = pages.checkout();
    checkout.open().await.unwrap();
    checkout.complete(CheckoutIdentity::VALID).await.unwrap();

    assert!(checkout.error_visible().await);
    assert!(!checkout.reached_overview().await);
}

#[tokio::test]
async fn cancel_returns_to_the_cart() {
    let (provider, _dir) = common::provider().await;
    let pages = standard_pages(&provider).await;

    let checkout = pages.checkout();
    checkout.open().await.unwrap();
    checkout.cancel().await.unwrap();

    assert!(pages.page().current_url().await.contains("cart"));
}

#[tokio::test]
async fn fields_report_filled_state_and_clear() {
    let (provider, _dir) = common::provider().await;
    let pages = standard_pages(&provider).await;

    let checkout = pages.checkout();
    checkout.open().await.unwrap();
    assert!(!checkout.all_fields_filled().await);

    checkout
        .fill_information(CheckoutIdentity::VALID)
        .await
        .unwrap();
    assert!(checkout.all_fields_filled().await);

    checkout.clear_all().await.unwrap();
    assert!(!checkout.all_fields_filled().await);
}

#[tokio::test]
async fn dismissing_a_validation_error_clears_it() {
    let (provider, _dir) = common::provider().await;
    let pages = standard_pages(&provider).await;

    let checkout = pages.checkout();
    checkout.open().await.unwrap();
    checkout.submit().await.unwrap();
    assert!(checkout.error_visible().await);

    checkout.dismiss_error().await.unwrap();
    assert_eq!(checkout.error_text().await, "");
}
