//! Burger menu flows: open/close state, reset, logout, and cross-page
//! navigation.

#![cfg(not(feature = "browser"))]

mod common;

use comprar::{InventoryPage, Role};

async fn open_inventory(provider: &comprar::SessionProvider) -> (comprar::Pages, InventoryPage) {
    let pages = provider.pages(Role::Standard).await.unwrap();
    let inventory = pages.inventory();
    inventory.open().await.unwrap();
    (pages, inventory)
}

#[tokio::test]
async fn menu_opens_and_closes() {
    let (provider, _dir) = common::provider().await;
    let (_pages, inventory) = open_inventory(&provider).await;
    let menu = &inventory.navigation;

    assert!(!menu.is_open().await);
    menu.open().await.unwrap();
    assert!(menu.is_open().await);
    menu.close().await.unwrap();
    assert!(!menu.is_open().await);
}

#[tokio::test]
async fn reset_empties_the_cart_and_hands_back_a_closed_menu() {
    let (provider, _dir) = common::provider().await;
    let (_pages, inventory) = open_inventory(&provider).await;

    inventory.add_to_cart_by_index(0).await.unwrap();
    inventory.add_to_cart_by_index(1).await.unwrap();
    assert_eq!(inventory.cart_badge_count().await, 2);

    inventory.navigation.reset_app_state().await.unwrap();

    assert_eq!(inventory.cart_badge_count().await, 0);
    assert!(!inventory.navigation.is_open().await);
}

#[tokio::test]
async fn logout_lands_on_the_login_page() {
    let (provider, _dir) = common::provider().await;
    let (pages, inventory) = open_inventory(&provider).await;

    inventory.navigation.logout().await.unwrap();

    assert!(pages.login().is_on_login_page().await);
    assert!(!pages.page().current_url().await.contains("inventory"));
}

#[tokio::test]
async fn about_leaves_the_storefront() {
    let (provider, _dir) = common::provider().await;
    let (pages, inventory) = open_inventory(&provider).await;

    inventory.navigation.go_to_about().await.unwrap();

    assert_eq!(pages.page().current_url().await, "https://saucelabs.com/");
}

#[tokio::test]
async fn all_items_link_returns_from_the_cart() {
    let (provider, _dir) = common::provider().await;
    let pages = provider.pages(Role::Standard).await.unwrap();

    let cart = pages.cart();
    cart.open().await.unwrap();
    cart.navigation.go_to_all_items().await.unwrap();

    assert!(pages.page().current_url().await.contains("inventory"));
}
