//! Inventory page flows: the item grid, cart affordances, sorting, and the
//! problem persona's regressions.

#![cfg(not(feature = "browser"))]

mod common;

use comprar::data::{ADD_TO_CART_TEST_IDS, PRODUCT_NAMES};
use comprar::{ComprarError, InventoryPage, Role, SortOption};

async fn open_inventory(provider: &comprar::SessionProvider, role: Role) -> InventoryPage {
    let pages = provider.pages(role).await.unwrap();
    let inventory = pages.inventory();
    inventory.open().await.unwrap();
    inventory.wait_until_loaded().await.unwrap();
    inventory
}

#[tokio::test]
async fn every_row_has_a_name_description_and_positive_price() {
    let (provider, _dir) = common::provider().await;
    let inventory = open_inventory(&provider, Role::Standard).await;

    let count = inventory.item_count().await;
    assert_eq!(count, 6);
    for index in 0..count {
        let item = inventory.item(index).await.unwrap();
        assert!(!item.name().await.is_empty());
        assert!(!item.description().await.is_empty());
        assert!(item.price_value().await.unwrap() > 0.0);
    }
}

#[tokio::test]
async fn out_of_range_index_is_rejected_with_the_live_count() {
    let (provider, _dir) = common::provider().await;
    let inventory = open_inventory(&provider, Role::Standard).await;

    let err = inventory.item(6).await.unwrap_err();
    match err {
        ComprarError::OutOfBounds { index, count, .. } => {
            assert_eq!(index, 6);
            assert_eq!(count, 6);
        }
        other => panic!("expected OutOfBounds, got {other}"),
    }
    assert_eq!(
        err.to_string(),
        "Inventory index 6 is out of bounds. Total items: 6"
    );
}

#[tokio::test]
async fn absent_name_lookup_is_none_but_add_by_name_fails() {
    let (provider, _dir) = common::provider().await;
    let inventory = open_inventory(&provider, Role::Standard).await;

    assert!(inventory.item_named("Sauce Labs Time Machine").await.is_none());

    let err = inventory
        .add_to_cart("Sauce Labs Time Machine")
        .await
        .unwrap_err();
    assert!(matches!(err, ComprarError::ItemNotFound { .. }));
}

#[tokio::test]
async fn all_four_sort_orders_hold() {
    let (provider, _dir) = common::provider().await;
    let inventory = open_inventory(&provider, Role::Standard).await;

    for option in SortOption::ALL {
        inventory.sort_by(option).await.unwrap();
        assert_eq!(inventory.item_count().await, 6);
        assert!(
            inventory.is_sorted(option).await.unwrap(),
            "grid not ordered for {option:?}"
        );
    }
}

#[tokio::test]
async fn default_order_is_alphabetical() {
    let (provider, _dir) = common::provider().await;
    let inventory = open_inventory(&provider, Role::Standard).await;

    assert_eq!(inventory.item_names().await, PRODUCT_NAMES);
}

#[tokio::test]
async fn add_and_remove_toggle_the_row_affordance_and_badge() {
    let (provider, _dir) = common::provider().await;
    let inventory = open_inventory(&provider, Role::Standard).await;

    let item = inventory.item(0).await.unwrap();
    assert!(!item.is_in_cart().await);
    assert_eq!(inventory.cart_badge_count().await, 0);

    item.add_to_cart().await.unwrap();
    assert!(item.is_in_cart().await);
    assert_eq!(inventory.cart_badge_count().await, 1);

    item.remove_from_cart().await.unwrap();
    assert!(!item.is_in_cart().await);
    assert_eq!(inventory.cart_badge_count().await, 0);
}

#[tokio::test]
async fn adding_by_test_hook_updates_the_badge() {
    let (provider, _dir) = common::provider().await;
    let inventory = open_inventory(&provider, Role::Standard).await;

    inventory
        .add_by_test_id(ADD_TO_CART_TEST_IDS[0])
        .await
        .unwrap();
    assert_eq!(inventory.cart_badge_count().await, 1);
}

#[tokio::test]
async fn adding_a_named_batch_updates_the_badge() {
    let (provider, _dir) = common::provider().await;
    let inventory = open_inventory(&provider, Role::Standard).await;

    inventory
        .add_items(&[PRODUCT_NAMES[0], PRODUCT_NAMES[3]])
        .await
        .unwrap();
    assert_eq!(inventory.cart_badge_count().await, 2);
}

#[tokio::test]
async fn add_all_fills_the_cart() {
    let (provider, _dir) = common::provider().await;
    let inventory = open_inventory(&provider, Role::Standard).await;

    inventory.add_all().await.unwrap();
    assert_eq!(inventory.cart_badge_count().await, 6);
}

#[tokio::test]
async fn problem_user_serves_the_same_broken_image_everywhere() {
    let (provider, _dir) = common::provider().await;
    let inventory = open_inventory(&provider, Role::Problem).await;

    let mut sources = Vec::new();
    for item in inventory.items().await {
        sources.push(item.image_src().await.unwrap());
    }
    assert_eq!(sources.len(), 6);
    assert!(sources.iter().all(|src| src == &sources[0]));

    // Standard user gets distinct images
    let inventory = open_inventory(&provider, Role::Standard).await;
    let first = inventory.item(0).await.unwrap().image_src().await.unwrap();
    let second = inventory.item(1).await.unwrap().image_src().await.unwrap();
    assert_ne!(first, second);
}

#[tokio::test]
async fn problem_user_sort_control_is_dead() {
    let (provider, _dir) = common::provider().await;
    let inventory = open_inventory(&provider, Role::Problem).await;

    inventory.sort_by(SortOption::PriceHighToLow).await.unwrap();

    // Order is untouched, still the alphabetical default
    assert!(inventory.is_sorted(SortOption::NameAscending).await.unwrap());
    assert!(!inventory.is_sorted(SortOption::PriceHighToLow).await.unwrap());
}

#[tokio::test]
async fn title_reads_products() {
    let (provider, _dir) = common::provider().await;
    let inventory = open_inventory(&provider, Role::Standard).await;
    assert_eq!(inventory.title().await, "Products");
}
