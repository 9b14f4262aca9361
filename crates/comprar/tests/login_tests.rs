//! Login page flows: credential validation, the error surface, and the
//! locked-out persona.

#![cfg(not(feature = "browser"))]

mod common;

use comprar::data::{BAD_CREDENTIALS_MESSAGE, LOCKED_OUT_MESSAGE};
use comprar::Role;

#[tokio::test]
async fn locked_out_user_sees_error_and_stays_on_login() {
    let (provider, _dir) = common::provider().await;
    let pages = provider.fresh_pages().await.unwrap();
    let login = pages.login();
    login.open().await.unwrap();
    login.wait_until_loaded().await.unwrap();

    login
        .login(Role::LockedOut.username(), "secret_sauce")
        .await
        .unwrap();

    assert!(login.error_visible().await);
    assert_eq!(login.error_text().await, LOCKED_OUT_MESSAGE);
    assert!(!login.redirected_to_inventory().await);
}

#[tokio::test]
async fn locked_out_error_container_is_styled_as_error() {
    let (provider, _dir) = common::provider().await;
    let pages = provider.fresh_pages().await.unwrap();
    let login = pages.login();
    login.open().await.unwrap();
    login
        .login(Role::LockedOut.username(), "secret_sauce")
        .await
        .unwrap();

    assert!(login.error_visible().await);
    assert_eq!(login.error_background_color().await, "rgb(226, 35, 26)");
}

#[tokio::test]
async fn unknown_credentials_are_rejected() {
    let (provider, _dir) = common::provider().await;
    let pages = provider.fresh_pages().await.unwrap();
    let login = pages.login();
    login.open().await.unwrap();

    login.login("nobody", "letmein").await.unwrap();

    assert!(login.error_visible().await);
    assert_eq!(login.error_text().await, BAD_CREDENTIALS_MESSAGE);
}

#[tokio::test]
async fn standard_user_lands_on_inventory() {
    let (provider, _dir) = common::provider().await;
    let pages = provider.fresh_pages().await.unwrap();
    let login = pages.login();
    login.open().await.unwrap();

    login
        .login(Role::Standard.username(), "secret_sauce")
        .await
        .unwrap();

    assert!(login.redirected_to_inventory().await);
    assert!(!login.is_on_login_page().await);
}

#[tokio::test]
async fn dismissing_the_error_clears_it() {
    let (provider, _dir) = common::provider().await;
    let pages = provider.fresh_pages().await.unwrap();
    let login = pages.login();
    login.open().await.unwrap();
    login.login("nobody", "letmein").await.unwrap();
    assert!(login.error_visible().await);

    login.dismiss_error().await.unwrap();

    assert_eq!(login.error_text().await, "");
}

#[tokio::test]
async fn credentials_survive_a_rejected_login_and_can_be_cleared() {
    let (provider, _dir) = common::provider().await;
    let pages = provider.fresh_pages().await.unwrap();
    let login = pages.login();
    login.open().await.unwrap();
    login.login("nobody", "letmein").await.unwrap();

    assert_eq!(login.username_value().await, "nobody");
    assert_eq!(login.password_value().await, "letmein");

    login.clear_credentials().await.unwrap();

    assert_eq!(login.username_value().await, "");
    assert_eq!(login.password_value().await, "");
}

#[tokio::test]
async fn login_page_chrome_is_rendered() {
    let (provider, _dir) = common::provider().await;
    let pages = provider.fresh_pages().await.unwrap();
    let login = pages.login();
    login.open().await.unwrap();

    assert!(login.is_on_login_page().await);
    assert!(login.login_button_enabled().await);
    assert_eq!(login.logo_text().await, "Swag Labs");
    assert!(login.bot_image_visible().await);
}
