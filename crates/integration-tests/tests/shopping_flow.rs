//! End-to-end shopping flow: browse, cart, coupon, checkout, order history.

use carewell_core::{OrderStatus, ProductId};
use carewell_integration_tests::{dec, storefront_at};
use carewell_storefront::Error;
use rust_decimal::Decimal;

#[test]
fn test_full_purchase_with_coupon() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = storefront_at(dir.path());

    // Two units of a discounted product (100 @ 10% -> 90 each) plus one
    // full-price product (200).
    store.add_to_cart(&ProductId::new("1"), 2).unwrap();
    store.add_to_cart(&ProductId::new("2"), 1).unwrap();
    assert_eq!(store.cart().total_items(), 3);
    assert_eq!(store.cart().subtotal(), dec(380));

    // HEALTH15 takes 15% of 380.
    let applied = store.apply_coupon("HEALTH15").unwrap();
    assert_eq!(applied.amount, Decimal::new(570, 1));

    let order = store.checkout(Some("HEALTH15")).unwrap();
    assert_eq!(order.total, Decimal::new(3230, 1));
    assert_eq!(order.status, OrderStatus::Placed);

    // Checkout cleared the cart and recorded the order.
    assert!(store.cart().is_empty());
    assert_eq!(store.orders().list().len(), 1);
    let fetched = store.orders().get(&order.id).unwrap();
    assert_eq!(fetched.coupon_code.as_deref(), Some("HEALTH15"));
}

#[test]
fn test_bogus_coupon_is_rejected_and_nothing_changes() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = storefront_at(dir.path());

    store.add_to_cart(&ProductId::new("2"), 1).unwrap();
    let subtotal_before = store.cart().subtotal();

    let err = store.apply_coupon("BOGUS").unwrap_err();
    assert!(matches!(err, Error::Coupon(_)));

    assert_eq!(store.cart().subtotal(), subtotal_before);
    assert!(store.orders().list().is_empty());
}

#[test]
fn test_wishlist_and_cart_are_independent() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = storefront_at(dir.path());

    store.add_to_wishlist(&ProductId::new("4")).unwrap();
    store.add_to_wishlist(&ProductId::new("4")).unwrap(); // idempotent
    store.add_to_cart(&ProductId::new("1"), 1).unwrap();

    assert_eq!(store.wishlist().total_items(), 1);
    assert_eq!(store.cart().total_items(), 1);
    assert!(store.wishlist().contains(&ProductId::new("4")));
    assert!(!store.cart().contains(&ProductId::new("4")));

    // Clearing the cart leaves the wishlist alone.
    store.cart_mut().clear();
    assert_eq!(store.wishlist().total_items(), 1);
}

#[test]
fn test_order_status_progression() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = storefront_at(dir.path());

    store.add_to_cart(&ProductId::new("6"), 1).unwrap();
    let order = store.checkout(None).unwrap();

    assert_eq!(
        store.orders_mut().advance_status(&order.id).unwrap(),
        OrderStatus::Processing
    );
    assert_eq!(
        store.orders_mut().advance_status(&order.id).unwrap(),
        OrderStatus::Shipped
    );
    assert_eq!(
        store.orders_mut().advance_status(&order.id).unwrap(),
        OrderStatus::Delivered
    );
    // Terminal.
    assert_eq!(
        store.orders_mut().advance_status(&order.id).unwrap(),
        OrderStatus::Delivered
    );
}

#[test]
fn test_empty_cart_checkout_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = storefront_at(dir.path());

    let err = store.checkout(None).unwrap_err();
    assert!(matches!(err, Error::Checkout(_)));
}

#[test]
fn test_unknown_product_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = storefront_at(dir.path());

    let err = store.add_to_cart(&ProductId::new("no-such-id"), 1).unwrap_err();
    assert!(matches!(err, Error::Catalog(_)));
}
