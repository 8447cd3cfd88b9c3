//! Cart behavior through the session context.

#![allow(clippy::unwrap_used)]

use artisan_gallery_core::{Price, ProductId};
use artisan_gallery_integration_tests::{TestContext, product};
use artisan_gallery_storefront::cart::QuantityChange;
use artisan_gallery_storefront::catalog::Catalog;

#[test]
fn test_quantity_scenario() {
    let p1 = product("P1", "Stoneware Bowl", 100);
    let mut ctx = TestContext::with_catalog(Catalog::new(vec![p1.clone()]).unwrap());

    for _ in 0..3 {
        ctx.session.add_to_cart(&p1);
    }
    assert_eq!(ctx.session.cart().quantity_of(&p1.id), 3);
    assert_eq!(ctx.session.total_amount(), Price::new(300));

    ctx.session.set_quantity(&p1.id, 1);
    assert_eq!(ctx.session.total_amount(), Price::new(100));

    assert_eq!(ctx.session.set_quantity(&p1.id, 0), QuantityChange::Removed);
    assert!(ctx.session.cart().is_empty());
    assert_eq!(ctx.session.total_item_count(), 0);
    assert_eq!(ctx.last_message().unwrap(), "Item removed from cart");
}

#[test]
fn test_totals_across_products() {
    let mut ctx = TestContext::new();
    let venus = ctx.product("1");
    let vases = ctx.product("3");

    ctx.session.add_to_cart(&venus);
    ctx.session.add_to_cart(&vases);
    ctx.session.add_to_cart(&vases);

    assert_eq!(ctx.session.cart().entries().len(), 2);
    assert_eq!(ctx.session.total_item_count(), 3);
    assert_eq!(ctx.session.total_amount(), Price::new(2450 + 2 * 185));
    assert_eq!(
        ctx.messages(),
        vec![
            "Classical Venus Statue added to cart",
            "Ceramic Vase Collection added to cart",
            "Ceramic Vase Collection added to cart",
        ]
    );
}

#[test]
fn test_cart_keeps_insertion_order() {
    let mut ctx = TestContext::new();
    for id in ["6", "2", "4"] {
        ctx.session.add_to_cart_by_id(&ProductId::new(id)).unwrap();
    }
    ctx.session.add_to_cart_by_id(&ProductId::new("2")).unwrap();

    let ids: Vec<&str> = ctx
        .session
        .cart()
        .entries()
        .iter()
        .map(|e| e.product.id.as_str())
        .collect();
    assert_eq!(ids, vec!["6", "2", "4"]);
}

#[test]
fn test_large_quantities_have_no_upper_bound() {
    let mut ctx = TestContext::new();
    let pottery = ctx.product("5");
    ctx.session.add_to_cart(&pottery);

    assert_eq!(
        ctx.session.set_quantity(&pottery.id, 10_000),
        QuantityChange::Updated(10_000)
    );
    assert_eq!(ctx.session.total_amount(), Price::new(3_200_000));
}

#[test]
fn test_remove_absent_item_is_a_noop_that_still_notifies() {
    let mut ctx = TestContext::new();
    let venus = ctx.product("1");
    ctx.session.add_to_cart(&venus);

    assert!(ctx.session.remove_item(&ProductId::new("2")).is_none());
    assert_eq!(ctx.session.total_item_count(), 1);
    assert_eq!(ctx.last_message().unwrap(), "Item removed from cart");
}
