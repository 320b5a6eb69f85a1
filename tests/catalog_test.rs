use storefront_catalog::cart::Cart;
use storefront_catalog::catalog_actor::CatalogError;
use storefront_catalog::clients::{CatalogClient, ProductQuery};
use storefront_catalog::lifecycle::{CatalogConfig, Storefront};
use storefront_catalog::model::{ProductDraft, ProductId, ProductPatch};

fn instant_config() -> CatalogConfig {
    CatalogConfig {
        latency_ms: 0,
        ..CatalogConfig::default()
    }
}

fn start() -> Storefront {
    Storefront::start(&instant_config()).expect("Failed to start storefront")
}

async fn all_ids(catalog: &CatalogClient) -> Vec<ProductId> {
    catalog
        .list_products(ProductQuery::new().page_size(100))
        .await
        .expect("Failed to list products")
        .items
        .into_iter()
        .map(|p| p.id)
        .collect()
}

/// The demo catalog: 12 products over 4 categories, paged 8 + 4.
#[tokio::test]
async fn test_seeded_catalog_pages() {
    let storefront = start();
    let catalog = &storefront.catalog;

    let categories = catalog.list_categories().await.expect("Failed to list categories");
    let categories: Vec<&str> = categories.iter().map(String::as_str).collect();
    assert_eq!(
        categories,
        vec!["Electronics", "Furniture", "Appliances", "Sports"]
    );

    let first = catalog
        .list_products(ProductQuery::new().page(1).page_size(8))
        .await
        .expect("Failed to list page 1");
    assert_eq!(first.items.len(), 8);
    assert_eq!(first.total_pages, 2);
    assert_eq!(first.current_page, 1);
    assert_eq!(first.items[0].id, ProductId(1));

    let second = catalog
        .list_products(ProductQuery::new().page(2).page_size(8))
        .await
        .expect("Failed to list page 2");
    let ids: Vec<u32> = second.items.iter().map(|p| p.id.0).collect();
    assert_eq!(ids, vec![9, 10, 11, 12]);

    // Past the end is empty, not an error
    let third = catalog
        .list_products(ProductQuery::new().page(3))
        .await
        .expect("Failed to list page 3");
    assert!(third.items.is_empty());
    assert_eq!(third.total_pages, 2);

    storefront.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_filters_are_case_insensitive() {
    let storefront = start();
    let catalog = &storefront.catalog;

    let electronics = catalog
        .list_products(ProductQuery::new().category("electronics"))
        .await
        .expect("Failed to filter by category");
    let ids: Vec<u32> = electronics.items.iter().map(|p| p.id.0).collect();
    assert_eq!(ids, vec![1, 2, 3, 6, 8]);
    assert!(electronics.items.iter().all(|p| p.category == "Electronics"));
    assert_eq!(electronics.total_pages, 1);

    let ergonomic = catalog
        .list_products(ProductQuery::new().name("ERGONOMIC"))
        .await
        .expect("Failed to filter by name");
    let names: Vec<&str> = ergonomic.items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Ergonomic Wireless Mouse", "Ergonomic Office Chair"]);

    // Both filters must hold
    let none = catalog
        .list_products(ProductQuery::new().name("ergonomic").category("sports"))
        .await
        .expect("Failed to combine filters");
    assert!(none.items.is_empty());
    assert_eq!(none.total_pages, 0);

    // Exact category match only
    let partial = catalog
        .list_products(ProductQuery::new().category("Elect"))
        .await
        .expect("Failed to filter by partial category");
    assert!(partial.items.is_empty());
}

#[tokio::test]
async fn test_total_pages_rounds_up() {
    let storefront = start();
    let catalog = &storefront.catalog;

    let page = catalog
        .list_products(ProductQuery::new().page_size(5))
        .await
        .expect("Failed to list");
    assert_eq!(page.total_pages, 3);

    let last = catalog
        .list_products(ProductQuery::new().page(3).page_size(5))
        .await
        .expect("Failed to list last page");
    assert_eq!(last.items.len(), 2);
}

#[tokio::test]
async fn test_zero_page_size_is_rejected() {
    let storefront = start();
    let result = storefront
        .catalog
        .list_products(ProductQuery::new().page_size(0))
        .await;
    assert!(matches!(result, Err(CatalogError::InvalidPage(_))));
}

#[tokio::test]
async fn test_add_then_get_round_trips() {
    let storefront = start();
    let catalog = &storefront.catalog;

    let draft = ProductDraft::new(
        "Cast Iron Skillet",
        "Kitchen",
        3999,
        "https://example.com/skillet.jpg",
        "Pre-seasoned.",
    );
    let added = catalog
        .add_product(draft.clone())
        .await
        .expect("Failed to add product");
    assert_eq!(added.id, ProductId(13));
    assert_eq!(added.to_draft(), draft);

    let fetched = catalog
        .get_product(added.id)
        .await
        .expect("Failed to get product");
    assert_eq!(fetched, added);

    // Newest first
    let ids = all_ids(catalog).await;
    assert_eq!(ids.len(), 13);
    assert_eq!(ids[0], added.id);

    // Categories follow listing order, so the new one leads
    let categories = catalog.list_categories().await.expect("Failed to list categories");
    assert_eq!(categories.first().map(String::as_str), Some("Kitchen"));
}

#[tokio::test]
async fn test_update_changes_only_patched_fields() {
    let storefront = start();
    let catalog = &storefront.catalog;

    let before = catalog
        .get_product(ProductId(3))
        .await
        .expect("Failed to get keyboard");
    let after = catalog
        .update_product(ProductId(3), ProductPatch::price(8999))
        .await
        .expect("Failed to update keyboard");

    assert_eq!(after.price, 8999);
    assert_eq!(after.id, before.id);
    assert_eq!(after.name, before.name);
    assert_eq!(after.category, before.category);
    assert_eq!(after.image_url, before.image_url);
    assert_eq!(after.description, before.description);

    // Position in the listing is unchanged
    let ids = all_ids(catalog).await;
    assert_eq!(ids[2], ProductId(3));

    let missing = catalog
        .update_product(ProductId(99), ProductPatch::price(1))
        .await;
    assert_eq!(missing, Err(CatalogError::NotFound("99".into())));
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let storefront = start();
    let catalog = &storefront.catalog;

    catalog
        .delete_product(ProductId(5))
        .await
        .expect("Failed to delete product");

    assert_eq!(
        catalog.get_product(ProductId(5)).await,
        Err(CatalogError::NotFound("5".into()))
    );
    assert!(!all_ids(catalog).await.contains(&ProductId(5)));

    // Deleting again reports the missing id
    assert_eq!(
        catalog.delete_product(ProductId(5)).await,
        Err(CatalogError::NotFound("5".into()))
    );
}

#[tokio::test]
async fn test_categories_are_stable_without_mutations() {
    let storefront = start();
    let catalog = &storefront.catalog;

    let first = catalog.list_categories().await.expect("Failed to list categories");
    let second = catalog.list_categories().await.expect("Failed to list categories");
    assert!(first.iter().eq(second.iter()));

    // Removing the last Sports products removes the category
    catalog.delete_product(ProductId(10)).await.expect("Failed to delete");
    catalog.delete_product(ProductId(12)).await.expect("Failed to delete");
    let after = catalog.list_categories().await.expect("Failed to list categories");
    assert!(!after.contains("Sports"));
    assert_eq!(after.len(), 3);
}

#[tokio::test]
async fn test_featured_returns_head_of_listing() {
    let storefront = start();
    let featured = storefront
        .catalog
        .featured(4)
        .await
        .expect("Failed to get featured");
    let ids: Vec<u32> = featured.iter().map(|p| p.id.0).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_unseeded_catalog_starts_empty() {
    let config = CatalogConfig {
        seed_demo_catalog: false,
        ..instant_config()
    };
    let storefront = Storefront::start(&config).expect("Failed to start storefront");

    let page = storefront
        .catalog
        .list_products(ProductQuery::new())
        .await
        .expect("Failed to list");
    assert!(page.items.is_empty());
    assert_eq!(page.total_pages, 0);

    let added = storefront
        .catalog
        .add_product(ProductDraft::new("Kettle", "Appliances", 2500, "img", ""))
        .await
        .expect("Failed to add");
    assert_eq!(added.id, ProductId(1));
}

#[tokio::test]
async fn test_cart_refresh_against_live_catalog() {
    let storefront = start();
    let catalog = &storefront.catalog;

    let mut cart = Cart::new();
    cart.add(catalog.get_product(ProductId(7)).await.expect("Failed to get"));
    cart.add(catalog.get_product(ProductId(10)).await.expect("Failed to get"));
    cart.update_quantity(ProductId(7), 2);

    catalog
        .update_product(ProductId(7), ProductPatch::price(4499))
        .await
        .expect("Failed to update");
    catalog
        .delete_product(ProductId(10))
        .await
        .expect("Failed to delete");

    let dropped = cart.refresh(catalog).await.expect("Failed to refresh cart");
    assert_eq!(dropped, vec![ProductId(10)]);
    assert_eq!(cart.count(), 2);
    assert_eq!(cart.total_price(), 2 * 4499);

    let order = cart.place_order().expect("Failed to place order");
    assert_eq!(order.item_count, 2);
    assert!(cart.is_empty());
}

#[tokio::test]
async fn test_shutdown_waits_for_all_clients() {
    let storefront = start();
    let extra = storefront.catalog.clone();

    let handle = tokio::spawn(async move {
        let page = extra
            .list_products(ProductQuery::new())
            .await
            .expect("Failed to list");
        page.items.len()
    });

    storefront.shutdown().await.expect("Shutdown failed");
    assert_eq!(handle.await.expect("Task panicked"), 8);
}
