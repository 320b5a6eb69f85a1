//! # Storefront
//!
//! Demo driver for the catalog service. Pass a TOML config path as the first argument
//! to override defaults; `CATALOG_*` environment variables override both.
//!
//! The run walks through:
//! 1.  Browsing: featured strip, paged listing, category and name filters.
//! 2.  Admin: add, update and delete behind a role check.
//! 3.  Cart: add items, refresh against the catalog, place the order.

use std::path::PathBuf;

use storefront_catalog::cart::Cart;
use storefront_catalog::clients::ProductQuery;
use storefront_catalog::lifecycle::{setup_tracing, CatalogConfig, Storefront};
use storefront_catalog::model::{ProductDraft, ProductPatch};
use storefront_catalog::session::{Role, Session};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = CatalogConfig::load(config_path.as_deref()).map_err(|e| e.to_string())?;

    setup_tracing(&config.log_level);

    info!(latency_ms = config.latency_ms, "Starting storefront");

    let storefront = Storefront::start(&config).map_err(|e| e.to_string())?;
    let catalog = storefront.catalog.clone();

    let span = tracing::info_span!("browse");
    async {
        let featured = catalog.featured(4).await?;
        for product in &featured {
            info!(id = %product.id, name = %product.name, price = product.price, "Featured");
        }

        let categories = catalog.list_categories().await?;
        info!(?categories, "Categories");

        let first = catalog.list_products(ProductQuery::new()).await?;
        info!(
            returned = first.items.len(),
            total_pages = first.total_pages,
            "Page 1"
        );

        let electronics = catalog
            .list_products(ProductQuery::new().category("electronics"))
            .await?;
        info!(returned = electronics.items.len(), "Electronics");

        let desks = catalog.list_products(ProductQuery::new().name("desk")).await?;
        info!(returned = desks.items.len(), "Name contains \"desk\"");
        Ok::<_, storefront_catalog::catalog_actor::CatalogError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let mut session = Session::new();
    session.login(Role::Admin);

    let span = tracing::info_span!("admin");
    let added = async {
        let admin = session.require_admin().map_err(|e| e.to_string())?;
        info!(user = %admin.name, "Admin flow");

        let draft = ProductDraft::new(
            "Cast Iron Skillet",
            "Kitchen",
            3999,
            "https://images.unsplash.com/photo-1590794056226-79ef3a8147e1?w=500",
            "Pre-seasoned 12-inch skillet.",
        );
        draft.validate().map_err(|e| e.to_string())?;
        let added = catalog.add_product(draft).await.map_err(|e| e.to_string())?;

        let patch = ProductPatch::price(3499);
        patch.validate().map_err(|e| e.to_string())?;
        let updated = catalog
            .update_product(added.id, patch)
            .await
            .map_err(|e| e.to_string())?;
        info!(id = %updated.id, price = updated.price, "Price adjusted");
        Ok::<_, String>(updated)
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("checkout");
    let order_result = async {
        let mut cart = Cart::new();
        let page = catalog.list_products(ProductQuery::new()).await?;
        for product in page.items.into_iter().take(3) {
            cart.add(product);
        }
        cart.add(catalog.get_product(added.id).await?);
        info!(count = cart.count(), total = cart.total_price(), "Cart filled");

        // The skillet is withdrawn while it sits in the cart.
        catalog.delete_product(added.id).await?;
        let dropped = cart.refresh(&catalog).await?;
        info!(?dropped, count = cart.count(), "Cart refreshed");

        Ok::<_, Box<dyn std::error::Error>>(cart.place_order()?)
    }
    .instrument(span)
    .await;

    match order_result {
        Ok(order) => info!(
            item_count = order.item_count,
            total_price = order.total_price,
            "Order placed successfully"
        ),
        Err(e) => error!(error = %e, "Checkout failed"),
    }

    session.logout();
    drop(catalog);
    storefront.shutdown().await.map_err(|e| e.to_string())?;

    info!("Storefront completed successfully");
    Ok(())
}
