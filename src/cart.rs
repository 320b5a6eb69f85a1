//! # Shopping Cart
//!
//! Client-side cart state. The cart holds snapshots of products, not references into the
//! catalog: a product deleted from the catalog stays in the cart until [`Cart::refresh`]
//! finds it unresolvable and drops the line.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::catalog_actor::CatalogError;
use crate::clients::CatalogClient;
use crate::model::{Product, ProductId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("cannot place an order from an empty cart")]
    Empty,
}

/// A product snapshot plus how many of it are in the cart. Quantity is always at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> u64 {
        self.product.price.saturating_mul(u64::from(self.quantity))
    }
}

/// What was ordered when the cart was checked out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub items: Vec<CartItem>,
    pub item_count: u32,
    pub total_price: u64,
}

#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds one unit of `product`, returning the line's new quantity.
    pub fn add(&mut self, product: Product) -> u32 {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity = item.quantity.saturating_add(1);
            return item.quantity;
        }
        self.items.push(CartItem {
            product,
            quantity: 1,
        });
        1
    }

    /// Sets the quantity of a line. Zero removes it. Returns false if the product is not in
    /// the cart.
    pub fn update_quantity(&mut self, id: ProductId, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove(id).is_some();
        }
        match self.items.iter_mut().find(|i| i.product.id == id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: ProductId) -> Option<CartItem> {
        let position = self.items.iter().position(|i| i.product.id == id)?;
        Some(self.items.remove(position))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total units across all lines. Saturates at `u32::MAX`.
    pub fn count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Saturates at `u64::MAX`.
    pub fn total_price(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |acc, i| acc.saturating_add(i.line_total()))
    }

    /// Checks out: returns the order and empties the cart.
    pub fn place_order(&mut self) -> Result<OrderSummary, CartError> {
        if self.is_empty() {
            return Err(CartError::Empty);
        }
        let summary = OrderSummary {
            item_count: self.count(),
            total_price: self.total_price(),
            items: std::mem::take(&mut self.items),
        };
        info!(
            lines = summary.items.len(),
            item_count = summary.item_count,
            total_price = summary.total_price,
            "Order placed"
        );
        Ok(summary)
    }

    /// Re-resolves every line against the catalog.
    ///
    /// Lines whose product no longer exists are dropped and their ids returned; the rest get
    /// the catalog's current product data. Any error other than `NotFound` aborts the
    /// refresh and leaves the cart unchanged.
    pub async fn refresh(&mut self, catalog: &CatalogClient) -> Result<Vec<ProductId>, CatalogError> {
        let mut resolved = Vec::with_capacity(self.items.len());
        let mut dropped = Vec::new();

        for item in &self.items {
            match catalog.get_product(item.product.id).await {
                Ok(product) => resolved.push(CartItem {
                    product,
                    quantity: item.quantity,
                }),
                Err(CatalogError::NotFound(_)) => {
                    warn!(id = %item.product.id, "Dropping cart line for deleted product");
                    dropped.push(item.product.id);
                }
                Err(e) => return Err(e),
            }
        }

        self.items = resolved;
        Ok(dropped)
    }
}
