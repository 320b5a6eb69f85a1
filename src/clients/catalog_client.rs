//! # Catalog Client
//!
//! The query/mutation service for the product catalog. Every read and write of catalog
//! state goes through [`CatalogClient`]; views, forms and the cart hold no catalog state of
//! their own and re-derive it from the latest response.
use crate::catalog_actor::CatalogError;
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, Page, PageRequest, ResourceClient, DEFAULT_PAGE};
use crate::model::{Product, ProductDraft, ProductFilter, ProductId, ProductPatch};
use async_trait::async_trait;
use indexmap::IndexSet;
use serde::Deserialize;
use tracing::{debug, info, instrument};

/// A listing request: optional paging plus name and category filters.
///
/// Deserializes from the read-request shape `{page?, pageSize?, nameFilter?, categoryFilter?}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    #[serde(rename = "nameFilter")]
    pub name: String,
    #[serde(rename = "categoryFilter")]
    pub category: String,
}

impl ProductQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

/// Client for interacting with the catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<Product>,
    default_page_size: u32,
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<Product>, default_page_size: u32) -> Self {
        Self {
            inner,
            default_page_size,
        }
    }

    /// One page of products matching the query, newest first.
    ///
    /// Pages past the end come back empty with the real `total_pages`.
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: ProductQuery) -> Result<Page<Product>, CatalogError> {
        let request = PageRequest::new(
            query.page.unwrap_or(DEFAULT_PAGE),
            query.page_size.unwrap_or(self.default_page_size),
        )?;
        let filter = ProductFilter::new(query.name, query.category);
        let page = self.inner.list(filter, request).await?;
        debug!(
            returned = page.items.len(),
            total_pages = page.total_pages,
            "Listed products"
        );
        Ok(page)
    }

    /// Distinct categories currently in the catalog, in first-seen order.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<IndexSet<String>, CatalogError> {
        let products = self.inner.snapshot().await?;
        Ok(products.into_iter().map(|p| p.category).collect())
    }

    /// The first `count` products of the unfiltered listing, for preview strips.
    #[instrument(skip(self))]
    pub async fn featured(&self, count: u32) -> Result<Vec<Product>, CatalogError> {
        if count == 0 {
            return Ok(Vec::new());
        }
        let page = self
            .list_products(ProductQuery::new().page(1).page_size(count))
            .await?;
        Ok(page.items)
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.get_or_not_found(id).await
    }

    /// Adds a product at the front of the catalog. The draft is stored as given.
    #[instrument(skip(self))]
    pub async fn add_product(&self, draft: ProductDraft) -> Result<Product, CatalogError> {
        let product = self.inner.create(draft).await?;
        info!(id = %product.id, "Product added");
        Ok(product)
    }

    /// Merges `patch` onto the product; fields left `None` keep their values.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        patch: ProductPatch,
    ) -> Result<Product, CatalogError> {
        let product = self.inner.update(id, patch).await?;
        info!(%id, "Product updated");
        Ok(product)
    }

    /// Removes the product. Deleting an id that is not live is `NotFound`.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<(), CatalogError> {
        self.remove(id).await?;
        info!(%id, "Product deleted");
        Ok(())
    }
}

#[async_trait]
impl ActorClient<Product> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CatalogError::from(e)
    }

    fn not_found(id: &ProductId) -> Self::Error {
        CatalogError::NotFound(id.to_string())
    }
}
