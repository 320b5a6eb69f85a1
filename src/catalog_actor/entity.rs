//! `ActorEntity` implementation for [`Product`].
//!
//! The store performs no validation: creation and updates always succeed, and the
//! filter is the name/category predicate from [`ProductFilter`].

use super::CatalogError;
use crate::framework::ActorEntity;
use crate::model::{Product, ProductDraft, ProductFilter, ProductId, ProductPatch};

impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductDraft;
    type Update = ProductPatch;
    type Filter = ProductFilter;
    type Error = CatalogError;

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn from_create_params(id: ProductId, params: ProductDraft) -> Result<Self, CatalogError> {
        Ok(Self {
            id,
            name: params.name,
            category: params.category,
            price: params.price,
            image_url: params.image_url,
            description: params.description,
        })
    }

    /// Merges the patch field by field.
    fn on_update(&mut self, update: ProductPatch) -> Result<(), CatalogError> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(image_url) = update.image_url {
            self.image_url = image_url;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        Ok(())
    }

    fn matches(&self, filter: &ProductFilter) -> bool {
        filter.matches(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_patch_leaves_other_fields_alone() {
        let draft = ProductDraft::new("Bookshelf", "Furniture", 8999, "img", "Sturdy.");
        let mut product = Product::from_create_params(ProductId(9), draft).unwrap();
        let before = product.clone();

        product.on_update(ProductPatch::price(7999)).unwrap();

        assert_eq!(product.price, 7999);
        assert_eq!(product.id, before.id);
        assert_eq!(product.name, before.name);
        assert_eq!(product.category, before.category);
        assert_eq!(product.image_url, before.image_url);
        assert_eq!(product.description, before.description);
    }
}
