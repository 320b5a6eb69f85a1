//! Represents a product in the catalog.
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! See [`crate::catalog_actor::entity`] for details on:
//! - Creation parameters ([`ProductDraft`])
//! - Update parameters ([`ProductPatch`])
//! - List filters ([`ProductFilter`])

use serde::{Deserialize, Serialize};
use thiserror::Error;

use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Products.
///
/// Rendered and serialized as a decimal string ("3"); the catalog assigns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An id string that is not exactly the canonical decimal rendering of an id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid product id `{0}`")]
pub struct ParseProductIdError(String);

impl FromStr for ProductId {
    type Err = ParseProductIdError;

    /// Accepts only what `Display` produces: `"03"`, `"+3"` and `" 3"` are all rejected,
    /// so two distinct strings never name the same product.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .parse::<u32>()
            .map(Self)
            .map_err(|_| ParseProductIdError(s.to_string()))?;
        if id.to_string() != s {
            return Err(ParseProductIdError(s.to_string()));
        }
        Ok(id)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for ProductId {
    type Error = ParseProductIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    /// Whole currency units.
    pub price: u64,
    pub image_url: String,
    pub description: String,
}

impl Product {
    /// The creation payload that would reproduce this product under a new id.
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            category: self.category.clone(),
            price: self.price,
            image_url: self.image_url.clone(),
            description: self.description.clone(),
        }
    }
}

/// Payload for creating a product. Every field except the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub price: u64,
    pub image_url: String,
    pub description: String,
}

impl ProductDraft {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: u64,
        image_url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price,
            image_url: image_url.into(),
            description: description.into(),
        }
    }
}

/// Partial update for a product. `None` fields are left untouched; the id cannot change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<u64>,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

impl ProductPatch {
    pub fn price(price: u64) -> Self {
        Self {
            price: Some(price),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.price.is_none()
            && self.image_url.is_none()
            && self.description.is_none()
    }
}

impl From<ProductDraft> for ProductPatch {
    /// A full edit-form submission: every field replaced.
    fn from(draft: ProductDraft) -> Self {
        Self {
            name: Some(draft.name),
            category: Some(draft.category),
            price: Some(draft.price),
            image_url: Some(draft.image_url),
            description: Some(draft.description),
        }
    }
}

/// List predicate. Empty strings disable the corresponding filter.
///
/// - `name`: case-insensitive substring of the product name.
/// - `category`: case-insensitive exact match on the category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub name: String,
    pub category: String,
}

impl ProductFilter {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        let name_ok = self.name.is_empty()
            || product
                .name
                .to_lowercase()
                .contains(&self.name.to_lowercase());
        let category_ok = self.category.is_empty()
            || product.category.to_lowercase() == self.category.to_lowercase();
        name_ok && category_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyboard() -> Product {
        Product {
            id: ProductId(3),
            name: "RGB Mechanical Keyboard".into(),
            category: "Electronics".into(),
            price: 7999,
            image_url: "https://example.com/kb.jpg".into(),
            description: "Clicky.".into(),
        }
    }

    #[test]
    fn name_filter_is_case_insensitive_substring() {
        assert!(ProductFilter::new("mechanical", "").matches(&keyboard()));
        assert!(ProductFilter::new("RGB MECH", "").matches(&keyboard()));
        assert!(!ProductFilter::new("mouse", "").matches(&keyboard()));
    }

    #[test]
    fn category_filter_is_case_insensitive_exact() {
        assert!(ProductFilter::new("", "electronics").matches(&keyboard()));
        assert!(!ProductFilter::new("", "Electro").matches(&keyboard()));
        assert!(ProductFilter::default().matches(&keyboard()));
    }

    #[test]
    fn serializes_with_string_id_and_camel_case_fields() {
        let value = toml::Value::try_from(keyboard()).unwrap();
        assert_eq!(value.get("id").and_then(|v| v.as_str()), Some("3"));
        assert!(value.get("imageUrl").is_some());
    }

    #[test]
    fn product_id_parses_and_displays() {
        assert_eq!("12".parse::<ProductId>().unwrap(), ProductId(12));
        assert_eq!(ProductId(7).to_string(), "7");
        assert!("abc".parse::<ProductId>().is_err());
    }

    #[test]
    fn product_id_requires_canonical_form() {
        for alias in [" 3", "3 ", "03", "+3", ""] {
            assert_eq!(
                alias.parse::<ProductId>(),
                Err(ParseProductIdError(alias.to_string())),
                "{alias:?} should not resolve to a product id"
            );
        }
        assert!(ProductId::try_from("03".to_string()).is_err());
        assert_eq!(ProductId::try_from("0".to_string()), Ok(ProductId(0)));
    }

    #[test]
    fn draft_converts_to_full_patch() {
        let patch = ProductPatch::from(keyboard().to_draft());
        assert_eq!(patch.price, Some(7999));
        assert!(!patch.is_empty());
        assert!(ProductPatch::default().is_empty());
    }
}
