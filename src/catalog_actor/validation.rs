//! Form-level checks for product submissions.
//!
//! The store accepts anything; these run at the edge (admin console, forms) before a
//! draft or patch is sent.

use super::CatalogError;
use crate::model::{ProductDraft, ProductPatch};

fn require(field: &str, value: &str) -> Result<(), CatalogError> {
    if value.trim().is_empty() {
        return Err(CatalogError::ValidationError(format!("{field} is required")));
    }
    Ok(())
}

impl ProductDraft {
    /// Rejects blank name, category or image URL.
    pub fn validate(&self) -> Result<(), CatalogError> {
        require("name", &self.name)?;
        require("category", &self.category)?;
        require("imageUrl", &self.image_url)
    }
}

impl ProductPatch {
    /// Rejects an empty patch and any field that is present but blank.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.is_empty() {
            return Err(CatalogError::ValidationError("no fields to update".into()));
        }
        if let Some(name) = &self.name {
            require("name", name)?;
        }
        if let Some(category) = &self.category {
            require("category", category)?;
        }
        if let Some(image_url) = &self.image_url {
            require("imageUrl", image_url)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_rejected() {
        let draft = ProductDraft::new("  ", "Sports", 100, "img", "");
        assert_eq!(
            draft.validate(),
            Err(CatalogError::ValidationError("name is required".into()))
        );
        assert!(ProductDraft::new("Mat", "Sports", 0, "img", "").validate().is_ok());
    }

    #[test]
    fn patch_must_carry_something() {
        assert!(ProductPatch::default().validate().is_err());
        assert!(ProductPatch::price(1).validate().is_ok());
        let blank_category = ProductPatch {
            category: Some(String::new()),
            ..ProductPatch::default()
        };
        assert!(blank_category.validate().is_err());
    }
}
