use serde::{Deserialize, Serialize};

use productsapp_core::{DomainError, DomainResult, Validate};

/// A product as handed to the registry.
///
/// `name` stays optional until the product is registered; registration runs
/// [`Validate::validate`] and rejects a missing or empty name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: Option<String>,
    is_sold: bool,
}

impl Product {
    /// Create an unsold product with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            is_sold: false,
        }
    }

    /// Create an unsold product without a name. It will fail validation.
    pub fn unnamed() -> Self {
        Self::default()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_sold(&self) -> bool {
        self.is_sold
    }

    /// Raw setter. Nothing in the registry ever moves a product back to unsold.
    pub fn set_sold(&mut self, is_sold: bool) {
        self.is_sold = is_sold;
    }

    pub fn mark_sold(&mut self) {
        self.is_sold = true;
    }
}

impl Validate for Product {
    fn validate(&self) -> DomainResult<()> {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => Ok(()),
            _ => Err(DomainError::name_required()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_product_validates() {
        let apple = Product::new("Apple");
        assert!(apple.validate().is_ok());
        assert_eq!(apple.name(), Some("Apple"));
        assert!(!apple.is_sold());
    }

    #[test]
    fn missing_name_fails_validation() {
        let err = Product::unnamed().validate().unwrap_err();
        assert_eq!(err, DomainError::NameRequired);
    }

    #[test]
    fn empty_name_fails_validation() {
        let err = Product::new("").validate().unwrap_err();
        assert_eq!(err, DomainError::NameRequired);
    }

    #[test]
    fn validate_does_not_change_the_product() {
        let product = Product::new("Pear");
        let before = product.clone();
        product.validate().unwrap();
        assert_eq!(product, before);
    }

    #[test]
    fn mark_sold_sets_the_flag() {
        let mut product = Product::new("Plum");
        product.mark_sold();
        assert!(product.is_sold());

        product.set_sold(false);
        assert!(!product.is_sold());
    }

    #[test]
    fn serializes_with_field_names() {
        let json = serde_json::to_value(Product::new("Fig")).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Fig", "is_sold": false }));
    }
}
