use rust_decimal::Decimal;
use uuid::Uuid;

use super::error::{ProductError, EMPTY_PRODUCT_NAME, NEGATIVE_PRICE};
use crate::actor_framework::Entity;
use crate::domain::{CreateProductRequest, Product};

/// Fresh product identifier.
pub fn next_product_id() -> String {
    Uuid::new_v4().to_string()
}

impl Entity for Product {
    type Id = String;
    type CreateParams = CreateProductRequest;
    type Patch = (); // Catalog entries are immutable
    type Action = ();
    type ActionResult = ();
    type Error = ProductError;

    fn id(&self) -> &String {
        &self.id
    }

    /// Creates a new Product from creation parameters.
    ///
    /// # Errors
    /// An empty name is an invalid argument; a negative price is a
    /// validation failure.
    fn from_create_params(id: String, params: CreateProductRequest) -> Result<Self, ProductError> {
        if params.name.is_empty() {
            return Err(ProductError::InvalidArgument(EMPTY_PRODUCT_NAME.to_string()));
        }
        if params.price < Decimal::ZERO {
            return Err(ProductError::ValidationError(NEGATIVE_PRICE.to_string()));
        }
        Ok(Self {
            id,
            name: params.name,
            category: params.category,
            price: params.price,
            description: params.description,
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), ProductError> {
        Err(ProductError::Unsupported("product updates"))
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), ProductError> {
        Err(ProductError::Unsupported("product actions"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_valid_product() {
        let product = Product::from_create_params(
            "p1".into(),
            CreateProductRequest::new("Laptop", "Electronics", dec!(999.99), "A great laptop"),
        )
        .unwrap();
        assert_eq!(product.name, "Laptop");
        assert_eq!(product.price, dec!(999.99));
    }

    #[test]
    fn test_empty_name_is_invalid_argument() {
        let request = CreateProductRequest::new("", "Test", dec!(10.00), "Test product");
        let result = Product::from_create_params("p1".into(), request);
        assert_eq!(result, Err(ProductError::InvalidArgument(EMPTY_PRODUCT_NAME.to_string())));
    }

    #[test]
    fn test_negative_price_is_validation_error() {
        let result = Product::from_create_params(
            "p1".into(),
            CreateProductRequest::new("Test Product", "Test", dec!(-10.00), "Test product"),
        );
        assert_eq!(result, Err(ProductError::ValidationError(NEGATIVE_PRICE.to_string())));
    }

    #[test]
    fn test_updates_and_actions_are_unsupported() {
        let request = CreateProductRequest::new("Mug", "Kitchen", dec!(15), "");
        let mut product = Product::from_create_params("p1".into(), request).unwrap();
        let snapshot = product.clone();

        assert!(matches!(product.on_update(()), Err(ProductError::Unsupported(_))));
        assert!(matches!(product.handle_action(()), Err(ProductError::Unsupported(_))));
        assert_eq!(product, snapshot);
    }
}
