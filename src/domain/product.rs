use rust_decimal::Decimal;

/// Represents a product in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub description: String,
}

/// Payload for creating a new product.
#[derive(Debug, Clone)]
pub struct CreateProductRequest {
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub description: String,
}

impl CreateProductRequest {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: Decimal,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price,
            description: description.into(),
        }
    }
}
