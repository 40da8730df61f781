use rust_decimal::Decimal;

use crate::domain::Product;

/// Catalog filters applied to a snapshot of the registry.
#[derive(Debug, Clone)]
pub enum ProductQuery {
    /// Case-insensitive substring match on the name
    Name(String),
    /// Inclusive on both ends
    PriceRange { min: Decimal, max: Decimal },
    /// Exact, case-sensitive category match
    Category(String),
}

impl ProductQuery {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            ProductQuery::Name(term) => product.name.to_lowercase().contains(&term.to_lowercase()),
            ProductQuery::PriceRange { min, max } => product.price >= *min && product.price <= *max,
            ProductQuery::Category(category) => product.category == *category,
        }
    }

    /// Matching products, ordered by name for stable output.
    pub fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        let mut found: Vec<Product> = products.into_iter().filter(|p| self.matches(p)).collect();
        found.sort_by(|a, b| a.name.cmp(&b.name));
        found
    }
}
