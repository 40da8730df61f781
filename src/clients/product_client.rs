use rust_decimal::Decimal;
use tracing::{debug, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::app_system::ServiceResult;
use crate::domain::{CreateProductRequest, Product};
use crate::product_actor::{ProductError, ProductQuery};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, ProductError, product);

impl ProductClient {
    /// Creates a product. An empty name is an `Err`; a negative price comes
    /// back as a validation failure inside the envelope.
    #[instrument(skip(self, request), fields(product_name = %request.name))]
    pub async fn create_product(
        &self,
        request: CreateProductRequest,
    ) -> Result<ServiceResult<Product>, ProductError> {
        debug!("Sending request");
        match self.inner.create(request).await.map_err(ProductError::from) {
            Ok(product) => {
                info!(product_id = %product.id, "Product created");
                Ok(ServiceResult::ok(product))
            }
            Err(e @ ProductError::InvalidArgument(_)) => Err(e),
            Err(e) => Ok(ServiceResult::from_error(e)),
        }
    }

    #[instrument(skip(self))]
    pub async fn search(&self, query: ProductQuery) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        let products = self.inner.list().await?;
        let found = query.apply(products);
        debug!(matches = found.len(), "Search complete");
        Ok(found)
    }

    pub async fn search_by_name(
        &self,
        term: impl Into<String>,
    ) -> Result<Vec<Product>, ProductError> {
        self.search(ProductQuery::Name(term.into())).await
    }

    pub async fn search_by_price_range(
        &self,
        min: Decimal,
        max: Decimal,
    ) -> Result<Vec<Product>, ProductError> {
        self.search(ProductQuery::PriceRange { min, max }).await
    }

    pub async fn search_by_category(
        &self,
        category: impl Into<String>,
    ) -> Result<Vec<Product>, ProductError> {
        self.search(ProductQuery::Category(category.into())).await
    }
}
