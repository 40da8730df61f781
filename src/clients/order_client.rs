use tracing::{debug, info, instrument, warn};

use crate::actor_framework::ResourceClient;
use crate::app_system::ServiceResult;
use crate::domain::{CreateOrderRequest, Order, OrderStatus};
use crate::order_actor::{OrderAction, OrderError};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl_basic_client!(OrderClient, Order, OrderError, order);

impl OrderClient {
    /// Validates the items and stores a new Pending order.
    #[instrument(
        skip(self, request),
        fields(user_id = %request.user_id, items = request.items.len())
    )]
    pub async fn create_order(&self, request: CreateOrderRequest) -> ServiceResult<Order> {
        debug!("Sending request");
        let result = self.inner.create(request).await.map_err(OrderError::from);
        match &result {
            Ok(order) => info!(order_id = %order.id, total = %order.total_amount, "Order created"),
            Err(e) => warn!(error = %e, "Order creation failed"),
        }
        ServiceResult::from_result(result)
    }

    /// Stores an already-built order under its own id.
    ///
    /// # Errors
    /// `ValidationError` unless the order is Pending with valid items and a
    /// matching total, `DuplicateKey` if the id is taken.
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    pub async fn register(&self, order: Order) -> Result<String, OrderError> {
        debug!("Sending request");
        Ok(self.inner.register(order).await?)
    }

    /// Moves an order along the status chain.
    ///
    /// # Errors
    /// `NotFound` for an unknown id, `InvalidTransition` (status unchanged)
    /// for any pair outside the table.
    #[instrument(skip(self))]
    pub async fn transition(
        &self,
        order_id: String,
        target: OrderStatus,
    ) -> Result<(), OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(order_id, OrderAction::TransitionTo(target))
            .await?;
        Ok(())
    }

    /// Envelope form of [`OrderClient::transition`].
    pub async fn update_order_status(
        &self,
        order_id: String,
        target: OrderStatus,
    ) -> ServiceResult<()> {
        ServiceResult::from_result(self.transition(order_id, target).await)
    }

    #[instrument(skip(self))]
    pub async fn get_status(&self, order_id: String) -> Result<OrderStatus, OrderError> {
        Ok(self.get_order(order_id).await?.status)
    }
}
