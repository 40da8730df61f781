//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_action`] to script
//! the actor's replies.

use tokio::sync::mpsc;

use crate::actor_framework::{Entity, ResourceClient, ResourceRequest, Response};

type Inbox<T> = mpsc::Receiver<ResourceRequest<T>>;

/// Creates a client whose requests land in a receiver the test controls.
///
/// The test plays the actor: it pulls each request off the receiver, checks
/// it, and answers through the attached responder. Failures, duplicates and
/// closed actors can all be simulated without a real registry.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, Inbox<T>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut Inbox<T>,
) -> Option<(T::CreateParams, Response<T, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Register request
pub async fn expect_register<T: Entity>(
    receiver: &mut Inbox<T>,
) -> Option<(T, Response<T::Id, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Register { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut Inbox<T>,
) -> Option<(T::Id, Response<Option<T>, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(
    receiver: &mut Inbox<T>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::FrameworkError;
    use crate::domain::{CreateProductRequest, Order, OrderItem, OrderStatus, Product};
    use crate::order_actor::{OrderAction, OrderError};
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_mock_client_create() {
        let (client, mut receiver) = create_mock_client::<Product>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(CreateProductRequest::new("Mug", "Kitchen", dec!(15), "Stoneware"))
                .await
        });

        let (params, responder) =
            expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(params.name, "Mug");
        let product = Product {
            id: "product_1".into(),
            name: params.name,
            category: params.category,
            price: params.price,
            description: params.description,
        };
        responder.send(Ok(product.clone())).unwrap();

        assert_eq!(create_task.await.unwrap(), Ok(product));
    }

    #[tokio::test]
    async fn test_mock_client_scripted_rejection() {
        let (client, mut receiver) = create_mock_client::<Order>(10);

        let register_task = {
            let client = client.clone();
            let order = Order::new("order_1", "user_1", vec![OrderItem::new("p1", 1, dec!(5))]);
            tokio::spawn(async move { client.register(order).await })
        };
        let (item, responder) =
            expect_register(&mut receiver).await.expect("Expected Register request");
        assert_eq!(item.status, OrderStatus::Pending);
        responder.send(Ok(item.id)).unwrap();
        assert_eq!(register_task.await.unwrap(), Ok("order_1".to_string()));

        let action_task = tokio::spawn(async move {
            client
                .perform_action("order_1".into(), OrderAction::TransitionTo(OrderStatus::Shipped))
                .await
        });
        let (id, action, responder) =
            expect_action(&mut receiver).await.expect("Expected Action request");
        assert_eq!(id, "order_1");
        assert!(matches!(action, OrderAction::TransitionTo(OrderStatus::Shipped)));
        let rejection =
            OrderError::InvalidTransition { from: OrderStatus::Pending, to: OrderStatus::Shipped };
        responder.send(Err(FrameworkError::Rejected(rejection.clone()))).unwrap();

        assert_eq!(action_task.await.unwrap(), Err(FrameworkError::Rejected(rejection)));
    }

    #[tokio::test]
    async fn test_dropped_responder_reports_actor_dropped() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let get_task = tokio::spawn(async move { client.get("product_1".into()).await });

        let (_, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        drop(responder);

        assert_eq!(get_task.await.unwrap(), Err(FrameworkError::ActorDropped));
    }
}
