use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info};

use super::{Config, SystemError};
use crate::actor_framework::ResourceActor;
use crate::auth_actor::UserCredentialStore;
use crate::clients::{AuthClient, OrderClient, ProductClient, UserClient};
use crate::domain::{LoginIdentity, Order, Product, UserAccount};
use crate::order_actor::entity::next_order_id;
use crate::product_actor::entity::next_product_id;
use crate::user_actor::entity::next_user_id;
use crate::user_actor::PasswordPolicy;

/// The main application system that orchestrates all actors.
///
/// Responsible for starting up actors, wiring them together, and handling shutdown.
pub struct ShopSystem {
    pub user_client: UserClient,
    pub product_client: ProductClient,
    pub order_client: OrderClient,
    pub auth_client: AuthClient,
    handles: Vec<JoinHandle<()>>,
}

impl ShopSystem {
    pub fn new(config: &Config) -> Self {
        let buffer = config.actor_buffer;

        // 1. Users
        let (user_actor, user_resource_client) = ResourceActor::<UserAccount>::new("user", buffer);
        let user_client = UserClient::new(
            user_resource_client,
            PasswordPolicy::new(config.min_password_length),
        );
        let user_handle = tokio::spawn(user_actor.with_id_generator(next_user_id).run());

        // 2. Products
        let (product_actor, product_resource_client) =
            ResourceActor::<Product>::new("product", buffer);
        let product_client = ProductClient::new(product_resource_client);
        let product_handle = tokio::spawn(product_actor.with_id_generator(next_product_id).run());

        // 3. Orders
        let (order_actor, order_resource_client) = ResourceActor::<Order>::new("order", buffer);
        let order_client = OrderClient::new(order_resource_client);
        let order_handle = tokio::spawn(order_actor.with_id_generator(next_order_id).run());

        // 4. Login identities, keyed by email; no generator, they exist implicitly
        let (identity_actor, identity_resource_client) =
            ResourceActor::<LoginIdentity>::new("login_identity", buffer);
        let credentials = Arc::new(UserCredentialStore::new(user_client.clone()));
        let auth_client = AuthClient::new(identity_resource_client, credentials);
        let identity_handle = tokio::spawn(identity_actor.run());

        info!(actor_buffer = buffer, "Shop system started");

        Self {
            user_client,
            product_client,
            order_client,
            auth_client,
            handles: vec![user_handle, product_handle, order_handle, identity_handle],
        }
    }

    /// Drops every client so the actor inboxes close, then waits for the actors.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        // The auth client holds a user client through its credential store.
        drop(self.auth_client);
        drop(self.order_client);
        drop(self.product_client);
        drop(self.user_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(SystemError::ActorTask(e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
