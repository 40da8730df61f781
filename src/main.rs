use rust_decimal::Decimal;
use tracing::{error, info, warn, Instrument};

use shop_services::app_system::{setup_tracing, Config, ShopSystem, SystemError};
use shop_services::domain::{
    CreateOrderRequest, CreateProductRequest, CreateUserRequest, LoginRequest, OrderItem,
    OrderStatus,
};

#[tokio::main]
async fn main() -> Result<(), SystemError> {
    let config = Config::from_env()?;
    // Setup tracing once for the entire application
    setup_tracing(&config.log_filter);

    info!("Starting shop services");

    let system = ShopSystem::new(&config);

    // Register a user and log in with the same credentials
    let span = tracing::info_span!("user_registration");
    let registration = async {
        info!("Registering demo user");
        system
            .user_client
            .create_user(CreateUserRequest::new("user@test.com", "Demo", "User", "correctpassword"))
            .await
    }
    .instrument(span)
    .await?;

    let Some(user) = registration.data else {
        error!(errors = ?registration.errors, "User registration failed");
        return system.shutdown().await;
    };
    info!(user_id = %user.id, "User registered successfully");

    let login = system
        .auth_client
        .login(LoginRequest::new(user.email.clone(), "correctpassword"))
        .instrument(tracing::info_span!("login"))
        .await;
    match &login.data {
        Some(session) => info!(token = %session.token, "Login succeeded"),
        None => warn!(message = ?login.error_message, "Login failed"),
    }

    // Catalog a product
    let product = system
        .product_client
        .create_product(CreateProductRequest::new(
            "Test Product",
            "General",
            Decimal::new(10000, 2),
            "Demo product",
        ))
        .await?;
    let Some(product) = product.data else {
        error!(errors = ?product.errors, "Product creation failed");
        return system.shutdown().await;
    };
    info!(product_id = %product.id, "Product created successfully");

    let found = system.product_client.search_by_category("General").await?;
    info!(matches = found.len(), "Catalog search by category");

    // Place an order and walk it through its lifecycle
    let span = tracing::info_span!("order_processing");
    async {
        let request = CreateOrderRequest {
            user_id: user.id.clone(),
            items: vec![OrderItem::new(product.id.clone(), 5, product.price)],
        };
        let created = system.order_client.create_order(request).await;
        let Some(order) = created.data else {
            error!(errors = ?created.errors, "Order creation failed");
            return;
        };
        info!(order_id = %order.id, total = %order.total_amount, "Order created");

        for target in [OrderStatus::Processing, OrderStatus::Shipped, OrderStatus::Delivered] {
            let result = system.order_client.update_order_status(order.id.clone(), target).await;
            if !result.success {
                error!(message = ?result.error_message, to = %target, "Status update failed");
                return;
            }
        }

        // Delivered is final
        let result = system
            .order_client
            .update_order_status(order.id.clone(), OrderStatus::Pending)
            .await;
        info!(message = ?result.error_message, "Reopening a delivered order was refused");
        match system.order_client.get_status(order.id.clone()).await {
            Ok(status) => info!(order_id = %order.id, %status, "Final order status"),
            Err(e) => error!(error = %e, "Status lookup failed"),
        }
    }
    .instrument(span)
    .await;

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
