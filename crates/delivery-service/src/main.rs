//! # Delivery Service Demo
//!
//! Drives the delivery core end to end:
//! 1. Loads [`SystemConfig`] from the file named by `DELIVERY_CONFIG` (defaults otherwise).
//! 2. Starts the [`DeliverySystem`].
//! 3. Registers a restaurant and a few delivery agents.
//! 4. Walks one order from `PLACED` to `DELIVERED`, and shows a refused cancellation.
//!
//! ```bash
//! RUST_LOG=info cargo run -p delivery-service
//! ```

use delivery_service::lifecycle::{setup_tracing, DeliverySystem, SystemConfig};
use delivery_service::model::{AgentCreate, MenuItemCreate, OrderCreate, OrderItem, OrderStatus, RestaurantCreate, UserId};
use std::error::Error;
use tracing::{info, warn, Instrument};

fn load_config() -> Result<SystemConfig, Box<dyn Error>> {
    match std::env::var("DELIVERY_CONFIG") {
        Ok(path) => {
            info!(%path, "Loading configuration");
            Ok(SystemConfig::load(path)?)
        }
        Err(_) => Ok(SystemConfig::default()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let config = load_config()?;
    let system = DeliverySystem::new(&config);

    let restaurant = system
        .restaurant_client
        .create_restaurant(RestaurantCreate {
            name: "Trattoria Roma".to_string(),
            cuisine: "Italian".to_string(),
            address: "12 Market Street".to_string(),
        })
        .await?;
    let pizza = system
        .restaurant_client
        .add_menu_item(
            restaurant,
            MenuItemCreate {
                name: "Margherita".to_string(),
                price: 9.5,
            },
        )
        .await?;

    for (name, rating) in [("Asha", 4.8), ("Ben", 3.9), ("Chen", 4.2)] {
        system
            .agent_client
            .create_agent(AgentCreate {
                name: name.to_string(),
                rating,
            })
            .await?;
    }

    let span = tracing::info_span!("order_flow");
    async {
        let order = system
            .order_client
            .create_order(OrderCreate {
                user_id: Some(UserId(42)),
                items: vec![OrderItem::new(pizza.name.clone(), 2)],
            })
            .await?;
        info!(order_id = %order.id, status = %order.status, "Order placed");

        system
            .order_client
            .update_order_status(order.id, OrderStatus::Confirmed)
            .await?;
        let assigned = system.order_client.assign_agent(order.id, None).await?;
        if let Some(agent) = &assigned.assigned_agent {
            info!(order_id = %order.id, agent = %agent.name, "Agent on the way to the kitchen");
        }

        system
            .order_client
            .update_order_status(order.id, OrderStatus::Preparing)
            .await?;
        system
            .order_client
            .update_order_status(order.id, OrderStatus::OutForDelivery)
            .await?;

        if let Err(e) = system.order_client.cancel_order(order.id).await {
            warn!(order_id = %order.id, error = %e, "Cancellation refused");
        }

        let delivered = system
            .order_client
            .update_order_status(order.id, OrderStatus::Delivered)
            .await?;
        info!(order_id = %delivered.id, status = %delivered.status, "Order complete");
        Ok::<_, Box<dyn Error>>(())
    }
    .instrument(span)
    .await?;

    system.shutdown().await?;
    info!("Demo finished");
    Ok(())
}
