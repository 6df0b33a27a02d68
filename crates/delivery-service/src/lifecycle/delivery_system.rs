use crate::assignment::AssignmentPolicy;
use crate::clients::{AgentClient, OrderClient, RestaurantClient};
use crate::lifecycle::SystemConfig;
use crate::order_actor::OrderContext;
use crate::{agent_actor, order_actor, restaurant_actor};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::info;

/// Raised when an actor task did not finish cleanly.
#[derive(Debug, Error)]
pub enum ShutdownError {
    #[error("actor task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

/// Owns the running actors and the clients used to reach them.
pub struct DeliverySystem {
    pub order_client: OrderClient,
    pub agent_client: AgentClient,
    pub restaurant_client: RestaurantClient,
    handles: Vec<JoinHandle<()>>,
}

impl DeliverySystem {
    /// Starts every actor. Must be called from within a Tokio runtime.
    pub fn new(config: &SystemConfig) -> Self {
        // 1. Create actors (no dependencies yet)
        let (agent_actor, agent_client) = agent_actor::new(config.channel_buffer);
        let (restaurant_actor, restaurant_client) = restaurant_actor::new(config.channel_buffer);
        let (order_actor, order_client) = order_actor::new(config.channel_buffer);

        let agent_client = AgentClient::new(agent_client);
        let restaurant_client = RestaurantClient::new(restaurant_client);
        let order_client = OrderClient::new(order_client);

        // 2. Start actors with their dependencies injected
        let context = OrderContext::new(
            agent_client.clone(),
            AssignmentPolicy::from_seed(config.assignment_seed),
        );
        let handles = vec![
            tokio::spawn(agent_actor.run(())),
            tokio::spawn(restaurant_actor.run(())),
            tokio::spawn(order_actor.run(context)),
        ];
        info!(
            channel_buffer = config.channel_buffer,
            seeded = config.assignment_seed.is_some(),
            "Delivery system started"
        );

        Self {
            order_client,
            agent_client,
            restaurant_client,
            handles,
        }
    }

    /// Drops every client and waits for the actors to drain and stop.
    ///
    /// The order actor holds its own agent client, so the agent actor stops only after the
    /// order actor has. Clones of the clients held elsewhere keep their actors alive.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        let Self {
            order_client,
            agent_client,
            restaurant_client,
            handles,
        } = self;
        drop(order_client);
        drop(agent_client);
        drop(restaurant_client);

        for handle in handles {
            handle.await?;
        }
        info!("Delivery system stopped");
        Ok(())
    }
}
