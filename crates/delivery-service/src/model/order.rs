/// Represents a customer order moving through the delivery lifecycle.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`])
/// - Status updates ([`StatusUpdate`])
/// - Custom actions ([`OrderAction`](crate::order_actor::OrderAction))
use crate::model::AgentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// The customer who owns an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub u64);

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

/// Where an order is in its lifecycle.
///
/// ```text
/// PLACED -> CONFIRMED -> PREPARING -> OUT_FOR_DELIVERY -> DELIVERED
/// PLACED | CONFIRMED | PREPARING -> CANCELLED
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Placed,
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Placed,
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Wire name, e.g. `OUT_FOR_DELIVERY`.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "PLACED",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Preparing => "PREPARING",
            OrderStatus::OutForDelivery => "OUT_FOR_DELIVERY",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    /// `DELIVERED` and `CANCELLED` accept no further changes.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Statuses in which a courier may be attached to the order.
    pub fn accepts_agent(&self) -> bool {
        matches!(
            self,
            OrderStatus::Confirmed | OrderStatus::Preparing | OrderStatus::OutForDelivery
        )
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown order status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    /// Accepts the wire names in any letter case, with `-` or `_` separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_").to_ascii_uppercase();
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// One line of an order: a menu item reference and how many of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub menu_item: String,
    pub quantity: u32,
}

impl OrderItem {
    pub fn new(menu_item: impl Into<String>, quantity: u32) -> Self {
        Self {
            menu_item: menu_item.into(),
            quantity,
        }
    }
}

/// The courier bound to an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignedAgent {
    pub id: AgentId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub assigned_agent: Option<AssignedAgent>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Creates a freshly placed order stamped with the current time.
    pub fn new(id: OrderId, user_id: UserId, items: Vec<OrderItem>) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            items,
            status: OrderStatus::Placed,
            assigned_agent: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refreshes `updated_at`. Called on every committed mutation.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Payload for creating a new order.
///
/// `user_id` is optional so that a request missing its owner can be rejected with a
/// validation error rather than failing to deserialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub user_id: Option<UserId>,
    pub items: Vec<OrderItem>,
}

/// Payload for moving an order to a new status.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: OrderStatus,
}

/// List filters understood by the order store.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderQuery {
    ByUser(UserId),
    ByStatus(OrderStatus),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_wire_names_loosely() {
        assert_eq!("PLACED".parse::<OrderStatus>().unwrap(), OrderStatus::Placed);
        assert_eq!(
            "out_for_delivery".parse::<OrderStatus>().unwrap(),
            OrderStatus::OutForDelivery
        );
        assert_eq!(" Out-For-Delivery ".parse::<OrderStatus>().unwrap(), OrderStatus::OutForDelivery);
        assert_eq!(
            "SHIPPED".parse::<OrderStatus>().unwrap_err(),
            UnknownStatus("SHIPPED".into())
        );
    }

    #[test]
    fn status_serializes_as_wire_name() {
        for status in OrderStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn terminal_and_assignable_statuses() {
        let terminal: Vec<_> = OrderStatus::ALL.into_iter().filter(OrderStatus::is_terminal).collect();
        assert_eq!(terminal, vec![OrderStatus::Delivered, OrderStatus::Cancelled]);

        let assignable: Vec<_> = OrderStatus::ALL.into_iter().filter(OrderStatus::accepts_agent).collect();
        assert_eq!(
            assignable,
            vec![OrderStatus::Confirmed, OrderStatus::Preparing, OrderStatus::OutForDelivery]
        );
    }

    #[test]
    fn new_order_is_placed_and_unassigned() {
        let order = Order::new(OrderId(3), UserId(42), vec![OrderItem::new("pizza", 2)]);
        assert_eq!(order.id.to_string(), "order_3");
        assert_eq!(order.status, OrderStatus::Placed);
        assert!(order.assigned_agent.is_none());
        assert_eq!(order.created_at, order.updated_at);
    }
}
