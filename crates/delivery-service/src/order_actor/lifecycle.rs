//! Transition rules for the order state machine.
//!
//! ```text
//! PLACED -> CONFIRMED -> PREPARING -> OUT_FOR_DELIVERY -> DELIVERED
//! PLACED | CONFIRMED | PREPARING -> CANCELLED
//! ```
//!
//! Every function here checks first and mutates last: when one returns `Err` the order is
//! exactly as it was passed in.

use super::error::OrderError;
use crate::model::{AssignedAgent, DeliveryAgent, Order, OrderStatus};

/// The single forward step out of `status`, if any.
pub fn next_forward(status: OrderStatus) -> Option<OrderStatus> {
    match status {
        OrderStatus::Placed => Some(OrderStatus::Confirmed),
        OrderStatus::Confirmed => Some(OrderStatus::Preparing),
        OrderStatus::Preparing => Some(OrderStatus::OutForDelivery),
        OrderStatus::OutForDelivery => Some(OrderStatus::Delivered),
        OrderStatus::Delivered | OrderStatus::Cancelled => None,
    }
}

/// Whether the order can still be cancelled from `status`.
pub fn is_cancellable(status: OrderStatus) -> bool {
    matches!(
        status,
        OrderStatus::Placed | OrderStatus::Confirmed | OrderStatus::Preparing
    )
}

/// Whether `from -> to` is an edge of the transition graph.
pub fn is_valid_transition(from: OrderStatus, to: OrderStatus) -> bool {
    if to == OrderStatus::Cancelled {
        return is_cancellable(from);
    }
    next_forward(from) == Some(to)
}

fn terminal(op: &str, status: OrderStatus) -> OrderError {
    OrderError::Conflict(format!("cannot {op}: order is terminal ({status})"))
}

/// Moves the order to `next`, enforcing the transition graph.
///
/// `OUT_FOR_DELIVERY` also requires an assigned agent. A move to `CANCELLED` follows the
/// rules of [`cancel`].
pub fn advance(order: &mut Order, next: OrderStatus) -> Result<(), OrderError> {
    if next == OrderStatus::Cancelled {
        return cancel(order);
    }
    if order.status.is_terminal() {
        return Err(terminal("update status", order.status));
    }
    if !is_valid_transition(order.status, next) {
        return Err(OrderError::Conflict(format!(
            "cannot update status: {} -> {} is not a valid transition",
            order.status, next
        )));
    }
    if next == OrderStatus::OutForDelivery && order.assigned_agent.is_none() {
        return Err(OrderError::Conflict("cannot update status: no agent assigned".into()));
    }

    order.status = next;
    order.touch();
    Ok(())
}

pub fn cancel(order: &mut Order) -> Result<(), OrderError> {
    match order.status {
        OrderStatus::OutForDelivery | OrderStatus::Delivered => Err(OrderError::Conflict(
            "cannot cancel an order already in transit".into(),
        )),
        OrderStatus::Cancelled => Err(terminal("cancel", order.status)),
        OrderStatus::Placed | OrderStatus::Confirmed | OrderStatus::Preparing => {
            order.status = OrderStatus::Cancelled;
            order.touch();
            Ok(())
        }
    }
}

/// Preconditions for binding an agent: an assignable status and no agent yet.
pub fn check_assignable(order: &Order) -> Result<(), OrderError> {
    match order.status {
        OrderStatus::Delivered => {
            return Err(OrderError::Conflict(
                "cannot assign agent: order already delivered".into(),
            ))
        }
        OrderStatus::Cancelled => return Err(terminal("assign agent", order.status)),
        OrderStatus::Placed => {
            return Err(OrderError::Conflict(
                "cannot assign agent: order not yet confirmed".into(),
            ))
        }
        OrderStatus::Confirmed | OrderStatus::Preparing | OrderStatus::OutForDelivery => {}
    }
    if let Some(existing) = &order.assigned_agent {
        return Err(OrderError::Conflict(format!(
            "cannot assign agent: {} ({}) already assigned",
            existing.name, existing.id
        )));
    }
    Ok(())
}

/// Binds `agent` after re-checking the preconditions.
pub fn bind_agent(order: &mut Order, agent: &DeliveryAgent) -> Result<(), OrderError> {
    check_assignable(order)?;
    order.assigned_agent = Some(AssignedAgent {
        id: agent.id,
        name: agent.name.clone(),
    });
    order.touch();
    Ok(())
}
