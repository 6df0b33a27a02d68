//! # System Lifecycle & Orchestration
//!
//! Starts, wires, and stops the actors that make up the delivery core.
//!
//! ## Wiring
//!
//! Actors are created without dependencies and receive them when they start (`run(context)`):
//!
//! | Actor | Context |
//! |-------|---------|
//! | `DeliveryAgent` | `()` |
//! | `Restaurant` | `()` |
//! | `Order` | [`OrderContext`](crate::order_actor::OrderContext): agent client + assignment policy |
//!
//! The dependency graph is acyclic, so dropping the clients is enough to stop everything:
//! each actor ends when its channel closes, and the agent actor ends once the order actor has
//! released its clone of the agent client.
//!
//! ## Configuration
//!
//! [`SystemConfig`] sets the channel capacity and, optionally, the seed of the assignment
//! RNG. It is read from TOML; the demo binary takes the path from `DELIVERY_CONFIG`.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the compact `RUST_LOG`-filtered subscriber shared with the
//! actor framework.

pub mod config;
pub mod delivery_system;

pub use actor_framework::tracing::setup_tracing;
pub use config::{ConfigError, SystemConfig};
pub use delivery_system::{DeliverySystem, ShutdownError};
