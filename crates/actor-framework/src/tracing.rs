//! # Observability
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber used by every actor.
//!
//! Log lines are compact and hide module paths (`with_target(false)`); actors identify
//! themselves through the `entity_type` field instead. Verbosity comes from `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle events: Created, Updated, Action ok, Shutdown
//! RUST_LOG=debug cargo run    # plus full request payloads
//! RUST_LOG=actor_framework=debug,delivery_service=info cargo run
//! ```
//!
//! With `RUST_LOG=info`, assigning a courier to an order reads:
//!
//! ```text
//! INFO Actor started entity_type="Order"
//! INFO Created entity_type="Order" id=order_1 size=1
//! INFO Updated entity_type="Order" id=order_1
//! INFO Action ok entity_type="Order" id=order_1
//! ```
//!
//! Failed hooks are logged at `warn` with the entity's error rendered through `Display`, so a
//! rejected transition shows up as `Action failed ... error=Order conflict: ...`.

use tracing_subscriber::EnvFilter;

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Falls back to `info` when `RUST_LOG` is unset or unparsable. Calling it twice is harmless;
/// the second installation attempt is ignored.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
