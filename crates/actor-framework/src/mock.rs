//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from a
//! queue of scripted expectations instead of an actor. It lets you test code that *talks to*
//! an actor (a domain client, or another actor's hooks) without running the actor itself.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Determinism** | Fully scripted | Subject to scheduler |
//! | **State** | None (expectations only) | Real state management |
//! | **Use Case** | Logic *around* a client | The actor itself or the full system |
//! | **Error Injection** | Easy (`return_err`) | Requires reaching the state |
//!
//! ## Testing Strategies
//!
//! - **Pattern 0: Client logic (pure mock).** Wrap `mock.client()` in a domain client and
//!   assert on what the wrapper returns.
//! - **Pattern 1: Single actor.** Spawn one `ResourceActor` and drive it through its client.
//! - **Pattern 2: Actor with mocked dependencies.** Run a real actor whose context holds
//!   clients built from mocks; see `tests/order_actor_test.rs` in the `delivery-service` crate.
//! - **Pattern 3: Full system.** Start every actor and exercise end-to-end flows.
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Courier { id: u32, name: String }
//! #[derive(Debug)] struct CourierCreate;
//! #[derive(Debug)] struct CourierUpdate;
//! #[derive(Debug)] enum CourierAction {}
//! #[derive(Debug, thiserror::Error)] #[error("courier error")] struct CourierError;
//!
//! #[async_trait]
//! impl ActorEntity for Courier {
//!     type Id = u32; type Create = CourierCreate; type Update = CourierUpdate; type Filter = ();
//!     type Action = CourierAction; type ActionResult = (); type Context = (); type Error = CourierError;
//!     fn from_create_params(id: u32, _: CourierCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, name: String::new() })
//!     }
//!     async fn on_update(&mut self, _: CourierUpdate, _: &mut ()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: CourierAction, _: &mut ()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Courier>::new();
//!     mock.expect_list().return_ok(vec![Courier { id: 1, name: "Asha".into() }]);
//!     // Simulate a downstream failure
//!     mock.expect_get(7).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.list(None).await.unwrap().len(), 1);
//!     assert!(matches!(client.get(7).await, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! ## Channel-level helpers
//!
//! [`create_mock_client`] returns a client plus the raw receiver, and [`expect_create`],
//! [`expect_get`], [`expect_list`], [`expect_action`] pull the next request off it so a test can
//! inspect the payload before answering.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the response scripted for it.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<(T::Id, T), FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in the order they were registered. A request that does not match
/// the next expectation (wrong kind, or wrong ID) panics the mock's task, which surfaces in the
/// test as `FrameworkError::ActorDropped` / `ActorClosed` and as a failed [`MockClient::verify`].
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response })) => {
                        assert_eq!(id, want, "get called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to, .. }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update { id: want, response }),
                    ) => {
                        assert_eq!(id, want, "update called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: want, response }),
                    ) => {
                        assert_eq!(id, want, "action called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| Expectation::Get { id, response })
    }

    /// Expects a `create` operation, answered with the new ID and the created entity.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, (T::Id, T)> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Create { response })
    }

    /// Expects a `list` operation, whatever its filter.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::List { response })
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| Expectation::Update { id, response })
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| Expectation::Action { id, response })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder that registers the response for one expectation.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Expectations<T>,
    wrap: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: Expectations<T>,
        wrap: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            wrap: Box::new(wrap),
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.wrap)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Nothing answers the requests automatically; the test pulls them off the receiver with the
/// `expect_*` helpers below and replies through the returned responders.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<(T::Id, T), FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Option<T::Filter>, oneshot::Sender<Result<Vec<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::List { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, oneshot::Sender<Result<T::ActionResult, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Courier {
        id: u32,
        name: String,
        rating: f64,
    }

    #[derive(Debug)]
    struct CourierCreate {
        name: String,
    }

    #[derive(Debug)]
    struct CourierUpdate;

    #[derive(Debug)]
    enum CourierAction {
        Rate(f64),
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Courier error")]
    struct CourierError;

    #[async_trait]
    impl ActorEntity for Courier {
        type Id = u32;
        type Create = CourierCreate;
        type Update = CourierUpdate;
        type Filter = f64;
        type Action = CourierAction;
        type ActionResult = f64;
        type Context = ();
        type Error = CourierError;

        fn from_create_params(id: u32, params: CourierCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                name: params.name,
                rating: 0.0,
            })
        }

        async fn on_update(&mut self, _update: CourierUpdate, _ctx: &mut ()) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(&mut self, action: CourierAction, _ctx: &mut ()) -> Result<f64, Self::Error> {
            match action {
                CourierAction::Rate(r) => {
                    self.rating = r;
                    Ok(r)
                }
            }
        }
    }

    fn courier(id: u32, name: &str, rating: f64) -> Courier {
        Courier {
            id,
            name: name.to_string(),
            rating,
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Courier>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(CourierCreate {
                    name: "Asha".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.name, "Asha");
        responder.send(Ok((1, courier(1, "Asha", 0.0)))).unwrap();

        let result = create_task.await.unwrap();
        assert!(matches!(result, Ok(1)));
    }

    #[tokio::test]
    async fn test_list_helper_exposes_filter() {
        let (client, mut receiver) = create_mock_client::<Courier>(10);

        let list_task = tokio::spawn(async move { client.list(Some(4.0)).await });

        let (filter, responder) = expect_list(&mut receiver).await.expect("Expected List request");
        assert_eq!(filter, Some(4.0));
        responder.send(Ok(vec![courier(2, "Ben", 4.5)])).unwrap();

        let listed = list_task.await.unwrap().unwrap();
        assert_eq!(listed, vec![courier(2, "Ben", 4.5)]);
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Courier>::new();

        mock.expect_create().return_ok((1, courier(1, "Asha", 0.0)));
        mock.expect_get(1).return_ok(Some(courier(1, "Asha", 0.0)));
        mock.expect_action(1).return_ok(4.2);
        mock.expect_update(1).return_err(FrameworkError::NotFound("1".into()));

        let client = mock.client();

        let id = client
            .create(CourierCreate {
                name: "Asha".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(id, 1);

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched.unwrap().name, "Asha");

        assert_eq!(client.perform_action(1, CourierAction::Rate(4.2)).await.unwrap(), 4.2);

        let err = client.update(1, CourierUpdate).await.unwrap_err();
        assert!(matches!(err, FrameworkError::NotFound(_)));

        mock.verify();
    }
}
