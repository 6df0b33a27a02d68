use actor_framework::mock::MockClient;
use actor_framework::FrameworkError;
use delivery_service::assignment::AssignmentPolicy;
use delivery_service::clients::{AgentClient, OrderClient};
use delivery_service::model::{AgentId, DeliveryAgent, Order, OrderCreate, OrderId, OrderItem, OrderStatus, UserId};
use delivery_service::order_actor::{self, AgentSelector, OrderContext, OrderError};
use tokio::task::JoinHandle;

/// Pattern 2: Actor + Mocks
/// - Real Order actor (transition rules and assignment run for real)
/// - Mocked agent directory (scripted agents, injected failures)
fn start_order_actor(agents: &MockClient<DeliveryAgent>) -> (OrderClient, JoinHandle<()>) {
    let (actor, generic_client) = order_actor::new(16);
    let context = OrderContext::new(AgentClient::new(agents.client()), AssignmentPolicy::seeded(11));
    let handle = tokio::spawn(actor.run(context));
    (OrderClient::new(generic_client), handle)
}

async fn confirmed_order(orders: &OrderClient) -> Order {
    let order = orders
        .create_order(OrderCreate {
            user_id: Some(UserId(42)),
            items: vec![OrderItem::new("pizza", 2)],
        })
        .await
        .unwrap();
    orders
        .update_order_status(order.id, OrderStatus::Confirmed)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_random_assignment_uses_directory() {
    let mut agents = MockClient::<DeliveryAgent>::new();
    agents
        .expect_list()
        .return_ok(vec![DeliveryAgent::new(AgentId(1), "Asha", 4.0)]);

    let (orders, handle) = start_order_actor(&agents);
    let order = confirmed_order(&orders).await;

    let assigned = orders.assign_agent(order.id, None).await.unwrap();
    let agent = assigned.assigned_agent.expect("agent bound");
    assert_eq!(agent.id, AgentId(1));
    assert_eq!(agent.name, "Asha");
    assert!(assigned.updated_at >= order.updated_at);

    agents.verify();
    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_explicit_agent_must_exist() {
    let mut agents = MockClient::<DeliveryAgent>::new();
    agents.expect_get(AgentId(9)).return_ok(None);

    let (orders, _handle) = start_order_actor(&agents);
    let order = confirmed_order(&orders).await;

    let err = orders.assign_agent(order.id, Some(AgentId(9))).await.unwrap_err();
    assert!(matches!(err, OrderError::NotFound(ref msg) if msg.contains("agent_9")), "{err:?}");

    let stored = orders.get_order(order.id).await.unwrap();
    assert!(stored.assigned_agent.is_none());
    assert_eq!(stored, order);
    agents.verify();
}

#[tokio::test]
async fn test_empty_directory_is_a_conflict() {
    let mut agents = MockClient::<DeliveryAgent>::new();
    agents.expect_list().return_ok(vec![]);

    let (orders, _handle) = start_order_actor(&agents);
    let order = confirmed_order(&orders).await;

    let err = orders.assign_agent(order.id, None).await.unwrap_err();
    assert_eq!(
        err,
        OrderError::Conflict("cannot assign agent: no eligible delivery agent".into())
    );
    agents.verify();
}

#[tokio::test]
async fn test_min_rating_and_named_selectors() {
    let mut agents = MockClient::<DeliveryAgent>::new();
    agents
        .expect_list()
        .return_ok(vec![DeliveryAgent::new(AgentId(2), "Ben", 4.6)]);
    agents.expect_list().return_ok(vec![
        DeliveryAgent::new(AgentId(1), "Asha", 3.0),
        DeliveryAgent::new(AgentId(2), "Ben", 4.6),
    ]);

    let (orders, _handle) = start_order_actor(&agents);

    let first = confirmed_order(&orders).await;
    let assigned = orders
        .assign_agent_with(first.id, AgentSelector::MinRating(4.5))
        .await
        .unwrap();
    assert_eq!(assigned.assigned_agent.map(|a| a.id), Some(AgentId(2)));

    let second = confirmed_order(&orders).await;
    let assigned = orders
        .assign_agent_with(second.id, AgentSelector::Named("Asha".into()))
        .await
        .unwrap();
    assert_eq!(assigned.assigned_agent.map(|a| a.id), Some(AgentId(1)));

    agents.verify();
}

#[tokio::test]
async fn test_preconditions_checked_before_directory_lookup() {
    // No expectations: any request to the directory would fail the test.
    let agents = MockClient::<DeliveryAgent>::new();
    let (orders, _handle) = start_order_actor(&agents);

    let placed = orders
        .create_order(OrderCreate {
            user_id: Some(UserId(7)),
            items: vec![OrderItem::new("soup", 1)],
        })
        .await
        .unwrap();

    let err = orders.assign_agent(placed.id, None).await.unwrap_err();
    assert!(matches!(err, OrderError::Conflict(_)), "{err:?}");

    let err = orders
        .assign_agent_with(placed.id, AgentSelector::MinRating(f64::NAN))
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::Validation(_)), "{err:?}");

    agents.verify();
}

#[tokio::test]
async fn test_directory_failure_leaves_order_unchanged() {
    let mut agents = MockClient::<DeliveryAgent>::new();
    agents.expect_list().return_err(FrameworkError::ActorClosed);

    let (orders, _handle) = start_order_actor(&agents);
    let order = confirmed_order(&orders).await;

    let err = orders.assign_agent(order.id, None).await.unwrap_err();
    assert!(matches!(err, OrderError::ActorCommunicationError(_)), "{err:?}");
    assert_eq!(orders.get_order(order.id).await.unwrap(), order);
    agents.verify();
}

#[tokio::test]
async fn test_create_returns_order_before_queued_cancel_applies() {
    let agents = MockClient::<DeliveryAgent>::new();
    let (actor, generic_client) = order_actor::new(16);
    let orders = OrderClient::new(generic_client);

    // Queue a create, then a cancel aimed at the id it will get, before the actor runs.
    let creating = {
        let orders = orders.clone();
        tokio::spawn(async move {
            orders
                .create_order(OrderCreate {
                    user_id: Some(UserId(42)),
                    items: vec![OrderItem::new("pizza", 2)],
                })
                .await
        })
    };
    tokio::task::yield_now().await;
    let cancelling = {
        let orders = orders.clone();
        tokio::spawn(async move { orders.cancel_order(OrderId(1)).await })
    };
    tokio::task::yield_now().await;

    let context = OrderContext::new(AgentClient::new(agents.client()), AssignmentPolicy::seeded(11));
    tokio::spawn(actor.run(context));

    let created = creating.await.unwrap().unwrap();
    assert_eq!(created.id, OrderId(1));
    assert_eq!(created.status, OrderStatus::Placed);

    let cancelled = cancelling.await.unwrap().unwrap();
    assert_eq!(cancelled.status, OrderStatus::Cancelled);
    assert_eq!(orders.get_order(OrderId(1)).await.unwrap(), cancelled);
}

#[tokio::test]
async fn test_unknown_order_is_not_found() {
    let agents = MockClient::<DeliveryAgent>::new();
    let (orders, _handle) = start_order_actor(&agents);

    let missing = OrderId(99);
    assert_eq!(
        orders.update_order_status(missing, OrderStatus::Confirmed).await.unwrap_err(),
        OrderError::NotFound("order_99".into())
    );
    assert_eq!(
        orders.cancel_order(missing).await.unwrap_err(),
        OrderError::NotFound("order_99".into())
    );
    assert_eq!(
        orders.assign_agent(missing, None).await.unwrap_err(),
        OrderError::NotFound("order_99".into())
    );
    assert!(orders.get_order(missing).await.is_err());
}
