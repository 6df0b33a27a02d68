use delivery_service::lifecycle::{DeliverySystem, SystemConfig};
use delivery_service::model::{
    AgentCreate, AgentId, AgentUpdate, MenuItemCreate, OrderCreate, OrderItem, OrderStatus, RestaurantCreate,
    RestaurantUpdate, UserId,
};
use delivery_service::order_actor::OrderError;
use delivery_service::restaurant_actor::RestaurantError;

/// Pattern 3: Full system, every actor real.
fn seeded_system() -> DeliverySystem {
    DeliverySystem::new(&SystemConfig {
        channel_buffer: 64,
        assignment_seed: Some(5),
    })
}

fn pizza_for(user: u64) -> OrderCreate {
    OrderCreate {
        user_id: Some(UserId(user)),
        items: vec![OrderItem::new("pizza", 2)],
    }
}

async fn add_agent(system: &DeliverySystem, name: &str, rating: f64) -> AgentId {
    system
        .agent_client
        .create_agent(AgentCreate {
            name: name.to_string(),
            rating,
        })
        .await
        .unwrap()
}

#[tokio::test]
async fn test_scenario_delivery_then_refused_cancel() {
    let system = seeded_system();
    let asha = add_agent(&system, "A", 4.0).await;
    let orders = &system.order_client;

    let order = orders.create_order(pizza_for(42)).await.unwrap();
    assert_eq!(order.status, OrderStatus::Placed);
    assert_eq!(order.items, vec![OrderItem::new("pizza", 2)]);

    let order = orders
        .update_order_status(order.id, OrderStatus::Confirmed)
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::Confirmed);

    let order = orders.assign_agent(order.id, None).await.unwrap();
    assert_eq!(order.assigned_agent.as_ref().map(|a| a.id), Some(asha));

    orders
        .update_order_status(order.id, OrderStatus::Preparing)
        .await
        .unwrap();
    let order = orders
        .update_order_status(order.id, OrderStatus::OutForDelivery)
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::OutForDelivery);

    let err = orders.cancel_order(order.id).await.unwrap_err();
    assert_eq!(
        err,
        OrderError::Conflict("cannot cancel an order already in transit".into())
    );
    assert_eq!(orders.get_order(order.id).await.unwrap(), order);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_scenario_cancelled_order_is_terminal() {
    let system = seeded_system();
    let orders = &system.order_client;

    let order = orders.create_order(pizza_for(42)).await.unwrap();
    let cancelled = orders.cancel_order(order.id).await.unwrap();
    assert_eq!(cancelled.status, OrderStatus::Cancelled);

    let err = orders
        .update_order_status(order.id, OrderStatus::Confirmed)
        .await
        .unwrap_err();
    match err {
        OrderError::Conflict(msg) => assert!(msg.contains("terminal"), "{msg}"),
        other => panic!("expected conflict, got {other:?}"),
    }
    assert_eq!(orders.get_order(order.id).await.unwrap(), cancelled);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_out_for_delivery_needs_agent_and_assignment_is_single_shot() {
    let system = seeded_system();
    add_agent(&system, "Asha", 4.8).await;
    let ben = add_agent(&system, "Ben", 3.1).await;
    let orders = &system.order_client;

    let order = orders.create_order(pizza_for(1)).await.unwrap();
    orders
        .update_order_status(order.id, OrderStatus::Confirmed)
        .await
        .unwrap();
    orders
        .update_order_status(order.id, OrderStatus::Preparing)
        .await
        .unwrap();

    let err = orders
        .update_order_status(order.id, OrderStatus::OutForDelivery)
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::Conflict("cannot update status: no agent assigned".into()));

    let bound = orders.assign_agent(order.id, Some(ben)).await.unwrap();
    assert_eq!(bound.assigned_agent.as_ref().map(|a| a.name.as_str()), Some("Ben"));

    let err = orders.assign_agent(order.id, None).await.unwrap_err();
    assert!(matches!(err, OrderError::Conflict(_)));
    assert_eq!(orders.get_order(order.id).await.unwrap().assigned_agent, bound.assigned_agent);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_assignment_binds_exactly_once() {
    let system = seeded_system();
    for (name, rating) in [("Asha", 4.8), ("Ben", 3.9), ("Chen", 4.2)] {
        add_agent(&system, name, rating).await;
    }
    let order = system.order_client.create_order(pizza_for(9)).await.unwrap();
    system
        .order_client
        .update_order_status(order.id, OrderStatus::Confirmed)
        .await
        .unwrap();

    let order_id = order.id;
    let mut handles = Vec::new();
    for _ in 0..16 {
        let orders = system.order_client.clone();
        handles.push(tokio::spawn(async move { orders.assign_agent(order_id, None).await }));
    }

    let mut winners = Vec::new();
    for handle in handles {
        match handle.await.unwrap() {
            Ok(order) => winners.push(order),
            Err(OrderError::Conflict(_)) => {}
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }

    assert_eq!(winners.len(), 1);
    let stored = system.order_client.get_order(order.id).await.unwrap();
    assert_eq!(stored.assigned_agent, winners[0].assigned_agent);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_listing_by_user_and_status() {
    let system = seeded_system();
    let orders = &system.order_client;

    let first = orders.create_order(pizza_for(1)).await.unwrap();
    let second = orders.create_order(pizza_for(2)).await.unwrap();
    let third = orders.create_order(pizza_for(1)).await.unwrap();
    orders
        .update_order_status(third.id, OrderStatus::Confirmed)
        .await
        .unwrap();

    let ids: Vec<_> = orders
        .list_user_orders(UserId(1))
        .await
        .unwrap()
        .into_iter()
        .map(|o| o.id)
        .collect();
    assert_eq!(ids, vec![first.id, third.id]);

    let placed: Vec<_> = orders
        .list_orders_by_status(OrderStatus::Placed)
        .await
        .unwrap()
        .into_iter()
        .map(|o| o.id)
        .collect();
    assert_eq!(placed, vec![first.id, second.id]);

    assert!(orders.list_user_orders(UserId(3)).await.unwrap().is_empty());
    assert!(orders
        .list_orders_by_status(OrderStatus::Delivered)
        .await
        .unwrap()
        .is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_invalid_orders_are_rejected() {
    let system = seeded_system();
    let orders = &system.order_client;

    let err = orders
        .create_order(OrderCreate {
            user_id: Some(UserId(1)),
            items: vec![],
        })
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::Validation(_)));

    let err = orders
        .create_order(OrderCreate {
            user_id: None,
            items: vec![OrderItem::new("pizza", 1)],
        })
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::Validation(_)));

    assert!(orders.list_orders_by_status(OrderStatus::Placed).await.unwrap().is_empty());
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_agent_directory_queries() {
    let system = seeded_system();
    let asha = add_agent(&system, "Asha", 4.8).await;
    add_agent(&system, "Ben", 3.9).await;
    let agents = &system.agent_client;

    let top: Vec<_> = agents
        .find_by_min_rating(4.0)
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.name)
        .collect();
    assert_eq!(top, vec!["Asha"]);

    let updated = agents
        .update_agent(
            asha,
            AgentUpdate {
                name: None,
                rating: Some(3.5),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.rating, 3.5);
    assert!(agents.find_by_min_rating(4.0).await.unwrap().is_empty());
    assert_eq!(agents.list_all().await.unwrap().len(), 2);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_restaurant_catalog() {
    let system = seeded_system();
    let catalog = &system.restaurant_client;

    let roma = catalog
        .create_restaurant(RestaurantCreate {
            name: "Trattoria Roma".into(),
            cuisine: "Italian".into(),
            address: "12 Market Street".into(),
        })
        .await
        .unwrap();
    catalog
        .create_restaurant(RestaurantCreate {
            name: "Baan Thai".into(),
            cuisine: "Thai".into(),
            address: "3 River Road".into(),
        })
        .await
        .unwrap();

    let item = catalog
        .add_menu_item(
            roma,
            MenuItemCreate {
                name: "Margherita".into(),
                price: 9.5,
            },
        )
        .await
        .unwrap();
    assert!(item.available);
    assert_eq!(catalog.get_menu(roma).await.unwrap(), vec![item]);

    let italian = catalog.list_by_cuisine("italian").await.unwrap();
    assert_eq!(italian.len(), 1);
    assert_eq!(italian[0].id, roma);
    assert_eq!(catalog.list_all().await.unwrap().len(), 2);

    let renamed = catalog
        .update_restaurant(
            roma,
            RestaurantUpdate {
                name: Some("Roma".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.name, "Roma");
    assert_eq!(renamed.menu.len(), 1);

    let missing = delivery_service::model::RestaurantId(77);
    assert_eq!(
        catalog.get_restaurant(missing).await.unwrap_err(),
        RestaurantError::NotFound("restaurant_77".into())
    );
    assert!(matches!(
        catalog
            .add_menu_item(
                roma,
                MenuItemCreate {
                    name: "Free lunch".into(),
                    price: 0.0,
                },
            )
            .await,
        Err(RestaurantError::Validation(_))
    ));

    system.shutdown().await.unwrap();
}
