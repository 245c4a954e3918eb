/// Integration tests for the order store on an in-memory SQLite database
use spacebuy::store::{NewOrder, OrderStore};

fn sample_order() -> NewOrder {
    NewOrder {
        user_id: None,
        product_name: "iPhone 15 Pro Max".to_string(),
        product_category: Some("Electronics".to_string()),
        destination_planet: "Mars".to_string(),
        base_price_usd: 1199.99,
        delivery_cost_usd: 54_321.99,
        total_price_inr: (1199.99 + 54_321.99) * 83.0,
        space_agency: Some("SpaceX Mars Division".to_string()),
        estimated_delivery: "487 days".to_string(),
        tracking_number: "COSMIC-12345678".to_string(),
        special_instructions: Some("Leave behind the third boulder.".to_string()),
    }
}

#[tokio::test]
async fn order_round_trip() {
    let store = OrderStore::connect("sqlite::memory:").await.unwrap();

    let order = store.create_order(&sample_order()).await.unwrap();
    assert!(order.order_id.starts_with("SB-"));
    assert_eq!(order.order_status, "Pending Launch");
    assert_eq!(order.product_name, "iPhone 15 Pro Max");
    assert_eq!(order.destination_planet, "Mars");
    assert_eq!(order.base_price_usd, 1199.99);
    assert_eq!(order.delivery_cost_usd, 54_321.99);
    assert_eq!(order.tracking_number.as_deref(), Some("COSMIC-12345678"));
    assert!(!order.created_at.is_empty());

    let recent = store.recent_orders(10).await.unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].order_id, order.order_id);
}

#[tokio::test]
async fn recent_orders_newest_first_and_limited() {
    let store = OrderStore::connect("sqlite::memory:").await.unwrap();

    for planet in ["Mars", "Venus", "Moon"] {
        let mut order = sample_order();
        order.destination_planet = planet.to_string();
        store.create_order(&order).await.unwrap();
    }

    let recent = store.recent_orders(2).await.unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].destination_planet, "Moon");
    assert_eq!(recent[1].destination_planet, "Venus");
}

#[tokio::test]
async fn planet_stats_aggregate_orders() {
    let store = OrderStore::connect("sqlite::memory:").await.unwrap();

    for _ in 0..2 {
        store.create_order(&sample_order()).await.unwrap();
    }
    let mut moon_order = sample_order();
    moon_order.destination_planet = "Moon".to_string();
    store.create_order(&moon_order).await.unwrap();

    let stats = store.planet_stats().await.unwrap();
    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].planet_name, "Mars");
    assert_eq!(stats[0].total_orders, 2);
    assert!(stats[0].total_revenue_inr > 0.0);
}

#[tokio::test]
async fn ensure_user_is_idempotent_by_email() {
    let store = OrderStore::connect("sqlite::memory:").await.unwrap();

    let first = store
        .ensure_user("Chandra", "chandra@example.com")
        .await
        .unwrap();
    let second = store
        .ensure_user("Chandra", "chandra@example.com")
        .await
        .unwrap();
    assert_eq!(first, second);

    let other = store.ensure_user("Ada", "ada@example.com").await.unwrap();
    assert_ne!(first, other);
}
