//! Event bus tests

use futures::StreamExt;
use plugrack_domain::events::DomainEvent;
use plugrack_domain::ports::EventBusProvider;
use plugrack_providers::{NullEventBusProvider, TokioEventBusProvider};

fn updated(id: i32) -> DomainEvent {
    DomainEvent::ProviderUpdated {
        kind: "metadata".to_string(),
        id,
    }
}

#[tokio::test]
async fn test_tokio_bus_delivers_to_subscribers() {
    let bus = TokioEventBusProvider::new();
    assert!(!bus.has_subscribers());

    let mut first = bus.subscribe_events().await.expect("subscribe");
    let mut second = bus.subscribe_events().await.expect("subscribe");
    assert_eq!(bus.subscriber_count(), 2);

    bus.publish_event(updated(5)).await.expect("publish");

    assert_eq!(first.next().await, Some(updated(5)));
    assert_eq!(second.next().await, Some(updated(5)));
}

#[tokio::test]
async fn test_tokio_bus_publish_without_subscribers_is_ok() {
    let bus = TokioEventBusProvider::new();
    bus.publish_event(updated(1)).await.expect("publish");
}

#[tokio::test]
async fn test_tokio_bus_late_subscriber_misses_earlier_events() {
    let bus = TokioEventBusProvider::new();
    bus.publish_event(updated(1)).await.expect("publish");

    let mut stream = bus.subscribe_events().await.expect("subscribe");
    bus.publish_event(updated(2)).await.expect("publish");

    assert_eq!(stream.next().await, Some(updated(2)));
}

#[test]
fn test_tokio_bus_rejects_zero_capacity() {
    assert!(TokioEventBusProvider::try_with_capacity(0).is_err());
    let bus = TokioEventBusProvider::try_with_capacity(8).expect("capacity");
    assert_eq!(bus.capacity(), 8);
}

#[tokio::test]
async fn test_null_bus_drops_everything() {
    let bus = NullEventBusProvider::new();
    bus.publish_event(updated(1)).await.expect("publish");

    let mut stream = bus.subscribe_events().await.expect("subscribe");
    assert!(!bus.has_subscribers());
    assert_eq!(stream.next().await, None);
}
