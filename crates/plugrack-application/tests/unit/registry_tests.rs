//! Provider registry tests

use crate::support::{
    BAR, BROKEN, FOO, FooSettings, Greeter, GreeterSettings, RecordingEventBus, bar_definition,
    foo_definition, harness, harness_with,
};
use plugrack_application::{ReconciliationReport, RemovedDefinition};
use plugrack_domain::entities::{ProviderDefinition, UNSAVED_ID};
use plugrack_domain::error::Error;
use plugrack_domain::events::DomainEvent;
use plugrack_domain::ports::Provider;
use plugrack_domain::repositories::ProviderRepository;
use plugrack_providers::InMemoryProviderRepository;
use std::sync::Arc;

#[tokio::test]
async fn test_create_then_get_returns_definition() {
    let h = harness(&[&FOO, &BAR]);

    let created = h
        .registry
        .create(foo_definition("Greeter", "hi"))
        .await
        .expect("create");

    assert_ne!(created.id, UNSAVED_ID);
    assert_eq!(h.registry.get(created.id).await.expect("get"), created);
}

#[tokio::test]
async fn test_templates_are_unsaved_and_per_implementation() {
    let h = harness(&[&FOO, &BAR]);

    let templates = h.registry.templates();

    assert_eq!(templates.len(), 2);
    assert!(templates.iter().all(|t| t.id == UNSAVED_ID));
    assert!(templates.iter().all(|t| t.name.is_empty() && t.enable));

    let implementations: Vec<_> = templates.iter().map(|t| t.implementation.as_str()).collect();
    assert_eq!(implementations, vec!["Bar", "Foo"]);
    assert_eq!(templates[0].config_contract, "BarSettings");
    assert!(h.store.is_empty(), "templates never touch the store");
}

#[tokio::test]
async fn test_create_accepts_invalid_settings() {
    let h = harness(&[&FOO]);

    let created = h
        .registry
        .create(foo_definition("Silent", ""))
        .await
        .expect("invalid definitions are still stored");

    assert!(!created.validate().is_valid());
    assert_eq!(h.registry.all().await.expect("all"), vec![created]);
    assert!(h.registry.active().await.expect("active").is_empty());
    assert!(
        h.registry
            .available_providers()
            .await
            .expect("available")
            .is_empty()
    );
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let h = harness(&[&FOO]);
    let created = h
        .registry
        .create(foo_definition("Doomed", "bye"))
        .await
        .expect("create");

    h.registry.delete(created.id).await.expect("delete");

    let err = h.registry.get(created.id).await.expect_err("should be gone");
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_update_publishes_provider_updated() {
    let h = harness(&[&FOO]);
    let mut created = h
        .registry
        .create(foo_definition("Greeter", "hi"))
        .await
        .expect("create");

    created.settings = GreeterSettings::Foo(FooSettings {
        greeting: "hello again".to_string(),
    });
    h.registry.update(&created).await.expect("update");

    assert_eq!(h.registry.get(created.id).await.expect("get"), created);
    assert_eq!(
        h.events.events(),
        vec![DomainEvent::ProviderUpdated {
            kind: "greeter".to_string(),
            id: created.id,
        }]
    );
}

#[tokio::test]
async fn test_update_missing_id_fails_without_event() {
    let h = harness(&[&FOO]);

    let err = h
        .registry
        .update(&foo_definition("Ghost", "boo").with_id(99))
        .await
        .expect_err("should fail");

    assert!(err.is_not_found());
    assert!(h.events.events().is_empty());
}

#[tokio::test]
async fn test_update_survives_event_bus_failure() {
    let h = harness_with(
        &[&FOO],
        Arc::new(InMemoryProviderRepository::new()),
        Arc::new(RecordingEventBus::failing()),
    );
    let created = h
        .registry
        .create(foo_definition("Greeter", "hi"))
        .await
        .expect("create");

    h.registry
        .update(&created.clone().with_name("Renamed"))
        .await
        .expect("store write is what counts");

    assert_eq!(h.registry.get(created.id).await.expect("get").name, "Renamed");
}

#[tokio::test]
async fn test_active_filters_by_validity() {
    let h = harness(&[&FOO, &BAR]);
    let good = h
        .registry
        .create(foo_definition("Good", "hi"))
        .await
        .expect("create");
    h.registry
        .create(bar_definition("TooLoud", 50))
        .await
        .expect("create");
    let disabled = h
        .registry
        .create(bar_definition("Disabled", 2).with_enable(false))
        .await
        .expect("create");

    let active = h.registry.active().await.expect("active");

    assert_eq!(active, vec![good, disabled], "default policy ignores enable");
}

#[tokio::test]
async fn test_resolve_builds_fresh_instances() {
    let h = harness(&[&FOO]);
    let created = h
        .registry
        .create(foo_definition("Greeter", "hi"))
        .await
        .expect("create");

    let first = h
        .registry
        .resolve(created.clone())
        .expect("resolve")
        .expect("implementation registered");
    let second = h
        .registry
        .resolve(created.clone())
        .expect("resolve")
        .expect("implementation registered");

    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(first.definition(), &created);
    assert_eq!(second.definition(), &created);
    assert_eq!(first.greet(), "hi");
}

#[tokio::test]
async fn test_resolve_unknown_implementation_is_none() {
    let h = harness(&[&FOO]);

    let resolved = h
        .registry
        .resolve(bar_definition("Orphan", 1).with_id(1))
        .expect("miss is not an error");

    assert!(resolved.is_none());
}

#[tokio::test]
async fn test_resolve_failure_is_resolution_error() {
    let h = harness(&[&BROKEN]);
    let definition = foo_definition("Broken", "hi");
    let definition = ProviderDefinition {
        implementation: "Broken".to_string(),
        ..definition
    };

    let err = h
        .registry
        .resolve(definition)
        .err()
        .expect("construction should fail");

    match err {
        Error::Resolution { implementation, .. } => assert_eq!(implementation, "Broken"),
        other => panic!("expected resolution error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_resolve_rejects_settings_of_another_implementation() {
    let h = harness(&[&FOO, &BAR]);
    let mismatched = ProviderDefinition {
        implementation: "Foo".to_string(),
        ..bar_definition("Crossed", 2)
    };
    assert!(mismatched.validate().is_valid());

    let err = h
        .registry
        .resolve(mismatched.clone())
        .err()
        .expect("contract mismatch should fail");
    match err {
        Error::Resolution {
            implementation,
            message,
        } => {
            assert_eq!(implementation, "Foo");
            assert!(message.contains("BarSettings"));
        }
        other => panic!("expected resolution error, got {other:?}"),
    }

    h.registry.create(mismatched).await.expect("create");
    assert_eq!(h.registry.active().await.expect("active").len(), 1);
    assert!(h
        .registry
        .available_providers()
        .await
        .expect("available")
        .is_empty());
}

#[tokio::test]
async fn test_available_providers_skips_unresolvable() {
    let store = Arc::new(InMemoryProviderRepository::new());
    let h = harness_with(
        &[&FOO, &BROKEN],
        store.clone(),
        Arc::new(RecordingEventBus::default()),
    );

    h.registry
        .create(foo_definition("Working", "hi"))
        .await
        .expect("create");
    let broken = ProviderDefinition {
        implementation: "broken".to_string(),
        ..foo_definition("Broken", "hi")
    };
    h.registry.create(broken).await.expect("create");
    // Inserted behind the registry's back after reconciliation.
    store
        .insert(bar_definition("Late", 1))
        .await
        .expect("insert");

    let available = h.registry.available_providers().await.expect("available");

    assert_eq!(available.len(), 1);
    assert_eq!(available[0].name(), "Working");
    assert_eq!(h.registry.active().await.expect("active").len(), 3);
}

#[tokio::test]
async fn test_implementation_lookup_ignores_case() {
    let h = harness(&[&FOO]);
    let definition = ProviderDefinition {
        implementation: "fOO".to_string(),
        ..foo_definition("Shouty", "HI")
    };

    assert_eq!(
        h.registry.implementation_for(&definition).map(|i| i.name),
        Some("Foo")
    );
}

#[tokio::test]
async fn test_initialize_removes_only_orphans() {
    let store = Arc::new(InMemoryProviderRepository::new());
    let foo = store
        .insert(foo_definition("Foo", "hi"))
        .await
        .expect("insert");
    let baz = ProviderDefinition {
        implementation: "Baz".to_string(),
        ..foo_definition("Baz", "hi")
    };
    let baz = store.insert(baz).await.expect("insert");

    let h = harness_with(&[&FOO], store, Arc::new(RecordingEventBus::default()));

    let report = h.registry.initialize().await.expect("initialize");

    assert_eq!(
        report,
        ReconciliationReport {
            kind: "greeter".to_string(),
            implementations: 1,
            removed: vec![RemovedDefinition {
                id: baz.id,
                name: "Baz".to_string(),
                implementation: "Baz".to_string(),
            }],
        }
    );
    assert_eq!(h.registry.all().await.expect("all"), vec![foo]);
}

#[tokio::test]
async fn test_initialize_with_empty_store_is_noop() {
    let h = harness(&[&FOO, &BAR]);

    let report = h.registry.initialize().await.expect("initialize");

    assert!(report.removed.is_empty());
    assert_eq!(report.implementations, 2);
    assert!(h.store.is_empty());
}

#[tokio::test]
async fn test_store_errors_propagate() {
    let h = harness(&[&FOO]);

    let err = h
        .registry
        .create(foo_definition("Saved", "hi").with_id(5))
        .await
        .expect_err("store rejects saved definitions");

    assert!(matches!(err, Error::InvalidArgument { .. }));
}
