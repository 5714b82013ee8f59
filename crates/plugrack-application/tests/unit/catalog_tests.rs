//! Implementation catalog and resolver tests

use crate::support::{
    BAR, FOO, FooSettings, Greeter, GreeterDefinition, GreeterKind, GreeterSettings, catalog,
    foo_definition,
};
use plugrack_application::{
    ContainerResolver, ImplementationCatalog, InstanceResolver, ProviderImplementation,
    ServiceContainer,
};
use plugrack_domain::error::{Error, Result};
use std::sync::Arc;

fn foo_defaults() -> GreeterSettings {
    GreeterSettings::Foo(FooSettings::default())
}

fn failing_factory(
    _: &ServiceContainer,
    _: GreeterDefinition,
) -> Result<Box<dyn Greeter>> {
    Err(Error::internal("boom"))
}

static SHOUTY_FOO: ProviderImplementation<GreeterKind> = ProviderImplementation {
    name: "FOO",
    description: "Same name, different case",
    config_contract: "FooSettings",
    default_settings: foo_defaults,
    factory: failing_factory,
};

static MISLABELED: ProviderImplementation<GreeterKind> = ProviderImplementation {
    name: "Mislabeled",
    description: "Declares a contract its settings do not report",
    config_contract: "BarSettings",
    default_settings: foo_defaults,
    factory: failing_factory,
};

#[test]
fn test_catalog_orders_by_name() {
    let catalog = catalog(&[&FOO, &BAR]);

    assert_eq!(catalog.len(), 2);
    assert_eq!(
        catalog.names(),
        vec![
            ("Bar", "Says bar, repeatedly"),
            ("Foo", "Says the configured greeting")
        ]
    );
}

#[test]
fn test_catalog_find_ignores_case() {
    let catalog = catalog(&[&FOO, &BAR]);

    assert_eq!(catalog.find("foo").map(|entry| entry.name), Some("Foo"));
    assert_eq!(catalog.find("BAR").map(|entry| entry.name), Some("Bar"));
    assert!(catalog.find("Baz").is_none());
}

#[test]
fn test_catalog_rejects_case_insensitive_duplicates() {
    let err = ImplementationCatalog::new([&FOO, &SHOUTY_FOO])
        .err()
        .expect("duplicate names");

    assert!(matches!(err, Error::Config { .. }));
    assert!(err.to_string().contains("Duplicate greeter implementation"));
}

#[test]
fn test_catalog_rejects_contract_mismatch() {
    let err = ImplementationCatalog::new([&MISLABELED])
        .err()
        .expect("contract mismatch");

    assert!(matches!(err, Error::Config { .. }));
    assert!(err.to_string().contains("Mislabeled"));
}

#[test]
fn test_empty_catalog() {
    let catalog = ImplementationCatalog::<GreeterKind>::new(std::iter::empty()).expect("empty is fine");
    assert!(catalog.is_empty());
}

#[test]
fn test_resolver_wraps_factory_errors() {
    let resolver = ContainerResolver::new(Arc::new(ServiceContainer::default()));
    let definition = foo_definition("Failing", "hi");

    let err = InstanceResolver::<GreeterKind>::resolve(&resolver, &SHOUTY_FOO, definition)
        .err()
        .expect("factory fails");

    match err {
        Error::Resolution {
            implementation,
            message,
        } => {
            assert_eq!(implementation, "FOO");
            assert!(message.contains("boom"));
        }
        other => panic!("expected resolution error, got {other:?}"),
    }
}
