//! Unit tests for the pull-style container provider

use sri_domain::ports::ServiceContainer;
use sri_domain::{Error, PullExport, ServiceId, ServiceRegistry};
use sri_providers::{ContainerServiceProvider, StaticContainer};
use sri_registry::LazyRegistry;
use std::sync::Arc;

#[test]
fn test_static_container_lookup() {
    let container = StaticContainer::builder()
        .with("a", 1u32)
        .with("b", 2u32)
        .build();

    assert!(container.has(&ServiceId::new("a")));
    assert!(!container.has(&ServiceId::new("c")));

    let value = container.get(&ServiceId::new("b")).unwrap();
    let value = value.downcast::<u32>().ok().expect("value should be a u32");
    assert_eq!(*value, 2);

    assert!(matches!(
        container.get(&ServiceId::new("c")),
        Err(Error::UnknownIdentifier { .. })
    ));
}

#[test]
fn test_container_provider_import() {
    let provider = StaticContainer::builder()
        .with("a", 1u32)
        .with("b", 2u32)
        .build()
        .into_provider();

    let registry = LazyRegistry::new();
    registry.register_provider(&provider).unwrap();

    assert_eq!(*registry.get_as::<u32>(&ServiceId::new("a")).unwrap(), 1);
    assert_eq!(*registry.get_as::<u32>(&ServiceId::new("b")).unwrap(), 2);
}

#[test]
fn test_into_provider_declares_exactly_the_container_set() {
    let provider = StaticContainer::builder()
        .with("a", 1u32)
        .with("b", 2u32)
        .build()
        .into_provider();

    let mut ids = PullExport::identifiers(&provider);
    ids.sort();
    assert_eq!(ids, vec![ServiceId::new("a"), ServiceId::new("b")]);
}

#[test]
fn test_container_queries_are_repeatable() {
    let provider = StaticContainer::builder().with("a", 1u32).build().into_provider();

    // Listing and obtaining the container are idempotent queries
    assert_eq!(PullExport::identifiers(&provider), PullExport::identifiers(&provider));
    let c1 = provider.container();
    let c2 = provider.container();
    assert!(c1.has(&ServiceId::new("a")));
    assert!(c2.has(&ServiceId::new("a")));
}

#[test]
fn test_explicit_identifier_list_narrows_the_export() {
    // Exporting a subset of the container is a valid pull provider
    let container = Arc::new(
        StaticContainer::builder()
            .with("public", 1u32)
            .with("internal", 2u32)
            .build(),
    );
    let provider = ContainerServiceProvider::new(vec![ServiceId::new("public")], container);

    let registry = LazyRegistry::new();
    registry.register_provider(&provider).unwrap();

    assert!(registry.is_registered(&ServiceId::new("public")));
    assert!(!registry.is_registered(&ServiceId::new("internal")));
}
