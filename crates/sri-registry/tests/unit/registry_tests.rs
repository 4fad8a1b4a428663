//! Unit tests for lazy registration and resolution

use sri_domain::{Error, ServiceId, ServiceRegistry, ServiceRegistryExt, ServiceValue};
use sri_registry::LazyRegistry;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn value_of(n: u32) -> ServiceValue {
    Arc::new(n)
}

#[test]
fn test_resolver_runs_exactly_once() {
    let registry = LazyRegistry::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    registry
        .register(
            ServiceId::new("counter"),
            Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(value_of(42))
            }),
        )
        .unwrap();

    let id = ServiceId::new("counter");
    let first = registry.get_as::<u32>(&id).unwrap();
    let second = registry.get_as::<u32>(&id).unwrap();
    let third = registry.get_as::<u32>(&id).unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(*first, 42);
    // Same shared instance every time, not an equal copy
    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&first, &third));
}

#[test]
fn test_registration_does_not_invoke_resolver() {
    let registry = LazyRegistry::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    registry
        .register(
            ServiceId::new("deferred"),
            Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(value_of(1))
            }),
        )
        .unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(registry.is_registered(&ServiceId::new("deferred")));
    assert!(!registry.is_resolved(&ServiceId::new("deferred")));
}

#[test]
fn test_duplicate_identifier_rejected_first_binding_intact() {
    let registry = LazyRegistry::new();
    registry.register_value("db", 1u32).unwrap();

    let result = registry.register_value("db", 2u32);
    match result {
        Err(Error::DuplicateIdentifier { id }) => assert_eq!(id.as_str(), "db"),
        other => panic!("Expected DuplicateIdentifier, got {:?}", other),
    }

    // The first binding still resolves
    let value = registry.get_as::<u32>(&ServiceId::new("db")).unwrap();
    assert_eq!(*value, 1);
}

#[test]
fn test_unknown_identifier() {
    let registry = LazyRegistry::new();
    match registry.get(&ServiceId::new("missing")) {
        Err(Error::UnknownIdentifier { id }) => assert_eq!(id.as_str(), "missing"),
        other => panic!("Expected UnknownIdentifier, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_failed_resolution_replayed_without_retry() {
    let registry = LazyRegistry::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    registry
        .register(
            ServiceId::new("broken"),
            Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(Error::resolution_failure("broken", "backend unavailable"))
            }),
        )
        .unwrap();

    let id = ServiceId::new("broken");
    let first = registry.get(&id).unwrap_err();
    let second = registry.get(&id).unwrap_err();
    let third = registry.get(&id).unwrap_err();

    // No silent recovery: one invocation, identical error every time
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(first, second);
    assert_eq!(second, third);
    assert_eq!(
        format!("{}", first),
        "Resolution of 'broken' failed: backend unavailable"
    );
}

#[test]
fn test_get_as_type_mismatch() {
    let registry = LazyRegistry::new();
    registry.register_value("answer", 42u32).unwrap();

    let id = ServiceId::new("answer");
    assert_eq!(*registry.get_as::<u32>(&id).unwrap(), 42);

    match registry.get_as::<String>(&id) {
        Err(Error::TypeMismatch { id, expected }) => {
            assert_eq!(id.as_str(), "answer");
            assert!(expected.contains("String"));
        }
        other => panic!("Expected TypeMismatch, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_introspection() {
    let registry = LazyRegistry::new();
    assert!(registry.is_empty());

    registry.register_value("a", 1u32).unwrap();
    registry.register_value("b", 2u32).unwrap();

    assert_eq!(registry.len(), 2);
    assert!(!registry.is_empty());

    let mut ids = registry.identifiers();
    ids.sort();
    assert_eq!(ids, vec![ServiceId::new("a"), ServiceId::new("b")]);
}

#[test]
fn test_resolver_may_consult_registry() {
    // A resolver resolving a different, already-bound entry must not
    // deadlock on the identifier map.
    let registry = Arc::new(LazyRegistry::new());
    registry.register_value("base", 20u32).unwrap();

    let inner = Arc::clone(&registry);
    registry
        .register_fn("derived", move || {
            let base = inner.get_as::<u32>(&ServiceId::new("base"))?;
            Ok(*base + 22)
        })
        .unwrap();

    let derived = registry.get_as::<u32>(&ServiceId::new("derived")).unwrap();
    assert_eq!(*derived, 42);
}
