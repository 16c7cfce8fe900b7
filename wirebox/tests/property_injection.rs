use std::sync::Arc;

use wirebox::{Container, DiError, Injectable, InjectionRecord, Singleton};

#[derive(Debug, Default, Injectable, Singleton)]
#[singleton("Database")]
struct Database;

#[derive(Debug, Default, Injectable, Singleton)]
#[singleton("Cache")]
struct Cache;

#[derive(Debug, Default, Injectable)]
struct Consumer {
    #[inject("Database")]
    database: Option<Arc<Database>>,
    #[inject("Cache")]
    cache: Option<Arc<Cache>>,
    uninvolved: u32,
}

fn registered_container() -> Container {
    let mut container = Container::new();
    container.register_singleton::<Database>();
    container.register_singleton::<Cache>();
    container
}

#[test]
fn records_follow_declaration_order() {
    assert_eq!(
        Consumer::injections(),
        &[
            InjectionRecord {
                property: "database",
                dependency_id: "Database",
            },
            InjectionRecord {
                property: "cache",
                dependency_id: "Cache",
            },
        ]
    );
}

#[test]
fn construct_populates_every_declared_property() {
    let mut container = registered_container();
    let consumer = container.construct::<Consumer>().unwrap();
    assert!(consumer.database.is_some());
    assert!(consumer.cache.is_some());
    assert_eq!(consumer.uninvolved, 0);
}

#[test]
fn consumers_share_the_same_singleton() {
    let mut container = registered_container();
    let first = container.construct::<Consumer>().unwrap();
    let second = container.construct::<Consumer>().unwrap();

    let a = first.database.as_ref().unwrap();
    let b = second.database.as_ref().unwrap();
    assert!(Arc::ptr_eq(a, b));
}

#[test]
fn missing_dependency_aborts_construction() {
    let mut container = Container::new();
    container.register_singleton::<Database>();
    // "Cache" is never registered.
    let err = container.construct::<Consumer>().unwrap_err();
    assert!(matches!(err, DiError::Lookup(id) if id == "Cache"));
}

#[test]
fn wrong_typed_dependency_is_a_resolution_error() {
    let mut container = registered_container();
    container.register_instance("Database", "definitely not a database".to_string());

    let err = container.construct::<Consumer>().unwrap_err();
    match err {
        DiError::Resolution { id, property, .. } => {
            assert_eq!(id, "Database");
            assert_eq!(property, "database");
        }
        other => panic!("expected a resolution error, got {other}"),
    }
}

#[test]
fn re_resolution_reassigns_the_same_singletons() {
    let mut container = registered_container();
    let mut consumer = container.construct::<Consumer>().unwrap();
    let before = Arc::clone(consumer.database.as_ref().unwrap());

    container.resolve_properties(&mut consumer).unwrap();
    assert!(Arc::ptr_eq(&before, consumer.database.as_ref().unwrap()));
}
