//! `#[derive(Singleton)]` contributes a registration hook at definition time;
//! `Container::with_registered()` collects every hook in the binary.

use std::sync::Arc;

use wirebox::{Container, Injectable, Singleton};

#[derive(Default, Injectable, Singleton)]
#[singleton("Greeter")]
struct Greeter;

impl Greeter {
    fn greet(&self) -> &'static str {
        "hello"
    }
}

#[derive(Default, Injectable)]
struct NeedsGreeter {
    #[inject("Greeter")]
    greeter: Option<Arc<Greeter>>,
}

#[test]
fn derived_singletons_are_visible_without_a_call_site() {
    let mut container = Container::with_registered();
    assert!(container.contains("Greeter"));
    assert!(!container.is_instantiated("Greeter"));

    let greeter = container.resolve_as::<Greeter>("Greeter").unwrap();
    assert_eq!(greeter.greet(), "hello");
}

#[test]
fn derived_id_constant_matches_the_attribute() {
    assert_eq!(Greeter::DEPENDENCY_ID, "Greeter");
}

#[test]
fn injection_works_against_an_auto_registered_container() {
    let mut container = Container::with_registered();
    let consumer = container.construct::<NeedsGreeter>().unwrap();
    assert!(consumer.greeter.is_some());
}

#[test]
fn plain_containers_stay_empty() {
    let container = Container::new();
    assert!(!container.contains("Greeter"));
}
