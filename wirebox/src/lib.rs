//! Minimal singleton container with declarative property injection.
//!
//! A [`Container`] holds a table of lazily invoked singleton factories and a
//! cache of the instances they produce. Types opt into injection by
//! implementing [`Injectable`] (usually through `#[derive(Injectable)]`), and
//! [`Container::construct`] builds them in two phases: the type's own
//! initializer first, then every declared [`InjectionRecord`] resolved
//! against the container before the value is handed back.

pub mod di;
mod error;
pub mod injector;

pub use di::Token;
pub use error::DiError;
pub use injector::{
    Container, FactoryFn, Injectable, InjectionRecord, SINGLETON_REGISTRATIONS, Shared, Singleton,
};

// Re-export dependencies used in macro-generated code
// This allows users to only depend on `wirebox` without needing to add these explicitly
pub use linkme;

// Re-export macros
pub use wirebox_macros::*;
