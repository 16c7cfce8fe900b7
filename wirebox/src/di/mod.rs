//! Type-safe identifiers for well-known singletons.

pub mod token;

pub use token::Token;
