//! Type-safe tokens for identifying singletons
//!
//! Singletons are keyed by plain string identifiers. A token binds such an
//! identifier to the Rust type registered under it, so resolving through a
//! token needs no turbofished downcast at the call site.

use std::marker::PhantomData;

/// A type-safe token naming a singleton in the container
///
/// The token carries both a string name and a phantom type parameter so the
/// container can hand back a correctly typed `Arc` when resolving through it.
///
/// # Examples
///
/// ```rust,ignore
/// use wirebox::Token;
///
/// pub const LOGGER: Token<Logger> = Token::new("Logger");
///
/// let logger = container.resolve_token(LOGGER)?;
/// ```
pub struct Token<T: ?Sized> {
    name: &'static str,
    _phantom: PhantomData<fn() -> T>,
}

impl<T: ?Sized> Token<T> {
    /// Creates a new token with the given name
    ///
    /// This is a const function, so tokens can be defined as constants.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _phantom: PhantomData,
        }
    }

    /// Returns the string name of this token
    pub fn name(&self) -> &'static str {
        self.name
    }
}

// Implement Clone, Copy, Debug, PartialEq, Eq manually since PhantomData is always these
impl<T: ?Sized> Clone for Token<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Token<T> {}

impl<T: ?Sized> std::fmt::Debug for Token<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token").field("name", &self.name).finish()
    }
}

impl<T: ?Sized> PartialEq for Token<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<T: ?Sized> Eq for Token<T> {}

impl<T: ?Sized> std::hash::Hash for Token<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
