use std::any::Any;
use std::sync::Arc;

use crate::error::DiError;

/// A shared, type-erased singleton instance.
pub type Shared = Arc<dyn Any + Send + Sync>;

/// Declarative binding of a property to the identifier it is resolved from.
///
/// Records are attached to the type itself (a `&'static` slice produced by
/// `#[derive(Injectable)]`), in field-declaration order, so the list is fixed
/// at definition time and shared by every construction of the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InjectionRecord {
    pub property: &'static str,
    pub dependency_id: &'static str,
}

/// A type whose construction goes through the two-phase builder:
/// its own initializer first, then every declared injection resolved and
/// assigned before the value escapes.
///
/// Usually implemented with `#[derive(Injectable)]`, where injected fields
/// are declared as `Option<Arc<T>>` and annotated `#[inject("Id")]`.
pub trait Injectable: Default + Send + Sync + 'static {
    /// Declared (property, dependency id) pairs, in declaration order.
    fn injections() -> &'static [InjectionRecord];

    /// Assigns a resolved dependency onto the named property.
    ///
    /// Returns [`DiError::Resolution`] when the value is not of the type the
    /// property holds.
    fn assign(&mut self, record: &InjectionRecord, dependency: Shared) -> Result<(), DiError>;
}

/// An [`Injectable`] type that is itself available for injection under a
/// fixed identifier, constructed lazily on first resolution.
///
/// Implemented with `#[derive(Singleton)]` plus `#[singleton("Id")]`, which
/// also contributes a registration hook picked up by
/// [`Container::with_registered`](crate::Container::with_registered).
pub trait Singleton: Injectable {
    const DEPENDENCY_ID: &'static str;
}
