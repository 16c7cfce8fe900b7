use std::any::{self, Any};
use std::sync::Arc;

use linkme::distributed_slice;
use rustc_hash::FxHashMap;
use tracing::{debug, error, trace};

use crate::di::Token;
use crate::error::DiError;

use super::{Injectable, Shared, Singleton};

/// A lazily invoked singleton factory, keyed by identifier in the container's
/// constructor table.
pub type FactoryFn = fn(&mut Container) -> Result<Shared, DiError>;

/// Registration hooks contributed by `#[derive(Singleton)]`, collected into
/// every container created through [`Container::with_registered`].
#[distributed_slice]
pub static SINGLETON_REGISTRATIONS: [fn(&mut Container)];

/// Singleton registry with lazy instantiation and property injection.
///
/// All state lives in the container value itself; create one per process (or
/// per test) and pass it to the code that needs it.
pub struct Container {
    /// Factories that can be invoked to instantiate singletons.
    factories: FxHashMap<String, FactoryFn>,
    /// Already-constructed singletons, shared by all consumers.
    instances: FxHashMap<String, Shared>,
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Container {
    pub fn new() -> Self {
        Self {
            factories: FxHashMap::default(),
            instances: FxHashMap::default(),
        }
    }

    /// Creates a container pre-populated with every singleton registered
    /// through `#[derive(Singleton)]` in the current binary.
    ///
    /// Nothing is constructed here; factories run on first resolution.
    pub fn with_registered() -> Self {
        let mut container = Self::new();
        for register in SINGLETON_REGISTRATIONS.iter() {
            register(&mut container);
        }
        container
    }

    /// Manually registers an already-built singleton, overwriting any
    /// previous instance under the same identifier.
    pub fn register_instance<T: Send + Sync + 'static>(
        &mut self,
        id: impl Into<String>,
        instance: T,
    ) {
        self.register_shared(id, Arc::new(instance));
    }

    /// Registers an already-shared singleton, overwriting any previous
    /// instance under the same identifier.
    pub fn register_shared(&mut self, id: impl Into<String>, instance: Shared) {
        self.instances.insert(id.into(), instance);
    }

    /// Records a factory for the identifier. Last registration wins; nothing
    /// is constructed until the first resolution.
    pub fn register_factory(&mut self, id: impl Into<String>, factory: FactoryFn) {
        self.factories.insert(id.into(), factory);
    }

    /// Records `T`'s factory under `T::DEPENDENCY_ID`. Last registration
    /// wins, so re-registering a type is a no-op in effect.
    pub fn register_singleton<T: Singleton>(&mut self) {
        self.register_factory(T::DEPENDENCY_ID, construct_shared::<T>);
    }

    /// Registers an already-built singleton under a typed token.
    pub fn register_token<T: Send + Sync + 'static>(&mut self, token: Token<T>, instance: T) {
        self.register_instance(token.name(), instance);
    }

    /// Resolves the identifier to its singleton, instantiating it on first
    /// use and caching it thereafter.
    ///
    /// Fails with [`DiError::Lookup`] when the identifier has neither a
    /// cached instance nor a registered factory. A failure inside the factory
    /// is logged and propagated unchanged.
    pub fn resolve(&mut self, id: &str) -> Result<Shared, DiError> {
        if let Some(existing) = self.instances.get(id) {
            // The singleton has previously been instantiated.
            return Ok(Arc::clone(existing));
        }

        let Some(factory) = self.factories.get(id).copied() else {
            let err = DiError::Lookup(id.to_string());
            error!(id, "failed to instantiate singleton: {err}");
            return Err(err);
        };

        debug!(id, "instantiating singleton");
        let instance = match factory(self) {
            Ok(instance) => instance,
            Err(err) => {
                error!(id, "failed to instantiate singleton: {err}");
                return Err(err);
            }
        };

        self.instances.insert(id.to_string(), Arc::clone(&instance));
        Ok(instance)
    }

    /// Resolves the identifier and downcasts the singleton to `T`.
    pub fn resolve_as<T: Any + Send + Sync>(&mut self, id: &str) -> Result<Arc<T>, DiError> {
        self.resolve(id)?
            .downcast::<T>()
            .map_err(|_| DiError::Downcast {
                id: id.to_string(),
                expected: any::type_name::<T>(),
            })
    }

    /// Resolves through a typed token.
    pub fn resolve_token<T: Any + Send + Sync>(&mut self, token: Token<T>) -> Result<Arc<T>, DiError> {
        self.resolve_as(token.name())
    }

    /// Resolves every declared injection of `T` and assigns it onto the
    /// target, in declaration order.
    pub fn resolve_properties<T: Injectable>(&mut self, target: &mut T) -> Result<(), DiError> {
        for record in T::injections() {
            trace!(
                property = record.property,
                id = record.dependency_id,
                "resolving property"
            );
            let dependency = self.resolve(record.dependency_id)?;
            target.assign(record, dependency)?;
        }
        Ok(())
    }

    /// Builds a `T` in two phases: the type's own initializer, then every
    /// declared injection resolved against this container.
    ///
    /// On failure the partially built value is dropped, so no
    /// partially-injected value is ever observable.
    pub fn construct<T: Injectable>(&mut self) -> Result<T, DiError> {
        let mut target = T::default();
        self.resolve_properties(&mut target)?;
        Ok(target)
    }

    /// Whether the identifier can currently be resolved.
    pub fn contains(&self, id: &str) -> bool {
        self.instances.contains_key(id) || self.factories.contains_key(id)
    }

    /// Whether the identifier already has a cached instance.
    pub fn is_instantiated(&self, id: &str) -> bool {
        self.instances.contains_key(id)
    }

    /// Clears the instance cache. Factories survive, so singletons are
    /// rebuilt on next resolution; existing `Arc`s held by callers stay
    /// valid.
    pub fn reset(&mut self) {
        self.instances.clear();
    }
}

fn construct_shared<T: Injectable>(container: &mut Container) -> Result<Shared, DiError> {
    Ok(Arc::new(container.construct::<T>()?))
}
