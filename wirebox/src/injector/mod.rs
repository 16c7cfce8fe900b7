mod container;
pub use self::container::{Container, FactoryFn, SINGLETON_REGISTRATIONS};
mod injectable;
pub use self::injectable::{Injectable, InjectionRecord, Shared, Singleton};
