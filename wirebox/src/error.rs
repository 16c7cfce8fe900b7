/// Container errors
#[derive(Debug, thiserror::Error)]
pub enum DiError {
    /// The identifier has neither a cached instance nor a registered factory.
    #[error("no constructor found for singleton '{0}'")]
    Lookup(String),

    /// A dependency resolved to a value the target property cannot hold.
    #[error("singleton '{id}' cannot be injected into '{target}.{property}'")]
    Resolution {
        id: String,
        target: &'static str,
        property: &'static str,
    },

    /// A typed resolution found an instance of a different type.
    #[error("singleton '{id}' is not of type '{expected}'")]
    Downcast {
        id: String,
        expected: &'static str,
    },
}
