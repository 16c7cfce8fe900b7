mod inject_field;

pub use inject_field::{InjectField, collect_inject_fields, has_inject_attr};
