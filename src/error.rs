use thiserror::Error;

/// The requested table is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown table: {name}")]
pub struct UnknownTableError {
    pub name: String,
}

impl UnknownTableError {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
