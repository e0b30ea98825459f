pub mod error;
pub mod generate;
pub mod registry;
pub use error::UnknownTableError;
pub use generate::{render, values, write_table};
pub use registry::{Registry, TableDef, DEFAULT_TABLE};
