//! Declarative schedule configuration
//!
//! A [`CyclicSpec`] describes a scheduler in YAML; [`load_spec`] reads and
//! validates one from disk.

mod loader;
mod schema;
mod validate;

pub use loader::{load_spec, parse_spec};
pub use schema::CyclicSpec;
pub use validate::validate_spec;
