//! Configuration validation
//!
//! Validates schedule specifications for correctness before a scheduler is built.

mod validator;

#[cfg(test)]
mod proptests;

pub use validator::validate_spec;
