//! Configuration: schema and loading.
//!
//! Settings come from an optional TOML file plus environment overrides, with
//! struct defaults underneath. The prompt captions live here so embedding
//! applications can localize them.

mod load;
mod schema;

pub use load::*;
pub use schema::*;

#[cfg(test)]
mod tests;
