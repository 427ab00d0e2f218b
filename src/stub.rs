//! Disc stub items: classification and directory scanning.
//!
//! A stub file is recognized by its extension (configurable, `.disc` by
//! default). The scanner collects the stubs under a directory so a host can
//! list them the way it lists any other media.

mod model;
mod scan;

pub use model::*;
pub use scan::*;

#[cfg(test)]
mod tests;
