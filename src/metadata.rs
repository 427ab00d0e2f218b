//! Sidecar metadata for disc stubs.
//!
//! A stub file may carry a small XML document describing the disc it stands
//! in for:
//!
//! ```xml
//! <discstub>
//!     <title>The Movie</title>
//!     <message>Disc 2 of 2</message>
//! </discstub>
//! ```
//!
//! Both fields are optional. A missing, unreadable or malformed sidecar is
//! never an error for the caller: loading degrades to empty metadata and a
//! diagnostic log line.

mod load;
mod model;

pub use model::*;
