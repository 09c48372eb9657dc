//! `ann-rs` reads and writes `.ANN` sprite animation containers.
//!
//! This crate re-exports [`ann_types`]; see its documentation for the
//! container layout and codec configuration.
//!
//! ```no_run
//! use ann_rs::prelude::*;
//!
//! # fn main() -> Result<(), AnnError> {
//! let ann = Ann::open("KRABIK.ann")?;
//! ann.save("KRABIK_normalized.ann")?;
//! # Ok(())
//! # }
//! ```

pub use ann_types::*;

// Re-export the types crate for convenience
pub use ann_types;
