//! This crate provides the data types and codec for `.ANN` sprite animation containers.
//!
//! # Modules
//!
//! - **`file::ann`**: the container model and its parse/dump pipeline
//! - **`file::cursor`**: little-endian byte reader and growable sink
//! - **`file::codepage`**: the Windows-1250 single-byte text codec
//! - **`file::compression`**: compression-type table and plane codec dispatch
//! - **`file::opacity`**: transparency byte / percentage conversions
//! - **`ids`**: identifier sources for editor-side objects
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use ann_types::prelude::*;
//!
//! # fn main() -> Result<(), AnnError> {
//! let ann = Ann::open("KRABIK.ann")?;
//! println!("{}", ann.header);
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```no_run
//! use ann_types::file::ann::{AnnCodec, ParseConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let codec = AnnCodec::new().with_parse_config(ParseConfig::strict());
//! let ann = codec.parse(&std::fs::read("KRABIK.ann")?)?;
//! # Ok(())
//! # }
//! ```

pub mod file;
pub mod ids;

/// `use ann_types::prelude::*;` to import commonly used items.
pub mod prelude;
