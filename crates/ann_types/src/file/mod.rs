//! File type support for the `ann-rs` project.

mod error;

pub mod ann;
pub mod codepage;
pub mod compression;
pub mod cursor;
pub mod opacity;

// Re-export unified error type
pub use error::AnnError;

// Re-export main file types
pub use ann::{
	Ann, AnnCodec, DumpPolicy, Event as AnnEvent, Frame as AnnFrame, Header as AnnHeader,
	ImageDescriptor, MagicSet, ParseConfig as AnnParseConfig,
};
pub use codepage::{CodePage, cp1250};
pub use compression::{CodecRegistry, PlaneCodec, PlaneCompression, PlaneGeometry};
