//! Prelude module for `ann_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```
//! use ann_types::prelude::*;
//!
//! let mut ann = Ann::new();
//! let mut event = AnnEvent::new("idle");
//! event.push_frame(0, AnnFrame::new(0, 0)).unwrap();
//! ann.add_event(event).unwrap();
//! assert_eq!(ann.header.events_count, 1);
//! ```

// File module types
#[doc(inline)]
pub use crate::file::{
	// Container types
	Ann,
	AnnCodec,
	AnnError,
	AnnEvent,
	AnnFrame,
	AnnHeader,
	AnnParseConfig,
	DumpPolicy,
	ImageDescriptor,
	MagicSet,

	// Compression types
	CodecRegistry,
	PlaneCodec,
	PlaneCompression,
	PlaneGeometry,

	// Text codec
	CodePage,
	cp1250,
};

// Identifier sources
#[doc(inline)]
pub use crate::ids::{IdSource, RandomIds, SequentialIds};

// Re-export the file module for advanced usage
#[doc(inline)]
pub use crate::file;
