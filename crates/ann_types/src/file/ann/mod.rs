//! `.ANN` sprite animation container support.
//!
//! An ANN file bundles a set of images with the events (named animations)
//! that play them. Every multi-byte value is little-endian and every text
//! field uses the Windows-1250 code page.
//!
//! # File Structure Overview
//!
//! ```text
//! +---------------------------+
//! | Header                    |  52 bytes + author + description
//! +---------------------------+
//! | Event 0                   |  67 bytes + 2 bytes per frame + frames
//! |   frame -> image table    |
//! |   Frame 0..n              |
//! | ...                       |
//! +---------------------------+
//! | Image descriptor 0..n     |  52 bytes each
//! +---------------------------+
//! | Image 0 color block       |  color_len bytes
//! | Image 0 alpha block       |  alpha_len bytes
//! | ...                       |
//! +---------------------------+
//! ```
//!
//! See [`header`], [`event`], [`frame`] and [`image`] for the record layouts.
//!
//! # Load/save asymmetry
//!
//! Saving with the default [`DumpPolicy`] does not write back exactly what was
//! loaded:
//! - the current signature is written regardless of the one that was read
//! - every image is stored uncompressed
//! - event loop points are wrapped into `0..frames_count`
//!
//! Use [`DumpPolicy::preserving`] to keep the loaded values.
//!
//! # Usage Examples
//!
//! ## Loading a container
//!
//! ```no_run
//! use ann_types::file::ann::Ann;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ann = Ann::open("KRABIK.ann")?;
//!
//! println!("{}", ann.header);
//! for event in &ann.events {
//!     println!("{}: {} frames, loops after {}", event.name, event.frames_count, event.loop_after_frame);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Plugging in plane codecs
//!
//! ```no_run
//! use ann_types::file::{
//!     AnnError,
//!     ann::{AnnCodec, DumpPolicy},
//!     compression::{CodecRegistry, PlaneCodec, PlaneCompression},
//! };
//!
//! struct Rle;
//!
//! impl PlaneCodec for Rle {
//!     fn encode(&self, raw: &[u8], _w: u32, _h: u32) -> Result<Vec<u8>, AnnError> {
//!         unimplemented!()
//!     }
//!     fn decode(&self, data: &[u8], _w: u32, _h: u32, _len: u32) -> Result<Vec<u8>, AnnError> {
//!         unimplemented!()
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let codec = AnnCodec::new()
//!     .with_codecs(CodecRegistry::new().with(PlaneCompression::Run, Rle))
//!     .with_dump_policy(DumpPolicy::preserving());
//!
//! let data = std::fs::read("KRABIK.ann")?;
//! let ann = codec.parse(&data)?;
//! std::fs::write("KRABIK_copy.ann", codec.dump(&ann)?)?;
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod dump_policy;
pub mod event;
pub mod file;
pub mod frame;
pub mod header;
pub mod image;
pub mod parse_config;


pub use self::dump_policy::{CompressionPolicy, DumpPolicy, LoopPointPolicy, MagicPolicy};
pub use self::event::Event;
pub use self::file::{Ann, AnnCodec};
pub use self::frame::Frame;
pub use self::header::Header;
pub use self::image::ImageDescriptor;
pub use self::parse_config::{MagicSet, ParseConfig};
