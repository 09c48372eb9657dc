//! Image compression dispatch.
//!
//! Each image descriptor carries a compression-type code that selects one
//! strategy for the color plane and one for the alpha plane:
//!
//! | Code | Color          | Alpha          |
//! |------|----------------|----------------|
//! | 0    | `NONE`         | `NONE`         |
//! | 2    | `DICT`         | `DICT`         |
//! | 3    | `DICT_IN_RUN`  | `DICT_IN_RUN`  |
//! | 4    | `RUN`          | `RUN`          |
//!
//! `NONE` is a verbatim copy and always available. The other strategies are
//! implemented outside this crate and plugged in through [`CodecRegistry::register`].

use std::{collections::HashMap, fmt::Display};

use serde::{Deserialize, Serialize};

use super::{AnnError, cursor::ByteReader};

/// Compression code that stores both planes verbatim.
pub const UNCOMPRESSED: u16 = 0;

/// Compression-type code table.
pub const COMPRESSION_TYPES: [(u16, PlaneCompression, PlaneCompression); 4] = [
	(0, PlaneCompression::None, PlaneCompression::None),
	(2, PlaneCompression::Dict, PlaneCompression::Dict),
	(3, PlaneCompression::DictInRun, PlaneCompression::DictInRun),
	(4, PlaneCompression::Run, PlaneCompression::Run),
];

/// Compression strategy for a single pixel plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaneCompression {
	/// Stored verbatim
	None,
	/// Dictionary (LZW-like) coding
	Dict,
	/// Dictionary coding nested inside run-length coding
	DictInRun,
	/// Run-length coding
	Run,
}

impl Display for PlaneCompression {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			PlaneCompression::None => write!(f, "NONE"),
			PlaneCompression::Dict => write!(f, "DICT"),
			PlaneCompression::DictInRun => write!(f, "DICT_IN_RUN"),
			PlaneCompression::Run => write!(f, "RUN"),
		}
	}
}

/// Resolves a compression-type code to its (color, alpha) strategy pair.
pub fn strategies(code: u16) -> Result<(PlaneCompression, PlaneCompression), AnnError> {
	COMPRESSION_TYPES
		.iter()
		.find(|(c, _, _)| *c == code)
		.map(|&(_, color, alpha)| (color, alpha))
		.ok_or(AnnError::UnsupportedCompressionType(code))
}

/// Pixel layout of one image plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaneGeometry {
	/// Width in pixels
	pub width: u16,
	/// Height in pixels
	pub height: u16,
	/// Bytes per color pixel
	pub bytes_per_pixel: usize,
}

impl PlaneGeometry {
	/// Creates a geometry for an image of the given size in a container with `bpp` bits per pixel.
	pub fn new(width: u16, height: u16, bpp: u16) -> Self {
		Self {
			width,
			height,
			bytes_per_pixel: (bpp as usize).div_ceil(8).max(1),
		}
	}

	/// Number of pixels.
	#[inline]
	pub fn pixel_count(&self) -> usize {
		self.width as usize * self.height as usize
	}

	/// Size of the decoded color plane.
	#[inline]
	pub fn color_len(&self) -> usize {
		self.pixel_count() * self.bytes_per_pixel
	}

	/// Size of the decoded alpha plane, one byte per pixel.
	#[inline]
	pub fn alpha_len(&self) -> usize {
		self.pixel_count()
	}

	/// Splits a raw `color ++ alpha` plane, or `None` when it is shorter than the color part.
	pub fn split<'a>(&self, raw: &'a [u8]) -> Option<(&'a [u8], &'a [u8])> {
		(raw.len() >= self.color_len()).then(|| raw.split_at(self.color_len()))
	}
}

/// External pixel-plane codec.
///
/// Implementations must round-trip exactly: `decode(encode(plane))` returns
/// `plane` for any plane of the declared dimensions.
pub trait PlaneCodec: Send + Sync {
	/// Compresses a raw plane.
	fn encode(&self, raw: &[u8], width: u32, height: u32) -> Result<Vec<u8>, AnnError>;

	/// Decompresses a block into a plane of `expected_len` bytes.
	fn decode(
		&self,
		compressed: &[u8],
		width: u32,
		height: u32,
		expected_len: u32,
	) -> Result<Vec<u8>, AnnError>;
}

/// The `NONE` strategy: copies bytes through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Verbatim;

impl PlaneCodec for Verbatim {
	fn encode(&self, raw: &[u8], _width: u32, _height: u32) -> Result<Vec<u8>, AnnError> {
		Ok(raw.to_vec())
	}

	fn decode(
		&self,
		compressed: &[u8],
		_width: u32,
		_height: u32,
		_expected_len: u32,
	) -> Result<Vec<u8>, AnnError> {
		Ok(compressed.to_vec())
	}
}

/// Compressed color and alpha blocks of one image.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncodedImage {
	/// Compressed color block
	pub color: Vec<u8>,
	/// Compressed alpha block, empty when the image has no alpha plane
	pub alpha: Vec<u8>,
}

impl EncodedImage {
	/// Length of the color block as stored in the descriptor.
	pub fn color_len(&self) -> Result<u32, AnnError> {
		block_len("Color block length", &self.color)
	}

	/// Length of the alpha block as stored in the descriptor.
	pub fn alpha_len(&self) -> Result<u32, AnnError> {
		block_len("Alpha block length", &self.alpha)
	}
}

fn block_len(field: &'static str, block: &[u8]) -> Result<u32, AnnError> {
	plane_len(field, block.len())
}

fn plane_len(field: &'static str, len: usize) -> Result<u32, AnnError> {
	u32::try_from(len).map_err(|_| AnnError::FieldOverflow {
		field,
		value: len,
		bits: 32,
	})
}

/// Plane codecs available to the container codec, keyed by strategy.
pub struct CodecRegistry {
	codecs: HashMap<PlaneCompression, Box<dyn PlaneCodec>>,
}

impl Default for CodecRegistry {
	fn default() -> Self {
		let mut codecs: HashMap<PlaneCompression, Box<dyn PlaneCodec>> = HashMap::new();
		codecs.insert(PlaneCompression::None, Box::new(Verbatim));
		Self {
			codecs,
		}
	}
}

impl std::fmt::Debug for CodecRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut strategies: Vec<_> = self.codecs.keys().map(ToString::to_string).collect();
		strategies.sort();
		f.debug_struct("CodecRegistry").field("strategies", &strategies).finish()
	}
}

impl CodecRegistry {
	/// Creates a registry that only knows the `NONE` strategy.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers `codec` for `strategy`, replacing any previous codec.
	pub fn register(&mut self, strategy: PlaneCompression, codec: impl PlaneCodec + 'static) {
		self.codecs.insert(strategy, Box::new(codec));
	}

	/// Builder-style variant of [`CodecRegistry::register`].
	pub fn with(mut self, strategy: PlaneCompression, codec: impl PlaneCodec + 'static) -> Self {
		self.register(strategy, codec);
		self
	}

	/// Returns `true` when a codec is registered for `strategy`.
	pub fn supports(&self, strategy: PlaneCompression) -> bool {
		self.codecs.contains_key(&strategy)
	}

	/// Codec registered for `strategy`.
	pub fn get(&self, strategy: PlaneCompression) -> Result<&dyn PlaneCodec, AnnError> {
		self.codecs.get(&strategy).map(|codec| &**codec).ok_or(AnnError::CodecUnavailable(strategy))
	}

	/// Reads a color block of `color_len` bytes followed by an alpha block of
	/// `alpha_len` bytes and returns the decoded `color ++ alpha` plane.
	pub fn decode(
		&self,
		code: u16,
		geometry: PlaneGeometry,
		reader: &mut ByteReader<'_>,
		color_len: u32,
		alpha_len: u32,
	) -> Result<Vec<u8>, AnnError> {
		let (color_strategy, alpha_strategy) = strategies(code)?;
		let (width, height) = (geometry.width as u32, geometry.height as u32);

		let expected_color = plane_len("Decoded color plane length", geometry.color_len())?;
		let expected_alpha = plane_len("Decoded alpha plane length", geometry.alpha_len())?;

		let color_block = reader.read(color_len as usize)?;
		let alpha_block = reader.read(alpha_len as usize)?;

		log::trace!(
			"Decoding {width}x{height} image: color {color_strategy} ({color_len} bytes), alpha {alpha_strategy} ({alpha_len} bytes)"
		);

		let mut plane = self.get(color_strategy)?.decode(
			color_block,
			width,
			height,
			expected_color,
		)?;
		if alpha_len > 0 {
			let alpha = self.get(alpha_strategy)?.decode(
				alpha_block,
				width,
				height,
				expected_alpha,
			)?;
			plane.extend_from_slice(&alpha);
		}

		Ok(plane)
	}

	/// Compresses the color and alpha parts of a raw plane with the strategies of `code`.
	pub fn encode(
		&self,
		code: u16,
		geometry: PlaneGeometry,
		color: &[u8],
		alpha: &[u8],
	) -> Result<EncodedImage, AnnError> {
		let (color_strategy, alpha_strategy) = strategies(code)?;
		let (width, height) = (geometry.width as u32, geometry.height as u32);

		let color = self.get(color_strategy)?.encode(color, width, height)?;
		let alpha = if alpha.is_empty() {
			Vec::new()
		} else {
			self.get(alpha_strategy)?.encode(alpha, width, height)?
		};

		Ok(EncodedImage {
			color,
			alpha,
		})
	}
}
