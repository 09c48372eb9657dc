//! Container header.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::file::{
	AnnError,
	codepage::cp1250,
	cursor::{ByteReader, ByteSink},
};

use super::{MagicSet, constants};

/// Header of an `.ANN` container.
///
/// ```text
/// Offset  Size  Field
/// ------  ----  ---------------------------------------------
/// 0x00    4     magic ("NVP\0")
/// 0x04    2     frames_count (number of images)
/// 0x06    2     bpp
/// 0x08    2     events_count
/// 0x0A    13    reserved
/// 0x17    4     fps
/// 0x1B    4     flags
/// 0x1F    1     transparency
/// 0x20    2     random_frames
/// 0x22    10    reserved
/// 0x2C    4+n   author (byte length, code page bytes)
/// ...     4+n   description (byte length, code page bytes)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
	/// Signature the container was loaded with
	pub magic: u32,
	/// Number of images
	pub frames_count: u16,
	/// Bits per color pixel
	pub bpp: u16,
	/// Number of events
	pub events_count: u16,
	/// Playback rate
	pub fps: u32,
	/// Flag bitmask
	pub flags: u32,
	/// Global transparency (0-255)
	pub transparency: u8,
	/// Random frame count, meaning unknown
	pub random_frames: u16,
	/// Author
	pub author: String,
	/// Description
	pub description: String,
}

impl Default for Header {
	fn default() -> Self {
		Self {
			magic: constants::MAGIC,
			frames_count: 0,
			bpp: constants::DEFAULT_BPP,
			events_count: 0,
			fps: 0,
			flags: 0,
			transparency: 0,
			random_frames: 0,
			author: String::new(),
			description: String::new(),
		}
	}
}

impl Header {
	/// Reads the header, rejecting signatures outside `accepted`.
	pub fn read(reader: &mut ByteReader<'_>, accepted: &MagicSet) -> Result<Self, AnnError> {
		let magic = reader.get_u32()?;
		if !accepted.contains(magic) {
			return Err(AnnError::InvalidMagic {
				actual: magic,
			});
		}

		let frames_count = reader.get_u16()?;
		let bpp = reader.get_u16()?;
		let events_count = reader.get_u16()?;
		reader.skip(constants::HEADER_RESERVED_1)?;
		let fps = reader.get_u32()?;
		let flags = reader.get_u32()?;
		let transparency = reader.get_u8()?;
		let random_frames = reader.get_u16()?;
		reader.skip(constants::HEADER_RESERVED_2)?;

		let author = cp1250().decode(reader.read_prefixed()?);
		let description = cp1250().decode(reader.read_prefixed()?);

		Ok(Self {
			magic,
			frames_count,
			bpp,
			events_count,
			fps,
			flags,
			transparency,
			random_frames,
			author,
			description,
		})
	}

	/// Writes the header with the given signature.
	pub fn write(&self, sink: &mut ByteSink, magic: u32) -> Result<(), AnnError> {
		sink.set_u32(magic);
		sink.set_u16(self.frames_count);
		sink.set_u16(self.bpp);
		sink.set_u16(self.events_count);
		sink.skip(constants::HEADER_RESERVED_1);
		sink.set_u32(self.fps);
		sink.set_u32(self.flags);
		sink.set_u8(self.transparency);
		sink.set_u16(self.random_frames);
		sink.skip(constants::HEADER_RESERVED_2);

		sink.write_prefixed("Author length", &cp1250().encode(&self.author))?;
		sink.write_prefixed("Description length", &cp1250().encode(&self.description))?;
		Ok(())
	}
}

impl Display for Header {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			".ANN File Header:\n\
			- Magic: 0x{:08X}\n\
			- Images: {}\n\
			- Bits per pixel: {}\n\
			- Events: {}\n\
			- FPS: {}\n\
			- Flags: 0x{:08X}\n\
			- Transparency: {}\n\
			- Random frames: {}\n\
			- Author: {}\n\
			- Description: {}",
			self.magic,
			self.frames_count,
			self.bpp,
			self.events_count,
			self.fps,
			self.flags,
			self.transparency,
			self.random_frames,
			self.author,
			self.description,
		)
	}
}
