//! Frame records.
//!
//! ```text
//! Offset  Size  Field
//! ------  ----  ---------------------------------------------
//! +0x00   4     tag (written as 00 A4 CE 57)
//! +0x04   4     reserved
//! +0x08   2     position_x (i16)
//! +0x0A   2     position_y (i16)
//! +0x0C   4     reserved (written as FF FF FF FF)
//! +0x10   4     has_sounds
//! +0x14   4     reserved
//! +0x18   1     transparency
//! +0x19   5     reserved
//! +0x1E   4+n   name (byte length, NUL terminated bytes)
//! ...     4+n   sounds, only when has_sounds != 0
//! ```

use serde::{Deserialize, Serialize};

use crate::file::{
	AnnError,
	codepage::{cp1250, until_nul},
	cursor::{ByteReader, ByteSink},
};

use super::constants;

/// One positioned step of an event.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Frame {
	/// Horizontal offset
	pub position_x: i16,
	/// Vertical offset
	pub position_y: i16,
	/// Non-zero when the frame carries a sound list
	pub has_sounds: u32,
	/// Transparency (0-255)
	pub transparency: u8,
	/// Frame name
	pub name: String,
	/// Sound identifiers, only stored when `has_sounds` is non-zero
	pub sounds: Vec<String>,
}

impl Frame {
	/// Creates an unnamed frame at the given position.
	pub fn new(position_x: i16, position_y: i16) -> Self {
		Self {
			position_x,
			position_y,
			..Self::default()
		}
	}

	/// Replaces the sound list and updates the has-sounds flag to match.
	pub fn set_sounds<I, S>(&mut self, sounds: I)
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.sounds = sounds.into_iter().map(Into::into).collect();
		self.has_sounds = u32::from(!self.sounds.is_empty());
	}

	/// Returns `true` when the sound list is stored.
	#[inline]
	pub fn has_sounds(&self) -> bool {
		self.has_sounds != 0
	}

	/// Reads one frame record.
	pub fn read(reader: &mut ByteReader<'_>) -> Result<Self, AnnError> {
		reader.skip(constants::FRAME_TAG.len())?;
		reader.skip(constants::FRAME_RESERVED_1)?;
		let position_x = reader.get_i16()?;
		let position_y = reader.get_i16()?;
		reader.skip(constants::FRAME_FILLER_SIZE)?;
		let has_sounds = reader.get_u32()?;
		reader.skip(constants::FRAME_RESERVED_2)?;
		let transparency = reader.get_u8()?;
		reader.skip(constants::FRAME_RESERVED_3)?;

		let name = cp1250().decode_until_nul(reader.read_prefixed()?);

		let sounds = if has_sounds != 0 {
			parse_sound_list(&cp1250().decode_until_nul(reader.read_prefixed()?))
		} else {
			Vec::new()
		};

		Ok(Self {
			position_x,
			position_y,
			has_sounds,
			transparency,
			name,
			sounds,
		})
	}

	/// Writes one frame record.
	pub fn write(&self, sink: &mut ByteSink) -> Result<(), AnnError> {
		sink.write(&constants::FRAME_TAG);
		sink.skip(constants::FRAME_RESERVED_1);
		sink.set_i16(self.position_x);
		sink.set_i16(self.position_y);
		sink.set_u32(constants::FRAME_FILLER);
		sink.set_u32(self.has_sounds);
		sink.skip(constants::FRAME_RESERVED_2);
		sink.set_u8(self.transparency);
		sink.skip(constants::FRAME_RESERVED_3);

		sink.write_prefixed("Frame name length", &nul_terminated(&self.name))?;

		if self.has_sounds() {
			let joined = self
				.sounds
				.iter()
				.map(|sound| sound.trim())
				.collect::<Vec<_>>()
				.join(constants::SOUND_SEPARATOR);
			sink.write_prefixed("Sound list length", &nul_terminated(&joined))?;
		}

		Ok(())
	}
}

/// Splits a stored sound list, dropping blank entries.
pub fn parse_sound_list(text: &str) -> Vec<String> {
	text.split(constants::SOUND_SEPARATOR)
		.filter(|sound| !sound.trim().is_empty())
		.map(ToString::to_string)
		.collect()
}

fn nul_terminated(text: &str) -> Vec<u8> {
	let mut bytes = cp1250().encode(until_nul(text));
	bytes.push(0);
	bytes
}
