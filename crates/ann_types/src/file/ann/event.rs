//! Event records.
//!
//! ```text
//! Offset  Size  Field
//! ------  ----  ---------------------------------------------
//! +0x00   32    name (code page, NUL padded)
//! +0x20   2     frames_count
//! +0x22   6     reserved
//! +0x28   4     loop_after_frame
//! +0x2C   10    reserved
//! +0x36   1     transparency
//! +0x37   12    reserved
//! +0x43   2*n   image index of each frame
//! ...           n frame records
//! ```

use serde::{Deserialize, Serialize};

use crate::file::{
	AnnError,
	codepage::{cp1250, until_nul},
	cursor::{ByteReader, ByteSink},
};

use super::{LoopPointPolicy, constants, frame::Frame};

/// A named, looping sequence of frames.
///
/// `frames_image_mapping[i]` is the image shown by `frames[i]`; both lists
/// hold exactly `frames_count` entries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Event {
	/// Event name, at most 32 code page bytes on disk
	pub name: String,
	/// Number of frames
	pub frames_count: u16,
	/// Frame index playback jumps back to
	pub loop_after_frame: u32,
	/// Transparency (0-255)
	pub transparency: u8,
	/// Image index of each frame
	pub frames_image_mapping: Vec<u16>,
	/// Frame records
	pub frames: Vec<Frame>,
}

impl Event {
	/// Creates an empty event.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			..Self::default()
		}
	}

	/// Appends a frame showing `image_index`.
	pub fn push_frame(&mut self, image_index: u16, frame: Frame) -> Result<(), AnnError> {
		let count = u16::try_from(self.frames.len() + 1).map_err(|_| AnnError::FieldOverflow {
			field: "Event frame count",
			value: self.frames.len() + 1,
			bits: 16,
		})?;
		self.frames_image_mapping.push(image_index);
		self.frames.push(frame);
		self.frames_count = count;
		Ok(())
	}

	/// Iterates over `(image_index, frame)` pairs.
	pub fn iter_frames(&self) -> impl Iterator<Item = (u16, &Frame)> {
		self.frames_image_mapping.iter().copied().zip(self.frames.iter())
	}

	/// Checks that the mapping table and frame list agree with `frames_count`.
	pub fn check_layout(&self, index: usize) -> Result<(), AnnError> {
		let declared = self.frames_count as usize;
		if self.frames_image_mapping.len() != declared {
			return Err(AnnError::event_layout(
				index,
				&self.name,
				format!(
					"declares {declared} frames but maps {}",
					self.frames_image_mapping.len()
				),
			));
		}
		if self.frames.len() != declared {
			return Err(AnnError::event_layout(
				index,
				&self.name,
				format!("declares {declared} frames but holds {}", self.frames.len()),
			));
		}
		Ok(())
	}

	/// Loop point as written under `policy`.
	pub fn stored_loop_point(&self, index: usize, policy: LoopPointPolicy) -> Result<u32, AnnError> {
		match policy {
			LoopPointPolicy::Preserve => Ok(self.loop_after_frame),
			LoopPointPolicy::Wrap => {
				if self.frames_count == 0 {
					return Err(AnnError::event_layout(
						index,
						&self.name,
						"cannot wrap the loop point of an event without frames",
					));
				}
				let wrapped = self.loop_after_frame % u32::from(self.frames_count);
				if wrapped != self.loop_after_frame {
					log::warn!(
						"Event {index} ({:?}): loop point {} wrapped to {wrapped}",
						self.name,
						self.loop_after_frame
					);
				}
				Ok(wrapped)
			}
		}
	}

	/// Reads one event record with its mapping table and frames.
	pub fn read(reader: &mut ByteReader<'_>) -> Result<Self, AnnError> {
		let name = cp1250().decode_until_nul(reader.read(constants::EVENT_NAME_SIZE)?);
		let frames_count = reader.get_u16()?;
		reader.skip(constants::EVENT_RESERVED_1)?;
		let loop_after_frame = reader.get_u32()?;
		reader.skip(constants::EVENT_RESERVED_2)?;
		let transparency = reader.get_u8()?;
		reader.skip(constants::EVENT_RESERVED_3)?;

		let frames_image_mapping =
			(0..frames_count).map(|_| reader.get_u16()).collect::<Result<Vec<_>, _>>()?;

		let mut frames = Vec::with_capacity(frames_count as usize);
		for i in 0..frames_count {
			log::trace!("Reading frame {i} of event {name:?} at offset {}", reader.position());
			frames.push(Frame::read(reader)?);
		}

		Ok(Self {
			name,
			frames_count,
			loop_after_frame,
			transparency,
			frames_image_mapping,
			frames,
		})
	}

	/// Writes one event record. `index` is only used in error messages.
	pub fn write(
		&self,
		index: usize,
		sink: &mut ByteSink,
		loop_policy: LoopPointPolicy,
	) -> Result<(), AnnError> {
		self.check_layout(index)?;
		let loop_after_frame = self.stored_loop_point(index, loop_policy)?;

		let mut name = [0u8; constants::EVENT_NAME_SIZE];
		cp1250().encode_into(until_nul(&self.name), &mut name);
		sink.write(&name);

		sink.set_u16(self.frames_count);
		sink.skip(constants::EVENT_RESERVED_1);
		sink.set_u32(loop_after_frame);
		sink.skip(constants::EVENT_RESERVED_2);
		sink.set_u8(self.transparency);
		sink.skip(constants::EVENT_RESERVED_3);

		for &image in &self.frames_image_mapping {
			sink.set_u16(image);
		}
		for frame in &self.frames {
			frame.write(sink)?;
		}

		Ok(())
	}
}
