//! Image descriptors.
//!
//! ```text
//! Offset  Size  Field
//! ------  ----  ---------------------------------------------
//! +0x00   2     width
//! +0x02   2     height
//! +0x04   2     position_x (i16)
//! +0x06   2     position_y (i16)
//! +0x08   2     compression_type
//! +0x0A   4     color_len (compressed color block size)
//! +0x0E   2     metadata size (at most 12)
//! +0x10   12    metadata bytes, zero padded
//! +0x1C   4     alpha_len (compressed alpha block size)
//! +0x20   20    name (code page, NUL padded)
//! ```

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::file::{
	AnnError,
	codepage::{cp1250, until_nul},
	compression::{PlaneGeometry, UNCOMPRESSED},
	cursor::{ByteReader, ByteSink},
};

use super::constants;

/// Per-image metadata preceding the payload section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDescriptor {
	/// Width in pixels
	pub width: u16,
	/// Height in pixels
	pub height: u16,
	/// Horizontal offset
	pub position_x: i16,
	/// Vertical offset
	pub position_y: i16,
	/// Compression-type code
	pub compression_type: u16,
	/// Size of the compressed color block
	pub color_len: u32,
	/// Opaque contents of the metadata slot
	pub metadata: Vec<u8>,
	/// Size of the compressed alpha block, 0 when the image has no alpha plane
	pub alpha_len: u32,
	/// Image name, at most 20 code page bytes on disk
	pub name: String,
}

impl Default for ImageDescriptor {
	fn default() -> Self {
		Self {
			width: 0,
			height: 0,
			position_x: 0,
			position_y: 0,
			compression_type: UNCOMPRESSED,
			color_len: 0,
			metadata: constants::DEFAULT_IMAGE_METADATA.to_vec(),
			alpha_len: 0,
			name: String::new(),
		}
	}
}

impl ImageDescriptor {
	/// Creates an uncompressed descriptor of the given size.
	pub fn new(name: impl Into<String>, width: u16, height: u16) -> Self {
		Self {
			name: name.into(),
			width,
			height,
			..Self::default()
		}
	}

	/// Plane layout of this image in a container with `bpp` bits per pixel.
	pub fn geometry(&self, bpp: u16) -> PlaneGeometry {
		PlaneGeometry::new(self.width, self.height, bpp)
	}

	/// Total payload size of this image.
	pub fn payload_len(&self) -> u64 {
		u64::from(self.color_len) + u64::from(self.alpha_len)
	}

	/// Reads one descriptor.
	pub fn read(reader: &mut ByteReader<'_>) -> Result<Self, AnnError> {
		let width = reader.get_u16()?;
		let height = reader.get_u16()?;
		let position_x = reader.get_i16()?;
		let position_y = reader.get_i16()?;
		let compression_type = reader.get_u16()?;
		let color_len = reader.get_u32()?;

		let metadata_len = reader.get_u16()? as usize;
		if metadata_len > constants::IMAGE_METADATA_SLOT {
			return Err(AnnError::InvalidMetadataSize {
				declared: metadata_len,
				capacity: constants::IMAGE_METADATA_SLOT,
			});
		}
		let metadata = reader.read(metadata_len)?.to_vec();
		reader.skip(constants::IMAGE_METADATA_SLOT - metadata_len)?;

		let alpha_len = reader.get_u32()?;
		let name = cp1250().decode_until_nul(reader.read(constants::IMAGE_NAME_SIZE)?);

		Ok(Self {
			width,
			height,
			position_x,
			position_y,
			compression_type,
			color_len,
			metadata,
			alpha_len,
			name,
		})
	}

	/// Writes one descriptor.
	pub fn write(&self, sink: &mut ByteSink) -> Result<(), AnnError> {
		let metadata_len = self.metadata.len();
		if metadata_len > constants::IMAGE_METADATA_SLOT {
			return Err(AnnError::InvalidMetadataSize {
				declared: metadata_len,
				capacity: constants::IMAGE_METADATA_SLOT,
			});
		}

		sink.set_u16(self.width);
		sink.set_u16(self.height);
		sink.set_i16(self.position_x);
		sink.set_i16(self.position_y);
		sink.set_u16(self.compression_type);
		sink.set_u32(self.color_len);

		sink.set_u16(metadata_len as u16);
		sink.write(&self.metadata);
		sink.skip(constants::IMAGE_METADATA_SLOT - metadata_len);

		sink.set_u32(self.alpha_len);

		let mut name = [0u8; constants::IMAGE_NAME_SIZE];
		cp1250().encode_into(until_nul(&self.name), &mut name);
		sink.write(&name);
		Ok(())
	}
}

impl Display for ImageDescriptor {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{:?} {}×{} at ({}, {}), compression {}, color {} bytes, alpha {} bytes",
			self.name,
			self.width,
			self.height,
			self.position_x,
			self.position_y,
			self.compression_type,
			self.color_len,
			self.alpha_len
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> ImageDescriptor {
		ImageDescriptor {
			position_x: -16,
			position_y: 4,
			color_len: 32,
			alpha_len: 16,
			..ImageDescriptor::new("hero_01", 4, 4)
		}
	}

	#[test]
	fn test_record_size() {
		let mut sink = ByteSink::new();
		sample().write(&mut sink).unwrap();
		assert_eq!(sink.len(), constants::IMAGE_DESCRIPTOR_SIZE);
		assert_eq!(constants::IMAGE_DESCRIPTOR_SIZE, 52);
	}

	#[test]
	fn test_read_back() {
		let descriptor = sample();
		let mut sink = ByteSink::new();
		descriptor.write(&mut sink).unwrap();
		let bytes = sink.into_bytes();

		let mut reader = ByteReader::new(&bytes);
		assert_eq!(ImageDescriptor::read(&mut reader).unwrap(), descriptor);
		assert_eq!(reader.remaining(), 0);
	}

	#[test]
	fn test_metadata_slot_is_self_describing() {
		let mut bytes = Vec::new();
		bytes.extend_from_slice(&1u16.to_le_bytes());
		bytes.extend_from_slice(&1u16.to_le_bytes());
		bytes.extend_from_slice(&0i16.to_le_bytes());
		bytes.extend_from_slice(&0i16.to_le_bytes());
		bytes.extend_from_slice(&2u16.to_le_bytes());
		bytes.extend_from_slice(&9u32.to_le_bytes());
		bytes.extend_from_slice(&3u16.to_le_bytes());
		bytes.extend_from_slice(&[0xAA, 0xBB, 0xCC]);
		bytes.extend_from_slice(&[0xEE; 9]);
		bytes.extend_from_slice(&5u32.to_le_bytes());
		bytes.extend_from_slice(b"dot\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0");

		let descriptor = ImageDescriptor::read(&mut ByteReader::new(&bytes)).unwrap();
		assert_eq!(descriptor.metadata, vec![0xAA, 0xBB, 0xCC]);
		assert_eq!(descriptor.compression_type, 2);
		assert_eq!(descriptor.color_len, 9);
		assert_eq!(descriptor.alpha_len, 5);
		assert_eq!(descriptor.name, "dot");
	}

	#[test]
	fn test_oversized_metadata() {
		let mut bytes = vec![0u8; constants::IMAGE_DESCRIPTOR_SIZE];
		bytes[0x0E..0x10].copy_from_slice(&13u16.to_le_bytes());
		let result = ImageDescriptor::read(&mut ByteReader::new(&bytes));
		assert!(matches!(
			result,
			Err(AnnError::InvalidMetadataSize {
				declared: 13,
				..
			})
		));

		let descriptor = ImageDescriptor {
			metadata: vec![0; 13],
			..sample()
		};
		assert!(descriptor.write(&mut ByteSink::new()).is_err());
	}

	#[test]
	fn test_name_fills_field_without_terminator() {
		let descriptor = ImageDescriptor::new("abcdefghijklmnopqrstuvwxyz", 1, 1);
		let mut sink = ByteSink::new();
		descriptor.write(&mut sink).unwrap();
		let bytes = sink.into_bytes();
		assert_eq!(&bytes[0x20..], b"abcdefghijklmnopqrst");

		let loaded = ImageDescriptor::read(&mut ByteReader::new(&bytes)).unwrap();
		assert_eq!(loaded.name, "abcdefghijklmnopqrst");
	}
}
