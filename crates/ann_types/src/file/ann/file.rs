//! ANN container model and the parse/dump pipeline.
//!
//! Parsing reads, in order: header, `events_count` events, `frames_count`
//! image descriptors, then one color block and one alpha block per image.
//! Dumping writes the same sections back and appends the payload blocks
//! produced by the compression dispatch. Both directions are all-or-nothing:
//! the first structural problem aborts the whole operation.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::file::{
	AnnError,
	compression::{CodecRegistry, EncodedImage, UNCOMPRESSED},
	cursor::{ByteReader, ByteSink},
};

use super::{
	CompressionPolicy, DumpPolicy, MagicPolicy, ParseConfig, constants, event::Event,
	header::Header, image::ImageDescriptor,
};

/// A complete `.ANN` container.
///
/// `images[i]` is the decoded `color ++ alpha` plane described by
/// `image_descriptors[i]`.
///
/// # Examples
///
/// ```
/// use ann_types::file::ann::{Ann, Event, Frame, ImageDescriptor};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut ann = Ann::new();
/// ann.header.author = "Anndrew".to_string();
///
/// // 2x1 image, 16 bpp color followed by an alpha byte per pixel
/// let image = ann.add_image(ImageDescriptor::new("dot", 2, 1), vec![1, 2, 3, 4, 0xFF, 0xFF])?;
///
/// let mut event = Event::new("idle");
/// event.push_frame(image, Frame::new(0, 0))?;
/// ann.add_event(event)?;
///
/// let bytes = ann.to_bytes()?;
/// let loaded = Ann::from_bytes(&bytes)?;
/// assert_eq!(loaded, ann);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Ann {
	/// Container header
	pub header: Header,
	/// Events in file order
	pub events: Vec<Event>,
	/// Image descriptors in file order
	pub image_descriptors: Vec<ImageDescriptor>,
	/// Decoded image planes, index-aligned with `image_descriptors`
	pub images: Vec<Vec<u8>>,
}

impl Ann {
	/// Creates an empty container.
	pub fn new() -> Self {
		Self::default()
	}

	/// Opens and parses a container with the default codec.
	pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, AnnError> {
		let data = std::fs::read(path)?;
		Self::from_bytes(&data)
	}

	/// Parses a container from any reader.
	pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, AnnError> {
		let mut data = Vec::new();
		reader.read_to_end(&mut data)?;
		Self::from_bytes(&data)
	}

	/// Parses a container with the default codec.
	pub fn from_bytes(data: &[u8]) -> Result<Self, AnnError> {
		AnnCodec::default().parse(data)
	}

	/// Serializes with the default codec.
	pub fn to_bytes(&self) -> Result<Vec<u8>, AnnError> {
		AnnCodec::default().dump(self)
	}

	/// Serializes with the default codec and writes the result to `path`.
	pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<(), AnnError> {
		let bytes = self.to_bytes()?;
		std::fs::write(path, bytes)?;
		Ok(())
	}

	/// Appends an uncompressed image and returns its index.
	///
	/// `plane` holds the color bytes for every pixel at the header's bit
	/// depth, optionally followed by one alpha byte per pixel. The descriptor's
	/// compression type and block lengths are set to match.
	pub fn add_image(
		&mut self,
		mut descriptor: ImageDescriptor,
		plane: Vec<u8>,
	) -> Result<u16, AnnError> {
		let position = self.image_descriptors.len();
		let index = count_u16("Image count", position)?;
		let count = count_u16("Image count", position + 1)?;

		let geometry = descriptor.geometry(self.header.bpp);
		let Some((color, alpha)) = geometry.split(&plane) else {
			return Err(AnnError::ImagePlaneSize {
				index: position,
				expected: geometry.color_len(),
				actual: plane.len(),
			});
		};
		descriptor.compression_type = UNCOMPRESSED;
		descriptor.color_len = len_u32("Color block length", color.len())?;
		descriptor.alpha_len = len_u32("Alpha block length", alpha.len())?;

		self.header.frames_count = count;
		self.image_descriptors.push(descriptor);
		self.images.push(plane);
		Ok(index)
	}

	/// Appends an event and returns its index.
	pub fn add_event(&mut self, event: Event) -> Result<u16, AnnError> {
		let index = count_u16("Event count", self.events.len())?;
		self.header.events_count = count_u16("Event count", self.events.len() + 1)?;
		self.events.push(event);
		Ok(index)
	}

	/// Recomputes every count field from the lists it describes.
	pub fn sync_counts(&mut self) -> Result<(), AnnError> {
		self.header.events_count = count_u16("Event count", self.events.len())?;
		self.header.frames_count = count_u16("Image count", self.image_descriptors.len())?;
		for event in &mut self.events {
			event.frames_count = count_u16("Event frame count", event.frames.len())?;
		}
		Ok(())
	}

	/// Checks that header counts match the lists they describe.
	pub fn check_counts(&self) -> Result<(), AnnError> {
		check_count("events_count", self.header.events_count, self.events.len())?;
		check_count("frames_count", self.header.frames_count, self.image_descriptors.len())?;
		check_count("frames_count", self.header.frames_count, self.images.len())
	}

	/// Checks that every frame maps to an existing image.
	pub fn check_frame_mapping(&self) -> Result<(), AnnError> {
		let images = self.header.frames_count as usize;
		for (event_index, event) in self.events.iter().enumerate() {
			for (frame, &image) in event.frames_image_mapping.iter().enumerate() {
				if image as usize >= images {
					return Err(AnnError::InvalidFrameMapping {
						event: event_index,
						frame,
						image,
						images,
					});
				}
			}
		}
		Ok(())
	}

	/// Checks every structural invariant a dump relies on.
	pub fn validate(&self) -> Result<(), AnnError> {
		self.check_counts()?;
		for (index, event) in self.events.iter().enumerate() {
			event.check_layout(index)?;
		}
		self.check_frame_mapping()
	}
}

fn count_u16(field: &'static str, value: usize) -> Result<u16, AnnError> {
	u16::try_from(value).map_err(|_| AnnError::FieldOverflow {
		field,
		value,
		bits: 16,
	})
}

fn len_u32(field: &'static str, value: usize) -> Result<u32, AnnError> {
	u32::try_from(value).map_err(|_| AnnError::FieldOverflow {
		field,
		value,
		bits: 32,
	})
}

fn check_count(field: &'static str, declared: u16, actual: usize) -> Result<(), AnnError> {
	if declared as usize != actual {
		return Err(AnnError::CountMismatch {
			field,
			declared: declared as usize,
			actual,
		});
	}
	Ok(())
}

/// Stateless container codec.
///
/// Bundles the parse configuration, the dump normalizations and the plane
/// codecs. A single codec can serve any number of parse and dump calls, from
/// any number of threads.
#[derive(Debug, Default)]
pub struct AnnCodec {
	/// Parse configuration
	pub parse_config: ParseConfig,
	/// Dump normalizations
	pub dump_policy: DumpPolicy,
	/// Plane codecs used for image payloads
	pub codecs: CodecRegistry,
}

impl AnnCodec {
	/// Creates a codec with default settings.
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces the parse configuration.
	pub fn with_parse_config(mut self, parse_config: ParseConfig) -> Self {
		self.parse_config = parse_config;
		self
	}

	/// Replaces the dump policy.
	pub fn with_dump_policy(mut self, dump_policy: DumpPolicy) -> Self {
		self.dump_policy = dump_policy;
		self
	}

	/// Replaces the plane codecs.
	pub fn with_codecs(mut self, codecs: CodecRegistry) -> Self {
		self.codecs = codecs;
		self
	}

	/// Parses a complete container.
	pub fn parse(&self, data: &[u8]) -> Result<Ann, AnnError> {
		let mut reader = ByteReader::new(data);

		let header = Header::read(&mut reader, &self.parse_config.accepted_magics)?;
		log::debug!(
			"Parsed header: {} events, {} images, {} bpp",
			header.events_count,
			header.frames_count,
			header.bpp
		);

		let mut events = Vec::with_capacity(header.events_count as usize);
		for i in 0..header.events_count {
			log::trace!("Reading event {i} at offset {}", reader.position());
			events.push(Event::read(&mut reader)?);
		}

		let mut image_descriptors = Vec::with_capacity(header.frames_count as usize);
		for i in 0..header.frames_count {
			log::trace!("Reading image descriptor {i} at offset {}", reader.position());
			image_descriptors.push(ImageDescriptor::read(&mut reader)?);
		}

		log::debug!("Image payload starts at offset {}", reader.position());
		let mut images = Vec::with_capacity(image_descriptors.len());
		for descriptor in &image_descriptors {
			images.push(self.codecs.decode(
				descriptor.compression_type,
				descriptor.geometry(header.bpp),
				&mut reader,
				descriptor.color_len,
				descriptor.alpha_len,
			)?);
		}

		if reader.remaining() > 0 {
			log::debug!("Ignoring {} trailing bytes", reader.remaining());
		}

		let ann = Ann {
			header,
			events,
			image_descriptors,
			images,
		};
		if self.parse_config.validate_frame_mapping {
			ann.check_frame_mapping()?;
		}
		Ok(ann)
	}

	/// Serializes a complete container.
	pub fn dump(&self, ann: &Ann) -> Result<Vec<u8>, AnnError> {
		ann.validate()?;
		let policy = self.dump_policy;

		let magic = match policy.magic {
			MagicPolicy::Current => constants::MAGIC,
			MagicPolicy::Preserve => ann.header.magic,
		};

		let mut sink = ByteSink::new();
		ann.header.write(&mut sink, magic)?;
		for (index, event) in ann.events.iter().enumerate() {
			event.write(index, &mut sink, policy.loop_point)?;
		}

		let mut descriptors = Vec::with_capacity(ann.image_descriptors.len());
		let mut payloads = Vec::with_capacity(ann.image_descriptors.len());
		for (index, (descriptor, plane)) in ann.image_descriptors.iter().zip(&ann.images).enumerate()
		{
			let (descriptor, encoded) = self.encode_image(index, descriptor, plane, ann.header.bpp)?;
			descriptors.push(descriptor);
			payloads.push(encoded);
		}

		for descriptor in &descriptors {
			descriptor.write(&mut sink)?;
		}
		log::debug!(
			"Wrote {} bytes of header, event and descriptor data",
			sink.len()
		);

		let mut bytes = sink.into_bytes();
		for encoded in &payloads {
			bytes.extend_from_slice(&encoded.color);
			if !encoded.alpha.is_empty() {
				bytes.extend_from_slice(&encoded.alpha);
			}
		}

		log::debug!("Dumped container: {} bytes", bytes.len());
		Ok(bytes)
	}

	fn encode_image(
		&self,
		index: usize,
		descriptor: &ImageDescriptor,
		plane: &[u8],
		bpp: u16,
	) -> Result<(ImageDescriptor, EncodedImage), AnnError> {
		let compression_type = match self.dump_policy.compression {
			CompressionPolicy::ForceUncompressed => UNCOMPRESSED,
			CompressionPolicy::Preserve => descriptor.compression_type,
		};

		let geometry = descriptor.geometry(bpp);
		let (color, alpha) = geometry.split(plane).ok_or(AnnError::ImagePlaneSize {
			index,
			expected: geometry.color_len(),
			actual: plane.len(),
		})?;

		let encoded = self.codecs.encode(compression_type, geometry, color, alpha)?;
		let stored = ImageDescriptor {
			compression_type,
			color_len: encoded.color_len()?,
			alpha_len: encoded.alpha_len()?,
			..descriptor.clone()
		};
		Ok((stored, encoded))
	}
}
