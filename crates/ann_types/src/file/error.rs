//! Error types for container parsing and serialization.

use thiserror::Error;

use super::compression::PlaneCompression;

/// Errors that can occur when parsing or dumping `.ANN` containers
#[derive(Debug, Error)]
pub enum AnnError {
	/// The buffer does not start with a recognized signature
	#[error("Invalid magic number: 0x{actual:08X}")]
	InvalidMagic {
		/// Value read from the first four bytes
		actual: u32,
	},

	/// Attempted to read past the end of the buffer
	#[error(
		"Out of bounds read at offset {offset}: requested {requested} bytes, {available} available"
	)]
	OutOfBounds {
		/// Cursor position when the read was attempted
		offset: usize,
		/// Number of bytes requested
		requested: usize,
		/// Number of bytes left in the buffer
		available: usize,
	},

	/// An image descriptor references an unmapped compression code
	#[error("Unsupported compression type: {0}")]
	UnsupportedCompressionType(u16),

	/// An event cannot be written in its current shape
	#[error("Invalid layout for event {index} ({name:?}): {reason}")]
	InvalidEventLayout {
		/// Position of the event in the event list
		index: usize,
		/// Event name
		name: String,
		/// What is wrong with the event
		reason: String,
	},

	/// A header count disagrees with the list it describes
	#[error("Count mismatch for {field}: header declares {declared}, model holds {actual}")]
	CountMismatch {
		/// Name of the header field
		field: &'static str,
		/// Value declared in the header
		declared: usize,
		/// Length of the list in the model
		actual: usize,
	},

	/// A frame points at an image that does not exist
	#[error("Event {event} frame {frame} maps to image {image}, but only {images} images exist")]
	InvalidFrameMapping {
		/// Event index
		event: usize,
		/// Frame index within the event
		frame: usize,
		/// Referenced image index
		image: u16,
		/// Number of images in the container
		images: usize,
	},

	/// The descriptor metadata slot declares more bytes than it can hold
	#[error("Image metadata declares {declared} bytes, slot holds at most {capacity}")]
	InvalidMetadataSize {
		/// Declared payload size
		declared: usize,
		/// Fixed slot capacity
		capacity: usize,
	},

	/// A raw plane is too short for the dimensions it is stored with
	#[error("Image {index} plane holds {actual} bytes, color data alone needs {expected}")]
	ImagePlaneSize {
		/// Image index
		index: usize,
		/// Minimum number of bytes required
		expected: usize,
		/// Number of bytes supplied
		actual: usize,
	},

	/// A value does not fit the width of its on-disk field
	#[error("{field} value {value} does not fit in {bits} bits")]
	FieldOverflow {
		/// Field description
		field: &'static str,
		/// Offending value
		value: usize,
		/// Width of the on-disk field
		bits: u32,
	},

	/// No codec is registered for a plane compression strategy
	#[error("No codec registered for {0} plane compression")]
	CodecUnavailable(PlaneCompression),

	/// A registered plane codec failed
	#[error("{strategy} plane codec failed: {message}")]
	Codec {
		/// Strategy whose codec failed
		strategy: PlaneCompression,
		/// Failure description from the codec
		message: String,
	},

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

impl AnnError {
	/// Creates an out of bounds error for a read at `offset` over a buffer of `len` bytes
	pub fn out_of_bounds(offset: usize, requested: usize, len: usize) -> Self {
		Self::OutOfBounds {
			offset,
			requested,
			available: len.saturating_sub(offset),
		}
	}

	/// Creates an event layout error
	pub fn event_layout(index: usize, name: &str, reason: impl Into<String>) -> Self {
		Self::InvalidEventLayout {
			index,
			name: name.to_string(),
			reason: reason.into(),
		}
	}
}
