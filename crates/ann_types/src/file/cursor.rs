//! Positioned little-endian access over byte buffers.
//!
//! [`ByteReader`] walks a borrowed, fixed-size buffer and fails with
//! [`AnnError::OutOfBounds`] instead of returning partial values.
//! [`ByteSink`] is the growable counterpart used while dumping: it doubles its
//! backing storage whenever a write would overflow it and only ever exposes
//! the prefix that has actually been written.

use super::AnnError;

/// Sequential reader over a fixed byte buffer.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
	data: &'a [u8],
	position: usize,
}

impl<'a> ByteReader<'a> {
	/// Creates a reader positioned at offset 0.
	pub fn new(data: &'a [u8]) -> Self {
		Self {
			data,
			position: 0,
		}
	}

	/// Current offset into the buffer.
	#[inline]
	pub fn position(&self) -> usize {
		self.position
	}

	/// Number of bytes left after the current position.
	#[inline]
	pub fn remaining(&self) -> usize {
		self.data.len().saturating_sub(self.position)
	}

	/// Returns the next `len` bytes and advances past them.
	pub fn read(&mut self, len: usize) -> Result<&'a [u8], AnnError> {
		let end = self
			.position
			.checked_add(len)
			.filter(|&end| end <= self.data.len())
			.ok_or_else(|| AnnError::out_of_bounds(self.position, len, self.data.len()))?;

		let bytes = &self.data[self.position..end];
		self.position = end;
		Ok(bytes)
	}

	/// Reads a fixed-size array.
	pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], AnnError> {
		let mut out = [0u8; N];
		out.copy_from_slice(self.read(N)?);
		Ok(out)
	}

	/// Advances past `len` bytes without interpreting them.
	pub fn skip(&mut self, len: usize) -> Result<(), AnnError> {
		self.read(len).map(|_| ())
	}

	/// Reads an unsigned 8-bit value.
	pub fn get_u8(&mut self) -> Result<u8, AnnError> {
		Ok(self.read_array::<1>()?[0])
	}

	/// Reads an unsigned little-endian 16-bit value.
	pub fn get_u16(&mut self) -> Result<u16, AnnError> {
		Ok(u16::from_le_bytes(self.read_array()?))
	}

	/// Reads a signed little-endian 16-bit value.
	pub fn get_i16(&mut self) -> Result<i16, AnnError> {
		Ok(i16::from_le_bytes(self.read_array()?))
	}

	/// Reads an unsigned little-endian 32-bit value.
	pub fn get_u32(&mut self) -> Result<u32, AnnError> {
		Ok(u32::from_le_bytes(self.read_array()?))
	}

	/// Reads a u32 byte count followed by that many bytes.
	pub fn read_prefixed(&mut self) -> Result<&'a [u8], AnnError> {
		let len = self.get_u32()? as usize;
		self.read(len)
	}
}

/// Initial capacity of a fresh [`ByteSink`].
const INITIAL_SINK_CAPACITY: usize = 1024;

/// Growable little-endian writer.
///
/// Backing storage is always zero-filled up to its capacity, so skipped
/// regions read back as zeros. Growth reallocates, which the borrow checker
/// enforces: no slice obtained from [`ByteSink::as_bytes`] survives a write.
#[derive(Debug, Clone)]
pub struct ByteSink {
	buffer: Vec<u8>,
	position: usize,
	len: usize,
}

impl Default for ByteSink {
	fn default() -> Self {
		Self::with_capacity(INITIAL_SINK_CAPACITY)
	}
}

impl ByteSink {
	/// Creates an empty sink with the default capacity.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty sink with at least `capacity` bytes of backing storage.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			buffer: vec![0; capacity.max(1)],
			position: 0,
			len: 0,
		}
	}

	/// Current write offset.
	#[inline]
	pub fn position(&self) -> usize {
		self.position
	}

	/// Moves the write offset; positions past the written prefix are clamped to it.
	pub fn set_position(&mut self, position: usize) {
		self.position = position.min(self.len);
	}

	/// Number of logically written bytes.
	#[inline]
	pub fn len(&self) -> usize {
		self.len
	}

	/// Returns `true` when nothing has been written yet.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Size of the backing storage.
	#[inline]
	pub fn capacity(&self) -> usize {
		self.buffer.len()
	}

	/// The written prefix.
	pub fn as_bytes(&self) -> &[u8] {
		&self.buffer[..self.len]
	}

	/// Consumes the sink, returning the written prefix.
	pub fn into_bytes(mut self) -> Vec<u8> {
		self.buffer.truncate(self.len);
		self.buffer
	}

	fn ensure_capacity(&mut self, end: usize) {
		let mut capacity = self.buffer.len();
		if end <= capacity {
			return;
		}
		while capacity < end {
			capacity = capacity.saturating_mul(2);
		}
		self.buffer.resize(capacity, 0);
	}

	/// Writes `bytes` at the current position, overwriting or appending.
	pub fn write(&mut self, bytes: &[u8]) {
		let end = self.position + bytes.len();
		self.ensure_capacity(end);
		self.buffer[self.position..end].copy_from_slice(bytes);
		self.position = end;
		self.len = self.len.max(end);
	}

	/// Emits `len` zero bytes.
	pub fn skip(&mut self, len: usize) {
		let end = self.position + len;
		self.ensure_capacity(end);
		self.buffer[self.position..end].fill(0);
		self.position = end;
		self.len = self.len.max(end);
	}

	/// Writes an unsigned 8-bit value.
	pub fn set_u8(&mut self, value: u8) {
		self.write(&[value]);
	}

	/// Writes an unsigned little-endian 16-bit value.
	pub fn set_u16(&mut self, value: u16) {
		self.write(&value.to_le_bytes());
	}

	/// Writes a signed little-endian 16-bit value.
	pub fn set_i16(&mut self, value: i16) {
		self.write(&value.to_le_bytes());
	}

	/// Writes an unsigned little-endian 32-bit value.
	pub fn set_u32(&mut self, value: u32) {
		self.write(&value.to_le_bytes());
	}

	/// Writes a u32 byte count followed by the bytes themselves.
	pub fn write_prefixed(&mut self, field: &'static str, bytes: &[u8]) -> Result<(), AnnError> {
		let len = u32::try_from(bytes.len()).map_err(|_| AnnError::FieldOverflow {
			field,
			value: bytes.len(),
			bits: 32,
		})?;
		self.set_u32(len);
		self.write(bytes);
		Ok(())
	}
}
