//! Single-byte legacy code page used by every text field in `.ANN` files.
//!
//! Strings are stored in Windows-1250. The forward table maps each of the 256
//! byte values to a character, so decoding never fails. Encoding goes through
//! the inverted table; characters without a slot become `?` (0x3F), which is a
//! lossy substitution rather than an error.

use std::{collections::HashMap, sync::LazyLock};

use encoding_rs::WINDOWS_1250;

/// Byte written for characters the code page cannot represent.
pub const REPLACEMENT_BYTE: u8 = b'?';

static CP1250: LazyLock<CodePage> = LazyLock::new(|| {
	let mut table = ['\0'; 256];
	for (byte, slot) in (0..=u8::MAX).zip(table.iter_mut()) {
		let input = [byte];
		let (decoded, had_errors) = WINDOWS_1250.decode_without_bom_handling(&input);
		*slot = match decoded.chars().next() {
			Some(c) if !had_errors => c,
			_ => char::from(byte),
		};
	}
	CodePage::from_table(table)
});

/// Prefix of `text` before the first NUL.
///
/// Fields are read back up to their first NUL, so names are written the same way.
pub fn until_nul(text: &str) -> &str {
	text.split('\0').next().unwrap_or_default()
}

/// Returns the Windows-1250 code page.
pub fn cp1250() -> &'static CodePage {
	&CP1250
}

/// Bidirectional mapping between bytes and characters of a single-byte code page.
#[derive(Debug, Clone)]
pub struct CodePage {
	decode: [char; 256],
	encode: HashMap<char, u8>,
}

impl CodePage {
	/// Builds a code page from its forward table.
	///
	/// When a character occurs more than once, the highest byte wins on encode.
	pub fn from_table(table: [char; 256]) -> Self {
		let encode = (0..=u8::MAX).zip(table.iter()).map(|(byte, &c)| (c, byte)).collect();
		Self {
			decode: table,
			encode,
		}
	}

	/// Character stored at `byte`.
	#[inline]
	pub fn decode_byte(&self, byte: u8) -> char {
		self.decode[byte as usize]
	}

	/// Byte for `c`, or [`REPLACEMENT_BYTE`] when the code page has no slot for it.
	#[inline]
	pub fn encode_char(&self, c: char) -> u8 {
		self.encode.get(&c).copied().unwrap_or(REPLACEMENT_BYTE)
	}

	/// Returns `true` when every character of `text` has a slot.
	pub fn can_encode(&self, text: &str) -> bool {
		text.chars().all(|c| self.encode.contains_key(&c))
	}

	/// Decodes every byte of `bytes`.
	pub fn decode(&self, bytes: &[u8]) -> String {
		bytes.iter().map(|&b| self.decode_byte(b)).collect()
	}

	/// Decodes `bytes` up to, not including, the first NUL.
	pub fn decode_until_nul(&self, bytes: &[u8]) -> String {
		let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
		self.decode(&bytes[..end])
	}

	/// Encodes `text`, one byte per character.
	pub fn encode(&self, text: &str) -> Vec<u8> {
		text.chars().map(|c| self.encode_char(c)).collect()
	}

	/// Encodes as much of `text` as fits into `destination`.
	///
	/// Bytes of `destination` past the encoded prefix are left untouched.
	/// Returns the number of characters consumed, which equals the number of
	/// bytes written.
	pub fn encode_into(&self, text: &str, destination: &mut [u8]) -> usize {
		let mut written = 0;
		for (slot, c) in destination.iter_mut().zip(text.chars()) {
			*slot = self.encode_char(c);
			written += 1;
		}
		written
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_every_byte_survives_decode_encode() {
		let page = cp1250();
		for byte in 0..=u8::MAX {
			assert_eq!(page.encode_char(page.decode_byte(byte)), byte, "byte 0x{byte:02X}");
		}
	}

	#[test]
	fn test_ascii_is_identity() {
		let page = cp1250();
		let text = "Hello, world! 0123;";
		assert_eq!(page.encode(text), text.as_bytes());
		assert_eq!(page.decode(text.as_bytes()), text);
	}

	#[test]
	fn test_central_european_letters() {
		let page = cp1250();
		let text = "Příšerně žluťoučký kůň úpěl ďábelské ódy";
		let encoded = page.encode(text);
		assert_eq!(encoded.len(), text.chars().count());
		assert!(page.can_encode(text));
		assert_eq!(page.decode(&encoded), text);

		assert_eq!(page.encode_char('Š'), 0x8A);
		assert_eq!(page.encode_char('ř'), 0xF8);
		assert_eq!(page.decode_byte(0x80), '€');
	}

	#[test]
	fn test_unmappable_becomes_question_mark() {
		let page = cp1250();
		assert_eq!(page.encode("a漢b"), b"a?b");
		assert!(!page.can_encode("漢"));
	}

	#[test]
	fn test_encode_into_truncates() {
		let page = cp1250();
		let mut field = [0xEEu8; 4];
		assert_eq!(page.encode_into("abcdef", &mut field), 4);
		assert_eq!(&field, b"abcd");
	}

	#[test]
	fn test_encode_into_leaves_tail() {
		let page = cp1250();
		let mut field = [0u8; 6];
		assert_eq!(page.encode_into("ab", &mut field), 2);
		assert_eq!(&field, b"ab\0\0\0\0");
	}

	#[test]
	fn test_until_nul() {
		assert_eq!(until_nul("ab\0cd"), "ab");
		assert_eq!(until_nul("\0"), "");
		assert_eq!(until_nul("plain"), "plain");
		assert_eq!(until_nul(""), "");
	}

	#[test]
	fn test_decode_until_nul() {
		let page = cp1250();
		assert_eq!(page.decode_until_nul(b"walk\0\0junk"), "walk");
		assert_eq!(page.decode_until_nul(b"full"), "full");
		assert_eq!(page.decode_until_nul(b""), "");
	}
}
