//! Parse configuration for `.ANN` containers.
//!
//! Controls which signatures are accepted and how much the parser checks
//! beyond the structure required to read the file.

use super::constants;

/// Whitelist of accepted container signatures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagicSet {
	magics: Vec<u32>,
}

impl Default for MagicSet {
	fn default() -> Self {
		Self::new(constants::KNOWN_MAGICS.iter().copied())
	}
}

impl MagicSet {
	/// Creates a set from explicit signatures, dropping duplicates.
	pub fn new(magics: impl IntoIterator<Item = u32>) -> Self {
		magics.into_iter().fold(
			Self {
				magics: Vec::new(),
			},
			Self::with,
		)
	}

	/// Returns the set extended with `magic`.
	pub fn with(mut self, magic: u32) -> Self {
		if !self.contains(magic) {
			self.magics.push(magic);
		}
		self
	}

	/// Returns `true` when `magic` is accepted.
	pub fn contains(&self, magic: u32) -> bool {
		self.magics.contains(&magic)
	}

	/// Accepted signatures.
	pub fn as_slice(&self) -> &[u32] {
		&self.magics
	}
}

/// Configuration for parsing containers.
///
/// # Presets
///
/// - `default()` / `lenient()`: accept the known signatures, read frame
///   mappings as stored
/// - `strict()`: additionally reject frames whose mapping points past the
///   image list
///
/// # Examples
///
/// ```
/// use ann_types::file::ann::{MagicSet, ParseConfig};
///
/// let config = ParseConfig::strict();
/// assert!(config.validate_frame_mapping);
///
/// // Accept an extra signature
/// let config = ParseConfig::default().with_magics(MagicSet::default().with(0x0150_564E));
/// assert!(config.accepted_magics.contains(0x0150_564E));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseConfig {
	/// Signatures accepted in the first four bytes
	pub accepted_magics: MagicSet,
	/// Reject frame mappings that do not index the image list
	pub validate_frame_mapping: bool,
}

impl ParseConfig {
	/// Create a lenient configuration, same as the default.
	pub fn lenient() -> Self {
		Self::default()
	}

	/// Create a strict configuration that validates frame mappings.
	pub fn strict() -> Self {
		Self {
			validate_frame_mapping: true,
			..Self::default()
		}
	}

	/// Replace the accepted signatures.
	pub fn with_magics(mut self, magics: MagicSet) -> Self {
		self.accepted_magics = magics;
		self
	}
}
