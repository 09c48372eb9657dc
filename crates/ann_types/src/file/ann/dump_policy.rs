//! Normalizations applied when dumping a container.
//!
//! Loading and saving are not symmetric: the editor rewrites the signature,
//! stores every image uncompressed and wraps event loop points into the frame
//! range. [`DumpPolicy::normalizing`] reproduces that behavior and is the
//! default; [`DumpPolicy::preserving`] writes the model back as loaded.

/// Signature written into the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MagicPolicy {
	/// Always write the current signature
	#[default]
	Current,
	/// Write `Header::magic` unchanged
	Preserve,
}

/// Compression used for image payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionPolicy {
	/// Store every image with compression type 0
	#[default]
	ForceUncompressed,
	/// Re-encode with each descriptor's compression type
	Preserve,
}

/// Treatment of event loop points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopPointPolicy {
	/// Write `loop_after_frame % frames_count`; events without frames are rejected
	#[default]
	Wrap,
	/// Write `loop_after_frame` unchanged
	Preserve,
}

/// Set of normalizations applied by the dumper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DumpPolicy {
	/// Signature handling
	pub magic: MagicPolicy,
	/// Image compression handling
	pub compression: CompressionPolicy,
	/// Loop point handling
	pub loop_point: LoopPointPolicy,
}

impl DumpPolicy {
	/// The editor's save behavior.
	pub fn normalizing() -> Self {
		Self::default()
	}

	/// Write the model back exactly as loaded.
	///
	/// Images keep their compression type, so codecs for every strategy in
	/// use must be registered.
	pub fn preserving() -> Self {
		Self {
			magic: MagicPolicy::Preserve,
			compression: CompressionPolicy::Preserve,
			loop_point: LoopPointPolicy::Preserve,
		}
	}
}
