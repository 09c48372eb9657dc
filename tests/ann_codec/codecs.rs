//! External plane codecs plugged into the container codec

use ann_rs::{
	file::ann::{CompressionPolicy, LoopPointPolicy, MagicPolicy},
	prelude::*,
};

use crate::two_event_container;

/// Stores planes as (count, byte) runs.
struct Runs;

impl PlaneCodec for Runs {
	fn encode(&self, raw: &[u8], _width: u32, _height: u32) -> Result<Vec<u8>, AnnError> {
		let mut out: Vec<u8> = Vec::new();
		for &byte in raw {
			match out.len() {
				len if len >= 2 && out[len - 1] == byte && out[len - 2] < u8::MAX => out[len - 2] += 1,
				_ => out.extend_from_slice(&[1, byte]),
			}
		}
		Ok(out)
	}

	fn decode(
		&self,
		compressed: &[u8],
		_width: u32,
		_height: u32,
		expected_len: u32,
	) -> Result<Vec<u8>, AnnError> {
		let out: Vec<u8> = compressed
			.chunks_exact(2)
			.flat_map(|pair| std::iter::repeat_n(pair[1], pair[0] as usize))
			.collect();
		if out.len() != expected_len as usize {
			return Err(AnnError::Codec {
				strategy: PlaneCompression::Run,
				message: format!("decoded {} bytes, expected {expected_len}", out.len()),
			});
		}
		Ok(out)
	}
}

fn run_codec(policy: DumpPolicy) -> AnnCodec {
	AnnCodec::new()
		.with_codecs(CodecRegistry::new().with(PlaneCompression::Run, Runs))
		.with_dump_policy(policy)
}

#[test]
fn test_compressed_round_trip() {
	let mut ann = two_event_container();
	ann.image_descriptors[0].compression_type = 4;

	let codec = run_codec(DumpPolicy::preserving());
	let bytes = codec.dump(&ann).unwrap();
	let loaded = codec.parse(&bytes).unwrap();

	// Alternating bytes: one run per byte
	assert_eq!(loaded.image_descriptors[0].color_len, 12);
	assert_eq!(loaded.image_descriptors[0].alpha_len, 0);
	assert_eq!(loaded.images, ann.images);
	assert_eq!(codec.dump(&loaded).unwrap(), bytes);
}

#[test]
fn test_policies_combine() {
	let mut ann = two_event_container();
	ann.image_descriptors[1].compression_type = 4;
	ann.events[0].loop_after_frame = 7;

	let policy = DumpPolicy {
		magic: MagicPolicy::Current,
		compression: CompressionPolicy::Preserve,
		loop_point: LoopPointPolicy::Wrap,
	};
	let codec = run_codec(policy);
	let loaded = codec.parse(&codec.dump(&ann).unwrap()).unwrap();
	assert_eq!(loaded.image_descriptors[1].compression_type, 4);
	assert_eq!(loaded.image_descriptors[1].color_len, 8);
	assert_eq!(loaded.image_descriptors[1].alpha_len, 4);
	assert_eq!(loaded.events[0].loop_after_frame, 1);
}

#[test]
fn test_codec_failure_aborts_parse() {
	let mut ann = two_event_container();
	ann.image_descriptors[1].compression_type = 4;

	let codec = run_codec(DumpPolicy::preserving());
	let mut bytes = codec.dump(&ann).unwrap();
	// Lengthen the final alpha run
	let len = bytes.len();
	bytes[len - 2] += 1;

	let result = codec.parse(&bytes);
	assert!(matches!(result, Err(AnnError::Codec { strategy: PlaneCompression::Run, .. })));
}
