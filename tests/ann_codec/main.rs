//! Integration tests for `ann-rs` containers

mod builder;
mod codecs;
mod text;

use ann_rs::prelude::*;

/// Builds a two-event container with one image per event.
pub(crate) fn two_event_container() -> Ann {
	let mut ann = Ann::new();
	ann.header.fps = 10;
	ann.header.author = "Žluťoučký kůň".to_string();

	// 3x1 without alpha, 1x2 with alpha
	let red = ann
		.add_image(ImageDescriptor::new("red", 3, 1), vec![0xF8, 0x00, 0xF8, 0x00, 0xF8, 0x00])
		.unwrap();
	let blue = ann
		.add_image(ImageDescriptor::new("blue", 1, 2), vec![0x1F, 0x00, 0x1F, 0x00, 0x7F, 0xFF])
		.unwrap();

	for (name, image) in [("stand", red), ("jump", blue)] {
		let mut event = AnnEvent::new(name);
		event.push_frame(image, AnnFrame::new(0, 0)).unwrap();
		event.push_frame(image, AnnFrame::new(0, -4)).unwrap();
		ann.add_event(event).unwrap();
	}
	ann
}

#[test]
fn test_facade_round_trip() {
	let ann = two_event_container();
	let bytes = ann.to_bytes().unwrap();
	assert_eq!(Ann::from_bytes(&bytes).unwrap(), ann);
}

#[test]
fn test_codec_is_reusable() {
	let codec = AnnCodec::new();
	let ann = two_event_container();

	let first = codec.dump(&ann).unwrap();
	let parsed = codec.parse(&first).unwrap();
	let second = codec.dump(&parsed).unwrap();
	assert_eq!(first, second);
	assert_eq!(codec.parse(&second).unwrap(), parsed);
}

#[test_log::test]
fn test_codec_shared_between_threads() {
	let codec = std::sync::Arc::new(AnnCodec::new());
	let bytes = two_event_container().to_bytes().unwrap();

	let handles: Vec<_> = (0..4)
		.map(|_| {
			let codec = codec.clone();
			let bytes = bytes.clone();
			std::thread::spawn(move || codec.dump(&codec.parse(&bytes).unwrap()).unwrap())
		})
		.collect();

	for handle in handles {
		assert_eq!(handle.join().unwrap(), bytes);
	}
}

#[test_log::test]
fn test_failed_parse_reports_error() {
	let bytes = two_event_container().to_bytes().unwrap();
	for len in [0, 3, 40, bytes.len() / 2, bytes.len() - 1] {
		let result = Ann::from_bytes(&bytes[..len]);
		assert!(matches!(result, Err(AnnError::OutOfBounds { .. })), "length {len}");
	}

	let mut garbage = bytes.clone();
	garbage[0] = b'X';
	assert!(matches!(Ann::from_bytes(&garbage), Err(AnnError::InvalidMagic { .. })));
}
