//! Benchmark helper utilities for ann-rs
//!
//! This module provides synthetic containers for the benchmark suite. Real
//! game files can be dropped into `test_data/` and are picked up when present.

use ann_types::file::ann::{Ann, Event, Frame, ImageDescriptor};

/// Generates a container with `events` events of `frames_per_event` frames,
/// sharing `images` square images of `size` x `size` pixels at 16 bpp with
/// an alpha plane.
pub fn generate_test_ann(events: u16, frames_per_event: u16, images: u16, size: u16) -> Ann {
	let mut ann = Ann::new();
	ann.header.fps = 15;
	ann.header.author = "benchmark".to_string();
	ann.header.description = "synthetic container".to_string();

	for i in 0..images {
		let plane = generate_plane(size, i);
		ann.add_image(ImageDescriptor::new(format!("img{i:04}"), size, size), plane)
			.expect("synthetic image matches its geometry");
	}

	for e in 0..events {
		let mut event = Event::new(format!("event{e:03}"));
		event.loop_after_frame = u32::from(frames_per_event / 2);
		for f in 0..frames_per_event {
			let mut frame = Frame::new(f as i16, -(e as i16));
			frame.name = format!("e{e}f{f}");
			if f % 4 == 0 {
				frame.set_sounds(["step", "whoosh"]);
			}
			event
				.push_frame((e + f) % images.max(1), frame)
				.expect("frame count fits in u16");
		}
		ann.add_event(event).expect("event count fits in u16");
	}

	ann
}

/// Serialized form of [`generate_test_ann`].
pub fn generate_test_ann_data(events: u16, frames_per_event: u16, images: u16, size: u16) -> Vec<u8> {
	generate_test_ann(events, frames_per_event, images, size)
		.to_bytes()
		.expect("synthetic container is well formed")
}

/// Color and alpha bytes for one image with a simple gradient pattern.
fn generate_plane(size: u16, seed: u16) -> Vec<u8> {
	let pixels = size as usize * size as usize;
	let mut plane = Vec::with_capacity(pixels * 3);
	for p in 0..pixels {
		let value = (p as u16).wrapping_mul(31).wrapping_add(seed);
		plane.extend_from_slice(&value.to_le_bytes());
	}
	plane.extend((0..pixels).map(|p| if p % 7 == 0 { 0 } else { 0xFF }));
	plane
}
