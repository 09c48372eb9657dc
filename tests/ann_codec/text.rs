//! Windows-1250 text fields inside containers

use ann_rs::{file::opacity, prelude::*};

use crate::two_event_container;

#[test]
fn test_czech_strings_survive() {
	let mut ann = two_event_container();
	ann.header.description = "Příliš žluťoučký kůň úpěl ďábelské ódy".to_string();
	ann.events[0].name = "skok přes plot".to_string();

	let loaded = Ann::from_bytes(&ann.to_bytes().unwrap()).unwrap();
	assert_eq!(loaded.header.description, ann.header.description);
	assert_eq!(loaded.events[0].name, "skok přes plot");
}

#[test]
fn test_unmappable_characters_become_question_marks() {
	let mut ann = two_event_container();
	ann.header.author = "日本 ok".to_string();

	let loaded = Ann::from_bytes(&ann.to_bytes().unwrap()).unwrap();
	assert_eq!(loaded.header.author, "?? ok");
}

#[test]
fn test_every_byte_round_trips() {
	let codepage = cp1250();
	for byte in 0..=u8::MAX {
		let decoded = codepage.decode(&[byte]);
		assert_eq!(codepage.encode(&decoded), vec![byte], "byte 0x{byte:02X}");
	}
}

#[test]
fn test_transparency_percentages() {
	let mut ann = two_event_container();
	ann.header.transparency = opacity::parse_percent("40");
	let loaded = Ann::from_bytes(&ann.to_bytes().unwrap()).unwrap();
	assert_eq!(opacity::to_percent(loaded.header.transparency), "40");
}
