//! Model assembly helpers

use ann_rs::{
	file::ann::constants,
	ids::{IdSource, SequentialIds},
	prelude::*,
};

use crate::two_event_container;

#[test]
fn test_counts_follow_assembly() {
	let ann = two_event_container();
	assert_eq!(ann.header.frames_count, 2);
	assert_eq!(ann.header.events_count, 2);
	assert_eq!(ann.events[1].frames_count, 2);
	assert_eq!(ann.image_descriptors[1].color_len, 4);
	assert_eq!(ann.image_descriptors[1].alpha_len, 2);
	assert!(ann.validate().is_ok());
}

#[test]
fn test_sync_counts_after_manual_edits() {
	let mut ann = two_event_container();
	ann.events.pop();
	ann.events[0].frames.pop();
	ann.events[0].frames_image_mapping.pop();
	assert!(ann.validate().is_err());

	ann.sync_counts().unwrap();
	assert_eq!(ann.header.events_count, 1);
	assert_eq!(ann.events[0].frames_count, 1);

	let loaded = Ann::from_bytes(&ann.to_bytes().unwrap()).unwrap();
	assert_eq!(loaded, ann);
}

#[test]
fn test_editor_ids_map_model_objects() {
	let ann = two_event_container();
	let mut ids = SequentialIds::new();

	let cards: Vec<_> = ann.image_descriptors.iter().map(|_| ids.card_id()).collect();
	let columns: Vec<_> = ann.events.iter().map(|_| ids.column_id()).collect();
	assert_eq!(cards, vec!["card-0", "card-1"]);
	assert_eq!(columns, vec!["column-2", "column-3"]);
}

#[test]
fn test_header_size_grows_with_strings() {
	let mut ann = Ann::new();
	let empty = ann.to_bytes().unwrap();
	assert_eq!(empty.len(), constants::MIN_HEADER_SIZE);

	ann.header.description = "abc".to_string();
	assert_eq!(ann.to_bytes().unwrap().len(), constants::MIN_HEADER_SIZE + 3);
}
