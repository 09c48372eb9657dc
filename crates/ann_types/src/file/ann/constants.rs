//! ANN file format constants.
//!
//! Offsets and sizes of the fixed parts of the container, reserved region
//! widths and the filler values written into reserved frame fields.

/// Current container signature, `"NVP\0"` read as a little-endian u32
pub const MAGIC: u32 = 0x0050_564E;

/// Signatures accepted when parsing with the default configuration
pub const KNOWN_MAGICS: &[u32] = &[MAGIC];

/// Size of the header with empty author and description strings
pub const MIN_HEADER_SIZE: usize = 52;

/// Reserved bytes after `events_count` in the header
pub const HEADER_RESERVED_1: usize = 0x0D;

/// Reserved bytes after `random_frames` in the header
pub const HEADER_RESERVED_2: usize = 0x0A;

/// Width of the fixed event name field
pub const EVENT_NAME_SIZE: usize = 0x20;

/// Reserved bytes after the event frame count
pub const EVENT_RESERVED_1: usize = 0x06;

/// Reserved bytes after the event loop point
pub const EVENT_RESERVED_2: usize = 0x0A;

/// Reserved bytes after the event transparency
pub const EVENT_RESERVED_3: usize = 0x0C;

/// Size of an event record before its mapping table
pub const EVENT_FIXED_SIZE: usize = EVENT_NAME_SIZE
	+ 2 + EVENT_RESERVED_1
	+ 4 + EVENT_RESERVED_2
	+ 1 + EVENT_RESERVED_3;

/// Tag written at the start of every frame record; ignored on load
pub const FRAME_TAG: [u8; 4] = [0x00, 0xA4, 0xCE, 0x57];

/// Reserved bytes after the frame tag
pub const FRAME_RESERVED_1: usize = 4;

/// Filler written into the reserved field after the frame position
pub const FRAME_FILLER: u32 = 0xFFFF_FFFF;

/// Width of the filler field
pub const FRAME_FILLER_SIZE: usize = size_of::<u32>();

/// Reserved bytes after the has-sounds flag
pub const FRAME_RESERVED_2: usize = 4;

/// Reserved bytes after the frame transparency
pub const FRAME_RESERVED_3: usize = 5;

/// Separator between sound identifiers
pub const SOUND_SEPARATOR: &str = ";";

/// Capacity of the image descriptor metadata slot, after its size field
pub const IMAGE_METADATA_SLOT: usize = 12;

/// Metadata payload written for images that were not loaded from a file
pub const DEFAULT_IMAGE_METADATA: [u8; 4] = [0; 4];

/// Width of the fixed image name field
pub const IMAGE_NAME_SIZE: usize = 0x14;

/// Size of one image descriptor record
pub const IMAGE_DESCRIPTOR_SIZE: usize = 2 * 5 + 4 + 2 + IMAGE_METADATA_SLOT + 4 + IMAGE_NAME_SIZE;

/// Default bits per pixel of new containers
pub const DEFAULT_BPP: u16 = 16;
