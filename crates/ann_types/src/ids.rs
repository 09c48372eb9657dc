//! Identifier sources for editor-side objects.
//!
//! The container itself carries no identifiers. Editors built on top of it
//! still need unique keys for the cards (images) and columns (events) they
//! display, so those keys come from an [`IdSource`] owned by the caller.

use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Mints unique identifiers.
pub trait IdSource {
	/// Returns the next identifier.
	fn next_id(&mut self) -> u64;

	/// Identifier for an image card.
	fn card_id(&mut self) -> String {
		format!("card-{}", self.next_id())
	}

	/// Identifier for an event column.
	fn column_id(&mut self) -> String {
		format!("column-{}", self.next_id())
	}
}

/// Monotonic counter.
///
/// ```
/// use ann_types::ids::{IdSource, SequentialIds};
///
/// let mut ids = SequentialIds::new();
/// assert_eq!(ids.card_id(), "card-0");
/// assert_eq!(ids.column_id(), "column-1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
	next: u64,
}

impl SequentialIds {
	/// Creates a counter starting at 0.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a counter starting at `first`.
	pub fn starting_at(first: u64) -> Self {
		Self {
			next: first,
		}
	}
}

impl IdSource for SequentialIds {
	fn next_id(&mut self) -> u64 {
		let id = self.next;
		self.next = self.next.wrapping_add(1);
		id
	}
}

/// Random identifiers from a small, fast generator.
#[derive(Debug, Clone)]
pub struct RandomIds {
	rng: SmallRng,
}

impl RandomIds {
	/// Seeds the generator from the operating system.
	pub fn new() -> Self {
		Self {
			rng: SmallRng::from_os_rng(),
		}
	}

	/// Seeds the generator with a fixed value for reproducible sequences.
	pub fn from_seed(seed: u64) -> Self {
		Self {
			rng: SmallRng::seed_from_u64(seed),
		}
	}
}

impl Default for RandomIds {
	fn default() -> Self {
		Self::new()
	}
}

impl IdSource for RandomIds {
	fn next_id(&mut self) -> u64 {
		self.rng.random()
	}
}
