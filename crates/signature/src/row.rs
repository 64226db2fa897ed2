use crate::error::SignatureError;

/// Bits per storage word.
pub const WORD_BITS: usize = u64::BITS as usize;

/// Fixed-width bit vector for one document or one query.
///
/// Widths are whole words: a requested width is rounded up to the next
/// multiple of [`WORD_BITS`], with one word as the minimum.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignatureRow {
	words: Vec<u64>,
}

impl SignatureRow {
	/// Creates an all-zero row of at least `width_bits` bits.
	pub fn new(width_bits: usize) -> Self {
		Self {
			words: vec![0; words_for(width_bits)],
		}
	}

	/// Wraps raw words. An empty vector becomes a single zero word.
	pub fn from_words(mut words: Vec<u64>) -> Self {
		if words.is_empty() {
			words.push(0);
		}
		Self { words }
	}

	/// Width of the row in bits.
	pub fn width_bits(&self) -> usize {
		self.words.len() * WORD_BITS
	}

	/// Raw storage words, lowest bit positions first.
	pub fn words(&self) -> &[u64] {
		&self.words
	}

	/// Sets the bit at `position`. Setting an already set bit is a no-op.
	///
	/// `position` must be below [`width_bits`](Self::width_bits); callers derive
	/// it from a [`HashFamily`](crate::HashFamily) of the same width.
	#[inline]
	pub fn set(&mut self, position: usize) {
		debug_assert!(
			position < self.width_bits(),
			"bit {position} outside a {}-bit row",
			self.width_bits()
		);
		self.words[position / WORD_BITS] |= 1u64 << (position % WORD_BITS);
	}

	/// Returns whether the bit at `position` is set; out-of-range positions read as unset.
	pub fn get(&self, position: usize) -> bool {
		self.words
			.get(position / WORD_BITS)
			.is_some_and(|word| word & (1u64 << (position % WORD_BITS)) != 0)
	}

	/// ORs `other` into this row.
	pub fn merge_or(&mut self, other: &SignatureRow) -> Result<(), SignatureError> {
		self.check_width(other)?;
		for (word, incoming) in self.words.iter_mut().zip(&other.words) {
			*word |= incoming;
		}
		Ok(())
	}

	/// True when every bit set in `query` is also set in this row.
	pub fn is_superset(&self, query: &SignatureRow) -> Result<bool, SignatureError> {
		self.check_width(query)?;
		Ok(covers(&self.words, &query.words))
	}

	/// Number of set bits.
	pub fn count_ones(&self) -> u32 {
		self.words.iter().map(|word| word.count_ones()).sum()
	}

	/// True when no bit is set.
	pub fn is_empty(&self) -> bool {
		self.words.iter().all(|&word| word == 0)
	}

	/// Share of set bits, between `0.0` and `1.0`.
	pub fn fill_ratio(&self) -> f64 {
		f64::from(self.count_ones()) / self.width_bits() as f64
	}

	fn check_width(&self, other: &SignatureRow) -> Result<(), SignatureError> {
		if self.words.len() == other.words.len() {
			Ok(())
		} else {
			Err(SignatureError::DimensionMismatch {
				expected: self.width_bits(),
				actual: other.width_bits(),
			})
		}
	}
}

/// Number of words holding `width_bits` bits.
pub(crate) fn words_for(width_bits: usize) -> usize {
	width_bits.div_ceil(WORD_BITS).max(1)
}

/// Word-wise superset test over equally sized slices, stopping at the first miss.
#[inline]
pub(crate) fn covers(stored: &[u64], query: &[u64]) -> bool {
	stored
		.iter()
		.zip(query)
		.all(|(&stored, &query)| stored & query == query)
}
