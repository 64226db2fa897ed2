use serde::Serialize;

use crate::error::SignatureError;
use crate::hash::HashFamily;
use crate::params::SignatureParams;
use crate::row::{SignatureRow, WORD_BITS, words_for};
use crate::scan::{self, ScanBackend};

/// Rows handed to each worker by [`SignatureIndex::query_parallel`].
#[cfg(feature = "parallel")]
const PARALLEL_SHARD_ROWS: usize = 4_096;

/// Append-only collection of document signatures.
///
/// Document ids are row numbers: the `n`-th call to [`add_document`] returns
/// `n`, and ids are never reused or reordered. Rows live back to back in one
/// word buffer so the scan walks memory linearly.
///
/// Building requires `&mut self`; once built, the index can be shared by
/// reference across threads and queried without locking.
///
/// [`add_document`]: SignatureIndex::add_document
#[derive(Debug, Clone)]
pub struct SignatureIndex {
	words: Vec<u64>,
	words_per_row: usize,
	documents: usize,
	family: HashFamily,
	backend: ScanBackend,
}

/// Summary of an index's shape and occupancy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexStats {
	pub documents: usize,
	pub width_bits: usize,
	pub hashes: u32,
	pub backend: ScanBackend,
	pub memory_bytes: usize,
	pub mean_fill_ratio: f64,
}

impl SignatureIndex {
	/// Creates an empty index.
	///
	/// `capacity_rows` only pre-allocates storage; the index grows past it.
	/// `width_bits` is rounded up to whole 64-bit words and `hashes` is
	/// raised to at least one.
	pub fn new(capacity_rows: usize, width_bits: usize, hashes: u32) -> Self {
		let words_per_row = words_for(width_bits);
		let backend = ScanBackend::detect();
		log::debug!(
			"signature index: {} bits, k={}, {backend} scan",
			words_per_row * WORD_BITS,
			hashes.max(1)
		);
		Self {
			words: Vec::with_capacity(capacity_rows.saturating_mul(words_per_row)),
			words_per_row,
			documents: 0,
			family: HashFamily::new(hashes, words_per_row * WORD_BITS),
			backend,
		}
	}

	/// Creates an empty index shaped by `params`.
	pub fn from_params(capacity_rows: usize, params: SignatureParams) -> Self {
		Self::new(capacity_rows, params.width_bits, params.hashes)
	}

	/// Replaces the scan backend chosen at construction.
	///
	/// A backend the CPU cannot run falls back to scalar at query time.
	pub fn with_backend(mut self, backend: ScanBackend) -> Self {
		self.backend = backend;
		self
	}

	/// Appends the signature of `tokens` and returns its document id.
	///
	/// An empty token slice stores an all-zero row, which only an empty
	/// query matches.
	pub fn add_document(&mut self, tokens: &[u32]) -> usize {
		let row = self.signature_for(tokens);
		self.words.extend_from_slice(row.words());
		let id = self.documents;
		self.documents += 1;
		log::trace!("document {id}: {} tokens, {} bits set", tokens.len(), row.count_ones());
		id
	}

	/// Builds the row for `tokens`, exactly as documents and queries are encoded.
	pub fn signature_for(&self, tokens: &[u32]) -> SignatureRow {
		let mut row = SignatureRow::new(self.width_bits());
		for &token in tokens {
			for position in self.family.positions(token) {
				row.set(position);
			}
		}
		row
	}

	/// Returns, in ascending order, every document whose signature covers `tokens`.
	///
	/// The result may contain documents lacking some of the tokens but never
	/// omits a document that holds all of them. An empty `tokens` slice
	/// matches every document.
	pub fn query(&self, tokens: &[u32]) -> Vec<usize> {
		self.query_with(self.backend, tokens)
	}

	/// Same as [`query`](Self::query) with an explicit scan backend.
	pub fn query_with(&self, backend: ScanBackend, tokens: &[u32]) -> Vec<usize> {
		let row = self.signature_for(tokens);
		self.scan_row(backend, &row)
	}

	/// Queries with a prebuilt row, which must match the index width.
	pub fn query_row(&self, row: &SignatureRow) -> Result<Vec<usize>, SignatureError> {
		if row.width_bits() != self.width_bits() {
			return Err(SignatureError::DimensionMismatch {
				expected: self.width_bits(),
				actual: row.width_bits(),
			});
		}
		Ok(self.scan_row(self.backend, row))
	}

	/// Same as [`query`](Self::query), splitting the rows across the rayon pool.
	#[cfg(feature = "parallel")]
	pub fn query_parallel(&self, tokens: &[u32]) -> Vec<usize> {
		let row = self.signature_for(tokens);
		scan::scan_sharded(self.backend, row.words(), &self.words, PARALLEL_SHARD_ROWS)
	}

	fn scan_row(&self, backend: ScanBackend, row: &SignatureRow) -> Vec<usize> {
		debug_assert_eq!(row.words().len(), self.words_per_row);
		let mut matches = Vec::new();
		scan::scan(backend, row.words(), &self.words, &mut matches);
		matches
	}

	/// Stored signature of `doc_id`, if it exists.
	pub fn row(&self, doc_id: usize) -> Option<SignatureRow> {
		let start = doc_id.checked_mul(self.words_per_row)?;
		let end = start.checked_add(self.words_per_row)?;
		let words = self.words.get(start..end)?;
		Some(SignatureRow::from_words(words.to_vec()))
	}

	/// Number of stored documents.
	pub fn len(&self) -> usize {
		self.documents
	}

	/// True when no document has been added.
	pub fn is_empty(&self) -> bool {
		self.documents == 0
	}

	/// Row width in bits.
	pub fn width_bits(&self) -> usize {
		self.words_per_row * WORD_BITS
	}

	/// Bit positions set per token.
	pub fn hashes(&self) -> u32 {
		self.family.hashes()
	}

	/// Backend used by [`query`](Self::query).
	pub fn backend(&self) -> ScanBackend {
		self.backend
	}

	/// Shape and occupancy summary.
	pub fn stats(&self) -> IndexStats {
		let set_bits: u64 = self.words.iter().map(|word| u64::from(word.count_ones())).sum();
		let total_bits = (self.documents * self.width_bits()) as f64;
		IndexStats {
			documents: self.documents,
			width_bits: self.width_bits(),
			hashes: self.hashes(),
			backend: self.backend,
			memory_bytes: self.words.len() * size_of::<u64>(),
			mean_fill_ratio: if self.documents == 0 {
				0.0
			} else {
				set_bits as f64 / total_bits
			},
		}
	}
}
