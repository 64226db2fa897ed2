//! Batch superset scan over row-major signature storage.
//!
//! Rows are laid out back to back in one word slice; row `n` occupies
//! `rows[n * words .. (n + 1) * words]` where `words == query.len()`. Every
//! backend appends matching row numbers to `out` in ascending order and must
//! produce exactly the output of [`scalar::scan`].

use serde::Serialize;

pub mod scalar;

#[cfg(target_arch = "x86_64")]
pub mod avx2;

/// Implementation used for the inner scan loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanBackend {
	/// Portable word-at-a-time loop.
	Scalar,
	/// 256-bit lanes, four words per compare (x86_64 with AVX2 only).
	Avx2,
}

impl ScanBackend {
	/// Every backend, in preference order.
	pub const ALL: [ScanBackend; 2] = [ScanBackend::Avx2, ScanBackend::Scalar];

	/// Picks the fastest backend the running CPU supports.
	pub fn detect() -> Self {
		Self::ALL
			.into_iter()
			.find(|backend| backend.is_available())
			.unwrap_or(ScanBackend::Scalar)
	}

	/// Whether the running CPU can execute this backend.
	pub fn is_available(self) -> bool {
		match self {
			ScanBackend::Scalar => true,
			ScanBackend::Avx2 => avx2_available(),
		}
	}

	/// Short identifier used in logs and stats output.
	pub fn name(self) -> &'static str {
		match self {
			ScanBackend::Scalar => "scalar",
			ScanBackend::Avx2 => "avx2",
		}
	}
}

impl std::fmt::Display for ScanBackend {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

fn avx2_available() -> bool {
	#[cfg(target_arch = "x86_64")]
	{
		is_x86_feature_detected!("avx2")
	}

	#[cfg(not(target_arch = "x86_64"))]
	{
		false
	}
}

/// Appends to `out` the number of every row in `rows` that covers `query`.
///
/// # Preconditions
///
/// `query` is non-empty and `rows.len()` is a multiple of `query.len()`. Both
/// are asserted in debug builds; release builds scan only whole rows. A
/// backend the CPU does not support falls back to [`ScanBackend::Scalar`].
pub fn scan(backend: ScanBackend, query: &[u64], rows: &[u64], out: &mut Vec<usize>) {
	debug_assert!(!query.is_empty(), "query row has no words");
	debug_assert_eq!(
		rows.len() % query.len().max(1),
		0,
		"row storage is not a whole number of {}-word rows",
		query.len()
	);
	if query.is_empty() {
		return;
	}

	match backend {
		#[cfg(target_arch = "x86_64")]
		ScanBackend::Avx2 if avx2_available() => {
			// SAFETY: AVX2 support was verified at runtime just above.
			unsafe { avx2::scan(query, rows, out) }
		}
		_ => scalar::scan(query, rows, out),
	}
}

/// Scans `rows` in shards of `shard_rows` rows on the rayon pool.
///
/// Shard results are concatenated in shard order, so the output is ascending
/// and identical to [`scan`] over the whole slice.
#[cfg(feature = "parallel")]
pub fn scan_sharded(
	backend: ScanBackend,
	query: &[u64],
	rows: &[u64],
	shard_rows: usize,
) -> Vec<usize> {
	use rayon::prelude::*;

	let words = query.len();
	if words == 0 {
		return Vec::new();
	}
	let shard_rows = shard_rows.max(1);

	rows.par_chunks(shard_rows * words)
		.enumerate()
		.map(|(shard, chunk)| {
			let mut local = Vec::new();
			scan(backend, query, chunk, &mut local);
			let offset = shard * shard_rows;
			local.iter_mut().for_each(|row| *row += offset);
			local
		})
		.flatten_iter()
		.collect()
}
