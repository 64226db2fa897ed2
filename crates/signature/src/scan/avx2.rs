//! AVX2 scan: four words per compare.
//!
//! Each 256-bit lane is reduced with `and` + `cmpeq_epi64`; a row is dropped on
//! the first lane whose byte mask is not all ones. Words past the last full
//! lane go through the scalar word test.

use std::arch::x86_64::*;

use crate::row::covers;

const LANE_WORDS: usize = 4;

/// AVX2 superset scan.
///
/// # Safety
///
/// The caller must ensure the CPU supports AVX2.
#[target_feature(enable = "avx2")]
pub unsafe fn scan(query: &[u64], rows: &[u64], out: &mut Vec<usize>) {
	let words = query.len();
	if words == 0 {
		return;
	}
	let lanes = words / LANE_WORDS;
	let tail = lanes * LANE_WORDS;

	// SAFETY: every load reads `LANE_WORDS` words starting at
	// `lane * LANE_WORDS < tail <= words`, inside `query` or the current row.
	unsafe {
		let mut query_lanes = Vec::with_capacity(lanes);
		for lane in 0..lanes {
			query_lanes.push(_mm256_loadu_si256(
				query.as_ptr().add(lane * LANE_WORDS).cast::<__m256i>(),
			));
		}

		'rows: for (index, row) in rows.chunks_exact(words).enumerate() {
			for (lane, &wanted) in query_lanes.iter().enumerate() {
				let stored =
					_mm256_loadu_si256(row.as_ptr().add(lane * LANE_WORDS).cast::<__m256i>());
				let masked = _mm256_and_si256(stored, wanted);
				let equal = _mm256_cmpeq_epi64(masked, wanted);
				if _mm256_movemask_epi8(equal) != -1 {
					continue 'rows;
				}
			}
			if covers(&row[tail..], &query[tail..]) {
				out.push(index);
			}
		}
	}
}
