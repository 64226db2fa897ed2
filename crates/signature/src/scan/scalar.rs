//! Portable reference scan.

use crate::row::covers;

/// Word-at-a-time superset scan; the oracle every other backend is held to.
pub fn scan(query: &[u64], rows: &[u64], out: &mut Vec<usize>) {
	let words = query.len();
	if words == 0 {
		return;
	}

	for (index, row) in rows.chunks_exact(words).enumerate() {
		if covers(row, query) {
			out.push(index);
		}
	}
}
