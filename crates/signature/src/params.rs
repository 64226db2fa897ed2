use serde::{Deserialize, Serialize};

use crate::row::{WORD_BITS, words_for};

/// Upper bound applied when deriving a hash count from a load factor.
const MAX_DERIVED_HASHES: u32 = 32;

/// Width and hash count of one signature index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureParams {
	/// Row width in bits; rounded up to whole 64-bit words by the index.
	pub width_bits: usize,
	/// Bit positions set per token (`k`).
	pub hashes: u32,
}

impl SignatureParams {
	/// Creates parameters from an explicit width and hash count.
	pub const fn new(width_bits: usize, hashes: u32) -> Self {
		Self { width_bits, hashes }
	}

	/// Derives parameters from the expected tokens per document and a load factor.
	///
	/// `bits_per_token` is the number of row bits budgeted per token. The hash
	/// count is the classic optimum `bits_per_token * ln 2`, kept within
	/// `1..=32`.
	pub fn for_tokens(tokens_per_document: usize, bits_per_token: f64) -> Self {
		let tokens = tokens_per_document.max(1);
		let bits_per_token = if bits_per_token.is_finite() && bits_per_token > 0.0 {
			bits_per_token
		} else {
			1.0
		};
		let width_bits = words_for((tokens as f64 * bits_per_token).ceil() as usize) * WORD_BITS;
		let hashes = (bits_per_token * std::f64::consts::LN_2).round() as u32;
		Self {
			width_bits,
			hashes: hashes.clamp(1, MAX_DERIVED_HASHES),
		}
	}

	/// Expected false-positive rate of a `query_tokens` query against a row
	/// holding `tokens_per_document` tokens.
	///
	/// Uses the standard approximation `(1 - e^(-k n / W))^(k q)`.
	pub fn estimated_false_positive_rate(
		&self,
		tokens_per_document: usize,
		query_tokens: usize,
	) -> f64 {
		let width = (words_for(self.width_bits) * WORD_BITS) as f64;
		let hashes = f64::from(self.hashes.max(1));
		let fill = 1.0 - (-hashes * tokens_per_document as f64 / width).exp();
		fill.powf(hashes * query_tokens as f64)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn load_factor_rounds_width_to_words() {
		let params = SignatureParams::for_tokens(10, 10.0);
		assert_eq!(params.width_bits, 128);
		assert_eq!(params.hashes, 7);
	}

	#[test]
	fn degenerate_inputs_still_produce_a_usable_shape() {
		let params = SignatureParams::for_tokens(0, f64::NAN);
		assert_eq!(params.width_bits, 64);
		assert_eq!(params.hashes, 1);
	}

	#[test]
	fn hash_count_is_capped() {
		assert_eq!(SignatureParams::for_tokens(1, 1_000.0).hashes, 32);
	}

	#[test]
	fn wider_rows_lower_the_estimate() {
		let narrow = SignatureParams::new(256, 4);
		let wide = SignatureParams::new(4096, 4);
		let narrow_rate = narrow.estimated_false_positive_rate(20, 1);
		let wide_rate = wide.estimated_false_positive_rate(20, 1);
		assert!(wide_rate < narrow_rate);
		assert!(narrow_rate > 0.0 && narrow_rate < 1.0);
	}

	#[test]
	fn empty_query_always_passes() {
		let params = SignatureParams::new(1024, 12);
		assert_eq!(params.estimated_false_positive_rate(10, 0), 1.0);
	}

	#[test]
	fn deserializes_from_plain_fields() {
		let params: SignatureParams =
			serde_json::from_str(r#"{"width_bits": 512, "hashes": 3}"#).unwrap();
		assert_eq!(params, SignatureParams::new(512, 3));
	}
}
