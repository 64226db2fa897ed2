/// Seeds for the two independent derivations of a token hash.
const PRIMARY_SEED: u32 = 0x9e37_79b9;
const STRIDE_SEED: u32 = 0x7f4a_7c15;

/// Deterministic token to bit-position mapping.
///
/// One 32-bit token expands into `hashes` positions in `[0, width_bits)` by
/// double hashing: `position_i = (h1 + i * h2) mod width_bits`. The stride `h2`
/// is always odd, so on power-of-two widths the first `width_bits` positions of
/// a token never cycle early. On other widths two probes of the same token may
/// land on one bit; such a token simply sets fewer than `hashes` bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashFamily {
	hashes: u32,
	width_bits: usize,
}

impl HashFamily {
	/// Creates a family producing `hashes` positions below `width_bits`.
	///
	/// Both values are clamped to at least one.
	pub fn new(hashes: u32, width_bits: usize) -> Self {
		Self {
			hashes: hashes.max(1),
			width_bits: width_bits.max(1),
		}
	}

	/// Number of positions produced per token.
	pub fn hashes(&self) -> u32 {
		self.hashes
	}

	/// Exclusive upper bound of every produced position.
	pub fn width_bits(&self) -> usize {
		self.width_bits
	}

	/// Yields the bit positions for `token`.
	pub fn positions(&self, token: u32) -> impl Iterator<Item = usize> + use<> {
		let h1 = u64::from(mix(token, PRIMARY_SEED));
		let h2 = u64::from(mix(token, STRIDE_SEED) | 1);
		let width = self.width_bits as u64;
		(0..u64::from(self.hashes)).map(move |i| ((h1 + i * h2) % width) as usize)
	}
}

/// Murmur3 finalizer over a seeded input.
#[inline]
fn mix(value: u32, seed: u32) -> u32 {
	let mut x = value ^ seed;
	x ^= x >> 16;
	x = x.wrapping_mul(0x85eb_ca6b);
	x ^= x >> 13;
	x = x.wrapping_mul(0xc2b2_ae35);
	x ^= x >> 16;
	x
}
