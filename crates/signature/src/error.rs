use thiserror::Error;

/// Errors raised when rows of different widths meet.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SignatureError {
	/// Two signatures (or a signature and an index) disagree on their bit width.
	#[error("signature width mismatch: expected {expected} bits, got {actual} bits")]
	DimensionMismatch { expected: usize, actual: usize },
}
