//! Signature-file engine backing the `bitsig` store searcher.
//!
//! Every document is reduced to one fixed-width bit vector (its signature):
//! each token sets `k` bits chosen by a [`HashFamily`], and the row is the OR of
//! all token contributions. A query is encoded the same way and answered by a
//! batch scan returning every row whose bits are a superset of the query's.
//!
//! The answer is approximate in one direction only: a document that holds all
//! queried tokens is always returned, but unrelated rows may pass the superset
//! test when their bits happen to cover the query. Callers re-check candidates
//! against the source records.
//!
//! ```
//! use bitsig_signature::SignatureIndex;
//!
//! let mut index = SignatureIndex::new(16, 256, 4);
//! let first = index.add_document(&[11, 42]);
//! let second = index.add_document(&[42]);
//! assert_eq!((first, second), (0, 1));
//!
//! let hits = index.query(&[11, 42]);
//! assert!(hits.contains(&first));
//! ```

mod error;
mod hash;
mod index;
mod params;
mod row;
pub mod scan;

pub use error::SignatureError;
pub use hash::HashFamily;
pub use index::{IndexStats, SignatureIndex};
pub use params::SignatureParams;
pub use row::{SignatureRow, WORD_BITS};
pub use scan::ScanBackend;
