//! Store records and exact attribute search on top of `bitsig-signature`.
//!
//! [`StoreSearcher`] tokenizes each store's name, coordinates and categories,
//! indexes the tokens as bit signatures and answers name, position and
//! category queries. Index hits are only candidates; each one is checked
//! against the stored record, so results are always exact:
//!
//! ```
//! use bitsig_stores::{Geo, Store, StoreSearcher};
//!
//! let searcher = StoreSearcher::new(vec![
//!     Store::new("store 1", Geo::new(0.5, 0.5), ["category 1", "category 2"]),
//!     Store::new("store 2", Geo::new(0.5, 0.5), ["category 1", "category 404"]),
//! ]);
//!
//! let found = searcher.search_by_name("store 1").unwrap();
//! assert_eq!(found.len(), 1);
//! assert_eq!(searcher.search_by_geo(Geo::new(0.5, 0.5)).unwrap().len(), 2);
//! assert!(searcher.search_by_name("store 3").is_err());
//! ```

mod record;
mod searcher;
pub mod tokenizer;

pub use record::{Geo, Store, load_stores};
pub use searcher::{
	Attribute, DEFAULT_CATEGORY_PARAMS, DEFAULT_COMBINED_PARAMS, DEFAULT_GEO_PARAMS,
	DEFAULT_NAME_PARAMS, IndexLayout, SearchError, SearcherOptions, StoreSearcher,
};
pub use tokenizer::DocumentTokenizer;

pub use bitsig_signature::{IndexStats, ScanBackend, SignatureParams};
