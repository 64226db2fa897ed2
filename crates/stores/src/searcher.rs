use std::fmt;

use bitsig_signature::{IndexStats, SignatureIndex, SignatureParams};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::{Geo, Store};
use crate::tokenizer::DocumentTokenizer;

/// Shape of the single index used by [`IndexLayout::Combined`].
pub const DEFAULT_COMBINED_PARAMS: SignatureParams = SignatureParams::new(2048, 8);
/// Per-attribute shapes used by [`IndexLayout::PerAttribute`].
pub const DEFAULT_NAME_PARAMS: SignatureParams = SignatureParams::new(1024, 2);
pub const DEFAULT_GEO_PARAMS: SignatureParams = SignatureParams::new(1024, 12);
pub const DEFAULT_CATEGORY_PARAMS: SignatureParams = SignatureParams::new(1024, 12);

/// How store attributes are spread over signature indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IndexLayout {
	/// One index; every attribute's tokens land in the same row.
	#[default]
	Combined,
	/// One index per attribute, each with its own width and hash count.
	PerAttribute,
}

impl IndexLayout {
	pub fn as_str(self) -> &'static str {
		match self {
			IndexLayout::Combined => "combined",
			IndexLayout::PerAttribute => "per-attribute",
		}
	}
}

impl fmt::Display for IndexLayout {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Searchable store attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
	Name,
	Geo,
	Categories,
}

impl Attribute {
	pub fn as_str(self) -> &'static str {
		match self {
			Attribute::Name => "name",
			Attribute::Geo => "geo",
			Attribute::Categories => "categories",
		}
	}
}

impl fmt::Display for Attribute {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Index construction settings for a [`StoreSearcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearcherOptions {
	pub layout: IndexLayout,
	pub combined: SignatureParams,
	pub name: SignatureParams,
	pub geo: SignatureParams,
	pub categories: SignatureParams,
}

impl Default for SearcherOptions {
	fn default() -> Self {
		Self {
			layout: IndexLayout::default(),
			combined: DEFAULT_COMBINED_PARAMS,
			name: DEFAULT_NAME_PARAMS,
			geo: DEFAULT_GEO_PARAMS,
			categories: DEFAULT_CATEGORY_PARAMS,
		}
	}
}

/// Outcome of a search that found nothing after verification.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
	#[error("no store matched the {attribute} query")]
	NotFound { attribute: Attribute },
}

enum Indexes {
	Combined(SignatureIndex),
	PerAttribute {
		name: SignatureIndex,
		geo: SignatureIndex,
		categories: SignatureIndex,
	},
}

impl Indexes {
	fn for_attribute(&self, attribute: Attribute) -> &SignatureIndex {
		match self {
			Indexes::Combined(index) => index,
			Indexes::PerAttribute { name, geo, categories } => match attribute {
				Attribute::Name => name,
				Attribute::Geo => geo,
				Attribute::Categories => categories,
			},
		}
	}
}

/// Exact-match store search backed by signature indexes.
///
/// Signatures only narrow the stores down to candidates; every candidate is
/// compared against the stored record before it is returned, so callers never
/// see a hash collision.
pub struct StoreSearcher {
	stores: Vec<Store>,
	tokenizer: DocumentTokenizer,
	indexes: Indexes,
}

impl StoreSearcher {
	/// Indexes `stores` with the default options.
	pub fn new(stores: Vec<Store>) -> Self {
		Self::with_options(stores, SearcherOptions::default())
	}

	/// Indexes `stores`; store `n` receives document id `n`.
	pub fn with_options(stores: Vec<Store>, options: SearcherOptions) -> Self {
		let tokenizer = DocumentTokenizer;
		let capacity = stores.len();

		let indexes = match options.layout {
			IndexLayout::Combined => {
				let mut index = SignatureIndex::from_params(capacity, options.combined);
				for store in &stores {
					index.add_document(&tokenizer.document_tokens(store));
				}
				Indexes::Combined(index)
			}
			IndexLayout::PerAttribute => {
				let mut name = SignatureIndex::from_params(capacity, options.name);
				let mut geo = SignatureIndex::from_params(capacity, options.geo);
				let mut categories = SignatureIndex::from_params(capacity, options.categories);
				for store in &stores {
					name.add_document(&tokenizer.name_tokens(&store.name));
					geo.add_document(&tokenizer.geo_tokens(store.geo));
					categories.add_document(&tokenizer.category_tokens(&store.categories));
				}
				Indexes::PerAttribute {
					name,
					geo,
					categories,
				}
			}
		};

		log::debug!("indexed {} stores using the {} layout", stores.len(), options.layout);

		Self {
			stores,
			tokenizer,
			indexes,
		}
	}

	/// Stores whose name equals `name` exactly.
	pub fn search_by_name(&self, name: &str) -> Result<Vec<&Store>, SearchError> {
		let tokens = self.tokenizer.name_tokens(name);
		self.verified(Attribute::Name, &tokens, |store| store.name == name)
	}

	/// Stores located exactly at `geo`.
	pub fn search_by_geo(&self, geo: Geo) -> Result<Vec<&Store>, SearchError> {
		let tokens = self.tokenizer.geo_tokens(geo);
		self.verified(Attribute::Geo, &tokens, |store| {
			store.geo.latitude == geo.latitude && store.geo.longitude == geo.longitude
		})
	}

	/// Stores carrying every one of `categories`.
	///
	/// An empty list places no constraint and returns every store.
	pub fn search_by_categories<S: AsRef<str>>(
		&self,
		categories: &[S],
	) -> Result<Vec<&Store>, SearchError> {
		let tokens = self.tokenizer.category_tokens(categories);
		self.verified(Attribute::Categories, &tokens, |store| {
			categories
				.iter()
				.all(|category| store.has_category(category.as_ref()))
		})
	}

	/// Unverified document ids whose `attribute` signature covers `tokens`.
	pub fn candidates(&self, attribute: Attribute, tokens: &[u32]) -> Vec<usize> {
		let index = self.indexes.for_attribute(attribute);
		#[cfg(feature = "parallel")]
		{
			index.query_parallel(tokens)
		}
		#[cfg(not(feature = "parallel"))]
		{
			index.query(tokens)
		}
	}

	fn verified<F>(
		&self,
		attribute: Attribute,
		tokens: &[u32],
		is_match: F,
	) -> Result<Vec<&Store>, SearchError>
	where
		F: Fn(&Store) -> bool,
	{
		let candidates = self.candidates(attribute, tokens);
		let total = candidates.len();
		let matches: Vec<&Store> = candidates
			.into_iter()
			.filter_map(|id| self.stores.get(id))
			.filter(|store| is_match(*store))
			.collect();

		log::debug!(
			"{attribute} query: {total} candidates, {} verified, {} rejected",
			matches.len(),
			total - matches.len()
		);

		if matches.is_empty() {
			Err(SearchError::NotFound { attribute })
		} else {
			Ok(matches)
		}
	}

	/// Store with document id `doc_id`.
	pub fn get(&self, doc_id: usize) -> Option<&Store> {
		self.stores.get(doc_id)
	}

	/// All indexed stores in document id order.
	pub fn stores(&self) -> &[Store] {
		&self.stores
	}

	pub fn len(&self) -> usize {
		self.stores.len()
	}

	pub fn is_empty(&self) -> bool {
		self.stores.is_empty()
	}

	pub fn layout(&self) -> IndexLayout {
		match self.indexes {
			Indexes::Combined(_) => IndexLayout::Combined,
			Indexes::PerAttribute { .. } => IndexLayout::PerAttribute,
		}
	}

	/// Stats for every underlying index, labelled by what it holds.
	pub fn index_stats(&self) -> Vec<(&'static str, IndexStats)> {
		match &self.indexes {
			Indexes::Combined(index) => vec![("combined", index.stats())],
			Indexes::PerAttribute {
				name,
				geo,
				categories,
			} => vec![
				(Attribute::Name.as_str(), name.stats()),
				(Attribute::Geo.as_str(), geo.stats()),
				(Attribute::Categories.as_str(), categories.stats()),
			],
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn per_attribute() -> SearcherOptions {
		SearcherOptions {
			layout: IndexLayout::PerAttribute,
			..SearcherOptions::default()
		}
	}

	fn sample() -> Vec<Store> {
		vec![
			Store::new("store 1", Geo::new(0.6, 0.5), ["category 1", "category 2", "cat"]),
			Store::new("store 2", Geo::new(0.5, 0.5), ["category 1", "category 404", "cat"]),
		]
	}

	#[test]
	fn geo_search_only_returns_the_exact_position() {
		for options in [SearcherOptions::default(), per_attribute()] {
			let searcher = StoreSearcher::with_options(sample(), options);
			let found = searcher.search_by_geo(Geo::new(0.5, 0.5)).unwrap();
			assert_eq!(found, vec![&sample()[1]], "{} layout", options.layout);
		}
	}

	#[test]
	fn shared_categories_return_every_holder() {
		for options in [SearcherOptions::default(), per_attribute()] {
			let searcher = StoreSearcher::with_options(sample(), options);
			let found = searcher.search_by_categories(&["category 1", "cat"]).unwrap();
			assert_eq!(found.len(), 2);
		}
	}

	#[test]
	fn spacing_variants_are_filtered_by_verification() {
		let searcher = StoreSearcher::new(sample());
		let tokens = DocumentTokenizer.name_tokens("store1");
		assert!(searcher.candidates(Attribute::Name, &tokens).contains(&0));
		assert_eq!(
			searcher.search_by_name("store1"),
			Err(SearchError::NotFound {
				attribute: Attribute::Name,
			})
		);
	}

	#[test]
	fn empty_category_list_returns_every_store() {
		let searcher = StoreSearcher::new(sample());
		let none: [&str; 0] = [];
		assert_eq!(searcher.search_by_categories(&none).unwrap().len(), 2);
	}

	#[test]
	fn empty_searcher_reports_not_found() {
		let searcher = StoreSearcher::new(Vec::new());
		assert!(searcher.is_empty());
		assert!(searcher.search_by_name("anything").is_err());
		assert!(searcher.search_by_geo(Geo::default()).is_err());
	}

	#[test]
	fn layout_and_stats_follow_options() {
		let combined = StoreSearcher::new(sample());
		assert_eq!(combined.layout(), IndexLayout::Combined);
		assert_eq!(combined.index_stats().len(), 1);

		let split = StoreSearcher::with_options(sample(), per_attribute());
		assert_eq!(split.layout(), IndexLayout::PerAttribute);
		let stats = split.index_stats();
		assert_eq!(stats.len(), 3);
		assert!(stats.iter().all(|(_, stats)| stats.documents == 2));
		assert_eq!(stats[0].1.hashes, DEFAULT_NAME_PARAMS.hashes);
	}

	#[test]
	fn layout_names_round_trip_through_serde() {
		let layout: IndexLayout = serde_json::from_str("\"per-attribute\"").unwrap();
		assert_eq!(layout, IndexLayout::PerAttribute);
		assert_eq!(layout.to_string(), "per-attribute");
	}

	#[test]
	fn not_found_names_the_attribute() {
		let err = SearchError::NotFound {
			attribute: Attribute::Categories,
		};
		assert_eq!(err.to_string(), "no store matched the categories query");
	}
}
