//! Conversion of store attributes into signature tokens.
//!
//! Build and query paths go through the same functions, so a value always
//! hashes to the same token. Each token is namespaced by its field: the name
//! `"0.5000"` and the latitude `0.5` never share a token, which lets all
//! attributes live in a single index.

use crc32fast::Hasher;

use crate::record::{Geo, Store};

/// Decimal places kept when a coordinate becomes a token.
pub const COORDINATE_PRECISION: usize = 4;

/// Attribute field a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
	Name,
	Latitude,
	Longitude,
	Category,
}

impl Field {
	fn namespace(self) -> u8 {
		match self {
			Field::Name => b'n',
			Field::Latitude => b'y',
			Field::Longitude => b'x',
			Field::Category => b'c',
		}
	}
}

/// Strips every whitespace character.
///
/// `"store 1"` and `"store1"` therefore share a token; the verification step
/// tells them apart.
pub fn normalize(text: &str) -> String {
	text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Formats a coordinate with [`COORDINATE_PRECISION`] decimals.
///
/// `-0.0` compares equal to `0.0`, so both format as `"0.0000"`.
pub fn format_coordinate(value: f64) -> String {
	let value = value + 0.0;
	format!("{value:.COORDINATE_PRECISION$}")
}

/// CRC-32 of the field namespace followed by the normalized value.
pub fn token(field: Field, value: &str) -> u32 {
	let mut hasher = Hasher::new();
	hasher.update(&[field.namespace()]);
	hasher.update(normalize(value).as_bytes());
	hasher.finalize()
}

/// Stateless tokenizer shared by index building and querying.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentTokenizer;

impl DocumentTokenizer {
	/// Single token for the whole name.
	pub fn name_tokens(&self, name: &str) -> Vec<u32> {
		vec![token(Field::Name, name)]
	}

	/// Independent latitude and longitude tokens.
	pub fn geo_tokens(&self, geo: Geo) -> Vec<u32> {
		vec![
			token(Field::Latitude, &format_coordinate(geo.latitude)),
			token(Field::Longitude, &format_coordinate(geo.longitude)),
		]
	}

	/// One token per category label.
	pub fn category_tokens<S: AsRef<str>>(&self, categories: &[S]) -> Vec<u32> {
		categories
			.iter()
			.map(|category| token(Field::Category, category.as_ref()))
			.collect()
	}

	/// Every token of `store`, for an index holding all attributes.
	pub fn document_tokens(&self, store: &Store) -> Vec<u32> {
		let mut tokens = self.name_tokens(&store.name);
		tokens.extend(self.geo_tokens(store.geo));
		tokens.extend(self.category_tokens(&store.categories));
		tokens
	}
}
