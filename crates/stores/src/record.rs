use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Geographic position of a store.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Geo {
	pub latitude: f64,
	pub longitude: f64,
}

impl Geo {
	pub fn new(latitude: f64, longitude: f64) -> Self {
		Self {
			latitude,
			longitude,
		}
	}
}

/// One searchable store record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Store {
	pub name: String,
	pub geo: Geo,
	#[serde(default)]
	pub categories: Vec<String>,
}

impl Store {
	pub fn new<N, C, I>(name: N, geo: Geo, categories: I) -> Self
	where
		N: Into<String>,
		C: Into<String>,
		I: IntoIterator<Item = C>,
	{
		Self {
			name: name.into(),
			geo,
			categories: categories.into_iter().map(Into::into).collect(),
		}
	}

	/// True when `category` is one of this store's labels, compared verbatim.
	pub fn has_category(&self, category: &str) -> bool {
		self.categories.iter().any(|own| own == category)
	}
}

/// Read a JSON array of stores from `path`.
pub fn load_stores(path: &Path) -> Result<Vec<Store>> {
	let contents = fs::read_to_string(path)
		.with_context(|| format!("failed to read stores from {}", path.display()))?;
	serde_json::from_str(&contents)
		.with_context(|| format!("failed to parse stores in {}", path.display()))
}
