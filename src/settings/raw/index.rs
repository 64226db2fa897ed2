use bitsig_stores::{IndexLayout, SearcherOptions, SignatureParams};
use serde::Deserialize;

use crate::cli::CliArgs;

/// Index layout and per-index shapes as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct IndexSection {
	pub(super) layout: Option<IndexLayout>,
	pub(super) combined: ParamsSection,
	pub(super) name: ParamsSection,
	pub(super) geo: ParamsSection,
	pub(super) categories: ParamsSection,
}

/// Width and hash count of one index; unset fields keep the built-in default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ParamsSection {
	pub(super) width_bits: Option<usize>,
	pub(super) hashes: Option<u32>,
}

impl ParamsSection {
	fn over(&self, default: SignatureParams) -> SignatureParams {
		SignatureParams {
			width_bits: self.width_bits.unwrap_or(default.width_bits),
			hashes: self.hashes.unwrap_or(default.hashes),
		}
	}
}

impl IndexSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(layout) = cli.layout {
			self.layout = Some(layout.layout());
		}
	}

	pub(super) fn resolve(&self) -> SearcherOptions {
		let defaults = SearcherOptions::default();
		SearcherOptions {
			layout: self.layout.unwrap_or(defaults.layout),
			combined: self.combined.over(defaults.combined),
			name: self.name.over(defaults.name),
			geo: self.geo.over(defaults.geo),
			categories: self.categories.over(defaults.categories),
		}
	}
}
