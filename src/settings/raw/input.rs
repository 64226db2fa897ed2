use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::app_dirs;
use crate::cli::CliArgs;

const DEFAULT_STORES_FILE: &str = "stores.json";

/// Where the store records are read from.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct InputSection {
	pub(super) stores: Option<PathBuf>,
}

impl InputSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.stores.clone() {
			self.stores = Some(path);
		}
	}

	pub(super) fn resolve(self) -> Result<PathBuf> {
		self.resolve_with(default_stores_file)
	}

	/// Resolve the stores path, consulting `fallback` when none is configured.
	pub(super) fn resolve_with<F>(self, fallback: F) -> Result<PathBuf>
	where
		F: FnOnce() -> Option<PathBuf>,
	{
		let Some(mut path) = self.stores.or_else(fallback) else {
			bail!("no stores file configured; pass --stores or set input.stores");
		};

		if path.is_relative() {
			path = env::current_dir()
				.context("failed to resolve current directory for the stores file")?
				.join(path);
		}

		Ok(path)
	}
}

fn default_stores_file() -> Option<PathBuf> {
	let path = app_dirs::get_data_dir().ok()?.join(DEFAULT_STORES_FILE);
	path.is_file().then_some(path)
}
