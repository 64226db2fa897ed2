use std::path::PathBuf;

use bitsig_stores::SearcherOptions;
use log::LevelFilter;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Search-ready configuration derived from user input, config files and
/// built-in defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	/// Absolute path of the JSON stores file.
	pub stores: PathBuf,
	pub options: SearcherOptions,
	pub log_level: LevelFilter,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
