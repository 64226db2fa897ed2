use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod index;
mod input;
mod logging;

use index::IndexSection;
use input::InputSection;
use logging::LoggingSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	input: InputSection,
	index: IndexSection,
	logging: LoggingSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.input.apply_cli_overrides(cli);
		self.index.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			stores: detect_source(
				cli.stores.is_some(),
				self.input.stores.is_some(),
				"BITSIG__INPUT__STORES",
				"--stores",
				"input.stores",
			),
			log_level: self.logging.level.is_some().then(|| {
				SettingSource::env_or_key("BITSIG__LOGGING__LEVEL", "logging.level")
			}),
		};

		let stores = self.input.resolve()?;
		let options = self.index.resolve();
		let log_level = self
			.logging
			.resolve(cli.verbose, &sources)
			.map_err(Error::new)?;

		let config = ResolvedConfig {
			stores,
			options,
			log_level,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	Some(SettingSource::env_or_key(env_var, key))
}

#[cfg(test)]
mod tests;
