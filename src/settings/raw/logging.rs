use log::LevelFilter;
use serde::Deserialize;

use super::super::resolved::{ConfigError, ConfigSources};

const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Logging settings as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) level: Option<String>,
}

impl LoggingSection {
	/// Parse the configured level and raise it by one step per `-v`.
	pub(super) fn resolve(
		&self,
		verbose: u8,
		sources: &ConfigSources,
	) -> Result<LevelFilter, ConfigError> {
		let base = match &self.level {
			Some(level) => level.trim().parse::<LevelFilter>().map_err(|_| {
				ConfigError::invalid(
					"logging.level",
					level.clone(),
					sources.source_for_log_level(),
					"expected one of off, error, warn, info, debug, trace",
				)
			})?,
			None => DEFAULT_LEVEL,
		};

		Ok(base.max(level_for_verbosity(verbose)))
	}
}

fn level_for_verbosity(verbose: u8) -> LevelFilter {
	match verbose {
		0 => LevelFilter::Off,
		1 => LevelFilter::Info,
		2 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	}
}
