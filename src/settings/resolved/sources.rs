use std::env;
use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl SettingSource {
	/// Environment variable when it is set, otherwise the configuration key.
	pub(crate) fn env_or_key(env_var: &'static str, key: &'static str) -> Self {
		if env::var_os(env_var).is_some() {
			Self::Environment(env_var)
		} else {
			Self::ConfigKey(key)
		}
	}
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) stores: Option<SettingSource>,
	pub(crate) log_level: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_stores(&self) -> SettingSource {
		self.stores
			.clone()
			.unwrap_or(SettingSource::ConfigKey("input.stores"))
	}

	pub(crate) fn source_for_log_level(&self) -> SettingSource {
		self.log_level
			.clone()
			.unwrap_or(SettingSource::ConfigKey("logging.level"))
	}
}
