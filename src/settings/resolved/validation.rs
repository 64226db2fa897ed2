use bitsig_stores::{SearcherOptions, SignatureParams};

use super::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

/// Accepted signature widths in bits.
const WIDTH_RANGE: std::ops::RangeInclusive<usize> = 64..=(1 << 20);
/// Accepted hash counts per token.
const HASH_RANGE: std::ops::RangeInclusive<u32> = 1..=64;

struct ParamKeys {
	width_key: &'static str,
	width_env: &'static str,
	hashes_key: &'static str,
	hashes_env: &'static str,
	params: fn(&SearcherOptions) -> SignatureParams,
}

const PARAM_KEYS: [ParamKeys; 4] = [
	ParamKeys {
		width_key: "index.combined.width_bits",
		width_env: "BITSIG__INDEX__COMBINED__WIDTH_BITS",
		hashes_key: "index.combined.hashes",
		hashes_env: "BITSIG__INDEX__COMBINED__HASHES",
		params: |options| options.combined,
	},
	ParamKeys {
		width_key: "index.name.width_bits",
		width_env: "BITSIG__INDEX__NAME__WIDTH_BITS",
		hashes_key: "index.name.hashes",
		hashes_env: "BITSIG__INDEX__NAME__HASHES",
		params: |options| options.name,
	},
	ParamKeys {
		width_key: "index.geo.width_bits",
		width_env: "BITSIG__INDEX__GEO__WIDTH_BITS",
		hashes_key: "index.geo.hashes",
		hashes_env: "BITSIG__INDEX__GEO__HASHES",
		params: |options| options.geo,
	},
	ParamKeys {
		width_key: "index.categories.width_bits",
		width_env: "BITSIG__INDEX__CATEGORIES__WIDTH_BITS",
		hashes_key: "index.categories.hashes",
		hashes_env: "BITSIG__INDEX__CATEGORIES__HASHES",
		params: |options| options.categories,
	},
];

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if !config.stores.is_file() {
		return Err(ConfigError::invalid(
			"input.stores",
			config.stores.display().to_string(),
			sources.source_for_stores(),
			"must point at an existing file",
		));
	}

	for keys in &PARAM_KEYS {
		let params = (keys.params)(&config.options);

		if !WIDTH_RANGE.contains(&params.width_bits) {
			return Err(ConfigError::invalid(
				keys.width_key,
				params.width_bits.to_string(),
				SettingSource::env_or_key(keys.width_env, keys.width_key),
				format!(
					"must be between {} and {}",
					WIDTH_RANGE.start(),
					WIDTH_RANGE.end()
				),
			));
		}

		if !HASH_RANGE.contains(&params.hashes) {
			return Err(ConfigError::invalid(
				keys.hashes_key,
				params.hashes.to_string(),
				SettingSource::env_or_key(keys.hashes_env, keys.hashes_key),
				format!(
					"must be between {} and {}",
					HASH_RANGE.start(),
					HASH_RANGE.end()
				),
			));
		}
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use log::LevelFilter;
	use tempfile::NamedTempFile;

	use super::*;

	fn config_with(stores: &NamedTempFile, options: SearcherOptions) -> ResolvedConfig {
		ResolvedConfig {
			stores: stores.path().to_path_buf(),
			options,
			log_level: LevelFilter::Warn,
		}
	}

	#[test]
	fn defaults_are_valid() {
		let stores = NamedTempFile::new().unwrap();
		let config = config_with(&stores, SearcherOptions::default());
		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_zero_hashes() {
		let stores = NamedTempFile::new().unwrap();
		let options = SearcherOptions {
			categories: SignatureParams::new(1024, 0),
			..SearcherOptions::default()
		};
		let config = config_with(&stores, options);

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "index.categories.hashes");
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("configuration key"));
	}

	#[test]
	fn validation_rejects_narrow_signatures() {
		let stores = NamedTempFile::new().unwrap();
		let options = SearcherOptions {
			combined: SignatureParams::new(8, 4),
			..SearcherOptions::default()
		};
		let config = config_with(&stores, options);

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "index.combined.width_bits");
		assert!(err.to_string().contains("value: 8"));
	}

	#[test]
	fn validation_reports_the_stores_flag() {
		let dir = tempfile::tempdir().unwrap();
		let config = ResolvedConfig {
			stores: dir.path().to_path_buf(),
			options: SearcherOptions::default(),
			log_level: LevelFilter::Warn,
		};
		let sources = ConfigSources {
			stores: Some(SettingSource::CliFlag("--stores")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "input.stores");
		assert!(err.to_string().contains("CLI flag"));
	}
}
