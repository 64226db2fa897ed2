use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}

#[cfg(test)]
mod tests {
	use std::fs;

	use bitsig_stores::IndexLayout;
	use clap::Parser;
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn explicit_config_file_is_merged() {
		let dir = tempdir().unwrap();
		let stores = dir.path().join("stores.json");
		fs::write(&stores, "[]").unwrap();
		let config = dir.path().join("custom.toml");
		let contents = format!(
			"[input]\nstores = {:?}\n\n[index]\nlayout = \"per-attribute\"\n\n[index.geo]\nwidth_bits = 512\nhashes = 6\n",
			stores.display().to_string()
		);
		fs::write(&config, contents).unwrap();

		let config = config.display().to_string();
		let cli =
			CliArgs::parse_from(["bitsig", "--no-config", "--config", config.as_str(), "stats"]);
		let resolved = load(&cli).unwrap();

		assert_eq!(resolved.stores, stores);
		assert_eq!(resolved.options.layout, IndexLayout::PerAttribute);
		assert_eq!(resolved.options.geo.width_bits, 512);
		assert_eq!(resolved.options.geo.hashes, 6);
	}

	#[test]
	fn missing_config_file_is_an_error() {
		let dir = tempdir().unwrap();
		let missing = dir.path().join("absent.toml");
		let missing = missing.display().to_string();
		let cli =
			CliArgs::parse_from(["bitsig", "--no-config", "--config", missing.as_str(), "stats"]);
		assert!(load(&cli).is_err());
	}

	#[test]
	fn invalid_parameters_are_rejected_with_their_key() {
		let dir = tempdir().unwrap();
		let stores = dir.path().join("stores.json");
		fs::write(&stores, "[]").unwrap();
		let config = dir.path().join("bad.toml");
		fs::write(&config, "[index.name]\nhashes = 0\n").unwrap();

		let config = config.display().to_string();
		let stores = stores.display().to_string();
		let cli = CliArgs::parse_from([
			"bitsig",
			"--no-config",
			"--config",
			config.as_str(),
			"--stores",
			stores.as_str(),
			"stats",
		]);
		let err = load(&cli).unwrap_err();
		assert!(err.to_string().contains("index.name.hashes"), "{err}");
	}
}
