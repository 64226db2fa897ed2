use std::path::PathBuf;

use bitsig_stores::{IndexLayout, SearcherOptions};
use clap::Parser;
use log::LevelFilter;

use super::RawConfig;
use super::index::ParamsSection;
use super::input::InputSection;
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"bitsig",
		"--stores",
		"/tmp/from-cli.json",
		"--layout",
		"per-attribute",
		"stats",
	]);

	let mut config = RawConfig::default();
	config.input.stores = Some(PathBuf::from("/tmp/from-file.json"));
	config.index.layout = Some(IndexLayout::Combined);
	config.apply_cli_overrides(&cli);

	assert_eq!(config.input.stores, Some(PathBuf::from("/tmp/from-cli.json")));
	assert_eq!(config.index.layout, Some(IndexLayout::PerAttribute));
}

#[test]
fn file_values_survive_without_cli_flags() {
	let cli = CliArgs::parse_from(["bitsig", "stats"]);

	let mut config = RawConfig::default();
	config.index.layout = Some(IndexLayout::PerAttribute);
	config.apply_cli_overrides(&cli);

	assert_eq!(config.index.layout, Some(IndexLayout::PerAttribute));
	assert!(config.input.stores.is_none());
}

#[test]
fn unset_params_fall_back_to_defaults() {
	let mut config = RawConfig::default();
	config.index.name = ParamsSection {
		width_bits: Some(4096),
		hashes: None,
	};

	let options = config.index.resolve();
	let defaults = SearcherOptions::default();
	assert_eq!(options.name.width_bits, 4096);
	assert_eq!(options.name.hashes, defaults.name.hashes);
	assert_eq!(options.geo, defaults.geo);
	assert_eq!(options.layout, IndexLayout::Combined);
}

#[test]
fn verbosity_raises_the_configured_level() {
	let sources = super::ConfigSources::default();
	let mut config = RawConfig::default();

	assert_eq!(config.logging.resolve(0, &sources).unwrap(), LevelFilter::Warn);
	assert_eq!(config.logging.resolve(2, &sources).unwrap(), LevelFilter::Debug);

	config.logging.level = Some("trace".into());
	assert_eq!(config.logging.resolve(1, &sources).unwrap(), LevelFilter::Trace);

	config.logging.level = Some("loud".into());
	let err = config.logging.resolve(0, &sources).unwrap_err();
	assert_eq!(err.key, "logging.level");
}

#[test]
fn missing_stores_path_is_reported() {
	let err = InputSection { stores: None }
		.resolve_with(|| None)
		.unwrap_err();
	assert!(err.to_string().contains("--stores"));
}

#[test]
fn default_stores_file_fills_a_missing_path() {
	let fallback = PathBuf::from("/data/bitsig/stores.json");
	let resolved = InputSection { stores: None }
		.resolve_with(|| Some(fallback.clone()))
		.unwrap();
	assert_eq!(resolved, fallback);
}

#[test]
fn configured_stores_path_wins_over_the_default_file() {
	let configured = PathBuf::from("/tmp/configured.json");
	let resolved = InputSection {
		stores: Some(configured.clone()),
	}
	.resolve_with(|| Some(PathBuf::from("/data/bitsig/stores.json")))
	.unwrap();
	assert_eq!(resolved, configured);
}
