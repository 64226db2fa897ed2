//! Diagnostic logging for the `bitsig` binary.
//!
//! The library crates log through the `log` facade; this module installs a
//! `tracing-subscriber` formatter on stderr that also receives those records,
//! so stdout only ever carries search results.

use anyhow::{Result, anyhow};
use tracing_subscriber::filter::LevelFilter;

/// Install the global subscriber at `level`.
pub fn initialize(level: log::LevelFilter) -> Result<()> {
	tracing_subscriber::fmt()
		.with_max_level(tracing_level(level))
		.with_target(false)
		.with_writer(std::io::stderr)
		.try_init()
		.map_err(|err| anyhow!("failed to initialize logging: {err}"))
}

fn tracing_level(level: log::LevelFilter) -> LevelFilter {
	match level {
		log::LevelFilter::Off => LevelFilter::OFF,
		log::LevelFilter::Error => LevelFilter::ERROR,
		log::LevelFilter::Warn => LevelFilter::WARN,
		log::LevelFilter::Info => LevelFilter::INFO,
		log::LevelFilter::Debug => LevelFilter::DEBUG,
		log::LevelFilter::Trace => LevelFilter::TRACE,
	}
}
