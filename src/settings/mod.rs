//! Configuration loading and resolution utilities.
//!
//! Settings come from default config files, explicit `--config` files,
//! `BITSIG__*` environment variables and CLI flags, in increasing precedence.
//! `load` is the entry point and returns a validated [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
