//! Configuration loading and resolution utilities.
//!
//! `load` is the primary entry point: it layers default config files, any
//! `--config` additions, environment variables, and CLI overrides, then
//! validates the result into a [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub(crate) use loader::load;
pub(crate) use resolved::ResolvedConfig;
