//! File-based logging for the plugin.
//!
//! A Zellij plugin has no terminal of its own to log to, so all `tracing`
//! output is written to a rotating file in the plugin data directory:
//! `~/.local/share/zellij/reelfinder/reelfinder.log`. Files rotate at 5MB with
//! three backups retained.
//!
//! The trace level comes from the `trace_level` plugin configuration key
//! (default `"info"`); the value is an `EnvFilter` directive, so per-module
//! overrides like `"info,reelfinder::api=debug"` work too.
//!
//! # Modules
//!
//! - [`init`]: subscriber setup
//! - [`file_writer`]: rotating file writer shared by both threads

mod file_writer;
mod init;

pub use init::init_tracing;
