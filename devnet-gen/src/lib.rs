//! Support library for the `devnet-gen` binary.
//!
//! Exposes the command pipeline so tests can exercise it without spawning a
//! subprocess.

pub mod cli;
pub mod logging;
