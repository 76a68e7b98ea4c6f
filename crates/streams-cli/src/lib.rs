//! Streams CLI library.
//!
//! This crate provides the command-line interface for the streams data
//! service client.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::Config;
