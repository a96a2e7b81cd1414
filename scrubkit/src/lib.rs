// scrubkit/src/lib.rs
//! # Scrubkit CLI Application
//!
//! This crate provides the command-line front end for `scrubkit-core`.

pub mod cli;
pub mod commands;
pub mod errors;
pub mod logger;
pub mod ui;

pub use errors::CliError;
