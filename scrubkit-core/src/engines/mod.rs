//! This module contains the document engines implementing `RedactionService`.
//!
//! Each engine is a separate file within this directory and walks one
//! document model. To add a new engine, create a new file (e.g.,
//! `yaml_engine.rs`), implement the trait, and declare it here.
//!
//! # License
//! MIT OR Apache-2.0

pub mod json_engine;
