//! Syllamap core — errors and configuration shared across crates.

pub mod config;
pub mod error;

pub use config::{DataPaths, SyllamapConfig};
pub use error::{Error, Result};
