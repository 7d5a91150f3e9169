//! Common utilities module
//!
//! This module contains shared utilities used across the colour pipeline.

pub mod error;

pub use error::{ColorPipelineError, Result};
