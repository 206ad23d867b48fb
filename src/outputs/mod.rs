//! Output generation.
//!
//! - [`json`]: writes the collected articles as a single JSON array

pub mod json;
