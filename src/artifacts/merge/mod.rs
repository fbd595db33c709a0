//! Branch merging
//!
//! - `base_finder`: latest-common-ancestor search over the commit graph
//! - `resolution`: per-path three-way classification and conflict markers

pub mod base_finder;
pub mod resolution;
