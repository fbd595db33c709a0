//! Working tree status inspection
//!
//! This module classifies working-tree paths against the staging area and
//! renders the `status` report.
//!
//! ## Components
//!
//! - `file_change`: Kinds of unstaged changes
//! - `report`: Report construction and display

pub mod file_change;
pub mod report;
