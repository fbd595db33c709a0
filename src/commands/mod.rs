//! Gitlet command implementations, one module per command
//!
//! Each command is an `impl Repository` block so the dispatcher in `main`
//! stays a thin argument parser. Commands report through the repository
//! writer and surface contractual failures as
//! [`GitletError`](crate::errors::GitletError) values the dispatcher prints.

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod find;
pub mod global_log;
pub mod init;
pub mod log;
pub mod merge;
pub mod remove;
pub mod remove_branch;
pub mod reset;
pub mod status;
