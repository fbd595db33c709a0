//! Commit history traversal
//!
//! - `rev_list`: first-parent walk for `log`, plus whole-store enumeration
//!   ordered by recency for `global-log` and `find`

pub mod rev_list;
