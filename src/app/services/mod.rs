//! Services layer - operations the domain relies on.
//!
//! - `file_io` - filesystem collaborator used for open/save
//! - `text_ops` - pure text helpers (filename, counts)

pub mod file_io;
pub mod text_ops;
