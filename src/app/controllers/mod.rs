//! Controllers - orchestration of domain objects.
//!
//! - `editor` - the toolkit-independent editor core

pub mod editor;

pub use editor::EditorCore;
