//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (DocumentSession, PreferenceSet, ViewState, Messages)
//! - `controllers/` - Orchestration (EditorCore)
//! - `services/` - File access and text helpers
//! - `infrastructure/` - Error type and logging
//! - `state.rs` - Main application coordinator (FLTK side)

pub mod controllers;
pub mod domain;
pub mod file_filters;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::editor::EditorCore;
pub use domain::{
    DocumentSession, FontFamily, Message, ModalMessage, Palette, PreferenceKey, PreferenceSet,
    PreferenceValue, Presenter, SaveStatus, ThemeMode, ViewState,
};
pub use infrastructure::error::{AppError, Result};
pub use services::file_io::{FileIo, FsFileIo};
pub use state::AppState;
