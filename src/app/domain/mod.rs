//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - The document session (text, file, saved snapshot)
//! - Display preferences and theme palettes
//! - The view state and presenter contract
//! - Message types for the event system

pub mod document;
pub mod messages;
pub mod preferences;
pub mod view;

pub use document::{DocumentSession, SaveStatus};
pub use messages::Message;
pub use preferences::{FontFamily, Palette, PreferenceKey, PreferenceSet, PreferenceValue, Rgb, ThemeMode};
pub use view::{ModalMessage, Presenter, StatusVisibility, ViewState};
