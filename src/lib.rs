//! PlainPad - a distraction-free plain-text notepad.
//!
//! `app` holds the toolkit-independent editor core (document session,
//! preferences, view contract) and its coordinator; `ui` is the FLTK
//! presentation layer that implements [`app::Presenter`].

pub mod app;
pub mod ui;
