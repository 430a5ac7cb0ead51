pub mod popup;
pub mod preferences;
