//! What the core tells the presentation layer.
//!
//! [`ViewState`] is derived on demand from the session and preferences and
//! handed to a [`Presenter`] after every state change. Nothing here knows
//! about widgets, pixels or colors beyond the palette roles.

use super::document::DocumentSession;
use super::preferences::{FontFamily, Palette, PreferenceKey, PreferenceSet, ThemeMode};

/// Which optional status-bar fields are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusVisibility {
    pub file: bool,
    pub font: bool,
    pub word_count: bool,
    pub char_count: bool,
    pub font_size: bool,
    pub margin: bool,
}

impl StatusVisibility {
    pub fn from_preferences(prefs: &PreferenceSet) -> Self {
        Self {
            file: prefs.flag(PreferenceKey::ShowActualFile),
            font: prefs.flag(PreferenceKey::ShowActualFont),
            word_count: prefs.flag(PreferenceKey::ShowWordCount),
            char_count: prefs.flag(PreferenceKey::ShowCharCount),
            font_size: prefs.flag(PreferenceKey::ShowFontSize),
            margin: prefs.flag(PreferenceKey::ShowMarginSize),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub title: String,
    pub is_dirty: bool,
    pub char_count: usize,
    pub word_count: usize,
    pub font: FontFamily,
    pub font_size: u32,
    pub margin: u32,
    pub theme: ThemeMode,
    pub palette: Palette,
    pub wrap_text: bool,
    pub visibility: StatusVisibility,
    pub preferences_open: bool,
}

impl ViewState {
    pub fn compute(session: &DocumentSession, prefs: &PreferenceSet, preferences_open: bool) -> Self {
        Self {
            title: session.title(),
            is_dirty: session.is_dirty(),
            char_count: session.char_count(),
            word_count: session.word_count(),
            font: prefs.font(),
            font_size: prefs.font_size(),
            margin: prefs.margin(),
            theme: prefs.theme(),
            palette: prefs.palette(),
            wrap_text: prefs.flag(PreferenceKey::WrapText),
            visibility: StatusVisibility::from_preferences(prefs),
            preferences_open,
        }
    }

    /// Current value of an on/off preference as carried by this view.
    pub fn flag(&self, key: PreferenceKey) -> bool {
        match key {
            PreferenceKey::WrapText => self.wrap_text,
            PreferenceKey::ShowActualFont => self.visibility.font,
            PreferenceKey::ShowActualFile => self.visibility.file,
            PreferenceKey::ShowWordCount => self.visibility.word_count,
            PreferenceKey::ShowCharCount => self.visibility.char_count,
            PreferenceKey::ShowFontSize => self.visibility.font_size,
            PreferenceKey::ShowMarginSize => self.visibility.margin,
        }
    }

    pub fn char_label(&self) -> String {
        format!("C: {}", self.char_count)
    }

    pub fn word_label(&self) -> String {
        format!("W: {}", self.word_count)
    }

    pub fn font_size_label(&self) -> String {
        format!("FS: {}", self.font_size)
    }

    pub fn margin_label(&self) -> String {
        format!("M: {}", self.margin)
    }
}

/// A popup request: the text plus whether only an OK button is offered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalMessage {
    pub text: String,
    pub ok_only: bool,
}

impl ModalMessage {
    pub fn new(text: impl Into<String>, ok_only: bool) -> Self {
        Self {
            text: text.into(),
            ok_only,
        }
    }
}

/// Implemented by the presentation layer; driven by the editor core.
pub trait Presenter {
    /// Re-render from the given state. Called after every state change.
    fn render(&mut self, view: &ViewState);

    /// The core replaced the buffer (new document, opened file).
    fn replace_text(&mut self, text: &str);

    fn show_message(&mut self, message: &ModalMessage);

    fn dismiss_message(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_of_fresh_editor() {
        let view = ViewState::compute(&DocumentSession::new(), &PreferenceSet::default(), false);
        assert_eq!(view.title, "Untitled");
        assert!(!view.is_dirty);
        assert_eq!(view.char_count, 0);
        assert_eq!(view.word_count, 0);
        assert!(view.wrap_text);
        assert!(view.visibility.file && view.visibility.font);
        assert!(view.visibility.word_count && view.visibility.char_count);
        assert!(!view.visibility.font_size && !view.visibility.margin);
        assert!(!view.preferences_open);
    }

    #[test]
    fn test_status_labels() {
        let mut session = DocumentSession::new();
        session.set_text("hello   world");
        let view = ViewState::compute(&session, &PreferenceSet::default(), false);
        assert_eq!(view.char_label(), "C: 13");
        assert_eq!(view.word_label(), "W: 2");
        assert_eq!(view.font_size_label(), "FS: 16");
        assert_eq!(view.margin_label(), "M: 10");
    }

    #[test]
    fn test_visibility_follows_flags() {
        let mut prefs = PreferenceSet::default();
        prefs.set_flag(PreferenceKey::ShowWordCount, false);
        prefs.set_flag(PreferenceKey::ShowMarginSize, true);
        let visibility = StatusVisibility::from_preferences(&prefs);
        assert!(!visibility.word_count);
        assert!(visibility.margin);
        assert!(visibility.char_count);
    }

    #[test]
    fn test_view_flags_match_preferences() {
        let mut prefs = PreferenceSet::default();
        prefs.set_flag(PreferenceKey::WrapText, false);
        prefs.set_flag(PreferenceKey::ShowFontSize, true);
        let view = ViewState::compute(&DocumentSession::new(), &prefs, false);
        for key in PreferenceKey::all() {
            assert_eq!(view.flag(*key), prefs.flag(*key), "{}", key.name());
        }
    }
}
