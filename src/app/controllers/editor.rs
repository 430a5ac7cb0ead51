use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::app::domain::document::{DocumentSession, SaveStatus};
use crate::app::domain::preferences::{FontFamily, Palette, PreferenceKey, PreferenceSet};
use crate::app::domain::view::{ModalMessage, Presenter, ViewState};
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::file_io::FileIo;

pub const OPEN_FAILED_MESSAGE: &str = "Error: Unable to open the file.";
pub const SAVE_FAILED_MESSAGE: &str = "Error: Unable to save the file.";

/// Toolkit-independent editor: one document, its preferences, and the
/// presenter that is told about every change.
pub struct EditorCore<P: Presenter, F: FileIo> {
    session: DocumentSession,
    prefs: PreferenceSet,
    presenter: P,
    files: F,
    pending_message: Option<ModalMessage>,
    preferences_open: bool,
}

impl<P: Presenter, F: FileIo> EditorCore<P, F> {
    /// Create the core with default preferences and render the initial view.
    pub fn new(presenter: P, files: F) -> Self {
        let mut core = Self {
            session: DocumentSession::new(),
            prefs: PreferenceSet::default(),
            presenter,
            files,
            pending_message: None,
            preferences_open: false,
        };
        core.render();
        core
    }

    pub fn session(&self) -> &DocumentSession {
        &self.session
    }

    pub fn preferences(&self) -> &PreferenceSet {
        &self.prefs
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn pending_message(&self) -> Option<&ModalMessage> {
        self.pending_message.as_ref()
    }

    pub fn is_preferences_open(&self) -> bool {
        self.preferences_open
    }

    pub fn view_state(&self) -> ViewState {
        ViewState::compute(&self.session, &self.prefs, self.preferences_open)
    }

    fn render(&mut self) {
        let view = self.view_state();
        self.presenter.render(&view);
    }

    // --- File operations ---

    pub fn file_new(&mut self) {
        self.session.reset();
        self.presenter.replace_text("");
        self.render();
    }

    /// Read `path` and make it the current document.
    ///
    /// On failure the session is unchanged and an error popup is requested.
    /// Text with NUL bytes is refused since the text widget cuts it short.
    pub fn open_path(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        let content = self
            .files
            .read(&path)
            .and_then(|text| reject_nul(&path, text));
        if let Err(e) = self.session.open(path.clone(), content) {
            warn!(error = %e, "open failed");
            self.show_message(ModalMessage::new(OPEN_FAILED_MESSAGE, true));
            return Err(e);
        }

        info!(path = %path.display(), "opened document");
        let text = self.session.text().to_string();
        self.presenter.replace_text(&text);
        self.render();
        Ok(())
    }

    /// Save to the current file. Returns `PathRequired` for an untitled
    /// document; the caller then asks for a destination and uses `save_as`.
    pub fn save(&mut self) -> Result<SaveStatus> {
        let result = self.session.save(&mut self.files);
        self.finish_save(result)
    }

    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> Result<SaveStatus> {
        let result = self.session.save_as(path, &mut self.files);
        self.finish_save(result)
    }

    fn finish_save(&mut self, result: Result<SaveStatus>) -> Result<SaveStatus> {
        match result {
            Ok(SaveStatus::Saved) => {
                self.render();
                Ok(SaveStatus::Saved)
            }
            Ok(SaveStatus::PathRequired) => Ok(SaveStatus::PathRequired),
            Err(e) => {
                warn!(error = %e, "save failed");
                self.show_message(ModalMessage::new(SAVE_FAILED_MESSAGE, true));
                Err(e)
            }
        }
    }

    /// Record the widget's current text. Re-renders only on change.
    pub fn set_text(&mut self, text: &str) {
        if self.session.text() == text {
            return;
        }
        self.session.set_text(text);
        self.render();
    }

    // --- Preferences ---

    pub fn set_preference(&mut self, key: PreferenceKey, on: bool) {
        self.prefs.set_flag(key, on);
        self.render();
    }

    pub fn toggle_theme(&mut self) -> Palette {
        let palette = self.prefs.toggle_theme();
        debug!(theme = ?self.prefs.theme(), "theme toggled");
        self.render();
        palette
    }

    pub fn next_font(&mut self) -> FontFamily {
        let font = self.prefs.next_font();
        self.render();
        font
    }

    pub fn increase_font_size(&mut self) -> u32 {
        let size = self.prefs.increase_font_size();
        self.render();
        size
    }

    pub fn decrease_font_size(&mut self) -> u32 {
        let size = self.prefs.decrease_font_size();
        self.render();
        size
    }

    pub fn increase_margin(&mut self) -> u32 {
        let margin = self.prefs.increase_margin();
        self.render();
        margin
    }

    pub fn decrease_margin(&mut self) -> u32 {
        let margin = self.prefs.decrease_margin();
        self.render();
        margin
    }

    // --- Dialogs ---

    /// Open the preferences dialog unless it is already open.
    pub fn show_preferences(&mut self) {
        if self.preferences_open {
            return;
        }
        self.preferences_open = true;
        self.render();
    }

    pub fn close_preferences(&mut self) {
        if !self.preferences_open {
            return;
        }
        self.preferences_open = false;
        self.render();
    }

    /// Request a popup. A pending one is dismissed first.
    pub fn show_message(&mut self, message: ModalMessage) {
        if self.pending_message.take().is_some() {
            self.presenter.dismiss_message();
        }
        self.presenter.show_message(&message);
        self.pending_message = Some(message);
    }

    pub fn dismiss_message(&mut self) {
        if self.pending_message.take().is_some() {
            self.presenter.dismiss_message();
        }
    }
}

fn reject_nul(path: &Path, text: String) -> Result<String> {
    if text.contains('\0') {
        return Err(AppError::Read {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidData, "file contains NUL bytes"),
        });
    }
    Ok(text)
}
