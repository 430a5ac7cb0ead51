use std::path::{Path, PathBuf};

use tracing::debug;

use super::controllers::editor::EditorCore;
use super::domain::document::SaveStatus;
use super::domain::messages::Message;
use super::services::file_io::FsFileIo;
use crate::ui::file_dialogs::{native_open_dialog, native_save_dialog};
use crate::ui::view::FltkView;

/// Main application coordinator: the editor core wired to the FLTK view and
/// the real filesystem, plus the native file dialogs the core leaves to the UI.
pub struct AppState {
    pub core: EditorCore<FltkView, FsFileIo>,
    /// Last directory used in a file open/save dialog.
    pub last_open_directory: Option<PathBuf>,
}

impl AppState {
    pub fn new(view: FltkView) -> Self {
        let mut core = EditorCore::new(view, FsFileIo);
        core.presenter_mut().focus_editor();
        Self {
            core,
            last_open_directory: None,
        }
    }

    /// Dispatch one message. Returns `true` when the app should exit.
    pub fn handle(&mut self, msg: Message) -> bool {
        match msg {
            Message::FileNew => self.core.file_new(),
            Message::FileOpen => self.file_open(),
            Message::FileSave => self.file_save(),
            Message::FileSaveAs => self.file_save_as(),
            Message::FileQuit => return true,

            Message::BufferModified => {
                let text = self.core.presenter().text();
                self.core.set_text(&text);
            }

            Message::IncreaseFontSize => {
                self.core.increase_font_size();
            }
            Message::DecreaseFontSize => {
                self.core.decrease_font_size();
            }
            Message::IncreaseMargin => {
                self.core.increase_margin();
            }
            Message::DecreaseMargin => {
                self.core.decrease_margin();
            }
            Message::NextFont => {
                self.core.next_font();
            }
            Message::ToggleTheme => {
                self.core.toggle_theme();
            }

            Message::ShowPreferences => self.core.show_preferences(),
            Message::ClosePreferences => {
                self.core.close_preferences();
                self.core.presenter_mut().focus_editor();
            }
            Message::ShowPreferencesPage(page) => self.core.presenter_mut().show_preferences_page(page),
            Message::SetPreference(key, on) => self.core.set_preference(key, on),

            Message::DismissMessage => self.core.dismiss_message(),
        }
        false
    }

    // --- File operations ---

    pub fn file_open(&mut self) {
        if let Some(path) = native_open_dialog(self.last_open_directory.as_deref()) {
            self.remember_directory(&path);
            // Failures are already reported through the popup
            if let Err(e) = self.core.open_path(path) {
                debug!(error = %e, "open aborted");
            }
        }
    }

    pub fn file_save(&mut self) {
        match self.core.save() {
            Ok(SaveStatus::Saved) => {}
            Ok(SaveStatus::PathRequired) => self.file_save_as(),
            Err(e) => debug!(error = %e, "save aborted"),
        }
    }

    pub fn file_save_as(&mut self) {
        if let Some(path) = native_save_dialog(self.last_open_directory.as_deref()) {
            self.remember_directory(&path);
            if let Err(e) = self.core.save_as(path) {
                debug!(error = %e, "save as aborted");
            }
        }
    }

    fn remember_directory(&mut self, path: &Path) {
        if let Some(parent) = path.parent() {
            self.last_open_directory = Some(parent.to_path_buf());
        }
    }
}
