use std::path::{Path, PathBuf};

use fltk::dialog::{FileDialogOptions, FileDialogType, NativeFileChooser};
use tracing::warn;

use crate::app::file_filters::{open_files_filter, save_files_filter};

/// Ask for a file to open. Starts in `dir`, or the home directory.
pub fn native_open_dialog(dir: Option<&Path>) -> Option<PathBuf> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseFile);
    nfc.set_title("Open File");
    nfc.set_filter(&open_files_filter());
    run_chooser(nfc, dir)
}

/// Ask for a destination to save to.
pub fn native_save_dialog(dir: Option<&Path>) -> Option<PathBuf> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseSaveFile);
    nfc.set_title("Save File");
    nfc.set_filter(&save_files_filter());
    nfc.set_option(FileDialogOptions::SaveAsConfirm);
    run_chooser(nfc, dir)
}

fn run_chooser(mut nfc: NativeFileChooser, dir: Option<&Path>) -> Option<PathBuf> {
    if let Some(start) = dir.map(Path::to_path_buf).or_else(dirs::home_dir) {
        if let Err(e) = nfc.set_directory(&start) {
            warn!(dir = %start.display(), error = ?e, "could not set dialog directory");
        }
    }
    nfc.show(); // blocks until close
    let filename = nfc.filename();
    if filename.as_os_str().is_empty() {
        None
    } else {
        Some(filename)
    }
}
