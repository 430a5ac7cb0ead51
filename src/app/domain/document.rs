use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::app::infrastructure::error::Result;
use crate::app::services::file_io::FileIo;
use crate::app::services::text_ops::{char_count, extract_filename, word_count};

/// Title shown for a document that has never been saved.
pub const UNTITLED: &str = "Untitled";

/// Appended to the title while the buffer differs from the saved snapshot.
pub const DIRTY_MARKER: &str = " *";

/// Outcome of [`DocumentSession::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    Saved,
    /// No backing file yet; the caller has to pick one and use `save_as`.
    PathRequired,
}

/// The single open document: its text, backing file and last saved state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSession {
    buffer_text: String,
    file_path: Option<PathBuf>,
    saved_snapshot: String,
}

impl DocumentSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the current document and start an empty, unsaved one.
    pub fn reset(&mut self) {
        self.buffer_text.clear();
        self.file_path = None;
        self.saved_snapshot.clear();
    }

    /// Adopt content that was read from `path`.
    ///
    /// `content` is the outcome of the read; an error is returned unchanged
    /// and leaves the session as it was.
    pub fn open(&mut self, path: impl Into<PathBuf>, content: Result<String>) -> Result<()> {
        let content = content?;
        self.saved_snapshot = content.clone();
        self.buffer_text = content;
        self.file_path = Some(path.into());
        Ok(())
    }

    /// Write the buffer to the backing file.
    pub fn save(&mut self, writer: &mut impl FileIo) -> Result<SaveStatus> {
        let Some(path) = self.file_path.as_deref() else {
            return Ok(SaveStatus::PathRequired);
        };

        writer.write(path, &self.buffer_text)?;
        info!(path = %path.display(), bytes = self.buffer_text.len(), "saved document");
        self.saved_snapshot.clone_from(&self.buffer_text);
        Ok(SaveStatus::Saved)
    }

    /// Point the session at `path` and save there.
    ///
    /// The previous path is restored if the write fails.
    pub fn save_as(&mut self, path: impl Into<PathBuf>, writer: &mut impl FileIo) -> Result<SaveStatus> {
        let previous = self.file_path.replace(path.into());
        match self.save(writer) {
            Ok(status) => Ok(status),
            Err(e) => {
                warn!(error = %e, "save as failed, keeping previous path");
                self.file_path = previous;
                Err(e)
            }
        }
    }

    pub fn set_text(&mut self, new_text: impl Into<String>) {
        self.buffer_text = new_text.into();
    }

    pub fn is_dirty(&self) -> bool {
        self.buffer_text != self.saved_snapshot
    }

    pub fn text(&self) -> &str {
        &self.buffer_text
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn saved_snapshot(&self) -> &str {
        &self.saved_snapshot
    }

    /// Basename of the backing file, or "Untitled".
    pub fn display_name(&self) -> String {
        match self.file_path {
            Some(ref path) => extract_filename(path),
            None => UNTITLED.to_string(),
        }
    }

    /// Display name with the dirty marker when there are unsaved edits.
    /// An edited "Untitled" document carries the marker as well.
    pub fn title(&self) -> String {
        let mut title = self.display_name();
        if self.is_dirty() {
            title.push_str(DIRTY_MARKER);
        }
        title
    }

    pub fn char_count(&self) -> usize {
        char_count(&self.buffer_text)
    }

    pub fn word_count(&self) -> usize {
        word_count(&self.buffer_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::infrastructure::error::AppError;
    use std::collections::HashMap;
    use std::io;

    #[derive(Default)]
    struct MemoryFiles {
        files: HashMap<PathBuf, String>,
        writes: usize,
        fail_writes: bool,
    }

    impl FileIo for MemoryFiles {
        fn read(&self, path: &Path) -> Result<String> {
            self.files.get(path).cloned().ok_or_else(|| AppError::Read {
                path: path.to_path_buf(),
                source: io::Error::from(io::ErrorKind::NotFound),
            })
        }

        fn write(&mut self, path: &Path, text: &str) -> Result<()> {
            if self.fail_writes {
                return Err(AppError::Write {
                    path: path.to_path_buf(),
                    source: io::Error::from(io::ErrorKind::PermissionDenied),
                });
            }
            self.writes += 1;
            self.files.insert(path.to_path_buf(), text.to_string());
            Ok(())
        }
    }

    fn read_error() -> AppError {
        AppError::Read {
            path: PathBuf::from("/gone.txt"),
            source: io::Error::from(io::ErrorKind::NotFound),
        }
    }

    #[test]
    fn test_new_session_is_clean() {
        let session = DocumentSession::new();
        assert!(!session.is_dirty());
        assert!(session.file_path().is_none());
        assert_eq!(session.text(), "");
        assert_eq!(session.title(), "Untitled");
    }

    #[test]
    fn test_dirty_tracks_snapshot() {
        let mut session = DocumentSession::new();
        for text in ["", "a", "hello world", "", "  "] {
            session.set_text(text);
            assert_eq!(session.is_dirty(), text != session.saved_snapshot());
        }
    }

    #[test]
    fn test_editing_back_to_snapshot_is_clean() {
        let mut session = DocumentSession::new();
        session.open("/notes/a.txt", Ok("abc".to_string())).unwrap();
        session.set_text("abcd");
        assert!(session.is_dirty());
        session.set_text("abc");
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = DocumentSession::new();
        session.open("/notes/a.txt", Ok("abc".to_string())).unwrap();
        session.set_text("abc def");
        session.reset();
        assert_eq!(session, DocumentSession::new());
    }

    #[test]
    fn test_open_adopts_content() {
        let mut session = DocumentSession::new();
        session.open("/notes/draft.txt", Ok("draft".to_string())).unwrap();
        assert_eq!(session.text(), "draft");
        assert_eq!(session.saved_snapshot(), "draft");
        assert_eq!(session.file_path(), Some(Path::new("/notes/draft.txt")));
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_failed_open_leaves_session_unchanged() {
        let mut session = DocumentSession::new();
        session.open("/notes/a.txt", Ok("abc".to_string())).unwrap();
        session.set_text("abc!");
        let before = session.clone();

        let err = session.open("/gone.txt", Err(read_error())).unwrap_err();
        assert!(matches!(err, AppError::Read { .. }));
        assert_eq!(session, before);
    }

    #[test]
    fn test_save_without_path_requires_one() {
        let mut files = MemoryFiles::default();
        let mut session = DocumentSession::new();
        session.set_text("unsaved");

        assert_eq!(session.save(&mut files).unwrap(), SaveStatus::PathRequired);
        assert_eq!(files.writes, 0);
        assert!(session.is_dirty());
    }

    #[test]
    fn test_save_updates_snapshot() {
        let mut files = MemoryFiles::default();
        let mut session = DocumentSession::new();
        session.open("/notes/a.txt", Ok("abc".to_string())).unwrap();
        session.set_text("abc def");

        assert_eq!(session.save(&mut files).unwrap(), SaveStatus::Saved);
        assert_eq!(session.saved_snapshot(), "abc def");
        assert!(!session.is_dirty());
        assert_eq!(files.files[Path::new("/notes/a.txt")], "abc def");
    }

    #[test]
    fn test_repeated_save_writes_same_content() {
        let mut files = MemoryFiles::default();
        let mut session = DocumentSession::new();
        session.open("/notes/a.txt", Ok(String::new())).unwrap();
        session.set_text("content");

        session.save(&mut files).unwrap();
        let snapshot = session.saved_snapshot().to_string();
        session.save(&mut files).unwrap();

        assert_eq!(session.saved_snapshot(), snapshot);
        assert_eq!(files.writes, 2);
    }

    #[test]
    fn test_failed_save_keeps_dirty_state() {
        let mut files = MemoryFiles { fail_writes: true, ..Default::default() };
        let mut session = DocumentSession::new();
        session.open("/notes/a.txt", Ok("abc".to_string())).unwrap();
        session.set_text("abcd");
        let before = session.clone();

        assert!(matches!(session.save(&mut files), Err(AppError::Write { .. })));
        assert_eq!(session, before);
        assert!(session.is_dirty());
    }

    #[test]
    fn test_save_as_sets_path() {
        let mut files = MemoryFiles::default();
        let mut session = DocumentSession::new();
        session.set_text("fresh");

        assert_eq!(session.save_as("/notes/fresh.txt", &mut files).unwrap(), SaveStatus::Saved);
        assert_eq!(session.file_path(), Some(Path::new("/notes/fresh.txt")));
        assert_eq!(session.title(), "fresh.txt");
    }

    #[test]
    fn test_failed_save_as_restores_previous_path() {
        let mut files = MemoryFiles { fail_writes: true, ..Default::default() };
        let mut session = DocumentSession::new();
        session.open("/notes/a.txt", Ok("abc".to_string())).unwrap();
        session.set_text("abcd");

        assert!(session.save_as("/readonly/b.txt", &mut files).is_err());
        assert_eq!(session.file_path(), Some(Path::new("/notes/a.txt")));
        assert!(session.is_dirty());
    }

    #[test]
    fn test_title_follows_dirty_state() {
        let mut files = MemoryFiles::default();
        let mut session = DocumentSession::new();
        session.open("/notes/draft.txt", Ok("draft".to_string())).unwrap();
        assert_eq!(session.title(), "draft.txt");

        session.set_text("draft!");
        assert_eq!(session.title(), "draft.txt *");

        session.save(&mut files).unwrap();
        assert_eq!(session.title(), "draft.txt");
    }

    #[test]
    fn test_untitled_title_gets_marker() {
        let mut session = DocumentSession::new();
        session.set_text("x");
        assert_eq!(session.title(), "Untitled *");
    }

    #[test]
    fn test_counts() {
        let mut session = DocumentSession::new();
        session.set_text("hello   world");
        assert_eq!(session.word_count(), 2);
        assert_eq!(session.char_count(), 13);
    }
}
