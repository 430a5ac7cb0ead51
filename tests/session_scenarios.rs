use std::fs;

use plain_pad::app::{
    AppError, EditorCore, FsFileIo, ModalMessage, Presenter, SaveStatus, ViewState,
};
use tempfile::TempDir;

#[derive(Default)]
struct LastView {
    view: Option<ViewState>,
    widget_text: String,
    messages: Vec<ModalMessage>,
}

impl Presenter for LastView {
    fn render(&mut self, view: &ViewState) {
        self.view = Some(view.clone());
    }

    fn replace_text(&mut self, text: &str) {
        self.widget_text = text.to_string();
    }

    fn show_message(&mut self, message: &ModalMessage) {
        self.messages.push(message.clone());
    }

    fn dismiss_message(&mut self) {}
}

fn title(core: &EditorCore<LastView, FsFileIo>) -> String {
    core.presenter().view.as_ref().unwrap().title.clone()
}

#[test]
fn open_edit_save_round_trip_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("draft.txt");
    fs::write(&path, "draft").unwrap();

    let mut core = EditorCore::new(LastView::default(), FsFileIo);
    core.open_path(&path).unwrap();
    assert_eq!(core.presenter().widget_text, "draft");
    assert_eq!(title(&core), "draft.txt");

    core.set_text("draft!");
    assert_eq!(title(&core), "draft.txt *");

    assert_eq!(core.save().unwrap(), SaveStatus::Saved);
    assert_eq!(title(&core), "draft.txt");
    assert_eq!(fs::read_to_string(&path).unwrap(), "draft!");
}

#[test]
fn untitled_document_saved_as_new_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fresh.txt");

    let mut core = EditorCore::new(LastView::default(), FsFileIo);
    core.set_text("hello   world");
    let view = core.presenter().view.clone().unwrap();
    assert_eq!(view.word_count, 2);
    assert_eq!(view.char_count, 13);

    assert_eq!(core.save().unwrap(), SaveStatus::PathRequired);
    assert!(!path.exists());

    core.save_as(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "hello   world");
    assert!(!core.session().is_dirty());
}

#[test]
fn unreadable_file_reports_once_and_keeps_session() {
    let dir = TempDir::new().unwrap();

    let mut core = EditorCore::new(LastView::default(), FsFileIo);
    core.set_text("unsaved work");
    let before = core.session().clone();

    let err = core.open_path(dir.path().join("missing.txt")).unwrap_err();
    assert!(matches!(err, AppError::Read { .. }));
    assert_eq!(core.session(), &before);
    assert_eq!(core.presenter().messages.len(), 1);
    assert!(core.presenter().messages[0].ok_only);
}

#[test]
fn unwritable_destination_keeps_previous_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, "a").unwrap();

    let mut core = EditorCore::new(LastView::default(), FsFileIo);
    core.open_path(&path).unwrap();
    core.set_text("ab");

    let bad = dir.path().join("missing-dir").join("b.txt");
    assert!(matches!(core.save_as(&bad), Err(AppError::Write { .. })));
    assert_eq!(core.session().file_path(), Some(path.as_path()));
    assert!(core.session().is_dirty());
    assert_eq!(title(&core), "a.txt *");
}

#[test]
fn file_with_nul_bytes_is_refused() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("blob.txt");
    fs::write(&path, b"abc\0def").unwrap();

    let mut core = EditorCore::new(LastView::default(), FsFileIo);
    assert!(matches!(core.open_path(&path), Err(AppError::Read { .. })));
    assert!(core.session().file_path().is_none());
    assert_eq!(core.presenter().widget_text, "");
    assert_eq!(fs::read(&path).unwrap(), b"abc\0def");
}
