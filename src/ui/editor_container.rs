use fltk::{
    app::Sender,
    group::{Flex, FlexType},
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
};

use crate::app::domain::messages::Message;
use crate::app::domain::view::ViewState;
use super::theme::fltk_font;

/// Space kept above and below the text, in pixels.
const VERTICAL_PADDING: i32 = 25;

/// The text editor wrapped in a Flex whose side margins follow the
/// margin preference.
pub struct EditorContainer {
    pub widget: Flex,
    editor: TextEditor,
    buffer: TextBuffer,
}

impl EditorContainer {
    /// Builds the container inside the currently open group. Every edit
    /// sends `Message::BufferModified`.
    pub fn new(sender: &Sender<Message>) -> Self {
        let mut widget = Flex::default();
        widget.set_type(FlexType::Column);

        let mut buffer = TextBuffer::default();
        let mut editor = TextEditor::default();
        editor.set_buffer(buffer.clone());
        editor.set_frame(fltk::enums::FrameType::FlatBox);
        widget.end();

        let s = *sender;
        buffer.add_modify_callback(move |_pos, inserted, deleted, _restyled, _deleted_text| {
            if inserted > 0 || deleted > 0 {
                s.send(Message::BufferModified);
            }
        });

        Self { widget, editor, buffer }
    }

    pub fn editor_mut(&mut self) -> &mut TextEditor {
        &mut self.editor
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
        self.editor.set_insert_position(0);
    }

    /// Apply font, wrapping and margin from the view.
    pub fn update(&mut self, view: &ViewState) {
        self.editor.set_text_font(fltk_font(view.font));
        self.editor.set_text_size(pixels(view.font_size));
        if view.wrap_text {
            self.editor.wrap_mode(WrapMode::AtBounds, 0);
        } else {
            self.editor.wrap_mode(WrapMode::None, 0);
        }

        let margin = pixels(view.margin);
        self.widget
            .set_margins(margin, VERTICAL_PADDING, margin, VERTICAL_PADDING);
        self.widget.layout();
        self.editor.redraw();
    }
}

/// Preference sizes are unbounded; FLTK takes `i32`.
fn pixels(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixels_saturates() {
        assert_eq!(pixels(16), 16);
        assert_eq!(pixels(i32::MAX as u32), i32::MAX);
        assert_eq!(pixels(u32::MAX), i32::MAX);
    }
}
