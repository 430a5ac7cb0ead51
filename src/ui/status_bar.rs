use fltk::{
    enums::Align,
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
};

use super::theme::{fltk_font, to_color};
use crate::app::domain::preferences::FontFamily;
use crate::app::domain::view::ViewState;

pub const STATUS_BAR_HEIGHT: i32 = 40;
const LABEL_SIZE: i32 = 13;
const FIELD_WIDTH: i32 = 80;
const FONT_FIELD_WIDTH: i32 = 110;

/// Bottom bar: file title on the left, optional fields on the right.
pub struct StatusBar {
    pub widget: Flex,
    title: Frame,
    margin: Frame,
    font_size: Frame,
    font: Frame,
    word_count: Frame,
    char_count: Frame,
}

impl StatusBar {
    /// Builds the bar inside the currently open group.
    pub fn new() -> Self {
        let mut widget = Flex::default();
        widget.set_type(FlexType::Row);
        widget.set_margins(20, 0, 20, 0);

        let title = field(Align::Left | Align::Inside);
        let margin = field(Align::Right | Align::Inside);
        let font_size = field(Align::Right | Align::Inside);
        let font = field(Align::Right | Align::Inside);
        let word_count = field(Align::Right | Align::Inside);
        let char_count = field(Align::Right | Align::Inside);
        widget.end();

        for frame in [&margin, &font_size, &word_count, &char_count] {
            widget.fixed(frame, FIELD_WIDTH);
        }
        widget.fixed(&font, FONT_FIELD_WIDTH);

        Self {
            widget,
            title,
            margin,
            font_size,
            font,
            word_count,
            char_count,
        }
    }

    pub fn update(&mut self, view: &ViewState) {
        let visibility = view.visibility;
        set_field(&mut self.title, visibility.file, &view.title);
        set_field(&mut self.margin, visibility.margin, &view.margin_label());
        set_field(&mut self.font_size, visibility.font_size, &view.font_size_label());
        set_field(&mut self.font, visibility.font, view.font.display_name());
        set_field(&mut self.word_count, visibility.word_count, &view.word_label());
        set_field(&mut self.char_count, visibility.char_count, &view.char_label());

        let color = to_color(view.palette.secondary_text);
        for frame in self.frames() {
            frame.set_label_color(color);
        }
        self.widget.layout();
        self.widget.redraw();
    }

    fn frames(&mut self) -> [&mut Frame; 6] {
        [
            &mut self.title,
            &mut self.margin,
            &mut self.font_size,
            &mut self.font,
            &mut self.word_count,
            &mut self.char_count,
        ]
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

fn field(align: Align) -> Frame {
    let mut frame = Frame::default();
    frame.set_label_size(LABEL_SIZE);
    frame.set_label_font(fltk_font(FontFamily::default()));
    frame.set_align(align);
    frame
}

fn set_field(frame: &mut Frame, visible: bool, label: &str) {
    if visible {
        frame.set_label(label);
        frame.show();
    } else {
        frame.hide();
    }
}
