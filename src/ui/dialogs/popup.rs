use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, FrameType},
    frame::Frame,
    prelude::*,
    window::Window,
};

use crate::app::domain::messages::Message;
use crate::app::domain::preferences::Palette;
use crate::app::domain::view::ModalMessage;
use crate::ui::theme::to_color;

const WIDTH: i32 = 300;
const HEIGHT: i32 = 100;

/// Small message window with an OK button, plus Cancel when the message
/// is not OK-only. Every way of closing it sends `Message::DismissMessage`.
pub struct Popup {
    window: Window,
    label: Frame,
    buttons: Vec<Button>,
}

impl Popup {
    pub fn show(message: &ModalMessage, palette: &Palette, sender: &Sender<Message>) -> Self {
        let mut window = Window::default()
            .with_size(WIDTH, HEIGHT)
            .with_label(" ")
            .center_screen();
        window.make_modal(true);

        let mut label = Frame::new(10, 5, WIDTH - 20, 50, None);
        label.set_label(&message.text);
        label.set_label_size(14);
        label.set_align(Align::Center | Align::Inside | Align::Wrap);

        let mut buttons = Vec::new();
        if message.ok_only {
            buttons.push(Button::new((WIDTH - 80) / 2, 60, 80, 28, "OK"));
        } else {
            buttons.push(Button::new(WIDTH / 2 - 90, 60, 80, 28, "OK"));
            buttons.push(Button::new(WIDTH / 2 + 10, 60, 80, 28, "Cancel"));
        }
        for button in buttons.iter_mut() {
            button.set_frame(FrameType::RoundedBox);
            let s = *sender;
            button.set_callback(move |_| s.send(Message::DismissMessage));
        }

        window.end();
        window.set_callback({
            let s = *sender;
            move |_| s.send(Message::DismissMessage)
        });
        window.show();

        let mut popup = Self {
            window,
            label,
            buttons,
        };
        popup.apply_palette(palette);
        popup
    }

    pub fn apply_palette(&mut self, palette: &Palette) {
        self.window.set_color(to_color(palette.main_background));
        self.label.set_label_color(to_color(palette.primary_text));
        for button in self.buttons.iter_mut() {
            button.set_color(to_color(palette.button_fill));
            button.set_selection_color(to_color(palette.button_hover));
            button.set_label_color(to_color(palette.button_text));
        }
        self.window.redraw();
    }

    pub fn close(self) {
        let mut window = self.window;
        window.hide();
        Window::delete(window);
    }
}
