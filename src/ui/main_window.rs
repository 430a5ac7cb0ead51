use fltk::{
    app::{self, Sender},
    enums::Event,
    group::{Flex, FlexType},
    menu::MenuBar,
    prelude::*,
    window::Window,
};

use crate::app::domain::messages::Message;
use super::editor_container::EditorContainer;
use super::status_bar::{STATUS_BAR_HEIGHT, StatusBar};

pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 450;
const MENU_HEIGHT: i32 = 25;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub editor: EditorContainer,
    pub status_bar: StatusBar,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::default()
        .with_size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .with_label("Untitled - PlainPad")
        .center_screen();
    wind.set_xclass("PlainPad");
    wind.size_range(200, 80, 0, 0);

    let mut flex = Flex::new(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT, None);
    flex.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    flex.fixed(&menu, MENU_HEIGHT);

    let editor = EditorContainer::new(sender);

    let status_bar = StatusBar::new();
    flex.fixed(&status_bar.widget, STATUS_BAR_HEIGHT);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    // Escape must not close the editor; only the window manager's close does
    let s = *sender;
    wind.set_callback(move |_| {
        if app::event() == Event::Close {
            s.send(Message::FileQuit);
        }
    });

    MainWidgets {
        wind,
        flex,
        menu,
        editor,
        status_bar,
    }
}
