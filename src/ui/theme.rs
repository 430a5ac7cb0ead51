use fltk::{
    enums::{Color, Font},
    menu::MenuBar,
    prelude::*,
    text::TextEditor,
    window::Window,
};

use crate::app::domain::preferences::{FontFamily, Palette, Rgb};

pub fn to_color(rgb: Rgb) -> Color {
    Color::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// Closest built-in FLTK face for each font in the rotation.
pub fn fltk_font(font: FontFamily) -> Font {
    match font {
        FontFamily::Consolas => Font::Courier,
        FontFamily::Inconsolata => Font::Screen,
        FontFamily::Garamond => Font::TimesItalic,
        FontFamily::Arial => Font::Helvetica,
        FontFamily::Times => Font::Times,
    }
}

pub fn apply_theme(editor: &mut TextEditor, window: &mut Window, menu: &mut MenuBar, palette: &Palette) {
    let background = to_color(palette.main_background);
    let text = to_color(palette.primary_text);

    editor.set_color(background);
    editor.set_text_color(text);
    editor.set_cursor_color(text);
    editor.set_selection_color(to_color(palette.button_fill));
    window.set_color(background);
    window.set_label_color(text);
    menu.set_color(background);
    menu.set_text_color(to_color(palette.secondary_text));
    menu.set_selection_color(to_color(palette.button_hover)); // Hover color

    editor.redraw();
    window.redraw();
    menu.redraw();
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DWMWINDOWATTRIBUTE, DwmSetWindowAttribute};

    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);
        let on: i32 = if is_dark { 1 } else { 0 };

        // 20 on Windows 11 / Windows 10 2004+, 19 on older Windows 10 builds
        for attribute in [20, 19] {
            let _ = DwmSetWindowAttribute(
                hwnd,
                DWMWINDOWATTRIBUTE(attribute),
                from_ref(&on).cast(),
                size_of::<i32>() as u32,
            );
        }
    }
}
