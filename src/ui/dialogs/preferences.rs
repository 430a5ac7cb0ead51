use fltk::{
    app::{self, Sender},
    button::{Button, CheckButton},
    enums::{Align, Event, EventState, Font, FrameType, Key},
    frame::Frame,
    group::Group,
    prelude::*,
    window::Window,
};

use crate::app::domain::messages::{Message, PreferencesPage};
use crate::app::domain::preferences::{Palette, PreferenceKey};
use crate::app::domain::view::ViewState;
use crate::ui::menu::SHORTCUTS;
use crate::ui::theme::to_color;

const WIDTH: i32 = 600;
const HEIGHT: i32 = 500;
const PAGE_X: i32 = 160;
const PAGE_WIDTH: i32 = 410;

/// The preferences window: a page selector on the left, the Settings or
/// Shortcuts page on the right. Widgets only send messages; state lives in
/// the editor core.
pub struct PreferencesWindow {
    window: Window,
    heading: Frame,
    settings_button: Button,
    shortcuts_button: Button,
    settings_page: Group,
    shortcuts_page: Group,
    titles: Vec<Frame>,
    separators: Vec<Frame>,
    checkboxes: Vec<(PreferenceKey, CheckButton)>,
    shortcut_keys: Vec<Frame>,
    shortcut_descriptions: Vec<Frame>,
    close_button: Button,
    page: PreferencesPage,
}

impl PreferencesWindow {
    pub fn new(view: &ViewState, sender: &Sender<Message>) -> Self {
        let mut window = Window::default()
            .with_size(WIDTH, HEIGHT)
            .with_label("Preferences")
            .center_screen();

        let mut heading = Frame::new(20, 20, 130, 40, "Preferences");
        heading.set_label_font(Font::HelveticaBold);
        heading.set_label_size(14);
        heading.set_align(Align::Left | Align::Inside);

        let mut settings_button = page_button(70, "> Settings");
        let mut shortcuts_button = page_button(105, "> Shortcuts");
        settings_button.set_callback({
            let s = *sender;
            move |_| s.send(Message::ShowPreferencesPage(PreferencesPage::Settings))
        });
        shortcuts_button.set_callback({
            let s = *sender;
            move |_| s.send(Message::ShowPreferencesPage(PreferencesPage::Shortcuts))
        });

        let mut titles = Vec::new();
        let mut separators = Vec::new();

        // Settings page
        let settings_page = Group::new(PAGE_X, 0, PAGE_WIDTH, HEIGHT - 60, None);
        titles.push(page_title("Settings"));
        separators.push(separator());
        let mut checkboxes = Vec::new();
        for (row, key) in PreferenceKey::all().iter().copied().enumerate() {
            let y = 85 + row as i32 * 45;
            let mut check = CheckButton::new(PAGE_X + 10, y, PAGE_WIDTH - 20, 25, key.label());
            check.set_label_size(14);
            check.set_value(view.flag(key));
            check.clear_visible_focus();
            let s = *sender;
            check.set_callback(move |c| s.send(Message::SetPreference(key, c.value())));
            checkboxes.push((key, check));
        }
        settings_page.end();

        // Shortcuts page
        let mut shortcuts_page = Group::new(PAGE_X, 0, PAGE_WIDTH, HEIGHT - 60, None);
        titles.push(page_title("Shortcuts"));
        separators.push(separator());
        let mut shortcut_keys = Vec::new();
        let mut shortcut_descriptions = Vec::new();
        for (row, (key, description)) in SHORTCUTS.iter().enumerate() {
            let y = 80 + row as i32 * 28;
            let mut key_label = Frame::new(PAGE_X + 10, y, 140, 26, None);
            key_label.set_label(&format!("< {key} >"));
            key_label.set_label_font(Font::HelveticaBold);
            key_label.set_label_size(14);
            key_label.set_align(Align::Left | Align::Inside);

            let mut description_label = Frame::new(PAGE_X + 160, y, PAGE_WIDTH - 170, 26, None);
            description_label.set_label(description);
            description_label.set_label_size(14);
            description_label.set_align(Align::Left | Align::Inside);

            shortcut_keys.push(key_label);
            shortcut_descriptions.push(description_label);
        }
        shortcuts_page.end();
        shortcuts_page.hide();

        let mut close_button = Button::new(WIDTH - 110, HEIGHT - 45, 80, 30, "Close");
        close_button.set_frame(FrameType::RoundedBox);
        close_button.set_callback({
            let s = *sender;
            move |_| s.send(Message::ClosePreferences)
        });

        window.end();

        // Window manager close and Escape both land here
        window.set_callback({
            let s = *sender;
            move |_| s.send(Message::ClosePreferences)
        });
        window.handle({
            let s = *sender;
            move |_, ev| {
                if ev == Event::KeyDown
                    && app::event_state().contains(EventState::Ctrl)
                    && app::event_key() == Key::from_char('d')
                {
                    s.send(Message::ToggleTheme);
                    return true;
                }
                false
            }
        });

        window.show();

        let mut prefs = Self {
            window,
            heading,
            settings_button,
            shortcuts_button,
            settings_page,
            shortcuts_page,
            titles,
            separators,
            checkboxes,
            shortcut_keys,
            shortcut_descriptions,
            close_button,
            page: PreferencesPage::Settings,
        };
        prefs.show_page(PreferencesPage::Settings);
        prefs.update(view);
        prefs
    }

    pub fn page(&self) -> PreferencesPage {
        self.page
    }

    pub fn show_page(&mut self, page: PreferencesPage) {
        self.page = page;
        let (selected, other) = match page {
            PreferencesPage::Settings => {
                self.settings_page.show();
                self.shortcuts_page.hide();
                (&mut self.settings_button, &mut self.shortcuts_button)
            }
            PreferencesPage::Shortcuts => {
                self.shortcuts_page.show();
                self.settings_page.hide();
                (&mut self.shortcuts_button, &mut self.settings_button)
            }
        };
        mark_selected(selected, true);
        mark_selected(other, false);
        self.window.redraw();
    }

    /// Sync checkboxes and colors with the view.
    pub fn update(&mut self, view: &ViewState) {
        for (key, check) in self.checkboxes.iter_mut() {
            if check.value() != view.flag(*key) {
                check.set_value(view.flag(*key));
            }
        }
        self.apply_palette(&view.palette);
    }

    fn apply_palette(&mut self, palette: &Palette) {
        let background = to_color(palette.main_background);
        let text = to_color(palette.primary_text);
        let secondary = to_color(palette.secondary_text);

        self.window.set_color(background);
        self.heading.set_label_color(secondary);
        for button in [&mut self.settings_button, &mut self.shortcuts_button] {
            button.set_color(background);
            button.set_selection_color(background);
            button.set_label_color(secondary);
        }
        for title in self.titles.iter_mut() {
            title.set_label_color(text);
        }
        for line in self.separators.iter_mut() {
            line.set_color(secondary);
        }
        for (_, check) in self.checkboxes.iter_mut() {
            check.set_color(background);
            check.set_label_color(text);
            check.set_selection_color(text);
        }
        for key in self.shortcut_keys.iter_mut() {
            key.set_label_color(text);
        }
        for description in self.shortcut_descriptions.iter_mut() {
            description.set_label_color(secondary);
        }
        self.close_button.set_color(to_color(palette.button_fill));
        self.close_button.set_selection_color(to_color(palette.button_hover));
        self.close_button.set_label_color(to_color(palette.button_text));

        // Selected page label uses the primary text color
        let selected = match self.page {
            PreferencesPage::Settings => &mut self.settings_button,
            PreferencesPage::Shortcuts => &mut self.shortcuts_button,
        };
        selected.set_label_color(text);

        self.window.redraw();
    }

    pub fn close(self) {
        let mut window = self.window;
        window.hide();
        Window::delete(window);
    }
}

fn page_button(y: i32, label: &str) -> Button {
    let mut button = Button::new(20, y, 130, 30, None);
    button.set_label(label);
    button.set_frame(FrameType::FlatBox);
    button.set_down_frame(FrameType::FlatBox);
    button.set_label_size(14);
    button.set_align(Align::Left | Align::Inside);
    button.clear_visible_focus();
    button
}

/// Selected page buttons stay active so their label keeps the palette color.
fn mark_selected(button: &mut Button, selected: bool) {
    button.set_label(&page_label(&button.label(), selected));
    if selected {
        button.set_label_font(Font::HelveticaBold);
    } else {
        button.set_label_font(Font::Helvetica);
    }
}

fn page_label(label: &str, selected: bool) -> String {
    let name = label.trim_start().trim_start_matches("> ");
    if selected {
        format!("  > {name}")
    } else {
        format!("> {name}")
    }
}

fn page_title(label: &str) -> Frame {
    let mut title = Frame::new(PAGE_X, 20, PAGE_WIDTH, 40, None);
    title.set_label(label);
    title.set_label_font(Font::HelveticaBold);
    title.set_label_size(20);
    title.set_align(Align::Left | Align::Inside);
    title
}

fn separator() -> Frame {
    let mut line = Frame::new(PAGE_X, 65, PAGE_WIDTH, 1, None);
    line.set_frame(FrameType::FlatBox);
    line
}
