use fltk::{app::Sender, prelude::*};
use tracing::debug;

use crate::app::domain::messages::{Message, PreferencesPage};
use crate::app::domain::preferences::ThemeMode;
use crate::app::domain::view::{ModalMessage, Presenter, ViewState};
use super::dialogs::popup::Popup;
use super::dialogs::preferences::PreferencesWindow;
use super::main_window::MainWidgets;
use super::theme::apply_theme;
#[cfg(target_os = "windows")]
use super::theme::set_windows_titlebar_theme;

/// FLTK implementation of the presenter: owns the widgets and mirrors each
/// `ViewState` onto them.
pub struct FltkView {
    widgets: MainWidgets,
    sender: Sender<Message>,
    popup: Option<Popup>,
    preferences: Option<PreferencesWindow>,
    last_view: Option<ViewState>,
}

impl FltkView {
    pub fn new(widgets: MainWidgets, sender: Sender<Message>) -> Self {
        Self {
            widgets,
            sender,
            popup: None,
            preferences: None,
            last_view: None,
        }
    }

    /// Current contents of the text widget.
    pub fn text(&self) -> String {
        self.widgets.editor.text()
    }

    pub fn focus_editor(&mut self) {
        if let Err(e) = self.widgets.editor.editor_mut().take_focus() {
            debug!(error = ?e, "editor refused focus");
        }
    }

    pub fn show_preferences_page(&mut self, page: PreferencesPage) {
        if let Some(ref mut prefs) = self.preferences {
            if prefs.page() != page {
                prefs.show_page(page);
            }
        }
    }

    fn update_window_title(&mut self, view: &ViewState) {
        self.widgets.wind.set_label(&format!("{} - PlainPad", view.title));
    }

    fn update_theme(&mut self, view: &ViewState) {
        let widgets = &mut self.widgets;
        apply_theme(
            widgets.editor.editor_mut(),
            &mut widgets.wind,
            &mut widgets.menu,
            &view.palette,
        );
        #[cfg(target_os = "windows")]
        set_windows_titlebar_theme(&widgets.wind, view.theme.is_dark());

        if let Some(ref mut popup) = self.popup {
            popup.apply_palette(&view.palette);
        }
    }

    fn update_preferences_window(&mut self, view: &ViewState) {
        match (view.preferences_open, self.preferences.take()) {
            (true, Some(mut prefs)) => {
                prefs.update(view);
                self.preferences = Some(prefs);
            }
            (true, None) => {
                self.preferences = Some(PreferencesWindow::new(view, &self.sender));
            }
            (false, Some(prefs)) => prefs.close(),
            (false, None) => {}
        }
    }
}

impl Presenter for FltkView {
    fn render(&mut self, view: &ViewState) {
        let theme_changed = self.last_view.as_ref().is_none_or(|last| last.theme != view.theme);

        self.update_window_title(view);
        self.widgets.editor.update(view);
        self.widgets.status_bar.update(view);
        if theme_changed {
            self.update_theme(view);
        }
        self.update_preferences_window(view);
        self.widgets.flex.layout();

        self.last_view = Some(view.clone());
    }

    fn replace_text(&mut self, text: &str) {
        self.widgets.editor.set_text(text);
    }

    fn show_message(&mut self, message: &ModalMessage) {
        let palette = self
            .last_view
            .as_ref()
            .map(|v| v.palette)
            .unwrap_or(ThemeMode::default().palette());
        self.popup = Some(Popup::show(message, &palette, &self.sender));
    }

    fn dismiss_message(&mut self) {
        if let Some(popup) = self.popup.take() {
            popup.close();
        }
    }
}
