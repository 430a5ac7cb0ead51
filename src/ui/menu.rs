use fltk::{
    app::Sender,
    enums::{Key, Shortcut},
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::messages::Message;

/// Key combinations and what they do, as listed on the Shortcuts page.
pub const SHORTCUTS: &[(&str, &str)] = &[
    ("ctrl n", "New file"),
    ("ctrl o", "Open file"),
    ("ctrl s", "Save file"),
    ("ctrl shift s", "Save as file"),
    ("ctrl =", "Increase margin"),
    ("ctrl -", "Decrease margin"),
    ("ctrl .", "Increase font size"),
    ("ctrl ,", "Decrease font size"),
    ("ctrl f", "Next font"),
    ("ctrl d", "Toggle theme"),
    ("F1", "Show preferences"),
    ("ctrl q", "Quit"),
];

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    let s = sender;

    // File
    menu.add("File/New", Shortcut::Ctrl | 'n', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileNew) });
    menu.add("File/Open...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    menu.add("File/Save", Shortcut::Ctrl | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileSave) });
    menu.add("File/Save As...", Shortcut::Ctrl | Shortcut::Shift | 's', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::FileSaveAs) });
    menu.add("File/Preferences...", Shortcut::None | Key::F1, MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::ShowPreferences) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // Format
    menu.add("Format/Increase Font Size", Shortcut::Ctrl | '.', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::IncreaseFontSize) });
    menu.add("Format/Decrease Font Size", Shortcut::Ctrl | ',', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::DecreaseFontSize) });
    menu.add("Format/Increase Margin", Shortcut::Ctrl | '=', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::IncreaseMargin) });
    menu.add("Format/Decrease Margin", Shortcut::Ctrl | '-', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::DecreaseMargin) });
    menu.add("Format/Next Font", Shortcut::Ctrl | 'f', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::NextFont) });

    // View
    menu.add("View/Toggle Theme", Shortcut::Ctrl | 'd', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ToggleTheme) });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_keys_are_unique() {
        for (i, (key, _)) in SHORTCUTS.iter().enumerate() {
            assert!(SHORTCUTS[i + 1..].iter().all(|(other, _)| other != key), "duplicate {key}");
        }
    }

    #[test]
    fn test_shortcuts_cover_preferences() {
        assert!(SHORTCUTS.contains(&("F1", "Show preferences")));
        assert!(SHORTCUTS.contains(&("ctrl d", "Toggle theme")));
    }
}
