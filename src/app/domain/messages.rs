use super::preferences::PreferenceKey;

/// Which page the preferences dialog shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferencesPage {
    Settings,
    Shortcuts,
}

/// All messages that can be sent through the FLTK channel.
/// Each menu callback or widget sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // File
    FileNew,
    FileOpen,
    FileSave,
    FileSaveAs,
    FileQuit,

    // Editing
    BufferModified,

    // Format
    IncreaseFontSize,
    DecreaseFontSize,
    IncreaseMargin,
    DecreaseMargin,
    NextFont,
    ToggleTheme,

    // Preferences
    ShowPreferences,
    ClosePreferences,
    ShowPreferencesPage(PreferencesPage),
    SetPreference(PreferenceKey, bool),

    // Popup
    DismissMessage,
}
