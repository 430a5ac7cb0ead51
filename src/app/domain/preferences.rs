use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::app::infrastructure::error::{AppError, Result};

pub const DEFAULT_FONT_SIZE: u32 = 16;
pub const MIN_FONT_SIZE: u32 = 10;
pub const FONT_SIZE_STEP: u32 = 2;

pub const DEFAULT_MARGIN: u32 = 10;
pub const MIN_MARGIN: u32 = 10;
pub const MARGIN_STEP: u32 = 10;

/// On/off preferences, each shown as a checkbox in the preferences dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    WrapText,
    ShowActualFont,
    ShowActualFile,
    ShowWordCount,
    ShowCharCount,
    ShowFontSize,
    ShowMarginSize,
}

impl PreferenceKey {
    pub fn all() -> &'static [PreferenceKey] {
        &[
            Self::WrapText,
            Self::ShowActualFont,
            Self::ShowActualFile,
            Self::ShowWordCount,
            Self::ShowCharCount,
            Self::ShowFontSize,
            Self::ShowMarginSize,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::WrapText => "wrap-text",
            Self::ShowActualFont => "show-actual-font",
            Self::ShowActualFile => "show-actual-file",
            Self::ShowWordCount => "show-word-count",
            Self::ShowCharCount => "show-char-count",
            Self::ShowFontSize => "show-font-size",
            Self::ShowMarginSize => "show-margin-size",
        }
    }

    /// Checkbox label in the preferences dialog
    pub fn label(&self) -> &'static str {
        match self {
            Self::WrapText => "wrap text",
            Self::ShowActualFont => "display actual font",
            Self::ShowActualFile => "display actual file",
            Self::ShowWordCount => "show word count",
            Self::ShowCharCount => "show character count",
            Self::ShowFontSize => "view font size",
            Self::ShowMarginSize => "view margin size",
        }
    }

    fn default_value(&self) -> bool {
        !matches!(self, Self::ShowFontSize | Self::ShowMarginSize)
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl FromStr for PreferenceKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|k| k.name() == s)
            .ok_or_else(|| AppError::UnknownPreference(s.to_string()))
    }
}

/// Valued display settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    FontFamily,
    FontSize,
    Margin,
    Theme,
}

impl SettingKey {
    pub fn all() -> &'static [SettingKey] {
        &[Self::FontFamily, Self::FontSize, Self::Margin, Self::Theme]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::FontFamily => "font-family",
            Self::FontSize => "font-size",
            Self::Margin => "margin",
            Self::Theme => "theme",
        }
    }
}

impl FromStr for SettingKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|k| k.name() == s)
            .ok_or_else(|| AppError::UnknownPreference(s.to_string()))
    }
}

/// The fixed font rotation, in `next_font` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    #[default]
    Consolas,
    Inconsolata,
    Garamond,
    Arial,
    Times,
}

impl FontFamily {
    pub fn all() -> &'static [FontFamily] {
        &[Self::Consolas, Self::Inconsolata, Self::Garamond, Self::Arial, Self::Times]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Consolas => "Consolas",
            Self::Inconsolata => "Inconsolata",
            Self::Garamond => "Garamond",
            Self::Arial => "Arial",
            Self::Times => "Times",
        }
    }

    /// The font after this one, wrapping back to the first.
    pub fn next(&self) -> FontFamily {
        let fonts = Self::all();
        let index = fonts.iter().position(|f| f == self).unwrap_or(0);
        fonts[(index + 1) % fonts.len()]
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(&self) -> ThemeMode {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Self::Dark
    }

    pub fn palette(&self) -> Palette {
        match self {
            Self::Light => Palette::LIGHT,
            Self::Dark => Palette::DARK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    const WHITE: Rgb = Rgb(0xff, 0xff, 0xff);
    const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);
    const GRAY: Rgb = Rgb(0xbe, 0xbe, 0xbe);
    const LIGHT_GRAY: Rgb = Rgb(0xd3, 0xd3, 0xd3);
}

/// Named color roles of a theme. Applying them to widgets is up to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Palette {
    pub main_background: Rgb,
    pub primary_text: Rgb,
    pub secondary_text: Rgb,
    pub button_fill: Rgb,
    pub button_hover: Rgb,
    pub button_text: Rgb,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        main_background: Rgb::WHITE,
        primary_text: Rgb::BLACK,
        secondary_text: Rgb::GRAY,
        button_fill: Rgb(0xd1, 0xd1, 0xd1),
        button_hover: Rgb(0xe3, 0xe2, 0xe1),
        button_text: Rgb(0x42, 0x42, 0x42),
    };

    pub const DARK: Palette = Palette {
        main_background: Rgb::BLACK,
        primary_text: Rgb(0xbd, 0xbd, 0xbd),
        secondary_text: Rgb::GRAY,
        button_fill: Rgb::GRAY,
        button_hover: Rgb::LIGHT_GRAY,
        button_text: Rgb::BLACK,
    };
}

/// A value passed through the name-based accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceValue {
    Flag(bool),
    Font(FontFamily),
    Size(u32),
    Theme(ThemeMode),
}

/// Display preferences for the running editor. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceSet {
    flags: [bool; 7],
    font: FontFamily,
    font_size: u32,
    margin: u32,
    theme: ThemeMode,
}

impl Default for PreferenceSet {
    fn default() -> Self {
        let mut flags = [false; 7];
        for key in PreferenceKey::all() {
            flags[key.index()] = key.default_value();
        }
        Self {
            flags,
            font: FontFamily::default(),
            font_size: DEFAULT_FONT_SIZE,
            margin: DEFAULT_MARGIN,
            theme: ThemeMode::default(),
        }
    }
}

impl PreferenceSet {
    /// Look up any preference or setting by name.
    pub fn get(&self, name: &str) -> Result<PreferenceValue> {
        if let Ok(key) = name.parse::<PreferenceKey>() {
            return Ok(PreferenceValue::Flag(self.flag(key)));
        }
        let value = match name.parse::<SettingKey>()? {
            SettingKey::FontFamily => PreferenceValue::Font(self.font),
            SettingKey::FontSize => PreferenceValue::Size(self.font_size),
            SettingKey::Margin => PreferenceValue::Size(self.margin),
            SettingKey::Theme => PreferenceValue::Theme(self.theme),
        };
        Ok(value)
    }

    /// Set any preference or setting by name. Sizes below their floor are clamped.
    pub fn set(&mut self, name: &str, value: PreferenceValue) -> Result<()> {
        if let Ok(key) = name.parse::<PreferenceKey>() {
            let PreferenceValue::Flag(on) = value else {
                return Err(invalid(name, "a flag"));
            };
            self.set_flag(key, on);
            return Ok(());
        }

        match (name.parse::<SettingKey>()?, value) {
            (SettingKey::FontFamily, PreferenceValue::Font(font)) => self.font = font,
            (SettingKey::FontSize, PreferenceValue::Size(size)) => self.set_font_size(size),
            (SettingKey::Margin, PreferenceValue::Size(margin)) => self.set_margin(margin),
            (SettingKey::Theme, PreferenceValue::Theme(theme)) => self.theme = theme,
            (SettingKey::FontFamily, _) => return Err(invalid(name, "a font family")),
            (SettingKey::FontSize | SettingKey::Margin, _) => return Err(invalid(name, "a size")),
            (SettingKey::Theme, _) => return Err(invalid(name, "a theme")),
        }
        debug!(name, ?value, "preference set");
        Ok(())
    }

    pub fn flag(&self, key: PreferenceKey) -> bool {
        self.flags[key.index()]
    }

    pub fn set_flag(&mut self, key: PreferenceKey, on: bool) {
        debug!(preference = key.name(), on, "preference toggled");
        self.flags[key.index()] = on;
    }

    pub fn font(&self) -> FontFamily {
        self.font
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn set_font_size(&mut self, size: u32) {
        self.font_size = size.max(MIN_FONT_SIZE);
    }

    pub fn margin(&self) -> u32 {
        self.margin
    }

    pub fn set_margin(&mut self, margin: u32) {
        self.margin = margin.max(MIN_MARGIN);
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }

    /// Switch between light and dark; returns the new palette.
    pub fn toggle_theme(&mut self) -> Palette {
        self.theme = self.theme.toggled();
        self.palette()
    }

    pub fn next_font(&mut self) -> FontFamily {
        self.font = self.font.next();
        self.font
    }

    pub fn increase_font_size(&mut self) -> u32 {
        self.set_font_size(self.font_size.saturating_add(FONT_SIZE_STEP));
        self.font_size
    }

    pub fn decrease_font_size(&mut self) -> u32 {
        self.set_font_size(self.font_size.saturating_sub(FONT_SIZE_STEP));
        self.font_size
    }

    pub fn increase_margin(&mut self) -> u32 {
        self.set_margin(self.margin.saturating_add(MARGIN_STEP));
        self.margin
    }

    pub fn decrease_margin(&mut self) -> u32 {
        self.set_margin(self.margin.saturating_sub(MARGIN_STEP));
        self.margin
    }
}

fn invalid(name: &str, expected: &'static str) -> AppError {
    AppError::InvalidPreferenceValue {
        name: name.to_string(),
        expected,
    }
}
