//! Built-in chrome appearance presets

use crate::color::Color;
use crate::style::{Appearance, BarStyle, StatusBarStyle};
use std::fmt::{Display, Formatter};

/// Built-in appearance preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChromePreset {
    /// System-default chrome (light bars, dark content).
    Plain,
    /// Near-black chrome with light content.
    Midnight,
    /// Deep blue chrome with light content.
    Ocean,
    /// Warm off-white chrome with dark content.
    Paper,
}

impl ChromePreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Midnight => "midnight",
            Self::Ocean => "ocean",
            Self::Paper => "paper",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Plain => "Plain",
            Self::Midnight => "Midnight",
            Self::Ocean => "Ocean",
            Self::Paper => "Paper",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ChromePreset] {
        const PRESETS: [ChromePreset; 4] = [
            ChromePreset::Plain,
            ChromePreset::Midnight,
            ChromePreset::Ocean,
            ChromePreset::Paper,
        ];
        &PRESETS
    }

    /// Look up a preset by its stable id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.id() == id)
    }

    /// Build the appearance for this preset.
    pub fn appearance(self) -> Appearance {
        match self {
            Self::Plain => Appearance::default(),
            Self::Midnight => {
                let bar = BarStyle::opaque(Color::from_hex(0x16161e), Color::from_hex(0xc0caf5));
                Appearance::new(StatusBarStyle::LightContent, bar, bar)
            }
            Self::Ocean => {
                let bar = BarStyle::opaque(Color::from_hex(0x0f3460), Color::from_hex(0xe4f1fe));
                Appearance::new(StatusBarStyle::LightContent, bar, bar)
            }
            Self::Paper => {
                let bar = BarStyle::opaque(Color::from_hex(0xfaf6f0), Color::from_hex(0x4a4238));
                Appearance::new(StatusBarStyle::Default, bar, bar)
            }
        }
    }
}

impl Display for ChromePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
