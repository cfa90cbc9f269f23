//! Chrome appearance value objects
//!
//! These types are immutable descriptions of what the chrome *should* look
//! like. They carry no behavior beyond construction and structural equality;
//! deciding when to apply them is the resolver's job.

use crate::color::Color;

/// Content style for a bar (affects text/icon rendering inside the bar)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BarContentStyle {
    /// Dark content on a light bar
    #[default]
    Default,
    /// Light content on a dark bar
    Light,
}

/// Status bar content style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusBarStyle {
    /// Dark content (for light chrome)
    #[default]
    Default,
    /// Light content (for dark chrome)
    LightContent,
}

/// Animation kind for a status bar style update
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusBarAnimation {
    #[default]
    None,
    Fade,
}

/// Visual settings for a single bar surface
///
/// Compared by value: two styles are equal iff every field is equal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarStyle {
    /// Content style (light/dark text and icons)
    pub content: BarContentStyle,
    /// Solid background color painted behind the bar
    pub background_color: Color,
    /// Tint for interactive items (buttons, back chevron)
    pub tint_color: Color,
    /// Optional bar tint applied to the bar surface itself
    pub bar_tint_color: Option<Color>,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            content: BarContentStyle::Default,
            background_color: Color::WHITE,
            tint_color: Color::BLACK,
            bar_tint_color: None,
        }
    }
}

impl BarStyle {
    /// Opaque bar with an explicit background and tint
    ///
    /// The content style is derived from the background luminance.
    pub fn opaque(background_color: Color, tint_color: Color) -> Self {
        let content = if background_color.is_light() {
            BarContentStyle::Default
        } else {
            BarContentStyle::Light
        };
        Self {
            content,
            background_color,
            tint_color,
            bar_tint_color: None,
        }
    }

    pub fn with_content(mut self, content: BarContentStyle) -> Self {
        self.content = content;
        self
    }

    pub fn with_bar_tint(mut self, color: Color) -> Self {
        self.bar_tint_color = Some(color);
        self
    }
}

/// Complete desired chrome styling for a screen
///
/// Immutable value object; the resolver compares candidates against the
/// last applied value with `==` to suppress redundant application.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Appearance {
    /// Desired status bar content style
    pub status_bar_style: StatusBarStyle,
    /// Navigation bar styling
    pub navigation_bar: BarStyle,
    /// Toolbar styling
    pub toolbar: BarStyle,
}

impl Appearance {
    pub fn new(
        status_bar_style: StatusBarStyle,
        navigation_bar: BarStyle,
        toolbar: BarStyle,
    ) -> Self {
        Self {
            status_bar_style,
            navigation_bar,
            toolbar,
        }
    }

    /// Appearance with the given navigation bar style and default toolbar
    ///
    /// The status bar style follows the navigation bar content style, which
    /// is the common case for screens that only restyle the top bar.
    pub fn with_navigation_bar(navigation_bar: BarStyle) -> Self {
        let status_bar_style = match navigation_bar.content {
            BarContentStyle::Default => StatusBarStyle::Default,
            BarContentStyle::Light => StatusBarStyle::LightContent,
        };
        Self {
            status_bar_style,
            navigation_bar,
            toolbar: BarStyle::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appearance_equality_is_structural() {
        let a = Appearance::with_navigation_bar(BarStyle::opaque(
            Color::from_hex(0x1a1a2e),
            Color::WHITE,
        ));
        let b = a;
        assert_eq!(a, b);

        let c = Appearance {
            toolbar: BarStyle::opaque(Color::from_hex(0x1a1a2e), Color::WHITE),
            ..a
        };
        assert_ne!(a, c);
    }

    #[test]
    fn opaque_derives_content_from_luminance() {
        let dark = BarStyle::opaque(Color::from_hex(0x111111), Color::WHITE);
        assert_eq!(dark.content, BarContentStyle::Light);

        let light = BarStyle::opaque(Color::from_hex(0xf5f5f5), Color::BLACK);
        assert_eq!(light.content, BarContentStyle::Default);
    }

    #[test]
    fn with_navigation_bar_follows_content_style() {
        let a = Appearance::with_navigation_bar(BarStyle::opaque(
            Color::from_hex(0x101020),
            Color::WHITE,
        ));
        assert_eq!(a.status_bar_style, StatusBarStyle::LightContent);
        assert_eq!(a.toolbar, BarStyle::default());
    }
}
