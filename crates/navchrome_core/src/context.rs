//! Screen entity and the optional appearance capability
//!
//! A screen is a unit of navigable content. Screens that want a say in how
//! the surrounding chrome looks implement [`AppearanceContext`] and return
//! it from [`Screen::appearance_context`]; screens that return `None` are
//! treated as having no opinion and inherit whatever chrome is already
//! applied.
//!
//! The capability is checked through trait satisfaction, not reflection:
//! a screen either hands out a context or it does not. The default method
//! bodies on [`AppearanceContext`] encode the UI defaults (bar visible,
//! toolbar hidden, no appearance override), so an implementor only
//! overrides what it cares about.

use crate::style::Appearance;

/// Opaque identifier for a screen within a host
///
/// Hosts assign these; the resolver only ever compares them for equality
/// to decide whether a screen is the active one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScreenId(u64);

impl ScreenId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn to_raw(self) -> u64 {
        self.0
    }
}

/// Chrome preferences a screen may declare
///
/// All methods have default bodies matching the UI defaults, so a screen
/// that only wants to hide the navigation bar overrides one method.
pub trait AppearanceContext {
    /// Whether the navigation bar should be hidden for this screen
    fn prefers_bar_hidden(&self) -> bool {
        false
    }

    /// Whether the toolbar should be hidden for this screen
    fn prefers_toolbar_hidden(&self) -> bool {
        true
    }

    /// The chrome appearance this screen wants, if any
    ///
    /// `None` means "no opinion" — the previously applied appearance stays
    /// in effect. It does not mean "reset to default".
    fn preferred_appearance(&self) -> Option<Appearance> {
        None
    }
}

/// A unit of navigable content managed by a navigation host
pub trait Screen {
    /// Host-assigned identity, used for active-screen checks
    fn id(&self) -> ScreenId;

    /// The appearance capability, when this screen implements it
    fn appearance_context(&self) -> Option<&dyn AppearanceContext> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::style::BarStyle;

    struct PlainScreen;

    impl Screen for PlainScreen {
        fn id(&self) -> ScreenId {
            ScreenId::new(1)
        }
    }

    struct StyledScreen;

    impl AppearanceContext for StyledScreen {
        fn preferred_appearance(&self) -> Option<Appearance> {
            Some(Appearance::with_navigation_bar(BarStyle::opaque(
                Color::from_hex(0x0f0f1e),
                Color::WHITE,
            )))
        }
    }

    impl Screen for StyledScreen {
        fn id(&self) -> ScreenId {
            ScreenId::new(2)
        }

        fn appearance_context(&self) -> Option<&dyn AppearanceContext> {
            Some(self)
        }
    }

    #[test]
    fn screens_without_capability_have_no_opinion() {
        assert!(PlainScreen.appearance_context().is_none());
    }

    #[test]
    fn capability_defaults_match_ui_defaults() {
        let screen = StyledScreen;
        let ctx = screen.appearance_context().unwrap();
        assert!(!ctx.prefers_bar_hidden());
        assert!(ctx.prefers_toolbar_hidden());
        assert!(ctx.preferred_appearance().is_some());
    }
}
