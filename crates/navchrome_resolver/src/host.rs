//! Host collaborator traits
//!
//! The resolver never touches platform chrome directly. Everything it
//! decides is carried out through these traits, which the embedding
//! navigation container implements. Two concerns, two traits:
//!
//! - [`NavigationHost`]: bar visibility, transition state, the active
//!   screen, and the paint surface strategies draw on
//! - [`StatusBarHost`]: status bar defaults and the refresh signal
//!
//! [`ChromeHost`] bundles both for the resolver's operation signatures.

use navchrome_core::{Color, ScreenId, StatusBarStyle};

/// Which bar a host operation targets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BarKind {
    Navigation,
    Toolbar,
}

/// Navigation container surface the resolver and strategies operate on
pub trait NavigationHost {
    /// Show or hide a bar
    fn set_bar_hidden(&mut self, bar: BarKind, hidden: bool, animated: bool);

    /// Current visibility of a bar
    fn bar_hidden(&self, bar: BarKind) -> bool;

    /// True while a navigation transition (including an interactive one)
    /// is underway
    fn transition_in_progress(&self) -> bool;

    /// The topmost screen, if any
    fn active_screen(&self) -> Option<ScreenId>;

    // ========== Paint surface ==========

    /// Paint a solid background color behind a bar
    fn set_bar_background(&mut self, bar: BarKind, color: Color, animated: bool);

    /// Tint for a bar's interactive items
    fn set_bar_tint(&mut self, bar: BarKind, color: Color);

    /// Tint for the bar surface itself (`None` restores the host default)
    fn set_bar_chrome_tint(&mut self, bar: BarKind, color: Option<Color>);

    /// Show or hide a bar's bottom hairline shadow
    fn set_bar_shadow_hidden(&mut self, bar: BarKind, hidden: bool);

    /// Color used for navigation bar title text
    fn set_title_color(&mut self, color: Color);
}

/// Status bar owner
pub trait StatusBarHost {
    /// Style to report while no appearance has been applied
    fn default_status_bar_style(&self) -> StatusBarStyle;

    /// Whether status bar updates animate while no appearance has been
    /// applied
    fn default_update_is_animated(&self) -> bool;

    /// Signal that the status bar style should be re-queried and refreshed
    fn request_status_bar_refresh(&mut self);
}

/// Combined host surface taken by the resolver's operations
pub trait ChromeHost: NavigationHost + StatusBarHost {}

impl<T: NavigationHost + StatusBarHost + ?Sized> ChromeHost for T {}
