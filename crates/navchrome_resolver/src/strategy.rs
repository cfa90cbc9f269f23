//! Appearance applying strategies
//!
//! A strategy is the replaceable collaborator that turns an [`Appearance`]
//! value into host mutations. The resolver decides *whether* to apply;
//! the strategy decides *how*.

use crate::host::{BarKind, ChromeHost};
use navchrome_core::{Appearance, BarStyle};

/// Performs the visual mutation for a non-suppressed apply
///
/// Implementations must be pure side-effects on the host: no resolver
/// state, no change detection (the resolver already did that).
pub trait ApplyingStrategy {
    fn apply(&self, appearance: &Appearance, host: &mut dyn ChromeHost, animated: bool);
}

/// Default strategy: solid bar backgrounds
///
/// Paints each visible bar with a solid background color, sets tint and
/// bar tint, hides the hairline shadow behind the custom background, and
/// derives the title color from the navigation bar tint. A bar that is
/// hidden at call time is left untouched; its styling would be invisible
/// and the host may restyle it on the next reveal.
#[derive(Clone, Copy, Debug, Default)]
pub struct SolidColorStrategy;

impl SolidColorStrategy {
    fn style_bar(
        &self,
        host: &mut dyn ChromeHost,
        bar: BarKind,
        style: &BarStyle,
        animated: bool,
    ) {
        if host.bar_hidden(bar) {
            tracing::trace!("SolidColorStrategy: {:?} hidden, skipping", bar);
            return;
        }

        host.set_bar_background(bar, style.background_color, animated);
        host.set_bar_tint(bar, style.tint_color);
        host.set_bar_chrome_tint(bar, style.bar_tint_color);
        host.set_bar_shadow_hidden(bar, true);

        if bar == BarKind::Navigation {
            host.set_title_color(style.tint_color);
        }
    }
}

impl ApplyingStrategy for SolidColorStrategy {
    fn apply(&self, appearance: &Appearance, host: &mut dyn ChromeHost, animated: bool) {
        self.style_bar(host, BarKind::Navigation, &appearance.navigation_bar, animated);
        self.style_bar(host, BarKind::Toolbar, &appearance.toolbar, animated);
    }
}
