//! Chrome appearance resolution and change detection
//!
//! [`AppearanceResolver`] owns the single piece of state in this system:
//! the last applied [`Appearance`]. On every completed navigation
//! transition (and on explicit update requests) it queries the active
//! screen for its preferences, compares the candidate against what is
//! already applied, and only on change delegates to the
//! [`ApplyingStrategy`] and signals a status bar refresh.
//!
//! Two rules are deliberate product decisions, not bugs:
//!
//! - A screen with no appearance opinion inherits the current chrome
//!   unchanged. "No opinion" never resets to the default.
//! - Re-applying an equal appearance is suppressed entirely, including the
//!   status bar refresh signal.

use crate::host::{BarKind, ChromeHost};
use crate::strategy::{ApplyingStrategy, SolidColorStrategy};
use navchrome_core::{Appearance, Screen, StatusBarAnimation, StatusBarStyle};

/// Decides and applies chrome state transitions
pub struct AppearanceResolver {
    /// Last appearance handed to the strategy; `None` until a screen with
    /// an opinion becomes active
    last_applied: Option<Appearance>,
    /// Replaceable collaborator performing the actual visual mutation
    strategy: Box<dyn ApplyingStrategy>,
}

impl Default for AppearanceResolver {
    fn default() -> Self {
        Self::new(Box::new(SolidColorStrategy))
    }
}

impl AppearanceResolver {
    /// Create a resolver with an explicit strategy
    pub fn new(strategy: Box<dyn ApplyingStrategy>) -> Self {
        Self {
            last_applied: None,
            strategy,
        }
    }

    /// The currently applied appearance, if any
    pub fn last_applied(&self) -> Option<&Appearance> {
        self.last_applied.as_ref()
    }

    /// Handle a completed "screen became active" navigation transition
    ///
    /// Screens without the appearance capability are a complete no-op:
    /// visibility flags and colors stay whatever the previous screen left
    /// behind. Screens with the capability get their visibility
    /// preferences applied first, then their appearance (so the hidden-bar
    /// guard in the strategy sees the new flags).
    pub fn on_screen_became_active(
        &mut self,
        host: &mut dyn ChromeHost,
        screen: &dyn Screen,
        animated: bool,
    ) {
        let Some(ctx) = screen.appearance_context() else {
            tracing::trace!(
                screen = screen.id().to_raw(),
                "screen has no appearance context, inheriting chrome"
            );
            return;
        };

        host.set_bar_hidden(BarKind::Navigation, ctx.prefers_bar_hidden(), animated);
        host.set_bar_hidden(BarKind::Toolbar, ctx.prefers_toolbar_hidden(), animated);

        self.apply_appearance(host, ctx.preferred_appearance(), animated);
    }

    /// Apply a candidate appearance if it differs from the current one
    ///
    /// `None` is "no opinion" and leaves the applied appearance untouched.
    /// An equal candidate is suppressed entirely — no strategy call, no
    /// status bar signal.
    pub fn apply_appearance(
        &mut self,
        host: &mut dyn ChromeHost,
        candidate: Option<Appearance>,
        animated: bool,
    ) {
        let Some(candidate) = candidate else {
            tracing::trace!("no appearance candidate, keeping current chrome");
            return;
        };

        if self.last_applied.as_ref() == Some(&candidate) {
            tracing::trace!("appearance unchanged, suppressing re-apply");
            return;
        }

        tracing::debug!(
            status_bar = ?candidate.status_bar_style,
            animated,
            "applying chrome appearance"
        );

        self.last_applied = Some(candidate);
        self.strategy.apply(&candidate, host, animated);
        host.request_status_bar_refresh();
    }

    /// Explicit re-resolution requested by a screen whose internal state
    /// changed (entering an edit mode, say)
    ///
    /// Gated twice: the screen must be the host's active screen, and no
    /// transition may be in progress. Either failure is a silent no-op —
    /// this keeps a stale or mid-gesture screen from restyling chrome it
    /// does not own.
    pub fn request_update(&mut self, host: &mut dyn ChromeHost, screen: &dyn Screen) {
        if host.active_screen() != Some(screen.id()) {
            tracing::trace!(
                screen = screen.id().to_raw(),
                "update request from inactive screen ignored"
            );
            return;
        }
        if host.transition_in_progress() {
            tracing::trace!(
                screen = screen.id().to_raw(),
                "update request during transition ignored"
            );
            return;
        }

        self.on_screen_became_active(host, screen, true);
    }

    /// Status bar style to report to the platform
    pub fn current_status_bar_style(&self, host: &dyn ChromeHost) -> StatusBarStyle {
        match &self.last_applied {
            Some(appearance) => appearance.status_bar_style,
            None => host.default_status_bar_style(),
        }
    }

    /// Whether a status bar style update should animate
    pub fn status_bar_update_is_animated(&self, host: &dyn ChromeHost) -> bool {
        if self.last_applied.is_some() {
            true
        } else {
            host.default_update_is_animated()
        }
    }

    /// Animation kind for a status bar style update
    ///
    /// Fixed to fade whenever updates animate at all.
    pub fn status_bar_update_animation(&self, host: &dyn ChromeHost) -> StatusBarAnimation {
        if self.status_bar_update_is_animated(host) {
            StatusBarAnimation::Fade
        } else {
            StatusBarAnimation::None
        }
    }

    /// Replace the applying strategy at runtime
    ///
    /// The currently applied appearance, if any, is immediately re-applied
    /// (non-animated) through the new strategy so visuals stay consistent
    /// with the swap. `last_applied` is left as-is and no status bar
    /// refresh is signalled, since the appearance value did not change.
    pub fn set_strategy(&mut self, host: &mut dyn ChromeHost, strategy: Box<dyn ApplyingStrategy>) {
        self.strategy = strategy;

        if let Some(appearance) = self.last_applied {
            tracing::debug!("strategy replaced, re-applying current appearance");
            self.strategy.apply(&appearance, host, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_no_applied_appearance() {
        let resolver = AppearanceResolver::default();
        assert!(resolver.last_applied().is_none());
    }
}
