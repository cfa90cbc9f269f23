//! Navchrome Demo
//!
//! Drives the appearance resolver against a simulated navigation host and
//! logs every chrome mutation, so the suppression behavior is visible:
//!
//! - pushing a screen without an appearance context inherits chrome
//! - pushing a styled screen applies its appearance once
//! - a redundant update request is a logged no-op
//! - entering "edit mode" restyles via `request_update`
//!
//! Run with: cargo run -p navchrome_demo

use anyhow::Result;
use navchrome_core::{
    Appearance, AppearanceContext, ChromePreset, Color, Screen, ScreenId, StatusBarStyle,
};
use navchrome_resolver::{AppearanceResolver, BarKind, NavigationHost, StatusBarHost};

/// Simulated navigation container that logs every mutation.
#[derive(Debug, Default)]
struct ConsoleHost {
    nav_bar_hidden: bool,
    toolbar_hidden: bool,
    transition_in_progress: bool,
    active_screen: Option<ScreenId>,
}

impl NavigationHost for ConsoleHost {
    fn set_bar_hidden(&mut self, bar: BarKind, hidden: bool, animated: bool) {
        match bar {
            BarKind::Navigation => self.nav_bar_hidden = hidden,
            BarKind::Toolbar => self.toolbar_hidden = hidden,
        }
        tracing::info!(?bar, hidden, animated, "bar visibility");
    }

    fn bar_hidden(&self, bar: BarKind) -> bool {
        match bar {
            BarKind::Navigation => self.nav_bar_hidden,
            BarKind::Toolbar => self.toolbar_hidden,
        }
    }

    fn transition_in_progress(&self) -> bool {
        self.transition_in_progress
    }

    fn active_screen(&self) -> Option<ScreenId> {
        self.active_screen
    }

    fn set_bar_background(&mut self, bar: BarKind, color: Color, animated: bool) {
        tracing::info!(?bar, rgba = ?color.to_array(), animated, "bar background");
    }

    fn set_bar_tint(&mut self, bar: BarKind, color: Color) {
        tracing::info!(?bar, rgba = ?color.to_array(), "bar tint");
    }

    fn set_bar_chrome_tint(&mut self, bar: BarKind, color: Option<Color>) {
        tracing::info!(?bar, rgba = ?color.map(|c| c.to_array()), "bar chrome tint");
    }

    fn set_bar_shadow_hidden(&mut self, bar: BarKind, hidden: bool) {
        tracing::info!(?bar, hidden, "bar shadow");
    }

    fn set_title_color(&mut self, color: Color) {
        tracing::info!(rgba = ?color.to_array(), "title color");
    }
}

impl StatusBarHost for ConsoleHost {
    fn default_status_bar_style(&self) -> StatusBarStyle {
        StatusBarStyle::Default
    }

    fn default_update_is_animated(&self) -> bool {
        false
    }

    fn request_status_bar_refresh(&mut self) {
        tracing::info!("status bar refresh requested");
    }
}

/// Home screen: no appearance opinion, inherits whatever chrome is applied.
struct HomeScreen;

impl Screen for HomeScreen {
    fn id(&self) -> ScreenId {
        ScreenId::new(1)
    }
}

/// Editor screen: midnight chrome normally, ocean chrome in edit mode.
struct EditorScreen {
    editing: bool,
}

impl AppearanceContext for EditorScreen {
    fn preferred_appearance(&self) -> Option<Appearance> {
        let preset = if self.editing {
            ChromePreset::Ocean
        } else {
            ChromePreset::Midnight
        };
        Some(preset.appearance())
    }
}

impl Screen for EditorScreen {
    fn id(&self) -> ScreenId {
        ScreenId::new(2)
    }

    fn appearance_context(&self) -> Option<&dyn AppearanceContext> {
        Some(self)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,navchrome_resolver=trace")),
        )
        .init();

    let mut resolver = AppearanceResolver::default();
    let mut host = ConsoleHost::default();

    tracing::info!("push Home (no appearance context)");
    host.active_screen = Some(HomeScreen.id());
    resolver.on_screen_became_active(&mut host, &HomeScreen, false);

    tracing::info!("push Editor (midnight chrome)");
    let mut editor = EditorScreen { editing: false };
    host.active_screen = Some(editor.id());
    resolver.on_screen_became_active(&mut host, &editor, true);
    tracing::info!(style = ?resolver.current_status_bar_style(&host), "status bar now");

    tracing::info!("redundant update request (same appearance, should no-op)");
    resolver.request_update(&mut host, &editor);

    tracing::info!("enter edit mode (ocean chrome via request_update)");
    editor.editing = true;
    resolver.request_update(&mut host, &editor);

    tracing::info!("pop back to Home (chrome inherited, not reset)");
    host.active_screen = Some(HomeScreen.id());
    resolver.on_screen_became_active(&mut host, &HomeScreen, true);
    tracing::info!(style = ?resolver.current_status_bar_style(&host), "status bar still");

    Ok(())
}
