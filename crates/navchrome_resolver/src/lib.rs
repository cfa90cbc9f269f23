//! Navchrome Appearance Resolver
//!
//! Declarative chrome configuration for a navigation container: instead of
//! every screen imperatively poking bar colors and status bar style, each
//! screen *declares* its preferences and a single coordinator decides what
//! to apply and when.
//!
//! # Architecture
//!
//! - [`AppearanceResolver`] — the coordinator. Pull-based: on every
//!   completed navigation transition it queries the new active screen,
//!   compares the declared appearance against the last applied one, and
//!   only on change mutates the host.
//! - [`ApplyingStrategy`] — the replaceable collaborator that performs the
//!   actual visual mutation. [`SolidColorStrategy`] is the default.
//! - [`NavigationHost`] / [`StatusBarHost`] — traits the embedding
//!   navigation container implements; the resolver owns no platform state.
//!
//! # Example
//!
//! ```rust,ignore
//! use navchrome_resolver::AppearanceResolver;
//!
//! let mut resolver = AppearanceResolver::default();
//!
//! // From the host's navigation delegate, once per completed transition:
//! resolver.on_screen_became_active(&mut host, &screen, animated);
//!
//! // From a screen whose internal state changed (e.g. edit mode):
//! resolver.request_update(&mut host, &screen);
//!
//! // From the platform's status bar query:
//! let style = resolver.current_status_bar_style(&host);
//! ```

pub mod host;
pub mod resolver;
pub mod strategy;

pub use host::{BarKind, ChromeHost, NavigationHost, StatusBarHost};
pub use resolver::AppearanceResolver;
pub use strategy::{ApplyingStrategy, SolidColorStrategy};
