//! Navchrome Value Model
//!
//! This crate provides the value types and capability traits for the
//! navchrome appearance system:
//!
//! - **Appearance values**: Immutable descriptions of desired chrome styling
//! - **Screen capability**: An optional trait a screen implements to declare
//!   its chrome preferences
//! - **Presets**: A small catalog of ready-made appearances
//! - **Config**: TOML deserialization of appearances
//!
//! # Example
//!
//! ```rust
//! use navchrome_core::{Appearance, BarStyle, Color, StatusBarStyle};
//!
//! let appearance = Appearance::new(
//!     StatusBarStyle::LightContent,
//!     BarStyle::opaque(Color::from_hex(0x1a1a2e), Color::WHITE),
//!     BarStyle::default(),
//! );
//!
//! // Appearances compare structurally
//! assert_eq!(appearance, appearance.clone());
//! ```
//!
//! The coordination logic that decides *when* an appearance gets applied
//! lives in `navchrome_resolver`; this crate is purely the data model.

pub mod color;
pub mod config;
pub mod context;
pub mod presets;
pub mod style;

pub use color::Color;
pub use config::{appearance_from_toml, ConfigError};
pub use context::{AppearanceContext, Screen, ScreenId};
pub use presets::ChromePreset;
pub use style::{Appearance, BarContentStyle, BarStyle, StatusBarAnimation, StatusBarStyle};
