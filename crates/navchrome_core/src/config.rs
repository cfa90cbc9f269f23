//! TOML appearance configuration
//!
//! Hosts can ship chrome appearances as data instead of code:
//!
//! ```toml
//! status_bar = "light"
//!
//! [navigation_bar]
//! background = "#16161e"
//! tint = "#c0caf5"
//!
//! [toolbar]
//! background = "#16161e"
//! tint = "#c0caf5"
//! ```
//!
//! Colors are `#rrggbb` or `#rrggbbaa` hex strings. Omitted bars fall back
//! to [`BarStyle::default`]; an omitted `status_bar` follows the navigation
//! bar content style.

use crate::color::Color;
use crate::style::{Appearance, BarContentStyle, BarStyle, StatusBarStyle};
use serde::Deserialize;
use thiserror::Error;

/// Appearance config errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Document is not valid TOML or has the wrong shape
    #[error("invalid appearance document: {0}")]
    Document(#[from] toml::de::Error),

    /// Color literal is not `#rrggbb` / `#rrggbbaa`
    #[error("invalid color literal {0:?}")]
    Color(String),

    /// Unknown style keyword (expected "default" or "light")
    #[error("unknown style keyword {0:?}")]
    Style(String),
}

/// Result type for appearance config parsing
pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
struct AppearanceDoc {
    status_bar: Option<String>,
    navigation_bar: Option<BarDoc>,
    toolbar: Option<BarDoc>,
}

#[derive(Debug, Deserialize)]
struct BarDoc {
    background: Option<String>,
    tint: Option<String>,
    bar_tint: Option<String>,
    content: Option<String>,
}

/// Parse an [`Appearance`] from a TOML document.
pub fn appearance_from_toml(doc: &str) -> Result<Appearance> {
    let doc: AppearanceDoc = toml::from_str(doc)?;

    let navigation_bar = match doc.navigation_bar {
        Some(bar) => bar_style(bar)?,
        None => BarStyle::default(),
    };
    let toolbar = match doc.toolbar {
        Some(bar) => bar_style(bar)?,
        None => BarStyle::default(),
    };

    let status_bar_style = match doc.status_bar.as_deref() {
        Some("default") => StatusBarStyle::Default,
        Some("light") => StatusBarStyle::LightContent,
        Some(other) => return Err(ConfigError::Style(other.to_string())),
        None => match navigation_bar.content {
            BarContentStyle::Default => StatusBarStyle::Default,
            BarContentStyle::Light => StatusBarStyle::LightContent,
        },
    };

    let appearance = Appearance::new(status_bar_style, navigation_bar, toolbar);
    tracing::debug!(status_bar = ?appearance.status_bar_style, "parsed appearance document");
    Ok(appearance)
}

fn bar_style(doc: BarDoc) -> Result<BarStyle> {
    let mut style = match (doc.background, doc.tint) {
        (Some(bg), Some(tint)) => BarStyle::opaque(parse_color(&bg)?, parse_color(&tint)?),
        (Some(bg), None) => {
            let bg = parse_color(&bg)?;
            let tint = BarStyle::default().tint_color;
            BarStyle::opaque(bg, tint)
        }
        (None, Some(tint)) => BarStyle {
            tint_color: parse_color(&tint)?,
            ..BarStyle::default()
        },
        (None, None) => BarStyle::default(),
    };

    if let Some(bar_tint) = doc.bar_tint {
        style = style.with_bar_tint(parse_color(&bar_tint)?);
    }

    // An explicit content keyword overrides the luminance-derived one
    if let Some(content) = doc.content {
        style.content = match content.as_str() {
            "default" => BarContentStyle::Default,
            "light" => BarContentStyle::Light,
            other => return Err(ConfigError::Style(other.to_string())),
        };
    }

    Ok(style)
}

fn parse_color(literal: &str) -> Result<Color> {
    let hex = literal
        .strip_prefix('#')
        .filter(|h| h.is_ascii())
        .ok_or_else(|| ConfigError::Color(literal.to_string()))?;

    let channel = |range: std::ops::Range<usize>| -> Result<f32> {
        u8::from_str_radix(&hex[range], 16)
            .map(|v| v as f32 / 255.0)
            .map_err(|_| ConfigError::Color(literal.to_string()))
    };

    match hex.len() {
        6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        8 => Ok(Color::rgba(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        )),
        _ => Err(ConfigError::Color(literal.to_string())),
    }
}
