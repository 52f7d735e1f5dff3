//! Word Cloud Rendering
//!
//! `Renderer` is the seam for layout engines. `SpiralRenderer` is the
//! bundled implementation; it needs no font files.

mod font;
mod spiral;

use std::fmt;
use std::str::FromStr;

use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};

use crate::error::{CloudError, Result};
use crate::ranker::FrequencyTable;

pub use spiral::{SpiralRenderer, MIN_SPIRAL_STEP};

/// Canvas settings for a single render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub background: String,
}

impl RenderConfig {
    pub fn new(width: u32, height: u32, background: impl Into<String>) -> Self {
        Self {
            width,
            height,
            background: background.into(),
        }
    }

    /// Check dimensions and resolve the background color.
    pub fn validate(&self) -> Result<Color> {
        if self.width == 0 || self.height == 0 {
            return Err(CloudError::Render(format!(
                "canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        self.background
            .parse()
            .map_err(|err: InvalidColor| CloudError::Render(err.to_string()))
    }
}

pub trait Renderer: Send + Sync {
    /// Draw `table` onto a fresh canvas of exactly `config.width` by
    /// `config.height` pixels.
    fn render(&self, table: &FrequencyTable, config: &RenderConfig) -> Result<RgbImage>;

    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub [u8; 3]);

impl Color {
    pub const BLACK: Color = Color([0, 0, 0]);
    pub const WHITE: Color = Color([255, 255, 255]);

    pub fn to_rgb(self) -> Rgb<u8> {
        Rgb(self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid color {0:?}; use a name, #rgb, #rrggbb or rgb(r, g, b)")]
pub struct InvalidColor(pub String);

const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("red", [255, 0, 0]),
    ("green", [0, 128, 0]),
    ("lime", [0, 255, 0]),
    ("blue", [0, 0, 255]),
    ("navy", [0, 0, 128]),
    ("yellow", [255, 255, 0]),
    ("cyan", [0, 255, 255]),
    ("aqua", [0, 255, 255]),
    ("magenta", [255, 0, 255]),
    ("fuchsia", [255, 0, 255]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("silver", [192, 192, 192]),
    ("maroon", [128, 0, 0]),
    ("olive", [128, 128, 0]),
    ("teal", [0, 128, 128]),
    ("purple", [128, 0, 128]),
    ("orange", [255, 165, 0]),
    ("pink", [255, 192, 203]),
    ("brown", [165, 42, 42]),
    ("beige", [245, 245, 220]),
    ("ivory", [255, 255, 240]),
    ("gold", [255, 215, 0]),
];

impl FromStr for Color {
    type Err = InvalidColor;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = || InvalidColor(s.to_string());
        let value = s.trim().to_ascii_lowercase();

        if let Some(hex) = value.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(invalid);
        }

        if let Some(args) = value
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let channels = args
                .split(',')
                .map(|c| c.trim().parse::<u8>())
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|_| invalid())?;
            return match channels[..] {
                [r, g, b] => Ok(Color([r, g, b])),
                _ => Err(invalid()),
            };
        }

        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == value)
            .map(|(_, rgb)| Color(*rgb))
            .ok_or_else(invalid)
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (slot, digit) in rgb.iter_mut().zip(hex.chars()) {
                let d = digit.to_digit(16)? as u8;
                *slot = d * 17;
            }
            Some(Color(rgb))
        }
        6 => Some(Color([
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        ])),
        _ => None,
    }
}
