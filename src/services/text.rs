//! Font loading, text measurement, and glyph drawing.
//!
//! One TrueType font is loaded from the first readable candidate path and
//! used at two sizes (title and text). Widths are measured from glyph
//! bounding boxes before the canvas is allocated; drawing rasterizes glyph
//! coverage onto the grayscale canvas with the y coordinate addressing the
//! top of the line rather than the baseline.

use anyhow::{bail, Result};
use image::{GrayImage, Luma};
use rusttype::{point, Font, Scale};
use std::fs;

use crate::config::LabelConfig;

/// A loaded font ready for measuring and drawing label text.
pub struct FontSet {
    font: Font<'static>,
}

impl FontSet {
    /// Loads the first usable TrueType font from the configured candidates.
    ///
    /// # Errors
    ///
    /// Returns an error when none of the candidate paths contains a loadable
    /// font. That is an environment fault: label text cannot be measured or
    /// drawn without one.
    pub fn load(config: &LabelConfig) -> Result<Self> {
        for path in &config.font_paths {
            if let Ok(bytes) = fs::read(path) {
                if let Some(font) = Font::try_from_vec(bytes) {
                    return Ok(Self { font });
                }
            }
        }

        bail!(
            "No usable TrueType font found (searched {} candidate paths)",
            config.font_paths.len()
        )
    }

    /// Measured pixel width of `text` at the given font size.
    ///
    /// The width is the rightmost glyph bounding-box edge of a layout run
    /// starting at x = 0. Empty strings measure 0.
    #[must_use]
    pub fn text_width(&self, text: &str, font_size: u32) -> u32 {
        let scale = Scale::uniform(font_size as f32);

        self.font
            .layout(text, scale, point(0.0, 0.0))
            .filter_map(|glyph| glyph.pixel_bounding_box())
            .map(|bb| bb.max.x)
            .max()
            .map_or(0, |x| x.max(0) as u32)
    }

    /// Draws `text` in black onto `img` with its top-left corner at (x, y).
    ///
    /// Glyph coverage is blended against the existing pixel so anti-aliased
    /// edges stay smooth on the white canvas. Pixels outside the image are
    /// discarded.
    pub fn draw_text(&self, img: &mut GrayImage, x: u32, y: u32, text: &str, font_size: u32) {
        let scale = Scale::uniform(font_size as f32);
        let ascent = self.font.v_metrics(scale).ascent;
        let origin = point(x as f32, y as f32 + ascent);

        for glyph in self.font.layout(text, scale, origin) {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, v| {
                    let px = bb.min.x + gx as i32;
                    let py = bb.min.y + gy as i32;
                    if px >= 0 && py >= 0 && (px as u32) < img.width() && (py as u32) < img.height()
                    {
                        let alpha = (v * 255.0) as u16;
                        let current = u16::from(img.get_pixel(px as u32, py as u32)[0]);
                        let blended = (current * (255 - alpha) / 255) as u8;
                        img.put_pixel(px as u32, py as u32, Luma([blended]));
                    }
                });
            }
        }
    }
}
