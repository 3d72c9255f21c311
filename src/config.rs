//! Label configuration with documented defaults.
//!
//! The original tool kept its tape geometry, font sizes, and spacing as
//! module-level constants. Here they form a single immutable [`LabelConfig`]
//! value passed explicitly into the composer. There is no config file and no
//! environment lookup; callers construct the default and override fields in
//! code when needed.

use qrcode::EcLevel;
use std::path::PathBuf;

use crate::constants::{DEFAULT_OUTPUT_FILE, PRINTER_COMMAND};

/// Printable height of the label tape in pixels.
///
/// A Brother D410 can print 128 px, but common 12 mm tape only exposes 120.
const DEFAULT_MAX_HEIGHT: u32 = 120;

/// Font size for the title block.
const DEFAULT_TITLE_FONT_SIZE: u32 = 48;

/// Font size for the label line and code line.
const DEFAULT_TEXT_FONT_SIZE: u32 = 20;

/// Horizontal gap between the QR code and the text column, and after it.
const DEFAULT_HSPACE: u32 = 16;

/// Base vertical gap between stacked text blocks.
const DEFAULT_VSPACE: u32 = 8;

/// Layout and rendering parameters for one label.
///
/// All fields are plain values with the defaults listed on
/// [`LabelConfig::default`]; the struct is cheap to clone and never mutated
/// by the composer.
#[derive(Debug, Clone)]
pub struct LabelConfig {
    /// Maximum height of the composed canvas in pixels (tape constraint).
    pub max_height: u32,
    /// Font size for the title text block.
    pub title_font_size: u32,
    /// Font size for the label line and the code line.
    pub text_font_size: u32,
    /// Horizontal gap around the text column in pixels.
    pub hspace: u32,
    /// Vertical gap unit between text blocks in pixels.
    pub vspace: u32,
    /// Short literal drawn as the title block.
    pub title_text: String,
    /// Prefix of the label line; the category letter and a trailing `/` are appended.
    pub label_prefix: String,
    /// Prefix tag of the QR payload string.
    pub payload_prefix: String,
    /// Fixed QR code version (3 = 29x29 modules).
    pub qr_version: i16,
    /// Fixed QR error-correction level.
    pub qr_ec_level: EcLevel,
    /// Pixels drawn per QR module.
    pub qr_box_size: u32,
    /// Default output path for the rendered image.
    pub output_file: PathBuf,
    /// External printer command.
    pub printer_command: String,
    /// TrueType font candidates, tried in order until one loads.
    pub font_paths: Vec<PathBuf>,
}

impl Default for LabelConfig {
    /// Defaults matching the Brother D410 tape setup:
    /// 120 px tape height, 48/20 px fonts, 16/8 px spacing, QR version 3 at
    /// error-correction level Q with 4 px modules and no quiet zone.
    fn default() -> Self {
        Self {
            max_height: DEFAULT_MAX_HEIGHT,
            title_font_size: DEFAULT_TITLE_FONT_SIZE,
            text_font_size: DEFAULT_TEXT_FONT_SIZE,
            hspace: DEFAULT_HSPACE,
            vspace: DEFAULT_VSPACE,
            title_text: "JW".to_string(),
            label_prefix: "shelfman.de/".to_string(),
            payload_prefix: "SFM".to_string(),
            qr_version: 3,
            qr_ec_level: EcLevel::Q,
            qr_box_size: 4,
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            printer_command: PRINTER_COMMAND.to_string(),
            font_paths: default_font_paths(),
        }
    }
}

/// Common TrueType font locations across Linux distributions.
///
/// The first readable entry wins. Sans fonts are preferred since the label
/// text mixes letters, digits, and hyphens at small sizes.
fn default_font_paths() -> Vec<PathBuf> {
    [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
        "/usr/share/fonts/gnu-free/FreeSans.ttf",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_tape_setup() {
        let config = LabelConfig::default();

        assert_eq!(config.max_height, 120);
        assert_eq!(config.title_font_size, 48);
        assert_eq!(config.text_font_size, 20);
        assert_eq!(config.hspace, 16);
        assert_eq!(config.vspace, 8);
        assert_eq!(config.qr_version, 3);
        assert_eq!(config.qr_ec_level, EcLevel::Q);
        assert_eq!(config.qr_box_size, 4);
        assert_eq!(config.payload_prefix, "SFM");
        assert_eq!(config.output_file, PathBuf::from("shelfman_guid_qr.png"));
    }

    #[test]
    fn test_font_candidates_not_empty() {
        let config = LabelConfig::default();
        assert!(!config.font_paths.is_empty());
    }
}
