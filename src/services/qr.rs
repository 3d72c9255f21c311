//! QR code rasterization at a fixed version.

use anyhow::{Context, Result};
use image::{GrayImage, Luma};
use qrcode::{QrCode, Version};

use crate::config::LabelConfig;

/// Renders the payload into a monochrome QR raster.
///
/// The code is generated at the fixed version and error-correction level
/// from the config, then scaled so every module covers `qr_box_size` pixels.
/// No quiet-zone border is added; the tape provides its own margin. With the
/// default version 3 (29x29 modules) at 4 px per module the result is
/// 116x116 pixels regardless of payload content.
///
/// # Errors
///
/// Returns an error if the payload does not fit the fixed QR version, which
/// only happens when the configured prefix or identifier format grows beyond
/// the version's byte capacity.
pub fn render_code(payload: &str, config: &LabelConfig) -> Result<GrayImage> {
    let code = QrCode::with_version(
        payload.as_bytes(),
        Version::Normal(config.qr_version),
        config.qr_ec_level,
    )
    .with_context(|| {
        format!(
            "Payload of {} bytes does not fit QR version {}",
            payload.len(),
            config.qr_version
        )
    })?;

    let modules = code.width() as u32;
    let scale = config.qr_box_size.max(1);
    let size = modules * scale;

    let mut img = GrayImage::from_pixel(size, size, Luma([255u8]));

    for (i, color) in code.to_colors().iter().enumerate() {
        if *color == qrcode::Color::Dark {
            let x = (i as u32 % modules) * scale;
            let y = (i as u32 / modules) * scale;
            for dy in 0..scale {
                for dx in 0..scale {
                    img.put_pixel(x + dx, y + dy, Luma([0u8]));
                }
            }
        }
    }

    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_renders_116px() {
        // Version 3 is 29 modules; 29 * 4 px = 116 px.
        let img = render_code("SFM-X-08080808-0808-0818", &LabelConfig::default()).unwrap();

        assert_eq!(img.width(), 116);
        assert_eq!(img.height(), 116);
    }

    #[test]
    fn test_size_independent_of_payload_content() {
        let config = LabelConfig::default();
        let a = render_code("SFM-I-00000000-0000-0000", &config).unwrap();
        let b = render_code("SFM-L-ffffffff-ffff-ffff", &config).unwrap();

        assert_eq!((a.width(), a.height()), (b.width(), b.height()));
    }

    #[test]
    fn test_finder_pattern_corner_is_dark() {
        // Top-left module of the finder pattern is always dark, and with no
        // border it lands at the image origin.
        let img = render_code("SFM-X-08080808-0808-0818", &LabelConfig::default()).unwrap();

        assert_eq!(img.get_pixel(0, 0)[0], 0);
        assert_eq!(img.get_pixel(3, 3)[0], 0);
    }

    #[test]
    fn test_deterministic_render() {
        let config = LabelConfig::default();
        let a = render_code("SFM-C-01234567-89ab-cdef", &config).unwrap();
        let b = render_code("SFM-C-01234567-89ab-cdef", &config).unwrap();

        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_oversized_payload_is_rejected() {
        // Version 3 at level Q holds 32 bytes; 64 hex digits cannot fit.
        let long = "SFM-X-".to_string() + &"f".repeat(64);
        assert!(render_code(&long, &LabelConfig::default()).is_err());
    }
}
