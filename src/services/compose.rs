//! Label composition: fit check, layout arithmetic, and canvas assembly.
//!
//! Layout is a two-pass process. Every text block is measured first, then
//! the canvas is allocated at its final size and drawn once; a streaming
//! draw is impossible because the canvas width depends on the widest block.
//! All sizing decisions live in [`LayoutPlan`], a pure computation over
//! measured widths, so they can be tested without fonts or rendering.

use anyhow::Result;
use image::{imageops, GrayImage, Luma};
use std::fmt;

use crate::config::LabelConfig;
use crate::models::Payload;
use crate::services::qr;
use crate::services::text::FontSet;

/// The rendered QR code is taller than the printable tape height.
///
/// Fatal for the run: retrying with the same inputs would render the same
/// code. The payload or the QR parameters must change to fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeConstraintError {
    /// Rendered code height in pixels.
    pub height: u32,
    /// Maximum printable height in pixels.
    pub max_height: u32,
}

impl fmt::Display for SizeConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "QR code height in pixel {} does not fit into {}",
            self.height, self.max_height
        )
    }
}

impl std::error::Error for SizeConstraintError {}

/// Measured pixel widths of the three text blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextWidths {
    /// Width of the title block at the title font size.
    pub title: u32,
    /// Width of the label line at the text font size.
    pub label: u32,
    /// Width of the code line at the text font size.
    pub code: u32,
}

impl TextWidths {
    /// Width of the text column: the widest of the three blocks.
    #[must_use]
    pub fn column(&self) -> u32 {
        self.title.max(self.label).max(self.code)
    }
}

/// Every placement decision for one label, computed before drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPlan {
    /// Margin applied above, below, and left of the QR code.
    pub padding: u32,
    /// Width of the column reserved for text blocks.
    pub text_column: u32,
    /// Left edge of the text column on the canvas.
    pub text_column_x: u32,
    /// Final canvas width.
    pub canvas_width: u32,
    /// Final canvas height, always exactly the configured maximum.
    pub canvas_height: u32,
    /// Top edge of the title block.
    pub title_y: u32,
    /// Top edge of the label line.
    pub label_y: u32,
    /// Top edge of the code line.
    pub code_line_y: u32,
}

impl LayoutPlan {
    /// Computes the layout for a code raster of the given size and the
    /// measured text widths.
    ///
    /// The code is vertically centered: padding is half the leftover height,
    /// truncated, and the same amount is used as the left margin. The text
    /// blocks stack below each other with the configured vertical gaps.
    ///
    /// # Errors
    ///
    /// Returns [`SizeConstraintError`] when the code is taller than the
    /// configured maximum height. Nothing is allocated in that case.
    pub fn compute(
        code_width: u32,
        code_height: u32,
        widths: &TextWidths,
        config: &LabelConfig,
    ) -> Result<Self, SizeConstraintError> {
        if code_height > config.max_height {
            return Err(SizeConstraintError {
                height: code_height,
                max_height: config.max_height,
            });
        }

        let padding = (config.max_height - code_height) / 2;
        let text_column = widths.column();
        let text_column_x = padding + code_width + config.hspace;

        let title_y = config.vspace / 2;
        let label_y = title_y + config.title_font_size + config.vspace + config.vspace / 2;
        let code_line_y = label_y + config.text_font_size + config.vspace;

        Ok(Self {
            padding,
            text_column,
            text_column_x,
            canvas_width: text_column_x + text_column + config.hspace,
            canvas_height: config.max_height,
            title_y,
            label_y,
            code_line_y,
        })
    }

    /// X coordinate that centers a block of `block_width` in the text column.
    #[must_use]
    pub fn centered_x(&self, block_width: u32) -> u32 {
        self.text_column_x + self.text_column.saturating_sub(block_width) / 2
    }
}

/// A composed label image plus the figures reported in diagnostics.
#[derive(Debug)]
pub struct ComposedLabel {
    /// The final canvas, white background with code and text in black.
    pub image: GrayImage,
    /// Pixel width of the embedded QR code.
    pub code_width: u32,
    /// Pixel height of the embedded QR code.
    pub code_height: u32,
    /// Byte length of the encoded payload.
    pub payload_len: usize,
}

/// Renders the payload's QR code and composes the full label canvas.
///
/// The QR code sits at the left, vertically centered; the title, label line,
/// and code line stack to its right, each horizontally centered within the
/// text column.
///
/// # Errors
///
/// Returns [`SizeConstraintError`] (through `anyhow`) when the rendered code
/// exceeds the maximum tape height, or a rendering error when the payload
/// does not fit the fixed QR version.
pub fn compose_label(
    payload: &Payload,
    fonts: &FontSet,
    config: &LabelConfig,
) -> Result<ComposedLabel> {
    let code = qr::render_code(payload.as_str(), config)?;
    let (code_width, code_height) = code.dimensions();

    let title = config.title_text.as_str();
    let label_line = format!("{}{}/", config.label_prefix, payload.category().letter());
    let code_line = payload.identifier().as_str();

    let widths = TextWidths {
        title: fonts.text_width(title, config.title_font_size),
        label: fonts.text_width(&label_line, config.text_font_size),
        code: fonts.text_width(code_line, config.text_font_size),
    };

    let plan = LayoutPlan::compute(code_width, code_height, &widths, config)?;

    let mut canvas = GrayImage::from_pixel(plan.canvas_width, plan.canvas_height, Luma([255u8]));
    imageops::replace(
        &mut canvas,
        &code,
        i64::from(plan.padding),
        i64::from(plan.padding),
    );

    fonts.draw_text(
        &mut canvas,
        plan.centered_x(widths.title),
        plan.title_y,
        title,
        config.title_font_size,
    );
    fonts.draw_text(
        &mut canvas,
        plan.centered_x(widths.label),
        plan.label_y,
        &label_line,
        config.text_font_size,
    );
    fonts.draw_text(
        &mut canvas,
        plan.centered_x(widths.code),
        plan.code_line_y,
        code_line,
        config.text_font_size,
    );

    Ok(ComposedLabel {
        image: canvas,
        code_width,
        code_height,
        payload_len: payload.len(),
    })
}
