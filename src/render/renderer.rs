use std::io::Cursor;

use image::{imageops::FilterType, ImageFormat, Rgba, RgbaImage};
use thiserror::Error;

use super::{
    font::{FontError, FontMeasure},
    layout::{PositionedLine, QuoteLayout},
};

/// Canvas and text constants. These are product decisions, not configuration.
pub const CANVAS_WIDTH: u32 = 600;
pub const CANVAS_HEIGHT: u32 = 400;
pub const QUOTE_FONT_PX: f32 = 28.0;
pub const ATTRIBUTION_FONT_PX: f32 = 20.0;
/// Vertical step between quote lines; also the step down to the attribution.
pub const LINE_HEIGHT: f32 = 36.0;

const TEXT_MARGIN: f32 = 40.0;
const OUTLINE_PX: i32 = 2;
const FILL_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
const OUTLINE_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Font(#[from] FontError),
    #[error("Background image could not be decoded")]
    UndecodableBackground(#[source] image::ImageError),
    #[error("Failed to encode the rendered image")]
    Encode(#[source] image::ImageError),
}

/// Composes a fetched background with outlined quote text into a PNG.
pub struct QuoteImageRenderer {
    font: FontMeasure,
}

impl QuoteImageRenderer {
    pub fn from_font_file(path: &str) -> Result<Self, RenderError> {
        Ok(QuoteImageRenderer {
            font: FontMeasure::from_file(path)?,
        })
    }

    /// Widest a wrapped quote line may render.
    pub fn max_text_width(&self) -> f32 {
        CANVAS_WIDTH as f32 - 2.0 * TEXT_MARGIN
    }

    pub fn quote_width(&self, text: &str) -> f32 {
        self.font.text_width(QUOTE_FONT_PX, text)
    }

    pub fn attribution_width(&self, text: &str) -> f32 {
        self.font.text_width(ATTRIBUTION_FONT_PX, text)
    }

    /// Draws the laid-out quote lines and the attribution line over the
    /// background and returns the encoded PNG bytes.
    pub fn render(
        &self,
        background: &[u8],
        quote: &QuoteLayout,
        attribution: &PositionedLine,
    ) -> Result<Vec<u8>, RenderError> {
        let mut canvas = decode_background(background)?;

        for line in &quote.lines {
            self.draw_outlined(&mut canvas, QUOTE_FONT_PX, line);
        }
        self.draw_outlined(&mut canvas, ATTRIBUTION_FONT_PX, attribution);

        encode_png(&canvas)
    }

    /// Outline first (the glyph stamped at every offset around the target
    /// position), then the fill on top.
    fn draw_outlined(&self, canvas: &mut RgbaImage, px: f32, line: &PositionedLine) {
        let x = line.x.round() as i32;
        let y = line.y.round() as i32;

        for dx in -OUTLINE_PX..=OUTLINE_PX {
            for dy in -OUTLINE_PX..=OUTLINE_PX {
                if dx == 0 && dy == 0 {
                    continue;
                }
                self.font
                    .draw_text(canvas, px, x + dx, y + dy, OUTLINE_COLOR, &line.text);
            }
        }
        self.font.draw_text(canvas, px, x, y, FILL_COLOR, &line.text);
    }
}

/// Decodes the fetched bytes and stretches them onto the canvas. Backgrounds
/// of any dimensions are accepted; aspect ratio is not preserved.
fn decode_background(bytes: &[u8]) -> Result<RgbaImage, RenderError> {
    let decoded = image::load_from_memory(bytes).map_err(RenderError::UndecodableBackground)?;
    Ok(decoded
        .resize_exact(CANVAS_WIDTH, CANVAS_HEIGHT, FilterType::Lanczos3)
        .to_rgba8())
}

fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut buffer = Cursor::new(Vec::new());
    canvas
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(RenderError::Encode)?;
    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_fixture(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]));
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, ImageFormat::Png).unwrap();
        buffer.into_inner()
    }

    #[test]
    fn test_background_is_stretched_to_the_canvas() {
        let canvas = decode_background(&png_fixture(10, 10)).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (CANVAS_WIDTH, CANVAS_HEIGHT));
    }

    #[test]
    fn test_oversized_background_is_shrunk_to_the_canvas() {
        let canvas = decode_background(&png_fixture(1200, 300)).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (CANVAS_WIDTH, CANVAS_HEIGHT));
    }

    #[test]
    fn test_garbage_background_is_rejected() {
        let result = decode_background(b"definitely not an image");
        assert!(matches!(
            result,
            Err(RenderError::UndecodableBackground(_))
        ));
    }

    #[test]
    fn test_encoded_png_round_trips() {
        let canvas = RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 255]));
        let bytes = encode_png(&canvas).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.get_pixel(0, 0), &Rgba([1, 2, 3, 255]));
    }
}
