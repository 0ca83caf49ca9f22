use image::{Rgba, RgbaImage};
use rusttype::{point, Font, Scale};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FontError {
    #[error("Failed to read font file {path}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Font file {path} is not a usable TTF")]
    Invalid { path: String },
}

/// A loaded TTF that both measures text for the layout engine and rasterizes
/// it for the renderer, so wrapping decisions match what gets drawn.
pub struct FontMeasure {
    font: Font<'static>,
}

impl FontMeasure {
    pub fn from_file(path: &str) -> Result<Self, FontError> {
        let bytes = std::fs::read(path).map_err(|source| FontError::Unreadable {
            path: path.to_owned(),
            source,
        })?;
        let font = Font::try_from_vec(bytes).ok_or_else(|| FontError::Invalid {
            path: path.to_owned(),
        })?;
        Ok(FontMeasure { font })
    }

    /// Rendered width of `text` at `px` pixels, from the glyph bounding boxes.
    pub fn text_width(&self, px: f32, text: &str) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        let scale = Scale::uniform(px);
        let v_metrics = self.font.v_metrics(scale);
        self.font
            .layout(text, scale, point(0.0, v_metrics.ascent))
            .filter_map(|glyph| glyph.pixel_bounding_box())
            .map(|bounding_box| bounding_box.max.x as f32)
            .fold(0.0, f32::max)
    }

    /// Draws `text` with its top-left corner at `(x, y)`, alpha-blending
    /// glyph coverage over the existing pixels. Pixels falling outside the
    /// image are dropped.
    pub fn draw_text(
        &self,
        img: &mut RgbaImage,
        px: f32,
        x: i32,
        y: i32,
        color: Rgba<u8>,
        text: &str,
    ) {
        let scale = Scale::uniform(px);
        let v_metrics = self.font.v_metrics(scale);
        let baseline = y as f32 + v_metrics.ascent;

        for glyph in self.font.layout(text, scale, point(x as f32, baseline)) {
            let Some(bounding_box) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|glyph_x, glyph_y, coverage| {
                let pixel_x = glyph_x as i32 + bounding_box.min.x;
                let pixel_y = glyph_y as i32 + bounding_box.min.y;
                if pixel_x < 0 || pixel_y < 0 {
                    return;
                }
                let (pixel_x, pixel_y) = (pixel_x as u32, pixel_y as u32);
                if pixel_x >= img.width() || pixel_y >= img.height() {
                    return;
                }
                let alpha = coverage.clamp(0.0, 1.0);
                if alpha == 0.0 {
                    return;
                }
                let inverse = 1.0 - alpha;
                let dst = img.get_pixel_mut(pixel_x, pixel_y);
                dst.0[0] = (color.0[0] as f32 * alpha + dst.0[0] as f32 * inverse) as u8;
                dst.0[1] = (color.0[1] as f32 * alpha + dst.0[1] as f32 * inverse) as u8;
                dst.0[2] = (color.0[2] as f32 * alpha + dst.0[2] as f32 * inverse) as u8;
                dst.0[3] = 255;
            });
        }
    }
}
