//! Text shaping and glyph rasterization.
//!
//! Wraps `cosmic-text`: a [`FontSystem`] seeded with the single embedded
//! face, a swash cache for glyph bitmaps, and one operation — paint a
//! wrapped, vertically centered text block onto an RGBA canvas.

use cosmic_text::fontdb::Database;
use cosmic_text::{
    Attrs, Buffer, Color, Family, FontSystem, Metrics, Shaping, SwashCache, Weight,
};
use image::RgbaImage;

use super::OgError;

/// The only face the renderer registers; system fonts are never consulted.
const FONT_DATA: &[u8] = include_bytes!("../../assets/DejaVuSans-Bold.ttf");
const FONT_FAMILY: &str = "DejaVu Sans";

/// Layout parameters for a painted text block.
///
/// Describes *what* to paint, not *how* — the split mirrors the distinction
/// between the card composition in [`render`](super::render) and the pixel
/// work here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBlock {
    /// Font size in pixels.
    pub font_size: f32,
    /// Line height in pixels (wrapped lines advance by this much).
    pub line_height: f32,
    /// Left edge of the block, also used as the right inset for wrapping.
    pub inset_x: u32,
    /// Text color, painted over whatever is already on the canvas.
    pub color: Color,
}

pub struct Typesetter {
    font_system: FontSystem,
    cache: SwashCache,
}

impl Typesetter {
    /// Build a typesetter around the embedded face.
    pub fn new() -> Result<Self, OgError> {
        let mut db = Database::new();
        db.load_font_data(FONT_DATA.to_vec());
        if db.is_empty() {
            return Err(OgError::Font(format!(
                "no face registered from {} embedded bytes",
                FONT_DATA.len()
            )));
        }
        let font_system = FontSystem::new_with_locale_and_db("en-US".to_string(), db);
        Ok(Self {
            font_system,
            cache: SwashCache::new(),
        })
    }

    /// Paint `text` onto `canvas`, wrapped at the block's content width and
    /// vertically centered. Lines that overflow the canvas are clipped at
    /// its edges — long input is rendered as far as it fits, never an error.
    pub fn paint_block(&mut self, canvas: &mut RgbaImage, text: &str, block: &TextBlock) {
        if text.is_empty() {
            return;
        }

        let content_width = (canvas.width().saturating_sub(block.inset_x * 2)).max(1) as f32;
        let mut buffer = Buffer::new(
            &mut self.font_system,
            Metrics::new(block.font_size, block.line_height),
        );
        buffer.set_size(&mut self.font_system, Some(content_width), None);
        buffer.set_text(
            &mut self.font_system,
            text,
            Attrs::new().family(Family::Name(FONT_FAMILY)).weight(Weight::BOLD),
            Shaping::Advanced,
        );
        buffer.shape_until_scroll(&mut self.font_system, false);

        let text_height = measure_height(&buffer);
        let offset_y = ((canvas.height() as f32 - text_height) / 2.0).max(0.0).round() as i32;
        let offset_x = block.inset_x as i32;

        buffer.draw(
            &mut self.font_system,
            &mut self.cache,
            block.color,
            |x, y, w, h, color| {
                for dy in 0..h as i32 {
                    for dx in 0..w as i32 {
                        blend_pixel(canvas, offset_x + x + dx, offset_y + y + dy, color);
                    }
                }
            },
        );
    }
}

/// Total height of the shaped text, from the top of the first line to the
/// bottom of the last.
fn measure_height(buffer: &Buffer) -> f32 {
    buffer
        .layout_runs()
        .map(|run| run.line_top + run.line_height)
        .fold(0.0, f32::max)
}

/// Source-over blend of a single coverage pixel onto the canvas, clipping
/// anything outside its bounds.
fn blend_pixel(canvas: &mut RgbaImage, x: i32, y: i32, color: Color) {
    if x < 0 || y < 0 || x >= canvas.width() as i32 || y >= canvas.height() as i32 {
        return;
    }
    let alpha = color.a() as u32;
    if alpha == 0 {
        return;
    }
    let src = [color.r() as u32, color.g() as u32, color.b() as u32];
    let dst = canvas.get_pixel_mut(x as u32, y as u32);
    for i in 0..3 {
        let blended = (src[i] * alpha + dst.0[i] as u32 * (255 - alpha)) / 255;
        dst.0[i] = blended as u8;
    }
    dst.0[3] = 255;
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn white_canvas(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba([255, 255, 255, 255]))
    }

    fn ink_count(canvas: &RgbaImage) -> usize {
        canvas.pixels().filter(|p| p.0[0] < 250).count()
    }

    fn block() -> TextBlock {
        TextBlock {
            font_size: 24.0,
            line_height: 28.0,
            inset_x: 10,
            color: Color::rgb(0, 0, 0),
        }
    }

    #[test]
    fn embedded_face_registers() {
        assert!(Typesetter::new().is_ok());
    }

    #[test]
    fn painting_text_leaves_ink() {
        let mut canvas = white_canvas(400, 100);
        let mut ts = Typesetter::new().unwrap();
        ts.paint_block(&mut canvas, "Hello", &block());
        assert!(ink_count(&canvas) > 0);
    }

    #[test]
    fn empty_text_paints_nothing() {
        let mut canvas = white_canvas(400, 100);
        let mut ts = Typesetter::new().unwrap();
        ts.paint_block(&mut canvas, "", &block());
        assert_eq!(ink_count(&canvas), 0);
    }

    #[test]
    fn long_text_clips_without_panicking() {
        let mut canvas = white_canvas(200, 60);
        let mut ts = Typesetter::new().unwrap();
        let long = "overflow ".repeat(200);
        ts.paint_block(&mut canvas, &long, &block());
        assert!(ink_count(&canvas) > 0);
    }

    #[test]
    fn markup_characters_are_plain_glyphs() {
        // `<script>` must come out as pixels like any other string.
        let mut canvas = white_canvas(400, 100);
        let mut ts = Typesetter::new().unwrap();
        ts.paint_block(&mut canvas, "<script>alert(1)</script>", &block());
        assert!(ink_count(&canvas) > 0);
    }
}
