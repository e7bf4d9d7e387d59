//! Card composition and PNG encoding.
//!
//! The layout is fixed: a white 1200×630 canvas with one large bold block
//! of dark text, left-aligned at a fixed inset and vertically centered.
//! Everything about the output is a function of the title string.

use std::io::Cursor;

use cosmic_text::Color;
use image::{ImageFormat, Rgba, RgbaImage};

use super::typeset::{TextBlock, Typesetter};
use super::{CARD_HEIGHT, CARD_WIDTH, OgError};

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Headline block: 60px bold, left inset matching the page header offset.
const HEADLINE: TextBlock = TextBlock {
    font_size: 60.0,
    line_height: 68.0,
    inset_x: 96,
    color: Color::rgb(0, 0, 0),
};

/// Compose the preview card for `title`.
///
/// Arbitrarily long titles wrap at the content width and clip at the bottom
/// edge; that is accepted behavior, not an error.
pub fn render_card(title: &str) -> Result<RgbaImage, OgError> {
    let mut canvas = RgbaImage::from_pixel(CARD_WIDTH, CARD_HEIGHT, BACKGROUND);
    let mut typesetter = Typesetter::new()?;
    typesetter.paint_block(&mut canvas, title, &HEADLINE);
    Ok(canvas)
}

/// Compose the preview card for `title` and encode it as PNG bytes.
pub fn render_png(title: &str) -> Result<Vec<u8>, OgError> {
    let card = render_card(title)?;
    let mut cursor = Cursor::new(Vec::new());
    card.write_to(&mut cursor, ImageFormat::Png)?;
    Ok(cursor.into_inner())
}
