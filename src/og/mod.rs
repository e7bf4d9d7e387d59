//! Social-preview card rendering, pure Rust end to end.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Font registration** | embedded DejaVu Sans Bold via `fontdb` |
//! | **Shaping + glyph raster** | `cosmic-text` (swash) |
//! | **Canvas + compositing** | `image::RgbaImage`, source-over blend |
//! | **Encode → PNG** | `image` PNG codec |
//!
//! The module is split into:
//! - **Typesetting**: [`Typesetter`] wraps the font system and paints a
//!   wrapped text block onto a canvas
//! - **Rendering**: [`render_card`] / [`render_png`] compose the fixed
//!   1200×630 layout and encode it
//!
//! Rendering never consults system fonts: the only registered face is
//! compiled into the binary, so two renders of the same title produce
//! byte-identical PNG output on any host.

mod render;
mod typeset;

pub use render::{render_card, render_png};
pub use typeset::{TextBlock, Typesetter};

use thiserror::Error;

/// Canvas width in pixels — the conventional social-preview size.
pub const CARD_WIDTH: u32 = 1200;
/// Canvas height in pixels.
pub const CARD_HEIGHT: u32 = 630;

/// Title rendered when the request carries none.
pub const DEFAULT_TITLE: &str = "</> Andresromero.dev";

#[derive(Error, Debug)]
pub enum OgError {
    #[error("embedded font failed to register: {0}")]
    Font(String),
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Resolve the title to render: absent or empty input falls back to
/// [`DEFAULT_TITLE`].
pub fn effective_title(title: Option<&str>) -> &str {
    match title {
        Some(t) if !t.is_empty() => t,
        _ => DEFAULT_TITLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_title_passes_through_non_empty() {
        assert_eq!(effective_title(Some("Hello")), "Hello");
    }

    #[test]
    fn effective_title_defaults_when_absent() {
        assert_eq!(effective_title(None), DEFAULT_TITLE);
    }

    #[test]
    fn effective_title_defaults_when_empty() {
        assert_eq!(effective_title(Some("")), DEFAULT_TITLE);
    }

    #[test]
    fn whitespace_title_is_not_empty() {
        // Only the literal empty string falls back; a space is a title.
        assert_eq!(effective_title(Some(" ")), " ");
    }
}
