//! Font loading and text metrics
//!
//! Text is measured and drawn through [`FontFace`] so word-wrapping uses the
//! same metrics as drawing. Loading never fails: the chain ends in a built-in
//! 8x8 bitmap font.

use std::path::{Path, PathBuf};

use ab_glyph::{FontArc, PxScale};
use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;

use crate::domain::DomainError;

/// System fonts tried after the configured one
const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

const BITMAP_GLYPH_SIZE: u32 = 8;

/// A loaded font, TrueType or the built-in bitmap fallback
#[derive(Clone)]
pub enum FontFace {
    TrueType(FontArc),
    Bitmap,
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontFace::TrueType(_) => f.write_str("FontFace::TrueType"),
            FontFace::Bitmap => f.write_str("FontFace::Bitmap"),
        }
    }
}

impl FontFace {
    /// Walk the fallback chain: `preferred`, then system fonts, then bitmap
    pub fn load(preferred: Option<&Path>) -> Self {
        let candidates = preferred
            .map(Path::to_path_buf)
            .into_iter()
            .chain(SYSTEM_FONT_PATHS.iter().map(PathBuf::from));

        for path in candidates {
            match Self::from_path(&path) {
                Ok(font) => {
                    tracing::debug!("Loaded font from {}", path.display());
                    return font;
                }
                Err(e) => tracing::debug!("Skipping font {}: {}", path.display(), e),
            }
        }

        tracing::debug!("No TrueType font available, using built-in bitmap font");
        FontFace::Bitmap
    }

    /// Load a TrueType/OpenType font file
    pub fn from_path(path: &Path) -> Result<Self, DomainError> {
        let bytes = std::fs::read(path)
            .map_err(|e| DomainError::Render(format!("Failed to read font: {e}")))?;
        let font = FontArc::try_from_vec(bytes)
            .map_err(|e| DomainError::Render(format!("Invalid font: {e}")))?;
        Ok(FontFace::TrueType(font))
    }

    /// The built-in bitmap font, identical on every machine
    pub fn builtin() -> Self {
        FontFace::Bitmap
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, FontFace::Bitmap)
    }

    fn bitmap_scale(size: f32) -> u32 {
        ((size / BITMAP_GLYPH_SIZE as f32).round() as u32).max(1)
    }

    /// Rendered width of `text` in pixels
    pub fn text_width(&self, size: f32, text: &str) -> u32 {
        match self {
            FontFace::TrueType(font) => text_size(PxScale::from(size), font, text).0,
            FontFace::Bitmap => {
                text.chars().count() as u32 * BITMAP_GLYPH_SIZE * Self::bitmap_scale(size)
            }
        }
    }

    /// Vertical distance between consecutive lines
    pub fn line_height(&self, size: f32) -> u32 {
        match self {
            FontFace::TrueType(_) => (size * 1.35).ceil() as u32,
            FontFace::Bitmap => BITMAP_GLYPH_SIZE * Self::bitmap_scale(size) + size as u32 / 3,
        }
    }

    /// Draw `text` with its top-left corner at (`x`, `y`)
    pub fn draw(
        &self,
        image: &mut RgbImage,
        color: Rgb<u8>,
        x: i32,
        y: i32,
        size: f32,
        text: &str,
    ) {
        match self {
            FontFace::TrueType(font) => {
                draw_text_mut(image, color, x, y, PxScale::from(size), font, text);
            }
            FontFace::Bitmap => {
                draw_bitmap_text(image, color, x, y, Self::bitmap_scale(size), text)
            }
        }
    }
}

fn glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

fn draw_bitmap_text(image: &mut RgbImage, color: Rgb<u8>, x: i32, y: i32, scale: u32, text: &str) {
    let advance = (BITMAP_GLYPH_SIZE * scale) as i32;
    for (index, c) in text.chars().enumerate() {
        let origin_x = x + index as i32 * advance;
        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..8 {
                if bits & (1 << col) != 0 {
                    let rect = Rect::at(
                        origin_x + col * scale as i32,
                        y + row as i32 * scale as i32,
                    )
                    .of_size(scale, scale);
                    draw_filled_rect_mut(image, rect, color);
                }
            }
        }
    }
}
