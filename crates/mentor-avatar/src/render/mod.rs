//! Avatar Renderer
//!
//! Turns a [`TraitRecord`] into a fixed-size raster image. Rendering is a
//! pure function of its inputs: the same title, behaviours, traits and font
//! always produce the same pixels.

mod figure;
mod font;
mod palette;
mod panel;
mod pose;
mod shapes;

use std::io::Cursor;

use image::{ImageFormat, RgbImage};

pub use figure::{draw_person, BoundingBox};
pub use font::FontFace;
pub use palette::{Palette, Theme};
pub use panel::{wrap_text, PanelLayout};
pub use pose::{ArmPose, BrowSlant, EyeStyle, MouthShape, Pose, Posture};

use crate::domain::{DomainError, TraitRecord};

pub const CANVAS_WIDTH: u32 = 1100;
pub const CANVAS_HEIGHT: u32 = 800;

/// Where the person is drawn
pub const PERSON_AREA: BoundingBox = BoundingBox {
    left: 40,
    top: 40,
    right: 500,
    bottom: 760,
};

/// Where the title and behaviours are written
pub const PANEL_LAYOUT: PanelLayout = PanelLayout {
    left: 540,
    top: 60,
    width: 510,
    bottom: 760,
    title_size: 40.0,
    body_size: 22.0,
    caption_size: 16.0,
    bullet_indent: 24,
    max_title_lines: 2,
};

/// Draw the full avatar card
pub fn render_avatar<S: AsRef<str>>(
    title: &str,
    behaviours: &[S],
    traits: &TraitRecord,
    font: &FontFace,
) -> RgbImage {
    let mut image = RgbImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, palette::CANVAS_BACKGROUND);
    let behaviours: Vec<String> = behaviours.iter().map(|b| b.as_ref().to_string()).collect();

    draw_person(&mut image, PERSON_AREA, traits);
    panel::draw_panel(&mut image, &PANEL_LAYOUT, font, title, &behaviours, traits);

    image
}

/// Draw the avatar card and encode it as PNG
pub fn render_avatar_png<S: AsRef<str>>(
    title: &str,
    behaviours: &[S],
    traits: &TraitRecord,
    font: &FontFace,
) -> Result<Vec<u8>, DomainError> {
    let image = render_avatar(title, behaviours, traits, font);
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{analyze_behaviours, Profile, Role};

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn behaviours() -> Vec<String> {
        vec![
            "Listens deeply".to_string(),
            "Encourages reflection and asks open questions that help the trainee find their own answers"
                .to_string(),
        ]
    }

    #[test]
    fn test_png_has_canvas_size() {
        let traits = analyze_behaviours(&behaviours(), Role::Mentor, Profile::Ultimate);
        let png = render_avatar_png("Test Mentor", &behaviours(), &traits, &FontFace::builtin())
            .unwrap();

        assert_eq!(&png[..8], &PNG_SIGNATURE);
        let decoded = image::load_from_memory_with_format(&png, ImageFormat::Png).unwrap();
        assert_eq!(decoded.width(), CANVAS_WIDTH);
        assert_eq!(decoded.height(), CANVAS_HEIGHT);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let traits = analyze_behaviours(&behaviours(), Role::Trainee, Profile::Mixed);
        let font = FontFace::builtin();

        let first = render_avatar_png("Same", &behaviours(), &traits, &font).unwrap();
        let second = render_avatar_png("Same", &behaviours(), &traits, &font).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_title_is_drawn_in_panel() {
        let traits = analyze_behaviours::<&str>(&[], Role::Mentor, Profile::Mixed);
        let font = FontFace::builtin();

        let blank = render_avatar("", &[] as &[&str], &traits, &font);
        let titled = render_avatar("Mentor", &[] as &[&str], &traits, &font);

        let title_row = PANEL_LAYOUT.top as u32 + 10;
        let differs = (PANEL_LAYOUT.left as u32..CANVAS_WIDTH)
            .any(|x| blank.get_pixel(x, title_row) != titled.get_pixel(x, title_row));
        assert!(differs);
    }

    #[test]
    fn test_many_behaviours_do_not_overflow() {
        let many: Vec<String> = (0..100).map(|i| format!("Behaviour number {}", i)).collect();
        let traits = analyze_behaviours(&many, Role::Mentor, Profile::Mixed);
        let image = render_avatar("Long list", &many, &traits, &FontFace::builtin());
        assert_eq!(image.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
    }
}
