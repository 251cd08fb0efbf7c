//! Side panel: title, wrapped behaviour bullets and a trait caption

use image::RgbImage;
use imageproc::drawing::draw_filled_circle_mut;

use super::font::FontFace;
use super::palette::{CAPTION_COLOR, TEXT_COLOR, TITLE_COLOR};
use crate::domain::TraitRecord;

/// Fixed layout of the text column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub bottom: i32,
    pub title_size: f32,
    pub body_size: f32,
    pub caption_size: f32,
    pub bullet_indent: i32,
    pub max_title_lines: usize,
}

/// Greedy word wrap against a pixel width.
///
/// A single word wider than `max_width` gets a line of its own rather than
/// being split.
pub fn wrap_text(font: &FontFace, size: f32, text: &str, max_width: u32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let candidate = format!("{} {}", current, word);
        if font.text_width(size, &candidate) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Draw the title, one bullet per wrapped behaviour line and the trait caption
pub fn draw_panel(
    image: &mut RgbImage,
    layout: &PanelLayout,
    font: &FontFace,
    title: &str,
    behaviours: &[String],
    traits: &TraitRecord,
) {
    let mut y = layout.top;

    let title_lines = wrap_text(font, layout.title_size, title, layout.width);
    for line in title_lines.iter().take(layout.max_title_lines) {
        font.draw(image, TITLE_COLOR, layout.left, y, layout.title_size, line);
        y += font.line_height(layout.title_size) as i32;
    }
    y += font.line_height(layout.body_size) as i32;

    let body_line = font.line_height(layout.body_size) as i32;
    let caption_top = layout.bottom - font.line_height(layout.caption_size) as i32;
    let text_width = layout.width.saturating_sub(layout.bullet_indent as u32);
    let bullet_radius = (layout.body_size / 6.0).round() as i32;

    'behaviours: for behaviour in behaviours {
        let wrapped = wrap_text(font, layout.body_size, behaviour, text_width);
        for line in &wrapped {
            if y + body_line > caption_top {
                break 'behaviours;
            }
            draw_filled_circle_mut(
                image,
                (layout.left + bullet_radius + 2, y + body_line / 2 - bullet_radius),
                bullet_radius,
                TEXT_COLOR,
            );
            font.draw(
                image,
                TEXT_COLOR,
                layout.left + layout.bullet_indent,
                y,
                layout.body_size,
                line,
            );
            y += body_line;
        }
        y += body_line / 4;
    }

    font.draw(
        image,
        CAPTION_COLOR,
        layout.left,
        caption_top,
        layout.caption_size,
        &traits.summary(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{analyze_behaviours, Profile, Role};
    use image::Rgb;

    fn narrow_layout() -> PanelLayout {
        PanelLayout {
            left: 0,
            top: 0,
            width: 120,
            bottom: 400,
            title_size: 16.0,
            body_size: 16.0,
            caption_size: 16.0,
            bullet_indent: 24,
            max_title_lines: 2,
        }
    }

    #[test]
    fn test_every_wrapped_line_gets_a_bullet() {
        let font = FontFace::builtin();
        let layout = narrow_layout();
        let behaviours = vec!["aaaa bbbb cccc dddd eeee ffff".to_string()];
        let traits = analyze_behaviours(&behaviours, Role::Mentor, Profile::Mixed);

        let wrapped = wrap_text(
            &font,
            layout.body_size,
            &behaviours[0],
            layout.width - layout.bullet_indent as u32,
        );
        assert_eq!(wrapped.len(), 6);

        let mut image = RgbImage::from_pixel(200, 400, Rgb([255, 255, 255]));
        draw_panel(&mut image, &layout, &font, "", &behaviours, &traits);

        // Bullet column sits left of the indented text
        let caption_top = layout.bottom - font.line_height(layout.caption_size) as i32;
        let mut bullets = 0;
        let mut inked = false;
        for y in 0..caption_top as u32 {
            let hit = *image.get_pixel(5, y) == TEXT_COLOR;
            if hit && !inked {
                bullets += 1;
            }
            inked = hit;
        }
        assert_eq!(bullets, wrapped.len());
    }

    #[test]
    fn test_wrap_breaks_before_limit() {
        let font = FontFace::builtin();
        // 8px per char at size 8; 10 chars fit in 80px
        let lines = wrap_text(&font, 8.0, "asks open questions often", 80);
        assert_eq!(lines, vec!["asks open", "questions", "often"]);
        for line in &lines {
            assert!(font.text_width(8.0, line) <= 80);
        }
    }

    #[test]
    fn test_wrap_keeps_long_word_whole() {
        let font = FontFace::builtin();
        let lines = wrap_text(&font, 8.0, "a supercalifragilistic b", 40);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn test_wrap_collapses_whitespace() {
        let font = FontFace::builtin();
        assert_eq!(wrap_text(&font, 8.0, "  one   two  ", 800), vec!["one two"]);
        assert!(wrap_text(&font, 8.0, "   ", 800).is_empty());
    }
}
