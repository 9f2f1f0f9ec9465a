//! Bitmap Text Rendering
//!
//! Procedural text rendering using a 5x7 bitmap font drawn with SDL2
//! rectangles, plus the `Label` wrapper the menus use for positioned,
//! click-testable text.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Glyph cell width including 1 column of spacing, before scaling.
const GLYPH_ADVANCE: u32 = 6;
const GLYPH_HEIGHT: u32 = 7;

/// 5x7 bitmap rows for a character (1 = pixel on). Unknown characters
/// render as a full block.
fn glyph(c: char) -> [u8; 7] {
    match c.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10101, 0b11011, 0b10001],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => [0b00000, 0b00000, 0b00100, 0b00000, 0b00100, 0b00000, 0b00000],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        ',' => [0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '<' => [0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010],
        '>' => [0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000],
        ' ' => [0b00000; 7],
        _ => [0b11111; 7],
    }
}

/// Pixel width of a string at the given scale.
pub fn text_width(text: &str, scale: u32) -> u32 {
    text.chars().count() as u32 * GLYPH_ADVANCE * scale
}

/// Pixel height of a line of text at the given scale.
pub fn text_height(scale: u32) -> u32 {
    GLYPH_HEIGHT * scale
}

/// Renders a string at (x, y) using filled rectangles.
pub fn draw_text(
    canvas: &mut Canvas<Window>,
    text: &str,
    x: i32,
    y: i32,
    color: Color,
    scale: u32,
) -> Result<(), String> {
    canvas.set_draw_color(color);

    let pixel = scale as i32;
    for (i, c) in text.chars().enumerate() {
        let glyph_x = x + i as i32 * (GLYPH_ADVANCE * scale) as i32;
        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..5 {
                if (bits >> (4 - col)) & 1 == 1 {
                    canvas
                        .fill_rect(Rect::new(
                            glyph_x + col * pixel,
                            y + row as i32 * pixel,
                            scale,
                            scale,
                        ))
                        .map_err(|e| e.to_string())?;
                }
            }
        }
    }

    Ok(())
}

/// A positioned piece of text the menus can render and hit-test.
///
/// Labels keep their anchor when the content changes: a centered label
/// re-centers around its original midpoint on `set_text`, so a growing
/// score stays visually centered.
pub struct Label {
    text: String,
    scale: u32,
    x: i32,
    y: i32,
    center: Option<(i32, i32)>,
}

impl Label {
    /// A label anchored at its top-left corner.
    pub fn new(text: &str, scale: u32, x: i32, y: i32) -> Self {
        Label {
            text: text.to_string(),
            scale,
            x,
            y,
            center: None,
        }
    }

    /// A label centered on the given point.
    pub fn centered(text: &str, scale: u32, center_x: i32, center_y: i32) -> Self {
        let mut label = Label {
            text: text.to_string(),
            scale,
            x: 0,
            y: 0,
            center: Some((center_x, center_y)),
        };
        label.reposition();
        label
    }

    fn reposition(&mut self) {
        if let Some((cx, cy)) = self.center {
            self.x = cx - text_width(&self.text, self.scale) as i32 / 2;
            self.y = cy - text_height(self.scale) as i32 / 2;
        }
    }

    /// Replaces the content, re-centering if the label was centered.
    pub fn set_text(&mut self, text: String) {
        self.text = text;
        self.reposition();
    }

    #[allow(dead_code)] // Reserved for HUD introspection; exercised by tests
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Screen-space bounding box, used for click hit-testing.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.x,
            self.y,
            text_width(&self.text, self.scale),
            text_height(self.scale),
        )
    }

    /// True when the point lies inside this label's box.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.bounds().contains_point((x, y))
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, color: Color) -> Result<(), String> {
        draw_text(canvas, &self.text, self.x, self.y, color, self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_scales_with_content_and_scale() {
        assert_eq!(text_width("ABC", 1), 18);
        assert_eq!(text_width("ABC", 3), 54);
        assert_eq!(text_height(2), 14);
    }

    #[test]
    fn centered_label_straddles_its_anchor() {
        let label = Label::centered("Start Game", 3, 408, 277);
        let bounds = label.bounds();

        assert_eq!(bounds.x() + bounds.width() as i32 / 2, 408);
        assert!(bounds.y() < 277 && bounds.y() + bounds.height() as i32 > 277);
    }

    #[test]
    fn contains_matches_bounds() {
        let label = Label::new("Exit", 2, 100, 50);

        assert!(label.contains(100, 50));
        assert!(label.contains(120, 60));
        assert!(!label.contains(99, 50));
        assert!(!label.contains(100, 50 + text_height(2) as i32));
    }

    #[test]
    fn set_text_keeps_the_center_anchor() {
        let mut label = Label::centered("Score: 0", 3, 408, 92);
        label.set_text("Score: 12345".to_string());

        let bounds = label.bounds();
        assert_eq!(bounds.x() + bounds.width() as i32 / 2, 408);
    }

    #[test]
    fn set_text_keeps_top_left_anchor_for_plain_labels() {
        let mut label = Label::new("Score: 0", 2, 20, 20);
        label.set_text("Score: 999".to_string());

        assert_eq!(label.bounds().x(), 20);
        assert_eq!(label.bounds().y(), 20);
    }
}
