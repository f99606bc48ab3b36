use glam::Vec2;
use tiny_skia::{Color, Pixmap, Transform};

use crate::rendering::shapes::fill_rect;

// Segment bits: a (top) through g (middle), clockwise from the top.
const A: u8 = 1 << 0;
const B: u8 = 1 << 1;
const C: u8 = 1 << 2;
const D: u8 = 1 << 3;
const E: u8 = 1 << 4;
const F: u8 = 1 << 5;
const G: u8 = 1 << 6;

/// Lit segments for a character, `None` for characters the painter can't show.
pub fn segments_for(ch: char) -> Option<u8> {
    let mask = match ch {
        '0' => A | B | C | D | E | F,
        '1' => B | C,
        '2' => A | B | G | E | D,
        '3' => A | B | G | C | D,
        '4' => F | G | B | C,
        '5' => A | F | G | C | D,
        '6' => A | F | G | E | D | C,
        '7' => A | B | C,
        '8' => A | B | C | D | E | F | G,
        '9' => A | B | C | D | F | G,
        '-' => G,
        ' ' => 0,
        _ => return None,
    };
    Some(mask)
}

/// Draws numbers as seven-segment glyphs, no font needed.
#[derive(Debug, Clone, Copy)]
pub struct SevenSegment {
    pub height: f32,
    pub color: Color,
}

impl SevenSegment {
    pub fn new(height: f32, color: Color) -> Self {
        Self { height, color }
    }

    fn glyph_width(&self) -> f32 {
        self.height * 0.5
    }

    fn thickness(&self) -> f32 {
        (self.height * 0.12).max(1.0)
    }

    fn advance(&self) -> f32 {
        self.glyph_width() + self.thickness() * 1.5
    }

    fn char_advance(&self, ch: char) -> f32 {
        if ch == '.' {
            self.thickness() * 2.5
        } else {
            self.advance()
        }
    }

    pub fn text_width(&self, text: &str) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        text.chars().map(|ch| self.char_advance(ch)).sum::<f32>() - self.thickness() * 1.5
    }

    /// Draws `text` with its top-left corner at `origin`.
    pub fn draw(&self, canvas: &mut Pixmap, text: &str, origin: Vec2, transform: Transform) {
        let mut x = origin.x;
        for ch in text.chars() {
            if ch == '.' {
                let t = self.thickness();
                fill_rect(canvas, x, origin.y + self.height - t, t, t, self.color, transform);
            } else if let Some(mask) = segments_for(ch) {
                self.draw_glyph(canvas, mask, Vec2::new(x, origin.y), transform);
            }
            x += self.char_advance(ch);
        }
    }

    pub fn draw_centered(&self, canvas: &mut Pixmap, text: &str, center: Vec2, transform: Transform) {
        let origin = Vec2::new(
            center.x - self.text_width(text) / 2.0,
            center.y - self.height / 2.0,
        );
        self.draw(canvas, text, origin, transform);
    }

    fn draw_glyph(&self, canvas: &mut Pixmap, mask: u8, origin: Vec2, transform: Transform) {
        let w = self.glyph_width();
        let h = self.height;
        let t = self.thickness();
        let half = h / 2.0;
        let Vec2 { x, y } = origin;

        let segments = [
            (A, x, y, w, t),
            (B, x + w - t, y, t, half),
            (C, x + w - t, y + half, t, half),
            (D, x, y + h - t, w, t),
            (E, x, y + half, t, half),
            (F, x, y, t, half),
            (G, x, y + half - t / 2.0, w, t),
        ];
        for (bit, sx, sy, sw, sh) in segments {
            if mask & bit != 0 {
                fill_rect(canvas, sx, sy, sw, sh, self.color, transform);
            }
        }
    }
}
