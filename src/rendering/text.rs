use glam::Vec2;
use tiny_skia::{Color, Pixmap, Transform};

use crate::rendering::shapes::fill_rect;

const GLYPH_COLUMNS: u32 = 5;
const GLYPH_ROWS: usize = 7;

/// 5x7 bitmap rows for a character, top row first, bit 4 is the leftmost column.
pub fn glyph_rows(ch: char) -> Option<[u8; GLYPH_ROWS]> {
    let rows = match ch.to_ascii_uppercase() {
        'A' => [0x0e, 0x11, 0x11, 0x1f, 0x11, 0x11, 0x11],
        'B' => [0x1e, 0x11, 0x11, 0x1e, 0x11, 0x11, 0x1e],
        'C' => [0x0e, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0e],
        'D' => [0x1e, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1e],
        'E' => [0x1f, 0x10, 0x10, 0x1e, 0x10, 0x10, 0x1f],
        'F' => [0x1f, 0x10, 0x10, 0x1e, 0x10, 0x10, 0x10],
        'G' => [0x0e, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0f],
        'H' => [0x11, 0x11, 0x11, 0x1f, 0x11, 0x11, 0x11],
        'I' => [0x0e, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0e],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0c],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1f],
        'M' => [0x11, 0x1b, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0e, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0e],
        'P' => [0x1e, 0x11, 0x11, 0x1e, 0x10, 0x10, 0x10],
        'Q' => [0x0e, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0d],
        'R' => [0x1e, 0x11, 0x11, 0x1e, 0x14, 0x12, 0x11],
        'S' => [0x0f, 0x10, 0x10, 0x0e, 0x01, 0x01, 0x1e],
        'T' => [0x1f, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0e],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0a, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0a],
        'X' => [0x11, 0x11, 0x0a, 0x04, 0x0a, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x0a, 0x04, 0x04, 0x04, 0x04],
        'Z' => [0x1f, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1f],
        '0' => [0x0e, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0e],
        '1' => [0x04, 0x0c, 0x04, 0x04, 0x04, 0x04, 0x0e],
        '2' => [0x0e, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1f],
        '3' => [0x1f, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0e],
        '4' => [0x02, 0x06, 0x0a, 0x12, 0x1f, 0x02, 0x02],
        '5' => [0x1f, 0x10, 0x1e, 0x01, 0x01, 0x11, 0x0e],
        '6' => [0x06, 0x08, 0x10, 0x1e, 0x11, 0x11, 0x0e],
        '7' => [0x1f, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0e, 0x11, 0x11, 0x0e, 0x11, 0x11, 0x0e],
        '9' => [0x0e, 0x11, 0x11, 0x0f, 0x01, 0x02, 0x0c],
        '-' => [0x00, 0x00, 0x00, 0x1f, 0x00, 0x00, 0x00],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0c, 0x0c],
        ':' => [0x00, 0x0c, 0x0c, 0x00, 0x0c, 0x0c, 0x00],
        ' ' => [0x00; GLYPH_ROWS],
        _ => return None,
    };
    Some(rows)
}

/// Block-pixel captions for map labels and the landing HUD.
#[derive(Debug, Clone, Copy)]
pub struct PixelFont {
    pub height: f32,
    pub color: Color,
}

impl PixelFont {
    pub fn new(height: f32, color: Color) -> Self {
        Self { height, color }
    }

    fn cell(&self) -> f32 {
        self.height / GLYPH_ROWS as f32
    }

    fn advance(&self) -> f32 {
        self.cell() * (GLYPH_COLUMNS + 1) as f32
    }

    pub fn text_width(&self, text: &str) -> f32 {
        let count = text.chars().count();
        if count == 0 {
            return 0.0;
        }
        count as f32 * self.advance() - self.cell()
    }

    /// Draws `text` with its top-left corner at `origin`. Unknown characters leave a gap.
    pub fn draw(&self, canvas: &mut Pixmap, text: &str, origin: Vec2) {
        let cell = self.cell();
        let mut x = origin.x;
        for ch in text.chars() {
            if let Some(rows) = glyph_rows(ch) {
                for (row, bits) in rows.iter().enumerate() {
                    for column in 0..GLYPH_COLUMNS {
                        if bits & (1 << (GLYPH_COLUMNS - 1 - column)) != 0 {
                            fill_rect(
                                canvas,
                                x + column as f32 * cell,
                                origin.y + row as f32 * cell,
                                cell,
                                cell,
                                self.color,
                                Transform::identity(),
                            );
                        }
                    }
                }
            }
            x += self.advance();
        }
    }

    pub fn draw_centered(&self, canvas: &mut Pixmap, text: &str, center: Vec2) {
        let origin = Vec2::new(
            center.x - self.text_width(text) / 2.0,
            center.y - self.height / 2.0,
        );
        self.draw(canvas, text, origin);
    }
}
