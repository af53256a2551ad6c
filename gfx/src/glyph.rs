use glam::{IVec2, Vec2, Vec3, vec2};
use navni::CharCell;

use crate::{Buffer, Window, color};

/// Nominal pixel size of a character cell.
///
/// Pixel-based effects are mapped back to cells using this.
pub const CELL_SIZE: Vec2 = vec2(8.0, 16.0);

/// One character on its way to the screen, handed to `write_with`
/// callbacks for modification.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Glyph {
    pub c: char,
    /// Position in window-local pixels.
    pub pos: Vec2,
    /// Linear RGB color.
    pub color: Vec3,
    pub visible: bool,
}

impl Glyph {
    /// Cell that the glyph's pixel position falls on.
    pub fn cell_pos(&self) -> IVec2 {
        (self.pos / CELL_SIZE).round().as_ivec2()
    }
}

impl Window {
    /// Write text, letting `f` adjust each glyph before it's drawn.
    ///
    /// The callback gets the character index, the character count and the
    /// glyph. Glyphs start at the pixel position of the text's cell. Returns
    /// the number of characters in the text.
    pub fn write_with(
        &self,
        b: &mut Buffer,
        pos: impl Into<IVec2>,
        text: &str,
        color: Vec3,
        mut f: impl FnMut(u32, u32, &mut Glyph),
    ) -> u32 {
        let pos: IVec2 = pos.into();
        let origin = pos.as_vec2() * CELL_SIZE;
        let count = text.chars().count() as u32;

        for (i, c) in text.chars().enumerate() {
            let mut glyph = Glyph {
                c,
                pos: origin + vec2(i as f32 * CELL_SIZE.x, 0.0),
                color,
                visible: true,
            };
            f(i as u32, count, &mut glyph);
            self.draw_glyph(b, &glyph);
        }

        count
    }

    /// Draw a single glyph at its nearest cell.
    pub fn draw_glyph(&self, b: &mut Buffer, glyph: &Glyph) {
        if !glyph.visible {
            return;
        }
        let cell = CharCell::new(
            glyph.c,
            color::from_rgb(glyph.color),
            self.background_col,
        );
        self.put(b, glyph.cell_pos(), cell);
    }
}

#[cfg(test)]
mod tests {
    use glam::ivec2;

    use super::*;

    #[test]
    fn plain_write() {
        let mut buf = Buffer::new(10, 2);
        let win = Window::from(&buf);
        let n =
            win.write_with(&mut buf, [1, 1], "hello", Vec3::ONE, |_, _, _| {});
        assert_eq!(n, 5);
        assert_eq!(buf.row_text(1), " hello");
        assert_eq!(buf.get([1, 1]).unwrap().foreground.0, 231);
    }

    #[test]
    fn callback_moves_and_hides() {
        let mut buf = Buffer::new(10, 3);
        let win = Window::from(&buf);
        let mut seen = Vec::new();
        win.write_with(&mut buf, [0, 0], "abc", Vec3::ONE, |i, n, g| {
            seen.push((i, n));
            match i {
                // Nudge a full cell down and right.
                0 => g.pos += CELL_SIZE,
                1 => g.visible = false,
                // Small offsets round back to the same cell.
                _ => g.pos += vec2(3.0, 7.0),
            }
        });
        assert_eq!(seen, vec![(0, 3), (1, 3), (2, 3)]);
        assert_eq!(buf.row_text(0), "  c");
        assert_eq!(buf.row_text(1), " a");
    }

    #[test]
    fn cell_rounding() {
        let g = Glyph {
            c: 'x',
            pos: vec2(12.0, 8.0),
            color: Vec3::ONE,
            visible: true,
        };
        assert_eq!(g.cell_pos(), ivec2(2, 1));
        let g = Glyph {
            pos: vec2(-3.0, -9.0),
            ..g
        };
        assert_eq!(g.cell_pos(), ivec2(0, -1));
    }
}
