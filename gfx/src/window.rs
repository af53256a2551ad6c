use glam::{IVec2, ivec2};
use navni::{CharCell, X256Color};
use util::{StrExt, v2};

use crate::{Buffer, Rect, color};

/// Line set for `Window::box_border`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum BorderStyle {
    #[default]
    Single,
    Double,
    Heavy,
    Rounded,
}

impl BorderStyle {
    /// Corners top-left, top-right, bottom-left, bottom-right, then the
    /// horizontal and vertical edges.
    fn chars(self) -> [char; 6] {
        match self {
            BorderStyle::Single => ['┌', '┐', '└', '┘', '─', '│'],
            BorderStyle::Double => ['╔', '╗', '╚', '╝', '═', '║'],
            BorderStyle::Heavy => ['┏', '┓', '┗', '┛', '━', '┃'],
            BorderStyle::Rounded => ['╭', '╮', '╰', '╯', '─', '│'],
        }
    }
}

/// A view structure through which things can be drawn on a buffer.
#[derive(Copy, Clone)]
pub struct Window {
    /// The window's bounds in the coordinates of the screen buffer.
    pub bounds: Rect,
    pub foreground_col: X256Color,
    pub background_col: X256Color,
}

impl Default for Window {
    fn default() -> Self {
        Window::new(Rect::default(), color::FOREGROUND, color::BACKGROUND)
    }
}

impl From<&Buffer> for Window {
    fn from(b: &Buffer) -> Self {
        Window::new(b.area(), color::FOREGROUND, color::BACKGROUND)
    }
}

impl Window {
    pub fn new(
        bounds: Rect,
        foreground_col: X256Color,
        background_col: X256Color,
    ) -> Self {
        Window {
            bounds,
            foreground_col,
            background_col,
        }
    }

    /// Area rectangle of the window in window-local coordinates, anchored to
    /// origin.
    pub fn area(&self) -> Rect {
        Rect::sized(self.bounds.dim())
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    pub fn with_fore(mut self, col: X256Color) -> Self {
        self.foreground_col = col;
        self
    }

    pub fn fill(&self, b: &mut Buffer, cell: CharCell) {
        for pos in self.bounds {
            if let Some(c) = b.get_mut(pos) {
                *c = cell;
            }
        }
    }

    pub fn clear(&self, b: &mut Buffer) {
        let cell = CharCell::new(' ', self.foreground_col, self.background_col);
        self.fill(b, cell);
    }

    /// Put a cell at window-local position, clipped to the window.
    pub fn put(&self, b: &mut Buffer, pos: impl Into<IVec2>, cell: CharCell) {
        let pos = pos.into();
        if !self.area().contains(pos) {
            return;
        }
        if let Some(c) = b.get_mut(pos + v2(self.bounds.min())) {
            *c = cell;
        }
    }

    /// Write text in window foreground color, return the position after the
    /// text.
    pub fn write(
        &self,
        b: &mut Buffer,
        pos: impl Into<IVec2>,
        text: &str,
    ) -> IVec2 {
        self.write_col(b, pos, text, self.foreground_col)
    }

    pub fn write_col(
        &self,
        b: &mut Buffer,
        pos: impl Into<IVec2>,
        text: &str,
        col: X256Color,
    ) -> IVec2 {
        let mut pos = pos.into();
        for c in text.chars() {
            self.put(b, pos, CharCell::new(c, col, self.background_col));
            pos.x += 1;
        }
        pos
    }

    /// X position where `text` is centered.
    pub fn center_x(&self, text: &str) -> i32 {
        (self.width() - text.cell_width() as i32) / 2
    }

    /// Write text centered on row `y`.
    pub fn write_center(&self, b: &mut Buffer, y: i32, text: &str) {
        self.write(b, [self.center_x(text), y], text);
    }

    /// Create a sub-window from the area within this window's space.
    pub fn sub(&self, area: Rect) -> Window {
        let area = area + self.bounds.min();
        let mut ret = *self;
        ret.bounds = self.bounds.intersection(&area);
        ret
    }

    /// Sub-window of size `dim` in the middle of this one.
    pub fn center(&self, dim: impl Into<IVec2>) -> Window {
        let dim: IVec2 = dim.into();
        let dim = dim.min(v2(self.bounds.dim()));
        let offset = (v2(self.bounds.dim()) - dim) / 2;
        self.sub(Rect::sized(dim) + offset)
    }

    pub fn split_top(&self, height: i32) -> (Window, Window) {
        let [a, b] = self.area().split([0, height]);
        (self.sub(a), self.sub(b))
    }

    pub fn split_bottom(&self, height: i32) -> (Window, Window) {
        let [a, b] = self.area().split([0, -height]);
        (self.sub(b), self.sub(a))
    }

    /// Draw a box-drawing border, return the window inside it.
    pub fn box_border(&self, b: &mut Buffer, style: BorderStyle) -> Window {
        let [w, h] = [self.width(), self.height()];
        if w < 2 || h < 2 {
            return self.sub(Rect::default());
        }

        let line = |b: &mut Buffer, pos: IVec2, c: char| {
            self.put(
                b,
                pos,
                CharCell::new(c, self.foreground_col, self.background_col),
            )
        };

        let [tl, tr, bl, br, hor, ver] = style.chars();
        for x in 1..w - 1 {
            line(b, ivec2(x, 0), hor);
            line(b, ivec2(x, h - 1), hor);
        }
        for y in 1..h - 1 {
            line(b, ivec2(0, y), ver);
            line(b, ivec2(w - 1, y), ver);
        }
        line(b, ivec2(0, 0), tl);
        line(b, ivec2(w - 1, 0), tr);
        line(b, ivec2(0, h - 1), bl);
        line(b, ivec2(w - 1, h - 1), br);

        self.sub(self.area().shrink([1, 1], [1, 1]))
    }

    /// Write a caption into the top border, centered.
    pub fn box_caption(&self, b: &mut Buffer, caption: &str) {
        let text = format!(" {caption} ");
        self.write_center(b, 0, &text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_and_clip() {
        let mut buf = Buffer::new(10, 3);
        let win = Window::from(&buf).sub(Rect::new([2, 1], [6, 2]));
        let end = win.write(&mut buf, [0, 0], "abcdefg");
        assert_eq!(end, ivec2(7, 0));
        // Clipped to four characters.
        assert_eq!(buf.row_text(1), "  abcd");
        assert_eq!(buf.row_text(0), "");
    }

    #[test]
    fn centering() {
        let mut buf = Buffer::new(11, 1);
        let win = Window::from(&buf);
        win.write_center(&mut buf, 0, "abc");
        assert_eq!(buf.row_text(0), "    abc");

        let inner = win.center([20, 1]);
        assert_eq!(inner.width(), 11);
    }

    #[test]
    fn border() {
        let mut buf = Buffer::new(6, 4);
        let inner =
            Window::from(&buf).box_border(&mut buf, BorderStyle::Single);
        assert_eq!(inner.bounds, Rect::new([1, 1], [5, 3]));
        assert_eq!(buf.row_text(0), "┌────┐");
        assert_eq!(buf.row_text(1), "│    │");
        assert_eq!(buf.row_text(3), "└────┘");

        Window::from(&buf).box_caption(&mut buf, "ok");
        assert_eq!(buf.row_text(0), "┌ ok ┐");
    }

    #[test]
    fn border_styles() {
        let mut buf = Buffer::new(4, 3);
        Window::from(&buf).box_border(&mut buf, BorderStyle::Double);
        assert_eq!(buf.row_text(0), "╔══╗");
        assert_eq!(buf.row_text(1), "║  ║");
        assert_eq!(buf.row_text(2), "╚══╝");

        Window::from(&buf).box_border(&mut buf, BorderStyle::Heavy);
        assert_eq!(buf.row_text(0), "┏━━┓");
        assert_eq!(buf.row_text(2), "┗━━┛");

        Window::from(&buf).box_border(&mut buf, BorderStyle::Rounded);
        assert_eq!(buf.row_text(0), "╭──╮");
        assert_eq!(buf.row_text(2), "╰──╯");
    }

    #[test]
    fn too_small_for_border() {
        let mut buf = Buffer::new(1, 5);
        let inner =
            Window::from(&buf).box_border(&mut buf, BorderStyle::Double);
        assert_eq!(inner.width(), 0);
        assert_eq!(buf.row_text(0), "");
    }

    #[test]
    fn splits() {
        let buf = Buffer::new(10, 10);
        let win = Window::from(&buf);
        let (top, rest) = win.split_top(3);
        assert_eq!(top.height(), 3);
        assert_eq!(rest.height(), 7);
        let (bottom, rest) = win.split_bottom(2);
        assert_eq!(bottom.bounds, Rect::new([0, 8], [10, 10]));
        assert_eq!(rest.height(), 8);
    }
}
