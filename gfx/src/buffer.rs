use std::fmt::Write;

use glam::{IVec2, ivec2};
use navni::{CharCell, X256Color};

use crate::{Rect, color};

/// Screen buffer of character cells.
pub struct Buffer {
    width: u32,
    height: u32,
    data: Vec<CharCell>,
}

impl AsRef<[CharCell]> for Buffer {
    fn as_ref(&self) -> &[CharCell] {
        &self.data
    }
}

impl AsMut<[CharCell]> for Buffer {
    fn as_mut(&mut self) -> &mut [CharCell] {
        &mut self.data
    }
}

impl Buffer {
    pub fn new(width: u32, height: u32) -> Self {
        Buffer {
            width,
            height,
            data: vec![color::blank(); (width * height) as usize],
        }
    }

    /// Change dimensions, contents are cleared.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.data.clear();
        self.data.resize((width * height) as usize, color::blank());
    }

    pub fn clear(&mut self) {
        self.data.fill(color::blank());
    }

    pub fn dim(&self) -> IVec2 {
        ivec2(self.width as i32, self.height as i32)
    }

    pub fn width(&self) -> i32 {
        self.width as i32
    }

    pub fn height(&self) -> i32 {
        self.height as i32
    }

    pub fn area(&self) -> Rect {
        Rect::sized(self.dim())
    }

    pub fn get(&self, pos: impl Into<[i32; 2]>) -> Option<CharCell> {
        let pos = pos.into();
        let area = self.area();
        area.contains(pos).then(|| self.data[area.idx(pos)])
    }

    pub fn get_mut(
        &mut self,
        pos: impl Into<[i32; 2]>,
    ) -> Option<&mut CharCell> {
        let pos = pos.into();
        let area = self.area();
        if area.contains(pos) {
            Some(&mut self.data[area.idx(pos)])
        } else {
            None
        }
    }

    /// Text of one row with trailing whitespace removed.
    pub fn row_text(&self, y: i32) -> String {
        let mut ret: String = (0..self.width())
            .filter_map(|x| self.get([x, y]))
            .map(cell_char)
            .collect();
        ret.truncate(ret.trim_end().len());
        ret
    }

    /// Create a screenshot ANSI coded string of the buffer.
    pub fn to_ansi(&self) -> String {
        let mut ret = String::new();
        let mut prev: Option<(X256Color, X256Color)> = None;

        for y in 0..self.height() {
            for x in 0..self.width() {
                let cell = self.data[self.area().idx([x, y])];
                let current = (cell.foreground, cell.background);
                if prev != Some(current) {
                    let _ = write!(
                        ret,
                        "\x1b[0;38;5;{};48;5;{}m",
                        cell.foreground.0, cell.background.0
                    );
                    prev = Some(current);
                }
                ret.push(cell_char(cell));
            }
            // Don't let the background color bleed past the line end.
            ret.push_str("\x1b[0m\n");
            prev = None;
        }

        ret
    }
}

fn cell_char(cell: CharCell) -> char {
    match char::from_u32(cell.c as u32) {
        None | Some('\0') => ' ',
        Some(c) => c,
    }
}

#[cfg(test)]
mod tests {
    use navni::CharCell;

    use super::*;

    #[test]
    fn ansi_dump() {
        let mut buf = Buffer::new(3, 2);
        let cell = buf.get_mut([1, 0]).unwrap();
        *cell = CharCell::new('@', X256Color(201), X256Color(16));

        let ansi = buf.to_ansi();
        assert_eq!(ansi.lines().count(), 2);
        assert!(ansi.contains("38;5;201"));
        assert!(ansi.contains('@'));
        assert_eq!(buf.row_text(0), " @");
        assert_eq!(buf.row_text(1), "");
    }

    #[test]
    fn resize_clears() {
        let mut buf = Buffer::new(4, 4);
        *buf.get_mut([0, 0]).unwrap() =
            CharCell::new('x', X256Color(1), X256Color(0));
        buf.resize(8, 2);
        assert_eq!(buf.dim(), ivec2(8, 2));
        assert_eq!(buf.as_ref().len(), 16);
        assert_eq!(buf.row_text(0), "");
        assert!(buf.get([8, 0]).is_none());
    }
}
