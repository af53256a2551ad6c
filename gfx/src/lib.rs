//! Character cell drawing.

mod buffer;
pub use buffer::Buffer;

pub mod color;

mod glyph;
pub use glyph::{CELL_SIZE, Glyph};

mod window;
pub use window::{BorderStyle, Window};

pub use util::Rect;
