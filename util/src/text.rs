use std::iter;

pub trait StrExt {
    /// Split text at whitespace so the first part fits within `max_width`
    /// characters.
    ///
    /// Words longer than `max_width` get cut mid-word. A newline always ends
    /// the first part.
    ///
    /// ```
    /// # use util::StrExt;
    /// assert_eq!("New Game".split_fitting(20), ("New Game", ""));
    /// assert_eq!("abc def ghi".split_fitting(7), ("abc def", "ghi"));
    /// assert_eq!("abcdef".split_fitting(4), ("abcd", "ef"));
    /// ```
    fn split_fitting(&self, max_width: usize) -> (&str, &str);

    /// Iterate over lines of text that fit within `max_width`.
    fn lines_of(&self, max_width: usize) -> impl Iterator<Item = &str>;

    /// Width of text in character cells.
    fn cell_width(&self) -> usize;
}

impl StrExt for str {
    fn split_fitting(&self, max_width: usize) -> (&str, &str) {
        let max_width = max_width.max(1);

        if self.chars().count() <= max_width && !self.contains('\n') {
            return (self, "");
        }

        let mut cut = None;
        let mut in_space = true;
        for (i, (pos, c)) in self.char_indices().enumerate() {
            if c == '\n' {
                cut = Some(pos);
                break;
            }

            if i >= max_width && !c.is_whitespace() {
                // No whitespace found, have to break the word.
                cut = cut.or(Some(pos));
                break;
            }

            if c.is_whitespace() {
                if !in_space && i > 0 {
                    cut = Some(pos);
                }
                in_space = true;
            } else {
                in_space = false;
            }
        }

        let Some(cut) = cut else {
            return (self, "");
        };

        let head = self[..cut].trim_end();
        let tail = self[cut..].trim_start_matches(|c: char| c == ' ');
        let tail = tail.strip_prefix('\n').unwrap_or(tail);
        (head, tail.trim_start_matches(' '))
    }

    fn lines_of(&self, max_width: usize) -> impl Iterator<Item = &str> {
        let mut text = self;
        iter::from_fn(move || {
            if text.is_empty() {
                return None;
            }
            let (line, rest) = text.split_fitting(max_width);
            text = rest;
            Some(line)
        })
    }

    fn cell_width(&self) -> usize {
        self.chars().count()
    }
}
