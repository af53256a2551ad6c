use gfx::{BorderStyle, Buffer, Window, color};
use util::StrExt;

use crate::{Blink, InputAction, theme};

/// Width of the dialog box in cells.
const WIDTH: i32 = 32;

/// Yes/no question box.
pub struct ConfirmationDialog {
    title: String,
    yes: bool,
    blink: Blink,
}

impl ConfirmationDialog {
    /// New dialog with "No" highlighted.
    pub fn new(title: impl Into<String>) -> Self {
        ConfirmationDialog {
            title: title.into(),
            yes: false,
            blink: Default::default(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether "Yes" is highlighted.
    pub fn is_yes(&self) -> bool {
        self.yes
    }

    pub fn update(&mut self, dt: f32) {
        self.blink.update(dt);
    }

    /// Handle input, return the answer once the player gives one.
    ///
    /// Cancel answers no.
    pub fn handle(&mut self, action: InputAction) -> Option<bool> {
        match action {
            InputAction::Left | InputAction::Right => {
                self.yes = !self.yes;
                self.blink.reset();
                None
            }
            InputAction::Confirm => Some(self.yes),
            InputAction::Cancel => Some(false),
            _ => None,
        }
    }

    fn lines(&self) -> Vec<&str> {
        // Border and a space of margin on both sides.
        self.title.lines_of(WIDTH as usize - 4).collect()
    }

    pub fn preferred_size(&self) -> [i32; 2] {
        [WIDTH, self.lines().len() as i32 + 5]
    }

    pub fn render(&self, win: &Window, b: &mut Buffer) {
        let frame = win.center(self.preferred_size());
        frame.clear(b);
        let inner = frame
            .with_fore(color::from_rgb(theme::DIALOG))
            .box_border(b, BorderStyle::Single);

        let lines = self.lines();
        for (y, line) in lines.iter().enumerate() {
            inner.write_center(b, 1 + y as i32, line);
        }

        let buttons = format!(
            "{}Yes    {}No",
            self.blink.marker(self.yes),
            self.blink.marker(!self.yes)
        );
        inner
            .with_fore(color::from_rgb(theme::OPTION))
            .write_center(b, lines.len() as i32 + 2, &buttons);
    }
}
