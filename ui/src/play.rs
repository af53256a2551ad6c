use gfx::{Buffer, Window};

use crate::InputAction;

pub const GREETING: &str = "Hello World";

/// Placeholder for the in-game view.
#[derive(Default)]
pub struct PlayScreen;

impl PlayScreen {
    /// Handle input, return true to go back to the main menu.
    pub fn handle(&mut self, action: InputAction) -> bool {
        action == InputAction::Cancel
    }

    pub fn render(&self, win: &Window, b: &mut Buffer) {
        win.write_center(b, win.height() / 2, GREETING);
    }
}
