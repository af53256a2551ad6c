//! Menus and screens of the game.

mod blink;
pub use blink::Blink;

mod dialog;
pub use dialog::ConfirmationDialog;

mod game;
pub use game::Game;

pub mod glitch_text;

mod input;
pub use input::{InputAction, InputMap};

mod play;
pub use play::PlayScreen;

mod settings_menu;
pub use settings_menu::SettingsMenu;

pub mod start_menu;
pub use start_menu::StartMenu;

pub use gfx::color::PALETTE;

/// Text colors.
pub mod theme {
    use glam::Vec3;

    pub const TITLE: Vec3 = Vec3::new(0.0, 1.0, 1.0);
    pub const SUBTITLE: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const OPTION: Vec3 = Vec3::ONE;
    pub const DISABLED: Vec3 = Vec3::splat(0.55);
    pub const FOOTER: Vec3 = Vec3::splat(0.5);
    pub const DIALOG: Vec3 = Vec3::new(1.0, 0.85, 0.0);
}
