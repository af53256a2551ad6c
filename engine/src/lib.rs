//! Display-independent game logic.

/// Title shown on the start screen.
pub const GAME_TITLE: &str = "0xD3ADC0DE";

/// Application name for windows and logs.
pub const GAME_NAME: &str = "deadcode";

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const COPYRIGHT: &str = "(c) 2026 0xD3ADC0DE Team";

mod config;
pub use config::Config;

pub mod glitch;
pub use glitch::{CharacterGlitchState, GlitchConfig, GlitchEffect};

mod save;
pub use save::{SAVE_EXTENSION, SaveSystem};

pub mod settings;
pub use settings::Settings;

/// Top-level mode of the application.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Debug)]
pub enum GameState {
    #[default]
    MainMenu,
    Playing,
    Paused,
    Configuration,
    Loading,
    Exiting,
}

/// Version string like "v0.1.0".
pub fn version_string() -> String {
    format!("v{VERSION}")
}

/// Version string with build type, "v0.1.0 (Debug)".
pub fn full_version_string() -> String {
    let build = if cfg!(debug_assertions) {
        "Debug"
    } else {
        "Release"
    };
    format!("{} ({build})", version_string())
}

pub fn title_with_version() -> String {
    format!("{GAME_TITLE} {}", version_string())
}
