use engine::{Config, GameState, GlitchConfig, SaveSystem};
use gfx::{Buffer, CELL_SIZE, Window};
use navni::KeyTyped;
use serde_json::Value;

use crate::{
    ConfirmationDialog, InputAction, InputMap, PlayScreen, SettingsMenu,
    StartMenu, start_menu::MenuOption,
};

const WIDTH: u32 = 80;
const HEIGHT: u32 = 30;

/// Config key for start menu glitch overrides.
const GLITCH_KEY: &str = "glitch";

pub const EXIT_QUESTION: &str = "Are you sure?";

/// Toplevel context object for game state.
pub struct Game {
    /// Display buffer.
    pub s: Buffer,
    pub config: Config,
    pub saves: SaveSystem,
    state: GameState,
    input: InputMap,
    start_menu: StartMenu,
    settings_menu: Option<SettingsMenu>,
    dialog: Option<ConfirmationDialog>,
    play: PlayScreen,
}

impl Game {
    pub fn new(config: Config, saves: SaveSystem, seed: Option<u64>) -> Self {
        let mut start_menu = StartMenu::new(menu_glitch(&config), seed);
        let has_saves = saves.has_save_files();
        start_menu.set_continue_enabled(has_saves);
        log::info!(
            "Start menu setup complete (Continue: {})",
            if has_saves { "enabled" } else { "disabled" }
        );

        let mut ret = Game {
            s: Buffer::new(WIDTH, HEIGHT),
            config,
            saves,
            state: GameState::MainMenu,
            input: Default::default(),
            start_menu,
            settings_menu: None,
            dialog: None,
            play: PlayScreen,
        };
        ret.start_menu.resize(
            WIDTH as i32 * CELL_SIZE.x as i32,
            HEIGHT as i32 * CELL_SIZE.y as i32,
        );
        ret
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state != GameState::Exiting
    }

    pub fn start_menu(&self) -> &StartMenu {
        &self.start_menu
    }

    pub fn settings_menu(&self) -> Option<&SettingsMenu> {
        self.settings_menu.as_ref()
    }

    pub fn dialog(&self) -> Option<&ConfirmationDialog> {
        self.dialog.as_ref()
    }

    /// Match the display buffer to a new terminal size in cells.
    pub fn resize(&mut self, width: u32, height: u32) {
        if [width, height] == [self.s.width() as u32, self.s.height() as u32]
        {
            return;
        }
        self.s.resize(width, height);
        self.start_menu.resize(
            width as i32 * CELL_SIZE.x as i32,
            height as i32 * CELL_SIZE.y as i32,
        );
    }

    pub fn handle_key(&mut self, key: KeyTyped) {
        if let Some(action) = self.input.action(key) {
            self.handle(action);
        }
    }

    pub fn handle(&mut self, action: InputAction) {
        if action == InputAction::Quit {
            log::info!("Quit requested");
            self.state = GameState::Exiting;
            return;
        }

        match self.state {
            GameState::MainMenu => {
                if let Some(dialog) = &mut self.dialog {
                    if let Some(answer) = dialog.handle(action) {
                        self.dialog = None;
                        if answer {
                            log::info!("Exit confirmed");
                            self.state = GameState::Exiting;
                        }
                    }
                } else if let Some(option) = self.start_menu.handle(action) {
                    self.select(option);
                }
            }
            GameState::Playing | GameState::Paused => {
                if self.play.handle(action) {
                    self.enter_main_menu();
                }
            }
            GameState::Configuration => {
                let close = match &mut self.settings_menu {
                    Some(menu) => menu.handle(action),
                    None => true,
                };
                if close {
                    self.close_settings();
                }
            }
            GameState::Loading | GameState::Exiting => {}
        }
    }

    fn select(&mut self, option: MenuOption) {
        match option {
            MenuOption::NewGame | MenuOption::Continue => {
                log::info!("{} selected", option.label());
                self.state = GameState::Playing;
            }
            MenuOption::Settings => {
                log::info!("Settings selected");
                self.settings_menu = Some(SettingsMenu::open(&self.config));
                self.state = GameState::Configuration;
            }
            MenuOption::Credits => {
                log::info!("Credits selected");
            }
            MenuOption::Exit => {
                log::info!("Exit requested");
                self.dialog = Some(ConfirmationDialog::new(EXIT_QUESTION));
            }
        }
    }

    fn close_settings(&mut self) {
        if let Some(mut menu) = self.settings_menu.take() {
            if let Err(e) = menu.apply(&mut self.config) {
                log::error!("Failed to apply settings: {e:#}");
            }
        }
        self.enter_main_menu();
    }

    fn enter_main_menu(&mut self) {
        self.start_menu
            .set_continue_enabled(self.saves.has_save_files());
        self.state = GameState::MainMenu;
        log::info!("Returned to main menu");
    }

    /// Advance timers by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        match self.state {
            GameState::MainMenu => {
                self.start_menu.update(dt);
                if let Some(dialog) = &mut self.dialog {
                    dialog.update(dt);
                }
            }
            GameState::Configuration => {
                if let Some(menu) = &mut self.settings_menu {
                    menu.update(dt);
                }
            }
            _ => {}
        }
    }

    /// Draw the current screen into the display buffer.
    pub fn render(&mut self) {
        self.s.clear();
        let win = Window::from(&self.s);

        match self.state {
            GameState::MainMenu => {
                self.start_menu.render(&win, &mut self.s);
                if let Some(dialog) = &self.dialog {
                    dialog.render(&win, &mut self.s);
                }
            }
            GameState::Playing => self.play.render(&win, &mut self.s),
            GameState::Configuration => {
                if let Some(menu) = &self.settings_menu {
                    menu.render(&win, &mut self.s);
                }
            }
            GameState::Paused | GameState::Loading | GameState::Exiting => {}
        }
    }

    pub fn draw(&self, b: &mut dyn navni::Backend) {
        b.draw_chars(
            self.s.width() as _,
            self.s.height() as _,
            self.s.as_ref(),
        );
    }
}

/// Start menu glitch preset with overrides from the config's glitch section.
fn menu_glitch(config: &Config) -> GlitchConfig {
    let preset = GlitchConfig::cyber();
    let Some(overrides) = config.get::<Value>(GLITCH_KEY) else {
        return preset;
    };
    let Value::Object(overrides) = overrides else {
        log::warn!("Ignoring non-object {GLITCH_KEY:?} config");
        return preset;
    };

    let mut fields = match serde_json::to_value(&preset) {
        Ok(Value::Object(fields)) => fields,
        _ => return preset,
    };
    fields.extend(overrides);

    match serde_json::from_value(Value::Object(fields)) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Bad glitch config, using defaults: {e}");
            preset
        }
    }
}
