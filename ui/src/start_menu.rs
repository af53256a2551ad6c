use engine::{COPYRIGHT, GAME_TITLE, GlitchConfig, GlitchEffect};
use gfx::{BorderStyle, Buffer, Rect, Window, color};
use strum::{EnumIter, IntoEnumIterator};

use crate::{Blink, InputAction, glitch_text, theme};

pub const SUBTITLE: &str = "TEXT-BASED RPG";

/// Width of the option box in cells.
const MENU_WIDTH: i32 = 30;

#[derive(Copy, Clone, Eq, PartialEq, Debug, EnumIter)]
pub enum MenuOption {
    NewGame,
    Continue,
    Settings,
    Credits,
    Exit,
}

impl MenuOption {
    pub fn label(self) -> &'static str {
        match self {
            MenuOption::NewGame => "New Game",
            MenuOption::Continue => "Continue",
            MenuOption::Settings => "Settings",
            MenuOption::Credits => "Credits",
            MenuOption::Exit => "Exit",
        }
    }
}

/// Title screen with the glitching logo and the main option list.
pub struct StartMenu {
    selected: MenuOption,
    continue_enabled: bool,
    blink: Blink,
    glitch: GlitchEffect,
}

impl StartMenu {
    /// Create the menu, seeding the logo glitch from `seed` if given.
    pub fn new(glitch_config: GlitchConfig, seed: Option<u64>) -> Self {
        let mut glitch = GlitchEffect::new(glitch_config);
        match seed {
            Some(seed) => glitch.initialize_seeded(seed),
            None => glitch.initialize(),
        };

        StartMenu {
            selected: MenuOption::NewGame,
            continue_enabled: false,
            blink: Default::default(),
            glitch,
        }
    }

    pub fn selected(&self) -> MenuOption {
        self.selected
    }

    pub fn glitch(&self) -> &GlitchEffect {
        &self.glitch
    }

    pub fn is_enabled(&self, option: MenuOption) -> bool {
        option != MenuOption::Continue || self.continue_enabled
    }

    pub fn set_continue_enabled(&mut self, enabled: bool) {
        self.continue_enabled = enabled;
        if !self.is_enabled(self.selected) {
            self.move_selection(1);
        }
    }

    /// Screen size in pixels for the logo glitch.
    pub fn resize(&mut self, width: i32, height: i32) {
        log::info!("Start menu resized to {width}x{height}");
        self.glitch.set_screen_size(width, height);
    }

    pub fn update(&mut self, dt: f32) {
        self.blink.update(dt);
        self.glitch.update(dt);
    }

    /// Handle input, return the option the player activated.
    ///
    /// Cancel jumps the selection to Exit and activates it.
    pub fn handle(&mut self, action: InputAction) -> Option<MenuOption> {
        match action {
            InputAction::Up => self.move_selection(-1),
            InputAction::Down => self.move_selection(1),
            InputAction::Confirm if self.is_enabled(self.selected) => {
                log::info!("Executing menu option: {}", self.selected.label());
                return Some(self.selected);
            }
            InputAction::Cancel => {
                self.selected = MenuOption::Exit;
                self.blink.reset();
                return Some(MenuOption::Exit);
            }
            _ => {}
        }
        None
    }

    /// Step the selection, wrapping around and skipping disabled options.
    fn move_selection(&mut self, step: i32) {
        let options: Vec<MenuOption> = MenuOption::iter().collect();
        let n = options.len() as i32;
        let mut idx = options
            .iter()
            .position(|&o| o == self.selected)
            .unwrap_or(0) as i32;

        // At least one option (Exit) is always enabled.
        for _ in 0..n {
            idx = (idx + step).rem_euclid(n);
            if self.is_enabled(options[idx as usize]) {
                break;
            }
        }

        self.selected = options[idx as usize];
        self.blink.reset();
        log::debug!("Menu selection: {}", self.selected.label());
    }

    pub fn render(&self, win: &Window, b: &mut Buffer) {
        let top = (win.height() / 10).max(1);

        glitch_text::write_center(
            win,
            b,
            top,
            GAME_TITLE,
            theme::TITLE,
            &self.glitch,
        );
        win.with_fore(color::from_rgb(theme::SUBTITLE))
            .write_center(b, top + 2, SUBTITLE);

        let n = MenuOption::iter().count() as i32;
        let height = n * 2 + 3;
        let x = (win.width() - MENU_WIDTH) / 2;
        let y = top + 5;
        let frame = win.sub(Rect::new([x, y], [x + MENU_WIDTH, y + height]));
        let inner = frame.box_border(b, BorderStyle::Double);

        for (i, option) in MenuOption::iter().enumerate() {
            let mut text = option.label().to_string();
            let mut col = theme::OPTION;
            if !self.is_enabled(option) {
                text = format!("[{text}]");
                col = theme::DISABLED;
            }
            let line =
                format!("{}{text}", self.blink.marker(option == self.selected));
            inner.write_col(
                b,
                [inner.center_x(&line), 1 + 2 * i as i32],
                &line,
                color::from_rgb(col),
            );
        }

        self.render_footer(win, b);
    }

    fn render_footer(&self, win: &Window, b: &mut Buffer) {
        let (footer, _) = win.split_bottom(1);
        let footer = footer.with_fore(color::from_rgb(theme::FOOTER));
        let version = format!("Version {}", engine::version_string());

        footer.write(b, [1, 0], COPYRIGHT);
        let x = footer.width() - version.chars().count() as i32 - 1;
        footer.write(b, [x, 0], &version);
    }
}

impl Default for StartMenu {
    fn default() -> Self {
        StartMenu::new(GlitchConfig::cyber(), None)
    }
}
