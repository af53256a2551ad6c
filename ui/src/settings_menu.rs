use anyhow::Result;
use engine::{
    Config, Settings,
    settings::{Category, Setting},
};
use gfx::{BorderStyle, Buffer, Window, color};
use strum::IntoEnumIterator;

use crate::{Blink, InputAction, theme};

const HELP: &str = "Arrows: Navigate  -/+: Change  Esc: Back";

/// Category tabbed settings editor.
///
/// Edits a working copy of the settings. `apply` commits it into the config,
/// `revert` goes back to what the menu was opened with.
pub struct SettingsMenu {
    settings: Settings,
    snapshot: Settings,
    category: Category,
    row: usize,
    blink: Blink,
}

impl SettingsMenu {
    pub fn new(settings: Settings) -> Self {
        SettingsMenu {
            snapshot: settings.clone(),
            settings,
            category: Category::Display,
            row: 0,
            blink: Default::default(),
        }
    }

    /// Open the menu with the settings stored in `config`.
    pub fn open(config: &Config) -> Self {
        SettingsMenu::new(Settings::load(config))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn selected(&self) -> Option<&Setting> {
        self.settings.category(self.category).get(self.row)
    }

    pub fn update(&mut self, dt: f32) {
        self.blink.update(dt);
    }

    /// Handle input, return true when the menu wants to close.
    pub fn handle(&mut self, action: InputAction) -> bool {
        use InputAction::*;

        match action {
            Left => self.set_category(self.category.prev()),
            Right => self.set_category(self.category.next()),
            Up => self.move_row(-1),
            Down => self.move_row(1),
            Decrease | Increase => {
                let row = self.row;
                if let Some(s) =
                    self.settings.category_mut(self.category).get_mut(row)
                {
                    if action == Decrease {
                        s.decrease();
                    } else {
                        s.increase();
                    }
                    log::debug!("Setting {} = {}", s.name, s.value);
                }
            }
            Cancel => return true,
            _ => {}
        }
        false
    }

    fn set_category(&mut self, category: Category) {
        self.category = category;
        self.row = 0;
        self.blink.reset();
        log::debug!("Config category: {}", category.name());
    }

    fn move_row(&mut self, step: i32) {
        let n = self.settings.category(self.category).len() as i32;
        if n == 0 {
            return;
        }
        self.row = (self.row as i32 + step).rem_euclid(n) as usize;
        self.blink.reset();
    }

    /// Write the edited settings into `config` and save it if it has a file.
    pub fn apply(&mut self, config: &mut Config) -> Result<()> {
        log::info!("Applying settings");
        self.settings.store(config)?;
        if config.path().is_some() {
            config.save()?;
        }
        self.snapshot = self.settings.clone();
        Ok(())
    }

    /// Drop unapplied edits.
    pub fn revert(&mut self) {
        log::info!("Reverting settings");
        self.settings = self.snapshot.clone();
    }

    pub fn render(&self, win: &Window, b: &mut Buffer) {
        let frame = win.center([60.min(win.width()), 20.min(win.height())]);
        let inner = frame.box_border(b, BorderStyle::Double);
        frame.box_caption(b, "SETTINGS");

        // Category tabs.
        let tabs: Vec<String> = Category::iter()
            .map(|c| {
                if c == self.category {
                    format!("[{}]", c.name())
                } else {
                    format!(" {} ", c.name())
                }
            })
            .collect();
        let tabs = tabs.join(" ");
        let (tab_frame, _) = inner.split_top(3);
        tab_frame
            .with_fore(color::from_rgb(theme::TITLE))
            .box_border(b, BorderStyle::Single)
            .write_center(b, 0, &tabs);

        let list = inner.with_fore(color::from_rgb(theme::OPTION));
        for (i, s) in self.settings.category(self.category).iter().enumerate()
        {
            let y = 3 + 2 * i as i32;
            let marker = self.blink.marker(i == self.row);
            list.write(b, [2, y], &format!("{marker}{}", s.name));
            let value = s.display_value();
            let x = list.width() - value.chars().count() as i32 - 2;
            list.write(b, [x, y], &value);
        }

        let (bottom, _) = inner.split_bottom(3);
        let bottom = bottom.with_fore(color::from_rgb(theme::FOOTER));
        if let Some(s) = self.selected() {
            bottom.write_center(b, 0, s.description);
        }
        bottom.write_center(b, 2, HELP);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn category_switch_resets_row() {
        let mut menu = SettingsMenu::new(Settings::default());
        menu.handle(InputAction::Down);
        assert_eq!(menu.row(), 1);

        menu.handle(InputAction::Right);
        assert_eq!(menu.category(), Category::Audio);
        assert_eq!(menu.row(), 0);

        menu.handle(InputAction::Left);
        menu.handle(InputAction::Left);
        assert_eq!(menu.category(), Category::Controls);
    }

    #[test]
    fn rows_wrap() {
        let mut menu = SettingsMenu::new(Settings::default());
        menu.handle(InputAction::Up);
        assert_eq!(menu.row(), 3);
        assert_eq!(menu.selected().unwrap().name, "Text Scale");
        menu.handle(InputAction::Down);
        assert_eq!(menu.row(), 0);
    }

    #[test]
    fn edit_and_revert() {
        let mut menu = SettingsMenu::new(Settings::default());
        // Fullscreen on.
        menu.handle(InputAction::Increase);
        assert_eq!(
            menu.settings().get(Category::Display, "Fullscreen"),
            Some(1)
        );

        menu.revert();
        assert_eq!(
            menu.settings().get(Category::Display, "Fullscreen"),
            Some(0)
        );
    }

    #[test]
    fn apply_saves_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json");
        let mut config = Config::default();
        config.save_as(&path).unwrap();

        let mut menu = SettingsMenu::open(&config);
        menu.handle(InputAction::Right);
        // Master volume 80 -> 79.
        menu.handle(InputAction::Decrease);
        menu.apply(&mut config).unwrap();

        let key = "settings.audio.master_volume";
        assert_eq!(config.get::<i32>(key), Some(79));
        let saved = Config::open(&path).unwrap();
        assert_eq!(saved.get::<i32>(key), Some(79));

        // Applied values survive a revert.
        menu.handle(InputAction::Decrease);
        menu.revert();
        assert_eq!(
            menu.settings().get(Category::Audio, "Master Volume"),
            Some(79)
        );
    }

    #[test]
    fn cancel_closes() {
        let mut menu = SettingsMenu::new(Settings::default());
        assert!(!menu.handle(InputAction::Confirm));
        assert!(menu.handle(InputAction::Cancel));
    }

    #[test]
    fn renders_rows() {
        let menu = SettingsMenu::new(Settings::default());
        let mut buf = Buffer::new(80, 24);
        let win = Window::from(&buf);
        menu.render(&win, &mut buf);

        let screen: Vec<String> = (0..24).map(|y| buf.row_text(y)).collect();
        assert!(screen.iter().any(|r| r.contains("SETTINGS")));
        assert!(screen.iter().any(|r| r.contains("[DISPLAY]")));
        assert!(screen.iter().any(|r| r.contains("> Fullscreen")));
        assert!(screen.iter().any(|r| r.contains("[OFF]")));
        assert!(screen.iter().any(|r| r.contains("[60]")));
        assert!(screen.iter().any(|r| r.contains("Toggle fullscreen mode")));
        assert!(screen.iter().any(|r| r.contains("-/+: Change")));
        // Double outer frame with the tabs in a single-line box.
        let has = |a: &str, b: &str| {
            screen.iter().any(|r| r.contains(a) && r.contains(b))
        };
        assert!(has("╔", "SETTINGS"));
        assert!(has("║┌", "┐║"));
        assert!(has("║│", "[DISPLAY]"));
    }
}
