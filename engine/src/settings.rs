use anyhow::Result;
use serde_json::Value;
use strum::{EnumIter, IntoEnumIterator};

use crate::Config;

/// Config key prefix for persisted settings.
const SETTINGS_KEY: &str = "settings";

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, EnumIter)]
pub enum Category {
    Display,
    Audio,
    Gameplay,
    Controls,
}

impl Category {
    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Category::Display => "DISPLAY",
            Category::Audio => "AUDIO",
            Category::Gameplay => "GAMEPLAY",
            Category::Controls => "CONTROLS",
        }
    }

    /// Config key.
    pub fn key(self) -> &'static str {
        match self {
            Category::Display => "display",
            Category::Audio => "audio",
            Category::Gameplay => "gameplay",
            Category::Controls => "controls",
        }
    }

    fn idx(self) -> usize {
        self as usize
    }

    /// Next category, wrapping around.
    pub fn next(self) -> Self {
        let n = Category::iter().count();
        Category::iter()
            .nth((self.idx() + 1) % n)
            .unwrap_or(Category::Display)
    }

    /// Previous category, wrapping around.
    pub fn prev(self) -> Self {
        let n = Category::iter().count();
        Category::iter()
            .nth((self.idx() + n - 1) % n)
            .unwrap_or(Category::Display)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SettingKind {
    Toggle,
    Slider { min: i32, max: i32 },
    Choice(&'static [&'static str]),
    KeyBind,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Setting {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: SettingKind,
    pub value: i32,
}

impl Setting {
    const fn new(
        name: &'static str,
        description: &'static str,
        kind: SettingKind,
        value: i32,
    ) -> Self {
        Setting {
            name,
            description,
            kind,
            value,
        }
    }

    /// Config key derived from the name, "FPS Limit" becomes "fps_limit".
    pub fn key(&self) -> String {
        self.name.to_lowercase().replace(' ', "_")
    }

    fn range(&self) -> Option<(i32, i32)> {
        match self.kind {
            SettingKind::Toggle => Some((0, 1)),
            SettingKind::Slider { min, max } => Some((min, max)),
            SettingKind::Choice(choices) => {
                Some((0, choices.len().saturating_sub(1) as i32))
            }
            SettingKind::KeyBind => None,
        }
    }

    pub fn set(&mut self, value: i32) {
        if let Some((min, max)) = self.range() {
            self.value = value.clamp(min, max);
        }
    }

    /// Step down, toggles switch off.
    pub fn decrease(&mut self) {
        match self.kind {
            SettingKind::Toggle => self.value = 0,
            SettingKind::KeyBind => {}
            _ => self.set(self.value - 1),
        }
    }

    /// Step up, toggles switch on.
    pub fn increase(&mut self) {
        match self.kind {
            SettingKind::Toggle => self.value = 1,
            SettingKind::KeyBind => {}
            _ => self.set(self.value + 1),
        }
    }

    /// Bracketed value for menu display.
    pub fn display_value(&self) -> String {
        match self.kind {
            SettingKind::Toggle if self.value == 1 => "[ON]".into(),
            SettingKind::Toggle => "[OFF]".into(),
            SettingKind::Slider { .. } => format!("[{}]", self.value),
            SettingKind::Choice(choices) => match self.choice(choices) {
                Some(choice) => format!("[{choice}]"),
                None => "[Unknown]".into(),
            },
            SettingKind::KeyBind => "[Press Key]".into(),
        }
    }

    fn choice(&self, choices: &[&'static str]) -> Option<&'static str> {
        usize::try_from(self.value)
            .ok()
            .and_then(|i| choices.get(i))
            .copied()
    }

    fn to_json(&self) -> Value {
        match self.kind {
            SettingKind::Toggle => Value::from(self.value != 0),
            SettingKind::Choice(choices) => match self.choice(choices) {
                Some(choice) => Value::from(choice),
                None => Value::Null,
            },
            _ => Value::from(self.value),
        }
    }

    fn read_json(&mut self, value: &Value) {
        let parsed = match (&self.kind, value) {
            (SettingKind::Toggle, Value::Bool(b)) => Some(*b as i32),
            (SettingKind::Choice(choices), Value::String(s)) => choices
                .iter()
                .position(|c| c.eq_ignore_ascii_case(s))
                .map(|i| i as i32),
            (_, Value::Number(n)) => n.as_i64().map(|n| {
                n.clamp(i32::MIN as i64, i32::MAX as i64) as i32
            }),
            _ => None,
        };

        match parsed {
            Some(v) => self.set(v),
            None => log::warn!(
                "Ignoring bad value {value} for setting {:?}",
                self.name
            ),
        }
    }
}

const DIFFICULTIES: &[&str] = &["Easy", "Normal", "Hard"];
const KEYBOARD_LAYOUTS: &[&str] = &["QWERTY", "AZERTY"];

/// Player-facing options grouped by category.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    categories: [Vec<Setting>; 4],
}

impl Default for Settings {
    fn default() -> Self {
        use SettingKind::*;

        Settings {
            categories: [
                vec![
                    Setting::new(
                        "Fullscreen",
                        "Toggle fullscreen mode",
                        Toggle,
                        0,
                    ),
                    Setting::new(
                        "VSync",
                        "Vertical synchronization",
                        Toggle,
                        1,
                    ),
                    Setting::new(
                        "FPS Limit",
                        "Maximum frames per second",
                        Slider { min: 30, max: 144 },
                        60,
                    ),
                    Setting::new(
                        "Text Scale",
                        "Size of text rendering",
                        Slider { min: 50, max: 200 },
                        100,
                    ),
                ],
                vec![
                    Setting::new(
                        "Master Volume",
                        "Overall audio volume",
                        Slider { min: 0, max: 100 },
                        80,
                    ),
                    Setting::new(
                        "Music Volume",
                        "Background music volume",
                        Slider { min: 0, max: 100 },
                        70,
                    ),
                    Setting::new(
                        "SFX Volume",
                        "Sound effects volume",
                        Slider { min: 0, max: 100 },
                        90,
                    ),
                ],
                vec![
                    Setting::new(
                        "Difficulty",
                        "Game challenge level",
                        Choice(DIFFICULTIES),
                        1,
                    ),
                    Setting::new("Autosave", "Automatic save game", Toggle, 1),
                    Setting::new(
                        "Text Speed",
                        "Dialogue text display speed",
                        Slider { min: 10, max: 100 },
                        50,
                    ),
                ],
                vec![
                    Setting::new(
                        "Mouse Support",
                        "Enable mouse controls",
                        Toggle,
                        1,
                    ),
                    Setting::new(
                        "Keyboard Layout",
                        "Key binding preset",
                        Choice(KEYBOARD_LAYOUTS),
                        0,
                    ),
                ],
            ],
        }
    }
}

impl Settings {
    /// Defaults overridden by whatever the config has stored.
    pub fn load(config: &Config) -> Self {
        let mut ret = Settings::default();
        for cat in Category::iter() {
            for s in ret.category_mut(cat) {
                let key = format!("{SETTINGS_KEY}.{}.{}", cat.key(), s.key());
                if let Some(value) = config.get::<Value>(&key) {
                    s.read_json(&value);
                }
            }
        }
        ret
    }

    /// Write every setting into the config.
    pub fn store(&self, config: &mut Config) -> Result<()> {
        for cat in Category::iter() {
            for s in self.category(cat) {
                let key = format!("{SETTINGS_KEY}.{}.{}", cat.key(), s.key());
                config.set(&key, s.to_json())?;
            }
        }
        Ok(())
    }

    pub fn category(&self, cat: Category) -> &[Setting] {
        &self.categories[cat.idx()]
    }

    pub fn category_mut(&mut self, cat: Category) -> &mut [Setting] {
        &mut self.categories[cat.idx()]
    }

    /// Look up a setting value by display name.
    pub fn get(&self, cat: Category, name: &str) -> Option<i32> {
        self.category(cat)
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &Setting)> {
        Category::iter().flat_map(move |c| {
            self.category(c).iter().map(move |s| (c, s))
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn category_wrap() {
        assert_eq!(Category::Display.prev(), Category::Controls);
        assert_eq!(Category::Controls.next(), Category::Display);
        assert_eq!(Category::Audio.next(), Category::Gameplay);
        let mut c = Category::Gameplay;
        for _ in 0..4 {
            c = c.next();
        }
        assert_eq!(c, Category::Gameplay);
    }

    #[test]
    fn slider_clamps() {
        let mut settings = Settings::default();
        let fps = &mut settings.category_mut(Category::Display)[2];
        assert_eq!(fps.name, "FPS Limit");
        for _ in 0..200 {
            fps.increase();
        }
        assert_eq!(fps.value, 144);
        for _ in 0..200 {
            fps.decrease();
        }
        assert_eq!(fps.value, 30);
    }

    #[test]
    fn toggles_and_choices() {
        let mut settings = Settings::default();
        let vsync = &mut settings.category_mut(Category::Display)[1];
        vsync.increase();
        assert_eq!(vsync.display_value(), "[ON]");
        vsync.decrease();
        vsync.decrease();
        assert_eq!(vsync.display_value(), "[OFF]");

        let difficulty = &mut settings.category_mut(Category::Gameplay)[0];
        assert_eq!(difficulty.display_value(), "[Normal]");
        difficulty.increase();
        difficulty.increase();
        assert_eq!(difficulty.display_value(), "[Hard]");
        difficulty.value = 7;
        assert_eq!(difficulty.display_value(), "[Unknown]");

        let mut bind = Setting::new("Jump", "", SettingKind::KeyBind, 0);
        bind.increase();
        assert_eq!(bind.display_value(), "[Press Key]");
        assert_eq!(bind.value, 0);
    }

    #[test]
    fn config_round_trip() {
        let mut settings = Settings::default();
        settings.category_mut(Category::Audio)[1].set(35);
        settings.category_mut(Category::Gameplay)[0].set(2);
        settings.category_mut(Category::Display)[0].increase();

        let mut config = Config::default();
        settings.store(&mut config).unwrap();
        assert_eq!(
            config.get::<Value>("settings.gameplay"),
            Some(json!({
                "difficulty": "Hard",
                "autosave": true,
                "text_speed": 50
            }))
        );
        assert_eq!(config.get::<i32>("settings.audio.music_volume"), Some(35));

        assert_eq!(Settings::load(&config), settings);
    }

    #[test]
    fn load_sanitizes() {
        let mut config = Config::default();
        config.set("settings.display.fps_limit", 1000).unwrap();
        config.set("settings.display.vsync", "yes please").unwrap();
        config.set("settings.controls.keyboard_layout", "azerty").unwrap();

        let settings = Settings::load(&config);
        assert_eq!(settings.get(Category::Display, "FPS Limit"), Some(144));
        assert_eq!(settings.get(Category::Display, "VSync"), Some(1));
        assert_eq!(
            settings.get(Category::Controls, "Keyboard Layout"),
            Some(1)
        );
        assert_eq!(settings.iter().count(), 12);
    }
}
