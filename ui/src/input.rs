use derive_more::Deref;
use indexmap::IndexMap;
use navni::KeyTyped;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum InputAction {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Cancel,
    Decrease,
    Increase,
    Quit,
}

#[derive(Clone, Deref, Eq, PartialEq)]
pub struct InputMap(IndexMap<KeyTyped, InputAction>);

impl Default for InputMap {
    fn default() -> Self {
        use InputAction::*;

        let mut ret: IndexMap<KeyTyped, InputAction> = Default::default();

        for (k, cmd) in &[
            ("Up", Up),
            ("Down", Down),
            ("Left", Left),
            ("Right", Right),
            ("w", Up),
            ("s", Down),
            ("a", Left),
            ("d", Right),
            ("Ret", Confirm),
            ("Sp", Confirm),
            ("Esc", Cancel),
            ("-", Decrease),
            ("PgDn", Decrease),
            ("=", Increase),
            ("+", Increase),
            ("PgUp", Increase),
            ("C-c", Quit),
        ] {
            ret.insert(
                k.parse::<KeyTyped>()
                    .expect("Error in InputMap::default map"),
                *cmd,
            );
        }

        InputMap(ret)
    }
}

impl InputMap {
    /// Action bound to a key, if any.
    pub fn action(&self, key: KeyTyped) -> Option<InputAction> {
        self.0.get(&key).copied()
    }
}
