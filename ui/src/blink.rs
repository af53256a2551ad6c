/// Seconds between cursor blink toggles.
const BLINK_PERIOD: f32 = 0.5;

/// Blinking selection marker state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Blink {
    timer: f32,
    on: bool,
}

impl Default for Blink {
    fn default() -> Self {
        Blink {
            timer: 0.0,
            on: true,
        }
    }
}

impl Blink {
    pub fn update(&mut self, dt: f32) {
        self.timer += dt.max(0.0);
        if self.timer >= BLINK_PERIOD {
            self.on = !self.on;
            self.timer = 0.0;
        }
    }

    /// Show the marker and restart the period, called when the selection
    /// moves.
    pub fn reset(&mut self) {
        *self = Default::default();
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Selection marker for a menu line.
    pub fn marker(&self, selected: bool) -> &'static str {
        if selected && self.on {
            "> "
        } else {
            "  "
        }
    }
}
