use glam::{Vec2, vec2};

use super::Frame;

// Noise stream salts.
const GATE: u32 = 700;
const DX: u32 = 800;
const DY: u32 = 900;

/// Largest duplicate displacement in pixels before intensity scaling.
const SPREAD: Vec2 = Vec2::new(10.0, 5.0);

impl Frame<'_> {
    /// Offset for a ghost copy of the character, if it gets one.
    ///
    /// Unlike the displacement passes this is not resolution scaled.
    pub(super) fn duplicate(&self, index: u32) -> Option<Vec2> {
        if self.noise(index, GATE) > self.config.duplication_chance {
            return None;
        }
        Some(
            vec2(self.noise(index, DX) - 0.5, self.noise(index, DY) - 0.5)
                * SPREAD,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GlitchConfig;

    #[test]
    fn duplicates() {
        let cfg = GlitchConfig::default();
        let f = Frame {
            config: &cfg,
            elapsed: 0.0,
            seed: 99,
            scale: 3.0,
        };
        let n = 1000;
        let dups: Vec<Vec2> = (0..n).filter_map(|i| f.duplicate(i)).collect();
        // Around 15%.
        assert!(dups.len() > 80 && dups.len() < 220);
        for d in dups {
            // Resolution scale has no effect.
            assert!(d.x.abs() <= 5.0 && d.y.abs() <= 2.5);
        }
    }

    #[test]
    fn chance_bounds() {
        let never = GlitchConfig {
            duplication_chance: -1.0,
            ..Default::default()
        };
        let always = GlitchConfig {
            duplication_chance: 1.0,
            ..Default::default()
        };
        fn frame(config: &GlitchConfig) -> Frame<'_> {
            Frame {
                config,
                elapsed: 0.0,
                seed: 5,
                scale: 1.0,
            }
        }
        assert!((0..100).all(|i| frame(&never).duplicate(i).is_none()));
        assert!((0..100).all(|i| frame(&always).duplicate(i).is_some()));
    }
}
