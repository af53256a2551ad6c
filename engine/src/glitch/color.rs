use glam::{Vec3, vec3};

use super::Frame;

/// Noise stream salt for corruption.
const CORRUPTION: u32 = 1000;

impl Frame<'_> {
    /// Per-channel color multiplier.
    ///
    /// Characters rotate through three buckets that each boost a different
    /// channel. Chromatic aberration wins over plain RGB separation when
    /// both are enabled.
    pub(super) fn color_mod(&self, index: u32, intensity: f32) -> Vec3 {
        let cfg = self.config;
        if cfg.chromatic_aberration {
            let k = intensity * cfg.chromatic_intensity;
            let (up, mid, low) = (1.0 + k * 0.8, 1.0 - k * 0.5, 1.0 - k * 0.7);
            let base = match index % 3 {
                0 => vec3(up, mid, low),
                1 => vec3(mid, up, mid),
                _ => vec3(low, mid, up),
            };
            base + cfg.glitch_color * k * 0.4
        } else if cfg.rgb_separation {
            let (up, down) = (1.0 + intensity * 0.5, 1.0 - intensity * 0.3);
            let base = match index % 3 {
                0 => vec3(up, down, down),
                1 => vec3(down, up, down),
                _ => vec3(down, down, up),
            };
            base + cfg.glitch_color * intensity * 0.3
        } else {
            Vec3::ONE
        }
    }

    /// Whether the character drops out this episode.
    pub(super) fn is_corrupted(&self, index: u32, intensity: f32) -> bool {
        let chance = self.config.corruption_chance * intensity;
        self.noise(index, CORRUPTION) < chance
    }

    /// Scroll position of the scanline bands.
    pub(super) fn scanline_phase(&self) -> f32 {
        let period = self.config.scanline_height * 10.0;
        if period <= 0.0 {
            return 0.0;
        }
        (self.elapsed * self.config.scanline_speed) % period
    }
}
