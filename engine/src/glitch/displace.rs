use glam::{Vec2, vec2};
use rand::Rng;
use util::{RngExt, noise};

use super::Frame;

// Noise stream salts for the block pass.
const BLOCK_X: u32 = 500;
const BLOCK_Y: u32 = 600;

/// Blocks whose noise falls below this stay in place.
const BLOCK_GATE: f32 = 0.6;

impl Frame<'_> {
    /// Layered sine wave displacement across the string.
    pub(super) fn wave(&self, index: u32, count: u32) -> Vec2 {
        if count == 0 {
            return Vec2::ZERO;
        }
        let p = index as f32 / count as f32;
        let t = self.elapsed;

        let w1 = (t * 10.0 + p * 20.0).sin();
        let w2 = (t * 7.3 + p * 15.0 + 1.5).sin();
        let w3 = (t * 13.7 - p * 10.0).cos();

        vec2(
            (w1 * 0.5 + w2 * 0.3) * self.config.max_jitter * self.scale,
            w3 * 0.2 * self.config.vertical_jitter * self.scale,
        )
    }

    /// Uniform random jitter, different on every call.
    pub(super) fn jitter<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        vec2(
            rng.signed_unit() * self.config.max_jitter * self.scale,
            rng.signed_unit() * self.config.vertical_jitter * self.scale,
        )
    }

    /// Horizontal offset for characters inside the moving slice zone.
    ///
    /// The zone center moves ten times a second. Characters in the zone
    /// share a direction and get pushed harder the closer they are to the
    /// center.
    pub(super) fn slice(&self, index: u32, count: u32) -> Option<f32> {
        if count == 0 {
            return None;
        }
        let p = index as f32 / count as f32;
        let center = noise((self.elapsed * 10.0) as u32, self.seed);

        let dist = (p - center).abs();
        let h = self.config.slice_height;
        if dist >= h {
            return None;
        }

        let dir = if noise((center * 1000.0) as u32, self.seed) > 0.5 {
            1.0
        } else {
            -1.0
        };
        Some(dir * self.config.max_slice_offset * (1.0 - dist / h) * self.scale)
    }

    /// Offset shared by every character in the same block.
    pub(super) fn block(&self, index: u32, count: u32) -> Vec2 {
        if count == 0 {
            return Vec2::ZERO;
        }
        let len = ((count as f32 * self.config.block_size) as u32).max(1);
        let block = index / len;

        let nx = self.noise(block, BLOCK_X);
        if nx < BLOCK_GATE {
            return Vec2::ZERO;
        }
        let ny = self.noise(block, BLOCK_Y);

        let max = self.config.max_block_offset * self.scale;
        vec2((nx - 0.5) * 2.0 * max, (ny - 0.5) * 2.0 * max * 0.5)
    }
}
