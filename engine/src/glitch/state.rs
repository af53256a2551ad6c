use glam::{Vec2, Vec3};

/// Per-character transform produced by `GlitchEffect::character_state`.
///
/// Offsets are in pixels. `color_mod` is a per-channel multiplier and is not
/// clamped, hosts should saturate the final color themselves.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CharacterGlitchState {
    pub offset: Vec2,
    pub color_mod: Vec3,
    pub alpha: f32,
    pub scale: f32,
    pub visible: bool,
    pub scanline_phase: f32,
    /// Draw a second copy of the glyph in a separate pass.
    pub duplicate: bool,
    /// Offset of the duplicate relative to the displaced glyph.
    pub duplicate_offset: Vec2,
    pub slice_offset: f32,
    pub in_slice_zone: bool,
}

impl Default for CharacterGlitchState {
    fn default() -> Self {
        CharacterGlitchState {
            offset: Vec2::ZERO,
            color_mod: Vec3::ONE,
            alpha: 1.0,
            scale: 1.0,
            visible: true,
            scanline_phase: 0.0,
            duplicate: false,
            duplicate_offset: Vec2::ZERO,
            slice_offset: 0.0,
            in_slice_zone: false,
        }
    }
}

impl CharacterGlitchState {
    /// Whether the state leaves the glyph exactly as it would be drawn
    /// without glitching.
    pub fn is_neutral(&self) -> bool {
        *self == Self::default()
    }
}
