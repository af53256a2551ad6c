use glam::{Vec3, vec3};
use serde::{Deserialize, Serialize};

/// Tuning knobs for `GlitchEffect`.
///
/// Distances are in pixels at 1920x1080 and get multiplied by the effect's
/// resolution scale. Chances and `intensity` are in `[0, 1]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlitchConfig {
    pub enabled: bool,

    /// Nominal glitches per second. Informational, the actual cadence comes
    /// from `duration` and `idle_time`.
    pub frequency: f32,
    /// Length of one glitch episode in seconds.
    pub duration: f32,
    /// Quiet time between glitch episodes in seconds.
    pub idle_time: f32,

    pub character_displacement: bool,
    pub max_jitter: f32,
    pub vertical_jitter: f32,

    pub rgb_separation: bool,
    pub rgb_separation_amount: f32,
    /// Tint that is blended into glitched characters.
    pub glitch_color: Vec3,

    pub scanlines: bool,
    pub scanline_speed: f32,
    pub scanline_height: f32,

    /// Peak intensity of a glitch episode.
    pub intensity: f32,

    pub random_corruption: bool,
    pub corruption_chance: f32,

    pub text_slicing: bool,
    /// Half-height of a slice zone as a fraction of the text length.
    pub slice_height: f32,
    pub max_slice_offset: f32,

    pub text_duplication: bool,
    pub duplication_chance: f32,

    pub block_displacement: bool,
    /// Length of a displaced block as a fraction of the text length.
    pub block_size: f32,
    pub max_block_offset: f32,

    pub chromatic_aberration: bool,
    pub chromatic_intensity: f32,
}

impl Default for GlitchConfig {
    fn default() -> Self {
        GlitchConfig {
            enabled: true,

            frequency: 3.0,
            duration: 0.1,
            idle_time: 2.0,

            character_displacement: true,
            max_jitter: 3.0,
            vertical_jitter: 1.0,

            rgb_separation: true,
            rgb_separation_amount: 2.0,
            glitch_color: vec3(1.0, 0.0, 0.0),

            scanlines: false,
            scanline_speed: 50.0,
            scanline_height: 2.0,

            intensity: 0.8,

            random_corruption: true,
            corruption_chance: 0.1,

            text_slicing: true,
            slice_height: 0.15,
            max_slice_offset: 30.0,

            text_duplication: true,
            duplication_chance: 0.15,

            block_displacement: true,
            block_size: 0.2,
            max_block_offset: 20.0,

            chromatic_aberration: true,
            chromatic_intensity: 1.5,
        }
    }
}

impl GlitchConfig {
    /// Heavier magenta glitching used for the title screen logo.
    pub fn cyber() -> Self {
        GlitchConfig {
            frequency: 0.5,
            duration: 0.25,
            idle_time: 2.0,
            max_jitter: 6.0,
            vertical_jitter: 3.0,
            rgb_separation_amount: 3.0,
            glitch_color: vec3(1.0, 0.0, 0.5),
            intensity: 0.9,
            corruption_chance: 0.08,
            slice_height: 0.2,
            max_slice_offset: 40.0,
            duplication_chance: 0.2,
            block_size: 0.25,
            max_block_offset: 25.0,
            chromatic_intensity: 2.0,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_override() {
        let cfg: GlitchConfig = serde_json::from_str(
            r#"{ "duration": 0.5, "glitch_color": [0.0, 1.0, 0.0] }"#,
        )
        .unwrap();
        assert_eq!(
            cfg,
            GlitchConfig {
                duration: 0.5,
                glitch_color: vec3(0.0, 1.0, 0.0),
                ..Default::default()
            }
        );
    }

    #[test]
    fn cyber_preset() {
        let cfg = GlitchConfig::cyber();
        assert!(cfg.enabled);
        assert!(!cfg.scanlines);
        assert_eq!(cfg.duration, 0.25);
        assert_eq!(cfg.glitch_color, vec3(1.0, 0.0, 0.5));
    }
}
