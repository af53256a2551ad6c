//! Terminal palette and RGB to xterm-256 color mapping.

use glam::Vec3;
use navni::{CharCell, Rgba, X256Color};

/// Dark terminal palette for the 16 system colors.
pub const PALETTE: [Rgba; 16] = [
    Rgba::new(0x0a, 0x0a, 0x12, 0xff), // black
    Rgba::new(0x99, 0x11, 0x33, 0xff), // maroon
    Rgba::new(0x11, 0x99, 0x55, 0xff), // green
    Rgba::new(0x99, 0x77, 0x22, 0xff), // olive
    Rgba::new(0x22, 0x33, 0x99, 0xff), // navy
    Rgba::new(0x88, 0x22, 0x99, 0xff), // purple
    Rgba::new(0x11, 0x88, 0x99, 0xff), // teal
    Rgba::new(0xaa, 0xaa, 0xbb, 0xff), // silver
    Rgba::new(0x44, 0x44, 0x55, 0xff), // gray
    Rgba::new(0xff, 0x22, 0x55, 0xff), // red
    Rgba::new(0x33, 0xff, 0x88, 0xff), // lime
    Rgba::new(0xff, 0xdd, 0x44, 0xff), // yellow
    Rgba::new(0x44, 0x66, 0xff, 0xff), // blue
    Rgba::new(0xff, 0x33, 0xcc, 0xff), // fuchsia
    Rgba::new(0x33, 0xee, 0xff, 0xff), // aqua
    Rgba::new(0xee, 0xee, 0xff, 0xff), // white
];

pub const BACKGROUND: X256Color = X256Color(0);
pub const FOREGROUND: X256Color = X256Color(7);

/// Channel intensities of the 6x6x6 color cube.
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Empty cell with default colors.
pub fn blank() -> CharCell {
    CharCell::new(' ', FOREGROUND, BACKGROUND)
}

/// Nearest color cube entry for an RGB value.
///
/// Channels are saturated to `[0, 1]` first, so out of range glitch color
/// multipliers are fine.
pub fn from_rgb(rgb: Vec3) -> X256Color {
    let level = |x: f32| {
        let x = (x.clamp(0.0, 1.0) * 255.0) as i32;
        CUBE_LEVELS
            .iter()
            .enumerate()
            .min_by_key(|(_, l)| (**l as i32 - x).abs())
            .map_or(0, |(i, _)| i as u8)
    };

    let rgb = if rgb.is_nan() { Vec3::ZERO } else { rgb };
    X256Color(16 + 36 * level(rgb.x) + 6 * level(rgb.y) + level(rgb.z))
}

#[cfg(test)]
mod tests {
    use glam::vec3;

    use super::*;

    #[test]
    fn cube_mapping() {
        assert_eq!(from_rgb(Vec3::ZERO).0, 16);
        assert_eq!(from_rgb(Vec3::ONE).0, 231);
        assert_eq!(from_rgb(vec3(1.0, 0.0, 0.0)).0, 196);
        assert_eq!(from_rgb(vec3(1.0, 0.0, 1.0)).0, 201);
        // Oversaturated stays in the cube.
        assert_eq!(from_rgb(vec3(3.0, -2.0, 0.5)).0, 16 + 36 * 5 + 2);
        assert_eq!(from_rgb(Vec3::NAN).0, 16);
    }

    #[test]
    fn nearest_level() {
        // 0.5 is 127, closest to the 135 level.
        assert_eq!(from_rgb(Vec3::splat(0.5)).0, 16 + 36 * 2 + 6 * 2 + 2);
        // 0.2 is 51, closer to 95 than 0.
        assert_eq!(from_rgb(vec3(0.2, 0.0, 0.0)).0, 16 + 36);
    }
}
