//! Drawing text through a `GlitchEffect`.

use engine::GlitchEffect;
use gfx::{Buffer, CELL_SIZE, Glyph, Window};
use glam::{IVec2, Vec3};

/// Brightness of duplicate glyphs relative to the displaced original.
const DUPLICATE_DIM: f32 = 0.6;

/// Brightness of glyphs that fall on a dark scanline band.
const SCANLINE_DIM: f32 = 0.7;

/// Write `text` at cell `pos` with the effect's per-character transforms.
///
/// Each character is queried once per call. Displaced glyphs are drawn
/// first, duplicates go on top in a second pass. Returns the number of
/// characters in the text.
pub fn write(
    win: &Window,
    b: &mut Buffer,
    pos: impl Into<IVec2>,
    text: &str,
    color: Vec3,
    fx: &GlitchEffect,
) -> u32 {
    let scanlines = fx.config().scanlines && fx.is_active();
    let mut duplicates = Vec::new();

    let count = win.write_with(b, pos, text, color, |i, n, g| {
        let state = fx.character_state(i, n);

        g.pos += state.offset;
        g.color *= state.color_mod;
        g.visible = state.visible;

        if scanlines && on_dark_band(g.pos.y, state.scanline_phase) {
            g.color *= SCANLINE_DIM;
        }

        if state.duplicate {
            duplicates.push(Glyph {
                c: g.c,
                pos: g.pos + state.duplicate_offset,
                color: color * state.color_mod * DUPLICATE_DIM,
                visible: true,
            });
        }
    });

    for glyph in &duplicates {
        win.draw_glyph(b, glyph);
    }

    count
}

/// Write text centered on row `y`.
pub fn write_center(
    win: &Window,
    b: &mut Buffer,
    y: i32,
    text: &str,
    color: Vec3,
    fx: &GlitchEffect,
) -> u32 {
    write(win, b, [win.center_x(text), y], text, color, fx)
}

/// Scanline bands are one cell high and scroll down with `phase` pixels.
fn on_dark_band(y: f32, phase: f32) -> bool {
    ((y - phase) / CELL_SIZE.y).floor().rem_euclid(2.0) >= 1.0
}

#[cfg(test)]
mod tests {
    use engine::GlitchConfig;
    use gfx::color;

    use super::*;

    const CYAN: Vec3 = Vec3::new(0.0, 1.0, 1.0);

    #[test]
    fn idle_is_plain_text() {
        let mut fx = GlitchEffect::new(GlitchConfig::cyber());
        fx.initialize_seeded(1);

        let mut buf = Buffer::new(20, 3);
        let win = Window::from(&buf);
        let n = write_center(&win, &mut buf, 1, "0xD3ADC0DE", CYAN, &fx);
        assert_eq!(n, 10);
        assert_eq!(buf.row_text(1), "     0xD3ADC0DE");
        let cell = buf.get([5, 1]).unwrap();
        assert_eq!(cell.foreground.0, color::from_rgb(CYAN).0);
    }

    #[test]
    fn uninitialized_is_plain_text() {
        let mut fx = GlitchEffect::new(GlitchConfig::cyber());
        fx.trigger_glitch();
        fx.update(0.05);

        let mut buf = Buffer::new(10, 1);
        let win = Window::from(&buf);
        write(&win, &mut buf, [0, 0], "abc", Vec3::ONE, &fx);
        assert_eq!(buf.row_text(0), "abc");
    }

    #[test]
    fn active_glitch_disturbs_text() {
        let text = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG";
        let config = GlitchConfig {
            corruption_chance: 0.5,
            ..GlitchConfig::cyber()
        };
        let mut fx = GlitchEffect::new(config);
        fx.initialize_seeded(7);
        fx.trigger_glitch();
        // Past the ramp, near peak intensity.
        fx.update(0.06);
        assert!(fx.current_intensity() > 0.5);

        let mut buf = Buffer::new(60, 9);
        let win = Window::from(&buf);
        write(&win, &mut buf, [8, 4], text, Vec3::ONE, &fx);

        let mut plain = Buffer::new(60, 9);
        win.write(&mut plain, [8, 4], text);

        let rows =
            |b: &Buffer| (0..9).map(|y| b.row_text(y)).collect::<Vec<_>>();
        assert!(rows(&buf) != rows(&plain));
    }

    #[test]
    fn scanline_bands() {
        assert!(!on_dark_band(0.0, 0.0));
        assert!(on_dark_band(16.0, 0.0));
        assert!(on_dark_band(-16.0, 0.0));
        // Bands scroll with the phase.
        assert!(on_dark_band(0.0, 4.0));
        assert!(!on_dark_band(10.0, 4.0));
    }
}
