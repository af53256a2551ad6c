//! Procedural glitch effect for text.
//!
//! The effect cycles between idle and active episodes. While active it
//! produces a per-character transform, see `CharacterGlitchState`, from the
//! current intensity, a noise seed rolled once per episode and the elapsed
//! time.

use std::cell::RefCell;

use rand::SeedableRng;
use util::{GameRng, entropy_rng, noise, noise_seed};

mod color;
mod config;
mod displace;
mod duplicate;
mod state;

pub use config::GlitchConfig;
pub use state::CharacterGlitchState;

/// Reference resolution that has resolution scale 1.0.
pub const REFERENCE_SCREEN: [i32; 2] = [1920, 1080];

const MIN_RESOLUTION_SCALE: f32 = 0.3;
const MAX_RESOLUTION_SCALE: f32 = 3.0;

// Intensity thresholds for the individual effects.
const SLICE_THRESHOLD: f32 = 0.15;
const BLOCK_THRESHOLD: f32 = 0.2;
const JITTER_THRESHOLD: f32 = 0.1;
const DUPLICATE_THRESHOLD: f32 = 0.3;
const COLOR_THRESHOLD: f32 = 0.2;

#[derive(Copy, Clone, Debug, PartialEq)]
enum Phase {
    Idle { idle_timer: f32 },
    Active { glitch_timer: f32 },
}

pub struct GlitchEffect {
    config: GlitchConfig,
    /// Jitter source, `None` until the effect is initialized.
    ///
    /// Character queries advance the stream through a shared reference.
    rng: Option<RefCell<GameRng>>,
    phase: Phase,
    intensity: f32,
    elapsed: f32,
    seed: u32,
    screen_size: [i32; 2],
    resolution_scale: f32,
}

impl Default for GlitchEffect {
    fn default() -> Self {
        GlitchEffect::new(Default::default())
    }
}

impl GlitchEffect {
    pub fn new(config: GlitchConfig) -> Self {
        GlitchEffect {
            phase: Phase::Idle {
                idle_timer: config.idle_time,
            },
            config,
            rng: None,
            intensity: 0.0,
            elapsed: 0.0,
            seed: 0,
            screen_size: REFERENCE_SCREEN,
            resolution_scale: 1.0,
        }
    }

    /// Seed the jitter stream from OS entropy and arm the idle timer.
    pub fn initialize(&mut self) -> bool {
        if self.rng.is_some() {
            log::warn!("GlitchEffect already initialized");
            return true;
        }
        self.initialize_with(entropy_rng())
    }

    /// Initialize with a fixed seed for a reproducible glitch stream.
    pub fn initialize_seeded(&mut self, seed: u64) -> bool {
        if self.rng.is_some() {
            log::warn!("GlitchEffect already initialized");
            return true;
        }
        self.initialize_with(GameRng::seed_from_u64(seed))
    }

    fn initialize_with(&mut self, mut rng: GameRng) -> bool {
        self.seed = noise_seed(&mut rng);
        self.rng = Some(RefCell::new(rng));
        self.phase = Phase::Idle {
            idle_timer: self.config.idle_time,
        };
        log::info!("GlitchEffect initialized");
        true
    }

    pub fn is_initialized(&self) -> bool {
        self.rng.is_some()
    }

    /// Advance timers by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if self.rng.is_none() || !self.config.enabled {
            return;
        }

        // Also maps NaN to zero.
        let dt = dt.max(0.0);
        self.elapsed += dt;

        match self.phase {
            Phase::Idle { idle_timer } => {
                let idle_timer = idle_timer - dt;
                if idle_timer <= 0.0 {
                    self.trigger_glitch();
                } else {
                    self.phase = Phase::Idle { idle_timer };
                }
            }
            Phase::Active { glitch_timer } => {
                let glitch_timer = glitch_timer + dt;
                let duration = self.config.duration;
                if duration <= 0.0 || glitch_timer >= duration {
                    self.end_glitch();
                } else {
                    self.phase = Phase::Active { glitch_timer };
                    let progress = glitch_timer / duration;
                    self.intensity =
                        envelope(progress, self.config.intensity);
                }
            }
        }
    }

    /// Force the effect back to idle and restart the clock.
    pub fn reset(&mut self) {
        self.end_glitch();
        self.elapsed = 0.0;
    }

    /// Start a glitch episode right away.
    pub fn trigger_glitch(&mut self) {
        self.phase = Phase::Active { glitch_timer: 0.0 };
        self.intensity = 0.0;
        self.reroll_seed();
        log::debug!("Glitch triggered, seed {}", self.seed);
    }

    fn end_glitch(&mut self) {
        self.phase = Phase::Idle {
            idle_timer: self.config.idle_time,
        };
        self.intensity = 0.0;
        self.reroll_seed();
    }

    fn reroll_seed(&mut self) {
        if let Some(rng) = self.rng.as_mut() {
            self.seed = noise_seed(rng.get_mut());
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Active { .. })
    }

    pub fn current_intensity(&self) -> f32 {
        self.intensity
    }

    /// Time into the current episode, `None` when idle.
    pub fn glitch_timer(&self) -> Option<f32> {
        match self.phase {
            Phase::Active { glitch_timer } => Some(glitch_timer),
            Phase::Idle { .. } => None,
        }
    }

    /// Time left until the next episode, `None` when active.
    pub fn idle_timer(&self) -> Option<f32> {
        match self.phase {
            Phase::Idle { idle_timer } => Some(idle_timer),
            Phase::Active { .. } => None,
        }
    }

    pub fn config(&self) -> &GlitchConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: GlitchConfig) {
        self.config = config;
        self.intensity = self.intensity.min(self.config.intensity.max(0.0));
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    pub fn screen_size(&self) -> [i32; 2] {
        self.screen_size
    }

    pub fn resolution_scale(&self) -> f32 {
        self.resolution_scale
    }

    /// Update the resolution scale from screen pixel dimensions.
    pub fn set_screen_size(&mut self, width: i32, height: i32) {
        self.screen_size = [width, height];
        let scale = (width as f32 / REFERENCE_SCREEN[0] as f32)
            .min(height as f32 / REFERENCE_SCREEN[1] as f32);
        self.resolution_scale =
            scale.clamp(MIN_RESOLUTION_SCALE, MAX_RESOLUTION_SCALE);
        log::debug!(
            "GlitchEffect screen size {width}x{height}, scale {}",
            self.resolution_scale
        );
    }

    /// Transform for character `index` of a `count` character string.
    ///
    /// Returns the neutral state unless a glitch episode is in progress.
    /// Character jitter draws from the internal random stream, everything
    /// else is a pure function of the frame state.
    pub fn character_state(
        &self,
        index: u32,
        count: u32,
    ) -> CharacterGlitchState {
        let mut state = CharacterGlitchState::default();

        let Some(rng) = &self.rng else {
            return state;
        };
        if !self.config.enabled || !self.is_active() || count == 0 {
            return state;
        }

        let frame = self.frame();
        let cfg = &self.config;
        let i = self.intensity;

        if cfg.text_slicing && i > SLICE_THRESHOLD {
            if let Some(offset) = frame.slice(index, count) {
                state.slice_offset = offset * i;
                state.in_slice_zone = true;
                state.offset.x += offset * i;
            }
        }

        if cfg.block_displacement && i > BLOCK_THRESHOLD {
            state.offset += frame.block(index, count) * i;
        }

        if cfg.character_displacement && i > JITTER_THRESHOLD {
            let wave = frame.wave(index, count);
            let jitter = frame.jitter(&mut *rng.borrow_mut());
            state.offset +=
                (wave * 0.7 + jitter * 0.3) * i * noise(index, self.seed);
        }

        if cfg.text_duplication && i > DUPLICATE_THRESHOLD {
            if let Some(offset) = frame.duplicate(index) {
                state.duplicate = true;
                state.duplicate_offset = offset * i;
            }
        }

        if i > COLOR_THRESHOLD {
            state.color_mod = frame.color_mod(index, i);
        }

        if cfg.random_corruption {
            state.visible = !frame.is_corrupted(index, i);
        }

        if cfg.scanlines {
            state.scanline_phase = frame.scanline_phase();
        }

        state
    }

    fn frame(&self) -> Frame<'_> {
        Frame {
            config: &self.config,
            elapsed: self.elapsed,
            seed: self.seed,
            scale: self.resolution_scale,
        }
    }
}

/// Intensity curve over episode progress in `[0, 1)`.
///
/// The ramp-up branch divides by 0.5, so at the 20% mark it has only reached
/// 40% of the peak before jumping to the full peak and fading out.
fn envelope(progress: f32, peak: f32) -> f32 {
    let peak = peak.max(0.0);
    let level = if progress < 0.2 {
        (progress / 0.5) * peak
    } else {
        peak * (1.0 - (progress - 0.2) / 0.8)
    };
    level.clamp(0.0, peak)
}

/// Snapshot of the effect state that the per-character passes read from.
#[derive(Copy, Clone)]
struct Frame<'a> {
    config: &'a GlitchConfig,
    elapsed: f32,
    seed: u32,
    scale: f32,
}

impl Frame<'_> {
    /// Noise keyed to this episode, `salt` selects an independent stream.
    fn noise(&self, index: u32, salt: u32) -> f32 {
        noise(index, self.seed.wrapping_add(salt))
    }
}
