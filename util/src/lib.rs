//! Unopinionated standalone utilities.

mod rect;
pub use rect::{Rect, v2};

mod rng;
pub use rng::{GameRng, RngExt, entropy_rng, noise, noise_seed};

mod text;
pub use text::StrExt;
