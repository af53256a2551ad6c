use rand::prelude::*;

/// Good default concrete rng.
pub type GameRng = rand_xorshift::XorShiftRng;

/// Stateless integer hash noise in `[0, 1)`.
///
/// Pure function of its two inputs, so the same index and seed always give
/// the same value. Use it for effects that need to stay consistent across
/// frames and across neighboring cells, use a `GameRng` for effects that are
/// supposed to flicker.
///
/// ```
/// # use util::noise;
/// assert_eq!(noise(12, 3456), noise(12, 3456));
/// assert!((0.0..1.0).contains(&noise(u32::MAX, u32::MAX)));
/// ```
pub fn noise(index: u32, seed: u32) -> f32 {
    let n = index
        .wrapping_mul(374_761_393)
        .wrapping_add(seed.wrapping_mul(668_265_263));
    let n = (n ^ (n >> 13)).wrapping_mul(1_274_126_177);
    ((n ^ (n >> 16)) & 0xff_ffff) as f32 / 16_777_216.0
}

/// Roll a fresh noise seed in `0..10000`.
pub fn noise_seed<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    (rng.gen::<f32>() * 10_000.0) as u32
}

/// Build a generator from OS entropy.
pub fn entropy_rng() -> GameRng {
    GameRng::from_entropy()
}

pub trait RngExt {
    /// Uniform sample in `[-1, 1)`.
    fn signed_unit(&mut self) -> f32;
}

impl<T: Rng + ?Sized> RngExt for T {
    fn signed_unit(&mut self) -> f32 {
        (self.gen::<f32>() - 0.5) * 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn noise_is_deterministic(index: u32, seed: u32) -> bool {
        noise(index, seed).to_bits() == noise(index, seed).to_bits()
    }

    #[quickcheck]
    fn noise_is_unit_range(index: u32, seed: u32) -> bool {
        (0.0..1.0).contains(&noise(index, seed))
    }

    #[test]
    fn noise_varies_with_seed() {
        // Not a statistical test, just make sure the seed isn't ignored.
        let a: Vec<f32> = (0..32).map(|i| noise(i, 1)).collect();
        let b: Vec<f32> = (0..32).map(|i| noise(i, 2)).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn noise_is_spread_out() {
        let n = 10_000;
        let low = (0..n).filter(|&i| noise(i, 77) < 0.5).count();
        // Should be around half.
        assert!(low > n as usize * 4 / 10 && low < n as usize * 6 / 10);
    }

    #[test]
    fn seeds_stay_in_range() {
        let mut rng = GameRng::seed_from_u64(0xdeadbeef);
        for _ in 0..1000 {
            assert!(noise_seed(&mut rng) < 10_000);
            let x = rng.signed_unit();
            assert!((-1.0..1.0).contains(&x));
        }
    }
}
