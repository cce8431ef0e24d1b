//! Tiny, fast LCG + Box-Muller for the demo generators.
//! Avoids rand dependency

use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone)]
pub struct Lcg(u64);

impl Lcg {
    #[must_use]
    pub fn seed(seed: u64) -> Self {
        Self(seed)
    }

    /// Seed from the wall clock; falls back to a fixed seed if the clock is
    /// before the epoch.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn seed_from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0x5EED, |d| d.as_nanos());
        Self(nanos as u64)
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 32) as u32
    }

    /// Uniform sample in `[0, 1]`.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX)
    }

    /// Normal 𝒩(mean, 1) sample.
    #[inline]
    pub fn normal(&mut self, mean: f64) -> f64 {
        let u1 = self.uniform().max(f64::MIN_POSITIVE);
        let u2 = self.uniform();
        mean + (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }
}
