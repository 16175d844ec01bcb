/// Stochastic mechanics: uniform draws for the critical cascade.
/// Any `rand_core` generator is a source; `seeded` hands out the default
/// `bevy_prng::WyRand`, and `ScriptedDraws` replays fixed values in tests.
use bevy_prng::WyRand;
use rand_core::{RngCore, SeedableRng};

/// A source of uniform draws in `[0, 1)`.
pub trait UnitSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: RngCore + ?Sized> UnitSource for R {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        unit_f64(self.next_u64())
    }
}

/// Top 53 bits of a u64 as a float in `[0, 1)`.
#[inline]
pub fn unit_f64(bits: u64) -> f64 {
    ((bits >> 11) as f64) / ((1u64 << 53) as f64)
}

/// Seeded WyRand, reproducible across runs.
#[inline]
pub fn seeded(seed: u64) -> WyRand {
    WyRand::from_seed(seed.to_le_bytes())
}

/// Replays a fixed list of draws, cycling when exhausted. An empty script
/// always draws `0.0`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDraws {
    draws: Vec<f64>,
    cursor: usize,
    consumed: usize,
}

impl ScriptedDraws {
    pub fn new(draws: Vec<f64>) -> Self {
        Self { draws, cursor: 0, consumed: 0 }
    }

    pub fn constant(draw: f64) -> Self {
        Self::new(vec![draw])
    }

    /// Number of draws handed out so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl UnitSource for ScriptedDraws {
    fn next_unit(&mut self) -> f64 {
        self.consumed += 1;
        if self.draws.is_empty() {
            return 0.0;
        }
        let u = self.draws[self.cursor % self.draws.len()];
        self.cursor = (self.cursor + 1) % self.draws.len();
        u
    }
}
