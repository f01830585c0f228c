//! RNG module - injectable random source for tile spawning
//!
//! The spawner never reaches for a global generator; it draws from any
//! [`RandomSource`] it is handed. [`SimpleRng`] is the default source: a small
//! LCG that makes a whole session replayable from its seed.

/// A source of uniformly distributed integers.
pub trait RandomSource {
    /// Uniform value in `[0, max)`. `max` must be non-zero.
    fn next_range(&mut self, max: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    /// Maps the full 32-bit output onto `[0, max)` with a multiply-shift.
    ///
    /// The low bits of a power-of-two LCG have short periods (bit 0 simply
    /// alternates), so `% max` would make 2/4 choices strictly alternate.
    fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
