//! Seed colors for "give me a random palette".
//!
//! A short list of saturated mid-tones. The random pair puts one of them on
//! white; most reach AA there, and the palette synthesizer finds accessible
//! variants for every one of them. The pick is driven by a caller-supplied
//! seed so the same seed always lands on the same color.

use crate::palette::ColorInput;

/// Seed colors, in pick order.
pub const SEED_COLORS: [&str; 8] = [
    "#1976d2", "#2e7d32", "#d32f2f", "#f57c00", "#9c27b0", "#00796b", "#5d4037", "#455a64",
];

/// Background paired with every random seed.
pub const RANDOM_BACKGROUND: &str = "#ffffff";

// ---------------------------------------------------------------------------
// Xorshift32: a minimal deterministic PRNG
// ---------------------------------------------------------------------------

/// Minimal deterministic PRNG. No external `rand` crate needed.
struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    const fn next(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    /// Pick a random element from a slice.
    fn pick<'a, T>(&mut self, slice: &'a [T]) -> &'a T {
        let idx = (self.next() as usize) % slice.len();
        &slice[idx]
    }
}

/// Pick one of [`SEED_COLORS`] for `seed`.
#[must_use]
pub fn random_seed(seed: u32) -> &'static str {
    *Xorshift32::new(seed).pick(&SEED_COLORS)
}

/// The random pair for `seed`: a seed color on white.
#[must_use]
pub fn random_pair(seed: u32) -> ColorInput {
    ColorInput::new(random_seed(seed), RANDOM_BACKGROUND)
}
