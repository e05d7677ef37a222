//! RNG module - symbol bag drawing
//!
//! Symbols are drawn from a working copy of the palette without replacement.
//! When the working copy runs dry it is refilled from the full palette, so a
//! board larger than twice the palette still gets whole pairs.
//!
//! Also provides a simple LCG for deterministic testing.

use crate::types::Symbol;

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

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of an LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Pick a uniformly random element, `None` for an empty slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let i = self.next_range(items.len() as u32) as usize;
        items.get(i)
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current internal state (reseeding with it continues the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Palette bag: sampling without replacement, refilled on exhaustion
#[derive(Debug, Clone)]
pub struct SymbolBag<'p> {
    palette: &'p [Symbol],
    remaining: Vec<Symbol>,
}

impl<'p> SymbolBag<'p> {
    /// Create a bag over `palette`. Returns `None` for an empty palette.
    pub fn new(palette: &'p [Symbol]) -> Option<Self> {
        if palette.is_empty() {
            return None;
        }
        Some(Self {
            palette,
            remaining: palette.to_vec(),
        })
    }

    /// Draw the next symbol
    pub fn draw(&mut self, rng: &mut SimpleRng) -> Symbol {
        if self.remaining.is_empty() {
            self.remaining.extend_from_slice(self.palette);
        }

        let i = rng.next_range(self.remaining.len() as u32) as usize;
        self.remaining.swap_remove(i)
    }

    /// Symbols left before the next refill
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }
}
