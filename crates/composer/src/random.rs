//! Injectable randomness for fragment and structure selection.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Source of uniform index draws.
pub trait RandomSource {
    /// Return an index in `0..len`. `len` is always non-zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

/// Pick one element of `items` using `rng`.
pub fn pick<'a, T: ?Sized>(rng: &mut dyn RandomSource, items: &'a [&'a T]) -> &'a T {
    debug_assert!(!items.is_empty(), "cannot pick from an empty pool");
    let index = rng.pick_index(items.len()) % items.len();
    items[index]
}

/// Draws from the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Reproducible draws from a seeded generator.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// Replays a fixed sequence of indices, wrapping each into range. Once the
/// sequence is exhausted every draw returns 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    script: VecDeque<usize>,
    draws: usize,
}

impl ScriptedRandom {
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
            draws: 0,
        }
    }

    /// Number of draws made so far.
    #[must_use]
    pub const fn draws(&self) -> usize {
        self.draws
    }
}

impl RandomSource for ScriptedRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        self.draws += 1;
        self.script.pop_front().unwrap_or(0) % len
    }
}
