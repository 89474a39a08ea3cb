//! Random choice over the fixed reply pools.

use rand::seq::SliceRandom;

pub trait Pick {
    /// Choose one item; `None` only for an empty slice.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>;
}

/// Uniform choice using the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPick;

impl Pick for RandomPick {
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut rand::thread_rng())
    }
}

/// Always picks the item at a fixed index (wrapping). For tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPick(pub usize);

impl Pick for FixedPick {
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.0 % items.len())
    }
}
