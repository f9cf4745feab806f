use std::collections::VecDeque;

use rand::Rng;

/// Source of uniform picks used by the generator.
///
/// Generation only ever needs "pick an index below `len`"; everything else
/// (single draws, draws with replacement, insertion positions) is built on it.
/// Implemented for the `rand` generators and for [`ScriptedSource`].
pub trait RandomSource {
	/// Returns an index in `0..len`. `len` is always at least 1.
	fn index(&mut self, len: usize) -> usize;

	/// Picks one element uniformly. Returns `None` for an empty slice.
	fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
		if items.is_empty() {
			return None;
		}
		let idx = self.index(items.len());
		items.get(idx)
	}
}

impl<R: Rng + ?Sized> RandomSource for R {
	fn index(&mut self, len: usize) -> usize {
		self.random_range(0..len)
	}
}

/// Replays a fixed list of indices, for deterministic tests.
///
/// Each draw pops the next value and reduces it modulo `len`.
/// Once the script is exhausted every draw returns 0.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
	script: VecDeque<usize>,
}

impl ScriptedSource {
	pub fn new<I: IntoIterator<Item = usize>>(script: I) -> Self {
		Self { script: script.into_iter().collect() }
	}

	/// Number of scripted draws not consumed yet.
	pub fn remaining(&self) -> usize {
		self.script.len()
	}
}

impl RandomSource for ScriptedSource {
	fn index(&mut self, len: usize) -> usize {
		match self.script.pop_front() {
			Some(value) => value % len,
			None => 0,
		}
	}
}
