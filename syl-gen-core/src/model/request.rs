use serde::{Deserialize, Serialize};

use super::category::{Category, Gender};

/// Syllable target used when a request supplies none.
pub const DEFAULT_SYLLABLES: u32 = 2;

/// Suffix toggles and extras.
///
/// Place toggles apply to `place` and `all`; `gender` applies to `person`.
/// `include_prepositions` only has an effect on multi-word place names.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct SuffixOptions {
	pub include_natural: bool,
	pub include_artificial: bool,
	pub include_generic: bool,
	pub include_continent: bool,
	pub include_prepositions: bool,
	pub gender: Gender,
}

impl Default for SuffixOptions {
	fn default() -> Self {
		Self {
			include_natural: true,
			include_artificial: true,
			include_generic: true,
			include_continent: false,
			include_prepositions: false,
			gender: Gender::Any,
		}
	}
}

/// Input parameters for one generated name.
///
/// Built fresh by the caller for each call; the generator only borrows it.
///
/// # Fields
/// - `syllables`: target per word. Missing entries repeat the last one.
/// - `word_count`: number of words. `0` produces an empty string.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GenerationRequest {
	pub category: Category,
	pub syllables: Vec<u32>,
	pub word_count: usize,
	pub hyphenated: bool,
	pub demonym: bool,
	pub options: SuffixOptions,
}

impl Default for GenerationRequest {
	fn default() -> Self {
		Self {
			category: Category::Place,
			syllables: vec![DEFAULT_SYLLABLES],
			word_count: 1,
			hyphenated: false,
			demonym: false,
			options: SuffixOptions::default(),
		}
	}
}

impl GenerationRequest {
	/// Creates a single-word request for `category` with default options.
	pub fn new(category: Category) -> Self {
		Self { category, ..Self::default() }
	}

	/// Returns the syllable target of every word, padded to `word_count`.
	///
	/// A single value applies to all words; an empty list falls back to
	/// [`DEFAULT_SYLLABLES`].
	pub fn syllable_targets(&self) -> Vec<u32> {
		let last = self.syllables.last().copied().unwrap_or(DEFAULT_SYLLABLES);
		(0..self.word_count)
			.map(|i| self.syllables.get(i).copied().unwrap_or(last))
			.collect()
	}
}
