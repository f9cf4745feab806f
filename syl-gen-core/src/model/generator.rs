use std::path::Path;

use log::debug;

use crate::error::FragmentError;
use super::category::{Category, Gender};
use super::demonym::to_demonym;
use super::fragment_table::FragmentTables;
use super::random::RandomSource;
use super::request::{GenerationRequest, SuffixOptions};
use super::word;

/// High-level generator composing names from fragment tables.
///
/// # Responsibilities
/// - Resolve per-word syllable targets and the effective suffix pool
/// - Synthesize each word and join them, with an optional preposition
/// - Apply the demonym rewrite to place names on request
///
/// The tables are never mutated, so a `Generator` can be shared between
/// threads behind a plain reference.
#[derive(Clone, Debug)]
pub struct Generator {
	tables: FragmentTables,
}

impl Generator {
	/// Creates a generator over the builtin fragment tables.
	///
	/// # Errors
	/// Returns an error if the builtin tables fail validation.
	pub fn new() -> Result<Self, FragmentError> {
		Ok(Self::with_tables(FragmentTables::builtin()?))
	}

	/// Creates a generator over a TOML fragment file.
	///
	/// # Errors
	/// Returns an error if the file cannot be read, parsed or validated.
	pub fn from_file<P: AsRef<Path>>(filepath: P) -> Result<Self, FragmentError> {
		Ok(Self::with_tables(FragmentTables::from_file(filepath)?))
	}

	pub fn with_tables(tables: FragmentTables) -> Self {
		Self { tables }
	}

	pub fn tables(&self) -> &FragmentTables {
		&self.tables
	}

	/// Resolves the suffix candidates for one request.
	///
	/// # Behavior
	/// - `person`: the subgroup matching `gender`, or all three for `Any`.
	/// - `place` / `all`: every enabled place subgroup, once each. `all` also
	///   takes every person subgroup and the creature suffixes. An empty result
	///   falls back to the category's full suffix pool.
	/// - `creature`: the creature suffixes.
	///
	/// The result may still be empty for `person` when a custom table leaves a
	/// gender subgroup blank; `generate_word` then uses the table default.
	pub fn suffix_pool(&self, category: Category, options: &SuffixOptions) -> Vec<&str> {
		let person = self.tables.person_suffixes();

		match category {
			Category::Person => match options.gender {
				Gender::Masculine => strs(&person.masculine).collect(),
				Gender::Feminine => strs(&person.feminine).collect(),
				Gender::Neutral => strs(&person.neutral).collect(),
				Gender::Any => self.person_suffixes().collect(),
			},
			Category::Creature => strs(self.tables.creature_suffixes()).collect(),
			Category::Place | Category::All => {
				let place = self.tables.place_suffixes();
				let toggles = [
					(options.include_natural, &place.natural),
					(options.include_artificial, &place.artificial),
					(options.include_generic, &place.generic),
					(options.include_continent, &place.continent),
				];

				let mut pool: Vec<&str> = toggles
					.into_iter()
					.filter(|(enabled, _)| *enabled)
					.flat_map(|(_, group)| strs(group))
					.collect();
				if category == Category::All {
					pool.extend(self.person_suffixes());
					pool.extend(strs(self.tables.creature_suffixes()));
				}

				if pool.is_empty() {
					debug!("no {} suffix group enabled, using the full pool", category);
					pool = strs(self.tables.table(Category::Place).suffixes()).collect();
					if category == Category::All {
						pool.extend(self.person_suffixes());
						pool.extend(strs(self.tables.creature_suffixes()));
					}
				}
				pool
			}
		}
	}

	/// Neutral, masculine then feminine suffixes.
	fn person_suffixes(&self) -> impl Iterator<Item = &str> {
		let person = self.tables.person_suffixes();
		strs(&person.neutral).chain(strs(&person.masculine)).chain(strs(&person.feminine))
	}

	/// Synthesizes a single capitalized word.
	///
	/// `suffix_override` replaces the category's default suffix pool when it
	/// is given and non-empty.
	pub fn generate_word<R: RandomSource + ?Sized>(
		&self,
		category: Category,
		target: u32,
		suffix_override: Option<&[&str]>,
		rng: &mut R,
	) -> String {
		let table = self.tables.table(category);
		match suffix_override {
			Some(pool) if !pool.is_empty() => word::synthesize(table, target, pool, rng),
			_ => word::synthesize(table, target, table.suffixes(), rng),
		}
	}

	/// Generates one name using the thread-local random generator.
	pub fn generate(&self, request: &GenerationRequest) -> String {
		self.generate_with(request, &mut rand::rng())
	}

	/// Generates one name drawing from `rng`.
	///
	/// # Behavior
	/// - Words use `request.syllable_targets()`, one target each.
	/// - For place-like categories with `include_prepositions` and several
	///   words, one preposition is inserted after a random word (never first).
	/// - Words are joined with `-` when hyphenated, a space otherwise.
	/// - The demonym rewrite only applies to place-like categories.
	pub fn generate_with<R: RandomSource + ?Sized>(&self, request: &GenerationRequest, rng: &mut R) -> String {
		let category = request.category;
		let pool = self.suffix_pool(category, &request.options);
		debug!("generating {} word(s) for {} from {} suffixes", request.word_count, category, pool.len());

		let mut words: Vec<String> = request
			.syllable_targets()
			.into_iter()
			.map(|target| self.generate_word(category, target, Some(pool.as_slice()), rng))
			.collect();

		if category.is_place_like() && request.options.include_prepositions && words.len() > 1 {
			if let Some(preposition) = rng.pick(self.tables.prepositions()) {
				let at = rng.index(words.len() - 1) + 1;
				words.insert(at, preposition.clone());
			}
		}

		let name = words.join(if request.hyphenated { "-" } else { " " });
		let name = if request.demonym && category.is_place_like() {
			to_demonym(&name)
		} else {
			name
		};

		debug!("generated '{}'", name);
		name
	}

	/// Generates `count` independent names with the thread-local generator.
	///
	/// Duplicates are possible.
	pub fn generate_batch(&self, request: &GenerationRequest, count: usize) -> Vec<String> {
		self.generate_batch_with(request, count, &mut rand::rng())
	}

	pub fn generate_batch_with<R: RandomSource + ?Sized>(
		&self,
		request: &GenerationRequest,
		count: usize,
		rng: &mut R,
	) -> Vec<String> {
		(0..count).map(|_| self.generate_with(request, rng)).collect()
	}
}

fn strs(fragments: &[String]) -> impl Iterator<Item = &str> {
	fragments.iter().map(String::as_str)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::fragment_table::{
		CreatureFragments, FragmentSet, PersonFragments, PersonSuffixes, PlaceFragments, PlaceSuffixes,
	};
	use crate::model::random::ScriptedSource;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn owned(v: &[&str]) -> Vec<String> {
		v.iter().map(|s| s.to_string()).collect()
	}

	fn small_set() -> FragmentSet {
		FragmentSet {
			prepositions: owned(&["of", "upon"]),
			place: PlaceFragments {
				prefixes: owned(&["kel"]),
				middles: owned(&["a"]),
				suffixes: PlaceSuffixes {
					natural: owned(&["mere"]),
					artificial: owned(&["ton"]),
					generic: owned(&["ia"]),
					continent: owned(&["ica"]),
				},
			},
			person: PersonFragments {
				prefixes: owned(&["al"]),
				middles: owned(&["e"]),
				suffixes: PersonSuffixes {
					masculine: owned(&["ric"]),
					feminine: owned(&["ina"]),
					neutral: owned(&["en"]),
				},
			},
			creature: CreatureFragments {
				prefixes: owned(&["grak"]),
				middles: owned(&["o"]),
				suffixes: owned(&["th"]),
			},
		}
	}

	fn small_generator() -> Generator {
		Generator::with_tables(FragmentTables::try_from(small_set()).unwrap())
	}

	fn no_place_groups() -> SuffixOptions {
		SuffixOptions {
			include_natural: false,
			include_artificial: false,
			include_generic: false,
			include_continent: false,
			..SuffixOptions::default()
		}
	}

	#[test]
	fn place_pool_follows_toggles() {
		let generator = small_generator();
		assert_eq!(generator.suffix_pool(Category::Place, &SuffixOptions::default()), vec!["mere", "ton", "ia"]);

		let options = SuffixOptions { include_natural: false, include_continent: true, ..SuffixOptions::default() };
		assert_eq!(generator.suffix_pool(Category::Place, &options), vec!["ton", "ia", "ica"]);
	}

	#[test]
	fn place_pool_falls_back_when_every_group_is_off() {
		let generator = small_generator();
		assert_eq!(generator.suffix_pool(Category::Place, &no_place_groups()), vec!["mere", "ton", "ia", "ica"]);
	}

	#[test]
	fn all_pool_appends_each_group_once() {
		let generator = small_generator();
		assert_eq!(
			generator.suffix_pool(Category::All, &SuffixOptions::default()),
			vec!["mere", "ton", "ia", "en", "ric", "ina", "th"]
		);
		assert_eq!(generator.suffix_pool(Category::All, &no_place_groups()), vec!["en", "ric", "ina", "th"]);
	}

	#[test]
	fn person_pool_follows_gender() {
		let generator = small_generator();
		let with = |gender| SuffixOptions { gender, ..SuffixOptions::default() };
		assert_eq!(generator.suffix_pool(Category::Person, &with(Gender::Masculine)), vec!["ric"]);
		assert_eq!(generator.suffix_pool(Category::Person, &with(Gender::Feminine)), vec!["ina"]);
		assert_eq!(generator.suffix_pool(Category::Person, &with(Gender::Neutral)), vec!["en"]);
		assert_eq!(generator.suffix_pool(Category::Person, &with(Gender::Any)), vec!["en", "ric", "ina"]);
	}

	#[test]
	fn creature_pool_ignores_toggles() {
		let generator = small_generator();
		assert_eq!(generator.suffix_pool(Category::Creature, &no_place_groups()), vec!["th"]);
	}

	#[test]
	fn empty_gender_group_uses_table_default() {
		let mut set = small_set();
		set.person.suffixes.feminine.clear();
		let generator = Generator::with_tables(FragmentTables::try_from(set).unwrap());

		let request = GenerationRequest {
			category: Category::Person,
			options: SuffixOptions { gender: Gender::Feminine, ..SuffixOptions::default() },
			..GenerationRequest::default()
		};
		assert!(generator.suffix_pool(Category::Person, &request.options).is_empty());
		assert_eq!(generator.generate_with(&request, &mut ScriptedSource::default()), "Alen");
	}

	#[test]
	fn scripted_place_name_with_preposition_and_demonym() {
		let generator = small_generator();
		let request = GenerationRequest {
			category: Category::Place,
			syllables: vec![2],
			word_count: 2,
			demonym: true,
			options: SuffixOptions { include_prepositions: true, ..SuffixOptions::default() },
			..GenerationRequest::default()
		};
		// prefix, suffix for each word, then preposition and its position.
		let mut rng = ScriptedSource::new([0, 1, 0, 2, 1, 0]);
		assert_eq!(generator.generate_with(&request, &mut rng), "Kelton upon Kelian");
		assert_eq!(rng.remaining(), 0);
	}

	#[test]
	fn person_names_ignore_demonym_and_prepositions() {
		let generator = small_generator();
		let request = GenerationRequest {
			category: Category::Person,
			syllables: vec![3],
			word_count: 2,
			hyphenated: true,
			demonym: true,
			options: SuffixOptions {
				include_prepositions: true,
				gender: Gender::Feminine,
				..SuffixOptions::default()
			},
		};
		let mut rng = ScriptedSource::default();
		assert_eq!(generator.generate_with(&request, &mut rng), "Alina-Alina");
	}

	#[test]
	fn zero_words_give_empty_name() {
		let generator = small_generator();
		let request = GenerationRequest { word_count: 0, demonym: false, ..GenerationRequest::default() };
		assert_eq!(generator.generate_with(&request, &mut ScriptedSource::default()), "");
	}

	#[test]
	fn hyphenated_names_use_only_hyphens() {
		let generator = Generator::new().unwrap();
		let request = GenerationRequest {
			category: Category::Place,
			word_count: 3,
			hyphenated: true,
			options: SuffixOptions { include_prepositions: true, ..SuffixOptions::default() },
			..GenerationRequest::default()
		};
		let mut rng = StdRng::seed_from_u64(42);
		for name in generator.generate_batch_with(&request, 200, &mut rng) {
			assert!(!name.contains(' '), "{}", name);
			assert_eq!(name.split('-').count(), 4, "{}", name);
		}
	}

	#[test]
	fn preposition_is_never_first() {
		let generator = Generator::new().unwrap();
		let prepositions = generator.tables().prepositions().to_vec();
		let request = GenerationRequest {
			category: Category::All,
			word_count: 2,
			options: SuffixOptions { include_prepositions: true, ..SuffixOptions::default() },
			..GenerationRequest::default()
		};
		let mut rng = StdRng::seed_from_u64(3);
		for _ in 0..500 {
			let name = generator.generate_with(&request, &mut rng);
			let tokens: Vec<&str> = name.split(' ').collect();
			assert_eq!(tokens.len(), 3, "{}", name);
			assert!(!prepositions.iter().any(|p| p == tokens[0]), "{}", name);
			assert!(prepositions.iter().any(|p| p == tokens[1]), "{}", name);
		}
	}

	#[test]
	fn batch_has_requested_size() {
		let generator = Generator::new().unwrap();
		let names = generator.generate_batch(&GenerationRequest::new(Category::Creature), 25);
		assert_eq!(names.len(), 25);
		assert!(names.iter().all(|n| n.chars().next().is_some_and(char::is_uppercase)));
	}
}
