use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data;
use crate::error::FragmentError;
use crate::io::{clean_fragments, read_file};
use super::category::Category;

/// Fragment pools of one category.
///
/// # Invariants
/// - `prefixes`, `middles` and `suffixes` are never empty
/// - The roles never mix: a suffix is never picked as a prefix
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FragmentTable {
	prefixes: Vec<String>,
	middles: Vec<String>,
	suffixes: Vec<String>,
}

impl FragmentTable {
	/// Creates a table, rejecting any empty pool.
	///
	/// # Errors
	/// Returns `FragmentError::EmptyPool` naming the first empty pool.
	pub fn new(
		category: Category,
		prefixes: Vec<String>,
		middles: Vec<String>,
		suffixes: Vec<String>,
	) -> Result<Self, FragmentError> {
		for (pool, fragments) in [("prefix", &prefixes), ("middle", &middles), ("suffix", &suffixes)] {
			if fragments.is_empty() {
				return Err(FragmentError::EmptyPool { category, pool });
			}
		}
		Ok(Self { prefixes, middles, suffixes })
	}

	pub fn prefixes(&self) -> &[String] {
		&self.prefixes
	}

	pub fn middles(&self) -> &[String] {
		&self.middles
	}

	/// Default suffix pool, used when no override is given.
	pub fn suffixes(&self) -> &[String] {
		&self.suffixes
	}
}

/// Place suffix subgroups.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PlaceSuffixes {
	pub natural: Vec<String>,
	pub artificial: Vec<String>,
	pub generic: Vec<String>,
	pub continent: Vec<String>,
}

impl PlaceSuffixes {
	/// All place suffixes, in subgroup order.
	pub fn concat(&self) -> Vec<String> {
		[&self.natural, &self.artificial, &self.generic, &self.continent]
			.into_iter()
			.flatten()
			.cloned()
			.collect()
	}

	fn clean(self) -> Self {
		Self {
			natural: clean_fragments(self.natural),
			artificial: clean_fragments(self.artificial),
			generic: clean_fragments(self.generic),
			continent: clean_fragments(self.continent),
		}
	}
}

/// Person suffix subgroups.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PersonSuffixes {
	pub masculine: Vec<String>,
	pub feminine: Vec<String>,
	pub neutral: Vec<String>,
}

impl PersonSuffixes {
	fn clean(self) -> Self {
		Self {
			masculine: clean_fragments(self.masculine),
			feminine: clean_fragments(self.feminine),
			neutral: clean_fragments(self.neutral),
		}
	}
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PlaceFragments {
	pub prefixes: Vec<String>,
	pub middles: Vec<String>,
	pub suffixes: PlaceSuffixes,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PersonFragments {
	pub prefixes: Vec<String>,
	pub middles: Vec<String>,
	pub suffixes: PersonSuffixes,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CreatureFragments {
	pub prefixes: Vec<String>,
	pub middles: Vec<String>,
	pub suffixes: Vec<String>,
}

/// Raw, unvalidated fragment lists as written in a fragment file.
///
/// Convert with `FragmentTables::try_from`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FragmentSet {
	pub prepositions: Vec<String>,
	pub place: PlaceFragments,
	pub person: PersonFragments,
	pub creature: CreatureFragments,
}

/// Every fragment pool the generator draws from.
///
/// Read-only once built, so a single instance can be shared freely.
///
/// # Responsibilities
/// - Hold one validated `FragmentTable` per category
/// - Build the `all` table by concatenating the three concrete tables
/// - Keep the suffix subgroups used by option toggles
#[derive(Clone, Debug)]
pub struct FragmentTables {
	place: FragmentTable,
	person: FragmentTable,
	creature: FragmentTable,
	all: FragmentTable,
	place_suffixes: PlaceSuffixes,
	person_suffixes: PersonSuffixes,
	creature_suffixes: Vec<String>,
	prepositions: Vec<String>,
}

impl FragmentTables {
	/// Builds the curated tables shipped with the crate.
	///
	/// # Errors
	/// Only if the builtin data is broken; callers should fail at startup.
	pub fn builtin() -> Result<Self, FragmentError> {
		Self::try_from(data::builtin_set())
	}

	/// Loads tables from a TOML fragment file.
	pub fn from_file<P: AsRef<Path>>(filepath: P) -> Result<Self, FragmentError> {
		let contents = read_file(&filepath)?;
		Self::from_toml_str(&contents)
	}

	pub fn from_toml_str(contents: &str) -> Result<Self, FragmentError> {
		let set: FragmentSet = toml::from_str(contents)?;
		Self::try_from(set)
	}

	/// Returns the table used as the default fragment source for `category`.
	pub fn table(&self, category: Category) -> &FragmentTable {
		match category {
			Category::Place => &self.place,
			Category::Person => &self.person,
			Category::Creature => &self.creature,
			Category::All => &self.all,
		}
	}

	pub fn place_suffixes(&self) -> &PlaceSuffixes {
		&self.place_suffixes
	}

	pub fn person_suffixes(&self) -> &PersonSuffixes {
		&self.person_suffixes
	}

	pub fn creature_suffixes(&self) -> &[String] {
		&self.creature_suffixes
	}

	pub fn prepositions(&self) -> &[String] {
		&self.prepositions
	}
}

impl TryFrom<FragmentSet> for FragmentTables {
	type Error = FragmentError;

	fn try_from(set: FragmentSet) -> Result<Self, Self::Error> {
		let prepositions = clean_fragments(set.prepositions);
		if prepositions.is_empty() {
			return Err(FragmentError::NoPrepositions);
		}

		let place_suffixes = set.place.suffixes.clean();
		let person_suffixes = set.person.suffixes.clean();
		let creature_suffixes = clean_fragments(set.creature.suffixes);

		let place = FragmentTable::new(
			Category::Place,
			clean_fragments(set.place.prefixes),
			clean_fragments(set.place.middles),
			place_suffixes.concat(),
		)?;
		let person = FragmentTable::new(
			Category::Person,
			clean_fragments(set.person.prefixes),
			clean_fragments(set.person.middles),
			person_suffixes.neutral.clone(),
		)?;
		let creature = FragmentTable::new(
			Category::Creature,
			clean_fragments(set.creature.prefixes),
			clean_fragments(set.creature.middles),
			creature_suffixes.clone(),
		)?;

		let concat = |pick: fn(&FragmentTable) -> &[String]| -> Vec<String> {
			[&place, &person, &creature].into_iter().flat_map(pick).cloned().collect()
		};
		let all = FragmentTable::new(
			Category::All,
			concat(FragmentTable::prefixes),
			concat(FragmentTable::middles),
			concat(FragmentTable::suffixes),
		)?;

		Ok(Self { place, person, creature, all, place_suffixes, person_suffixes, creature_suffixes, prepositions })
	}
}
