//! Curated fragment lists shipped with the crate.
//!
//! Fragments are plain ASCII, lower-case except for prefixes, and are
//! concatenated as-is: the generator never inserts separators inside a word.

use crate::model::fragment_table::{
	CreatureFragments, FragmentSet, PersonFragments, PersonSuffixes, PlaceFragments, PlaceSuffixes,
};

mod creatures;
mod people;
mod places;
mod prepositions;

fn owned(fragments: &[&str]) -> Vec<String> {
	fragments.iter().map(|f| (*f).to_owned()).collect()
}

/// Returns the builtin fragment lists, not yet validated.
pub(crate) fn builtin_set() -> FragmentSet {
	FragmentSet {
		prepositions: owned(prepositions::PLACE_PREPOSITIONS),
		place: PlaceFragments {
			prefixes: owned(places::PREFIXES),
			middles: owned(places::MIDDLES),
			suffixes: PlaceSuffixes {
				natural: owned(places::NATURAL_SUFFIXES),
				artificial: owned(places::ARTIFICIAL_SUFFIXES),
				generic: owned(places::GENERIC_SUFFIXES),
				continent: owned(places::CONTINENT_SUFFIXES),
			},
		},
		person: PersonFragments {
			prefixes: owned(people::PREFIXES),
			middles: owned(people::MIDDLES),
			suffixes: PersonSuffixes {
				masculine: owned(people::MASCULINE_SUFFIXES),
				feminine: owned(people::FEMININE_SUFFIXES),
				neutral: owned(people::NEUTRAL_SUFFIXES),
			},
		},
		creature: CreatureFragments {
			prefixes: owned(creatures::PREFIXES),
			middles: owned(creatures::MIDDLES),
			suffixes: owned(creatures::SUFFIXES),
		},
	}
}
