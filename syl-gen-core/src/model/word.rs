use log::trace;

use super::fragment_table::FragmentTable;
use super::random::RandomSource;
use super::syllables::count_syllables;

/// Builds one capitalized word of roughly `target` syllables.
///
/// # Parameters
/// - `table`: source of prefixes and middles
/// - `target`: syllable budget, clamped to at least 1
/// - `suffixes`: effective suffix pool, must not be empty
///
/// # Behavior
/// - A prefix that already meets the budget is returned alone, even if it
///   overshoots.
/// - The suffix is drawn among those fitting in the remaining budget, or
///   among the whole pool when none fits.
/// - Middles fill whatever budget is left, drawn with replacement.
pub(crate) fn synthesize<S, R>(table: &FragmentTable, target: u32, suffixes: &[S], rng: &mut R) -> String
where
	S: AsRef<str>,
	R: RandomSource + ?Sized,
{
	let target = target.max(1) as usize;

	let prefix = match rng.pick(table.prefixes()) {
		Some(prefix) => prefix.as_str(),
		None => return String::new(),
	};
	let prefix_syllables = count_syllables(prefix);
	if prefix_syllables >= target {
		trace!("prefix '{}' fills {} syllables alone", prefix, target);
		return capitalize(prefix);
	}

	let remaining = target - prefix_syllables;
	let fitting: Vec<&str> = suffixes
		.iter()
		.map(AsRef::as_ref)
		.filter(|suffix| count_syllables(suffix) <= remaining)
		.collect();
	let suffix = if fitting.is_empty() {
		rng.pick(suffixes).map(AsRef::as_ref)
	} else {
		rng.pick(&fitting).copied()
	}
	.unwrap_or_default();

	let middles_needed = target.saturating_sub(prefix_syllables + count_syllables(suffix));

	let mut word = String::from(prefix);
	for _ in 0..middles_needed {
		if let Some(middle) = rng.pick(table.middles()) {
			word.push_str(middle);
		}
	}
	word.push_str(suffix);

	trace!("prefix '{}' + {} middles + suffix '{}' -> '{}'", prefix, middles_needed, suffix, word);
	capitalize(&word)
}

/// Upper-cases the first character only.
pub(crate) fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::category::Category;
	use crate::model::random::ScriptedSource;

	fn table(prefixes: &[&str], middles: &[&str], suffixes: &[&str]) -> FragmentTable {
		let owned = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();
		FragmentTable::new(Category::Place, owned(prefixes), owned(middles), owned(suffixes)).unwrap()
	}

	#[test]
	fn prefix_meeting_budget_is_returned_alone() {
		let table = table(&["kelmar"], &["o"], &["ton"]);
		let mut rng = ScriptedSource::new([0, 0, 0]);
		assert_eq!(synthesize(&table, 1, table.suffixes(), &mut rng), "Kelmar");
		assert_eq!(synthesize(&table, 2, table.suffixes(), &mut rng), "Kelmar");
		assert_eq!(rng.remaining(), 1);
	}

	#[test]
	fn middles_fill_the_remaining_budget() {
		let table = table(&["ar"], &["o", "u"], &["ton", "ia", "chester"]);
		let mut rng = ScriptedSource::new([0, 0, 0, 1]);
		assert_eq!(synthesize(&table, 4, table.suffixes(), &mut rng), "Arouton");
		assert_eq!(rng.remaining(), 0);
	}

	#[test]
	fn suffix_is_drawn_among_fitting_ones() {
		let table = table(&["ar"], &["o"], &["chester", "ton", "polis"]);
		// Only "ton" fits one remaining syllable, so any index selects it.
		let mut rng = ScriptedSource::new([0, 7]);
		assert_eq!(synthesize(&table, 2, table.suffixes(), &mut rng), "Arton");
	}

	#[test]
	fn falls_back_to_whole_pool_when_nothing_fits() {
		let table = table(&["ar"], &["o"], &["chester", "polis"]);
		let mut rng = ScriptedSource::new([0, 1]);
		assert_eq!(synthesize(&table, 2, table.suffixes(), &mut rng), "Arpolis");
	}

	#[test]
	fn override_pool_replaces_table_suffixes() {
		let table = table(&["ar"], &["o"], &["ton"]);
		let mut rng = ScriptedSource::new([0, 0]);
		assert_eq!(synthesize(&table, 2, &["ia"], &mut rng), "Aria");
	}

	#[test]
	fn zero_target_is_clamped_to_one() {
		let table = table(&["ar"], &["o"], &["ton"]);
		let mut rng = ScriptedSource::new([0]);
		assert_eq!(synthesize(&table, 0, table.suffixes(), &mut rng), "Ar");
	}

	#[test]
	fn capitalize_touches_first_character_only() {
		assert_eq!(capitalize("elDor"), "ElDor");
		assert_eq!(capitalize("ë"), "Ë");
		assert_eq!(capitalize(""), "");
	}
}
