/// Characters treated as vowels when counting syllables.
const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Characters that block the silent-ending strip (`[^laeiouy]`).
const KEEP_BEFORE_E: &[char] = &['l', 'a', 'e', 'i', 'o', 'u', 'y'];

/// Estimates the number of syllables in a word fragment.
///
/// This is a heuristic, not a phonetic model:
/// 1. Lower-case the word.
/// 2. Strip a trailing `[^laeiouy]es`, else a trailing `ed` or `[^laeiouy]e`.
/// 3. Strip a single leading `y`.
/// 4. Count vowel groups, where each run of one or two vowels is one syllable
///    (a run of three counts as two, and so on).
///
/// Never returns 0: a fragment without vowels still counts as one syllable.
///
/// Examples: `make` → 1, `table` → 2, `boxes` → 1, `beautiful` → 4.
pub fn count_syllables(word: &str) -> usize {
	let lower: Vec<char> = word.chars().flat_map(|c| c.to_lowercase()).collect();
	let mut chars: &[char] = &lower;

	chars = strip_silent_ending(chars);
	if chars.first() == Some(&'y') {
		chars = &chars[1..];
	}

	let mut count: usize = 0;
	let mut run: usize = 0;
	for c in chars {
		if VOWELS.contains(c) {
			run += 1;
		} else {
			count += run.div_ceil(2);
			run = 0;
		}
	}
	count += run.div_ceil(2);

	count.max(1)
}

/// Removes the inflectional or silent-e ending, if any.
fn strip_silent_ending(chars: &[char]) -> &[char] {
	let len = chars.len();
	let strips_before = |idx: usize| !KEEP_BEFORE_E.contains(&chars[idx]);

	if len >= 3 && chars[len - 2..] == ['e', 's'] && strips_before(len - 3) {
		return &chars[..len - 3];
	}
	if len >= 2 && chars[len - 2..] == ['e', 'd'] {
		return &chars[..len - 2];
	}
	if len >= 2 && chars[len - 1] == 'e' && strips_before(len - 2) {
		return &chars[..len - 2];
	}
	chars
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn counts_plain_vowel_groups() {
		assert_eq!(count_syllables("hello"), 2);
		assert_eq!(count_syllables("haven"), 2);
		assert_eq!(count_syllables("chester"), 2);
		assert_eq!(count_syllables("ar"), 1);
	}

	#[test]
	fn strips_silent_e_after_consonant() {
		assert_eq!(count_syllables("make"), 1);
		assert_eq!(count_syllables("gate"), 1);
		assert_eq!(count_syllables("Stone"), 1);
	}

	#[test]
	fn keeps_e_after_l_or_vowel() {
		assert_eq!(count_syllables("table"), 2);
		assert_eq!(count_syllables("vale"), 2);
		assert_eq!(count_syllables("ee"), 1);
	}

	#[test]
	fn strips_es_and_ed_endings() {
		assert_eq!(count_syllables("boxes"), 1);
		assert_eq!(count_syllables("wanted"), 1);
		assert_eq!(count_syllables("tales"), 2);
	}

	#[test]
	fn long_vowel_runs_split_in_pairs() {
		assert_eq!(count_syllables("beautiful"), 4);
		assert_eq!(count_syllables("queue"), 2);
		assert_eq!(count_syllables("aaa"), 2);
		assert_eq!(count_syllables("kaaaaar"), 3);
	}

	#[test]
	fn leading_y_is_not_a_vowel() {
		assert_eq!(count_syllables("yay"), 1);
		assert_eq!(count_syllables("yll"), 1);
	}

	#[test]
	fn never_returns_zero() {
		assert_eq!(count_syllables("th"), 1);
		assert_eq!(count_syllables("ed"), 1);
		assert_eq!(count_syllables(""), 1);
	}
}
