/// Joining words for multi-word place names ("Kel of Dravon").
///
/// Single tokens only, so hyphenated names never contain a space.
pub(super) static PLACE_PREPOSITIONS: &[&str] = &[
	"of", "upon", "on", "by", "under", "beyond", "near", "in", "over", "across",
];
