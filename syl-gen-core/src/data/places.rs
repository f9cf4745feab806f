pub(super) static PREFIXES: &[&str] = &[
	"Ar", "Bel", "Cal", "Dor", "El", "Fal", "Gal", "Har", "Is", "Kar", "Lor", "Mor",
	"Nar", "Or", "Pel", "Quel", "Ros", "Sar", "Tal", "Ul", "Val", "Wes", "Zan", "Ash",
	"Bran", "Cor", "Dun", "Eld", "Glen", "Hal", "Kel", "Lyn", "Mar", "Nor", "Ost", "Riv",
	"Thorn", "Vel", "Wyn", "Flor", "Alder", "Raven", "Silver", "Amber", "Winter", "Ember",
];

pub(super) static MIDDLES: &[&str] = &[
	"a", "an", "ar", "el", "en", "i", "is", "o", "or", "u", "ath", "ev", "on", "ir",
	"ul", "al", "ad", "om", "ith", "un",
];

/// Landscape features.
pub(super) static NATURAL_SUFFIXES: &[&str] = &[
	"wood", "vale", "moor", "fell", "mere", "brook", "marsh", "ridge", "dale", "glen",
	"holm", "wald", "fjord", "peak", "shore", "field", "water", "hollow", "crag", "wold",
];

/// Settlements and built structures.
pub(super) static ARTIFICIAL_SUFFIXES: &[&str] = &[
	"ton", "burg", "ford", "gate", "haven", "port", "stead", "wick", "bury", "keep",
	"hold", "hall", "crest", "chester", "polis", "by", "thorpe", "mouth", "bridge", "watch",
];

pub(super) static GENERIC_SUFFIXES: &[&str] = &[
	"ia", "a", "or", "is", "en", "ar", "eth", "ora", "ane", "ir", "os", "um", "ith",
	"ara", "ion", "ea", "and", "ence",
];

/// Continent-scale names, off by default.
pub(super) static CONTINENT_SUFFIXES: &[&str] = &[
	"ica", "asia", "opa", "ania", "eria", "udia", "antis", "ura", "oros", "essia",
];
