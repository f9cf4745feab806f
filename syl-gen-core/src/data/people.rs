pub(super) static PREFIXES: &[&str] = &[
	"Al", "Ber", "Cae", "Dar", "Ed", "Fen", "Gar", "Hal", "Is", "Jor", "Kai", "Lu",
	"Mae", "Nol", "Os", "Per", "Rho", "Sel", "Tor", "Ul", "Vae", "Wil", "Yor", "Zel",
	"Ari", "Bren", "Cor", "Dae", "Eli", "Mir", "Ser", "Thal", "Ama", "Gwen", "Ro", "Tam",
];

pub(super) static MIDDLES: &[&str] = &[
	"a", "e", "i", "o", "an", "el", "en", "ar", "or", "is", "ad", "iv", "ol", "ur", "ev",
	"ri", "la", "na",
];

pub(super) static MASCULINE_SUFFIXES: &[&str] = &[
	"ric", "don", "win", "mar", "ron", "vin", "bert", "mund", "ion", "gar", "thor",
	"dan", "ius", "os", "rik", "wald", "ard", "mir",
];

pub(super) static FEMININE_SUFFIXES: &[&str] = &[
	"a", "ia", "ella", "ina", "wyn", "lyn", "ara", "elle", "iss", "ora", "eth", "anna",
	"ys", "ine", "essa", "ela",
];

pub(super) static NEUTRAL_SUFFIXES: &[&str] = &[
	"en", "an", "is", "el", "ar", "in", "ee", "ey", "yn", "orn", "ash", "ai", "ae",
	"ren", "sa",
];
