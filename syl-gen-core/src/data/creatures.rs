pub(super) static PREFIXES: &[&str] = &[
	"Grak", "Zor", "Vex", "Mor", "Skar", "Thra", "Gol", "Kry", "Nyx", "Bal", "Drak",
	"Fen", "Gri", "Hy", "Ky", "Lur", "Myr", "Quo", "Rax", "Sly", "Tur", "Vor", "Wyrm",
	"Xan", "Zyl", "Bor", "Chim", "Glub", "Snar", "Ur",
];

pub(super) static MIDDLES: &[&str] = &[
	"a", "o", "u", "ra", "ri", "ga", "tho", "za", "ul", "ek", "ix", "om", "ab", "yr",
];

pub(super) static SUFFIXES: &[&str] = &[
	"dor", "rax", "th", "zor", "mid", "ling", "wurm", "gon", "pod", "ix", "oth", "us",
	"ak", "ra", "id", "ent", "ope", "maw", "fang", "tor", "ugg", "isk",
];
