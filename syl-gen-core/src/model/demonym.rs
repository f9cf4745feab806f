/// Turns a place name into the name of its inhabitants.
///
/// Only the last one or two characters are inspected (case-insensitively);
/// the rest of the name keeps its casing.
///
/// | ending | rule | example |
/// |---|---|---|
/// | `ia` | append `n` | Narnia → Narnian |
/// | `a` | append `n` | Florenta → Florentan |
/// | `e` | drop it, append `an` | Chile → Chilan |
/// | `y` | drop it, append `ian` | Italy → Italian |
/// | `o` | append `an` | Toronto → Torontoan |
/// | `i` | append `an` | Mali → Malian |
/// | other | append `ian` | Brazil → Brazilian |
pub fn to_demonym(name: &str) -> String {
	let mut tail = name.chars().rev().flat_map(|c| c.to_lowercase());
	let last = tail.next();
	let before_last = tail.next();

	match (before_last, last) {
		(Some('i'), Some('a')) => format!("{}n", name),
		(_, Some('a')) => format!("{}n", name),
		(_, Some('e')) => format!("{}an", drop_last(name)),
		(_, Some('y')) => format!("{}ian", drop_last(name)),
		(_, Some('o')) | (_, Some('i')) => format!("{}an", name),
		_ => format!("{}ian", name),
	}
}

fn drop_last(name: &str) -> &str {
	match name.char_indices().next_back() {
		Some((idx, _)) => &name[..idx],
		None => name,
	}
}
