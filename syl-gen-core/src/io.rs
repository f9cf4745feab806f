use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::io;

/// Reads a text file into a single `String`.
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}

/// Trims every fragment and drops the blank ones.
///
/// An empty fragment would still count as one syllable.
pub(crate) fn clean_fragments(fragments: Vec<String>) -> Vec<String> {
	fragments
		.into_iter()
		.map(|f| f.trim().to_owned())
		.filter(|f| !f.is_empty())
		.collect()
}
