use thiserror::Error;

use crate::model::category::Category;

/// Errors raised while building fragment tables.
///
/// Generation itself never fails; every invariant on the candidate pools is
/// checked here, once, when the tables are constructed.
#[derive(Debug, Error)]
pub enum FragmentError {
	/// A category ended up with no candidates for one of its pools.
	#[error("{category} fragment table has an empty {pool} pool")]
	EmptyPool {
		category: Category,
		pool: &'static str,
	},

	/// Prepositions are needed for multi-word place names.
	#[error("preposition list is empty")]
	NoPrepositions,

	#[error("failed to read fragment file: {0}")]
	Io(#[from] std::io::Error),

	#[error("failed to parse fragment file: {0}")]
	Parse(#[from] toml::de::Error),
}
