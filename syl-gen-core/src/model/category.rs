use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which family of fragments a name is built from.
///
/// `All` is a pseudo-category whose pools are the union of the other three.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
	#[default]
	Place,
	Person,
	Creature,
	All,
}

impl Category {
	/// Every category, in display order.
	pub const ALL: [Category; 4] = [Category::Place, Category::Person, Category::Creature, Category::All];

	pub fn as_str(&self) -> &'static str {
		match self {
			Category::Place => "place",
			Category::Person => "person",
			Category::Creature => "creature",
			Category::All => "all",
		}
	}

	/// Whether place-only features (prepositions, demonyms, place toggles) apply.
	pub fn is_place_like(&self) -> bool {
		matches!(self, Category::Place | Category::All)
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Category {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"place" => Ok(Category::Place),
			"person" => Ok(Category::Person),
			"creature" => Ok(Category::Creature),
			"all" => Ok(Category::All),
			other => Err(format!("Unknown category '{}'", other)),
		}
	}
}

/// Suffix selection for person names.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
	Masculine,
	Feminine,
	Neutral,
	#[default]
	Any,
}

impl FromStr for Gender {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"masculine" => Ok(Gender::Masculine),
			"feminine" => Ok(Gender::Feminine),
			"neutral" => Ok(Gender::Neutral),
			"any" => Ok(Gender::Any),
			other => Err(format!("Unknown gender '{}'", other)),
		}
	}
}
