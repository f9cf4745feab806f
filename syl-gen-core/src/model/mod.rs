//! Top-level module for the syllable name generator.
//!
//! This module provides:
//! - Category and gender selectors (`Category`, `Gender`)
//! - Fragment pools per category (`FragmentTables`)
//! - Syllable estimation, word synthesis and demonyms
//! - A high-level composition interface (`Generator`)

/// Category and gender enumerations.
pub mod category;

/// Suffix rewriting from a place name to its inhabitants' name.
pub mod demonym;

/// Immutable fragment pools and their validation.
///
/// Includes the computed `all` table and the suffix subgroups.
pub mod fragment_table;

/// High-level interface composing multi-word names.
///
/// Resolves syllable targets and suffix pools, then delegates each word
/// to the synthesizer.
pub mod generator;

/// Random source capability.
pub mod random;

/// Generation request and option toggles.
pub mod request;

/// Heuristic syllable counter.
pub mod syllables;

/// Single word synthesis under a syllable budget.
///
/// Internal, driven by `Generator`.
mod word;
