//! Syllable-based procedural name generation library.
//!
//! This crate provides a fragment composition name generator including:
//! - Curated prefix / middle / suffix tables for places, people and creatures
//! - A heuristic syllable estimator used to fit fragments to a syllable budget
//! - Multi-word composition with hyphens, prepositions and demonyms
//! - An injectable random source so generation can be made deterministic
//!
//! The high-level entry point is [`model::generator::Generator`].

/// Fragment tables, word synthesis and name composition.
pub mod model;

/// Builtin fragment data.
///
/// Not exposed, reachable through `FragmentTables::builtin`.
pub(crate) mod data;

/// Construction errors.
pub mod error;

/// I/O utilities (fragment file loading).
///
/// Not exposed
pub(crate) mod io;

pub use error::FragmentError;
pub use model::category::{Category, Gender};
pub use model::demonym::to_demonym;
pub use model::fragment_table::{FragmentSet, FragmentTable, FragmentTables};
pub use model::generator::Generator;
pub use model::random::{RandomSource, ScriptedSource};
pub use model::request::{GenerationRequest, SuffixOptions};
pub use model::syllables::count_syllables;
