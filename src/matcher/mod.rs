//! Recipe Matching Module
//!
//! Classifies recipes against the user's ingredient set and ranks the results.
//!
//! ## Architecture
//!
//! 1. **Ingredients** - Normalize free-text ingredient lists into token sets
//! 2. **Engine** - Classify each recipe as exact, partial, or no match and
//!    rank partials by overlap
//!
//! ## Algorithm Overview
//!
//! A recipe whose entire ingredient set is covered by the user's set is an
//! exact match (kept in dataset order). A recipe sharing at least one
//! ingredient but requiring more is a partial match, reported with its
//! missing ingredients and ranked by how many ingredients the user already
//! has (stable sort, descending). Everything else is dropped.

pub mod engine;
pub mod ingredients;

// Re-export the types that are actually used externally
pub use engine::{match_recipes, MatchReport, PartialMatch};
pub use ingredients::UserQuery;
