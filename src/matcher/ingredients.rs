//! Ingredient token normalization
//!
//! Turns free-form comma-separated ingredient text into normalized token
//! sets: split on commas, trim whitespace, lowercase. Tokens that are empty
//! after trimming are dropped, so `"a,,b"` or a blank field yields only real
//! ingredients.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Parse comma-separated ingredient text into a normalized token set.
///
/// Duplicates collapse; a blank or unparseable field produces an empty set.
pub fn parse_ingredient_tokens(text: &str) -> BTreeSet<String> {
    text.split(',')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

/// The user's ingredient set, derived from free-text input.
///
/// Order-independent: any permutation of the same ingredients builds an equal
/// query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserQuery {
    tokens: BTreeSet<String>,
}

impl UserQuery {
    /// Build a query from raw comma-separated input
    pub fn parse(input: &str) -> Self {
        Self {
            tokens: parse_ingredient_tokens(input),
        }
    }

    /// Build a query from individual ingredient strings
    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tokens: items
                .into_iter()
                .flat_map(|item| parse_ingredient_tokens(item.as_ref()))
                .collect(),
        }
    }

    pub fn tokens(&self) -> &BTreeSet<String> {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
