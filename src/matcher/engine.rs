//! Match classification and ranking
//!
//! Core algorithm for classifying recipes against the user's ingredient set.
//! Pure over its inputs: recomputed fresh on every search, no caching, no
//! shared mutable state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::ingredients::{parse_ingredient_tokens, UserQuery};
use crate::dataset::Recipe;

/// A recipe the user can only partly cover
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartialMatch {
    pub recipe: Recipe,
    /// Recipe ingredients the user lacks, in deterministic (sorted) order
    pub missing: BTreeSet<String>,
    /// Count of recipe ingredients the user already has; ranks partials
    pub score: usize,
}

/// The classified result of one search
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchReport {
    /// Recipes fully covered by the user's ingredients, in dataset order
    pub exact: Vec<Recipe>,
    /// Overlapping recipes, sorted by score descending (ties keep dataset
    /// order)
    pub partial: Vec<PartialMatch>,
}

impl MatchReport {
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.partial.is_empty()
    }
}

/// Classify every recipe against the user's ingredient set.
///
/// Per recipe, in dataset order:
/// - its ingredient text is normalized into a token set; zero parsed tokens
///   means no match (a blank ingredient field must not count as a vacuous
///   subset of anything)
/// - a recipe set fully contained in the user's set is an exact match
/// - otherwise, any overlap makes a partial match carrying the missing
///   ingredients and the overlap count
///
/// Callers are expected to reject an empty query before calling; an empty
/// `recipes` slice yields an empty report.
pub fn match_recipes(recipes: &[Recipe], query: &UserQuery) -> MatchReport {
    let mut exact = Vec::new();
    let mut partial = Vec::new();

    for recipe in recipes {
        let recipe_set = parse_ingredient_tokens(&recipe.ingredients);
        if recipe_set.is_empty() {
            continue;
        }

        let overlap = recipe_set.intersection(query.tokens()).count();

        if recipe_set.is_subset(query.tokens()) {
            exact.push(recipe.clone());
        } else if overlap > 0 {
            let missing = recipe_set
                .difference(query.tokens())
                .cloned()
                .collect();
            partial.push(PartialMatch {
                recipe: recipe.clone(),
                missing,
                score: overlap,
            });
        }
    }

    // Vec::sort_by is stable, so equal scores keep dataset order
    partial.sort_by(|a, b| b.score.cmp(&a.score));

    MatchReport { exact, partial }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(name: &str, ingredients: &str) -> Recipe {
        Recipe {
            name: name.to_string(),
            ingredients: ingredients.to_string(),
            steps: String::new(),
            cuisine: None,
            meal_type: None,
            prep_time: None,
            cook_time: None,
            total_time: None,
            calories: None,
        }
    }

    fn sample_recipes() -> Vec<Recipe> {
        vec![
            recipe("Pasta", "pasta, tomato, garlic"),
            recipe("Salad", "lettuce, tomato"),
        ]
    }

    #[test]
    fn test_exact_and_partial_classification() {
        let recipes = sample_recipes();
        let query = UserQuery::parse("tomato, pasta, garlic");

        let report = match_recipes(&recipes, &query);

        assert_eq!(report.exact.len(), 1);
        assert_eq!(report.exact[0].name, "Pasta");

        assert_eq!(report.partial.len(), 1);
        let salad = &report.partial[0];
        assert_eq!(salad.recipe.name, "Salad");
        assert_eq!(salad.score, 1);
        assert_eq!(
            salad.missing.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["lettuce"]
        );
    }

    #[test]
    fn test_no_overlap_yields_nothing() {
        let recipes = sample_recipes();
        let query = UserQuery::parse("cheese");

        let report = match_recipes(&recipes, &query);
        assert!(report.is_empty());
    }

    #[test]
    fn test_exact_never_appears_in_partial() {
        let recipes = sample_recipes();
        // Covers Salad fully and overlaps Pasta on tomato only
        let query = UserQuery::parse("lettuce, tomato");

        let report = match_recipes(&recipes, &query);

        assert_eq!(report.exact.len(), 1);
        assert_eq!(report.exact[0].name, "Salad");
        assert!(report.partial.iter().all(|p| p.recipe.name != "Salad"));

        let pasta = &report.partial[0];
        assert_eq!(pasta.recipe.name, "Pasta");
        assert_eq!(pasta.score, 1);
        assert_eq!(pasta.missing.len(), 2);
    }

    #[test]
    fn test_partials_sorted_by_score_descending() {
        let recipes = vec![
            recipe("One", "a, x"),
            recipe("Two", "a, b, x"),
            recipe("Three", "a, b, c, x"),
        ];
        let query = UserQuery::parse("a, b, c");

        let report = match_recipes(&recipes, &query);

        let names: Vec<_> = report.partial.iter().map(|p| p.recipe.name.as_str()).collect();
        assert_eq!(names, vec!["Three", "Two", "One"]);
        let scores: Vec<_> = report.partial.iter().map(|p| p.score).collect();
        assert_eq!(scores, vec![3, 2, 1]);
    }

    #[test]
    fn test_equal_scores_keep_dataset_order() {
        let recipes = vec![
            recipe("First", "a, x"),
            recipe("Second", "a, y"),
            recipe("Third", "a, z"),
        ];
        let query = UserQuery::parse("a");

        let report = match_recipes(&recipes, &query);

        let names: Vec<_> = report.partial.iter().map(|p| p.recipe.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_query_permutation_gives_identical_report() {
        let recipes = sample_recipes();
        let a = match_recipes(&recipes, &UserQuery::parse("tomato, pasta, garlic"));
        let b = match_recipes(&recipes, &UserQuery::parse("garlic, tomato, pasta"));

        let names = |r: &MatchReport| {
            (
                r.exact.iter().map(|x| x.name.clone()).collect::<Vec<_>>(),
                r.partial
                    .iter()
                    .map(|p| (p.recipe.name.clone(), p.missing.clone(), p.score))
                    .collect::<Vec<_>>(),
            )
        };
        assert_eq!(names(&a), names(&b));
    }

    #[test]
    fn test_blank_ingredient_field_never_matches() {
        let recipes = vec![recipe("Ghost", "  ,  "), recipe("Empty", "")];
        let query = UserQuery::parse("tomato");

        let report = match_recipes(&recipes, &query);
        assert!(report.is_empty());
    }

    #[test]
    fn test_empty_dataset_yields_empty_report() {
        let report = match_recipes(&[], &UserQuery::parse("tomato"));
        assert!(report.is_empty());
    }

    #[test]
    fn test_user_extras_still_exact() {
        // The user having more ingredients than the recipe needs is still exact
        let recipes = vec![recipe("Toast", "bread, butter")];
        let query = UserQuery::parse("bread, butter, jam, eggs");

        let report = match_recipes(&recipes, &query);
        assert_eq!(report.exact.len(), 1);
        assert!(report.partial.is_empty());
    }
}
