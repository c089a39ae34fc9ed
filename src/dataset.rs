//! Recipe dataset loading
//!
//! Loads the tabular recipe dataset from CSV into an in-memory, immutable
//! collection. The dataset is read once at startup and passed by reference to
//! the matcher; a missing or malformed file degrades to an empty dataset so
//! searching still works (and returns no results) instead of failing.

use crate::error::{Error, Result};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

/// A single recipe record, as stored in the dataset.
///
/// `ingredients` keeps the raw comma-separated text for display; the matcher
/// derives normalized token sets from it on each search. Optional metadata
/// columns are carried through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "Recipe Name")]
    pub name: String,
    #[serde(rename = "Ingredients", default)]
    pub ingredients: String,
    #[serde(rename = "Steps", default)]
    pub steps: String,
    #[serde(rename = "Cuisine", default)]
    pub cuisine: Option<String>,
    #[serde(rename = "Meal Type", default)]
    pub meal_type: Option<String>,
    #[serde(rename = "Prep Time", default)]
    pub prep_time: Option<String>,
    #[serde(rename = "Cook Time", default)]
    pub cook_time: Option<String>,
    #[serde(rename = "Total Time", default)]
    pub total_time: Option<String>,
    #[serde(rename = "Calories", default)]
    pub calories: Option<String>,
}

/// The in-memory recipe collection, immutable for the session
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    recipes: Vec<Recipe>,
}

impl Dataset {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Load the dataset from a CSV file, failing on unreadable or malformed
    /// input
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let reader = csv::Reader::from_path(path).map_err(|e| {
            Error::dataset_with_source(
                format!("failed to open recipe dataset at {}", path.display()),
                e,
            )
        })?;
        let dataset = Self::from_csv_reader(reader)?;
        info!(
            "Loaded {} recipes from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Load the dataset, substituting an empty collection on any failure.
    ///
    /// This is the startup path: the tool stays usable without a dataset,
    /// every search just comes back empty.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::from_csv_path(path) {
            Ok(dataset) => dataset,
            Err(err) => {
                if path.exists() {
                    warn!(
                        code = err.error_code(),
                        "Recipe dataset at {} could not be read, continuing with an empty dataset: {}",
                        path.display(),
                        err
                    );
                } else {
                    debug!(
                        "No recipe dataset at {}, continuing with an empty dataset",
                        path.display()
                    );
                }
                Self::default()
            }
        }
    }

    fn from_csv_reader<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Self> {
        let mut recipes = Vec::new();
        for row in reader.deserialize() {
            let recipe: Recipe =
                row.map_err(|e| Error::dataset_with_source("malformed recipe row", e))?;
            recipes.push(recipe);
        }
        Ok(Self { recipes })
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Pick one uniformly random recipe; `None` on an empty dataset
    pub fn random_recipe(&self) -> Option<&Recipe> {
        self.recipes.choose(&mut rand::thread_rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
Recipe Name,Ingredients,Steps,Cuisine,Meal Type,Prep Time,Cook Time,Total Time,Calories
Pasta,\"pasta, tomato, garlic\",Boil and mix,Italian,Dinner,10 min,20 min,30 min,520
Salad,\"lettuce, tomato\",Chop and toss,,,5 min,,5 min,120
";

    fn sample_dataset() -> Dataset {
        let reader = csv::Reader::from_reader(SAMPLE_CSV.as_bytes());
        Dataset::from_csv_reader(reader).unwrap()
    }

    #[test]
    fn test_parses_all_columns() {
        let dataset = sample_dataset();
        assert_eq!(dataset.len(), 2);

        let pasta = &dataset.recipes()[0];
        assert_eq!(pasta.name, "Pasta");
        assert_eq!(pasta.ingredients, "pasta, tomato, garlic");
        assert_eq!(pasta.cuisine.as_deref(), Some("Italian"));
        assert_eq!(pasta.prep_time.as_deref(), Some("10 min"));
    }

    #[test]
    fn test_blank_optional_columns_are_absent() {
        let dataset = sample_dataset();
        let salad = &dataset.recipes()[1];
        assert_eq!(salad.cuisine, None);
        assert_eq!(salad.cook_time, None);
        assert_eq!(salad.prep_time.as_deref(), Some("5 min"));
    }

    #[test]
    fn test_load_or_empty_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = Dataset::load_or_empty(&dir.path().join("nope.csv"));
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_load_or_empty_garbage_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.csv");
        std::fs::write(&path, "Recipe Name,Ingredients\nPasta,tomato,extra,fields\n").unwrap();
        let dataset = Dataset::load_or_empty(&path);
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_random_recipe_empty_and_nonempty() {
        assert!(Dataset::default().random_recipe().is_none());

        let dataset = sample_dataset();
        let picked = dataset.random_recipe().unwrap();
        assert!(dataset.recipes().contains(picked));
    }
}
