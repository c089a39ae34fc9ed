//! Command-line surface for Recipe Finder
//!
//! The presentation layer: parses arguments, validates user input before the
//! core is invoked, and renders match reports and favorites as text.

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::config::Config;
use crate::dataset::{Dataset, Recipe};
use crate::error::{Error, Result};
use crate::favorites::FavoritesStore;
use crate::matcher::{match_recipes, MatchReport, UserQuery};

#[derive(Debug, Parser)]
#[command(name = "recipefinder", version, about = "Find recipes by the ingredients you have")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search recipes by comma-separated ingredients
    Search {
        /// Ingredients you have, e.g. "tomato, pasta, garlic"
        ingredients: String,
    },
    /// Print one random recipe
    Surprise,
    /// Manage saved favorite recipes
    #[command(subcommand)]
    Favorites(FavoritesCommand),
}

#[derive(Debug, Subcommand)]
pub enum FavoritesCommand {
    /// Save a recipe name to the favorites list
    Add {
        /// Recipe name to save
        name: String,
    },
    /// Show all saved favorites
    List,
}

/// Dispatch a parsed command against the loaded dataset
pub fn run(command: Command, config: &Config, dataset: &Dataset) -> Result<()> {
    match command {
        Command::Search { ingredients } => search(&ingredients, dataset),
        Command::Surprise => surprise(dataset),
        Command::Favorites(cmd) => favorites(cmd, config),
    }
}

fn search(input: &str, dataset: &Dataset) -> Result<()> {
    let query = UserQuery::parse(input);
    // The matcher does not guard against an empty query; reject it here
    if query.is_empty() {
        return Err(Error::EmptyQuery);
    }

    debug!("Searching {} recipes for {} ingredients", dataset.len(), query.tokens().len());
    let report = match_recipes(dataset.recipes(), &query);
    render_report(&report);
    Ok(())
}

fn surprise(dataset: &Dataset) -> Result<()> {
    match dataset.random_recipe() {
        Some(recipe) => {
            println!("Surprise Recipe: {}", recipe.name);
            println!();
            println!("Ingredients: {}", recipe.ingredients);
            println!();
            println!("Steps:");
            println!("{}", recipe.steps);
        }
        None => println!("No recipes found!"),
    }
    Ok(())
}

fn favorites(command: FavoritesCommand, config: &Config) -> Result<()> {
    let store = FavoritesStore::new(&config.favorites_path);

    match command {
        FavoritesCommand::Add { name } => {
            let name = name.trim();
            if name.is_empty() {
                return Err(Error::EmptyFavoriteName);
            }
            store.save(name)?;
            println!("Recipe added to favorites!");
        }
        FavoritesCommand::List => {
            let favorites = store.load();
            if favorites.is_empty() {
                println!("You have no favorite recipes yet.");
            } else {
                println!("Your Favorites:");
                for name in favorites {
                    println!("{}", name);
                }
            }
        }
    }

    Ok(())
}

fn render_report(report: &MatchReport) {
    if !report.exact.is_empty() {
        println!("Exact Match Recipes");
        println!();
        for recipe in &report.exact {
            render_exact(recipe);
        }
    }

    if !report.partial.is_empty() {
        println!();
        println!("Partial Matches (Missing Ingredients Shown)");
        println!();
        for partial in &report.partial {
            println!("{}", partial.recipe.name);
            println!("Have: {} items", partial.score);
            println!(
                "Missing: {}",
                partial.missing.iter().cloned().collect::<Vec<_>>().join(", ")
            );
            println!("Steps: {}", partial.recipe.steps);
            println!("-------------------------------------------");
            println!();
        }
    }

    if report.is_empty() {
        println!("No recipe matches your ingredients!");
    }
}

fn render_exact(recipe: &Recipe) {
    println!("{}", recipe.name);
    println!("Ingredients: {}", recipe.ingredients);
    println!("Prep Time: {}", recipe.prep_time.as_deref().unwrap_or("N/A"));
    println!("Cook Time: {}", recipe.cook_time.as_deref().unwrap_or("N/A"));
    println!("Steps: {}", recipe.steps);
    println!("-------------------------------------------");
    println!();
}
