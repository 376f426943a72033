use crate::cli::prompt::{choose_ingredient, confirm, read_choice, read_line};
use crate::corpus::cache::{self, MergeReport};
use crate::graph::{MostConnected, Pairing};
use crate::spoonacular::{SpoonacularClient, Substitutes};
use crate::{Error, RecipeIndex, Result, Settings};
use std::io::{BufRead, Write};
use tracing::info;

const MENU_OPTIONS: [&str; 4] = [
    "Recommendations for ingredient pairings",
    "Ingredient substitutes",
    "Find out what the most connected ingredient is",
    "Ingredient price and aisle information",
];

/// Fetch one batch of random recipes and merge it into the cache file
pub async fn fetch(settings: &Settings) -> Result<MergeReport> {
    let client = SpoonacularClient::new(settings.spoonacular.clone())?;
    let fetched = client.fetch_random_recipes().await?;

    let path = &settings.cache.path;
    let mut recipes = cache::load_cache(path)?;
    let report = cache::merge_recipes(&mut recipes, fetched, settings.cache.max_recipes);
    cache::save_cache(path, &recipes)?;

    info!(
        "Cache {}: {} added, {} already cached, {} without id, {} over capacity",
        path.display(),
        report.added,
        report.duplicates,
        report.without_id,
        report.capped
    );

    println!("✓ Cached {} recipes in {}", recipes.len(), path.display());
    println!("  New: {}", report.added);
    if report.duplicates > 0 {
        println!("  Already cached: {}", report.duplicates);
    }
    if report.capped > 0 {
        println!(
            "  Cache is full ({} recipes), {} recipes were not added",
            settings.cache.max_recipes, report.capped
        );
    }

    Ok(report)
}

/// Resolve an ingredient and print its strongest pairings
pub fn pairings<R: BufRead, W: Write>(
    index: &RecipeIndex,
    query: &str,
    top_n: usize,
    choice: Option<usize>,
    input: &mut R,
    output: &mut W,
) -> Result<Vec<Pairing>> {
    if top_n == 0 {
        return Err(Error::Validation(
            "Number of pairings must be at least 1".to_string(),
        ));
    }

    let resolution = index.catalog.resolve(query);
    let Some(entry) = choose_ingredient(&resolution, query, choice, input, output)? else {
        return Ok(Vec::new());
    };

    let pairings = index.graph.recommend_pairings(entry.id, top_n, &index.catalog);
    if pairings.is_empty() {
        writeln!(
            output,
            "No neighbors found for ingredient: {} (ID: {}).",
            entry.name, entry.id
        )?;
        return Ok(pairings);
    }

    writeln!(
        output,
        "Recommendations to go with ingredient '{}' (ID: {}):",
        entry.name, entry.id
    )?;
    for pairing in &pairings {
        writeln!(
            output,
            "- {} (co-occurs {} times)",
            pairing.name, pairing.weight
        )?;
    }

    Ok(pairings)
}

pub fn most_connected<W: Write>(
    index: &RecipeIndex,
    by_id: bool,
    output: &mut W,
) -> Result<Option<MostConnected>> {
    let winner = if by_id {
        index.graph.most_connected_by_id()
    } else {
        index.graph.most_connected()
    };

    match &winner {
        Some(winner) => writeln!(
            output,
            "Most connected ingredient: '{}' with {} unique connections.",
            winner.name, winner.connections
        )?,
        None => writeln!(output, "No recipes loaded; fetch some first.")?,
    }

    Ok(winner)
}

pub fn lookup<W: Write>(index: &RecipeIndex, partial: &str, output: &mut W) -> Result<()> {
    let matches = index.catalog.lookup(partial);
    if matches.is_empty() {
        writeln!(output, "No ingredient found matching '{partial}'.")?;
        return Ok(());
    }

    writeln!(output, "{:<5} {:<10} {}", "#", "ID", "Name")?;
    writeln!(output, "{}", "-".repeat(50))?;
    for (position, entry) in matches.iter().enumerate() {
        writeln!(output, "{:<5} {:<10} {}", position + 1, entry.id, entry.name)?;
    }

    Ok(())
}

pub async fn substitutes<W: Write>(
    settings: &Settings,
    ingredient: &str,
    output: &mut W,
) -> Result<Substitutes> {
    let client = SpoonacularClient::new(settings.spoonacular.clone())?;
    let substitutes = client.get_substitutes(ingredient).await?;

    match &substitutes {
        Substitutes::None => writeln!(output, "This ingredient does not have any substitutes.")?,
        Substitutes::Found(list) => {
            writeln!(output, "The substitutes for '{ingredient}' are:")?;
            for substitute in list {
                writeln!(output, "- {substitute}")?;
            }
        }
    }

    Ok(substitutes)
}

/// Resolve an ingredient and print its aisle and estimated price
pub async fn info<R: BufRead, W: Write>(
    settings: &Settings,
    index: &RecipeIndex,
    query: &str,
    choice: Option<usize>,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let resolution = index.catalog.resolve(query);
    let Some(entry) = choose_ingredient(&resolution, query, choice, input, output)? else {
        return Ok(());
    };

    let client = SpoonacularClient::new(settings.spoonacular.clone())?;
    let information = client.get_ingredient_info(entry.id).await?;

    writeln!(
        output,
        "'{}' can be found in aisle: {}",
        entry.name,
        information.aisle_message()
    )?;
    writeln!(
        output,
        "The estimated price for '{}' is: {}",
        entry.name,
        information.price_message()
    )?;

    Ok(())
}

/// Menu loop: ask what the user wants, answer, repeat until they are done
pub async fn interactive<R: BufRead, W: Write>(
    settings: &Settings,
    index: &RecipeIndex,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(
        output,
        "Welcome to the Cooking Helper! Let me know what information you want from the options below:"
    )?;

    loop {
        writeln!(output, "\nWhat information would you like?")?;
        for (position, option) in MENU_OPTIONS.iter().enumerate() {
            writeln!(output, "{}. {}", position + 1, option)?;
        }

        let choice = read_choice(
            input,
            output,
            "\nEnter the number of the option you want: ",
            MENU_OPTIONS.len(),
        )?;

        // Network failures end the current question, not the session
        let outcome = match choice {
            1 => {
                let name = read_line(
                    input,
                    output,
                    "What is the name of the ingredient you want to get pairing recommendations for? ",
                )?;
                pairings(index, &name, settings.query.top_n, None, input, output).map(|_| ())
            }
            2 => {
                let name = read_line(
                    input,
                    output,
                    "What is the name of the ingredient you want substitutions for? ",
                )?;
                substitutes(settings, &name, output).await.map(|_| ())
            }
            3 => most_connected(index, false, output).map(|_| ()),
            _ => {
                let name = read_line(
                    input,
                    output,
                    "Enter the name of the ingredient to get price and aisle info: ",
                )?;
                info(settings, index, &name, None, input, output).await
            }
        };

        if let Err(e) = outcome {
            writeln!(output, "Sorry, that did not work: {}", e.log_safe())?;
        }

        if !confirm(input, output, "Do you need more help (yes/no)? ")? {
            writeln!(output, "\nOkay, happy cooking!")?;
            return Ok(());
        }
    }
}
