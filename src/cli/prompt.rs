use crate::catalog::{CatalogEntry, Resolution};
use crate::{Error, Result};
use std::io::{BufRead, Write};

const AFFIRMATIVE: [&str; 5] = ["yes", "y", "sure", "yeah", "yup"];

/// Print `prompt` and read one trimmed line; end of input is an error
pub fn read_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::Validation("Input closed".to_string()));
    }
    Ok(line.trim().to_string())
}

/// Ask for a number in `1..=max` until a valid one is entered
pub fn read_choice<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    max: usize,
) -> Result<usize> {
    loop {
        let line = read_line(input, output, prompt)?;
        match line.parse::<usize>() {
            Ok(choice) if (1..=max).contains(&choice) => return Ok(choice),
            Ok(_) => writeln!(output, "Invalid choice. Please enter a number from the list.")?,
            Err(_) => writeln!(output, "Please enter a valid number.")?,
        }
    }
}

pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<bool> {
    let answer = read_line(input, output, prompt)?.to_lowercase();
    Ok(AFFIRMATIVE.contains(&answer.as_str()))
}

/// Turn a catalog resolution into one entry.
///
/// Ambiguous names list their candidates and use `choice` when given,
/// otherwise the user is asked. `Ok(None)` means nothing matched.
pub fn choose_ingredient<'a, R: BufRead, W: Write>(
    resolution: &Resolution<'a>,
    query: &str,
    choice: Option<usize>,
    input: &mut R,
    output: &mut W,
) -> Result<Option<&'a CatalogEntry>> {
    let candidates = match resolution {
        Resolution::NotFound => {
            writeln!(output, "No ingredient found matching '{query}'.")?;
            return Ok(None);
        }
        Resolution::Unique(entry) => return Ok(Some(*entry)),
        Resolution::Ambiguous(candidates) => candidates,
    };

    writeln!(output, "Multiple matches found for '{query}':")?;
    for (position, entry) in candidates.iter().enumerate() {
        writeln!(output, "{}. {} (ID: {})", position + 1, entry.name, entry.id)?;
    }

    let choice = match choice {
        Some(choice) => choice,
        None => read_choice(
            input,
            output,
            "Enter the number of the ingredient you meant: ",
            candidates.len(),
        )?,
    };

    resolution
        .select(choice)
        .map(Some)
        .ok_or_else(|| {
            Error::Validation(format!(
                "Choice {choice} is not between 1 and {}",
                candidates.len()
            ))
        })
}
