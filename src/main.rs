use clap::Parser;
use cooking_helper::{
    cli::{commands, Cli, Commands},
    config::Settings,
    Error, RecipeIndex, Result,
};
use std::io;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cooking_helper=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(e) = run(Cli::parse()).await {
        error!("{}", e.log_safe());
        match e {
            Error::QuotaExceeded => eprintln!("You have reached the API call quota for the day"),
            other => eprintln!("Error: {}", other.log_safe()),
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut settings = Settings::from_env()?;
    if let Some(cache) = cli.cache {
        settings.cache.path = cache;
    }
    settings.validate()?;

    let load_index = || {
        info!("Loading recipes from {}", settings.cache.path.display());
        RecipeIndex::load(&settings.cache.path)
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Fetch => {
            commands::fetch(&settings).await?;
        }
        Commands::Pairings {
            ingredient,
            top,
            choice,
        } => {
            let top_n = top.unwrap_or(settings.query.top_n);
            let index = load_index()?;
            commands::pairings(&index, &ingredient, top_n, choice, &mut input, &mut output)?;
        }
        Commands::MostConnected { by_id } => {
            commands::most_connected(&load_index()?, by_id, &mut output)?;
        }
        Commands::Lookup { partial } => {
            commands::lookup(&load_index()?, &partial, &mut output)?;
        }
        Commands::Substitutes { ingredient } => {
            commands::substitutes(&settings, &ingredient, &mut output).await?;
        }
        Commands::Info { ingredient, choice } => {
            let index = load_index()?;
            commands::info(&settings, &index, &ingredient, choice, &mut input, &mut output)
                .await?;
        }
        Commands::Interactive => {
            let index = load_index()?;
            commands::interactive(&settings, &index, &mut input, &mut output).await?;
        }
    }

    Ok(())
}
