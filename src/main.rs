//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use scoreplay::{
    cli::{Commands, Scoreplay},
    commands::{
        import::{handle_import, ImportParams},
        search::{handle_search_players, handle_search_team},
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; settings may come from the real environment
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .with_writer(std::io::stderr)
        .init();

    let app = Scoreplay::parse();

    match app.command {
        Commands::SearchTeam { name } => handle_search_team(&name).await?,

        Commands::SearchPlayers { name, json } => handle_search_players(&name, json).await?,

        Commands::Import {
            names,
            json,
            resync,
            keep_going,
        } => {
            handle_import(ImportParams {
                names,
                as_json: json,
                resync,
                keep_going,
            })
            .await?
        }
    }

    Ok(())
}
