//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Look up a team on TheSportsDB and print its logo URL
    SearchTeam {
        /// Team name as TheSportsDB knows it (e.g. "Arsenal").
        name: String,
    },

    /// Look up a team's roster on TheSportsDB
    SearchPlayers {
        /// Team name as TheSportsDB knows it.
        name: String,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Create teams locally, sync each with TheSportsDB, and print the result.
    ///
    /// State lives only for this run; teams are imported in the order given.
    Import {
        /// Team names (repeatable): `import Arsenal Chelsea`.
        #[clap(required = true)]
        names: Vec<String>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Sync every team a second time after import and report what changed.
        #[clap(long)]
        resync: bool,

        /// Keep going when a team fails to import.
        #[clap(long)]
        keep_going: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "scoreplay",
    about = "Team and roster reconciliation against TheSportsDB"
)]
pub struct Scoreplay {
    #[clap(subcommand)]
    pub command: Commands,
}
