use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::domain::{Bracket, SeasonId};
use crate::query::SortKey;

#[derive(Parser, Debug)]
#[command(author, version, about = "WoW Classic arena leaderboard browser")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Serve the leaderboard pages
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Print one leaderboard page to the terminal
    Query {
        /// Season number (defaults to the latest loaded season)
        #[arg(short, long)]
        season: Option<SeasonId>,
        /// 2v2, 3v3, 5v5 or rbg
        #[arg(short, long)]
        bracket: Option<Bracket>,
        /// Case-insensitive player or team name filter
        #[arg(short = 'q', long, default_value = "")]
        search: String,
        /// rank, rating, wins, losses, name or winrate
        #[arg(long, default_value = "rank")]
        sort: SortKey,
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Validate the data directory and report what would be loaded
    Check,
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
