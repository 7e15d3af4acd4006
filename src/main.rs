use anyhow::Result;

use classic_arena_ladder::cli::Command;
use classic_arena_ladder::services::query::QueryOptions;
use classic_arena_ladder::{handle_check, handle_completions, handle_query, handle_serve, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Query {
            season,
            bracket,
            search,
            sort,
            page,
        } => handle_query(QueryOptions {
            season: *season,
            bracket: *bracket,
            search: search.clone(),
            sort: *sort,
            page: *page,
        }),
        Command::Check => handle_check(),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
