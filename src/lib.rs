pub mod cli;
pub mod config;
pub mod domain;
pub mod pagination;
pub mod presentation;
pub mod query;
pub mod services;
pub mod store;
pub mod web;

#[cfg(test)]
mod test_utils;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::services::check::CheckService;
use crate::services::query::{QueryOptions, QueryService};
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_query(options: QueryOptions) -> Result<()> {
    let config = AppConfig::from_env();
    let service = QueryService::new(config);
    service.run(&options)
}

pub fn handle_check() -> Result<()> {
    let config = AppConfig::from_env();
    let service = CheckService::new(config);
    service.run()
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
