use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

mod cli;
mod client;
mod error;
mod files_cmd;
mod shared;
mod stats_cmd;

use cli::{Cli, Commands};
use client::StoreClient;
use error::{CliResult, OutputFormat};
use files_cmd::{run_add, run_ls, run_rm, run_update};
use stats_cmd::{run_freq_words, run_wc};

fn run(cli: Cli, output_format: OutputFormat) -> CliResult<ExitCode> {
    let client = StoreClient::new(&cli.server)?;

    match cli.command {
        Commands::Ls => run_ls(&client, output_format),
        Commands::Add(args) => run_add(&client, args, output_format),
        Commands::Update(args) => run_update(&client, args, output_format),
        Commands::Rm(args) => run_rm(&client, args, output_format),
        Commands::Wc => run_wc(&client, output_format),
        Commands::FreqWords(args) => run_freq_words(&client, args, output_format),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!("Parsed CLI args: {:?}", cli);

    let output_format = match cli.output_format.parse::<OutputFormat>() {
        Ok(format) => format,
        Err(err) => return err.report(OutputFormat::Text),
    };

    match run(cli, output_format) {
        Ok(code) => code,
        Err(err) => err.report(output_format),
    }
}
