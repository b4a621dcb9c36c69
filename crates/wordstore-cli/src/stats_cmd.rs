use std::process::ExitCode;

use wordstore_core::{RankRequest, WordCountResponse, WordFrequencyResponse};

use crate::cli::FreqWordsArgs;
use crate::client::StoreClient;
use crate::error::{CliError, CliResult, OutputFormat};
use crate::shared::{parse_limit, parse_order};

pub fn run_wc(client: &StoreClient, output_format: OutputFormat) -> CliResult<ExitCode> {
    let count = client.word_count()?;

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&WordCountResponse { count })
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => println!("Total words are {}", count),
    }

    Ok(ExitCode::SUCCESS)
}

pub fn run_freq_words(
    client: &StoreClient,
    args: FreqWordsArgs,
    output_format: OutputFormat,
) -> CliResult<ExitCode> {
    // Validate locally so a bad flag never reaches the server.
    let order = parse_order(&args.order)?;
    let limit = parse_limit(&args.limit)?;

    let words = client.top_words(RankRequest::new(limit, order))?;

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&WordFrequencyResponse { words })
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for word in &words {
                println!("{}", word);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
