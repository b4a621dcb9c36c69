use std::process::ExitCode;

use serde::Serialize;
use tracing::debug;

use crate::cli::{FilesArgs, RemoveArgs};
use crate::client::StoreClient;
use crate::error::{CliError, CliResult, OutputFormat};
use crate::shared::{read_uploads, remote_name};

#[derive(Debug, Serialize)]
struct ChangeOutput<'a> {
    message: &'a str,
    files: Vec<String>,
}

fn print_change(message: &str, files: Vec<String>, output_format: OutputFormat) -> CliResult<()> {
    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&ChangeOutput { message, files })
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => println!("{}", message),
    }
    Ok(())
}

pub fn run_ls(client: &StoreClient, output_format: OutputFormat) -> CliResult<ExitCode> {
    let files = client.list_files()?;

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&files)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text if files.is_empty() => println!("no files exist on server"),
        OutputFormat::Text => {
            for file in &files {
                println!("  {}", file);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

pub fn run_add(
    client: &StoreClient,
    args: FilesArgs,
    output_format: OutputFormat,
) -> CliResult<ExitCode> {
    let uploads = read_uploads(&args.files)?;
    debug!("Uploading {} new files", uploads.len());
    client.add_files(&uploads)?;

    let names = uploads.into_iter().map(|u| u.name).collect();
    print_change("files added successfully", names, output_format)?;
    Ok(ExitCode::SUCCESS)
}

pub fn run_update(
    client: &StoreClient,
    args: FilesArgs,
    output_format: OutputFormat,
) -> CliResult<ExitCode> {
    let uploads = read_uploads(&args.files)?;
    debug!("Uploading {} files for update", uploads.len());
    client.update_files(&uploads)?;

    let names = uploads.into_iter().map(|u| u.name).collect();
    print_change("files updated successfully", names, output_format)?;
    Ok(ExitCode::SUCCESS)
}

pub fn run_rm(
    client: &StoreClient,
    args: RemoveArgs,
    output_format: OutputFormat,
) -> CliResult<ExitCode> {
    let name = remote_name(&args.file)?;
    client.remove_file(&name)?;

    print_change("file deleted successfully", vec![name], output_format)?;
    Ok(ExitCode::SUCCESS)
}
