use clap::{Parser, Subcommand};

/// Client for the wordstore file server
#[derive(Parser, Debug)]
#[command(name = "store", version)]
#[command(about = "Manage files on a wordstore server and query word statistics")]
pub struct Cli {
    /// Base URL of the wordstore server
    #[arg(
        long,
        env = "WORDSTORE_SERVER",
        default_value = "http://localhost:8080/",
        global = true
    )]
    pub server: String,

    /// Output format: json, text
    #[arg(long, default_value = "text", global = true)]
    pub output_format: String,

    /// Enable verbose (debug) logging
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List files stored on the server
    Ls,
    /// Upload new files; fails if any already exists
    Add(FilesArgs),
    /// Upload files, creating or replacing them
    Update(FilesArgs),
    /// Remove a file from the server
    Rm(RemoveArgs),
    /// Count distinct words across all stored files
    Wc,
    /// Show the most frequent words across all stored files
    FreqWords(FreqWordsArgs),
}

#[derive(clap::Args, Debug)]
pub struct FilesArgs {
    /// Local files to upload
    #[arg(required = true)]
    pub files: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct RemoveArgs {
    /// File to remove (only the final path component is sent)
    pub file: String,
}

#[derive(clap::Args, Debug)]
pub struct FreqWordsArgs {
    /// Number of words to show
    #[arg(short = 'n', long, default_value = "10", allow_hyphen_values = true)]
    pub limit: String,

    /// Order: asc, dsc
    #[arg(long, default_value = "asc")]
    pub order: String,
}
