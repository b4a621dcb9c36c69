use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use wordstore_core::ScanOptions;

/// HTTP server for the wordstore file store
#[derive(Parser, Debug, Clone)]
#[command(name = "wordstore-server", version, about)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "WORDSTORE_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Directory holding the stored files (created if missing)
    #[arg(long, env = "WORDSTORE_DIR", default_value = "files")]
    pub store_dir: PathBuf,

    /// Abort word statistics scans that take longer than this many seconds
    #[arg(long, env = "WORDSTORE_SCAN_TIMEOUT")]
    pub scan_timeout_secs: Option<u64>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_filter: String,
}

impl ServerConfig {
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            deadline: self.scan_timeout_secs.map(Duration::from_secs),
        }
    }
}
