//! # wordstore-server
//!
//! HTTP front end for the wordstore file store. Clients list, add, update and
//! remove files, and query word statistics computed over every stored file.

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;

pub use config::ServerConfig;
pub use error::ApiError;
pub use handlers::AppState;
pub use server::{router, serve};
