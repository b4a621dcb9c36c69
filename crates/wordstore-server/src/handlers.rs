//! Request handlers.
//!
//! Storage and statistics calls block on filesystem I/O, so each one runs on
//! tokio's blocking pool.

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::{Json, debug_handler};
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use wordstore_core::{
    FileSource, FileStore, FileUpload, RankRequest, RemoveFileRequest, ScanOptions,
    WordCountResponse, WordFrequencyRequest, WordFrequencyResponse, WordStatistics, WordStats,
};

use crate::error::ApiError;

/// Shared state of the API server.
pub struct AppState {
    /// Backing file store
    pub store: Arc<dyn FileStore>,
    /// Statistics over the same store
    pub stats: WordStats<dyn FileStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn FileStore>, options: ScanOptions) -> Self {
        let stats = WordStats::with_options(Arc::clone(&store), options);
        Self { store, stats }
    }
}

async fn run_blocking<T, E, F>(task: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Into<ApiError> + Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .map_err(Into::into)
}

/// Decode a JSON request body whatever its `Content-Type` header says.
///
/// Clients of the file store send bare JSON bodies without declaring a
/// media type, which axum's `Json` extractor would refuse.
fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    Ok(serde_json::from_slice(body)?)
}

/// Health check endpoint
#[debug_handler]
pub async fn health_check() -> Json<HashMap<String, String>> {
    let mut response = HashMap::new();
    response.insert("status".to_string(), "healthy".to_string());
    response.insert("service".to_string(), "wordstore".to_string());
    Json(response)
}

/// List stored files
#[debug_handler]
pub async fn list_files(State(state): State<Arc<AppState>>) -> Result<Json<Vec<String>>, ApiError> {
    let store = Arc::clone(&state.store);
    let files = run_blocking(move || store.list_files()).await?;
    debug!("Listing {} files", files.len());
    Ok(Json(files.iter().map(ToString::to_string).collect()))
}

/// Add new files; fails if any of them already exists
#[debug_handler]
pub async fn add_files(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<()>, ApiError> {
    let files: Vec<FileUpload> = decode_body(&body)?;
    let store = Arc::clone(&state.store);
    let count = files.len();
    run_blocking(move || store.add_files(&files)).await?;
    info!("Added {} files", count);
    Ok(Json(()))
}

/// Create or replace files
#[debug_handler]
pub async fn update_files(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<()>, ApiError> {
    let files: Vec<FileUpload> = decode_body(&body)?;
    let store = Arc::clone(&state.store);
    let count = files.len();
    run_blocking(move || store.update_files(&files)).await?;
    info!("Updated {} files", count);
    Ok(Json(()))
}

/// Remove one file
#[debug_handler]
pub async fn remove_file(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<()>, ApiError> {
    let request: RemoveFileRequest = decode_body(&body)?;
    let store = Arc::clone(&state.store);
    let name = request.name.clone();
    run_blocking(move || store.remove_file(&request.name)).await?;
    info!("Removed file {}", name);
    Ok(Json(()))
}

/// Count distinct words across all files
#[debug_handler]
pub async fn word_count(
    State(state): State<Arc<AppState>>,
) -> Result<Json<WordCountResponse>, ApiError> {
    let stats = state.stats.clone();
    let count = run_blocking(move || stats.word_count()).await?;
    debug!("Counted {} distinct words", count);
    Ok(Json(WordCountResponse { count }))
}

/// Most frequent words, in the requested order
#[debug_handler]
pub async fn word_frequency(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<WordFrequencyResponse>, ApiError> {
    let request: WordFrequencyRequest = decode_body(&body)?;
    let request = RankRequest::try_from(&request)?;
    debug!(limit = request.limit, order = %request.order, "Ranking words");

    let stats = state.stats.clone();
    let words = run_blocking(move || stats.top_words(request)).await?;
    Ok(Json(WordFrequencyResponse { words }))
}
