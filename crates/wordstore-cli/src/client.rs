//! Blocking HTTP client for the wordstore server.

use std::time::Duration;

use reqwest::Method;
use reqwest::Url;
use reqwest::blocking::{Client, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use wordstore_core::{
    FileUpload, RankRequest, RemoveFileRequest, WordCountResponse, WordFrequencyRequest,
    WordFrequencyResponse,
};

use crate::error::{CliError, CliResult};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Deserialize)]
struct ServerError {
    error: String,
}

pub struct StoreClient {
    http: Client,
    base: Url,
}

impl StoreClient {
    pub fn new(server: &str) -> CliResult<Self> {
        let mut base = Url::parse(server)
            .map_err(|e| CliError::input(format!("Invalid server URL '{}': {}", server, e)))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| CliError::runtime(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, base })
    }

    pub fn list_files(&self) -> CliResult<Vec<String>> {
        let body = self.execute(self.request(Method::GET, "listfiles")?)?;
        decode(&body)
    }

    pub fn add_files(&self, files: &[FileUpload]) -> CliResult<()> {
        self.execute(self.request(Method::POST, "addfiles")?.json(files))?;
        Ok(())
    }

    pub fn update_files(&self, files: &[FileUpload]) -> CliResult<()> {
        self.execute(self.request(Method::PUT, "updatefiles")?.json(files))?;
        Ok(())
    }

    pub fn remove_file(&self, name: &str) -> CliResult<()> {
        let body = RemoveFileRequest {
            name: name.to_string(),
        };
        self.execute(self.request(Method::DELETE, "removefile")?.json(&body))?;
        Ok(())
    }

    pub fn word_count(&self) -> CliResult<usize> {
        let body = self.execute(self.request(Method::GET, "wordscount")?)?;
        let response: WordCountResponse = decode(&body)?;
        Ok(response.count)
    }

    pub fn top_words(&self, request: RankRequest) -> CliResult<Vec<String>> {
        let body = WordFrequencyRequest {
            limit: i64::try_from(request.limit).unwrap_or(i64::MAX),
            order: request.order.to_string(),
        };
        let bytes = self.execute(self.request(Method::GET, "wordsfrequency")?.json(&body))?;
        let response: WordFrequencyResponse = decode(&bytes)?;
        Ok(response.words)
    }

    fn request(&self, method: Method, endpoint: &str) -> CliResult<RequestBuilder> {
        let url = self
            .base
            .join(endpoint)
            .map_err(|e| CliError::input(format!("Invalid endpoint '{}': {}", endpoint, e)))?;
        debug!("{} {}", method, url);
        Ok(self.http.request(method, url))
    }

    fn execute(&self, request: RequestBuilder) -> CliResult<Vec<u8>> {
        let response = request.send()?;
        let status = response.status();
        let body = response.bytes()?.to_vec();
        debug!(status = status.as_u16(), bytes = body.len(), "response received");

        if status.is_success() {
            return Ok(body);
        }

        let message = serde_json::from_slice::<ServerError>(&body)
            .map(|e| e.error)
            .unwrap_or_else(|_| format!("call failed with status code {}", status.as_u16()));
        Err(CliError::server(status.as_u16(), message))
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> CliResult<T> {
    serde_json::from_slice(body)
        .map_err(|e| CliError::runtime(format!("Unexpected response from server: {}", e)))
}
