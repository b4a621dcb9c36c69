//! Core data types for wordstore.
//!
//! This module defines the primary types used throughout the library:
//! - [`FileIdentifier`] - Handle naming a stored file
//! - [`Order`] - Presentation direction of a ranked word list
//! - [`RankRequest`] - Validated limit and order for a top-words query
//! - [`FileUpload`] - A file name with its content, as sent by clients
//! - Wire request/response shapes shared by the server and the CLI

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StatsError;

/// Opaque handle naming a stored file, relative to the store root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileIdentifier(PathBuf);

impl FileIdentifier {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl From<&str> for FileIdentifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for FileIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Presentation direction of a ranked word list.
///
/// On the wire the directions are abbreviated to `asc` and `dsc`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Order {
    /// Lowest count first.
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    /// Highest count first.
    #[serde(rename = "dsc")]
    Descending,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Ascending => write!(f, "asc"),
            Order::Descending => write!(f, "dsc"),
        }
    }
}

impl FromStr for Order {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Order::Ascending),
            "dsc" | "desc" | "descending" => Ok(Order::Descending),
            _ => Err(StatsError::InvalidOrder(s.to_string())),
        }
    }
}

/// A validated top-words query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankRequest {
    /// Maximum number of words to return. Clamped to the table size at rank time.
    pub limit: usize,
    /// Presentation direction.
    pub order: Order,
}

impl RankRequest {
    pub fn new(limit: usize, order: Order) -> Self {
        Self { limit, order }
    }

    /// Build a request from raw caller input.
    ///
    /// The order is checked first, so a bad order is reported even when the
    /// limit is also out of range.
    pub fn parse(limit: i64, order: &str) -> crate::error::Result<Self> {
        let order = order.parse::<Order>()?;
        let limit = usize::try_from(limit).map_err(|_| StatsError::InvalidLimit(limit))?;
        Ok(Self { limit, order })
    }
}

impl TryFrom<&WordFrequencyRequest> for RankRequest {
    type Error = StatsError;

    fn try_from(request: &WordFrequencyRequest) -> Result<Self, Self::Error> {
        RankRequest::parse(request.limit, &request.order)
    }
}

/// A file name with its content.
///
/// `content` travels as a base64 string in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileUpload {
    pub name: String,
    #[serde(default, with = "base64_bytes")]
    pub content: Vec<u8>,
}

impl FileUpload {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Body of a remove request. Any `content` field sent along is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveFileRequest {
    pub name: String,
}

/// Body of a top-words request, as sent on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequencyRequest {
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub order: String,
}

/// Body of a top-words response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequencyResponse {
    pub words: Vec<String>,
}

/// Body of a word-count response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCountResponse {
    pub count: usize,
}

mod base64_bytes {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = Option::<String>::deserialize(deserializer)?;
        match encoded {
            Some(s) => STANDARD.decode(s.as_bytes()).map_err(serde::de::Error::custom),
            None => Ok(Vec::new()),
        }
    }
}
