use std::fmt;
use std::process::ExitCode;
use std::str::FromStr;

use serde::Serialize;

pub const EXIT_INPUT_ERROR: u8 = 2;
pub const EXIT_RUNTIME_ERROR: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// Bad flags or unreadable local files; nothing was sent.
    Input,
    /// The request could not be completed.
    Runtime,
}

#[derive(Debug)]
pub struct CliError {
    kind: ErrorKind,
    message: String,
    http_status: Option<u16>,
}

impl CliError {
    pub fn input(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Input,
            message: message.into(),
            http_status: None,
        }
    }

    pub fn runtime(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Runtime,
            message: message.into(),
            http_status: None,
        }
    }

    /// The server answered with a non-success status.
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Runtime,
            message: message.into(),
            http_status: Some(status),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn exit_code(&self) -> u8 {
        match self.kind {
            ErrorKind::Input => EXIT_INPUT_ERROR,
            ErrorKind::Runtime => EXIT_RUNTIME_ERROR,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<reqwest::Error> for CliError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            CliError::runtime(format!("Could not reach server: {}", err))
        } else if err.is_timeout() {
            CliError::runtime(format!("Server did not answer in time: {}", err))
        } else {
            CliError::runtime(format!("Request failed: {}", err))
        }
    }
}

pub type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug, Serialize)]
struct ErrorOutput<'a> {
    error: &'a str,
    kind: ErrorKind,
    exit_code: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    http_status: Option<u16>,
}

impl CliError {
    fn envelope(&self) -> ErrorOutput<'_> {
        ErrorOutput {
            error: &self.message,
            kind: self.kind,
            exit_code: self.exit_code(),
            http_status: self.http_status,
        }
    }

    fn text_line(&self) -> String {
        match self.http_status {
            Some(status) => format!("Error (HTTP {}): {}", status, self.message),
            None => format!("Error: {}", self.message),
        }
    }

    /// Print the error to stderr and return the process exit code.
    pub fn report(&self, output_format: OutputFormat) -> ExitCode {
        let rendered = match output_format {
            OutputFormat::Json => serde_json::to_string_pretty(&self.envelope())
                .unwrap_or_else(|_| self.text_line()),
            OutputFormat::Text => self.text_line(),
        };
        eprintln!("{}", rendered);
        ExitCode::from(self.exit_code())
    }
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> CliResult<Self> {
        if s.eq_ignore_ascii_case("json") {
            Ok(OutputFormat::Json)
        } else if s.eq_ignore_ascii_case("text") {
            Ok(OutputFormat::Text)
        } else {
            Err(CliError::input(format!(
                "Invalid output_format '{}'. Expected: json, text",
                s
            )))
        }
    }
}
