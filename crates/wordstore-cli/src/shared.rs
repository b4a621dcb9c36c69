use std::fs;
use std::path::Path;

use wordstore_core::{FileUpload, Order};

use crate::error::{CliError, CliResult};

pub fn parse_order(s: &str) -> CliResult<Order> {
    s.parse::<Order>()
        .map_err(|_| CliError::input(format!("Invalid order '{}'. Expected: asc, dsc", s)))
}

pub fn parse_limit(s: &str) -> CliResult<usize> {
    s.trim().parse::<usize>().map_err(|_| {
        CliError::input(format!(
            "Invalid limit '{}'. Expected a non-negative integer",
            s
        ))
    })
}

/// Name a local file is stored under: its final path component.
pub fn remote_name(path: &str) -> CliResult<String> {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| CliError::input(format!("'{}' does not name a file", path)))
}

pub fn read_upload(path: &str) -> CliResult<FileUpload> {
    let name = remote_name(path)?;
    let content = fs::read(path)
        .map_err(|e| CliError::input(format!("Failed to read file '{}': {}", path, e)))?;
    Ok(FileUpload::new(name, content))
}

pub fn read_uploads(paths: &[String]) -> CliResult<Vec<FileUpload>> {
    paths.iter().map(|path| read_upload(path)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn order_accepts_wire_vocabulary() {
        assert_eq!(parse_order("asc").unwrap(), Order::Ascending);
        assert_eq!(parse_order("dsc").unwrap(), Order::Descending);
        assert_eq!(parse_order("sideways").unwrap_err().kind(), ErrorKind::Input);
    }

    #[test]
    fn limit_must_be_non_negative() {
        assert_eq!(parse_limit("10").unwrap(), 10);
        assert_eq!(parse_limit("0").unwrap(), 0);
        assert!(parse_limit("-1").is_err());
        assert!(parse_limit("ten").is_err());
    }

    #[test]
    fn remote_name_is_final_component() {
        assert_eq!(remote_name("docs/notes/a.txt").unwrap(), "a.txt");
        assert_eq!(remote_name("a.txt").unwrap(), "a.txt");
        assert!(remote_name("..").is_err());
        assert!(remote_name("/").is_err());
    }

    #[test]
    fn read_upload_uses_file_name_and_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("poem.txt");
        fs::write(&path, "roses are red").unwrap();

        let upload = read_upload(path.to_str().unwrap()).unwrap();
        assert_eq!(upload.name, "poem.txt");
        assert_eq!(upload.content, b"roses are red");
    }

    #[test]
    fn missing_local_file_is_an_input_error() {
        let err = read_upload("/definitely/not/here.txt").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Input);
    }
}
