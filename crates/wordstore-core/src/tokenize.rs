//! Tokenizer.
//!
//! Splits a byte stream on runs of whitespace and folds each token to
//! lowercase. Bytes that are not valid UTF-8 are replaced rather than
//! rejected, so only genuine read failures abort a scan.

use std::io::{self, BufRead, BufReader, Read};

use crate::table::WordFrequencyTable;

/// Tokenize everything `reader` yields until end-of-stream.
///
/// Empty input gives an empty table. Any read error other than
/// end-of-stream is returned as-is; the caller attaches the file identity.
pub fn tokenize<R: Read>(reader: R) -> io::Result<WordFrequencyTable> {
    let mut reader = BufReader::new(reader);
    let mut table = WordFrequencyTable::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        tokenize_into(&String::from_utf8_lossy(&line), &mut table);
    }

    Ok(table)
}

/// Tokenize an in-memory string.
pub fn tokenize_str(text: &str) -> WordFrequencyTable {
    let mut table = WordFrequencyTable::new();
    tokenize_into(text, &mut table);
    table
}

fn tokenize_into(text: &str, table: &mut WordFrequencyTable) {
    for word in text.split_whitespace() {
        table.record(&word.to_lowercase());
    }
}
