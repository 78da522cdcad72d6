//! Append-only local log of fetched bids.
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use quote_common::Result;

/// Formats the line recorded for one bid.
pub fn format_line(bid: &str) -> String {
    format!("Dólar: {}\n", bid)
}

/// Appends one line for `bid` to `path`, creating the file when missing.
pub fn append_bid(path: &Path, bid: &str) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(format_line(bid).as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote_common::QuoteError;
    use std::fs;

    #[test]
    fn appends_one_line_per_call() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cotacao.txt");

        append_bid(&path, "5.43").unwrap();
        append_bid(&path, "5.44").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Dólar: 5.43\nDólar: 5.44\n");
    }

    #[test]
    fn unopenable_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("cotacao.txt");
        assert!(matches!(append_bid(&path, "5.43"), Err(QuoteError::Io(_))));
    }
}
