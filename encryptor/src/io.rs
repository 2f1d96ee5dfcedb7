//! Input/output plumbing: files when given, standard streams otherwise.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Reads the whole input, from `path` if given or from stdin.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read standard input")?;
            Ok(buffer)
        }
    }
}

/// Writes `data` in one go, to `path` if given or to stdout.
pub fn write_output(path: Option<&Path>, data: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, data)
            .with_context(|| format!("Failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(data.as_bytes())
                .and_then(|_| stdout.flush())
                .context("Failed to write standard output")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");

        write_output(Some(&path), "Khoor, Zruog!").unwrap();
        assert_eq!(read_input(Some(&path)).unwrap(), "Khoor, Zruog!");
    }

    #[test]
    fn test_missing_input_names_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = read_input(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("missing.txt"));
    }
}
