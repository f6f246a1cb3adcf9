use std::path::Path;

use tracing::debug;

use crate::domain::{DomainError, Sample};

/// Loads observations from plain-text files.
///
/// Values may be separated by commas, semicolons or whitespace, one or many
/// per line. `#` starts a comment. A non-numeric first line is treated as a
/// header and skipped.
pub struct SampleFileReader;

impl SampleFileReader {
    pub async fn read(path: impl AsRef<Path>) -> Result<Sample, DomainError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| std::io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))?;
        let values = parse_values(&content).map_err(|e| match e {
            DomainError::ParseError(msg) => {
                DomainError::parse(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;

        debug!("Read {} observations from {}", values.len(), path.display());
        Sample::new(values)
    }

    /// Reads `source` as a file when such a path exists. A source made only
    /// of numbers, such as `"1.2,3.4,5"`, is parsed inline; anything else is
    /// read as a path so a mistyped file name surfaces as an I/O error.
    pub async fn load(source: &str) -> Result<Sample, DomainError> {
        if !tokio::fs::try_exists(source).await? && is_inline_list(source) {
            debug!("Parsing inline sample");
            return Sample::new(parse_values(source)?);
        }
        Self::read(source).await
    }
}

fn is_inline_list(source: &str) -> bool {
    let mut tokens = split_tokens(source).peekable();
    tokens.peek().is_some() && tokens.all(|t| t.parse::<f64>().is_ok())
}

fn split_tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|t| !t.is_empty())
}

pub fn parse_values(text: &str) -> Result<Vec<f64>, DomainError> {
    let mut values = Vec::new();
    let mut seen_data_line = false;

    for (idx, raw_line) in text.lines().enumerate() {
        let line = raw_line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let tokens: Vec<&str> = split_tokens(line).collect();

        if !seen_data_line && tokens.first().is_some_and(|t| t.parse::<f64>().is_err()) {
            debug!("Skipping header line {}: {}", idx + 1, line);
            seen_data_line = true;
            continue;
        }
        seen_data_line = true;

        for token in tokens {
            let value = token.parse::<f64>().map_err(|_| {
                DomainError::parse(format!("line {}: '{}' is not a number", idx + 1, token))
            })?;
            values.push(value);
        }
    }

    Ok(values)
}
