use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DelimitedError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: cannot parse '{token}' as a number")]
    Parse { line: usize, token: String },

    #[error("line {line}: expected {expected} columns, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("no data rows")]
    Empty,
}

/// Numeric columns read from a tab or whitespace separated text file.
#[derive(Debug, Clone)]
pub struct DelimitedTable {
    pub header: Option<Vec<String>>,
    pub rows: Vec<Vec<f64>>,
}

impl DelimitedTable {
    pub fn n_columns(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn column(&self, index: usize) -> Vec<f64> {
        self.rows.iter().map(|row| row[index]).collect()
    }

    /// Position of a header column, compared case-insensitively.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header
            .as_ref()?
            .iter()
            .position(|column| column.eq_ignore_ascii_case(name))
    }
}

pub fn read_delimited<P: AsRef<Path>>(path: P) -> Result<DelimitedTable, DelimitedError> {
    let file = File::open(path)?;
    parse_delimited(BufReader::new(file))
}

/// Blank lines and lines starting with `#` are skipped. The first remaining
/// line is taken as a header when any of its fields is not a number.
pub fn parse_delimited<R: BufRead>(reader: R) -> Result<DelimitedTable, DelimitedError> {
    let mut header: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<f64>> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        let parsed: Result<Vec<f64>, &str> = tokens
            .iter()
            .map(|token| token.parse::<f64>().map_err(|_| *token))
            .collect();

        match parsed {
            Ok(values) => {
                // Data rows must match the header, then the first data row
                let expected = rows
                    .first()
                    .map(Vec::len)
                    .or_else(|| header.as_ref().map(Vec::len))
                    .unwrap_or(values.len());
                if values.len() != expected {
                    return Err(DelimitedError::RaggedRow {
                        line: line_number,
                        expected,
                        found: values.len(),
                    });
                }
                rows.push(values);
            }
            Err(_) if header.is_none() && rows.is_empty() => {
                header = Some(tokens.iter().map(|token| token.to_string()).collect());
            }
            Err(token) => {
                return Err(DelimitedError::Parse {
                    line: line_number,
                    token: token.to_string(),
                });
            }
        }
    }

    if rows.is_empty() {
        return Err(DelimitedError::Empty);
    }

    Ok(DelimitedTable { header, rows })
}
