//! Token-set configuration
//!
//! Loads a highlighter from a TOML document: an optional pair of
//! global options followed by one `[[tokens]]` entry per token.
//! Unknown keys are ignored.
//!
//! Example:
//! ```text
//! # marktree token set
//! class = "all-special"        # added to every match
//! case-sensitive = false       # force case-sensitive matching
//!
//! [[tokens]]
//! pattern = "buzz"             # required
//! class = "special"            # default "highlight"
//! case-sensitive = true        # default false
//! ```

use std::fs;
use std::path::Path;

use toml::{Table, Value};

use crate::error::{HighlightError, Result};
use crate::highlighter::Highlighter;
use crate::token::{Token, TokenBuilder};

impl Highlighter {
    /// Build a highlighter from TOML text
    pub fn from_toml(contents: &str) -> Result<Highlighter> {
        let table: Table = contents.parse()?;

        let mut highlighter = Highlighter::new(parse_tokens(&table)?);

        if let Some(class) = get_str(&table, "class")? {
            highlighter = highlighter.with_class(class);
        }
        if let Some(flag) = get_bool(&table, "case-sensitive")? {
            highlighter = highlighter.case_sensitive(flag);
        }

        Ok(highlighter)
    }

    /// Build a highlighter from a TOML file
    pub fn from_path(path: &Path) -> Result<Highlighter> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }
}

/// Parse the `[[tokens]]` entries, in file order
fn parse_tokens(table: &Table) -> Result<Vec<Token>> {
    let entries = match table.get("tokens") {
        Some(value) => value
            .as_array()
            .ok_or_else(|| HighlightError::InvalidField("tokens".to_string()))?,
        None => return Ok(Vec::new()),
    };

    entries.iter().map(parse_token).collect()
}

fn parse_token(entry: &Value) -> Result<Token> {
    let entry = entry
        .as_table()
        .ok_or_else(|| HighlightError::InvalidField("tokens".to_string()))?;

    let pattern = get_str(entry, "pattern")?
        .ok_or_else(|| HighlightError::MissingField("pattern".to_string()))?;

    let mut builder = TokenBuilder::new();
    if let Some(class) = get_str(entry, "class")? {
        builder = builder.class(class);
    }
    if let Some(flag) = get_bool(entry, "case-sensitive")? {
        builder = builder.case_sensitive(flag);
    }

    Ok(builder.build(pattern))
}

fn get_str<'a>(table: &'a Table, key: &str) -> Result<Option<&'a str>> {
    match table.get(key) {
        Some(value) => value
            .as_str()
            .map(Some)
            .ok_or_else(|| HighlightError::InvalidField(key.to_string())),
        None => Ok(None),
    }
}

fn get_bool(table: &Table, key: &str) -> Result<Option<bool>> {
    match table.get(key) {
        Some(value) => value
            .as_bool()
            .map(Some)
            .ok_or_else(|| HighlightError::InvalidField(key.to_string())),
        None => Ok(None),
    }
}
