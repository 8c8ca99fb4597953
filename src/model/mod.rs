//! Record models and their SurrealQL rendering.
//!
//! Each model renders itself through `Display`; the rendered text is one
//! complete statement (or, for orders, two statements on consecutive
//! lines) without the trailing newline.

mod records;
pub mod sanitize;

pub use records::{Book, Customer, Order, Relation};

use crate::schema::{RETURN_NONE, TABLES};
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;

/// A renderable seed-file statement.
pub trait Statement: fmt::Display {
    /// Number of output lines the rendered statement occupies
    fn line_count(&self) -> usize {
        1
    }

    /// Render the statement text
    fn create_command(&self) -> String {
        self.to_string()
    }
}

/// Pre-rendered text; each embedded newline starts another output line
impl Statement for str {
    fn line_count(&self) -> usize {
        self.matches('\n').count() + 1
    }
}

impl Statement for String {
    fn line_count(&self) -> usize {
        self.as_str().line_count()
    }
}

/// Session and transaction markers framing the generated records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Bulk-import mode: skips events and computed fields while loading
    Import,
    Begin,
    Commit,
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::Import => write!(f, "OPTION IMPORT;"),
            Directive::Begin => write!(f, "BEGIN TRANSACTION;"),
            Directive::Commit => write!(f, "COMMIT TRANSACTION;"),
        }
    }
}

impl Statement for Directive {}

/// Schemaless table declaration with open permissions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    name: String,
}

impl Table {
    pub fn new(name: impl Into<String>) -> anyhow::Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            anyhow::bail!("table name must not be empty");
        }
        Ok(Self { name })
    }

    /// The three tables every seed file declares
    pub fn seed_tables() -> Vec<Table> {
        TABLES
            .iter()
            .map(|name| Table {
                name: (*name).to_string(),
            })
            .collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DEFINE TABLE {} SCHEMALESS PERMISSIONS NONE;", self.name)
    }
}

impl Statement for Table {}

/// ISO-8601 with millisecond precision and a `Z` suffix
pub(crate) fn iso_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn return_none(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, " {}", RETURN_NONE)
}
