//! Synthetic SurrealQL seed-file generator.
//!
//! Streams customers, books and orders (plus a `customer->ordered->order`
//! edge per order) as SurrealQL statements inside a single transaction.
//!
//! # Example
//!
//! ```rust
//! use surql_seed::generator::{Generator, GeneratorConfig};
//! use surql_seed::writer::StatementWriter;
//!
//! let config = GeneratorConfig::default().with_counts(2, 2, 1).with_seed(42);
//! let mut writer = StatementWriter::new(Vec::new());
//! Generator::new(config).generate(&mut writer).unwrap();
//!
//! let (bytes, stats) = writer.into_parts().unwrap();
//! assert_eq!(stats.statements, 11);
//! assert_eq!(stats.lines, 12);
//! assert!(String::from_utf8(bytes).unwrap().ends_with("COMMIT TRANSACTION;\n"));
//! ```

pub mod fake;
pub mod generator;
pub mod model;
pub mod progress;
pub mod schema;
pub mod writer;
