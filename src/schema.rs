//! Fixed names of the target schema.
//!
//! The generated statements assume these table, field and edge names;
//! consumers of the seed file query against them.

pub const CUSTOMER_TABLE: &str = "customer";
pub const BOOK_TABLE: &str = "book";
pub const ORDER_TABLE: &str = "order";

/// Edge table linking a customer to each order they placed
pub const ORDERED_EDGE: &str = "ordered";

/// Tables declared at the top of every seed file, in declaration order
pub const TABLES: [&str; 3] = [CUSTOMER_TABLE, BOOK_TABLE, ORDER_TABLE];

/// Suffix that suppresses the created record in the response
pub const RETURN_NONE: &str = "RETURN NONE;";
