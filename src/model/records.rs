use super::sanitize::{replace_quotes, strip_quotes};
use super::{iso_timestamp, return_none, Statement};
use crate::schema::{BOOK_TABLE, CUSTOMER_TABLE, ORDERED_EDGE, ORDER_TABLE};
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    id: u64,
    first_name: String,
    last_name: String,
    email: String,
    country: String,
    last_login: DateTime<Utc>,
}

impl Customer {
    /// Build a customer; single quotes in the text fields become spaces.
    pub fn new(
        id: u64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        country: impl Into<String>,
        last_login: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            first_name: replace_quotes(first_name.into()),
            last_name: replace_quotes(last_name.into()),
            email: replace_quotes(email.into()),
            country: replace_quotes(country.into()),
            last_login,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn last_login(&self) -> DateTime<Utc> {
        self.last_login
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CREATE {}:{} SET first_name = '{}', last_name = '{}', email = '{}', country = '{}', last_login = \"{}\"",
            CUSTOMER_TABLE,
            self.id,
            self.first_name,
            self.last_name,
            self.email,
            self.country,
            iso_timestamp(&self.last_login)
        )?;
        return_none(f)
    }
}

impl Statement for Customer {}

#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    id: u64,
    title: String,
    description: String,
    price: f64,
    isbn: String,
}

impl Book {
    /// Build a book; single quotes are dropped from title and description.
    pub fn new(
        id: u64,
        title: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: strip_quotes(title.into()),
            description: strip_quotes(description.into()),
            price,
            isbn: isbn.into(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CREATE {}:{} SET title = '{}', description = '{}', price = {}, isbn = \"{}\"",
            BOOK_TABLE, self.id, self.title, self.description, self.price, self.isbn
        )?;
        return_none(f)
    }
}

impl Statement for Book {}

/// Directed edge `from -> edge -> to` between two records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relation {
    pub from_table: &'static str,
    pub from_id: u64,
    pub edge: &'static str,
    pub to_table: &'static str,
    pub to_id: u64,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RELATE {}:{}->{}->{}:{}",
            self.from_table, self.from_id, self.edge, self.to_table, self.to_id
        )?;
        return_none(f)
    }
}

impl Statement for Relation {}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: u64,
    book_ids: Vec<u64>,
    customer_id: u64,
    created_at: DateTime<Utc>,
    processed: bool,
}

impl Order {
    pub fn new(
        id: u64,
        book_ids: Vec<u64>,
        customer_id: u64,
        created_at: DateTime<Utc>,
        processed: bool,
    ) -> Self {
        Self {
            id,
            book_ids,
            customer_id,
            created_at,
            processed,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn book_ids(&self) -> &[u64] {
        &self.book_ids
    }

    pub fn customer_id(&self) -> u64 {
        self.customer_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn processed(&self) -> bool {
        self.processed
    }

    /// The "customer placed order" edge rendered after the order record
    pub fn relation(&self) -> Relation {
        Relation {
            from_table: CUSTOMER_TABLE,
            from_id: self.customer_id,
            edge: ORDERED_EDGE,
            to_table: ORDER_TABLE,
            to_id: self.id,
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CREATE {}:{} SET created_at = \"{}\", processed = {}, books = [",
            ORDER_TABLE,
            self.id,
            iso_timestamp(&self.created_at),
            self.processed
        )?;
        for (i, book_id) in self.book_ids.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}:{}", BOOK_TABLE, book_id)?;
        }
        f.write_str("]")?;
        return_none(f)?;
        writeln!(f)?;
        write!(f, "{}", self.relation())
    }
}

impl Statement for Order {
    fn line_count(&self) -> usize {
        2
    }
}
