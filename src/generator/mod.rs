//! Seed-file generation driver.
//!
//! Emits the import preamble, the table declarations and one transaction
//! holding every customer, book and order record. Records are built and
//! written one at a time; nothing is retained between iterations.

use crate::fake::FakeData;
use crate::model::{Book, Customer, Directive, Order, Statement, Table};
use crate::writer::{StatementWriter, WriteStats};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;

/// Records between two progress notifications
pub const PROGRESS_INTERVAL: u64 = 10_000;

pub const MIN_BOOK_PRICE: f64 = 1.0;
pub const MAX_BOOK_PRICE: f64 = 60.0;

/// Generation phases, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Customers,
    Books,
    Orders,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Customers => "Customers",
            Phase::Books => "Books",
            Phase::Orders => "Orders",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    Started { phase: Phase, total: u64 },
    Advanced { phase: Phase, done: u64 },
    Finished { phase: Phase, count: u64 },
}

/// Generator configuration
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub customers: u64,
    pub books: u64,
    pub orders: u64,
    /// Random seed for reproducibility
    pub seed: u64,
    /// Upper bound on books per order (lower bound is always 1)
    pub max_books_per_order: u32,
    /// Window for customer `last_login`, counted back from the reference time
    pub last_login_days: u32,
    /// How far back order `created_at` may reach
    pub order_history_years: u32,
    /// Probability that an order is marked processed
    pub processed_probability: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            customers: 200_000,
            books: 200_000,
            orders: 600_000,
            seed: rand::random(),
            max_books_per_order: 3,
            last_login_days: 30,
            order_history_years: 1,
            processed_probability: 0.9,
        }
    }
}

impl GeneratorConfig {
    pub fn with_counts(mut self, customers: u64, books: u64, orders: u64) -> Self {
        self.customers = customers;
        self.books = books;
        self.orders = orders;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check that every order can reference an existing customer and book.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.orders > 0 && self.customers == 0 {
            anyhow::bail!("cannot generate {} orders without customers", self.orders);
        }
        if self.orders > 0 && self.books == 0 {
            anyhow::bail!("cannot generate {} orders without books", self.orders);
        }
        if self.max_books_per_order == 0 {
            anyhow::bail!("max_books_per_order must be at least 1");
        }
        if !(0.0..=1.0).contains(&self.processed_probability) {
            anyhow::bail!(
                "processed_probability must be within [0, 1], got {}",
                self.processed_probability
            );
        }
        Ok(())
    }
}

/// Statistics from a generation run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenerateStats {
    pub tables: u64,
    pub customers: u64,
    pub books: u64,
    pub orders: u64,
    pub relations: u64,
    /// Writer totals at the end of the run (before the final flush)
    pub written: WriteStats,
}

/// Builds individual records from the fake-data source.
pub struct RecordFactory {
    fake: FakeData<StdRng>,
    now: DateTime<Utc>,
    customers: u64,
    books: u64,
    max_books_per_order: u32,
    last_login_days: u32,
    order_history_years: u32,
    processed_probability: f64,
}

impl RecordFactory {
    pub fn new(config: &GeneratorConfig, now: DateTime<Utc>) -> Self {
        Self {
            fake: FakeData::new(StdRng::seed_from_u64(config.seed)),
            now,
            customers: config.customers,
            books: config.books,
            max_books_per_order: config.max_books_per_order,
            last_login_days: config.last_login_days,
            order_history_years: config.order_history_years,
            processed_probability: config.processed_probability,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn customer(&mut self, id: u64) -> Customer {
        Customer::new(
            id,
            self.fake.first_name(),
            self.fake.last_name(),
            self.fake.email(),
            self.fake.country(),
            self.fake.recent(self.last_login_days, self.now),
        )
    }

    pub fn book(&mut self, id: u64) -> Book {
        Book::new(
            id,
            self.fake.product_name(),
            self.fake.product_description(),
            self.fake.price(MIN_BOOK_PRICE, MAX_BOOK_PRICE),
            self.fake.isbn(),
        )
    }

    /// Build an order referencing 1..=max books and one customer, all
    /// drawn uniformly (with replacement) from the generated id ranges.
    pub fn order(&mut self, id: u64) -> Order {
        let amount = self.fake.random_int(1, i64::from(self.max_books_per_order));
        let book_ids = (0..amount)
            .map(|_| self.fake.random_index(self.books))
            .collect();
        let customer_id = self.fake.random_index(self.customers);
        Order::new(
            id,
            book_ids,
            customer_id,
            self.fake.past(self.order_history_years, self.now),
            self.fake.bool_with_probability(self.processed_probability),
        )
    }
}

type ProgressCallback = Box<dyn FnMut(ProgressEvent)>;

pub struct Generator {
    config: GeneratorConfig,
    factory: RecordFactory,
    progress: Option<ProgressCallback>,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        let factory = RecordFactory::new(&config, Utc::now());
        Self {
            config,
            factory,
            progress: None,
        }
    }

    /// Anchor relative timestamps (`last_login`, `created_at`) at `now`.
    pub fn with_reference_time(mut self, now: DateTime<Utc>) -> Self {
        self.factory = RecordFactory::new(&self.config, now);
        self
    }

    pub fn with_progress<F>(mut self, callback: F) -> Self
    where
        F: FnMut(ProgressEvent) + 'static,
    {
        self.progress = Some(Box::new(callback));
        self
    }

    /// Write the complete seed file body to `writer`.
    ///
    /// The caller owns the writer and must `finish` it afterwards. On error
    /// the output stops where it failed and never reaches the commit marker.
    pub fn generate<W: Write>(
        &mut self,
        writer: &mut StatementWriter<W>,
    ) -> anyhow::Result<GenerateStats> {
        self.config.validate()?;

        let mut stats = GenerateStats::default();

        writer.write_statement(&Directive::Import)?;
        for table in Table::seed_tables() {
            writer.write_statement(&table)?;
            stats.tables += 1;
        }
        writer.write_statement(&Directive::Begin)?;

        stats.customers = self.run_phase(Phase::Customers, self.config.customers, writer, |f, id| {
            f.customer(id)
        })?;
        stats.books = self.run_phase(Phase::Books, self.config.books, writer, |f, id| f.book(id))?;
        stats.orders = self.run_phase(Phase::Orders, self.config.orders, writer, |f, id| {
            f.order(id)
        })?;
        stats.relations = stats.orders;

        writer.write_statement(&Directive::Commit)?;
        stats.written = writer.stats();

        Ok(stats)
    }

    fn run_phase<W, S, F>(
        &mut self,
        phase: Phase,
        total: u64,
        writer: &mut StatementWriter<W>,
        mut build: F,
    ) -> anyhow::Result<u64>
    where
        W: Write,
        S: Statement,
        F: FnMut(&mut RecordFactory, u64) -> S,
    {
        let factory = &mut self.factory;
        let progress = &mut self.progress;
        let mut notify = |event: ProgressEvent| {
            if let Some(cb) = progress.as_mut() {
                cb(event);
            }
        };

        notify(ProgressEvent::Started { phase, total });
        for id in 0..total {
            let record = build(factory, id);
            writer.write_statement(&record)?;

            let done = id + 1;
            if done % PROGRESS_INTERVAL == 0 {
                notify(ProgressEvent::Advanced { phase, done });
            }
        }
        notify(ProgressEvent::Finished {
            phase,
            count: total,
        });

        Ok(total)
    }
}
