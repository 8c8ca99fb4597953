//! Fake data generation helpers.
//!
//! Wraps a seeded RNG and the `fake` crate to produce the primitive values
//! the record generators need: names, emails, countries, product text,
//! prices, ISBNs and timestamps.

use chrono::{DateTime, Duration, Utc};
use fake::faker::address::en::CountryName;
use fake::faker::barcode::en::Isbn13;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rand::Rng;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Product adjectives
const PRODUCT_ADJECTIVES: &[&str] = &[
    "Small",
    "Ergonomic",
    "Rustic",
    "Intelligent",
    "Gorgeous",
    "Incredible",
    "Fantastic",
    "Practical",
    "Sleek",
    "Awesome",
    "Generic",
    "Handcrafted",
    "Handmade",
    "Licensed",
    "Refined",
    "Unbranded",
    "Tasty",
    "Elegant",
    "Modern",
    "Bespoke",
];

/// Product materials
const PRODUCT_MATERIALS: &[&str] = &[
    "Steel", "Wooden", "Concrete", "Plastic", "Cotton", "Granite", "Rubber", "Metal", "Soft",
    "Fresh", "Frozen", "Bronze", "Silk", "Marble", "Leather",
];

/// Product nouns
const PRODUCT_NOUNS: &[&str] = &[
    "Chair", "Car", "Computer", "Keyboard", "Mouse", "Bike", "Ball", "Gloves", "Pants", "Shirt",
    "Table", "Shoes", "Hat", "Towels", "Soap", "Tuna", "Chicken", "Fish", "Cheese", "Bacon",
    "Pizza", "Salad", "Sausages", "Chips",
];

/// Product selling points for descriptions
const PRODUCT_FEATURES: &[&str] = &[
    "a reinforced frame",
    "an ergonomic grip",
    "all-day comfort",
    "a weatherproof finish",
    "smart temperature control",
    "a slim lightweight profile",
    "easy one-step cleaning",
    "hand-stitched detailing",
    "an energy-saving design",
    "a lifetime warranty",
];

/// Intended uses for descriptions
const PRODUCT_USES: &[&str] = &[
    "everyday use",
    "busy professionals",
    "weekend adventures",
    "the modern kitchen",
    "home offices",
    "outdoor enthusiasts",
    "growing families",
    "long commutes",
    "gift giving",
    "serious athletes",
];

/// Fake data generator over a caller-supplied RNG
pub struct FakeData<R: Rng> {
    rng: R,
}

impl<R: Rng> FakeData<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Uniform integer in the closed interval `[min, max]`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn random_int(&mut self, min: i64, max: i64) -> i64 {
        self.rng.random_range(min..=max)
    }

    /// Uniform index in `[0, len - 1]`. `len` must be non-zero.
    pub fn random_index(&mut self, len: u64) -> u64 {
        self.rng.random_range(0..len)
    }

    pub fn first_name(&mut self) -> String {
        FirstName().fake_with_rng(&mut self.rng)
    }

    pub fn last_name(&mut self) -> String {
        LastName().fake_with_rng(&mut self.rng)
    }

    pub fn email(&mut self) -> String {
        SafeEmail().fake_with_rng(&mut self.rng)
    }

    pub fn country(&mut self) -> String {
        CountryName().fake_with_rng(&mut self.rng)
    }

    /// Generate a product name ("<adjective> <material> <noun>")
    pub fn product_name(&mut self) -> String {
        let adj = self.pick(PRODUCT_ADJECTIVES);
        let material = self.pick(PRODUCT_MATERIALS);
        let noun = self.pick(PRODUCT_NOUNS);
        format!("{} {} {}", adj, material, noun)
    }

    /// Generate a one-sentence product description
    pub fn product_description(&mut self) -> String {
        let adj = self.pick(PRODUCT_ADJECTIVES).to_lowercase();
        let noun = self.pick(PRODUCT_NOUNS).to_lowercase();
        let material = self.pick(PRODUCT_MATERIALS).to_lowercase();
        let feature = self.pick(PRODUCT_FEATURES);
        let usage = self.pick(PRODUCT_USES);
        format!(
            "The {} {} pairs {} construction with {}, made for {}.",
            adj, noun, material, feature, usage
        )
    }

    /// Generate a price with two decimal places, never above `max`
    pub fn price(&mut self, min: f64, max: f64) -> f64 {
        let value = self.rng.random_range(min..=max);
        ((value * 100.0).round() / 100.0).min(max)
    }

    pub fn isbn(&mut self) -> String {
        Isbn13().fake_with_rng(&mut self.rng)
    }

    /// Timestamp within the last `days` days of `now`, both ends inclusive
    pub fn recent(&mut self, days: u32, now: DateTime<Utc>) -> DateTime<Utc> {
        let span = i64::from(days) * MILLIS_PER_DAY;
        now - Duration::milliseconds(self.rng.random_range(0..=span))
    }

    /// Timestamp strictly before `now`, at most `years` years back
    pub fn past(&mut self, years: u32, now: DateTime<Utc>) -> DateTime<Utc> {
        let span = (i64::from(years) * 365 * MILLIS_PER_DAY).max(1);
        now - Duration::milliseconds(self.rng.random_range(1..=span))
    }

    /// Generate a boolean with given probability of true
    pub fn bool_with_probability(&mut self, probability: f64) -> bool {
        self.rng.random_bool(probability)
    }

    /// Pick a random element from a slice
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.rng.random_range(0..items.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fake(seed: u64) -> FakeData<StdRng> {
        FakeData::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_deterministic_generation() {
        let mut fake1 = fake(42);
        let mut fake2 = fake(42);

        assert_eq!(fake1.first_name(), fake2.first_name());
        assert_eq!(fake1.product_name(), fake2.product_name());
        assert_eq!(fake1.price(1.0, 60.0), fake2.price(1.0, 60.0));
        assert_eq!(fake1.isbn(), fake2.isbn());
    }

    #[test]
    fn test_random_int_degenerate_range() {
        let mut fake = fake(1);
        for _ in 0..1000 {
            assert_eq!(fake.random_int(5, 5), 5);
            assert_eq!(fake.random_int(0, 0), 0);
        }
    }

    #[test]
    fn test_random_int_inclusive_bounds() {
        let mut fake = fake(7);
        let mut seen = [false; 2];
        for _ in 0..1000 {
            let v = fake.random_int(0, 1);
            assert!(v == 0 || v == 1, "out of range: {}", v);
            seen[v as usize] = true;
        }
        assert!(seen[0] && seen[1], "both bounds should be reachable");

        let mut seen = [false; 3];
        for _ in 0..1000 {
            let v = fake.random_int(1, 3);
            assert!((1..=3).contains(&v));
            seen[(v - 1) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_random_index_in_range() {
        let mut fake = fake(3);
        for _ in 0..1000 {
            assert!(fake.random_index(10) < 10);
            assert_eq!(fake.random_index(1), 0);
        }
    }

    #[test]
    fn test_price_precision_and_cap() {
        let mut fake = fake(42);
        for _ in 0..1000 {
            let price = fake.price(1.0, 60.0);
            assert!((0.0..=60.0).contains(&price), "price {}", price);
            assert_eq!(price, (price * 100.0).round() / 100.0);
        }
    }

    #[test]
    fn test_recent_within_window() {
        let mut fake = fake(9);
        let now = Utc::now();
        for _ in 0..1000 {
            let ts = fake.recent(30, now);
            assert!(ts <= now);
            assert!(ts >= now - Duration::days(30));
        }
    }

    #[test]
    fn test_past_strictly_before_now() {
        let mut fake = fake(11);
        let now = Utc::now();
        for _ in 0..1000 {
            let ts = fake.past(1, now);
            assert!(ts < now);
            assert!(ts >= now - Duration::days(365));
        }
    }

    #[test]
    fn test_bool_probability() {
        let mut fake = fake(5);
        let trues = (0..10_000)
            .filter(|_| fake.bool_with_probability(0.9))
            .count();
        // 0.9 * 10k with generous slack
        assert!((8_700..=9_300).contains(&trues), "trues = {}", trues);
    }

    #[test]
    fn test_product_name_shape() {
        let mut fake = fake(13);
        let name = fake.product_name();
        assert_eq!(name.split(' ').count(), 3);
    }

    #[test]
    fn test_product_description_is_commerce_sentence() {
        let mut fake = fake(19);
        for _ in 0..100 {
            let description = fake.product_description();
            assert!(description.starts_with("The "), "{}", description);
            assert!(description.ends_with('.'), "{}", description);
            assert!(description.contains(" construction with "));
            assert!(PRODUCT_USES.iter().any(|u| description.contains(u)));
        }
    }

    #[test]
    fn test_email_has_domain() {
        let mut fake = fake(17);
        assert!(fake.email().contains('@'));
    }
}
