//! A single catalog entry

use crate::error::RecordError;
use serde::Serialize;
use std::fmt;

/// Longest title kept, in characters
pub const MAX_TITLE_LEN: usize = 99;

/// Longest author name kept, in characters
pub const MAX_AUTHOR_LEN: usize = 49;

/// Longest identifier kept, in characters (an ISBN-13 fits exactly)
pub const MAX_IDENTIFIER_LEN: usize = 13;

/// Latest publication year accepted by [`Record::update_year`].
///
/// This is a fixed policy constant. It does not follow the wall clock.
pub const MAX_PUBLICATION_YEAR: i32 = 2024;

/// A book in the catalog
///
/// Records know nothing about the catalog that holds them. Text fields are
/// truncated to their bounds on construction and never exceed them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    title: String,
    author: String,
    identifier: String,
    year: i32,
    price: f64,
    available: bool,
}

impl Record {
    /// Create an available record.
    ///
    /// Year, price and identifier format are not validated here; oversized
    /// text is cut at its bound.
    pub fn new(
        title: impl AsRef<str>,
        author: impl AsRef<str>,
        identifier: impl AsRef<str>,
        year: i32,
        price: f64,
    ) -> Self {
        Self {
            title: truncate(title.as_ref(), MAX_TITLE_LEN),
            author: truncate(author.as_ref(), MAX_AUTHOR_LEN),
            identifier: truncate(identifier.as_ref(), MAX_IDENTIFIER_LEN),
            year,
            price,
            available: true,
        }
    }

    /// Override the initial availability
    pub fn with_availability(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// Set a new price. Zero, negative and NaN prices are rejected.
    pub fn update_price(&mut self, price: f64) -> Result<(), RecordError> {
        if price.is_nan() || price <= 0.0 {
            return Err(RecordError::InvalidPrice(price));
        }
        self.price = price;
        Ok(())
    }

    /// Set a new publication year in `1..=MAX_PUBLICATION_YEAR`
    pub fn update_year(&mut self, year: i32) -> Result<(), RecordError> {
        if year <= 0 || year > MAX_PUBLICATION_YEAR {
            return Err(RecordError::InvalidYear {
                year,
                max: MAX_PUBLICATION_YEAR,
            });
        }
        self.year = year;
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title:      {}", self.title)?;
        writeln!(f, "Author:     {}", self.author)?;
        writeln!(f, "Identifier: {}", self.identifier)?;
        writeln!(f, "Year:       {}", self.year)?;
        writeln!(f, "Price:      {:.2}", self.price)?;
        write!(
            f,
            "Status:     {}",
            if self.available { "available" } else { "on loan" }
        )
    }
}

/// Cut `s` to at most `max` characters, on a char boundary
fn truncate(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((end, _)) => s[..end].to_string(),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record::new(
            "Introduction to Algorithms",
            "Thomas H. Cormen",
            "9787111187776",
            2006,
            89.5,
        )
    }

    #[test]
    fn test_record_creation() {
        let record = sample();
        assert_eq!(record.title(), "Introduction to Algorithms");
        assert_eq!(record.author(), "Thomas H. Cormen");
        assert_eq!(record.identifier(), "9787111187776");
        assert_eq!(record.year(), 2006);
        assert_eq!(record.price(), 89.5);
        assert!(record.is_available());
    }

    #[test]
    fn test_creation_does_not_validate() {
        let record = Record::new("Old", "Anon", "x", -3, -1.0);
        assert_eq!(record.year(), -3);
        assert_eq!(record.price(), -1.0);
    }

    #[test]
    fn test_with_availability() {
        let record = sample().with_availability(false);
        assert!(!record.is_available());
    }

    #[test]
    fn test_truncation() {
        let long_title = "t".repeat(150);
        let long_author = "a".repeat(80);
        let record = Record::new(&long_title, &long_author, "97871114954820000", 2015, 1.0);
        assert_eq!(record.title().len(), MAX_TITLE_LEN);
        assert_eq!(record.author().len(), MAX_AUTHOR_LEN);
        assert_eq!(record.identifier(), "9787111495482");
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let title = "深".repeat(MAX_TITLE_LEN + 5);
        let record = Record::new(&title, "谭浩强", "9787111495482", 2015, 39.8);
        assert_eq!(record.title().chars().count(), MAX_TITLE_LEN);
        assert_eq!(record.author(), "谭浩强");
    }

    #[test]
    fn test_update_price() {
        let mut record = sample();
        assert!(record.update_price(120.25).is_ok());
        assert_eq!(record.price(), 120.25);

        assert_eq!(record.update_price(0.0), Err(RecordError::InvalidPrice(0.0)));
        assert!(record.update_price(-4.0).is_err());
        assert!(record.update_price(f64::NAN).is_err());
        assert_eq!(record.price(), 120.25);
    }

    #[test]
    fn test_update_year() {
        let mut record = sample();
        assert!(record.update_year(1999).is_ok());
        assert_eq!(record.year(), 1999);

        assert!(record.update_year(MAX_PUBLICATION_YEAR).is_ok());
        assert!(record.update_year(MAX_PUBLICATION_YEAR + 1).is_err());
        assert!(record.update_year(0).is_err());
        assert!(record.update_year(-12).is_err());
        assert_eq!(record.year(), MAX_PUBLICATION_YEAR);
    }

    #[test]
    fn test_set_available() {
        let mut record = sample();
        record.set_available(false);
        assert!(!record.is_available());
        record.set_available(false);
        assert!(!record.is_available());
        record.set_available(true);
        assert!(record.is_available());
    }

    #[test]
    fn test_display() {
        let text = sample().with_availability(false).to_string();
        assert!(text.contains("Title:      Introduction to Algorithms"));
        assert!(text.contains("Price:      89.50"));
        assert!(text.ends_with("Status:     on loan"));
    }

    #[test]
    fn test_record_serialization() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["identifier"], "9787111187776");
        assert_eq!(json["available"], true);
    }
}
