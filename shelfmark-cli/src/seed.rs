//! Sample books loaded at startup

use shelfmark_core::{Catalog, Record};

/// The books a fresh session starts with
pub fn sample_records() -> Vec<Record> {
    vec![
        Record::new("C Programming", "Tan Haoqiang", "9787111495482", 2015, 39.8),
        Record::new(
            "Introduction to Algorithms",
            "Thomas H. Cormen",
            "9787111187776",
            2006,
            89.0,
        ),
        Record::new(
            "Computer Systems: A Programmer's Perspective",
            "Randal E. Bryant",
            "9787111321330",
            2010,
            139.0,
        ),
    ]
}

/// Add the sample books, skipping any that do not fit
pub fn populate(catalog: &mut Catalog) {
    for record in sample_records() {
        if let Err(e) = catalog.add(record) {
            tracing::warn!(error = %e, "skipping sample book");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_populate() {
        let mut catalog = Catalog::new();
        populate(&mut catalog);
        assert_eq!(catalog.count(), 3);
        assert!(catalog.contains("9787111187776"));
    }

    #[test]
    fn test_populate_small_catalog() {
        let mut catalog = Catalog::with_capacity(1);
        populate(&mut catalog);
        assert_eq!(catalog.count(), 1);
        assert_eq!(catalog.list_all()[0].title(), "C Programming");
    }
}
