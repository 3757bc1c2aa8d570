//! Session command definitions and dispatch

mod listing;
mod loans;
mod lookup;
mod manage;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use shelfmark_core::{Catalog, Record, SortKey};
use std::io::Write;

/// Whether the session keeps reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One line of session input
#[derive(Parser, Debug)]
#[command(multicall = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new book
    Add {
        /// Book title
        title: String,

        /// Author name
        author: String,

        /// Unique identifier (ISBN)
        identifier: String,

        /// Publication year
        #[arg(long, allow_negative_numbers = true)]
        year: i32,

        /// Price
        #[arg(long, allow_negative_numbers = true)]
        price: f64,

        /// Add the book as already lent out
        #[arg(long)]
        borrowed: bool,
    },

    /// Remove a book by identifier
    Remove { identifier: String },

    /// Show the book with the given identifier
    Find {
        identifier: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the first book whose title contains the text
    Search {
        text: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Lend out a book
    Borrow { identifier: String },

    /// Take back a lent book
    Return { identifier: String },

    /// List all books in catalog order
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Sort the catalog and list it
    Sort {
        #[arg(value_enum)]
        field: SortField,
    },

    /// Change a book's price
    Price {
        identifier: String,

        #[arg(allow_negative_numbers = true)]
        price: f64,
    },

    /// Change a book's publication year
    Year {
        identifier: String,

        #[arg(allow_negative_numbers = true)]
        year: i32,
    },

    /// Show how many books are held
    Count,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// Sortable fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortField {
    Title,
    Author,
}

impl From<SortField> for SortKey {
    fn from(field: SortField) -> Self {
        match field {
            SortField::Title => SortKey::Title,
            SortField::Author => SortKey::Author,
        }
    }
}

/// Run a parsed command against the catalog
pub fn execute(command: Command, catalog: &mut Catalog, out: &mut dyn Write) -> Result<Flow> {
    match command {
        Command::Add {
            title,
            author,
            identifier,
            year,
            price,
            borrowed,
        } => {
            let record = Record::new(title, author, identifier, year, price)
                .with_availability(!borrowed);
            manage::add(catalog, out, record)?
        }

        Command::Remove { identifier } => manage::remove(catalog, out, &identifier)?,

        Command::Find { identifier, json } => lookup::find(catalog, out, &identifier, json)?,

        Command::Search { text, json } => lookup::search(catalog, out, &text, json)?,

        Command::Borrow { identifier } => loans::borrow(catalog, out, &identifier)?,

        Command::Return { identifier } => loans::give_back(catalog, out, &identifier)?,

        Command::List { json } => listing::list(catalog, out, json)?,

        Command::Sort { field } => listing::sort(catalog, out, field.into())?,

        Command::Price { identifier, price } => {
            manage::set_price(catalog, out, &identifier, price)?
        }

        Command::Year { identifier, year } => manage::set_year(catalog, out, &identifier, year)?,

        Command::Count => listing::count(catalog, out)?,

        Command::Quit => {
            writeln!(out, "Goodbye")?;
            return Ok(Flow::Quit);
        }
    }

    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        let line = SessionLine::try_parse_from([
            "add", "Title", "Author", "123", "--year", "2001", "--price", "9.5",
        ])
        .unwrap();
        match line.command {
            Command::Add {
                year,
                price,
                borrowed,
                ..
            } => {
                assert_eq!(year, 2001);
                assert_eq!(price, 9.5);
                assert!(!borrowed);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_negative_price() {
        let line = SessionLine::try_parse_from(["price", "123", "-2"]).unwrap();
        assert!(matches!(line.command, Command::Price { price, .. } if price == -2.0));
    }

    #[test]
    fn test_parse_sort_field() {
        let line = SessionLine::try_parse_from(["sort", "author"]).unwrap();
        assert!(matches!(
            line.command,
            Command::Sort {
                field: SortField::Author
            }
        ));
        assert!(SessionLine::try_parse_from(["sort", "price"]).is_err());
    }

    #[test]
    fn test_add_requires_year_and_price() {
        assert!(SessionLine::try_parse_from(["add", "T", "A", "1"]).is_err());
    }
}
