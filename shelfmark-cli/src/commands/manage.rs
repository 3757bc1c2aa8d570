//! Adding, removing and editing books

use anyhow::Result;
use shelfmark_core::{Catalog, Record};
use std::io::Write;

/// Add a book, refusing identifiers already in the catalog
pub fn add(catalog: &mut Catalog, out: &mut dyn Write, record: Record) -> Result<()> {
    if catalog.contains(record.identifier()) {
        writeln!(
            out,
            "Add failed: identifier {} already exists",
            record.identifier()
        )?;
        return Ok(());
    }

    let title = record.title().to_string();
    let identifier = record.identifier().to_string();
    match catalog.add(record) {
        Ok(()) => writeln!(out, "Added {} ({})", title, identifier)?,
        // The rejected record is dropped with the error
        Err(e) => writeln!(out, "Add failed: {}", e)?,
    }
    Ok(())
}

pub fn remove(catalog: &mut Catalog, out: &mut dyn Write, identifier: &str) -> Result<()> {
    match catalog.remove(identifier) {
        Ok(record) => writeln!(out, "Removed {} ({})", record.title(), record.identifier())?,
        Err(e) => writeln!(out, "Remove failed: {}", e)?,
    }
    Ok(())
}

pub fn set_price(
    catalog: &mut Catalog,
    out: &mut dyn Write,
    identifier: &str,
    price: f64,
) -> Result<()> {
    match catalog.update_price(identifier, price) {
        Ok(()) => writeln!(out, "Updated price of {} to {:.2}", identifier, price)?,
        Err(e) => writeln!(out, "Update failed: {}", e)?,
    }
    Ok(())
}

pub fn set_year(catalog: &mut Catalog, out: &mut dyn Write, identifier: &str, year: i32) -> Result<()> {
    match catalog.update_year(identifier, year) {
        Ok(()) => writeln!(out, "Updated year of {} to {}", identifier, year)?,
        Err(e) => writeln!(out, "Update failed: {}", e)?,
    }
    Ok(())
}
