//! Finding single books

use anyhow::Result;
use shelfmark_core::{Catalog, CatalogError, Record};
use std::io::Write;

pub fn find(catalog: &Catalog, out: &mut dyn Write, identifier: &str, json: bool) -> Result<()> {
    match catalog.find_by_identifier(identifier) {
        Some(record) => show(out, record, json),
        None => {
            writeln!(out, "{}", CatalogError::NotFound(identifier.to_string()))?;
            Ok(())
        }
    }
}

pub fn search(catalog: &Catalog, out: &mut dyn Write, text: &str, json: bool) -> Result<()> {
    match catalog.find_by_title(text) {
        Some(record) => show(out, record, json),
        None => {
            writeln!(out, "{}", CatalogError::NoTitleMatch(text.to_string()))?;
            Ok(())
        }
    }
}

fn show(out: &mut dyn Write, record: &Record, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(record)?)?;
    } else {
        writeln!(out, "{}", record)?;
    }
    Ok(())
}
