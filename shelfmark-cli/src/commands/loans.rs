//! Borrow and return

use anyhow::Result;
use shelfmark_core::Catalog;
use std::io::Write;

pub fn borrow(catalog: &mut Catalog, out: &mut dyn Write, identifier: &str) -> Result<()> {
    match catalog.borrow(identifier) {
        Ok(()) => writeln!(out, "Borrowed {}", identifier)?,
        Err(e) => writeln!(out, "Borrow failed: {}", e)?,
    }
    Ok(())
}

/// Return a lent book
pub fn give_back(catalog: &mut Catalog, out: &mut dyn Write, identifier: &str) -> Result<()> {
    match catalog.return_item(identifier) {
        Ok(()) => writeln!(out, "Returned {}", identifier)?,
        Err(e) => writeln!(out, "Return failed: {}", e)?,
    }
    Ok(())
}
