//! Listing, sorting and counting

use anyhow::Result;
use serde::Serialize;
use shelfmark_core::{Catalog, Record, SortKey};
use std::io::Write;

/// Listing output for `--json`
#[derive(Serialize)]
struct CatalogListing<'a> {
    count: usize,
    capacity: usize,
    books: &'a [Record],
}

pub fn list(catalog: &Catalog, out: &mut dyn Write, json: bool) -> Result<()> {
    if json {
        let listing = CatalogListing {
            count: catalog.count(),
            capacity: catalog.capacity(),
            books: catalog.list_all(),
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&listing)?)?;
        return Ok(());
    }

    writeln!(out, "Catalog holds {} books:", catalog.count())?;
    for (i, record) in catalog.iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "--- Book {} ---", i + 1)?;
        writeln!(out, "{}", record)?;
    }
    Ok(())
}

pub fn sort(catalog: &mut Catalog, out: &mut dyn Write, key: SortKey) -> Result<()> {
    catalog.sort_by(key);
    let field = match key {
        SortKey::Title => "title",
        SortKey::Author => "author",
    };
    writeln!(out, "Sorted by {}", field)?;
    list(catalog, out, false)
}

pub fn count(catalog: &Catalog, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Count: {}", catalog.count())?;
    Ok(())
}
