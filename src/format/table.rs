//! Fixed-width table rendering.

use std::fmt;
use std::io::{self, Write};

use crate::record::Record;

/// Width every field is right-aligned to.
pub const COLUMN_WIDTH: usize = 25;

/// Column titles, rendered as the first row.
pub const HEADER: [&str; 3] = ["id", "listId", "name"];

struct Row<'a> {
    fields: [&'a str; 3],
}

impl fmt::Display for Row<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in self.fields {
            // Longer fields widen the row instead of being cut.
            write!(f, "{:>width$}", field, width = COLUMN_WIDTH)?;
        }
        writeln!(f)
    }
}

fn write_rows<W: fmt::Write>(out: &mut W, records: &[Record]) -> fmt::Result {
    write!(out, "{}", Row { fields: HEADER })?;
    for record in records {
        let id = record.id().to_string();
        let group_id = record.group_id().to_string();
        write!(
            out,
            "{}",
            Row {
                fields: [id.as_str(), group_id.as_str(), record.name()],
            }
        )?;
    }
    Ok(())
}

/// Render the header plus one row per record, in the order given.
pub fn render_table(records: &[Record]) -> String {
    let mut out = String::with_capacity((records.len() + 1) * (3 * COLUMN_WIDTH + 1));
    // Formatting into a String cannot fail.
    let _ = write_rows(&mut out, records);
    out
}

/// Render straight into a writer.
pub fn write_table<W: Write>(writer: &mut W, records: &[Record]) -> io::Result<()> {
    writer.write_all(render_table(records).as_bytes())?;
    writer.flush()
}
