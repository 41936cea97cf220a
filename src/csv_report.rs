use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// Writes `records` as a comma-delimited CSV file: a header row built from
/// `fields` (with at most one field renamed), then one row per record in
/// field order. `None` values come out as empty cells.
///
/// The output handle lives only for the duration of this call, so each
/// report file is closed independently of the others in a batch. I/O
/// failures propagate; this is the terminal sink.
pub fn write_records<T: Serialize>(
    path: impl AsRef<Path>,
    fields: &[&str],
    rename: Option<(&str, &str)>,
    records: &[T],
) -> Result<()> {
    let path = path.as_ref();
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    let header: Vec<&str> = fields
        .iter()
        .map(|&field| match rename {
            Some((from, to)) if field == from => to,
            _ => field,
        })
        .collect();
    writer
        .write_record(&header)
        .with_context(|| format!("failed to write header to {}", path.display()))?;

    for record in records {
        writer
            .serialize(record)
            .with_context(|| format!("failed to write row to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    Ok(())
}
