//! Loading of tab-separated title tables, optionally gzip-compressed.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use flate2::read::GzDecoder;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use aspectra_core::schema::{coerce_record_id, RECORD_ID_FIELD, TAG_FIELD, TOKEN_FIELD};
use aspectra_core::{RawTaggedRow, RecordId};

use crate::error::{DataError, Result};

/// Column holding the full listing title.
pub const TITLE_FIELD: &str = "Title";

/// One row of the listing titles table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingTitle {
    pub record_id: RecordId,
    pub title: String,
}

/// Open a table file, decompressing it when the name ends in `.gz`.
pub fn open_table<P: AsRef<Path>>(path: P) -> Result<Box<dyn Read>> {
    let path = path.as_ref();
    let file = BufReader::new(File::open(path)?);
    let gzipped = path.extension().is_some_and(|ext| ext == "gz");

    if gzipped {
        Ok(Box::new(GzDecoder::new(file)))
    } else {
        Ok(Box::new(file))
    }
}

/// Column positions resolved from the header row.
struct Columns {
    width: usize,
    indices: Vec<Option<usize>>,
}

impl Columns {
    fn resolve(headers: &StringRecord, required: &[&'static str], optional: &[&str]) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);

        let mut indices = Vec::with_capacity(required.len() + optional.len());
        for &column in required {
            indices.push(Some(find(column).ok_or(DataError::MissingColumn { column })?));
        }
        indices.extend(optional.iter().map(|&column| find(column)));

        Ok(Self {
            width: headers.len(),
            indices,
        })
    }

    /// Cell `n` of `record`; empty cells count as absent.
    fn cell(&self, record: &StringRecord, n: usize) -> Option<String> {
        let idx = self.indices[n]?;
        record
            .get(idx)
            .filter(|value| !value.is_empty())
            .map(String::from)
    }
}

/// Iterate data records, skipping lines with more fields than the header.
///
/// Short lines are kept; their missing trailing cells read as absent.
fn for_each_record<R, F>(reader: R, required: &[&'static str], optional: &[&str], mut f: F) -> Result<()>
where
    R: Read,
    F: FnMut(&Columns, &StringRecord, usize),
{
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .flexible(true)
        .from_reader(reader);

    let columns = Columns::resolve(reader.headers()?, required, optional)?;
    let mut skipped = 0usize;

    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |pos| pos.line() as usize);
        if record.len() > columns.width {
            warn!(line, fields = record.len(), expected = columns.width, "skipping bad line");
            skipped += 1;
            continue;
        }
        f(&columns, &record, line);
    }

    if skipped > 0 {
        warn!(skipped, "skipped lines with too many fields");
    }
    Ok(())
}

/// Read the tagged titles table (`Record Number`, `Title`, `Token`, `Tag`).
///
/// `Title` is optional; the other three columns are required.
pub fn read_tagged_titles<R: Read>(reader: R) -> Result<Vec<RawTaggedRow>> {
    let mut rows = Vec::new();

    for_each_record(
        reader,
        &[RECORD_ID_FIELD, TOKEN_FIELD, TAG_FIELD],
        &[TITLE_FIELD],
        |columns, record, line| {
            rows.push(RawTaggedRow {
                line,
                record_id: columns.cell(record, 0),
                token: columns.cell(record, 1),
                tag: columns.cell(record, 2),
                title: columns.cell(record, 3),
            });
        },
    )?;

    Ok(rows)
}

/// Read the listing titles table (`Record Number`, `Title`).
///
/// Rows without a numeric record id are skipped.
pub fn read_listing_titles<R: Read>(reader: R) -> Result<Vec<ListingTitle>> {
    let mut titles = Vec::new();

    for_each_record(
        reader,
        &[RECORD_ID_FIELD, TITLE_FIELD],
        &[],
        |columns, record, line| {
            let record_id = columns.cell(record, 0).as_deref().and_then(coerce_record_id);
            match record_id {
                Some(record_id) => titles.push(ListingTitle {
                    record_id,
                    title: columns.cell(record, 1).unwrap_or_default(),
                }),
                None => warn!(line, "skipping listing title without a numeric record id"),
            }
        },
    )?;

    Ok(titles)
}

/// Load the tagged titles table from disk.
pub fn load_tagged_titles<P: AsRef<Path>>(path: P) -> Result<Vec<RawTaggedRow>> {
    let path = path.as_ref();
    let rows = read_tagged_titles(open_table(path)?)?;
    info!(path = %path.display(), rows = rows.len(), "loaded tagged titles");
    Ok(rows)
}

/// Load the listing titles table from disk.
pub fn load_listing_titles<P: AsRef<Path>>(path: P) -> Result<Vec<ListingTitle>> {
    let path = path.as_ref();
    let titles = read_listing_titles(open_table(path)?)?;
    info!(path = %path.display(), rows = titles.len(), "loaded listing titles");
    Ok(titles)
}
