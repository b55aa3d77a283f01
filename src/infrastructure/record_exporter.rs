//! CSV and JSON output for scraped records
//!
//! Pure formatting over an already-built record list. Both writers keep the
//! input order and the `GameRecord::FIELD_NAMES` column order, and both
//! surface any write failure to the caller.

use crate::domain::GameRecord;
use crate::infrastructure::scraping_error::{ExportError, ExportResult};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Write a header row plus one row per record.
///
/// Fields containing the delimiter, a quote, CR or LF are quoted and inner
/// quotes doubled. An empty slice still produces the header row.
pub fn write_csv(records: &[GameRecord], path: impl AsRef<Path>) -> ExportResult<()> {
    let path = path.as_ref();
    let file = create_file(path)?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    let csv_error = |source: csv::Error| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    };

    writer.write_record(GameRecord::FIELD_NAMES).map_err(csv_error)?;
    for record in records {
        writer.write_record(record.values()).map_err(csv_error)?;
    }
    writer.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Saved {} games to {}", records.len(), path.display());
    Ok(())
}

/// Write a pretty-printed JSON array, one object per record.
///
/// Non-ASCII text is written as UTF-8, not as `\u` escapes.
pub fn write_json(records: &[GameRecord], path: impl AsRef<Path>) -> ExportResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(create_file(path)?);

    serde_json::to_writer_pretty(&mut writer, records).map_err(|source| ExportError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Saved {} games to {}", records.len(), path.display());
    Ok(())
}

fn create_file(path: &Path) -> ExportResult<File> {
    File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}
