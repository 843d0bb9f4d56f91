//! CSV output.
//!
//! RULE: Only writer.rs touches the output file.
//! The generator returns records; it never performs I/O.

use crate::{
    case::CaseRecord,
    error::{GenError, GenResult},
};
use std::{
    fs::File,
    io::{BufWriter, Write},
};

/// Write the header row, then one row per record, to any sink.
pub fn write_csv<W: Write>(records: &[CaseRecord], mut out: W) -> GenResult<()> {
    writeln!(out, "{}", CaseRecord::csv_header())?;
    for record in records {
        writeln!(out, "{}", record.csv_row())?;
    }
    out.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write the full table to it.
///
/// The file is opened once and closed when this returns. On failure a
/// partially written file may be left behind.
pub fn write_csv_file(path: &str, records: &[CaseRecord]) -> GenResult<()> {
    let output_error = |source: std::io::Error| GenError::Output { path: path.to_string(), source };

    let file = File::create(path).map_err(output_error)?;
    match write_csv(records, BufWriter::new(file)) {
        Ok(()) => {}
        Err(GenError::Io(source)) => return Err(output_error(source)),
        Err(other) => return Err(other),
    }

    log::info!("wrote {} rows to {path}", records.len());
    Ok(())
}
