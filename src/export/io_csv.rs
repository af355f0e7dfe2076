// Primitives for reading and writing CSV files.

use std::io;

use log::error;
use ranked_field::Table;

use crate::export::{io_common::ranked_cell, *};

pub fn read_csv_ranking(path: &str) -> BExportResult<Vec<RankedCell>> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .context(CsvOpenSnafu { path })?;
    read_csv_records(rdr)
}

/// Reads the ranked-choice field of every row after the header.
///
/// A row that cannot be read (bad quoting, unequal number of fields, invalid
/// UTF-8) ends the reading: the error is logged and the rows read so far are
/// returned.
pub fn read_csv_records<R: io::Read>(rdr: csv::Reader<R>) -> BExportResult<Vec<RankedCell>> {
    let mut res: Vec<RankedCell> = Vec::new();
    for (idx, line_r) in rdr.into_records().enumerate() {
        let line = match line_r {
            Ok(line) => line,
            Err(e) => {
                error!(
                    "Error reading records after {} rows, the remaining rows are ignored: {}",
                    res.len(),
                    e
                );
                break;
            }
        };
        let lineno = line
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(idx + 1);
        // The first row is the header.
        if idx == 0 {
            debug!("read_csv_records: header: {:?}", line);
            continue;
        }
        let fields: Vec<&str> = line.iter().collect();
        let cell = ranked_cell(&fields, lineno)?;
        debug!("read_csv_records: lineno: {:?} cell: {:?}", lineno, cell);
        res.push(cell);
    }
    Ok(res)
}

/// Renders a table as CSV text, with `\n` line endings.
pub fn render_csv(table: &Table) -> BExportResult<Vec<u8>> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for row in table {
        wtr.write_record(row).context(CsvWriteSnafu {})?;
    }
    wtr.flush().context(CsvFlushSnafu {})?;
    let content = wtr
        .into_inner()
        .map_err(|e| e.into_error())
        .context(CsvFlushSnafu {})?;
    Ok(content)
}
