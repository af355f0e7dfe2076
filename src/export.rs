use log::{debug, info, warn};

use ranked_field::builder::Builder;
use ranked_field::*;
use snafu::{prelude::*, Snafu};

use std::fs;
use text_diff::print_diff;

pub mod config_reader;
pub mod io_common;
pub mod io_csv;
pub mod io_xlsx;

use crate::export::config_reader::*;

/// Position (counting from 0) of the column holding the ranked-choice answers in
/// the form export. The column is fixed by the export format of the form.
pub const RANKED_CHOICE_COLUMN_INDEX: usize = 20;

/// Where the table is written when no output path is given.
pub const DEFAULT_OUTPUT_PATH: &str = "./output/rank-choice.csv";

/// Output path value that writes the table to the standard output.
pub const STDOUT_PATH: &str = "stdout";

#[derive(Debug, Snafu)]
pub enum ExportError {
    #[snafu(display("No input file was provided"))]
    MissingInput {},
    #[snafu(display("Unknown input type {input_type:?} (expected csv or xlsx)"))]
    UnknownInputType { input_type: String },
    #[snafu(display("Error opening file {path}: {source}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing the configuration: {source}"))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("Cannot find the directory of the configuration file"))]
    MissingParentDir {},

    #[snafu(display("Error opening file {path}: {source}"))]
    CsvOpen { source: csv::Error, path: String },
    #[snafu(display("Line {lineno} has {len} fields, the ranked-choice field is expected in column {}", RANKED_CHOICE_COLUMN_INDEX + 1))]
    RowTooShort { lineno: usize, len: usize },
    #[snafu(display("Error writing csv: {source}"))]
    CsvWrite { source: csv::Error },
    #[snafu(display("Error writing csv: {source}"))]
    CsvFlush { source: std::io::Error },

    #[snafu(display("Error opening file {path}: {source}"))]
    OpeningExcel {
        source: calamine::XlsxError,
        path: String,
    },
    #[snafu(display("The workbook has no worksheet or no data"))]
    EmptyExcel {},
    #[snafu(display("Several worksheets found in {path}, the worksheet name must be provided"))]
    ExcelTooManyWorksheets { path: String },
    #[snafu(display("Line {lineno}: unexpected cell type {content}"))]
    ExcelWrongCellType { lineno: u64, content: String },

    #[snafu(display("Line {lineno}: could not parse the ranked-choice field: {source}"))]
    MalformedField { source: FieldError, lineno: usize },

    #[snafu(display("Failed creating file {path}: {source}"))]
    CreateOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Failed writing file {path}: {source}"))]
    WriteOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error opening reference file {path}: {source}"))]
    OpeningReference {
        source: std::io::Error,
        path: String,
    },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type ExportResult<T> = Result<T, ExportError>;
pub type BExportResult<T> = Result<T, Box<ExportError>>;

/// The ranked-choice field of one data row, as read from the input.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct RankedCell {
    /// Line of the row in the input, starting at 1 with the header.
    pub lineno: usize,
    pub content: String,
}

#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct ExportSummary {
    pub rows: usize,
    pub records: usize,
    /// Lines of the malformed rows that were left out.
    pub skipped: Vec<usize>,
}

fn read_ranked_cells(settings: &ExportSettings) -> BExportResult<Vec<RankedCell>> {
    info!(
        "Attempting to read {:?} file {:?}",
        settings.input_type, settings.input_path
    );
    match settings.input_type {
        InputType::Csv => io_csv::read_csv_ranking(&settings.input_path),
        InputType::Xlsx => io_xlsx::read_xlsx_ranking(
            &settings.input_path,
            settings.excel_worksheet_name.as_deref(),
        ),
    }
}

/// Parses all the cells, in order.
///
/// Under the abort policy, the first malformed cell stops the parsing. Under the
/// skip policy, the malformed cells contribute no record.
pub fn collect_records(
    cells: &[RankedCell],
    policy: MalformedRowPolicy,
) -> BExportResult<(Builder, Vec<usize>)> {
    let mut builder = Builder::new();
    let mut skipped: Vec<usize> = Vec::new();
    for cell in cells {
        match builder.add_cell(&cell.content) {
            Ok(n) => {
                debug!("collect_records: lineno: {:?} records: {:?}", cell.lineno, n);
            }
            Err(e) if policy == MalformedRowPolicy::Skip => {
                warn!(
                    "collect_records: skipping malformed row at line {}: {}",
                    cell.lineno, e
                );
                skipped.push(cell.lineno);
            }
            Err(source) => {
                return Err(Box::new(ExportError::MalformedField {
                    source,
                    lineno: cell.lineno,
                }));
            }
        }
    }
    Ok((builder, skipped))
}

fn check_reference(reference_path: &str, rendered: &str) -> ExportResult<()> {
    let reference = fs::read_to_string(reference_path).context(OpeningReferenceSnafu {
        path: reference_path,
    })?;
    let reference = reference.replace("\r\n", "\n");
    if reference != rendered {
        warn!("Found differences with the reference file {}", reference_path);
        print_diff(reference.as_str(), rendered, "\n");
        whatever!(
            "Difference detected between the exported table and reference {}",
            reference_path
        )
    }
    info!("The exported table matches the reference {}", reference_path);
    Ok(())
}

/// Runs a full export: reads the input, parses every ranked-choice field and
/// writes the (Rank, Item) table.
///
/// Nothing is written if a row fails to parse under the abort policy.
pub fn run_export(settings: &ExportSettings) -> BExportResult<ExportSummary> {
    debug!("run_export: settings: {:?}", settings);
    let cells = read_ranked_cells(settings)?;
    info!("Read {} rows from {}", cells.len(), settings.input_path);

    let (builder, skipped) = collect_records(&cells, settings.malformed_policy)?;
    let summary = ExportSummary {
        rows: cells.len(),
        records: builder.len(),
        skipped,
    };

    let table = builder.build();
    let rendered = io_csv::render_csv(&table)?;
    io_common::write_output(&settings.output_path, &rendered)?;
    info!(
        "Wrote {} records to {}",
        summary.records, settings.output_path
    );

    if let Some(reference_path) = &settings.reference_path {
        check_reference(reference_path, &String::from_utf8_lossy(&rendered))?;
    }

    Ok(summary)
}
