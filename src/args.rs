use clap::Parser;

/// This program exports the ranked-choice answers of a form to a flat CSV file.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path) The export containing the answers. The ranked-choice field is read from
    /// column 21 (index 20) of every row after the header.
    #[clap(value_parser)]
    pub input: Option<String>,

    /// (file path or 'stdout', default ./output/rank-choice.csv) Where to write the (Rank, Item) table.
    #[clap(value_parser)]
    pub output: Option<String>,

    /// (file path, optional) A JSON file containing the export settings.
    /// Options passed on the command line override the values in this file.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (file path or 'stdout') Same as the second positional argument. Takes precedence over it.
    /// When the input path comes from the --config file, use this option to set the output: a
    /// single positional argument is always read as the input path.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) A reference CSV file. If provided, rcexport will check that the exported
    /// table matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// (default csv) The type of the input: csv or xlsx.
    #[clap(long, value_parser)]
    pub input_type: Option<String>,

    /// When using an Excel file, indicates the name of the worksheet to use.
    #[clap(long, value_parser)]
    pub excel_worksheet_name: Option<String>,

    /// If passed, the malformed answers are reported and left out of the output instead of
    /// stopping the export.
    #[clap(long, takes_value = false)]
    pub skip_malformed: bool,

    /// If passed, the first malformed answer stops the export, even if the configuration file
    /// sets skipMalformedRows. This is the default without configuration file.
    #[clap(long, takes_value = false)]
    pub abort_on_malformed: bool,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
