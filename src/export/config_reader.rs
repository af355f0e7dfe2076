use crate::args::Args;
use crate::export::*;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// The settings that can be stored in a JSON configuration file.
#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(rename = "inputPath")]
    pub input_path: Option<String>,
    #[serde(rename = "outputPath")]
    pub output_path: Option<String>,
    #[serde(rename = "inputType")]
    pub input_type: Option<String>,
    #[serde(rename = "excelWorksheetName")]
    pub excel_worksheet_name: Option<String>,
    #[serde(rename = "skipMalformedRows")]
    pub skip_malformed_rows: Option<bool>,
    #[serde(rename = "referencePath")]
    pub reference_path: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum InputType {
    Csv,
    Xlsx,
}

impl InputType {
    pub fn parse(s: &str) -> ExportResult<InputType> {
        match s {
            "csv" => Ok(InputType::Csv),
            "xlsx" => Ok(InputType::Xlsx),
            x => UnknownInputTypeSnafu { input_type: x }.fail(),
        }
    }
}

/// What to do with a row whose ranked-choice field cannot be parsed.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum MalformedRowPolicy {
    /// Stop the export, nothing is written.
    Abort,
    /// Report the row and leave it out of the output.
    Skip,
}

/// The resolved settings of one export.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ExportSettings {
    pub input_path: String,
    pub output_path: String,
    pub input_type: InputType,
    pub excel_worksheet_name: Option<String>,
    pub malformed_policy: MalformedRowPolicy,
    pub reference_path: Option<String>,
}

impl ExportSettings {
    /// Merges the command line with the configuration file, if any.
    ///
    /// The command line takes precedence. The output path falls back to
    /// [`DEFAULT_OUTPUT_PATH`] only when no output path is given anywhere.
    pub fn from_args(args: &Args) -> BExportResult<ExportSettings> {
        let config = match &args.config {
            Some(config_path) => read_config(config_path)?,
            None => ExportConfig::default(),
        };
        debug!("from_args: config: {:?}", config);

        let input_path = args
            .input
            .clone()
            .or(config.input_path)
            .context(MissingInputSnafu {})?;
        let output_path = args
            .out
            .clone()
            .or_else(|| args.output.clone())
            .or(config.output_path)
            .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());
        let input_type = match args.input_type.clone().or(config.input_type) {
            Some(s) => InputType::parse(&s)?,
            None => InputType::Csv,
        };
        let malformed_policy = if args.abort_on_malformed {
            MalformedRowPolicy::Abort
        } else if args.skip_malformed || config.skip_malformed_rows.unwrap_or(false) {
            MalformedRowPolicy::Skip
        } else {
            MalformedRowPolicy::Abort
        };

        Ok(ExportSettings {
            input_path,
            output_path,
            input_type,
            excel_worksheet_name: args
                .excel_worksheet_name
                .clone()
                .or(config.excel_worksheet_name),
            malformed_policy,
            reference_path: args.reference.clone().or(config.reference_path),
        })
    }
}

/// Reads a configuration file. The relative paths it contains are resolved
/// against the directory of the file.
pub fn read_config(path: &str) -> BExportResult<ExportConfig> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let config: ExportConfig =
        serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    let root = Path::new(path).parent().context(MissingParentDirSnafu {})?;
    info!("config: {:?}", config);
    Ok(ExportConfig {
        input_path: config.input_path.map(|p| resolve_path(root, &p)),
        output_path: config.output_path.map(|p| resolve_path(root, &p)),
        reference_path: config.reference_path.map(|p| resolve_path(root, &p)),
        ..config
    })
}

fn resolve_path(root: &Path, path: &str) -> String {
    if path == STDOUT_PATH || Path::new(path).is_absolute() {
        path.to_string()
    } else {
        root.join(path).display().to_string()
    }
}
