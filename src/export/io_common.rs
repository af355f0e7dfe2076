use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::export::*;

/// Picks the ranked-choice field out of a row.
pub fn ranked_cell<S: AsRef<str>>(fields: &[S], lineno: usize) -> ExportResult<RankedCell> {
    let content = fields
        .get(RANKED_CHOICE_COLUMN_INDEX)
        .context(RowTooShortSnafu {
            lineno,
            len: fields.len(),
        })?;
    Ok(RankedCell {
        lineno,
        content: content.as_ref().to_string(),
    })
}

/// Writes the rendered table to a file, or to the standard output for [`STDOUT_PATH`].
/// Missing parent directories are created.
pub fn write_output(path: &str, content: &[u8]) -> BExportResult<()> {
    if path == STDOUT_PATH {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(content).context(WriteOutputSnafu { path })?;
        handle.flush().context(WriteOutputSnafu { path })?;
        return Ok(());
    }

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("write_output: creating directory {:?}", parent);
            fs::create_dir_all(parent).context(CreateOutputSnafu { path })?;
        }
    }
    let mut file = File::create(path).context(CreateOutputSnafu { path })?;
    file.write_all(content).context(WriteOutputSnafu { path })?;
    Ok(())
}
