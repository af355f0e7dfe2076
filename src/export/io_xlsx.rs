use calamine::{open_workbook, DataType, Range, Reader, Xlsx};

use crate::export::*;

/// Reads the ranked-choice field of every row after the header of an Excel export.
///
/// The first worksheet is used unless a worksheet name is provided.
pub fn read_xlsx_ranking(
    path: &str,
    worksheet_name: Option<&str>,
) -> BExportResult<Vec<RankedCell>> {
    let wrange = get_range(path, worksheet_name)?;
    debug!("read_xlsx_ranking: path: {:?}", path);
    read_range(&wrange)
}

/// Reads the ranked-choice field of every row of a worksheet range. The first row
/// of the range is the header.
fn read_range(wrange: &Range<DataType>) -> BExportResult<Vec<RankedCell>> {
    let (start_row, start_col) = wrange.start().context(EmptyExcelSnafu {})?;
    let (end_row, end_col) = wrange.end().context(EmptyExcelSnafu {})?;
    debug!(
        "read_range: range: {:?} -> {:?}",
        (start_row, start_col),
        (end_row, end_col)
    );

    let column = RANKED_CHOICE_COLUMN_INDEX as u32;
    let mut res: Vec<RankedCell> = Vec::new();
    for row in (start_row + 1)..=end_row {
        // Excel rows start at 1.
        let lineno = (row + 1) as usize;
        let content = if column < start_col {
            // The range starts after the ranked-choice column: nothing was filled in.
            "".to_string()
        } else {
            let cell = wrange
                .get_value((row, column))
                .context(RowTooShortSnafu {
                    lineno,
                    len: wrange.width(),
                })?;
            cell_to_string(cell, lineno)?
        };
        let cell = RankedCell { lineno, content };
        debug!("read_range: lineno: {:?} cell: {:?}", lineno, cell);
        res.push(cell);
    }
    Ok(res)
}

fn cell_to_string(cell: &DataType, lineno: usize) -> ExportResult<String> {
    match cell {
        DataType::String(s) => Ok(s.clone()),
        DataType::Empty => Ok("".to_string()),
        DataType::Int(i) => Ok(i.to_string()),
        DataType::Float(f) => Ok(f.to_string()),
        DataType::Bool(b) => Ok(b.to_string()),
        _ => ExcelWrongCellTypeSnafu {
            lineno: lineno as u64,
            content: format!("{:?}", cell),
        }
        .fail(),
    }
}

fn get_range(path: &str, worksheet_name: Option<&str>) -> BExportResult<Range<DataType>> {
    let mut workbook: Xlsx<_> = open_workbook(path).context(OpeningExcelSnafu { path })?;

    // A worksheet name was provided, use it.
    if let Some(name) = worksheet_name {
        debug!("get_range: path: {:?} worksheet: {:?}", path, name);
        let wrange = workbook
            .worksheet_range(name)
            .context(EmptyExcelSnafu {})?
            .context(OpeningExcelSnafu { path })?;
        Ok(wrange)
    } else {
        let all_worksheets = workbook.worksheets();
        match all_worksheets.as_slice() {
            [] => Err(Box::new(ExportError::EmptyExcel {})),
            [(name, wrange)] => {
                debug!("get_range: path: {:?} worksheet: {:?}", path, name);
                Ok(wrange.clone())
            }
            _ => Err(Box::new(ExportError::ExcelTooManyWorksheets {
                path: path.to_string(),
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn cells_as_text() {
        assert_eq!(
            cell_to_string(&DataType::String("1: a\n2: b".to_string()), 2).unwrap(),
            "1: a\n2: b"
        );
        assert_eq!(cell_to_string(&DataType::Empty, 2).unwrap(), "");
        assert_eq!(cell_to_string(&DataType::Int(3), 2).unwrap(), "3");
        assert_eq!(cell_to_string(&DataType::Float(2.0), 2).unwrap(), "2");
        assert_eq!(cell_to_string(&DataType::Bool(true), 2).unwrap(), "true");
    }

    #[test]
    fn dates_are_rejected() {
        let err = cell_to_string(&DataType::DateTime(44000.5), 5).unwrap_err();
        assert!(matches!(err, ExportError::ExcelWrongCellType { lineno: 5, .. }));
    }

    fn write_workbook(path: &Path, sheet_name: &str, cells: &[(u32, u16, &str)]) {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet_name).unwrap();
        for (row, col, s) in cells {
            worksheet.write_string(*row, *col, *s).unwrap();
        }
        workbook.save(path).unwrap();
    }

    #[test]
    fn read_workbook() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("responses.xlsx");
        let col = RANKED_CHOICE_COLUMN_INDEX as u16;
        write_workbook(
            &path,
            "Form1",
            &[
                (0, 0, "Id"),
                (0, col, "Rank the fruits"),
                (1, 0, "1"),
                (1, col, "1: Apples\n2: Bananas"),
                (2, 0, "2"),
                (3, 0, "3"),
                (3, col, "1: Figs"),
            ],
        );
        let path_s = path.display().to_string();
        let expected = vec![
            RankedCell {
                lineno: 2,
                content: "1: Apples\n2: Bananas".to_string(),
            },
            RankedCell {
                lineno: 3,
                content: "".to_string(),
            },
            RankedCell {
                lineno: 4,
                content: "1: Figs".to_string(),
            },
        ];
        assert_eq!(read_xlsx_ranking(&path_s, None).unwrap(), expected);
        assert_eq!(read_xlsx_ranking(&path_s, Some("Form1")).unwrap(), expected);
        assert!(read_xlsx_ranking(&path_s, Some("Sheet2")).is_err());
    }

    #[test]
    fn workbook_without_ranked_column() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("responses.xlsx");
        write_workbook(&path, "Form1", &[(0, 0, "Id"), (1, 0, "1")]);
        let err = read_xlsx_ranking(&path.display().to_string(), None).unwrap_err();
        assert!(matches!(*err, ExportError::RowTooShort { lineno: 2, len: 1 }));
    }

    #[test]
    fn range_after_ranked_column() {
        let first_col = RANKED_CHOICE_COLUMN_INDEX as u32 + 1;
        let mut wrange: Range<DataType> = Range::new((0, first_col), (2, first_col + 1));
        wrange.set_value((0, first_col), DataType::String("Comment".to_string()));
        wrange.set_value((2, first_col), DataType::String("late".to_string()));
        let cells = read_range(&wrange).unwrap();
        assert_eq!(
            cells,
            vec![
                RankedCell {
                    lineno: 2,
                    content: "".to_string()
                },
                RankedCell {
                    lineno: 3,
                    content: "".to_string()
                },
            ]
        );
    }

    #[test]
    fn missing_workbook() {
        let err = read_xlsx_ranking("/nonexistent/responses.xlsx", None).unwrap_err();
        assert!(matches!(*err, ExportError::OpeningExcel { .. }));
    }
}
