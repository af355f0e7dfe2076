pub use crate::config::*;

use crate::{parse_ranked_field, to_table};

/// A builder for collecting the records of many cells.
///
/// The records are kept in the order in which the cells are added.
///
/// ```
/// pub use ranked_field::builder::Builder;
/// # use ranked_field::FieldError;
///
/// let mut builder = Builder::new();
/// builder.add_cell("1: Apples\n2: Bananas")?;
/// builder.add_cell("1: Cherries")?;
///
/// assert_eq!(builder.len(), 3);
/// let table = builder.build();
/// assert_eq!(table.len(), 4);
///
/// # Ok::<(), FieldError>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct Builder {
    pub(crate) _records: Vec<Record>,
}

impl Builder {
    pub fn new() -> Builder {
        Builder {
            _records: Vec::new(),
        }
    }

    /// Parses a cell and appends its records.
    ///
    /// Returns the number of records read from this cell. If the cell is malformed,
    /// nothing is added.
    pub fn add_cell(&mut self, content: &str) -> Result<usize, FieldError> {
        let mut records = parse_ranked_field(content)?;
        let n = records.len();
        self._records.append(&mut records);
        Ok(n)
    }

    pub fn records(&self) -> &[Record] {
        &self._records
    }

    pub fn len(&self) -> usize {
        self._records.len()
    }

    pub fn is_empty(&self) -> bool {
        self._records.is_empty()
    }

    /// The final table, header included.
    pub fn build(self) -> Table {
        to_table(&self._records)
    }
}
