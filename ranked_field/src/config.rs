// ********* Data structures ***********

use std::error::Error;
use std::fmt::Display;

/// One entry of a ranked-choice field: the rank given by the respondent and the
/// item that was ranked.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct Record {
    pub rank: i64,
    pub item: String,
}

/// A flat table of text fields, row by row.
pub type Table = Vec<Vec<String>>;

// ********* Format constants **********

/// The header row of every exported table.
pub const HEADER: [&str; 2] = ["Rank", "Item"];

/// Separator between two entries of a ranked-choice field.
pub const ENTRY_SEPARATOR: char = '\n';

/// Separator between the rank and the item inside one entry.
/// Only the first occurrence splits the entry.
pub const RANK_SEPARATOR: &str = ": ";

// ******** Errors *********

/// Errors raised while parsing a ranked-choice field.
///
/// `entry` is the position (starting at 1) of the faulty entry in the field,
/// not counting the empty entries.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum FieldError {
    /// The rank could not be read as a base-10 integer.
    InvalidRank { entry: usize, token: String },
    /// The entry does not contain the `": "` separator.
    MissingSeparator { entry: usize, content: String },
}

impl Error for FieldError {}

impl Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::InvalidRank { entry, token } => {
                write!(f, "entry {}: could not parse rank {:?}", entry, token)
            }
            FieldError::MissingSeparator { entry, content } => {
                write!(
                    f,
                    "entry {}: missing {:?} separator in {:?}",
                    entry, RANK_SEPARATOR, content
                )
            }
        }
    }
}
