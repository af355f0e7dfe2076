/*!
Parsing of ranked-choice form fields.

Survey and form tools (Microsoft Forms, Google Forms, ...) often export a
ranking question as a single cell, with one line per ranked item:

```text
1: Apples
2: Bananas
3: Cherries
```

This crate turns such a cell into a list of [`Record`]s and flattens records
into a two-column table (`Rank`, `Item`) ready to be written as CSV.

```
use ranked_field::{parse_ranked_field, to_table, Record};

let records = parse_ranked_field("1: Apples\r\n2: Bananas")?;
assert_eq!(
    records,
    vec![
        Record { rank: 1, item: "Apples".to_string() },
        Record { rank: 2, item: "Bananas".to_string() },
    ]
);
let table = to_table(&records);
assert_eq!(table[0], vec!["Rank", "Item"]);
assert_eq!(table[2], vec!["2", "Bananas"]);
# Ok::<(), ranked_field::FieldError>(())
```

See the [manual] for a description of the format.
*/

pub mod builder;
mod config;
pub mod manual;

use log::debug;

pub use crate::config::*;

/// Parses the content of one ranked-choice cell.
///
/// The cell holds entries of the form `<rank>: <item>`, separated by newlines.
/// Windows line endings are accepted. Empty entries are ignored, so an empty
/// cell returns no record.
///
/// The records are returned in the order of the entries. They are not sorted by
/// rank, and no check is done on duplicated or missing ranks.
pub fn parse_ranked_field(content: &str) -> Result<Vec<Record>, FieldError> {
    let normalized = content.replace("\r\n", "\n");
    let mut res: Vec<Record> = Vec::new();
    for (idx, entry) in normalized
        .split(ENTRY_SEPARATOR)
        .filter(|e| !e.is_empty())
        .enumerate()
    {
        let record = parse_entry(entry, idx + 1)?;
        debug!("parse_ranked_field: entry {}: {:?}", idx + 1, record);
        res.push(record);
    }
    Ok(res)
}

fn parse_entry(entry: &str, entry_idx: usize) -> Result<Record, FieldError> {
    let (rank_s, item) =
        entry
            .split_once(RANK_SEPARATOR)
            .ok_or_else(|| FieldError::MissingSeparator {
                entry: entry_idx,
                content: entry.to_string(),
            })?;
    let rank = rank_s
        .parse::<i64>()
        .map_err(|_| FieldError::InvalidRank {
            entry: entry_idx,
            token: rank_s.to_string(),
        })?;
    Ok(Record {
        rank,
        item: item.to_string(),
    })
}

/// Flattens the records into a table.
///
/// The first row is always [`HEADER`], followed by one row per record in the
/// same order as the input.
pub fn to_table(records: &[Record]) -> Table {
    let mut table: Table = Vec::with_capacity(records.len() + 1);
    table.push(HEADER.iter().map(|s| s.to_string()).collect());
    for r in records {
        table.push(vec![r.rank.to_string(), r.item.clone()]);
    }
    table
}
