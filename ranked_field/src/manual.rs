/*!

This is the long-form manual for `ranked_field` and `rcexport`.

## The ranked-choice field

Ranking questions in online forms are exported as a single cell per response.
Each line of the cell is one ranked item:

```text
1: Apples
2: Bananas
3: Cherries
```

- lines are separated by `\n` or `\r\n`
- the rank and the item are separated by the first `": "` in the line, the rest
  of the line is the item (it may contain `": "` itself)
- the rank is a base-10 integer
- empty lines are ignored

The entries are not reordered: the exported rows follow the order of the lines,
which is usually but not always the order of the ranks. Missing or duplicated
ranks are not checked.

## Output

The output is a CSV file with two columns:

```text
Rank,Item
1,Apples
2,Bananas
3,Cherries
```

All the responses are concatenated in the same file, in the order of the rows of
the input.

## `rcexport`

```bash
rcexport responses.csv output/ranks.csv
```

The ranked-choice data is read from column 21 of the export (index 20 when
counting from 0), after the header row. If no output path is given, the result
is written to `./output/rank-choice.csv`. Use `stdout` as the output path to
print the result instead.

Input types:
* `csv` (default) Comma Separated Values with a header row
* `xlsx` Excel export of the same form. Use `--excel-worksheet-name` if the
  workbook has more than one worksheet.

By default, the first malformed response stops the program before anything is
written. With `--skip-malformed`, the malformed responses are reported and left
out of the output. `--abort-on-malformed` restores the default when the
configuration file sets `skipMalformedRows`.

With `--reference`, the output is compared to an existing CSV file and the
program fails if they differ.

### Configuration file

All options can also be stored in a JSON file passed with `--config`:

```json
{
  "inputPath": "responses.csv",
  "outputPath": "output/ranks.csv",
  "inputType": "csv",
  "skipMalformedRows": false
}
```

Relative paths are resolved against the directory of the configuration file.
Options given on the command line take precedence. When the input path comes
from the configuration file, set the output with `--out`: a single positional
argument is always read as the input path.

*/
