use csv::StringRecord;

use crate::error::LayoutError;
use crate::layout::Sample;

// ---------------------------------------------------------------------------
// CsvTable – a headered CSV kept as raw text
// ---------------------------------------------------------------------------

/// A loaded CSV file: header names plus the raw data records.
///
/// Cells stay as text until a [`ColumnSchema`] picks the two columns to plot,
/// so a file loads even when other columns hold non-numeric data.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub records: Vec<StringRecord>,
}

/// Column indices for the x and y fields, resolved once per layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    pub x_field: String,
    pub y_field: String,
    pub x_idx: usize,
    pub y_idx: usize,
}

impl CsvTable {
    pub fn new(headers: Vec<String>, records: Vec<StringRecord>) -> Self {
        CsvTable { headers, records }
    }

    /// Number of data rows (the header is not counted).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index of the column named `name`, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Resolve the configured field names to column indices.
    pub fn resolve(&self, x_field: &str, y_field: &str) -> Result<ColumnSchema, LayoutError> {
        let missing = |name: &str| LayoutError::MissingColumn {
            x_field: x_field.to_string(),
            y_field: y_field.to_string(),
            missing: name.to_string(),
        };
        let x_idx = self.column_index(x_field).ok_or_else(|| missing(x_field))?;
        let y_idx = self.column_index(y_field).ok_or_else(|| missing(y_field))?;

        Ok(ColumnSchema {
            x_field: x_field.to_string(),
            y_field: y_field.to_string(),
            x_idx,
            y_idx,
        })
    }

    /// Convert the two schema columns into numeric samples, in row order.
    ///
    /// Stops at the first cell that is empty, unparsable or not finite.
    pub fn samples(&self, schema: &ColumnSchema) -> Result<Vec<Sample>, LayoutError> {
        self.records
            .iter()
            .enumerate()
            .map(|(row, record)| {
                let x = parse_cell(record, schema.x_idx, &schema.x_field, row)?;
                let y = parse_cell(record, schema.y_idx, &schema.y_field, row)?;
                Ok(Sample { index: row, x, y })
            })
            .collect()
    }

    /// Raw text of the cell at `row`/`col`, or `""` when out of range.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.records
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or("")
    }
}

fn parse_cell(
    record: &StringRecord,
    idx: usize,
    field: &str,
    row: usize,
) -> Result<f64, LayoutError> {
    let text = record.get(idx).unwrap_or("");
    let conversion_error = || LayoutError::DataConversion {
        field: field.to_string(),
        row,
        value: text.to_string(),
    };

    let value = text.trim().parse::<f64>().map_err(|_| conversion_error())?;
    if !value.is_finite() {
        return Err(conversion_error());
    }
    Ok(value)
}
