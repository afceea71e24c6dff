use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::table::CsvTable;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a headered CSV file into a [`CsvTable`].
///
/// The first row is the header. Fields are trimmed of surrounding
/// whitespace; every record must have as many fields as the header.
pub fn load_csv(path: &Path) -> Result<CsvTable> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_csv(file)
}

/// Parse CSV from any reader. Split out of [`load_csv`] for testing.
pub fn read_csv<R: Read>(source: R) -> Result<CsvTable> {
    // Headers are trimmed too, so " x" selects the `x` column. pandas'
    // read_csv would keep the leading space.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        bail!("No columns to parse from file");
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(record);
    }

    log::debug!("parsed CSV: {} columns, {} rows", headers.len(), records.len());
    Ok(CsvTable::new(headers, records))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn loads_header_and_rows() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "x,y,label").unwrap();
        writeln!(file, "0,0,a").unwrap();
        writeln!(file, "10,0,b").unwrap();

        let table = load_csv(file.path()).unwrap();
        assert_eq!(table.headers, vec!["x", "y", "label"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(1, 0), "10");
    }

    #[test]
    fn trims_whitespace_around_fields() {
        let table = read_csv(" x , y \n 1 , 2 \n".as_bytes()).unwrap();
        assert_eq!(table.headers, vec!["x", "y"]);
        assert_eq!(table.cell(0, 1), "2");
    }

    #[test]
    fn header_only_file_has_no_rows() {
        let table = read_csv("x,y\n".as_bytes()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn empty_file_fails() {
        assert!(read_csv("".as_bytes()).is_err());
    }

    #[test]
    fn ragged_row_fails() {
        let err = read_csv("x,y\n1,2\n3\n".as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("CSV row 1"));
    }

    #[test]
    fn missing_file_fails_with_path() {
        let err = load_csv(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(format!("{err:#}").contains("here.csv"));
    }
}
