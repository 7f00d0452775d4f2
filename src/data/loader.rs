use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};

use super::error::DataError;
use super::model::{CellValue, Dataset, UploadedFile};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Csv,
    Xlsx,
}

/// Order of attempts when neither the extension nor the media type settles
/// the format. A fallback heuristic, not content sniffing: each format is
/// simply tried in turn and the first success wins.
const FALLBACK_CHAIN: [Format; 2] = [Format::Csv, Format::Xlsx];

/// Parse an upload into a [`Dataset`].
///
/// Dispatch order:
/// 1. filename extension (`.csv`, `.xlsx`) — authoritative when recognized;
/// 2. declared media type — authoritative when recognized;
/// 3. the [`FALLBACK_CHAIN`], surfacing the last failure if every attempt
///    fails.
///
/// The input bytes are never mutated and nothing is retried.
pub fn load_upload(upload: &UploadedFile) -> Result<Dataset, DataError> {
    if let Some(format) = format_from_extension(upload.filename.as_deref()) {
        return parse_as(format, &upload.bytes);
    }
    if let Some(format) = format_from_media_type(upload.media_type.as_deref()) {
        return parse_as(format, &upload.bytes);
    }

    let mut last_err = DataError::Parse("empty upload".to_string());
    for format in FALLBACK_CHAIN {
        match parse_as(format, &upload.bytes) {
            Ok(dataset) => return Ok(dataset),
            Err(e) => last_err = e,
        }
    }
    Err(last_err)
}

fn parse_as(format: Format, bytes: &[u8]) -> Result<Dataset, DataError> {
    match format {
        Format::Csv => parse_csv(bytes),
        Format::Xlsx => parse_xlsx(bytes),
    }
}

// ---------------------------------------------------------------------------
// Format hints
// ---------------------------------------------------------------------------

fn format_from_extension(filename: Option<&str>) -> Option<Format> {
    let (_, ext) = filename?.rsplit_once('.')?;
    match ext.to_ascii_lowercase().as_str() {
        "csv" => Some(Format::Csv),
        "xlsx" => Some(Format::Xlsx),
        _ => None,
    }
}

fn format_from_media_type(media_type: Option<&str>) -> Option<Format> {
    // Media types may carry parameters ("text/csv; charset=utf-8").
    let essence = media_type?.split(';').next()?.trim().to_ascii_lowercase();
    match essence.as_str() {
        "text/csv" => Some(Format::Csv),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        | "application/vnd.ms-excel" => Some(Format::Xlsx),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// CSV parser
// ---------------------------------------------------------------------------

/// First record is the header row; every cell is text, empty cells become
/// [`CellValue::Empty`]. Numeric coercion is the normalizer's job, not the
/// parser's.
fn parse_csv(bytes: &[u8]) -> Result<Dataset, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| DataError::Parse(format!("reading CSV header: {e}")))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if columns.is_empty() || (columns.len() == 1 && columns[0].is_empty()) {
        return Err(DataError::Parse("CSV input has no header row".to_string()));
    }

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.map_err(|e| DataError::Parse(format!("CSV row {row_no}: {e}")))?;
        let mut row: Vec<CellValue> = record
            .iter()
            .take(columns.len())
            .map(|field| {
                if field.is_empty() {
                    CellValue::Empty
                } else {
                    CellValue::Text(field.to_string())
                }
            })
            .collect();
        // Short rows are padded so every row has one cell per column.
        row.resize(columns.len(), CellValue::Empty);
        rows.push(row);
    }

    Ok(Dataset::new(columns, rows))
}

// ---------------------------------------------------------------------------
// XLSX parser
// ---------------------------------------------------------------------------

/// Read the first worksheet; its first row is the header. Numeric cells keep
/// their native type, everything else is stringified.
fn parse_xlsx(bytes: &[u8]) -> Result<Dataset, DataError> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))
        .map_err(|e| DataError::Parse(format!("opening XLSX workbook: {e}")))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| DataError::Parse("XLSX workbook has no worksheets".to_string()))?
        .map_err(|e| DataError::Parse(format!("reading XLSX worksheet: {e}")))?;

    let mut sheet_rows = range.rows();
    let header = sheet_rows
        .next()
        .ok_or_else(|| DataError::Parse("XLSX worksheet is empty".to_string()))?;

    let columns: Vec<String> = header.iter().map(header_cell).collect();

    let mut rows = Vec::new();
    for sheet_row in sheet_rows {
        let mut row: Vec<CellValue> = sheet_row
            .iter()
            .take(columns.len())
            .map(data_cell)
            .collect();
        row.resize(columns.len(), CellValue::Empty);
        rows.push(row);
    }

    Ok(Dataset::new(columns, rows))
}

fn header_cell(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => format!("{other}"),
    }
}

fn data_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                CellValue::Empty
            } else {
                CellValue::Text(s.to_string())
            }
        }
        other => CellValue::Text(format!("{other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(bytes: &[u8], filename: Option<&str>, media_type: Option<&str>) -> UploadedFile {
        UploadedFile {
            bytes: bytes.to_vec(),
            filename: filename.map(str::to_string),
            media_type: media_type.map(str::to_string),
        }
    }

    const SAMPLE_CSV: &[u8] = b"Latitude,Longitude,Name\n1.5,2.5,alpha\n,3.0,beta\n";

    #[test]
    fn csv_parse_preserves_column_casing_and_order() {
        let ds = load_upload(&upload(SAMPLE_CSV, Some("points.csv"), None)).unwrap();
        assert_eq!(ds.columns, vec!["Latitude", "Longitude", "Name"]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.rows[0][0], CellValue::Text("1.5".to_string()));
        assert_eq!(ds.rows[1][0], CellValue::Empty);
    }

    #[test]
    fn short_csv_rows_are_padded() {
        let ds = load_upload(&upload(
            b"latitude,longitude,name\n1.0,2.0\n",
            Some("p.csv"),
            None,
        ))
        .unwrap();
        assert_eq!(ds.rows[0].len(), 3);
        assert_eq!(ds.rows[0][2], CellValue::Empty);
    }

    #[test]
    fn media_type_dispatches_when_extension_is_missing() {
        let ds = load_upload(&upload(SAMPLE_CSV, None, Some("text/csv; charset=utf-8"))).unwrap();
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn fallback_chain_parses_extensionless_csv() {
        let ds = load_upload(&upload(SAMPLE_CSV, Some("points"), None)).unwrap();
        assert_eq!(ds.columns.len(), 3);
    }

    #[test]
    fn extension_beats_media_type() {
        // Conflicting hints: CSV bytes, .csv name, XLSX media type. The
        // extension wins, so this parses as CSV instead of failing as XLSX.
        let ds = load_upload(&upload(
            SAMPLE_CSV,
            Some("points.csv"),
            Some("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
        ))
        .unwrap();
        assert_eq!(ds.columns, vec!["Latitude", "Longitude", "Name"]);
    }

    #[test]
    fn media_type_beats_fallback_chain() {
        // CSV-parseable bytes with no extension but an XLSX media type:
        // only the XLSX parser runs. The fallback chain would have
        // succeeded as CSV, so a parse failure proves it was pre-empted.
        let err = load_upload(&upload(
            SAMPLE_CSV,
            None,
            Some("application/vnd.ms-excel"),
        ))
        .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("XLSX"), "unexpected error: {msg}");
    }

    #[test]
    fn zero_byte_upload_is_a_parse_error() {
        let err = load_upload(&upload(b"", None, None)).unwrap_err();
        assert!(matches!(err, DataError::Parse(_)));
    }

    #[test]
    fn csv_extension_is_authoritative() {
        // Garbage that is valid for neither format, but with a .csv name:
        // only the CSV parser runs and its failure is not retried as XLSX.
        let bytes = b"\x00\x01\x02\xff\xfe\n\x00\xff,\xfe\n";
        let err = load_upload(&upload(bytes, Some("data.csv"), None)).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("CSV"), "unexpected error: {msg}");
    }

    #[test]
    fn corrupt_xlsx_is_a_parse_error() {
        let err = load_upload(&upload(b"not a zip archive", Some("data.xlsx"), None)).unwrap_err();
        assert!(matches!(err, DataError::Parse(_)));
    }

    #[test]
    fn headers_with_zero_data_rows_yield_an_empty_dataset() {
        let ds = load_upload(&upload(b"latitude,longitude\n", Some("empty.csv"), None)).unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.columns.len(), 2);
    }
}
