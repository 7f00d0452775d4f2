use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// UploadedFile – one raw upload, as handed over by the UI shell
// ---------------------------------------------------------------------------

/// Raw bytes of an uploaded file plus whatever hints the shell has about it.
/// Transient: built per upload, dropped once parsed.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub bytes: Vec<u8>,
    /// File name as reported by the picker, used for extension dispatch.
    pub filename: Option<String>,
    /// Declared media type, if the caller has one (the desktop file dialog
    /// does not; an embedding HTTP shell would).
    pub media_type: Option<String>,
}

// ---------------------------------------------------------------------------
// CellValue – a single cell of the parsed table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell. CSV cells arrive as text; XLSX cells keep their
/// native numeric type where the workbook has one.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    /// Coerce the cell to a coordinate value.
    ///
    /// Numbers pass through, text is parsed after trimming, everything else
    /// is a missing value. Non-finite results (NaN, ±inf, including the text
    /// forms `"NaN"` / `"inf"`) are missing too, so a successful coercion is
    /// always safe to average.
    pub fn as_coordinate(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) if v.is_finite() => Some(*v),
            CellValue::Text(s) => match s.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => Some(v),
                _ => None,
            },
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Number(v) => write!(f, "{v}"),
            CellValue::Empty => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the parsed table with a case-folded column index
// ---------------------------------------------------------------------------

/// An ordered table parsed from one upload.
///
/// Column names keep their original casing for display and diagnostics;
/// lookups go through a lower-cased index built once at construction, so
/// `Latitude`, `LATITUDE` and `latitude` all resolve to the same column.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Column names in file order, original casing preserved.
    pub columns: Vec<String>,
    /// Data rows; each row has one cell per column.
    pub rows: Vec<Vec<CellValue>>,
    /// lower-cased column name → position in `columns`. On a fold collision
    /// the first column wins, so the index never maps one key to two columns.
    index: BTreeMap<String, usize>,
}

impl Dataset {
    /// Build the table and its folded lookup index.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let mut index = BTreeMap::new();
        for (i, name) in columns.iter().enumerate() {
            index.entry(name.to_lowercase()).or_insert(i);
        }
        Dataset {
            columns,
            rows,
            index,
        }
    }

    /// Look up a column position by name, ignoring case.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.index.get(&name.to_lowercase()).copied()
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn column_lookup_ignores_case() {
        let ds = Dataset::new(
            vec!["Latitude".to_string(), "LONGITUDE".to_string()],
            Vec::new(),
        );
        assert_eq!(ds.column_index("latitude"), Some(0));
        assert_eq!(ds.column_index("Longitude"), Some(1));
        assert_eq!(ds.column_index("altitude"), None);
    }

    #[test]
    fn fold_collision_keeps_first_column() {
        let ds = Dataset::new(
            vec!["Name".to_string(), "NAME".to_string()],
            Vec::new(),
        );
        assert_eq!(ds.column_index("name"), Some(0));
        // Original casing of both columns is still available for display.
        assert_eq!(ds.columns, vec!["Name", "NAME"]);
    }

    #[test]
    fn coordinate_coercion() {
        assert_eq!(CellValue::Number(12.5).as_coordinate(), Some(12.5));
        assert_eq!(text("12.5").as_coordinate(), Some(12.5));
        assert_eq!(text("  -3.25 ").as_coordinate(), Some(-3.25));
        assert_eq!(text("not a number").as_coordinate(), None);
        assert_eq!(text("").as_coordinate(), None);
        assert_eq!(CellValue::Empty.as_coordinate(), None);
    }

    #[test]
    fn non_finite_values_are_missing() {
        assert_eq!(CellValue::Number(f64::NAN).as_coordinate(), None);
        assert_eq!(CellValue::Number(f64::INFINITY).as_coordinate(), None);
        assert_eq!(text("NaN").as_coordinate(), None);
        assert_eq!(text("inf").as_coordinate(), None);
    }
}
