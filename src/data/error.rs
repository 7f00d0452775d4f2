use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy for the upload pipeline
// ---------------------------------------------------------------------------

/// Everything that can go wrong between raw upload bytes and plottable
/// points. Each variant maps to one user-visible message; none of them is
/// fatal to the application — a failed upload ends that upload and nothing
/// else.
#[derive(Debug, Error)]
pub enum DataError {
    /// The bytes could not be parsed as CSV or XLSX. Carries the underlying
    /// cause so the user can diagnose the file.
    #[error("could not read the uploaded file: {0}")]
    Parse(String),

    /// The file parsed fine but lacks a latitude or longitude column.
    /// `found` lists the columns that were present, in file order and with
    /// their original casing.
    #[error("file must contain 'latitude' and 'longitude' columns; found: {}", .found.join(", "))]
    MissingColumns { found: Vec<String> },

    /// The file was readable and had the right columns, but every row was
    /// dropped during numeric coercion. Distinct from `Parse` so the user
    /// understands the file itself was not malformed.
    #[error("no valid records after removing rows without latitude/longitude")]
    NoValidRecords,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_message_lists_found_columns() {
        let err = DataError::MissingColumns {
            found: vec!["lat".to_string(), "Name".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("lat, Name"));
        assert!(msg.contains("'latitude'"));
        assert!(msg.contains("'longitude'"));
    }
}
