use super::error::DataError;
use super::model::Dataset;

/// Required coordinate columns, matched case-insensitively against the
/// dataset's folded column index.
pub const LAT_COLUMN: &str = "latitude";
pub const LON_COLUMN: &str = "longitude";

// ---------------------------------------------------------------------------
// Point / Centroid
// ---------------------------------------------------------------------------

/// A validated coordinate pair. Both components are finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub lat: f64,
    pub lon: f64,
}

/// Arithmetic mean position of a non-empty set of points.
pub type Centroid = Point;

/// The normalizer's output: every surviving point plus the centroid used to
/// center the view. This is the only data that crosses into the
/// presentation layer.
#[derive(Debug, Clone)]
pub struct GeoPoints {
    pub points: Vec<Point>,
    pub centroid: Centroid,
}

// ---------------------------------------------------------------------------
// Validation + normalization
// ---------------------------------------------------------------------------

/// Validate a dataset and reduce it to plottable points.
///
/// Steps, in order:
/// 1. both coordinate columns must resolve through the folded index,
///    otherwise [`DataError::MissingColumns`] lists what was found;
/// 2. each coordinate cell is coerced to a number, failures become missing
///    values rather than errors;
/// 3. rows missing either coordinate are dropped;
/// 4. zero surviving rows is [`DataError::NoValidRecords`];
/// 5. the centroid is the mean latitude and mean longitude of the survivors.
///
/// On success every point and the centroid are finite.
pub fn normalize(dataset: &Dataset) -> Result<GeoPoints, DataError> {
    let lat_idx = dataset.column_index(LAT_COLUMN);
    let lon_idx = dataset.column_index(LON_COLUMN);

    let (lat_idx, lon_idx) = match (lat_idx, lon_idx) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => {
            return Err(DataError::MissingColumns {
                found: dataset.columns.clone(),
            });
        }
    };

    let points: Vec<Point> = dataset
        .rows
        .iter()
        .filter_map(|row| {
            let lat = row.get(lat_idx)?.as_coordinate()?;
            let lon = row.get(lon_idx)?.as_coordinate()?;
            Some(Point { lat, lon })
        })
        .collect();

    if points.is_empty() {
        return Err(DataError::NoValidRecords);
    }

    let n = points.len() as f64;
    let centroid = Centroid {
        lat: points.iter().map(|p| p.lat).sum::<f64>() / n,
        lon: points.iter().map(|p| p.lon).sum::<f64>() / n,
    };

    Ok(GeoPoints { points, centroid })
}
