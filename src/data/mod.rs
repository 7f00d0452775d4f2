/// Data layer: core types, ingestion, and normalization.
///
/// Architecture:
/// ```text
///  .csv / .xlsx bytes
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse upload → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  rows of cells, folded column index
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ normalize  │  coerce + filter → Points, Centroid
///   └───────────┘
/// ```

pub mod error;
pub mod loader;
pub mod model;
pub mod normalize;

use self::error::DataError;
use self::model::{Dataset, UploadedFile};
use self::normalize::GeoPoints;

/// Run the full pipeline for one upload: parse the bytes into a [`Dataset`],
/// then validate and reduce it to plottable points.
///
/// Everything is recomputed from the raw bytes on every call; nothing is
/// cached between uploads.
pub fn process_upload(upload: &UploadedFile) -> Result<(Dataset, GeoPoints), DataError> {
    let dataset = loader::load_upload(upload)?;
    let geo = normalize::normalize(&dataset)?;
    Ok((dataset, geo))
}
