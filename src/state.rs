use crate::data::model::Dataset;
use crate::data::normalize::GeoPoints;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Name of the loaded file (None until the user opens one).
    pub source_name: Option<String>,

    /// Parsed table of the last successful upload, kept for the summary
    /// panel (column names, row counts).
    pub dataset: Option<Dataset>,

    /// Validated points and centroid of the last successful upload.
    pub geo: Option<GeoPoints>,

    /// Page-layout preference: hide the summary panel and give the whole
    /// window to the point view.
    pub wide_view: bool,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            source_name: None,
            dataset: None,
            geo: None,
            wide_view: false,
            status_message: None,
        }
    }
}

impl AppState {
    /// Install a freshly processed upload, replacing whatever was shown
    /// before.
    pub fn set_loaded(&mut self, source_name: String, dataset: Dataset, geo: GeoPoints) {
        self.source_name = Some(source_name);
        self.dataset = Some(dataset);
        self.geo = Some(geo);
        self.status_message = None;
    }

    /// Record a failed upload. The previous dataset (if any) stays on
    /// screen; only the message changes.
    pub fn set_error(&mut self, message: String) {
        self.status_message = Some(message);
    }

    /// Rows of the current dataset that did not survive coordinate
    /// cleaning.
    pub fn dropped_rows(&self) -> usize {
        match (&self.dataset, &self.geo) {
            (Some(ds), Some(geo)) => ds.len().saturating_sub(geo.points.len()),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::UploadedFile;
    use crate::data::process_upload;

    #[test]
    fn loaded_state_tracks_dropped_rows() {
        let upload = UploadedFile {
            bytes: b"latitude,longitude\n1,2\nbad,4\n5,6\n".to_vec(),
            filename: Some("demo.csv".to_string()),
            media_type: None,
        };
        let (dataset, geo) = process_upload(&upload).unwrap();

        let mut state = AppState::default();
        state.set_loaded("demo.csv".to_string(), dataset, geo);

        assert_eq!(state.dropped_rows(), 1);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn error_keeps_previous_data_visible() {
        let mut state = AppState::default();
        state.set_error("could not read the uploaded file: boom".to_string());
        assert!(state.status_message.is_some());
        assert!(state.dataset.is_none());
        assert_eq!(state.dropped_rows(), 0);
    }
}
