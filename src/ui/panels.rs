use std::path::Path;

use anyhow::Context;
use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::UploadedFile;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – upload summary
// ---------------------------------------------------------------------------

/// Render the summary panel for the current upload.
pub fn side_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Summary");
    ui.separator();

    let (Some(dataset), Some(geo)) = (&state.dataset, &state.geo) else {
        ui.label("No file loaded.");
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            if let Some(name) = &state.source_name {
                ui.strong("File");
                ui.label(name);
                ui.separator();
            }

            ui.strong("Columns");
            for col in &dataset.columns {
                ui.label(col);
            }
            ui.separator();

            ui.strong("Rows");
            ui.label(format!("{} in file", dataset.len()));
            ui.label(format!("{} plotted", geo.points.len()));
            let dropped = state.dropped_rows();
            if dropped > 0 {
                ui.label(format!("{dropped} dropped (missing coordinates)"));
            }
            ui.separator();

            ui.strong("Centroid");
            ui.label(format!(
                "{:.5}, {:.5}",
                geo.centroid.lat, geo.centroid.lon
            ));
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(geo) = &state.geo {
            ui.label(format!(
                "{} points plotted, {} rows dropped",
                geo.points.len(),
                state.dropped_rows()
            ));
        }

        ui.separator();

        if ui
            .selectable_label(state.wide_view, "Wide view")
            .clicked()
        {
            state.wide_view = !state.wide_view;
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open coordinate data")
        .add_filter("Supported files", &["csv", "xlsx"])
        .add_filter("CSV", &["csv"])
        .add_filter("Excel", &["xlsx"])
        .pick_file();

    let Some(path) = file else {
        return;
    };

    let upload = match read_upload(&path) {
        Ok(upload) => upload,
        Err(e) => {
            log::error!("Failed to read file: {e:#}");
            state.set_error(format!("Error: {e:#}"));
            return;
        }
    };

    match crate::data::process_upload(&upload) {
        Ok((dataset, geo)) => {
            log::info!(
                "Loaded {} points from {} rows, columns {:?}",
                geo.points.len(),
                dataset.len(),
                dataset.columns
            );
            let name = upload.filename.unwrap_or_else(|| path.display().to_string());
            state.set_loaded(name, dataset, geo);
        }
        Err(e) => {
            log::error!("Failed to process file: {e}");
            state.set_error(format!("Error: {e}"));
        }
    }
}

/// Read the picked file into an [`UploadedFile`]. The desktop picker has no
/// media type to declare, so only the filename hint is filled in.
fn read_upload(path: &Path) -> anyhow::Result<UploadedFile> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(UploadedFile {
        bytes,
        filename: path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string),
        media_type: None,
    })
}
