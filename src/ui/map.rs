use eframe::egui::{Color32, Ui};
use egui_plot::{MarkerShape, Plot, PlotPoints, Points};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Point view (central panel)
// ---------------------------------------------------------------------------

/// Render the loaded points in the central panel.
///
/// One marker per valid point, plus a distinct centroid marker; the view is
/// framed around the centroid with equal axis scaling. Nothing beyond the
/// points and the centroid crosses into this layer.
pub fn point_map(ui: &mut Ui, state: &AppState) {
    let geo = match &state.geo {
        Some(geo) => geo,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a CSV or XLSX file to view points  (File → Open…)");
            });
            return;
        }
    };

    let markers: PlotPoints = geo.points.iter().map(|p| [p.lon, p.lat]).collect();
    let centroid: PlotPoints = vec![[geo.centroid.lon, geo.centroid.lat]].into();

    Plot::new("point_map")
        .legend(egui_plot::Legend::default())
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .data_aspect(1.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(markers)
                    .name("Points")
                    .color(Color32::LIGHT_BLUE)
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(3.0),
            );
            plot_ui.points(
                Points::new(centroid)
                    .name("Centroid")
                    .color(Color32::RED)
                    .shape(MarkerShape::Diamond)
                    .filled(true)
                    .radius(5.0),
            );
        });
}
