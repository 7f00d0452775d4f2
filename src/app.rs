use eframe::egui;

use crate::state::AppState;
use crate::ui::{map, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct InstapointsApp {
    pub state: AppState,
}

impl Default for InstapointsApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for InstapointsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: upload summary (hidden in wide view) ----
        if !self.state.wide_view {
            egui::SidePanel::left("summary_panel")
                .default_width(220.0)
                .resizable(true)
                .show(ctx, |ui| {
                    panels::side_panel(ui, &self.state);
                });
        }

        // ---- Central panel: point view ----
        egui::CentralPanel::default().show(ctx, |ui| {
            map::point_map(ui, &self.state);
        });
    }
}
