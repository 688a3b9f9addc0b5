use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct AvocadoApp {
    pub state: AppState,
}

impl AvocadoApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for AvocadoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: header + filters ----
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            panels::header(ui);
            ui.separator();
            panels::filter_menu(ui, &mut self.state);
            ui.add_space(4.0);
        });

        // ---- Bottom panel: counts ----
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            panels::status_bar(ui, &self.state);
        });

        // ---- Central panel: charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::charts(ui, &self.state);
        });
    }
}
