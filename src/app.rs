use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, viewport};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct BallStickApp {
    pub state: AppState,
}

impl eframe::App for BallStickApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: settings ----
        egui::SidePanel::left("settings_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: scene ----
        egui::CentralPanel::default().show(ctx, |ui| {
            viewport::scene_view(ui, &self.state);
        });
    }
}
