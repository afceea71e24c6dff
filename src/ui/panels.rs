use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::config::{MIN_BALL_RADIUS, MIN_SPACING, MIN_STICK_RADIUS};
use crate::state::{AppState, ReportLevel};

/// Rows shown in the data preview.
const PREVIEW_ROWS: usize = 200;

// ---------------------------------------------------------------------------
// Left side panel – visualizer settings
// ---------------------------------------------------------------------------

/// Render the settings panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("CSV Ball-Stick Visualizer");
    ui.separator();

    if ui.button("📂 Load CSV File").clicked() {
        open_file_dialog(state);
    }

    if !state.file_loaded {
        if !state.error_message.is_empty() {
            ui.label(RichText::new(&state.error_message).color(Color32::RED));
        }
        return;
    }

    let file_name = state
        .config
        .file_path
        .as_deref()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    ui.label(RichText::new(format!("✔ CSV Loaded: {file_name}")).color(Color32::GREEN));
    ui.separator();

    let cfg = &mut state.config;
    egui::Grid::new("settings_grid")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui: &mut Ui| {
            ui.label("X Column");
            ui.text_edit_singleline(&mut cfg.x_column);
            ui.end_row();

            ui.label("Y Column");
            ui.text_edit_singleline(&mut cfg.y_column);
            ui.end_row();

            ui.label("Spacing");
            ui.add(egui::DragValue::new(&mut cfg.spacing).speed(0.05).range(MIN_SPACING..=f64::MAX));
            ui.end_row();

            ui.label("Ball Radius");
            ui.add(
                egui::DragValue::new(&mut cfg.ball_radius)
                    .speed(0.005)
                    .range(MIN_BALL_RADIUS..=f64::MAX),
            );
            ui.end_row();

            ui.label("Stick Radius");
            ui.add(
                egui::DragValue::new(&mut cfg.stick_radius)
                    .speed(0.001)
                    .range(MIN_STICK_RADIUS..=f64::MAX),
            );
            ui.end_row();
        });

    ui.add_space(4.0);
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("📈 Visualize Graph").clicked() {
            state.visualize();
        }
        if ui
            .add_enabled(!state.scene.is_empty(), egui::Button::new("Clear Scene"))
            .clicked()
        {
            state.clear_scene();
        }
    });

    ui.separator();
    preview_table(ui, state);
}

/// The configured x/y columns of the loaded table, first rows only.
fn preview_table(ui: &mut Ui, state: &AppState) {
    let Some(table) = &state.table else {
        return;
    };
    let cfg = &state.config;
    let x_idx = table.column_index(&cfg.x_column);
    let y_idx = table.column_index(&cfg.y_column);

    if table.is_empty() {
        ui.strong("Preview (no data rows)");
        return;
    }
    ui.strong(format!("Preview ({} rows)", table.len()));
    if x_idx.is_none() || y_idx.is_none() {
        ui.label(RichText::new("Configured columns not in file.").italics());
    }

    let cell = |row: usize, idx: Option<usize>| idx.map_or("–", |col| table.cell(row, col));

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto())
        .columns(Column::remainder(), 2)
        .header(18.0, |mut header| {
            header.col(|ui| {
                ui.strong("#");
            });
            header.col(|ui| {
                ui.strong(&cfg.x_column);
            });
            header.col(|ui| {
                ui.strong(&cfg.y_column);
            });
        })
        .body(|body| {
            body.rows(16.0, table.len().min(PREVIEW_ROWS), |mut row| {
                let i = row.index();
                row.col(|ui| {
                    ui.label(i.to_string());
                });
                row.col(|ui| {
                    ui.label(cell(i, x_idx));
                });
                row.col(|ui| {
                    ui.label(cell(i, y_idx));
                });
            });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open CSV…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(state.last_layout.is_some(), egui::Button::new("Export layout…"))
                .clicked()
            {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!("{} objects in scene", state.scene.len()));

        if let Some(report) = &state.report {
            ui.separator();
            let color = match report.level {
                ReportLevel::Info => ui.visuals().text_color(),
                ReportLevel::Error => Color32::RED,
            };
            ui.label(RichText::new(&report.text).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open CSV data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_file(&path);
    }
}

pub fn export_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export layout")
        .add_filter("JSON", &["json"])
        .set_file_name("layout.json")
        .save_file();

    if let Some(path) = file {
        state.export_layout(&path);
    }
}
