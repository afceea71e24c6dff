use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::VisualizerConfig;
use crate::data::loader::load_csv;
use crate::data::table::CsvTable;
use crate::error::LayoutError;
use crate::layout::{self, Layout};
use crate::scene::{self, Scene};

// ---------------------------------------------------------------------------
// Action reports
// ---------------------------------------------------------------------------

/// How a user action ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Finished,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLevel {
    Info,
    Error,
}

/// Message shown in the top bar after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub level: ReportLevel,
    pub text: String,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Tunables edited in the side panel.
    pub config: VisualizerConfig,

    /// Table from the last successful load (shown in the preview).
    pub table: Option<CsvTable>,

    /// Whether the configured file was read successfully.
    pub file_loaded: bool,

    /// Last load error, empty when the last load succeeded.
    pub error_message: String,

    /// Realised geometry; grows with every visualisation until cleared.
    pub scene: Scene,

    /// Layout of the most recent successful visualisation.
    pub last_layout: Option<Layout>,

    /// Outcome message of the last visualise/export action.
    pub report: Option<Report>,
}

/// On-disk shape of an exported layout.
#[derive(Serialize)]
struct LayoutExport<'a> {
    config: &'a VisualizerConfig,
    layout: &'a Layout,
}

impl AppState {
    /// Load the CSV at `path` and remember it as the current file.
    pub fn load_file(&mut self, path: &Path) -> Outcome {
        match load_csv(path) {
            Ok(table) => {
                log::info!(
                    "Loaded {} rows with columns {:?} from {}",
                    table.len(),
                    table.headers,
                    path.display()
                );
                self.config.file_path = Some(path.to_path_buf());
                self.table = Some(table);
                self.file_loaded = true;
                self.error_message.clear();
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                self.table = None;
                self.file_loaded = false;
                self.error_message = format!("Error reading CSV: {e:#}");
            }
        }
        Outcome::Finished
    }

    /// Re-read the configured file, lay it out and add the geometry to the
    /// scene.
    pub fn visualize(&mut self) -> Outcome {
        match self.try_visualize() {
            Ok(layout) => {
                if layout.is_empty() {
                    log::warn!("CSV has no data rows; nothing added to the scene");
                }
                scene::realize(&layout, &mut self.scene);
                log::info!(
                    "Graph created: {} balls, {} sticks ({} scene objects total)",
                    layout.placements.len(),
                    layout.connectors.len(),
                    self.scene.len()
                );
                self.last_layout = Some(layout);
                self.set_report(ReportLevel::Info, "Graph created.".to_string());
                Outcome::Finished
            }
            Err(e) => {
                let text = match e.downcast_ref::<LayoutError>() {
                    Some(missing @ LayoutError::MissingColumn { .. }) => missing.to_string(),
                    _ => format!("Failed to visualize: {e:#}"),
                };
                log::error!("{text}");
                self.set_report(ReportLevel::Error, text);
                Outcome::Cancelled
            }
        }
    }

    fn try_visualize(&mut self) -> Result<Layout> {
        let path = self
            .config
            .file_path
            .clone()
            .context("no CSV file selected")?;
        let table = load_csv(&path)?;
        let layout = layout::layout(
            &table,
            &self.config.x_column,
            &self.config.y_column,
            &self.config.layout_params(),
        )?;
        self.table = Some(table);
        Ok(layout)
    }

    /// Remove every realised object from the scene.
    pub fn clear_scene(&mut self) {
        log::info!("Clearing {} scene objects", self.scene.len());
        self.scene.clear();
        self.last_layout = None;
    }

    /// Write the most recent layout and the config that produced it as JSON.
    pub fn export_layout(&mut self, path: &Path) -> Outcome {
        match self.write_layout(path) {
            Ok(()) => {
                log::info!("Exported layout to {}", path.display());
                self.set_report(ReportLevel::Info, format!("Layout exported to {}", path.display()));
                Outcome::Finished
            }
            Err(e) => {
                log::error!("Failed to export layout: {e:#}");
                self.set_report(ReportLevel::Error, format!("Failed to export layout: {e:#}"));
                Outcome::Cancelled
            }
        }
    }

    fn write_layout(&self, path: &Path) -> Result<()> {
        let layout = self
            .last_layout
            .as_ref()
            .context("nothing to export, visualize a graph first")?;
        let doc = LayoutExport {
            config: &self.config,
            layout,
        };
        let json = serde_json::to_string_pretty(&doc).context("serializing layout")?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))
    }

    fn set_report(&mut self, level: ReportLevel, text: String) {
        self.report = Some(Report { level, text });
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn loaded_state(contents: &str) -> (AppState, NamedTempFile) {
        let file = csv_file(contents);
        let mut state = AppState::default();
        assert_eq!(state.load_file(file.path()), Outcome::Finished);
        (state, file)
    }

    #[test]
    fn successful_load_sets_status_fields() {
        let (state, file) = loaded_state("x,y\n0,0\n1,1\n");
        assert!(state.file_loaded);
        assert!(state.error_message.is_empty());
        assert_eq!(state.config.file_path.as_deref(), Some(file.path()));
        assert_eq!(state.table.as_ref().map(CsvTable::len), Some(2));
    }

    #[test]
    fn failed_load_clears_loaded_flag() {
        let (mut state, _file) = loaded_state("x,y\n0,0\n");
        let bad = csv_file("x,y\n1,2,3\n");
        state.load_file(bad.path());
        assert!(!state.file_loaded);
        assert!(state.error_message.starts_with("Error reading CSV:"));
        assert!(state.table.is_none());
    }

    #[test]
    fn visualize_adds_geometry_to_scene() {
        let (mut state, _file) = loaded_state("x,y\n0,0\n10,0\n10,10\n");
        assert_eq!(state.visualize(), Outcome::Finished);
        assert_eq!(state.scene.len(), 5);
        assert_eq!(
            state.report,
            Some(Report {
                level: ReportLevel::Info,
                text: "Graph created.".into()
            })
        );
        let layout = state.last_layout.as_ref().unwrap();
        assert_eq!(layout.placements.len(), 3);
        assert_eq!(layout.connectors.len(), 2);
    }

    #[test]
    fn repeated_visualize_accumulates_until_cleared() {
        let (mut state, _file) = loaded_state("x,y\n0,0\n1,1\n");
        state.visualize();
        state.visualize();
        assert_eq!(state.scene.len(), 6);

        state.clear_scene();
        assert!(state.scene.is_empty());
        assert!(state.last_layout.is_none());
    }

    #[test]
    fn missing_column_reports_both_names_and_adds_nothing() {
        let (mut state, _file) = loaded_state("a,b\n0,0\n");
        assert_eq!(state.visualize(), Outcome::Cancelled);
        assert!(state.scene.is_empty());
        let report = state.report.unwrap();
        assert_eq!(report.level, ReportLevel::Error);
        assert_eq!(report.text, "Column 'x' or 'y' not found in CSV.");
    }

    #[test]
    fn bad_cell_reports_generic_failure() {
        let (mut state, _file) = loaded_state("x,y\n0,0\n1,abc\n");
        assert_eq!(state.visualize(), Outcome::Cancelled);
        assert!(state.scene.is_empty());
        let report = state.report.unwrap();
        assert!(report.text.starts_with("Failed to visualize:"));
        assert!(report.text.contains("'y'"));
    }

    #[test]
    fn invalid_spacing_is_rejected() {
        let (mut state, _file) = loaded_state("x,y\n0,0\n");
        state.config.spacing = 0.0;
        assert_eq!(state.visualize(), Outcome::Cancelled);
        assert!(state.report.unwrap().text.contains("spacing"));
    }

    #[test]
    fn header_only_file_visualizes_nothing() {
        let (mut state, _file) = loaded_state("x,y\n");
        assert_eq!(state.visualize(), Outcome::Finished);
        assert!(state.scene.is_empty());
        assert!(state.last_layout.as_ref().is_some_and(Layout::is_empty));
    }

    #[test]
    fn visualize_without_file_is_cancelled() {
        let mut state = AppState::default();
        assert_eq!(state.visualize(), Outcome::Cancelled);
        assert!(state.report.unwrap().text.contains("no CSV file selected"));
    }

    #[test]
    fn export_writes_layout_json() {
        let (mut state, _file) = loaded_state("x,y\n0,0\n10,0\n10,10\n");
        let out = NamedTempFile::new().unwrap();

        assert_eq!(state.export_layout(out.path()), Outcome::Cancelled);

        state.visualize();
        assert_eq!(state.export_layout(out.path()), Outcome::Finished);

        let text = std::fs::read_to_string(out.path()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["layout"]["placements"].as_array().unwrap().len(), 3);
        assert_eq!(json["layout"]["connectors"].as_array().unwrap().len(), 2);
        assert_eq!(json["config"]["x_column"], "x");
    }
}
