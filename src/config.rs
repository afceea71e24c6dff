use std::path::PathBuf;

use serde::Serialize;

use crate::layout::LayoutParams;

// ---------------------------------------------------------------------------
// Visualizer configuration
// ---------------------------------------------------------------------------

/// Smallest values the panel lets the user drag to.
pub const MIN_SPACING: f64 = 0.1;
pub const MIN_BALL_RADIUS: f64 = 0.01;
pub const MIN_STICK_RADIUS: f64 = 0.005;

/// User-tunable settings, owned by the app state and passed explicitly to
/// every visualisation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualizerConfig {
    /// CSV file chosen through the file dialog.
    pub file_path: Option<PathBuf>,
    pub x_column: String,
    pub y_column: String,
    pub spacing: f64,
    pub ball_radius: f64,
    pub stick_radius: f64,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            file_path: None,
            x_column: "x".to_string(),
            y_column: "y".to_string(),
            spacing: 5.0,
            ball_radius: 0.2,
            stick_radius: 0.05,
        }
    }
}

impl VisualizerConfig {
    pub fn layout_params(&self) -> LayoutParams {
        LayoutParams {
            spacing: self.spacing,
            ball_radius: self.ball_radius,
            stick_radius: self.stick_radius,
        }
    }
}
