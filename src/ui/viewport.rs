use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{Plot, PlotPoints, Polygon};
use glam::{DVec2, DVec3};

use crate::color::to_color32;
use crate::scene::{SceneObject, Shape};
use crate::state::AppState;

/// Segments used to draw a ball outline.
const CIRCLE_SEGMENTS: usize = 32;

const UNCOLORED: Color32 = Color32::GRAY;

// ---------------------------------------------------------------------------
// Scene viewport (central panel)
// ---------------------------------------------------------------------------

/// Render the scene as seen from the front (looking down -Z).
///
/// Balls keep their true radius and sticks their true width, so the plot
/// uses a locked 1:1 aspect.
pub fn scene_view(ui: &mut Ui, state: &AppState) {
    if state.scene.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Load a CSV file and press Visualize  (File → Open CSV…)");
        });
        return;
    }

    let objects = state.scene.objects();

    Plot::new("scene_view")
        .data_aspect(1.0)
        .x_axis_label("X")
        .y_axis_label("Y")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // Sticks first so the balls sit on top of their ends.
            for obj in objects.iter().filter(|o| matches!(o.shape, Shape::Cylinder { .. })) {
                if let Some(polygon) = object_polygon(obj) {
                    plot_ui.polygon(polygon);
                }
            }
            for obj in objects.iter().filter(|o| matches!(o.shape, Shape::Sphere { .. })) {
                if let Some(polygon) = object_polygon(obj) {
                    plot_ui.polygon(polygon);
                }
            }
        });
}

fn object_polygon(obj: &SceneObject) -> Option<Polygon<'static>> {
    let points = match obj.shape {
        Shape::Sphere { radius } => circle_points(project(obj.center), radius, CIRCLE_SEGMENTS),
        Shape::Cylinder { radius, .. } => {
            let (a, b) = obj.cylinder_ends()?;
            stick_quad(project(a), project(b), radius)?.to_vec()
        }
    };

    let color = obj.color.map(to_color32).unwrap_or(UNCOLORED);
    Some(
        Polygon::new(PlotPoints::new(points))
            .name(&obj.name)
            .fill_color(color)
            .stroke(Stroke::new(1.0, color)),
    )
}

// ---------------------------------------------------------------------------
// Projection helpers
// ---------------------------------------------------------------------------

fn project(p: DVec3) -> DVec2 {
    p.truncate()
}

/// Outline of a circle as a closed polygon.
fn circle_points(center: DVec2, radius: f64, segments: usize) -> Vec<[f64; 2]> {
    (0..segments)
        .map(|i| {
            let angle = std::f64::consts::TAU * i as f64 / segments as f64;
            let p = center + DVec2::from_angle(angle) * radius;
            [p.x, p.y]
        })
        .collect()
}

/// Rectangle of width `2 * radius` around the segment `a`–`b`.
///
/// `None` when the segment has no extent in the view plane.
fn stick_quad(a: DVec2, b: DVec2, radius: f64) -> Option<[[f64; 2]; 4]> {
    let dir = (b - a).try_normalize()?;
    let side = dir.perp() * radius;
    let corners = [a + side, b + side, b - side, a - side];
    Some(corners.map(|c| [c.x, c.y]))
}
