//! Ball-stick layout: maps (x, y) samples to sphere placements and the
//! cylinder connectors between consecutive rows.
//!
//! ```text
//!   CsvTable ──resolve──▶ ColumnSchema ──samples──▶ Vec<Sample>
//!                                                      │
//!                                   min-max normalise  ▼
//!                                          Vec<NormalizedSample>
//!                                                      │
//!                                    scale by spacing  ▼
//!                                  Layout { placements, connectors }
//! ```
//!
//! The layout is a pure computation; turning it into scene objects is the job
//! of [`crate::scene::realize`].

use glam::{DQuat, DVec3};
use serde::Serialize;

use crate::color::{self, Rgba};
use crate::data::table::CsvTable;
use crate::error::LayoutError;

// ---------------------------------------------------------------------------
// Data model
// ---------------------------------------------------------------------------

/// One input row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// 0-based row index; defines draw order and stick connectivity.
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

/// A sample after min-max normalisation.
///
/// Each axis lies in `[0, 1]` unless its column was constant, in which case
/// the raw value is passed through unscaled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedSample {
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

/// One ball.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub index: usize,
    pub position: DVec3,
    pub radius: f64,
    pub color: Rgba,
}

/// One stick between placement `index` and `index + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Connector {
    pub index: usize,
    pub start: DVec3,
    pub end: DVec3,
    pub radius: f64,
    pub color: Rgba,
}

impl Connector {
    /// Vector from start to end.
    pub fn direction(&self) -> DVec3 {
        self.end - self.start
    }

    pub fn length(&self) -> f64 {
        self.direction().length()
    }

    pub fn midpoint(&self) -> DVec3 {
        (self.start + self.end) * 0.5
    }
}

/// Rotation that maps +Z onto `axis`. Zero or non-finite axes give identity.
pub fn align_z_to(axis: DVec3) -> DQuat {
    match axis.try_normalize() {
        Some(dir) => DQuat::from_rotation_arc(DVec3::Z, dir),
        None => DQuat::IDENTITY,
    }
}

/// The full set of geometry instructions for one visualisation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    pub placements: Vec<Placement>,
    pub connectors: Vec<Connector>,
}

impl Layout {
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// Scalar tunables of a layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Extent multiplier: normalised coordinates are scaled by this.
    pub spacing: f64,
    pub ball_radius: f64,
    pub stick_radius: f64,
}

impl LayoutParams {
    /// Every parameter must be finite and strictly positive.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for (name, value) in [
            ("spacing", self.spacing),
            ("ball radius", self.ball_radius),
            ("stick radius", self.stick_radius),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Lay out the `x_field`/`y_field` columns of `table` as balls and sticks.
pub fn layout(
    table: &CsvTable,
    x_field: &str,
    y_field: &str,
    params: &LayoutParams,
) -> Result<Layout, LayoutError> {
    let schema = table.resolve(x_field, y_field)?;
    let samples = table.samples(&schema)?;
    layout_samples(&samples, params)
}

/// Lay out already-extracted samples. `samples` must be in row order.
pub fn layout_samples(samples: &[Sample], params: &LayoutParams) -> Result<Layout, LayoutError> {
    params.validate()?;

    let count = samples.len();
    let placements: Vec<Placement> = normalize(samples)
        .into_iter()
        .map(|n| Placement {
            index: n.index,
            position: DVec3::new(n.x * params.spacing, n.y * params.spacing, 0.0),
            radius: params.ball_radius,
            color: color::ball_color(n.index, count),
        })
        .collect();

    let connectors = placements
        .windows(2)
        .map(|pair| Connector {
            index: pair[0].index,
            start: pair[0].position,
            end: pair[1].position,
            radius: params.stick_radius,
            color: color::STICK_COLOR,
        })
        .collect();

    log::debug!("laid out {count} samples (spacing {})", params.spacing);
    Ok(Layout {
        placements,
        connectors,
    })
}

/// Min-max normalise both columns over the full sequence.
pub fn normalize(samples: &[Sample]) -> Vec<NormalizedSample> {
    let (x_min, x_max) = min_max(samples.iter().map(|s| s.x));
    let (y_min, y_max) = min_max(samples.iter().map(|s| s.y));

    samples
        .iter()
        .map(|s| NormalizedSample {
            index: s.index,
            x: scale(s.x, x_min, x_max),
            y: scale(s.y, y_min, y_max),
        })
        .collect()
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

/// Constant columns keep their raw value.
///
/// Works on halved values so `max - min` stays finite for columns spanning
/// more than `f64::MAX`.
fn scale(v: f64, min: f64, max: f64) -> f64 {
    if max != min {
        (v * 0.5 - min * 0.5) / (max * 0.5 - min * 0.5)
    } else {
        v
    }
}
