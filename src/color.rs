use eframe::egui::Color32;
use palette::{LinSrgba, Srgba};

// ---------------------------------------------------------------------------
// Material colours
// ---------------------------------------------------------------------------

/// RGBA material colour in linear space, the way a renderer's base colour
/// input expects it.
pub type Rgba = LinSrgba<f32>;

/// Fixed blue channel of the ball gradient.
const BALL_BLUE: f32 = 0.8;

/// Neutral gray shared by every stick.
pub const STICK_COLOR: Rgba = LinSrgba::new(0.8, 0.8, 0.8, 1.0);

/// Red-to-green gradient by row: `(i/N, 1 - i/N, 0.8, 1)`.
///
/// `count` is the total number of rows; with `count == 0` the first colour
/// is returned rather than dividing by zero.
pub fn ball_color(index: usize, count: usize) -> Rgba {
    let t = if count == 0 {
        0.0
    } else {
        index as f32 / count as f32
    };
    LinSrgba::new(t, 1.0 - t, BALL_BLUE, 1.0)
}

// ---------------------------------------------------------------------------
// Display conversion
// ---------------------------------------------------------------------------

/// Convert a linear material colour into an sRGB `Color32` for egui.
pub fn to_color32(color: Rgba) -> Color32 {
    let srgb: Srgba<u8> = Srgba::from_linear(color);
    Color32::from_rgba_unmultiplied(srgb.red, srgb.green, srgb.blue, srgb.alpha)
}
