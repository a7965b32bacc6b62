//! Windowed-sinc weight computation and tap accumulation.

use std::f32::consts::PI;

use super::SincWindow;
use crate::pixel::Pixel4;

/// Per-pixel parameters for one axis resample loop.
#[derive(Clone, Copy, Debug)]
pub struct AxisTaps {
    /// First tap's tile-relative coordinate in [0, 1).
    pub first_tile_r: f32,
    /// First tap's unwrapped texel distance from the destination sample.
    pub first_dist: f32,
    /// Loop length; a positive multiple of 4.
    pub executed: u32,
    /// Taps carrying filter weight; taps at or past this index are masked
    /// to zero (fixed-length loop regime).
    pub active: u32,
    /// Destination samples per source texel along this axis.
    pub magnification_scale: f32,
    /// Tile-relative step between adjacent taps (one source texel).
    pub tile_texel_step: f32,
}

/// Windowed-sinc tap weight at `dist` output pixels from the sample point.
/// Clamped to 1.0 so the near-zero denominator cannot blow up; the tap that
/// coincides with the sample point gets exactly 1.0.
#[inline]
fn tap_weight(dist: f32, window: SincWindow, lobes: f32) -> f32 {
    if dist < 1e-6 {
        return 1.0;
    }
    let pi_dist = PI * dist;
    let w = match window {
        SincWindow::Sinc => pi_dist.sin() / pi_dist,
        SincWindow::Lanczos => {
            let pi_dist_over_lobes = pi_dist / lobes;
            (pi_dist.sin() * pi_dist_over_lobes.sin()) / (pi_dist * pi_dist_over_lobes)
        }
    };
    w.min(1.0)
}

/// Accumulate all taps for one output pixel along one axis.
///
/// Taps are processed in batches of 4 over fixed-size lanes so the loop
/// vectorizes. `sample` reads the source at a tile-relative coordinate in
/// [0, 1), base level only. Returns the weighted color sum and the weight
/// sum; the caller normalizes once after the loop rather than dividing
/// per tap.
pub fn resample_axis<S: Fn(f32) -> Pixel4>(
    taps: &AxisTaps,
    window: SincWindow,
    lobes: f32,
    sample: S,
) -> (Pixel4, f32) {
    let mut color_sum = Pixel4::default();
    let mut weight_sum = 0.0f32;

    let mut i_base = 0u32;
    while i_base < taps.executed {
        let mut tile_r = [0.0f32; 4];
        let mut weights = [0.0f32; 4];
        for lane in 0..4u32 {
            let true_i = (i_base + lane) as f32;
            tile_r[lane as usize] =
                (taps.first_tile_r + true_i * taps.tile_texel_step).fract();
            let dist = taps.magnification_scale * (taps.first_dist - true_i).abs();
            weights[lane as usize] = if i_base + lane < taps.active {
                tap_weight(dist, window, lobes)
            } else {
                0.0
            };
        }
        for lane in 0..4 {
            color_sum = color_sum + sample(tile_r[lane]) * weights[lane];
            weight_sum += weights[lane];
        }
        i_base += 4;
    }

    (color_sum, weight_sum)
}
