//! Separable band-limited mask resizing.
//!
//! # Module structure
//! - `taps`: adaptive tap-count planning under the execution environment's
//!   loop-length limits
//! - `locate`: first-tap position and distance for one axis
//! - `kernel`: windowed-sinc weighting and batch-of-4 accumulation
//! - `tile_size`: cross-pass tile-size negotiation
//!
//! The driver here runs the two 1D passes (horizontal, then vertical over
//! the horizontal output) and normalizes each output pixel. Everything is a
//! pure function of its inputs; the only cross-pass contract is that the
//! caller sequences the passes and feeds each the same stated sizes.

mod kernel;
mod locate;
mod taps;
mod tile_size;

#[cfg(test)]
mod tests_advanced;

pub use kernel::{resample_axis, AxisTaps};
pub use locate::{locate_first_tap, FirstTap, UNDER_HALF};
pub use taps::{plan_tap_count, TapPlan, BRANCH_SIM_MAX_TAPS};
pub use tile_size::{negotiate_tile_size, FLOOR_EPSILON};

use crate::mask::MaskLut;
use crate::pixel::Pixel4;

/// Weighting function for the resize filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SincWindow {
    /// Plain normalized sinc.
    Sinc,
    /// Lanczos-windowed sinc; slower falloff control, smoother ringing.
    #[default]
    Lanczos,
}

/// Looping capability of the execution environment, selected once at
/// configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopMode {
    /// Arbitrary dynamic-length loops are fine.
    #[default]
    Dynamic,
    /// Loops are simulated by coarse branching; lengths past 128 taps are
    /// off the table.
    BranchSimulated,
    /// No dynamic sizing at all: every pixel runs the full static loop and
    /// the unused tail is masked to zero weight.
    StaticOnly,
}

/// Whether the scanline stage samples the pre-resized tile or the raw LUT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleMode {
    /// Sample the pre-resized mask tile; tile geometry must be negotiated.
    #[default]
    ResizedTile,
    /// Sample the LUT directly; the resize stage is bypassed and the
    /// desired tile size needs no constraints.
    DirectLut,
}

/// Stated mask geometry and user sizing preferences. All values are
/// assumed well-formed positive numbers supplied by the configuration
/// layer; nothing here validates them.
#[derive(Debug, Clone, Copy)]
pub struct MaskResizeConfig {
    /// Sinc lobe count; fixed per configuration and shared by the planner
    /// and the weight kernel.
    pub lobes: f32,
    pub window: SincWindow,
    pub loop_mode: LoopMode,
    /// Native LUT tile size in texels.
    pub lut_tile_size: (f32, f32),
    /// Horizontal triads per mask tile.
    pub triads_per_tile: f32,
    /// Visibility floor: triads smaller than this are pointless to render.
    pub min_allowed_triad_size: f32,
    /// Desired on-screen triad size in pixels.
    pub triad_size_desired: f32,
    /// Desired triad count across the viewport width.
    pub num_triads_desired: f32,
    /// Interpret the preference as a count instead of a size.
    pub specify_num_triads: bool,
    pub sample_mode: SampleMode,
    /// Repeating tiles that fit in the resize pass output, per axis.
    pub num_tiles_in_output: (f32, f32),
}

impl Default for MaskResizeConfig {
    fn default() -> Self {
        Self {
            lobes: 3.0,
            window: SincWindow::default(),
            loop_mode: LoopMode::default(),
            lut_tile_size: (64.0, 64.0),
            triads_per_tile: 8.0,
            min_allowed_triad_size: 2.0,
            triad_size_desired: 3.0,
            num_triads_desired: 480.0,
            specify_num_triads: false,
            sample_mode: SampleMode::default(),
            num_tiles_in_output: (1.0, 1.0),
        }
    }
}

/// Constants derived once from the configuration and passed explicitly to
/// the planner and negotiator.
#[derive(Debug, Clone, Copy)]
pub struct DerivedConstants {
    /// Smallest tile the visibility floor allows, in pixels.
    pub min_allowed_tile_size: f32,
    /// Worst-case tap count: the larger the resized tile, the fewer
    /// samples a downsize needs, so the cap is sized from the smallest
    /// allowed tile. Rounded up to a multiple of 4.
    pub max_taps_m4: u32,
}

pub fn derive_constants(cfg: &MaskResizeConfig) -> DerivedConstants {
    let min_allowed_tile_size = (cfg.min_allowed_triad_size * cfg.triads_per_tile).ceil();
    let max_samples = 2.0 * cfg.lobes * cfg.lut_tile_size.0 / min_allowed_tile_size;
    DerivedConstants {
        min_allowed_tile_size,
        max_taps_m4: ((max_samples * 0.25).ceil() * 4.0) as u32,
    }
}

/// Resize the LUT's repeating tile to `out_w` x `out_h` with the separable
/// sinc filter: a horizontal pass over every source row, then a vertical
/// pass over the horizontal output. Returns a single resized tile.
pub fn resize_mask_tile(
    lut: &MaskLut,
    cfg: &MaskResizeConfig,
    out_w: usize,
    out_h: usize,
) -> MaskLut {
    let ctx = derive_constants(cfg);

    // Pass 1: horizontal, tile_w -> out_w across all source rows.
    let src_w = lut.width() as f32;
    let tiles_x = lut.tiles_x() as f32;
    let tile_w = lut.tile_width() as f32;
    let scale_x = out_w as f32 / tile_w;
    let plan_x = plan_tap_count(scale_x, cfg.lobes, cfg.loop_mode, &ctx);
    let step_x = 1.0 / tile_w;

    let mut temp = vec![Pixel4::default(); out_w * lut.height()];
    for y in 0..lut.height() {
        for x in 0..out_w {
            // Destination pixel center mapped into the first source tile.
            // The window is centered on the active taps; under a fixed
            // static loop the masked tail carries no weight and must not
            // shift the first tap.
            let dst_r = (x as f32 + 0.5) / out_w as f32 / tiles_x;
            let first = locate_first_tap(dst_r, src_w, tiles_x, plan_x.active);
            let taps = AxisTaps {
                first_tile_r: first.tile_r,
                first_dist: first.dist,
                executed: plan_x.executed,
                active: plan_x.active,
                magnification_scale: scale_x,
                tile_texel_step: step_x,
            };
            let (color, weight) =
                resample_axis(&taps, cfg.window, cfg.lobes, |r| lut.sample_tile_row(r, y));
            temp[y * out_w + x] = normalize(color, weight);
        }
    }

    // Pass 2: vertical over the intermediate, tile_h -> out_h.
    let src_h = lut.height() as f32;
    let tiles_y = lut.tiles_y() as f32;
    let tile_h = lut.tile_height() as f32;
    let scale_y = out_h as f32 / tile_h;
    let plan_y = plan_tap_count(scale_y, cfg.lobes, cfg.loop_mode, &ctx);
    let step_y = 1.0 / tile_h;
    let tile_h_texels = lut.tile_height();

    let mut dst = vec![Pixel4::default(); out_w * out_h];
    for y in 0..out_h {
        let dst_r = (y as f32 + 0.5) / out_h as f32 / tiles_y;
        let first = locate_first_tap(dst_r, src_h, tiles_y, plan_y.active);
        for x in 0..out_w {
            let taps = AxisTaps {
                first_tile_r: first.tile_r,
                first_dist: first.dist,
                executed: plan_y.executed,
                active: plan_y.active,
                magnification_scale: scale_y,
                tile_texel_step: step_y,
            };
            let (color, weight) = resample_axis(&taps, cfg.window, cfg.lobes, |r| {
                let sy = ((r * tile_h) as usize).min(tile_h_texels - 1);
                temp[sy * out_w + x]
            });
            dst[y * out_w + x] = normalize(color, weight);
        }
    }

    MaskLut::from_pixels(dst, out_w, out_h, 1, 1)
}

/// Deferred normalization: one divide per output pixel, after the loop.
#[inline]
fn normalize(color: Pixel4, weight: f32) -> Pixel4 {
    if weight.abs() > 1e-8 {
        color / weight
    } else {
        color
    }
}
