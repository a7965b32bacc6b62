//! Adaptive tap-count planning for the sinc resize loop.

use super::{DerivedConstants, LoopMode};

/// Branch-simulated loops become prohibitively expensive past this length.
pub const BRANCH_SIM_MAX_TAPS: u32 = 128;

/// Planned loop length for one resample axis.
///
/// `executed` is the number of taps the inner loop runs; `active` is how
/// many of them carry nonzero filter weight. The two differ only under
/// `LoopMode::StaticOnly`, where the loop length is fixed at the global
/// cap and the tail is masked out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TapPlan {
    pub executed: u32,
    pub active: u32,
}

/// Minimum number of samples for a correct band-limited downsize at
/// `magnification_scale`, rounded up to a multiple of 4 for the vectorized
/// loop. The filter spans `2 * lobes` output pixels, so the input-texel
/// support grows as the scale shrinks.
#[inline]
fn min_taps_m4(magnification_scale: f32, lobes: f32) -> u32 {
    let min_samples = 2.0 * lobes / magnification_scale;
    ((min_samples * 0.25).ceil() * 4.0) as u32
}

/// Decide how many taps contribute to one output pixel along one axis.
///
/// `magnification_scale` is destination samples per source texel (< 1 means
/// minification) and must be positive; `ctx.max_taps_m4` is the precomputed
/// worst-case cap sized from the smallest allowed tile.
pub fn plan_tap_count(
    magnification_scale: f32,
    lobes: f32,
    loop_mode: LoopMode,
    ctx: &DerivedConstants,
) -> TapPlan {
    let min_m4 = min_taps_m4(magnification_scale, lobes);
    match loop_mode {
        LoopMode::Dynamic => {
            let n = min_m4.min(ctx.max_taps_m4);
            TapPlan { executed: n, active: n }
        }
        LoopMode::BranchSimulated => {
            let n = min_m4.min(BRANCH_SIM_MAX_TAPS.min(ctx.max_taps_m4));
            TapPlan { executed: n, active: n }
        }
        LoopMode::StaticOnly => TapPlan {
            executed: ctx.max_taps_m4,
            active: min_m4.min(ctx.max_taps_m4),
        },
    }
}
