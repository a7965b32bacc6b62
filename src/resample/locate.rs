//! First-tap location for one resample axis.

/// Slightly under one half. Using exact 0.5 in the previous-texel floor
/// invites boundary flicker when `curr_texel` lands a rounding error away
/// from a texel edge.
pub const UNDER_HALF: f32 = 0.4995;

/// Tile-relative position of the first tap and its texel distance from the
/// destination sample point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FirstTap {
    /// Tile-relative coordinate in [0, 1).
    pub tile_r: f32,
    /// `curr_texel - first_texel`, unwrapped; may be negative or exceed one
    /// texel, only the per-tap adjusted magnitude matters to the kernel.
    pub dist: f32,
}

/// Find the first (leftmost or topmost) tap for a destination coordinate.
///
/// `dst_uv_r` is the destination coordinate in source-texture uv space
/// along the resampled axis, `src_len` the source texel count along that
/// axis, `tiles_per_src` how many repeating tiles fit in the source, and
/// `taps` the planned loop length (always even, so the tap window stays
/// centered). Subsequent taps advance one texel at a time and wrap with a
/// plain fractional part; only the first tap can be negative and needs the
/// +1 projection into [0, 1).
pub fn locate_first_tap(dst_uv_r: f32, src_len: f32, tiles_per_src: f32, taps: u32) -> FirstTap {
    let curr_texel = dst_uv_r * src_len;
    let prev_texel = (curr_texel - UNDER_HALF).floor() + 0.5;
    let first_texel = prev_texel - (taps as f32 / 2.0 - 1.0);
    let first_tile_wrap = first_texel / src_len * tiles_per_src;
    let mut tile_r = first_tile_wrap.fract();
    if tile_r < 0.0 {
        tile_r += 1.0;
    }
    FirstTap { tile_r, dist: curr_texel - first_texel }
}
