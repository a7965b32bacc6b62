//! Tile-size negotiation for the resized mask.
//!
//! The horizontal and vertical resize passes run independently and cannot
//! observe each other's true output size, yet both must lay out the exact
//! same integral tile. The negotiation below is a pure function of stated
//! inputs, so every pass that supplies the same inputs converges on the
//! same geometry without shared state.

use super::{DerivedConstants, MaskResizeConfig, SampleMode};

/// Added before the final floor so a value an ulp below a whole number is
/// not truncated one unit too low (2^-16).
pub const FLOOR_EPSILON: f32 = 1.0 / 65536.0;

/// Compute the final size of the resized mask tile.
///
/// `viewport_size` is the estimated final on-screen size. If the user asked
/// for a triad count and the estimate is wrong, the realized count will be
/// off by the same factor.
///
/// `resize_output_size` must equal the output size of the mask-resize pass;
/// its x component may be garbage if and only if the caller discards the x
/// result this pass.
///
/// `trust_both_axes` must stay false unless every call across every pass
/// this frame uses the same sizes for the other parameters. The y estimate
/// is trustworthy by convention, so x is always limited from y; y is
/// limited from x only under this flag. Letting an untrustworthy x shrink y
/// here but not in a later pass would desynchronize the passes and break
/// the tiled sampling coordinates downstream, so under untrusted input the
/// tile can come out vertically stretched instead (wide LUTs or portrait
/// viewports) - a documented degraded mode, not an error.
pub fn negotiate_tile_size(
    cfg: &MaskResizeConfig,
    ctx: &DerivedConstants,
    viewport_size: (f32, f32),
    resize_output_size: (f32, f32),
    trust_both_axes: bool,
) -> (f32, f32) {
    let aspect_ratio_inv = cfg.lut_tile_size.1 / cfg.lut_tile_size.0;
    let aspect_ratio = 1.0 / aspect_ratio_inv;

    let desired_tile_size_x = cfg.triads_per_tile
        * if cfg.specify_num_triads {
            viewport_size.0 / cfg.num_triads_desired
        } else {
            cfg.triad_size_desired
        };

    // Direct LUT sampling needs no constraints at all.
    if cfg.sample_mode == SampleMode::DirectLut {
        return (desired_tile_size_x, desired_tile_size_x * aspect_ratio_inv);
    }

    // Never upsize past the native LUT tile.
    let temp_tile_size_x = desired_tile_size_x.min(cfg.lut_tile_size.0);

    // Expand to both axes with the fixed native aspect, then clamp into
    // [min_tile_size, max_tile_size]. The max bound wins when an unreliable
    // output estimate inverts the interval.
    let temp = (temp_tile_size_x, temp_tile_size_x * aspect_ratio_inv);
    let min_tile_size = (
        ctx.min_allowed_tile_size,
        ctx.min_allowed_tile_size * aspect_ratio_inv,
    );
    let max_tile_size = (
        resize_output_size.0 / cfg.num_tiles_in_output.0,
        resize_output_size.1 / cfg.num_tiles_in_output.1,
    );
    let clamped = (
        temp.0.max(min_tile_size.0).min(max_tile_size.0),
        temp.1.max(min_tile_size.1).min(max_tile_size.1),
    );

    // Aspect reconciliation. Only one axis of resize_output_size is
    // accurate per pass: y always carries a trustworthy estimate, x only
    // does when the caller swears to it, so the x size is limited from y
    // unconditionally and y from x only under the flag.
    let x_from_y = clamped.1 * aspect_ratio;
    let y_from_x = if trust_both_axes {
        clamped.0 * aspect_ratio_inv
    } else {
        clamped.1
    };
    let reclamped = (clamped.0.min(x_from_y), clamped.1.min(y_from_x));

    // Integral sizes in both directions keep tiled sampling exact; floor
    // rather than round so we never exceed the clamped bounds.
    (
        (reclamped.0 + FLOOR_EPSILON).floor(),
        (reclamped.1 + FLOOR_EPSILON).floor(),
    )
}
