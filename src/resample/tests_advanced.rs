//! Advanced resample tests: loop-regime equivalence, degraded trust modes,
//! tiled inputs, energy preservation, stress dimensions.

use super::*;
use crate::mask::{aperture_grille, MaskLut};
use crate::pixel::Pixel4;

// ========================================================================
// Trust asymmetry
// ========================================================================

#[test]
fn test_trust_asymmetry_keeps_y_stable() {
    // Wide 128x64 LUT (aspect 2). The x component of the resize output is
    // garbage (10), clamping x down hard. With untrusted input the bogus x
    // must not drag y down; under sworn-consistent input y follows x.
    let cfg = MaskResizeConfig {
        lut_tile_size: (128.0, 64.0),
        triads_per_tile: 16.0,
        min_allowed_triad_size: 1.0,
        triad_size_desired: 4.0,
        ..Default::default()
    };
    let d = derive_constants(&cfg);
    let viewport = (1920.0, 1080.0);
    let bogus_x_output = (10.0, 256.0);

    let untrusted = negotiate_tile_size(&cfg, &d, viewport, bogus_x_output, false);
    // y keeps its own clamp result (32); x is limited by max_tile_size.x.
    // The tile is vertically stretched relative to the 2:1 native aspect -
    // the documented degraded mode.
    assert_eq!(untrusted, (10.0, 32.0));

    let trusted = negotiate_tile_size(&cfg, &d, viewport, bogus_x_output, true);
    // With both axes sworn consistent, y is limited from x and the native
    // aspect ratio is restored: 10 / 5 = 128 / 64
    assert_eq!(trusted, (10.0, 5.0));
}

// ========================================================================
// Loop regime equivalence
// ========================================================================

#[test]
fn test_static_only_matches_dynamic_exactly() {
    // The masked tail of the static loop adds zero weight and zero color,
    // so the fixed-length regime must be bit-identical to the dynamic one
    let lut = aperture_grille(32, 32, 8);
    let base = MaskResizeConfig {
        lut_tile_size: (32.0, 32.0),
        min_allowed_triad_size: 1.0,
        ..Default::default()
    };
    let dynamic_cfg = MaskResizeConfig { loop_mode: LoopMode::Dynamic, ..base };
    let static_cfg = MaskResizeConfig { loop_mode: LoopMode::StaticOnly, ..base };

    // The regime only differs when the static loop is longer than the
    // active window; make sure this configuration actually has a tail
    let ctx = derive_constants(&base);
    let plan = plan_tap_count(0.5, base.lobes, LoopMode::StaticOnly, &ctx);
    assert!(plan.executed > plan.active, "plan {:?} has no masked tail", plan);

    let a = resize_mask_tile(&lut, &dynamic_cfg, 16, 16);
    let b = resize_mask_tile(&lut, &static_cfg, 16, 16);
    assert_eq!(a.pixels(), b.pixels());
}

#[test]
fn test_static_only_window_stays_centered() {
    // The tap window must be centered on the weight-bearing taps, not on
    // the full static loop length: an identity resize under StaticOnly
    // still has to land the unit-weight tap exactly on each source texel
    let lut = aperture_grille(12, 12, 4);
    let cfg = MaskResizeConfig {
        lobes: 2.0,
        loop_mode: LoopMode::StaticOnly,
        lut_tile_size: (12.0, 12.0),
        min_allowed_triad_size: 1.0,
        ..Default::default()
    };
    let ctx = derive_constants(&cfg);
    let plan = plan_tap_count(1.0, cfg.lobes, LoopMode::StaticOnly, &ctx);
    assert!(plan.executed > plan.active, "plan {:?} has no masked tail", plan);

    let out = resize_mask_tile(&lut, &cfg, 12, 12);
    for y in 0..12 {
        for x in 0..12 {
            let a = lut.texel(x, y);
            let b = out.texel(x, y);
            for c in 0..3 {
                assert!(
                    (a[c] - b[c]).abs() < 1e-3,
                    "mismatch at ({}, {}) channel {}: {} vs {}",
                    x,
                    y,
                    c,
                    a[c],
                    b[c]
                );
            }
        }
    }
}

#[test]
fn test_branch_simulated_matches_dynamic_under_limit() {
    // Below the 128-tap ceiling both regimes plan the same loop
    let lut = aperture_grille(32, 32, 8);
    let base = MaskResizeConfig {
        lut_tile_size: (32.0, 32.0),
        ..Default::default()
    };
    let dynamic_cfg = MaskResizeConfig { loop_mode: LoopMode::Dynamic, ..base };
    let branch_cfg = MaskResizeConfig { loop_mode: LoopMode::BranchSimulated, ..base };

    let a = resize_mask_tile(&lut, &dynamic_cfg, 16, 16);
    let b = resize_mask_tile(&lut, &branch_cfg, 16, 16);
    assert_eq!(a.pixels(), b.pixels());
}

// ========================================================================
// Two-pass resize behavior
// ========================================================================

#[test]
fn test_two_pass_constant_source_stays_constant() {
    let pixels = vec![Pixel4::splat(0.5); 16 * 16];
    let lut = MaskLut::from_pixels(pixels, 16, 16, 1, 1);
    let cfg = MaskResizeConfig {
        lut_tile_size: (16.0, 16.0),
        min_allowed_triad_size: 1.0,
        ..Default::default()
    };
    for window in [SincWindow::Sinc, SincWindow::Lanczos] {
        let out = resize_mask_tile(&lut, &MaskResizeConfig { window, ..cfg }, 8, 8);
        for (i, p) in out.pixels().iter().enumerate() {
            for c in 0..3 {
                assert!(
                    (p[c] - 0.5).abs() < 1e-4,
                    "pixel {} channel {} = {} ({:?})",
                    i,
                    c,
                    p[c],
                    window
                );
            }
        }
    }
}

#[test]
fn test_tiled_input_matches_single_tile() {
    // A 2x2 repeat of the same tile must resize to exactly the same result
    // as the lone tile: the locator works in tile space, so the extra
    // repeats only change the uv bookkeeping
    let tile = aperture_grille(16, 16, 4);
    let mut tiled = Vec::with_capacity(32 * 32);
    for y in 0..32 {
        for x in 0..32 {
            tiled.push(tile.texel(x % 16, y % 16));
        }
    }
    let tiled = MaskLut::from_pixels(tiled, 32, 32, 2, 2);

    let cfg = MaskResizeConfig {
        lut_tile_size: (16.0, 16.0),
        min_allowed_triad_size: 1.0,
        ..Default::default()
    };
    let a = resize_mask_tile(&tile, &cfg, 8, 8);
    let b = resize_mask_tile(&tiled, &cfg, 8, 8);
    assert_eq!(a.pixels(), b.pixels());
}

#[test]
fn test_grille_downsize_preserves_energy() {
    let lut = aperture_grille(64, 64, 8);
    let cfg = MaskResizeConfig::default();
    let out = resize_mask_tile(&lut, &cfg, 32, 32);

    let mean = |pixels: &[Pixel4], c: usize| {
        pixels.iter().map(|p| p[c]).sum::<f32>() / pixels.len() as f32
    };
    for c in 0..3 {
        let src_mean = mean(lut.pixels(), c);
        let dst_mean = mean(out.pixels(), c);
        assert!(
            (src_mean - dst_mean).abs() < 0.08,
            "channel {} mean drifted: {} -> {}",
            c,
            src_mean,
            dst_mean
        );
    }
    for p in out.pixels() {
        for c in 0..3 {
            assert!(p[c].is_finite());
        }
    }
}

#[test]
fn test_upsize_uses_filter_floor() {
    // Upsizing plans the 4-tap floor and must stay well-behaved
    let lut = aperture_grille(8, 8, 2);
    let cfg = MaskResizeConfig {
        lut_tile_size: (8.0, 8.0),
        min_allowed_triad_size: 1.0,
        ..Default::default()
    };
    let out = resize_mask_tile(&lut, &cfg, 32, 32);
    assert_eq!(out.pixels().len(), 32 * 32);
    for p in out.pixels() {
        for c in 0..3 {
            assert!(p[c].is_finite());
            assert!(p[c] > -0.5 && p[c] < 1.5, "wild ringing: {}", p[c]);
        }
    }
}

#[test]
fn test_prime_dimensions_stress() {
    // Prime sizes produce non-repeating tap phases and exercise the wrap
    // and distance bookkeeping
    let lut = aperture_grille(61, 53, 7);
    let cfg = MaskResizeConfig {
        lut_tile_size: (61.0, 53.0),
        min_allowed_triad_size: 1.0,
        triads_per_tile: 7.0,
        ..Default::default()
    };
    let out = resize_mask_tile(&lut, &cfg, 23, 19);
    assert_eq!(out.pixels().len(), 23 * 19);
    for (i, p) in out.pixels().iter().enumerate() {
        for c in 0..3 {
            assert!(p[c].is_finite(), "pixel {} channel {} not finite", i, c);
            assert!(p[c] > -0.5 && p[c] < 1.5, "pixel {} channel {} = {}", i, c, p[c]);
        }
    }
}

// ========================================================================
// Negotiation + resize integration
// ========================================================================

#[test]
fn test_negotiated_size_drives_resize() {
    let cfg = MaskResizeConfig {
        triad_size_desired: 4.0,
        num_tiles_in_output: (4.0, 4.0),
        ..Default::default()
    };
    let d = derive_constants(&cfg);
    let (w, h) = negotiate_tile_size(&cfg, &d, (1920.0, 1080.0), (512.0, 256.0), true);
    assert_eq!((w, h), (32.0, 32.0));

    let lut = aperture_grille(64, 64, 8);
    let out = resize_mask_tile(&lut, &cfg, w as usize, h as usize);
    assert_eq!(out.width(), 32);
    assert_eq!(out.height(), 32);
}
