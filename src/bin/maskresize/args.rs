//! Command-line argument definitions and type conversions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crt_mask_resize::resample::{LoopMode, MaskResizeConfig, SampleMode, SincWindow};

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum Window {
    /// Plain normalized sinc (sharper, more ringing)
    Sinc,
    /// Lanczos-windowed sinc (smoother ringing falloff)
    #[default]
    Lanczos,
}

impl Window {
    pub fn to_sinc_window(self) -> SincWindow {
        match self {
            Window::Sinc => SincWindow::Sinc,
            Window::Lanczos => SincWindow::Lanczos,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum Looping {
    /// Dynamic-length loops (normal case)
    #[default]
    Dynamic,
    /// Branch-simulated loops, hard-limited to 128 taps
    BranchSimulated,
    /// Fixed-length loop at the static cap with a zero-weight tail
    StaticOnly,
}

impl Looping {
    pub fn to_loop_mode(self) -> LoopMode {
        match self {
            Looping::Dynamic => LoopMode::Dynamic,
            Looping::BranchSimulated => LoopMode::BranchSimulated,
            Looping::StaticOnly => LoopMode::StaticOnly,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum Pattern {
    /// Aperture grille: vertical RGB stripes
    #[default]
    Grille,
    /// Slot mask: staggered stripes with horizontal gaps
    Slot,
}

// ============================================================================
// Arguments
// ============================================================================

/// Band-limited phosphor mask tile resizer.
///
/// Loads (or generates) a mask LUT, negotiates the final tile geometry
/// against the viewport and visibility constraints, then runs the two-pass
/// separable sinc resize and writes the resized tile as PNG.
#[derive(Parser, Debug)]
#[command(name = "maskresize")]
pub struct Args {
    /// Input mask LUT PNG (sRGB); a pattern is generated when omitted
    pub input: Option<PathBuf>,

    /// Output PNG path for the resized tile
    #[arg(short, long)]
    pub output: PathBuf,

    /// Pattern to generate when no input is given
    #[arg(long, value_enum, default_value_t)]
    pub pattern: Pattern,

    /// Generated tile size in texels (square)
    #[arg(long, default_value_t = 64)]
    pub lut_tile_size: usize,

    /// Tile repeats in the input image, as WxH (e.g. 2x2)
    #[arg(long, default_value = "1x1")]
    pub tiles: String,

    /// Sinc filter lobes
    #[arg(long, default_value_t = 3.0)]
    pub lobes: f32,

    /// Weighting window
    #[arg(long, value_enum, default_value_t)]
    pub window: Window,

    /// Loop regime of the target environment
    #[arg(long, value_enum, default_value_t)]
    pub looping: Looping,

    /// Horizontal triads per mask tile
    #[arg(long, default_value_t = 8.0)]
    pub triads_per_tile: f32,

    /// Minimum visible triad size in pixels
    #[arg(long, default_value_t = 2.0)]
    pub min_triad_size: f32,

    /// Desired on-screen triad size in pixels
    #[arg(long, default_value_t = 3.0)]
    pub triad_size: f32,

    /// Desired triad count across the viewport width (overrides --triad-size)
    #[arg(long)]
    pub num_triads: Option<f32>,

    /// Estimated final viewport size, as WxH
    #[arg(long, default_value = "1920x1080")]
    pub viewport: String,

    /// Print negotiation and tap-planning details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn to_config(&self, lut_tile_size: (f32, f32)) -> MaskResizeConfig {
        MaskResizeConfig {
            lobes: self.lobes,
            window: self.window.to_sinc_window(),
            loop_mode: self.looping.to_loop_mode(),
            lut_tile_size,
            triads_per_tile: self.triads_per_tile,
            min_allowed_triad_size: self.min_triad_size,
            triad_size_desired: self.triad_size,
            num_triads_desired: self.num_triads.unwrap_or(480.0),
            specify_num_triads: self.num_triads.is_some(),
            sample_mode: SampleMode::ResizedTile,
            num_tiles_in_output: (1.0, 1.0),
        }
    }
}

/// Parse a "WxH" pair like "1920x1080".
pub fn parse_size(s: &str) -> Result<(f32, f32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got '{}'", s))?;
    let w: f32 = w.trim().parse().map_err(|_| format!("bad width in '{}'", s))?;
    let h: f32 = h.trim().parse().map_err(|_| format!("bad height in '{}'", s))?;
    if w <= 0.0 || h <= 0.0 {
        return Err(format!("sizes must be positive: '{}'", s));
    }
    Ok((w, h))
}

/// Parse a "WxH" tile-count pair like "2x2".
pub fn parse_tiles(s: &str) -> Result<(usize, usize), String> {
    let (w, h) = parse_size(s)?;
    if w.fract() != 0.0 || h.fract() != 0.0 {
        return Err(format!("tile counts must be integers: '{}'", s));
    }
    Ok((w as usize, h as usize))
}
