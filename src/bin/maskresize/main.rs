//! maskresize - band-limited phosphor mask pre-resizer
//!
//! Pipeline: input sRGB LUT -> linear RGB -> tile-size negotiation ->
//! two-pass sinc resize -> sRGB output PNG. All filtering happens in
//! linear RGB.

mod args;

use args::*;
use clap::Parser;
use std::path::Path;

use crt_mask_resize::color::{linear_to_srgb_single, srgb_to_linear_single};
use crt_mask_resize::mask::{aperture_grille, slot_mask, MaskLut};
use crt_mask_resize::pixel::Pixel4;
use crt_mask_resize::resample::{
    derive_constants, negotiate_tile_size, plan_tap_count, resize_mask_tile,
};

/// The mask-resize pass renders at a fixed fraction of the viewport; the
/// negotiator's output-size estimate reproduces that relation.
const MASK_RESIZE_VIEWPORT_SCALE: (f32, f32) = (0.0625, 0.0625);

fn load_lut(path: &Path, tiles: (usize, usize)) -> Result<MaskLut, String> {
    let img = image::open(path)
        .map_err(|e| format!("failed to open {}: {}", path.display(), e))?
        .to_rgb8();
    let (w, h) = (img.width() as usize, img.height() as usize);
    if tiles.0 == 0 || tiles.1 == 0 || w % tiles.0 != 0 || h % tiles.1 != 0 {
        return Err(format!(
            "tile counts {}x{} do not divide the {}x{} image",
            tiles.0, tiles.1, w, h
        ));
    }
    let mut pixels = Vec::with_capacity(w * h);
    for p in img.pixels() {
        pixels.push(Pixel4::rgb(
            srgb_to_linear_single(p[0] as f32 / 255.0),
            srgb_to_linear_single(p[1] as f32 / 255.0),
            srgb_to_linear_single(p[2] as f32 / 255.0),
        ));
    }
    Ok(MaskLut::from_pixels(pixels, w, h, tiles.0, tiles.1))
}

fn save_png(lut: &MaskLut, path: &Path) -> Result<(), String> {
    let mut img = image::RgbImage::new(lut.width() as u32, lut.height() as u32);
    for (x, y, out) in img.enumerate_pixels_mut() {
        let p = lut.texel(x as usize, y as usize);
        let encode = |v: f32| (linear_to_srgb_single(v).clamp(0.0, 1.0) * 255.0).round() as u8;
        *out = image::Rgb([encode(p.r()), encode(p.g()), encode(p.b())]);
    }
    img.save(path)
        .map_err(|e| format!("failed to write {}: {}", path.display(), e))
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let tiles = parse_tiles(&args.tiles)?;
    let viewport = parse_size(&args.viewport)?;

    let lut = match &args.input {
        Some(path) => load_lut(path, tiles)?,
        None => {
            let n = args.lut_tile_size;
            let triads = args.triads_per_tile.round() as usize;
            match args.pattern {
                Pattern::Grille => aperture_grille(n, n, triads),
                Pattern::Slot => slot_mask(n, n, triads),
            }
        }
    };

    let cfg = args.to_config((lut.tile_width() as f32, lut.tile_height() as f32));
    let ctx = derive_constants(&cfg);

    let resize_output = (
        viewport.0 * MASK_RESIZE_VIEWPORT_SCALE.0,
        viewport.1 * MASK_RESIZE_VIEWPORT_SCALE.1,
    );
    // One caller supplies identical sizes for both passes, so both axes of
    // the output estimate are trustworthy here.
    let (tile_w, tile_h) = negotiate_tile_size(&cfg, &ctx, viewport, resize_output, true);
    let (out_w, out_h) = (tile_w.max(1.0) as usize, tile_h.max(1.0) as usize);

    if args.verbose {
        eprintln!(
            "LUT: {}x{} texels, {}x{} tiles ({}x{} per tile)",
            lut.width(),
            lut.height(),
            lut.tiles_x(),
            lut.tiles_y(),
            lut.tile_width(),
            lut.tile_height()
        );
        eprintln!(
            "negotiated tile: {}x{} (min tile {}, tap cap {})",
            out_w, out_h, ctx.min_allowed_tile_size, ctx.max_taps_m4
        );
        let scale_x = out_w as f32 / lut.tile_width() as f32;
        let scale_y = out_h as f32 / lut.tile_height() as f32;
        let px = plan_tap_count(scale_x, cfg.lobes, cfg.loop_mode, &ctx);
        let py = plan_tap_count(scale_y, cfg.lobes, cfg.loop_mode, &ctx);
        eprintln!(
            "taps: horizontal {}/{} vertical {}/{} (active/executed)",
            px.active, px.executed, py.active, py.executed
        );
    }

    let resized = resize_mask_tile(&lut, &cfg, out_w, out_h);
    save_png(&resized, &args.output)?;

    if args.verbose {
        eprintln!("wrote {}", args.output.display());
    }
    Ok(())
}
