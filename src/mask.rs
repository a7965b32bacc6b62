//! Tiled phosphor-mask LUT storage and sampling.
//!
//! A mask LUT holds linear-RGB texels for a pattern that repeats a fixed
//! tile an integer number of times per axis. Reads during resampling are
//! nearest-texel at the base resolution only; sinc filtering near tile
//! seams misbehaves under automatic mip or anisotropic selection, so the
//! equivalent of a mip-pinned read is the only sampling path offered.

use crate::pixel::Pixel4;

/// Tiled mask LUT in linear RGB.
#[derive(Clone, Debug)]
pub struct MaskLut {
    pixels: Vec<Pixel4>,
    width: usize,
    height: usize,
    tiles_x: usize,
    tiles_y: usize,
}

impl MaskLut {
    /// Wrap raw linear-RGB texels. The tile counts must divide the image
    /// dimensions evenly.
    pub fn from_pixels(
        pixels: Vec<Pixel4>,
        width: usize,
        height: usize,
        tiles_x: usize,
        tiles_y: usize,
    ) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        debug_assert_eq!(width % tiles_x, 0);
        debug_assert_eq!(height % tiles_y, 0);
        Self { pixels, width, height, tiles_x, tiles_y }
    }

    #[inline]
    pub fn width(&self) -> usize { self.width }
    #[inline]
    pub fn height(&self) -> usize { self.height }
    #[inline]
    pub fn tiles_x(&self) -> usize { self.tiles_x }
    #[inline]
    pub fn tiles_y(&self) -> usize { self.tiles_y }

    /// Width of one repeating tile in texels.
    #[inline]
    pub fn tile_width(&self) -> usize { self.width / self.tiles_x }

    /// Height of one repeating tile in texels.
    #[inline]
    pub fn tile_height(&self) -> usize { self.height / self.tiles_y }

    #[inline]
    pub fn texel(&self, x: usize, y: usize) -> Pixel4 {
        self.pixels[y * self.width + x]
    }

    #[inline]
    pub fn pixels(&self) -> &[Pixel4] { &self.pixels }

    /// Nearest-texel read along a row: `u` is a tile-relative coordinate in
    /// [0, 1) resolved within the first tile (all tiles are identical).
    #[inline]
    pub fn sample_tile_row(&self, u: f32, y: usize) -> Pixel4 {
        let tw = self.tile_width();
        let x = ((u * tw as f32) as usize).min(tw - 1);
        self.texel(x, y)
    }
}

/// Generate an aperture-grille tile: `triads` RGB stripe groups across the
/// tile width, each triad split into equal R, G, B vertical stripes.
pub fn aperture_grille(tile_w: usize, tile_h: usize, triads: usize) -> MaskLut {
    let mut pixels = Vec::with_capacity(tile_w * tile_h);
    for _y in 0..tile_h {
        for x in 0..tile_w {
            pixels.push(grille_texel(x, tile_w, triads));
        }
    }
    MaskLut::from_pixels(pixels, tile_w, tile_h, 1, 1)
}

/// Generate a slot-mask tile: grille stripes broken by horizontal gaps,
/// staggered half a slot between adjacent triads.
pub fn slot_mask(tile_w: usize, tile_h: usize, triads: usize) -> MaskLut {
    let slot_h = (tile_h / 2).max(1);
    let gap = (slot_h / 4).max(1);
    let mut pixels = Vec::with_capacity(tile_w * tile_h);
    for y in 0..tile_h {
        for x in 0..tile_w {
            let triad_idx = x * triads / tile_w;
            let phase = if triad_idx % 2 == 0 { 0 } else { slot_h / 2 };
            let in_gap = (y + phase) % slot_h < gap;
            if in_gap {
                pixels.push(Pixel4::splat(0.0));
            } else {
                pixels.push(grille_texel(x, tile_w, triads));
            }
        }
    }
    MaskLut::from_pixels(pixels, tile_w, tile_h, 1, 1)
}

#[inline]
fn grille_texel(x: usize, tile_w: usize, triads: usize) -> Pixel4 {
    // Three stripes per triad; the lit channel cycles R, G, B.
    match (x * triads * 3 / tile_w) % 3 {
        0 => Pixel4::rgb(1.0, 0.0, 0.0),
        1 => Pixel4::rgb(0.0, 1.0, 0.0),
        _ => Pixel4::rgb(0.0, 0.0, 1.0),
    }
}
