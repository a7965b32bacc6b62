//! Color conversion between sRGB and linear RGB.
//!
//! The mask LUT is stored as sRGB PNG data but all resampling math runs in
//! linear RGB; these conversions are applied once at the decode/encode edge.

/// Convert one sRGB value (0-1) to linear RGB.
#[inline]
pub fn srgb_to_linear_single(srgb: f32) -> f32 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert one linear RGB value (0-1) to sRGB.
#[inline]
pub fn linear_to_srgb_single(linear: f32) -> f32 {
    if linear <= 0.04045 / 12.92 {
        linear * 12.92
    } else {
        1.055 * linear.max(0.0).powf(1.0 / 2.4) - 0.055
    }
}

/// Convert a flat sRGB array to linear RGB in place.
pub fn srgb_to_linear(data: &mut [f32]) {
    for v in data.iter_mut() {
        *v = srgb_to_linear_single(*v);
    }
}

/// Convert a flat linear RGB array to sRGB in place.
pub fn linear_to_srgb(data: &mut [f32]) {
    for v in data.iter_mut() {
        *v = linear_to_srgb_single(*v);
    }
}
