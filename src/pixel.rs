//! SIMD-friendly pixel type for the resample accumulators.
//!
//! A 16-byte aligned 4-lane float pixel lets the weighted-sum loop compile
//! to 128-bit loads/stores on SSE/NEON. The 4th lane is padding for RGB
//! mask data and rides along through the arithmetic.

use std::ops::{Add, Div, Index, Mul};

/// 4-channel pixel: [R, G, B, _] with the last lane unused padding.
#[repr(C, align(16))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pixel4(pub [f32; 4]);

impl Pixel4 {
    #[inline(always)]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self([r, g, b, a])
    }

    #[inline(always)]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self([r, g, b, 0.0])
    }

    /// Same value in all three color channels.
    #[inline(always)]
    pub const fn splat(v: f32) -> Self {
        Self([v, v, v, 0.0])
    }

    #[inline(always)]
    pub fn r(&self) -> f32 { self.0[0] }
    #[inline(always)]
    pub fn g(&self) -> f32 { self.0[1] }
    #[inline(always)]
    pub fn b(&self) -> f32 { self.0[2] }
}

impl Index<usize> for Pixel4 {
    type Output = f32;
    #[inline(always)]
    fn index(&self, i: usize) -> &f32 { &self.0[i] }
}

impl Add for Pixel4 {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self([self[0] + rhs[0], self[1] + rhs[1], self[2] + rhs[2], self[3] + rhs[3]])
    }
}

impl Mul<f32> for Pixel4 {
    type Output = Self;
    #[inline(always)]
    fn mul(self, s: f32) -> Self {
        Self([self[0] * s, self[1] * s, self[2] * s, self[3] * s])
    }
}

impl Div<f32> for Pixel4 {
    type Output = Self;
    #[inline(always)]
    fn div(self, s: f32) -> Self {
        Self([self[0] / s, self[1] / s, self[2] / s, self[3] / s])
    }
}
