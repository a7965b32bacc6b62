//! Band-limited phosphor-mask resizing.
//!
//! Computes a correctly band-limited, pre-resized copy of a small tiled
//! phosphor-mask pattern so that later magnification shows no aliasing or
//! shimmer. The resize is a separable windowed-sinc filter run as two
//! independent 1D passes (horizontal then vertical), with an adaptive tap
//! count and a tile-size negotiation step that keeps both passes agreeing
//! on the same integral tile geometry.
//!
//! All processing uses linear RGB; sRGB conversion happens at the binary's
//! decode/encode edge only.

pub mod color;
pub mod mask;
pub mod pixel;
pub mod resample;
