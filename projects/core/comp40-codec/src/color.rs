//! Conversion between RGB pixels and component video (`Y`, `Pb`, `Pr`).

use crate::raster::Rgb;

/// A pixel in component video form.
///
/// `y` is luma in roughly `0.0..=1.0`; `pb` and `pr` are the blue and red colour
/// differences, roughly `-0.5..=0.5`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ComponentVideo {
    /// Luma.
    pub y: f32,
    /// Blue colour difference.
    pub pb: f32,
    /// Red colour difference.
    pub pr: f32,
}

impl ComponentVideo {
    /// Creates a component video triple.
    #[inline]
    pub const fn new(y: f32, pb: f32, pr: f32) -> Self {
        Self { y, pb, pr }
    }
}

/// Converts `pixel`, whose channels are fractions of `denominator`, to component video.
///
/// # Panics
///
/// Debug builds assert that `denominator` is not zero.
#[inline]
pub fn rgb_to_ycc(pixel: Rgb, denominator: u16) -> ComponentVideo {
    debug_assert!(denominator != 0, "denominator must be non-zero");
    let den = denominator as f32;
    let r = pixel.red as f32 / den;
    let g = pixel.green as f32 / den;
    let b = pixel.blue as f32 / den;

    ComponentVideo {
        y: 0.299 * r + 0.587 * g + 0.114 * b,
        pb: -0.168736 * r - 0.331264 * g + 0.5 * b,
        pr: 0.5 * r - 0.418688 * g - 0.081312 * b,
    }
}

/// Converts component video back to an RGB pixel scaled by `denominator`.
///
/// Each channel is rounded to the nearest integer (halves away from zero) and
/// clamped to `0..=denominator`; out of gamut values are expected after lossy
/// quantization.
#[inline]
pub fn ycc_to_rgb(ycc: ComponentVideo, denominator: u16) -> Rgb {
    let r = ycc.y + 1.402 * ycc.pr;
    let g = ycc.y - 0.344136 * ycc.pb - 0.714136 * ycc.pr;
    let b = ycc.y + 1.772 * ycc.pb;

    Rgb::new(
        scale_channel(r, denominator),
        scale_channel(g, denominator),
        scale_channel(b, denominator),
    )
}

#[inline(always)]
fn scale_channel(value: f32, denominator: u16) -> u16 {
    let den = denominator as f32;
    // NaN clamps to NaN and then casts to 0.
    (value * den).round().clamp(0.0, den) as u16
}
