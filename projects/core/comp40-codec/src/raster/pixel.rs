/// A single pixel with red, green and blue channels.
///
/// Channel values are numerators; the matching denominator lives on the
/// [`Pixmap`](super::Pixmap) which owns the pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub red: u16,
    /// Green channel.
    pub green: u16,
    /// Blue channel.
    pub blue: u16,
}

impl Rgb {
    /// Creates a pixel from its three channels.
    #[inline]
    pub const fn new(red: u16, green: u16, blue: u16) -> Self {
        Self { red, green, blue }
    }
}
