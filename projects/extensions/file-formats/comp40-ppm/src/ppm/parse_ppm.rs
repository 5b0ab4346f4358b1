use super::{constants::*, likely_ppm};
use crate::error::PpmError;

/// Variant of a PPM file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PpmFormat {
    /// `P3`: samples are ASCII decimal numbers separated by whitespace.
    Plain,
    /// `P6`: samples are binary, 1 or 2 bytes each depending on `maxval`.
    Raw,
}

/// The information stored in the header of a PPM file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PpmInfo {
    /// Plain or raw sample encoding.
    pub format: PpmFormat,
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
    /// Value of a fully saturated sample, `1..=65535`.
    pub maxval: u16,
    /// Offset of the first byte of pixel data.
    pub data_offset: usize,
}

impl PpmInfo {
    /// Total number of samples (3 per pixel), or [`None`] on overflow.
    #[inline]
    pub fn sample_count(&self) -> Option<usize> {
        self.width.checked_mul(self.height)?.checked_mul(CHANNELS)
    }

    /// Size of a single sample in a raw PPM.
    #[inline]
    pub fn bytes_per_sample(&self) -> usize {
        if self.maxval > MAX_SINGLE_BYTE_MAXVAL {
            2
        } else {
            1
        }
    }
}

/// Parses the header of a PPM file.
///
/// Header fields are separated by whitespace; a `#` starts a comment which runs
/// to the end of the line. In a raw PPM exactly one whitespace byte separates
/// `maxval` from the pixel data.
///
/// # Errors
///
/// - [`PpmError::InvalidMagic`] if the data does not start with `P3` or `P6`.
/// - [`PpmError::MalformedHeader`] if a field is missing or not a number.
/// - [`PpmError::InvalidMaxval`] if `maxval` is outside `1..=65535`.
pub fn parse_ppm(data: &[u8]) -> Result<PpmInfo, PpmError> {
    if !likely_ppm(data) {
        return Err(PpmError::InvalidMagic);
    }

    let format = if data[..MAGIC_SIZE] == PLAIN_MAGIC {
        PpmFormat::Plain
    } else {
        PpmFormat::Raw
    };

    let mut tokens = Tokens::new(data, MAGIC_SIZE);
    let width = tokens.header_field("width")?;
    let height = tokens.header_field("height")?;
    let maxval = tokens.header_field("maxval")?;
    if maxval == 0 || maxval > MAX_MAXVAL {
        return Err(PpmError::InvalidMaxval(maxval));
    }

    let data_offset = match format {
        PpmFormat::Plain => tokens.position(),
        PpmFormat::Raw => match data.get(tokens.position()) {
            Some(byte) if byte.is_ascii_whitespace() => tokens.position() + 1,
            // Nothing after maxval; only valid for an empty image.
            None => tokens.position(),
            Some(_) => return Err(PpmError::MalformedHeader("maxval")),
        },
    };

    Ok(PpmInfo {
        format,
        width: usize::try_from(width).map_err(|_| PpmError::MalformedHeader("width"))?,
        height: usize::try_from(height).map_err(|_| PpmError::MalformedHeader("height"))?,
        maxval: maxval as u16,
        data_offset,
    })
}

/// A whitespace and comment separated token read by [`Tokens`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token {
    /// A decimal number.
    Number(u64),
    /// No more data.
    End,
    /// Something other than a number, or a number too large for a `u64`.
    Invalid,
}

/// Reads decimal numbers separated by whitespace and `#` comments.
pub(crate) struct Tokens<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(data: &'a [u8], position: usize) -> Self {
        Self { data, position }
    }

    /// Offset just past the last token read.
    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.position
    }

    fn skip_separators(&mut self) {
        while let Some(&byte) = self.data.get(self.position) {
            if byte.is_ascii_whitespace() {
                self.position += 1;
            } else if byte == COMMENT_START {
                let line_end = self.data[self.position..]
                    .iter()
                    .position(|&b| b == b'\n')
                    .map_or(self.data.len(), |offset| self.position + offset + 1);
                self.position = line_end;
            } else {
                break;
            }
        }
    }

    pub(crate) fn next_number(&mut self) -> Token {
        self.skip_separators();
        let rest = &self.data[self.position..];
        if rest.is_empty() {
            return Token::End;
        }

        let digits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
        if digits == 0 {
            return Token::Invalid;
        }

        let mut value = 0u64;
        for &digit in &rest[..digits] {
            value = match value
                .checked_mul(10)
                .and_then(|v| v.checked_add((digit - b'0') as u64))
            {
                Some(value) => value,
                None => return Token::Invalid,
            };
        }

        self.position += digits;
        Token::Number(value)
    }

    fn header_field(&mut self, name: &'static str) -> Result<u64, PpmError> {
        match self.next_number() {
            Token::Number(value) => Ok(value),
            Token::End | Token::Invalid => Err(PpmError::MalformedHeader(name)),
        }
    }
}
