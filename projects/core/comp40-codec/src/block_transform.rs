//! Discrete cosine transform over the four luma samples of a 2x2 block.
//!
//! Samples are numbered in row-major order within the block:
//!
//! ```text
//! +----+----+
//! | y1 | y2 |
//! +----+----+
//! | y3 | y4 |
//! +----+----+
//! ```
//!
//! - `a` is the average brightness of the block.
//! - `b` is the degree to which the bottom row is brighter than the top row.
//! - `c` is the degree to which the right column is brighter than the left column.
//! - `d` is the degree to which the diagonal `y1`/`y4` is brighter than `y2`/`y3`.

use crate::BLOCK_AREA;

/// Cosine coefficients describing one block of luma.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Coefficients {
    /// Average luma.
    pub a: f32,
    /// Vertical gradient.
    pub b: f32,
    /// Horizontal gradient.
    pub c: f32,
    /// Diagonal gradient.
    pub d: f32,
}

/// Transforms four luma samples (row-major within the block) into coefficients.
#[inline]
pub fn forward(luma: [f32; BLOCK_AREA]) -> Coefficients {
    let [y1, y2, y3, y4] = luma;
    Coefficients {
        a: (y1 + y2 + y3 + y4) / 4.0,
        b: (y4 + y3 - y2 - y1) / 4.0,
        c: (y4 - y3 + y2 - y1) / 4.0,
        d: (y4 - y3 - y2 + y1) / 4.0,
    }
}

/// Recovers the four luma samples (row-major within the block) from coefficients.
#[inline]
pub fn inverse(coefficients: Coefficients) -> [f32; BLOCK_AREA] {
    let Coefficients { a, b, c, d } = coefficients;
    [a - b - c + d, a - b + c - d, a + b - c - d, a + b + c + d]
}
