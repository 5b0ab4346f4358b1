/// A fixed-size two dimensional grid addressed by `(column, row)`.
///
/// Accessing an element outside of `width x height` is a programmer error and
/// panics.
pub trait Array2 {
    /// Type of the stored elements.
    type Element;

    /// Creates a grid of `width x height` elements, each a copy of `fill`.
    fn new(width: usize, height: usize, fill: Self::Element) -> Self
    where
        Self: Sized;

    /// Number of columns.
    fn width(&self) -> usize;

    /// Number of rows.
    fn height(&self) -> usize;

    /// Total number of elements.
    #[inline]
    fn size(&self) -> usize {
        self.width() * self.height()
    }

    /// Returns the element at (`col`, `row`).
    ///
    /// # Panics
    ///
    /// If `col >= width` or `row >= height`.
    fn at(&self, col: usize, row: usize) -> &Self::Element;

    /// Returns a mutable reference to the element at (`col`, `row`).
    ///
    /// # Panics
    ///
    /// If `col >= width` or `row >= height`.
    fn at_mut(&mut self, col: usize, row: usize) -> &mut Self::Element;

    /// Calls `visit(col, row, element)` for every element, finishing each row
    /// before moving to the next.
    fn visit_row_major<F>(&self, mut visit: F)
    where
        F: FnMut(usize, usize, &Self::Element),
    {
        for row in 0..self.height() {
            for col in 0..self.width() {
                visit(col, row, self.at(col, row));
            }
        }
    }

    /// Calls `visit(col, row, element)` for every element, finishing each column
    /// before moving to the next.
    fn visit_col_major<F>(&self, mut visit: F)
    where
        F: FnMut(usize, usize, &Self::Element),
    {
        for col in 0..self.width() {
            for row in 0..self.height() {
                visit(col, row, self.at(col, row));
            }
        }
    }

    /// Mutable version of [`Array2::visit_row_major`].
    fn visit_row_major_mut<F>(&mut self, mut visit: F)
    where
        F: FnMut(usize, usize, &mut Self::Element),
    {
        for row in 0..self.height() {
            for col in 0..self.width() {
                visit(col, row, self.at_mut(col, row));
            }
        }
    }
}
