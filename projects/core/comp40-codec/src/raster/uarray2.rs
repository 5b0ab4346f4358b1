use super::Array2;

/// [`Array2`] backed by a single row-major [`Vec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UArray2<T> {
    width: usize,
    height: usize,
    elements: Vec<T>,
}

impl<T> UArray2<T> {
    /// Builds a grid from elements already laid out in row-major order.
    ///
    /// Returns [`None`] if `elements.len() != width * height`.
    pub fn from_row_major(width: usize, height: usize, elements: Vec<T>) -> Option<Self> {
        let expected = width.checked_mul(height)?;
        (elements.len() == expected).then_some(Self {
            width,
            height,
            elements,
        })
    }

    /// The elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    #[inline(always)]
    fn index_of(&self, col: usize, row: usize) -> usize {
        assert!(
            col < self.width && row < self.height,
            "({col}, {row}) is outside of a {}x{} array",
            self.width,
            self.height
        );
        row * self.width + col
    }
}

impl<T: Clone> Array2 for UArray2<T> {
    type Element = T;

    fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            width,
            height,
            elements: vec![fill; width * height],
        }
    }

    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn at(&self, col: usize, row: usize) -> &T {
        &self.elements[self.index_of(col, row)]
    }

    #[inline]
    fn at_mut(&mut self, col: usize, row: usize) -> &mut T {
        let index = self.index_of(col, row);
        &mut self.elements[index]
    }

    fn visit_row_major<F>(&self, mut visit: F)
    where
        F: FnMut(usize, usize, &T),
    {
        if self.width == 0 {
            return;
        }

        for (index, element) in self.elements.iter().enumerate() {
            visit(index % self.width, index / self.width, element);
        }
    }

    fn visit_row_major_mut<F>(&mut self, mut visit: F)
    where
        F: FnMut(usize, usize, &mut T),
    {
        if self.width == 0 {
            return;
        }

        let width = self.width;
        for (index, element) in self.elements.iter_mut().enumerate() {
            visit(index % width, index / width, element);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    fn numbered(width: usize, height: usize) -> UArray2<usize> {
        UArray2::from_row_major(width, height, (0..width * height).collect()).unwrap()
    }

    #[rstest]
    #[case(3, 2)]
    #[case(1, 5)]
    #[case(4, 1)]
    fn new_fills_every_cell(#[case] width: usize, #[case] height: usize) {
        let array = UArray2::new(width, height, 7u8);
        assert_eq!(array.width(), width);
        assert_eq!(array.height(), height);
        assert_eq!(array.size(), width * height);
        assert!(array.as_slice().iter().all(|&x| x == 7));
    }

    #[test]
    fn at_addresses_column_then_row() {
        let array = numbered(3, 2);
        assert_eq!(*array.at(0, 0), 0);
        assert_eq!(*array.at(2, 0), 2);
        assert_eq!(*array.at(0, 1), 3);
        assert_eq!(*array.at(2, 1), 5);
    }

    #[test]
    fn at_mut_writes_single_cell() {
        let mut array = UArray2::new(2, 2, 0u32);
        *array.at_mut(1, 0) = 9;
        assert_eq!(array.as_slice(), &[0, 9, 0, 0]);
    }

    #[test]
    fn visit_row_major_walks_rows_first() {
        let array = numbered(3, 2);
        let mut seen = Vec::new();
        array.visit_row_major(|col, row, &value| seen.push((col, row, value)));
        assert_eq!(
            seen,
            vec![(0, 0, 0), (1, 0, 1), (2, 0, 2), (0, 1, 3), (1, 1, 4), (2, 1, 5)]
        );
    }

    #[test]
    fn visit_col_major_walks_columns_first() {
        let array = numbered(3, 2);
        let mut seen = Vec::new();
        array.visit_col_major(|col, row, &value| seen.push((col, row, value)));
        assert_eq!(
            seen,
            vec![(0, 0, 0), (0, 1, 3), (1, 0, 1), (1, 1, 4), (2, 0, 2), (2, 1, 5)]
        );
    }

    #[test]
    fn visit_row_major_mut_sees_coordinates() {
        let mut array = UArray2::new(3, 2, (0, 0));
        array.visit_row_major_mut(|col, row, cell| *cell = (col, row));
        assert_eq!(*array.at(2, 1), (2, 1));
        assert_eq!(*array.at(1, 0), (1, 0));
    }

    #[rstest]
    #[case(0, 0)]
    #[case(0, 4)]
    #[case(4, 0)]
    fn empty_arrays_visit_nothing(#[case] width: usize, #[case] height: usize) {
        let mut array = UArray2::new(width, height, 1u8);
        let mut visits = 0;
        array.visit_row_major(|_, _, _| visits += 1);
        array.visit_col_major(|_, _, _| visits += 1);
        array.visit_row_major_mut(|_, _, _| visits += 1);
        assert_eq!(visits, 0);
        assert_eq!(array.size(), 0);
    }

    #[test]
    fn from_row_major_rejects_wrong_length() {
        assert!(UArray2::from_row_major(2, 2, vec![0u8; 3]).is_none());
        assert!(UArray2::from_row_major(usize::MAX, 2, Vec::<u8>::new()).is_none());
    }

    #[test]
    #[should_panic]
    fn at_rejects_column_out_of_bounds() {
        numbered(3, 2).at(3, 0);
    }

    #[test]
    #[should_panic]
    fn at_mut_rejects_row_out_of_bounds() {
        UArray2::new(3, 2, 0u8).at_mut(0, 2);
    }
}
