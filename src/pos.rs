use std::{cmp::Ordering, ops::Neg};

/// A cell coordinate inside a bounded grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub column: usize,
}
impl Pos {
    #[inline]
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Row-major index of this position in a grid that is `columns` wide
    #[inline]
    pub fn index(self, columns: usize) -> usize {
        self.row * columns + self.column
    }

    /// Moves this position by `offset`, returning [`None`] if the result
    /// falls outside a `rows` x `columns` grid. Edges never wrap.
    pub fn shifted(self, offset: Offset, rows: usize, columns: usize) -> Option<Self> {
        let row = self.row.checked_add_signed(offset.row as isize)?;
        let column = self.column.checked_add_signed(offset.column as isize)?;
        (row < rows && column < columns).then_some(Self { row, column })
    }
}
impl Default for Pos {
    #[inline]
    fn default() -> Self {
        Self { row: 0, column: 0 }
    }
}
impl PartialOrd for Pos {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Pos {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // rows first, then columns within the same row
        Ord::cmp(&self.row, &other.row).then(Ord::cmp(&self.column, &other.column))
    }
}

/// A single step in one of the eight compass directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub row: i8,
    pub column: i8,
}
impl Offset {
    pub const UP_LEFT: Self = Self::new(-1, -1);
    pub const UP: Self = Self::new(-1, 0);
    pub const UP_RIGHT: Self = Self::new(-1, 1);
    pub const LEFT: Self = Self::new(0, -1);
    pub const RIGHT: Self = Self::new(0, 1);
    pub const DOWN_LEFT: Self = Self::new(1, -1);
    pub const DOWN: Self = Self::new(1, 0);
    pub const DOWN_RIGHT: Self = Self::new(1, 1);

    #[inline]
    const fn new(row: i8, column: i8) -> Self {
        Self { row, column }
    }
}
impl Neg for Offset {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            row: -self.row,
            column: -self.column,
        }
    }
}
