use crate::{DisplayMode, Error, Pos, Result};

/// One position of a single generation's grid
///
/// Neighbors are stored as indices into the arena of cells that make up the
/// same generation. They are linked once after the whole arena exists and
/// are thrown away together with it when the next generation is built.
#[derive(Debug, Clone)]
pub struct Cell {
    pos: Pos,
    living: bool,
    neighbors: Option<Vec<usize>>,
}

impl Cell {
    /// A dead, unlinked cell at `(row, column)`
    #[inline]
    pub fn new(row: usize, column: usize) -> Self {
        Self {
            pos: Pos::new(row, column),
            living: false,
            neighbors: None,
        }
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.pos.row
    }
    #[inline]
    pub fn column(&self) -> usize {
        self.pos.column
    }
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    #[inline]
    pub fn set_living(&mut self, living: bool) {
        self.living = living;
    }
    #[inline]
    pub fn is_living(&self) -> bool {
        self.living
    }

    /// Links the cell at arena index `neighbor` as a neighbor of this one
    ///
    /// The caller makes sure the index is neither this cell nor already linked.
    pub fn add_neighbor(&mut self, neighbor: usize) {
        let neighbors = self.neighbors.get_or_insert_with(|| Vec::with_capacity(8));
        debug_assert!(!neighbors.contains(&neighbor), "duplicate neighbor");
        neighbors.push(neighbor);
    }

    /// The arena indices of this cell's neighbors, in the order they were linked
    pub fn neighbors(&self) -> Result<&[usize]> {
        self.neighbors
            .as_deref()
            .ok_or(Error::NeighborsNotLinked {
                row: self.pos.row,
                column: self.pos.column,
            })
    }

    /// Counts the live cells among this cell's neighbors in `arena`
    ///
    /// `arena` must be the generation this cell was linked in.
    pub fn living_neighbors(&self, arena: &[Cell]) -> Result<usize> {
        let mut count = 0;
        for &index in self.neighbors()? {
            let neighbor = arena.get(index).ok_or(Error::ForeignGeneration {
                row: self.pos.row,
                column: self.pos.column,
                index,
            })?;
            count += usize::from(neighbor.living);
        }
        Ok(count)
    }

    /// A lazily formatted single character for this cell
    #[inline]
    pub fn display(&self, mode: DisplayMode) -> CellDisplay {
        CellDisplay {
            living: self.living,
            mode,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CellDisplay {
    living: bool,
    mode: DisplayMode,
}
impl std::fmt::Display for CellDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use std::fmt::Write;
        f.write_char(self.mode.glyph(self.living))
    }
}
