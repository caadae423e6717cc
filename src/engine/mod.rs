mod neighbors;
mod rules;
mod view;

pub use self::neighbors::Placement;
pub use self::view::GridView;
use crate::{Cell, DisplayMode, Error, Pos, Result};
use rand::Rng;
use tracing::{debug, trace};

/// A fixed-size Game of Life grid without wraparound
#[derive(Debug, Clone)]
pub struct GameOfLife {
    rows: usize,
    columns: usize,
    /// row-major arena for the current generation
    cells: Vec<Cell>,
    living: usize,
    generation: u64,
}

impl GameOfLife {
    /// Creates an all-dead grid. Both dimensions must be at least 2.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if rows < 2 || columns < 2 || rows.checked_mul(columns).is_none() {
            return Err(Error::InvalidDimensions { rows, columns });
        }

        let mut cells = Self::create_grid(rows, columns);
        Self::create_neighbors(&mut cells, rows, columns);
        debug!(rows, columns, "created grid");
        Ok(Self {
            rows,
            columns,
            cells,
            living: 0,
            generation: 0,
        })
    }

    fn create_grid(rows: usize, columns: usize) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(rows * columns);
        for row in 0..rows {
            for column in 0..columns {
                cells.push(Cell::new(row, column));
            }
        }
        cells
    }

    fn create_neighbors(cells: &mut [Cell], rows: usize, columns: usize) {
        for cell in cells.iter_mut() {
            let pos = cell.pos();
            for &offset in Placement::classify(pos, rows, columns).offsets() {
                let neighbor = pos.shifted(offset, rows, columns);
                debug_assert!(neighbor.is_some(), "{offset:?} leaves the grid at {pos:?}");
                if let Some(neighbor) = neighbor {
                    cell.add_neighbor(neighbor.index(columns));
                }
            }
        }
    }

    fn index_of(&self, row: usize, column: usize) -> Result<usize> {
        if row >= self.rows || column >= self.columns {
            return Err(Error::OutOfBounds {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(Pos::new(row, column).index(self.columns))
    }

    pub fn cell(&self, row: usize, column: usize) -> Result<&Cell> {
        let i = self.index_of(row, column)?;
        Ok(&self.cells[i])
    }

    #[inline]
    pub fn is_living(&self, row: usize, column: usize) -> Result<bool> {
        Ok(self.cell(row, column)?.is_living())
    }

    /// Number of live neighbors of `(row, column)` in the current generation
    pub fn living_neighbors(&self, row: usize, column: usize) -> Result<usize> {
        self.cell(row, column)?.living_neighbors(&self.cells)
    }

    pub fn set_cell(&mut self, row: usize, column: usize, living: bool) -> Result<()> {
        let i = self.index_of(row, column)?;
        let cell = &mut self.cells[i];
        match (cell.is_living(), living) {
            (false, true) => self.living += 1,
            (true, false) => self.living -= 1,
            _ => {}
        }
        cell.set_living(living);
        Ok(())
    }

    /// Advances the grid by one generation
    ///
    /// The whole current generation is read before any cell of the next one
    /// is visible, so the result does not depend on visiting order. On error
    /// the current generation is left untouched.
    pub fn next_generation(&mut self) -> Result<()> {
        let mut next = Self::create_grid(self.rows, self.columns);
        let mut living = 0;
        for (cell, successor) in self.cells.iter().zip(next.iter_mut()) {
            let neighbors = cell.living_neighbors(&self.cells)?;
            if rules::next_state(cell.is_living(), neighbors) {
                successor.set_living(true);
                living += 1;
            }
        }

        Self::create_neighbors(&mut next, self.rows, self.columns);
        self.cells = next;
        self.living = living;
        self.generation += 1;
        trace!(generation = self.generation, living, "stepped");
        Ok(())
    }

    /// Makes each cell alive with probability `percent / 100`
    pub fn randomize(&mut self, percent: u8) -> Result<()> {
        self.randomize_with(percent, &mut rand::rng())
    }

    pub fn randomize_with<R: Rng + ?Sized>(&mut self, percent: u8, rng: &mut R) -> Result<()> {
        if percent > 100 {
            return Err(Error::InvalidPercent(percent));
        }

        let p = f64::from(percent) / 100.0;
        let mut living = 0;
        for cell in &mut self.cells {
            let alive = rng.random_bool(p);
            cell.set_living(alive);
            living += usize::from(alive);
        }
        self.living = living;
        debug!(percent, living, "randomized grid");
        Ok(())
    }

    /// Renders the current generation with `mode`
    #[inline]
    pub fn view(&self, mode: DisplayMode) -> GridView<'_> {
        GridView::new(self, mode)
    }

    /// Positions of every live cell, in row-major order
    pub fn living_positions(&self) -> Vec<Pos> {
        self.cells
            .iter()
            .filter(|cell| cell.is_living())
            .map(Cell::pos)
            .collect()
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }
    #[inline]
    pub fn living_count(&self) -> usize {
        self.living
    }
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// One slice of cells per row
    #[inline]
    pub(crate) fn grid_rows(&self) -> std::slice::Chunks<'_, Cell> {
        self.cells.chunks(self.columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn game_with(rows: usize, columns: usize, alive: &[(usize, usize)]) -> GameOfLife {
        let mut game = GameOfLife::new(rows, columns).unwrap();
        for &(row, column) in alive {
            game.set_cell(row, column, true).unwrap();
        }
        game
    }

    fn pos(row: usize, column: usize) -> Pos {
        Pos::new(row, column)
    }

    fn counted_living(game: &GameOfLife) -> usize {
        game.grid_rows().flatten().filter(|c| c.is_living()).count()
    }

    #[test]
    fn neighbor_counts_by_position() {
        for (rows, columns) in [(2, 2), (2, 7), (5, 2), (3, 3), (6, 9)] {
            let game = GameOfLife::new(rows, columns).unwrap();
            for cell in game.grid_rows().flatten() {
                let on_row_edge = cell.row() == 0 || cell.row() == rows - 1;
                let on_column_edge = cell.column() == 0 || cell.column() == columns - 1;
                let expected = match (on_row_edge, on_column_edge) {
                    (true, true) => 3,
                    (false, false) => 8,
                    _ => 5,
                };
                let neighbors = cell.neighbors().unwrap();
                assert_eq!(neighbors.len(), expected, "{:?} in {rows}x{columns}", cell.pos());

                let own = cell.pos().index(columns);
                assert!(!neighbors.contains(&own));
            }
        }
    }

    #[test]
    fn neighbors_are_mutual() {
        let game = GameOfLife::new(4, 6).unwrap();
        let cells: Vec<&Cell> = game.grid_rows().flatten().collect();
        for (i, cell) in cells.iter().enumerate() {
            for &n in cell.neighbors().unwrap() {
                assert!(cells[n].neighbors().unwrap().contains(&i));
            }
        }
    }

    #[test]
    fn corner_does_not_wrap() {
        let (rows, columns) = (4, 5);
        let game = GameOfLife::new(rows, columns).unwrap();
        let corner = game.cell(0, 0).unwrap();

        let mut neighbors: Vec<usize> = corner.neighbors().unwrap().to_vec();
        neighbors.sort();
        assert_eq!(
            neighbors,
            vec![pos(0, 1).index(columns), pos(1, 0).index(columns), pos(1, 1).index(columns)]
        );
        assert!(!neighbors.contains(&pos(rows - 1, columns - 1).index(columns)));
    }

    #[test]
    fn rejects_degenerate_dimensions() {
        assert!(matches!(
            GameOfLife::new(1, 5),
            Err(Error::InvalidDimensions { rows: 1, columns: 5 })
        ));
        assert!(GameOfLife::new(5, 0).is_err());
        assert!(GameOfLife::new(0, 0).is_err());
    }

    #[test]
    fn rejects_overflowing_dimensions() {
        assert!(matches!(
            GameOfLife::new(usize::MAX / 2, 3),
            Err(Error::InvalidDimensions { columns: 3, .. })
        ));
        assert!(GameOfLife::new(usize::MAX, usize::MAX).is_err());
    }

    #[test]
    fn unlinked_generation_fails_to_step() {
        let mut game = game_with(3, 3, &[(1, 0), (1, 1), (1, 2)]);
        game.cells = GameOfLife::create_grid(3, 3);
        game.cells[4].set_living(true);
        game.living = 1;

        assert!(matches!(
            game.next_generation(),
            Err(Error::NeighborsNotLinked { row: 0, column: 0 })
        ));
        assert_eq!(game.generation(), 0);
        assert_eq!(game.living_positions(), vec![pos(1, 1)]);
    }

    #[test]
    fn out_of_bounds_access_fails() {
        let mut game = GameOfLife::new(3, 4).unwrap();

        assert!(matches!(
            game.set_cell(3, 0, true),
            Err(Error::OutOfBounds { row: 3, column: 0, rows: 3, columns: 4 })
        ));
        assert!(game.set_cell(0, 4, true).is_err());
        assert!(game.is_living(10, 10).is_err());
        assert_eq!(game.living_count(), 0);
    }

    #[test]
    fn set_cell_tracks_living_count() {
        let mut game = GameOfLife::new(3, 3).unwrap();
        game.set_cell(1, 1, true).unwrap();
        game.set_cell(1, 1, true).unwrap();
        game.set_cell(0, 2, true).unwrap();
        assert_eq!(game.living_count(), 2);

        game.set_cell(1, 1, false).unwrap();
        game.set_cell(2, 2, false).unwrap();
        assert_eq!(game.living_count(), 1);
        assert_eq!(game.living_count(), counted_living(&game));
        assert_eq!(game.generation(), 0);
    }

    #[test]
    fn living_neighbors_reads_current_generation() {
        let game = game_with(3, 3, &[(0, 0), (0, 1), (2, 2)]);

        assert_eq!(game.living_neighbors(1, 1).unwrap(), 3);
        assert_eq!(game.living_neighbors(0, 0).unwrap(), 1);
        assert_eq!(game.living_neighbors(2, 0).unwrap(), 0);
    }

    #[test]
    fn block_is_still_life() {
        let block = [(1, 1), (1, 2), (2, 1), (2, 2)];
        let mut game = game_with(4, 4, &block);
        let expected: Vec<Pos> = block.iter().map(|&(r, c)| pos(r, c)).collect();

        for _ in 0..5 {
            game.next_generation().unwrap();
            assert_eq!(game.living_positions(), expected);
            assert_eq!(game.living_count(), 4);
        }
    }

    #[test]
    fn blinker_oscillates() {
        let horizontal = vec![pos(2, 1), pos(2, 2), pos(2, 3)];
        let vertical = vec![pos(1, 2), pos(2, 2), pos(3, 2)];
        let mut game = game_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);

        for _ in 0..3 {
            game.next_generation().unwrap();
            assert_eq!(game.living_positions(), vertical);
            game.next_generation().unwrap();
            assert_eq!(game.living_positions(), horizontal);
        }
        assert_eq!(game.living_count(), 3);
    }

    #[test]
    fn lone_cell_dies() {
        let mut game = game_with(3, 3, &[(1, 1)]);
        game.next_generation().unwrap();

        assert!(!game.is_living(1, 1).unwrap());
        assert_eq!(game.living_count(), 0);
    }

    #[test]
    fn corner_block_survives_without_wrap() {
        // with wraparound the opposite corners would feed these cells
        let corner = [(0, 0), (0, 1), (1, 0), (1, 1)];
        let mut game = game_with(5, 5, &corner);
        game.set_cell(4, 4, true).unwrap();
        game.next_generation().unwrap();

        let expected: Vec<Pos> = corner.iter().map(|&(r, c)| pos(r, c)).collect();
        assert_eq!(game.living_positions(), expected);
    }

    #[test]
    fn glider_moves_diagonally() {
        let glider = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
        let mut game = game_with(8, 8, &glider);
        for _ in 0..4 {
            game.next_generation().unwrap();
        }

        let expected: Vec<Pos> = glider.iter().map(|&(r, c)| pos(r + 1, c + 1)).collect();
        assert_eq!(game.living_positions(), expected);
    }

    #[test]
    fn generation_counts_steps_only() {
        let mut game = GameOfLife::new(4, 4).unwrap();
        assert_eq!(game.generation(), 0);

        for expected in 1..=3 {
            game.next_generation().unwrap();
            assert_eq!(game.generation(), expected);
        }
        game.set_cell(0, 0, true).unwrap();
        game.randomize(30).unwrap();
        assert_eq!(game.generation(), 3);
    }

    #[test]
    fn living_count_matches_after_every_operation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut game = GameOfLife::new(12, 9).unwrap();
        assert_eq!(game.living_count(), counted_living(&game));

        game.randomize_with(40, &mut rng).unwrap();
        assert_eq!(game.living_count(), counted_living(&game));

        for _ in 0..10 {
            game.next_generation().unwrap();
            assert_eq!(game.living_count(), counted_living(&game));
        }
        game.set_cell(5, 5, true).unwrap();
        assert_eq!(game.living_count(), counted_living(&game));
    }

    #[test]
    fn randomize_extremes() {
        let mut game = GameOfLife::new(6, 6).unwrap();
        game.randomize(100).unwrap();
        assert_eq!(game.living_count(), 36);

        game.randomize(0).unwrap();
        assert_eq!(game.living_count(), 0);
    }

    #[test]
    fn randomize_is_reproducible_with_seed() {
        let mut a = GameOfLife::new(10, 10).unwrap();
        let mut b = GameOfLife::new(10, 10).unwrap();
        a.randomize_with(50, &mut StdRng::seed_from_u64(42)).unwrap();
        b.randomize_with(50, &mut StdRng::seed_from_u64(42)).unwrap();

        assert_eq!(a.living_positions(), b.living_positions());
    }

    #[test]
    fn randomize_rejects_bad_percent() {
        let mut game = game_with(3, 3, &[(1, 1)]);

        assert!(matches!(game.randomize(101), Err(Error::InvalidPercent(101))));
        assert_eq!(game.living_positions(), vec![pos(1, 1)]);
    }
}
