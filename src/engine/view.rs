use super::GameOfLife;
use crate::{Cell, DisplayMode, Pos};

/// A text rendering of a rectangular region of the current generation
pub struct GridView<'a> {
    tl: Pos,
    rows: usize,
    columns: usize,
    mode: DisplayMode,
    engine: &'a GameOfLife,
}
impl<'a> GridView<'a> {
    pub fn new(engine: &'a GameOfLife, mode: DisplayMode) -> Self {
        Self {
            tl: Pos::default(),
            rows: engine.rows(),
            columns: engine.columns(),
            mode,
            engine,
        }
    }

    /// Narrows the view to at most `rows` x `columns` cells starting at
    /// `top_left`, clamped to the grid
    pub fn window(mut self, top_left: Pos, rows: usize, columns: usize) -> Self {
        self.tl = Pos::new(
            top_left.row.min(self.engine.rows()),
            top_left.column.min(self.engine.columns()),
        );
        self.rows = rows.min(self.engine.rows() - self.tl.row);
        self.columns = columns.min(self.engine.columns() - self.tl.column);
        self
    }

    /// One freshly allocated string per row, each ending in `'\n'`
    pub fn lines(&self) -> Vec<String> {
        self.row_slices()
            .map(|cells| {
                let mut line: String = cells
                    .iter()
                    .map(|c| self.mode.glyph(c.is_living()))
                    .collect();
                line.push('\n');
                line
            })
            .collect()
    }

    fn row_slices(&self) -> impl Iterator<Item = &'a [Cell]> + '_ {
        let columns = self.tl.column..self.tl.column + self.columns;
        self.engine
            .grid_rows()
            .skip(self.tl.row)
            .take(self.rows)
            .map(move |row| &row[columns.clone()])
    }
}

impl std::fmt::Display for GridView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cells in self.row_slices() {
            for cell in cells {
                write!(f, "{}", cell.display(self.mode))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
