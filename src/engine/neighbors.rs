use crate::pos::{Offset, Pos};

/// Where a cell sits relative to the grid boundary
///
/// Every cell of a grid with at least two rows and two columns falls into
/// exactly one of these nine classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    TopLeft,
    Top,
    TopRight,
    Left,
    Interior,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Placement {
    pub fn classify(pos: Pos, rows: usize, columns: usize) -> Self {
        let last_row = pos.row + 1 == rows;
        let last_column = pos.column + 1 == columns;
        match (pos.row == 0, last_row, pos.column == 0, last_column) {
            (true, _, true, _) => Self::TopLeft,
            (true, _, _, true) => Self::TopRight,
            (true, _, _, _) => Self::Top,
            (_, true, true, _) => Self::BottomLeft,
            (_, true, _, true) => Self::BottomRight,
            (_, true, _, _) => Self::Bottom,
            (_, _, true, _) => Self::Left,
            (_, _, _, true) => Self::Right,
            _ => Self::Interior,
        }
    }

    /// The directions that stay inside the grid for this placement
    pub fn offsets(self) -> &'static [Offset] {
        use Offset as O;
        match self {
            Self::TopLeft => &[O::RIGHT, O::DOWN, O::DOWN_RIGHT],
            Self::Top => &[O::LEFT, O::RIGHT, O::DOWN_LEFT, O::DOWN, O::DOWN_RIGHT],
            Self::TopRight => &[O::LEFT, O::DOWN_LEFT, O::DOWN],
            Self::Left => &[O::UP, O::UP_RIGHT, O::RIGHT, O::DOWN, O::DOWN_RIGHT],
            Self::Interior => &[
                O::UP_LEFT,
                O::UP,
                O::UP_RIGHT,
                O::LEFT,
                O::RIGHT,
                O::DOWN_LEFT,
                O::DOWN,
                O::DOWN_RIGHT,
            ],
            Self::Right => &[O::UP_LEFT, O::UP, O::LEFT, O::DOWN_LEFT, O::DOWN],
            Self::BottomLeft => &[O::UP, O::UP_RIGHT, O::RIGHT],
            Self::Bottom => &[O::UP_LEFT, O::UP, O::UP_RIGHT, O::LEFT, O::RIGHT],
            Self::BottomRight => &[O::UP_LEFT, O::UP, O::LEFT],
        }
    }
}
