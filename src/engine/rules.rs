use std::sync::OnceLock;

/// Live-neighbor counts range over `0..=8`
const NEIGHBOR_COUNTS: usize = 9;
type RuleTable = [[bool; NEIGHBOR_COUNTS]; 2];

/// Returns a Singleton lookup table for the Game of Life ruleset
///
/// Equivalent to calling [`generate_rule_table`] once and storing the result
fn get_rule_table() -> &'static RuleTable {
    static TABLE: OnceLock<RuleTable> = OnceLock::new();
    TABLE.get_or_init(generate_rule_table)
}

/// Creates a lookup table for the Game of Life ruleset
///
/// The table is indexed first by whether the cell is alive, then by how many
/// of its neighbors are alive. Returns whether the cell is alive in the next
/// generation.
fn generate_rule_table() -> RuleTable {
    let mut table = [[false; NEIGHBOR_COUNTS]; 2];
    for (alive, row) in table.iter_mut().enumerate() {
        for (neighbors, next) in row.iter_mut().enumerate() {
            *next = matches!((alive == 1, neighbors), (true, 2) | (_, 3));
        }
    }
    table
}

/// Whether a cell with the given state and live-neighbor count lives on
#[inline]
pub(super) fn next_state(living: bool, neighbors: usize) -> bool {
    debug_assert!(neighbors < NEIGHBOR_COUNTS, "more than 8 neighbors");
    get_rule_table()[usize::from(living)][neighbors]
}
