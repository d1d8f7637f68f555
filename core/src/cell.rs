use serde::{Deserialize, Serialize};

/// Snapshot of a single grid position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub is_mine: bool,
    /// Mines among the up to 8 surrounding cells, also computed for mines.
    pub neighboring_mines: u8,
    pub visited: bool,
    pub is_flagged: bool,
}

impl Cell {
    /// Whether a reveal at this cell would do anything, ignoring game state.
    pub const fn is_revealable(self) -> bool {
        !self.visited && !self.is_flagged
    }

    /// Whether revealing this cell continues into its neighbors.
    pub const fn cascades(self) -> bool {
        !self.is_mine && self.neighboring_mines == 0
    }
}
