#![no_std]

extern crate alloc;

use core::ops::BitOr;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use event::*;
pub use field::*;
pub use sampler::*;
pub use types::*;

mod cell;
mod error;
mod event;
mod field;
mod sampler;
mod types;

/// Validated field dimensions and mine count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFieldConfig")]
pub struct FieldConfig {
    height: Coord,
    width: Coord,
    mines: CellCount,
}

#[derive(Deserialize)]
struct RawFieldConfig {
    height: Coord,
    width: Coord,
    mines: CellCount,
}

impl TryFrom<RawFieldConfig> for FieldConfig {
    type Error = GameError;

    fn try_from(raw: RawFieldConfig) -> Result<Self> {
        Self::new(raw.height, raw.width, raw.mines)
    }
}

impl FieldConfig {
    pub fn new(height: Coord, width: Coord, mines: CellCount) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(GameError::EmptyField);
        }
        if mines > mult(height, width) {
            return Err(GameError::TooManyMines);
        }
        Ok(Self {
            height,
            width,
            mines,
        })
    }

    pub const fn height(&self) -> Coord {
        self.height
    }

    pub const fn width(&self) -> Coord {
        self.width
    }

    pub const fn size(&self) -> Coord2 {
        (self.height, self.width)
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.height, self.width)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
}

impl BitOr for RevealOutcome {
    type Output = RevealOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealOutcome::*;
        match (self, rhs) {
            (HitMine, _) => HitMine,
            (_, HitMine) => HitMine,
            (Revealed, _) => Revealed,
            (_, Revealed) => Revealed,
            (NoChange, NoChange) => NoChange,
        }
    }
}
