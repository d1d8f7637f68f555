use alloc::vec::Vec;
use core::num::Saturating;
use ndarray::Array2;

use crate::*;

/// Grid of cells plus the game session around it.
///
/// The grid is created once and never resized; the only mutations are cells becoming visited, flags toggling and the
/// one-way switch into the game-over state. Every change is reported synchronously to the subscribers registered with
/// [`MineField::on`].
#[derive(Debug)]
pub struct MineField {
    config: FieldConfig,
    grid: Array2<Cell>,
    game_over: bool,
    visited_count: Saturating<CellCount>,
    flagged_count: Saturating<CellCount>,
    events: EventRegistry,
}

impl MineField {
    /// Random layout reproducible from `seed`.
    pub fn new(config: FieldConfig, seed: u64) -> Result<Self> {
        Self::with_sampler(config, &mut RandomSampler::new(seed))
    }

    pub fn with_sampler<S: MineSampler + ?Sized>(config: FieldConfig, sampler: &mut S) -> Result<Self> {
        let indices = sampler.sample(config.mines(), config.total_cells())?;
        if indices.len() != usize::from(config.mines()) {
            log::warn!(
                "Sampler returned {} mine positions, requested {}",
                indices.len(),
                config.mines()
            );
            return Err(GameError::InvalidSample);
        }

        let mut mine_coords = Vec::with_capacity(indices.len());
        for index in indices {
            let coords = linear_to_coords(index, config.width())
                .filter(|&(row, _)| row < config.height())
                .ok_or_else(|| {
                    log::warn!("Sampler returned out of range index {}", index);
                    GameError::InvalidSample
                })?;
            mine_coords.push(coords);
        }

        Ok(Self::build(config, &mine_coords))
    }

    /// Fixed layout, duplicates count once.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let (height, width) = size;
        if height == 0 || width == 0 {
            return Err(GameError::EmptyField);
        }
        if mine_coords.iter().any(|&(row, col)| row >= height || col >= width) {
            return Err(GameError::InvalidCoords);
        }

        let mut unique = mine_coords.to_vec();
        unique.sort_unstable();
        unique.dedup();

        let mines = unique.len().try_into().map_err(|_| GameError::TooManyMines)?;
        let config = FieldConfig::new(height, width, mines)?;
        Ok(Self::build(config, &unique))
    }

    fn build(config: FieldConfig, mine_coords: &[Coord2]) -> Self {
        let mut grid: Array2<Cell> = Array2::default(config.size().to_nd_index());

        for &coords in mine_coords {
            grid[coords.to_nd_index()].is_mine = true;
            for pos in NeighborIter::new(coords, config.size()) {
                grid[pos.to_nd_index()].neighboring_mines += 1;
            }
        }

        log::debug!(
            "Created {}x{} minefield with {} mines",
            config.height(),
            config.width(),
            config.mines()
        );

        Self {
            config,
            grid,
            game_over: false,
            visited_count: Saturating(0),
            flagged_count: Saturating(0),
            events: EventRegistry::new(),
        }
    }

    pub fn config(&self) -> FieldConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn height(&self) -> Coord {
        self.config.height()
    }

    pub fn width(&self) -> Coord {
        self.config.width()
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn visited_count(&self) -> CellCount {
        self.visited_count.0
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count.0
    }

    /// Mines minus placed flags, negative when over-flagged.
    pub fn mines_left(&self) -> i32 {
        i32::from(self.config.mines()) - i32::from(self.flagged_count.0)
    }

    /// Every safe cell has been visited by at least one move.
    ///
    /// Informational only, it never ends the game. A field made only of mines is never cleared, since the first
    /// possible move hits a mine.
    pub fn is_cleared(&self) -> bool {
        !self.game_over && self.visited_count.0 > 0 && self.visited_count.0 == self.config.safe_cells()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (height, width) = self.size();
        if coords.0 < height && coords.1 < width {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn cell(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self.grid[coords.to_nd_index()])
    }

    pub fn neighbors(&self, coords: Coord2) -> Result<NeighborIter> {
        let coords = self.validate_coords(coords)?;
        Ok(self.iter_neighbors(coords))
    }

    /// Row-major iterator over every cell with its coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.grid.indexed_iter().map(|((row, col), &cell)| {
            // indices come from a grid sized by `Coord` values
            ((row as Coord, col as Coord), cell)
        })
    }

    pub fn on(&mut self, kind: EventKind, observer: impl FieldObserver + 'static) {
        self.events.subscribe(kind, observer);
    }

    /// Reveals the cell at `coords`, cascading through neighbors while revealed cells have no adjacent mines.
    ///
    /// Visited or flagged cells and a finished game turn the call into a no-op without any notification. Cells are
    /// opened in pre-order: each cell's [`FieldEvent::CellOpened`] is emitted before any of its neighbors are looked
    /// at, and neighbors are handled in row-major order, each one fully before the next.
    pub fn check(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;

        let mut outcome = RevealOutcome::NoChange;
        let mut to_visit = Vec::from([coords]);

        while let Some(visit_coords) = to_visit.pop() {
            let step = self.open_single_cell(visit_coords);
            outcome = outcome | step;

            if step == RevealOutcome::Revealed && self.grid[visit_coords.to_nd_index()].cascades() {
                let start = to_visit.len();
                to_visit.extend(
                    self.iter_neighbors(visit_coords)
                        .filter(|&pos| self.grid[pos.to_nd_index()].is_revealable()),
                );
                // popped from the back, so reverse to keep row-major order
                to_visit[start..].reverse();
            }
        }

        Ok(outcome)
    }

    /// The grid is always allocated from `config.size()`, so this is the grid's own shape.
    fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.config.size())
    }

    fn open_single_cell(&mut self, coords: Coord2) -> RevealOutcome {
        if self.game_over {
            return RevealOutcome::NoChange;
        }

        let cell = &mut self.grid[coords.to_nd_index()];
        if !cell.is_revealable() {
            return RevealOutcome::NoChange;
        }

        cell.visited = true;
        let cell = *cell;
        self.visited_count += 1;

        log::trace!("({}, {}) opened: {:?}", coords.0, coords.1, cell);
        self.events.dispatch(&FieldEvent::CellOpened { coords, cell });

        if cell.is_mine {
            log::info!("Mine at ({}, {}) revealed, game over", coords.0, coords.1);
            self.events.dispatch(&FieldEvent::GameOver);
            self.game_over = true;
            RevealOutcome::HitMine
        } else {
            RevealOutcome::Revealed
        }
    }

    /// Toggles the flag on `coords` and returns the updated cell.
    ///
    /// Works on any cell in any game state; reveal simply refuses to open flagged cells.
    pub fn flag(&mut self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;

        let cell = &mut self.grid[coords.to_nd_index()];
        cell.is_flagged = !cell.is_flagged;
        let cell = *cell;

        if cell.is_flagged {
            self.flagged_count += 1;
        } else {
            self.flagged_count -= 1;
        }

        self.events.dispatch(&FieldEvent::FlagChanged { coords, cell });
        Ok(cell)
    }
}
