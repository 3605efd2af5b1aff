use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Ready,
    Active,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One game from the first click to the end, driving a [`Grid`] the way a host UI would.
///
/// Mines are planted up front, but neighbor counts are only computed on the first reveal: if
/// that reveal lands on a mine, the mine is moved away first, so the opening click is always
/// safe.
#[derive(Clone, Debug)]
pub struct GameSession {
    difficulty: Difficulty,
    grid: Grid,
    rng: SmallRng,
    state: GameState,
    triggered_mine: Option<Coord2>,
}

impl GameSession {
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        let mut rng = seeded_rng(seed);
        let mut grid = Grid::from_difficulty(&difficulty);
        grid.plant_mines(difficulty.mines(), &mut rng);
        log::debug!("New game {:?}, seed {}", difficulty, seed);
        Self::with_parts(difficulty, grid, rng)
    }

    /// Starts a game on a board whose mines are already placed.
    pub fn from_grid(grid: Grid, seed: u64) -> core::result::Result<Self, DifficultyError> {
        let difficulty = Difficulty::new(
            grid.width().into(),
            grid.height().into(),
            grid.mine_count().into(),
        )?;
        Ok(Self::with_parts(difficulty, grid, seeded_rng(seed)))
    }

    fn with_parts(difficulty: Difficulty, grid: Grid, rng: SmallRng) -> Self {
        Self {
            difficulty,
            grid,
            rng,
            state: Default::default(),
            triggered_mine: None,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn difficulty(&self) -> &Difficulty {
        &self.difficulty
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<&Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(&self.grid[coords])
    }

    /// Mines not yet accounted for by the player's flags, negative when over-flagged.
    pub fn mines_left(&self) -> isize {
        (self.difficulty.mines() as isize) - (self.grid.flagged_cells() as isize)
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Left click: open a closed, unmarked cell.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;
        self.check_not_finished()?;

        if !self.grid[coords].is_blank() {
            return Ok(RevealOutcome::NoChange);
        }

        if self.state.is_ready() {
            self.start(coords);
        }

        if self.grid[coords].is_mine {
            self.lose(coords);
            return Ok(RevealOutcome::HitMine);
        }

        self.grid.flood_reveal(coords);
        if self.grid.revealed_cells() == self.difficulty.safe_cells() {
            self.win();
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Revealed)
        }
    }

    /// Right click: cycle the marker on a closed cell.
    pub fn mark(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.validate_coords(coords)?;
        self.check_not_finished()?;
        Ok(self.grid.cycle_mark(coords))
    }

    fn start(&mut self, first: Coord2) {
        if self.grid[first].is_mine {
            log::debug!("First reveal at {:?} hit a mine, moving it", first);
            self.grid.move_one_mine(first, &mut self.rng);
        }
        self.grid.compute_neighbor_counts();
        self.state = GameState::Active;
    }

    fn lose(&mut self, coords: Coord2) {
        self.grid.reveal_cell(coords);
        self.grid.indicate_bust(coords);
        self.grid.reveal_all_mines();
        self.grid.indicate_false_alarms();
        self.triggered_mine = Some(coords);
        self.state = GameState::Lost;
        log::debug!("Lost, mine at {:?}", coords);
    }

    fn win(&mut self) {
        self.grid.flag_all_mines();
        self.state = GameState::Won;
        log::debug!("Won with {} cells revealed", self.grid.revealed_cells());
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.grid.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(width: Coord, height: Coord, mines: &[Coord2]) -> GameSession {
        GameSession::from_grid(Grid::with_mines(width, height, mines), 0).unwrap()
    }

    #[test]
    fn state_defaults_to_ready() {
        assert_eq!(GameState::default(), GameState::Ready);
        assert!(GameState::default().is_ready());
        assert!(!GameState::default().is_finished());
    }

    #[test]
    fn new_session_plants_requested_mines() {
        let difficulty = Difficulty::new(16, 16, 40).unwrap();

        let game = GameSession::new(difficulty, 42);

        assert_eq!(game.state(), GameState::Ready);
        assert_eq!(game.grid().mine_count(), 40);
        assert_eq!(game.grid().size(), (16, 16));
        assert_eq!(game.mines_left(), 40);
    }

    #[test]
    fn first_reveal_never_hits_a_mine() {
        let difficulty = Difficulty::new(9, 9, 80).unwrap();
        for seed in 0..50 {
            let mut game = GameSession::new(difficulty, seed);

            let outcome = game.reveal((4, 4)).unwrap();

            assert_eq!(outcome, RevealOutcome::Won, "seed {seed}");
            assert_eq!(game.grid().mine_count(), 80);
            assert!(!game.grid()[(4, 4)].is_mine);
        }
    }

    #[test]
    fn first_reveal_on_mine_moves_it_and_counts_after() {
        let mut game = session(3, 3, &[(1, 1)]);

        let outcome = game.reveal((1, 1)).unwrap();

        assert_eq!(outcome, RevealOutcome::Revealed);
        assert_eq!(game.state(), GameState::Active);
        assert!(!game.grid()[(1, 1)].is_mine);
        assert_eq!(game.grid().mine_count(), 1);
        assert_eq!(game.grid()[(1, 1)].mines_neighbor, 1);
        assert_eq!(game.grid().revealed_cells(), 1);
    }

    #[test]
    fn losing_resolves_the_board() {
        let mut game = session(3, 3, &[(0, 0), (2, 2)]);
        assert_eq!(game.reveal((0, 2)).unwrap(), RevealOutcome::Revealed);
        game.mark((1, 0)).unwrap();
        game.mark((2, 2)).unwrap();
        assert_eq!(game.mines_left(), 0);

        let outcome = game.reveal((0, 0)).unwrap();

        let grid = game.grid();
        assert_eq!(outcome, RevealOutcome::HitMine);
        assert_eq!(game.state(), GameState::Lost);
        assert_eq!(game.triggered_mine(), Some((0, 0)));
        assert!(grid[(0, 0)].is_revealed && grid[(0, 0)].did_bust);
        assert!(grid[(2, 2)].is_flagged && !grid[(2, 2)].is_revealed);
        assert!(grid[(1, 0)].is_false_alarm && grid[(1, 0)].is_revealed);
        assert_eq!(grid.iter_cells().filter(|cell| cell.is_false_alarm).count(), 1);
    }

    #[test]
    fn winning_flags_every_mine() {
        let mut game = session(3, 3, &[(2, 2)]);

        let outcome = game.reveal((0, 0)).unwrap();

        assert_eq!(outcome, RevealOutcome::Won);
        assert_eq!(game.state(), GameState::Won);
        assert!(game.is_finished());
        assert!(game.grid()[(2, 2)].is_flagged);
        assert!(!game.grid()[(2, 2)].is_revealed);
        assert_eq!(game.grid().revealed_cells(), 8);
    }

    #[test]
    fn finished_game_rejects_moves() {
        let mut game = session(2, 1, &[(0, 0)]);
        assert_eq!(game.reveal((0, 1)).unwrap(), RevealOutcome::Won);

        assert_eq!(game.reveal((0, 0)), Err(GameError::AlreadyEnded));
        assert_eq!(game.mark((0, 0)), Err(GameError::AlreadyEnded));
    }

    #[test]
    fn out_of_range_coords_are_rejected() {
        let mut game = session(3, 3, &[(0, 0)]);

        assert_eq!(game.reveal((3, 0)), Err(GameError::InvalidCoords));
        assert_eq!(game.mark((0, 3)), Err(GameError::InvalidCoords));
        assert!(game.cell_at((9, 9)).is_err());
        assert_eq!(game.state(), GameState::Ready);
    }

    #[test]
    fn marked_cells_ignore_reveal() {
        let mut game = session(3, 3, &[(0, 0)]);
        game.mark((2, 2)).unwrap();

        assert_eq!(game.reveal((2, 2)).unwrap(), RevealOutcome::NoChange);
        assert_eq!(game.state(), GameState::Ready);
        assert_eq!(game.mines_left(), 0);

        game.mark((2, 2)).unwrap();
        assert_eq!(game.reveal((2, 2)).unwrap(), RevealOutcome::NoChange);
        game.mark((2, 2)).unwrap();
        assert_ne!(game.reveal((2, 2)).unwrap(), RevealOutcome::NoChange);
    }

    #[test]
    fn from_grid_rejects_mineless_board() {
        assert_eq!(
            GameSession::from_grid(Grid::new(3, 3), 0).err(),
            Some(DifficultyError::NoMines)
        );
    }
}
