//! Turn state, win detection, and the engine facade

use serde::{Deserialize, Serialize};

use crate::board::{Board, Hex, BOARD_RADIUS};
use crate::rules::{self, IllegalMove, MoveOutcome, Placement};

// ============================================================================
// CORE TYPES
// ============================================================================

/// Stone color. Red moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Red = 0,
    Blue = 1,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }
}

/// Read-only view of the session for a UI layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub active: Player,
    pub moves_played: u32,
    pub game_over: bool,
    pub winner: Option<Player>,
    pub red_wins: u32,
    pub blue_wins: u32,
}

// ============================================================================
// GAME
// ============================================================================

/// One HexOust session: a board plus turn state, with win tallies that
/// survive restarts.
///
/// Every operation runs to completion before returning and a rejected move
/// changes nothing, so a caller can probe legality freely between
/// submissions. The engine provides no internal synchronization; callers on
/// multiple threads must serialize access themselves.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    active: Player,
    moves_played: u32,
    winner: Option<Player>,
    wins: [u32; 2],
}

impl Game {
    /// Standard game on a radius-6 board
    pub fn new() -> Self {
        Self::with_radius(BOARD_RADIUS)
    }

    /// Game on a board of the given radius
    pub fn with_radius(radius: i8) -> Self {
        Self {
            board: Board::new(radius),
            active: Player::Red,
            moves_played: 0,
            winner: None,
            wins: [0, 0],
        }
    }

    /// Game from a constructed position. The move counter starts at the
    /// number of placed stones, so win detection is armed exactly when both
    /// colors are on record as having moved. If the requested active player
    /// has no legal placement the turn passes immediately, as it would in
    /// play.
    pub fn from_setup(radius: i8, red: &[Hex], blue: &[Hex], active: Player) -> Self {
        let mut board = Board::new(radius);
        for &hex in red {
            board.place(hex, Player::Red);
        }
        for &hex in blue {
            board.place(hex, Player::Blue);
        }

        let mut game = Self {
            board,
            active,
            moves_played: (red.len() + blue.len()) as u32,
            winner: None,
            wins: [0, 0],
        };
        game.pass_if_stuck();
        game
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_player(&self) -> Player {
        self.active
    }

    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Games won by `player` across this session's restarts
    pub fn wins(&self, player: Player) -> u32 {
        self.wins[player as usize]
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            active: self.active,
            moves_played: self.moves_played,
            game_over: self.winner.is_some(),
            winner: self.winner,
            red_wins: self.wins[Player::Red as usize],
            blue_wins: self.wins[Player::Blue as usize],
        }
    }

    // ========================================================================
    // MOVES
    // ========================================================================

    /// Dry-run legality of placing `color` at `target`, for hover previews.
    /// The board is never changed; captures and game end are reported as
    /// they would happen.
    pub fn preview_legality(&self, target: Hex, color: Player) -> MoveOutcome {
        if self.winner.is_some() {
            return MoveOutcome::Rejected(IllegalMove::GameAlreadyOver);
        }
        match rules::evaluate(&self.board, target, color) {
            Err(reason) => MoveOutcome::Rejected(reason),
            Ok(placement) => MoveOutcome::Placed {
                ends_game: self.would_win(color, &placement),
                captured: placement.captured_cells(),
                turn_passed: false,
            },
        }
    }

    /// Place a stone for the active player. On success captures are applied
    /// and the turn advances: a capture grants another turn, otherwise the
    /// turn alternates, and a player left without any legal placement is
    /// passed over.
    pub fn submit_move(&mut self, target: Hex) -> MoveOutcome {
        if self.winner.is_some() {
            return MoveOutcome::Rejected(IllegalMove::GameAlreadyOver);
        }
        let placement = match rules::evaluate(&self.board, target, self.active) {
            Err(reason) => return MoveOutcome::Rejected(reason),
            Ok(placement) => placement,
        };

        let captured = rules::apply(&mut self.board, target, self.active, &placement);
        self.moves_played += 1;

        // Win detection arms once both colors have had a first placement;
        // before that the opponent legitimately has no stones.
        if self.moves_played >= 2 && self.board.stone_count(self.active.opponent()) == 0 {
            self.winner = Some(self.active);
            self.wins[self.active as usize] += 1;
            return MoveOutcome::Placed {
                captured,
                ends_game: true,
                turn_passed: false,
            };
        }

        if captured.is_empty() {
            self.active = self.active.opponent();
        }
        let turn_passed = self.pass_if_stuck();

        MoveOutcome::Placed {
            captured,
            ends_game: false,
            turn_passed,
        }
    }

    /// Whether any cell is a legal placement for `color`
    pub fn has_any_legal_move(&self, color: Player) -> bool {
        self.board
            .cells()
            .any(|hex| rules::evaluate(&self.board, hex, color).is_ok())
    }

    /// Begin a new game on a fresh board, keeping the win tallies
    pub fn restart(&mut self) {
        self.board = Board::new(self.board.radius());
        self.active = Player::Red;
        self.moves_played = 0;
        self.winner = None;
    }

    /// Auto-pass: when the player due to move has no legal placement
    /// anywhere, the turn goes back to the opponent. At most one pass per
    /// call; if neither color can move the state is left as is and each
    /// subsequent submission reports its own rejection.
    fn pass_if_stuck(&mut self) -> bool {
        if self.winner.is_none()
            && !self.has_any_legal_move(self.active)
            && self.has_any_legal_move(self.active.opponent())
        {
            self.active = self.active.opponent();
            return true;
        }
        false
    }

    /// Whether committing `placement` would leave the opponent without a
    /// stone once win detection is armed
    fn would_win(&self, color: Player, placement: &Placement) -> bool {
        self.moves_played + 1 >= 2
            && self.board.stone_count(color.opponent()) == placement.captured_count()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
