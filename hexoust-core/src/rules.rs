//! Placement legality and capture resolution

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, Hex};
use crate::game::Player;
use crate::group::{group_at, group_with, Group};

// ============================================================================
// OUTCOME TYPES
// ============================================================================

/// Why a placement was rejected. Every variant is an expected, recoverable
/// outcome reported to the caller as a value; none of them leaves a mark on
/// the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum IllegalMove {
    /// Target coordinate is not a cell of the board
    #[error("no cell at that position")]
    OutOfBounds,
    /// Target cell already has a stone
    #[error("cell is already occupied")]
    CellOccupied,
    /// Placement joins a friendly group without capturing anything
    #[error("cannot join your own group without a capture")]
    SelfGroupViolation,
    /// A winner has already been declared
    #[error("the game is already over")]
    GameAlreadyOver,
}

/// Result of a placement request, for the UI or a test harness
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The stone was placed (or, for a preview, would be)
    Placed {
        /// Cells of every captured opponent group, sorted
        captured: Vec<Hex>,
        /// The move ends the game
        ends_game: bool,
        /// The opponent had no legal reply and the turn passed back
        turn_passed: bool,
    },
    /// The placement was rejected and nothing changed
    Rejected(IllegalMove),
}

impl MoveOutcome {
    pub fn is_legal(&self) -> bool {
        matches!(self, MoveOutcome::Placed { .. })
    }
}

/// An accepted placement: the group the new stone would form together with
/// the adjacent opponent groups it outsizes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    group: Group,
    doomed: Vec<Group>,
}

impl Placement {
    /// Size of the group the placed stone would belong to
    pub fn group_len(&self) -> usize {
        self.group.len()
    }

    /// Whether the placement captures at least one opponent group
    pub fn captures(&self) -> bool {
        !self.doomed.is_empty()
    }

    /// Total number of stones that would come off the board
    pub fn captured_count(&self) -> usize {
        self.doomed.iter().map(Group::len).sum()
    }

    /// Cells of every doomed group, sorted
    pub fn captured_cells(&self) -> Vec<Hex> {
        let mut cells: Vec<Hex> = self.doomed.iter().flat_map(|g| g.cells()).collect();
        cells.sort_unstable();
        cells
    }
}

// ============================================================================
// LEGALITY
// ============================================================================

/// Decide whether `color` may place a stone at `target`.
///
/// Pure dry run: the board is only read, so a rejection cannot leave any
/// state behind. A placement is accepted when the stone stands alone, or
/// when the group it joins ends up strictly larger than at least one
/// adjacent opponent group; every such outsized group is doomed.
pub fn evaluate(board: &Board, target: Hex, color: Player) -> Result<Placement, IllegalMove> {
    if !board.contains(target) {
        return Err(IllegalMove::OutOfBounds);
    }
    if board.stone_at(target).is_some() {
        return Err(IllegalMove::CellOccupied);
    }

    let group = group_with(board, target, color);
    let doomed: Vec<Group> = adjacent_enemy_groups(board, &group)
        .into_iter()
        .filter(|enemy| enemy.len() < group.len())
        .collect();

    // A lone stone is always fine; joining a friendly group demands a capture.
    if group.len() > 1 && doomed.is_empty() {
        return Err(IllegalMove::SelfGroupViolation);
    }

    Ok(Placement { group, doomed })
}

/// Distinct opponent groups adjacent to `group`. A membership set keeps a
/// group that borders two different cells from being walked twice.
fn adjacent_enemy_groups(board: &Board, group: &Group) -> Vec<Group> {
    let enemy = group.color().opponent();
    let mut seen: FxHashSet<Hex> = FxHashSet::default();
    let mut groups = Vec::new();

    for cell in group.cells() {
        for neighbor in board.neighbors(cell) {
            if board.stone_at(neighbor) == Some(enemy) && !seen.contains(&neighbor) {
                let enemy_group =
                    group_at(board, neighbor).expect("stone observed at this cell");
                seen.extend(enemy_group.cells());
                groups.push(enemy_group);
            }
        }
    }

    groups
}

// ============================================================================
// CAPTURE
// ============================================================================

/// Commit an accepted placement: put the stone down and empty every doomed
/// opponent group. Returns the captured cells, sorted.
pub fn apply(board: &mut Board, target: Hex, color: Player, placement: &Placement) -> Vec<Hex> {
    board.place(target, color);
    let captured = placement.captured_cells();
    for &hex in &captured {
        board.remove(hex);
    }
    captured
}
