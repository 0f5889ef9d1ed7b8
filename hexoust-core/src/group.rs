//! Connected stone groups

use rustc_hash::FxHashSet;

use crate::board::{Board, Hex};
use crate::game::Player;

/// A maximal set of same-colored, adjacency-connected stones.
///
/// Groups are derived on demand and never cached: any placement or removal
/// invalidates prior groupings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    color: Player,
    cells: FxHashSet<Hex>,
}

impl Group {
    pub fn color(&self) -> Player {
        self.color
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, hex: Hex) -> bool {
        self.cells.contains(&hex)
    }

    pub fn cells(&self) -> impl Iterator<Item = Hex> + '_ {
        self.cells.iter().copied()
    }
}

/// Group containing the stone at `origin`, or `None` for an empty or
/// off-board cell.
///
/// The same occupancy always yields the same set, whatever order the
/// neighbors are visited in.
pub fn group_at(board: &Board, origin: Hex) -> Option<Group> {
    let color = board.stone_at(origin)?;
    Some(flood(board, origin, color, None))
}

/// Group that would contain `origin` if a `color` stone stood there. The
/// board itself is untouched; the stone exists only for this search.
pub fn group_with(board: &Board, origin: Hex, color: Player) -> Group {
    debug_assert!(board.is_empty_cell(origin), "cell must be empty");
    flood(board, origin, color, Some(origin))
}

/// Iterative flood fill over same-colored neighbors. The result set doubles
/// as the visited marker, so every cell is expanded at most once and the
/// walk is linear in the board size.
fn flood(board: &Board, origin: Hex, color: Player, hypothetical: Option<Hex>) -> Group {
    let occupant = |hex: Hex| {
        if hypothetical == Some(hex) {
            Some(color)
        } else {
            board.stone_at(hex)
        }
    };

    let mut cells = FxHashSet::default();
    let mut stack = vec![origin];
    cells.insert(origin);
    while let Some(hex) = stack.pop() {
        for neighbor in board.neighbors(hex) {
            if occupant(neighbor) == Some(color) && cells.insert(neighbor) {
                stack.push(neighbor);
            }
        }
    }

    Group { color, cells }
}
