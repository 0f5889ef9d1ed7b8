//! Hex board geometry with cube coordinates

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::game::Player;

/// Standard board radius (distance from center to edge)
pub const BOARD_RADIUS: i8 = 6;

/// Cube hex coordinates, q + r + s = 0
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hex {
    pub q: i8,
    pub r: i8,
    pub s: i8,
}

impl Hex {
    /// Construct a coordinate. A component sum other than zero is a caller
    /// bug, not a recoverable condition, and panics.
    pub const fn new(q: i8, r: i8, s: i8) -> Self {
        assert!(q as i16 + r as i16 + s as i16 == 0, "q + r + s must be 0");
        Self { q, r, s }
    }

    pub fn add(self, other: Hex) -> Hex {
        Hex::new(self.q + other.q, self.r + other.r, self.s + other.s)
    }

    pub fn subtract(self, other: Hex) -> Hex {
        Hex::new(self.q - other.q, self.r - other.r, self.s - other.s)
    }

    /// Unit vector for a direction (0-5)
    pub fn direction(direction: u8) -> Hex {
        DIRECTIONS[direction as usize % 6]
    }

    /// Get neighbor in direction (0-5)
    pub fn neighbor(self, direction: u8) -> Hex {
        self.add(Self::direction(direction))
    }

    /// Cube distance from the origin
    pub fn length(self) -> i8 {
        (self.q.abs() + self.r.abs() + self.s.abs()) / 2
    }

    /// Cube distance between two hexes
    pub fn distance(self, other: Hex) -> i8 {
        self.subtract(other).length()
    }
}

/// Direction unit vectors in cube coordinates.
/// Index i and i + 3 are exact complements, so walking direction i and then
/// i + 3 returns to the starting hex.
pub const DIRECTIONS: [Hex; 6] = [
    Hex::new(1, 0, -1),
    Hex::new(1, -1, 0),
    Hex::new(0, -1, 1),
    Hex::new(-1, 0, 1),
    Hex::new(-1, 1, 0),
    Hex::new(0, 1, -1),
];

/// Playing surface: the hexagonal region of all cells within `radius` steps
/// of the center, plus a sparse map of the stones standing on it. An absent
/// entry in the stone map is an empty cell; a coordinate outside the region
/// is not a cell at all.
#[derive(Clone, Debug)]
pub struct Board {
    radius: i8,
    stones: FxHashMap<Hex, Player>,
}

impl Board {
    pub fn new(radius: i8) -> Self {
        assert!(radius >= 0, "radius must be non-negative");
        Self {
            radius,
            stones: FxHashMap::default(),
        }
    }

    pub fn radius(&self) -> i8 {
        self.radius
    }

    /// Whether the coordinate addresses a cell of this board.
    /// For cube coordinates max(|q|,|r|,|s|) equals the cube length, so the
    /// hexagonal region test is a distance check.
    pub fn contains(&self, hex: Hex) -> bool {
        hex.length() <= self.radius
    }

    /// Stone standing at the cell, if any
    pub fn stone_at(&self, hex: Hex) -> Option<Player> {
        self.stones.get(&hex).copied()
    }

    /// Whether the coordinate is a cell and no stone stands on it
    pub fn is_empty_cell(&self, hex: Hex) -> bool {
        self.contains(hex) && !self.stones.contains_key(&hex)
    }

    /// Put a stone on an empty cell
    pub fn place(&mut self, hex: Hex, player: Player) {
        debug_assert!(self.contains(hex), "placement outside the board");
        debug_assert!(!self.stones.contains_key(&hex), "cell already occupied");
        self.stones.insert(hex, player);
    }

    /// Take the stone off a cell, if one stands there
    pub fn remove(&mut self, hex: Hex) {
        self.stones.remove(&hex);
    }

    /// On-board neighbors of a cell, in direction order. Edge cells have
    /// fewer than six.
    pub fn neighbors(&self, hex: Hex) -> impl Iterator<Item = Hex> + '_ {
        DIRECTIONS
            .iter()
            .map(move |&d| hex.add(d))
            .filter(|&n| self.contains(n))
    }

    /// Every cell of the region. The region of radius N holds 1 + 3N(N+1)
    /// cells.
    pub fn cells(&self) -> impl Iterator<Item = Hex> {
        let n = self.radius;
        (-n..=n).flat_map(move |q| {
            let lo = (-n).max(-q - n);
            let hi = n.min(-q + n);
            (lo..=hi).map(move |r| Hex::new(q, r, -q - r))
        })
    }

    /// All stones on the board
    pub fn stones(&self) -> impl Iterator<Item = (Hex, Player)> + '_ {
        self.stones.iter().map(|(&hex, &player)| (hex, player))
    }

    /// Number of stones of one color on the board
    pub fn stone_count(&self, player: Player) -> usize {
        self.stones.values().filter(|&&p| p == player).count()
    }

    /// Clear every stone, keeping the region
    pub fn clear(&mut self) {
        self.stones.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_subtract() {
        let a = Hex::new(1, -1, 0);
        let b = Hex::new(0, 1, -1);
        assert_eq!(a.add(b), Hex::new(1, 0, -1));
        assert_eq!(a.subtract(b), Hex::new(1, -2, 1));
    }

    #[test]
    fn test_direction_values() {
        assert_eq!(Hex::direction(0), Hex::new(1, 0, -1));
        assert_eq!(Hex::direction(3), Hex::new(-1, 0, 1));
        assert_eq!(Hex::direction(5), Hex::new(0, 1, -1));
    }

    #[test]
    fn test_neighbor_complements() {
        let hex = Hex::new(2, -1, -1);
        for direction in 0..6u8 {
            assert_eq!(hex.neighbor(direction).neighbor(direction + 3), hex);
        }
    }

    #[test]
    fn test_length_and_distance() {
        assert_eq!(Hex::new(0, 0, 0).length(), 0);
        assert_eq!(Hex::new(2, -1, -1).length(), 2);
        assert_eq!(Hex::new(0, 0, 0).distance(Hex::new(2, -1, -1)), 2);
        assert_eq!(Hex::new(1, 0, -1).distance(Hex::new(-1, 0, 1)), 2);
    }

    #[test]
    #[should_panic(expected = "q + r + s must be 0")]
    fn test_invalid_coordinate() {
        let _ = Hex::new(1, 1, 1);
    }

    #[test]
    fn test_region_cells() {
        let board = Board::new(1);
        assert_eq!(board.cells().count(), 7);

        let board = Board::new(BOARD_RADIUS);
        assert_eq!(board.cells().count(), 127);
        for cell in board.cells() {
            assert_eq!(cell.q as i16 + cell.r as i16 + cell.s as i16, 0);
            assert!(board.contains(cell));
        }
    }

    #[test]
    fn test_neighbor_counts() {
        let board = Board::new(2);

        // Interior cell: six distinct on-board neighbors
        let center = Hex::new(0, 0, 0);
        let neighbors: Vec<Hex> = board.neighbors(center).collect();
        assert_eq!(neighbors.len(), 6);
        for (i, &a) in neighbors.iter().enumerate() {
            for &b in &neighbors[i + 1..] {
                assert_ne!(a, b);
            }
        }

        // Corner cell: three stay on the board
        assert_eq!(board.neighbors(Hex::new(2, 0, -2)).count(), 3);
    }

    #[test]
    fn test_contains() {
        let board = Board::new(2);
        assert!(board.contains(Hex::new(2, 0, -2)));
        assert!(board.contains(Hex::new(-2, 2, 0)));
        assert!(!board.contains(Hex::new(3, 0, -3)));
        assert!(!board.contains(Hex::new(2, 1, -3)));
    }

    #[test]
    fn test_place_remove_count() {
        let mut board = Board::new(2);
        let hex = Hex::new(1, -1, 0);
        assert!(board.is_empty_cell(hex));

        board.place(hex, Player::Red);
        assert_eq!(board.stone_at(hex), Some(Player::Red));
        assert!(!board.is_empty_cell(hex));
        assert_eq!(board.stone_count(Player::Red), 1);
        assert_eq!(board.stone_count(Player::Blue), 0);

        board.remove(hex);
        assert_eq!(board.stone_at(hex), None);
        assert_eq!(board.stone_count(Player::Red), 0);
    }

    #[test]
    fn test_clear() {
        let mut board = Board::new(1);
        board.place(Hex::new(0, 0, 0), Player::Red);
        board.place(Hex::new(1, 0, -1), Player::Blue);
        board.clear();
        assert_eq!(board.stones().count(), 0);
        assert_eq!(board.cells().count(), 7);
    }

    #[test]
    fn test_off_board_is_not_empty_cell() {
        let board = Board::new(1);
        assert!(!board.is_empty_cell(Hex::new(2, 0, -2)));
    }
}
