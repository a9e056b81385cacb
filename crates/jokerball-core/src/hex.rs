//! Hex coordinate system using axial coordinates (q, r).
//!
//! Jokerball plays on a pointy-top hex grid. Positions are axial coordinates with
//! an implied third cube axis `s = -q - r`, and movement happens along the six
//! compass directions in [`Direction`].

use crate::board::{BoardError, PlayerId};
use serde::{Deserialize, Serialize};

/// Compass direction of a neighboring hex (pointy-top orientation).
///
/// The declaration order matches the ball die: a roll of 1 is East, 6 is SouthEast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Right
    East,
    /// Up and to the right
    NorthEast,
    /// Up and to the left
    NorthWest,
    /// Left
    West,
    /// Down and to the left
    SouthWest,
    /// Down and to the right
    SouthEast,
}

impl Direction {
    /// All directions in die order
    pub const ALL: [Direction; 6] = [
        Direction::East,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::West,
        Direction::SouthWest,
        Direction::SouthEast,
    ];

    /// Axial offset of one step in this direction
    pub const fn unit_vector(self) -> HexCoord {
        match self {
            Direction::East => HexCoord::new(1, 0),
            Direction::NorthEast => HexCoord::new(1, -1),
            Direction::NorthWest => HexCoord::new(0, -1),
            Direction::West => HexCoord::new(-1, 0),
            Direction::SouthWest => HexCoord::new(-1, 1),
            Direction::SouthEast => HexCoord::new(0, 1),
        }
    }

    /// Direction selected by a ball die face (1-6)
    pub fn from_die(face: u8) -> Result<Self, BoardError> {
        match face {
            1..=6 => Ok(Self::ALL[face as usize - 1]),
            _ => Err(BoardError::InvalidEnumValue {
                kind: "direction".to_string(),
                value: face.to_string(),
            }),
        }
    }

    /// Die face that selects this direction
    pub fn die_face(self) -> u8 {
        match self {
            Direction::East => 1,
            Direction::NorthEast => 2,
            Direction::NorthWest => 3,
            Direction::West => 4,
            Direction::SouthWest => 5,
            Direction::SouthEast => 6,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::East => Direction::West,
            Direction::NorthEast => Direction::SouthWest,
            Direction::NorthWest => Direction::SouthEast,
            Direction::West => Direction::East,
            Direction::SouthWest => Direction::NorthEast,
            Direction::SouthEast => Direction::NorthWest,
        }
    }

    /// The two directions that carry a player's checkers toward the goal they attack.
    ///
    /// Player 0 (Red) starts in the south and attacks north; player 1 (Blue) the reverse.
    pub fn forward_for(player: PlayerId) -> [Direction; 2] {
        if player == 0 {
            [Direction::NorthEast, Direction::NorthWest]
        } else {
            [Direction::SouthWest, Direction::SouthEast]
        }
    }

    /// Arrow glyph used when showing the ball die
    pub fn arrow(self) -> char {
        match self {
            Direction::East => '→',
            Direction::NorthEast => '↗',
            Direction::NorthWest => '↖',
            Direction::West => '←',
            Direction::SouthWest => '↙',
            Direction::SouthEast => '↘',
        }
    }
}

/// Axial coordinate for hex grid.
///
/// In axial coordinates:
/// - `q` increases going east
/// - `r` increases going southeast
/// - The third coordinate `s` (not stored) satisfies: q + r + s = 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct HexCoord {
    /// Column (increases going east)
    pub q: i32,
    /// Row (increases going southeast)
    pub r: i32,
}

impl HexCoord {
    /// Create a new hex coordinate
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The implicit third coordinate (s = -q - r)
    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Component-wise sum. `s` is never summed, it is derived from the result.
    pub const fn add(&self, other: HexCoord) -> HexCoord {
        HexCoord::new(self.q + other.q, self.r + other.r)
    }

    /// Get the neighbor in a specific direction
    pub const fn neighbor(&self, direction: Direction) -> HexCoord {
        self.add(direction.unit_vector())
    }

    /// The six neighboring hexes in die order starting from East
    pub fn neighbors(&self) -> [HexCoord; 6] {
        Direction::ALL.map(|dir| self.neighbor(dir))
    }

    /// Distance to another hex (in hex steps)
    pub fn distance_to(&self, other: &HexCoord) -> u32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = (self.s() - other.s()).abs();
        ((dq + dr + ds) / 2) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_cube_invariant_after_add() {
        let a = HexCoord::new(3, -5);
        let b = HexCoord::new(-4, 2);
        let sum = a.add(b);
        assert_eq!(sum, HexCoord::new(-1, -3));
        assert_eq!(sum.q + sum.r + sum.s(), 0);
    }

    #[test]
    fn test_unit_vectors() {
        assert_eq!(Direction::East.unit_vector(), HexCoord::new(1, 0));
        assert_eq!(Direction::NorthEast.unit_vector(), HexCoord::new(1, -1));
        assert_eq!(Direction::NorthWest.unit_vector(), HexCoord::new(0, -1));
        assert_eq!(Direction::West.unit_vector(), HexCoord::new(-1, 0));
        assert_eq!(Direction::SouthWest.unit_vector(), HexCoord::new(-1, 1));
        assert_eq!(Direction::SouthEast.unit_vector(), HexCoord::new(0, 1));
    }

    #[test]
    fn test_unit_vectors_cancel_out() {
        let total = Direction::ALL
            .iter()
            .fold(HexCoord::default(), |acc, dir| acc.add(dir.unit_vector()));
        assert_eq!(total, HexCoord::new(0, 0));
    }

    #[test]
    fn test_hex_neighbors() {
        let center = HexCoord::new(2, -1);
        let neighbors = center.neighbors();

        let unique: HashSet<_> = neighbors.iter().collect();
        assert_eq!(unique.len(), 6);

        for neighbor in &neighbors {
            assert_eq!(center.distance_to(neighbor), 1);
            assert_eq!(neighbor.q + neighbor.r + neighbor.s(), 0);
        }
    }

    #[test]
    fn test_opposite_returns_home() {
        let start = HexCoord::new(-2, 4);
        for dir in Direction::ALL {
            assert_eq!(start.neighbor(dir).neighbor(dir.opposite()), start);
        }
    }

    #[test]
    fn test_hex_distance() {
        let a = HexCoord::new(0, 0);
        assert_eq!(a.distance_to(&HexCoord::new(2, -1)), 2);
        assert_eq!(a.distance_to(&HexCoord::new(-3, 3)), 3);
        assert_eq!(a.distance_to(&HexCoord::new(6, -6)), 6);
    }

    #[test]
    fn test_die_faces() {
        assert_eq!(Direction::from_die(1).unwrap(), Direction::East);
        assert_eq!(Direction::from_die(6).unwrap(), Direction::SouthEast);
        for dir in Direction::ALL {
            assert_eq!(Direction::from_die(dir.die_face()).unwrap(), dir);
        }
    }

    #[test]
    fn test_die_face_out_of_range() {
        assert!(matches!(
            Direction::from_die(0),
            Err(BoardError::InvalidEnumValue { .. })
        ));
        assert!(Direction::from_die(7).is_err());
    }

    #[test]
    fn test_forward_directions_point_at_opposite_goals() {
        for dir in Direction::forward_for(0) {
            assert!(dir.unit_vector().r < 0);
        }
        for dir in Direction::forward_for(1) {
            assert!(dir.unit_vector().r > 0);
        }
    }
}
