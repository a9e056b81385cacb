//! Game board representation: terrain, occupancy, and the standard Jokerball layout.
//!
//! This module contains:
//! - Terrain (`HexType`) and occupant (`Occupied`) tags
//! - The `Hex` cell with its stable index
//! - The `Board` grid with coordinate and index lookup
//! - The standard starting layout (walls, goals, checkers, ball)

use crate::hex::{Direction, HexCoord};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Player identifier (0 = Red, 1 = Blue)
pub type PlayerId = u8;

/// Radius of the standard Jokerball board
pub const BOARD_RADIUS: i32 = 6;

/// Errors raised by board construction and lookups
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum BoardError {
    #[error("Coordinate ({q}, {r}) is not on the board")]
    CoordinateOutOfRange { q: i32, r: i32 },

    #[error("Invalid {kind} value: {value}")]
    InvalidEnumValue { kind: String, value: String },
}

/// Terrain of a hex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum HexType {
    /// Ordinary playing space
    #[default]
    PlayArea,
    /// The northern or southern goal. Checkers entering it leave the game,
    /// the ball entering it ends the game.
    Goal,
    /// The eastern and western borders. Nothing moves through them.
    Wall,
}

impl HexType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HexType::PlayArea => "play-area",
            HexType::Goal => "goal",
            HexType::Wall => "wall",
        }
    }
}

impl fmt::Display for HexType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HexType {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "play-area" => Ok(HexType::PlayArea),
            "goal" => Ok(HexType::Goal),
            "wall" => Ok(HexType::Wall),
            other => Err(BoardError::InvalidEnumValue {
                kind: "hex type".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// What sits on a hex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Occupied {
    /// Nothing
    #[default]
    Empty,
    /// The ball (exactly one hex holds it)
    Ball,
    /// A checker of player 0
    Red,
    /// A checker of player 1
    Blue,
}

impl Occupied {
    /// Checker color for a player
    pub fn for_player(player: PlayerId) -> Self {
        if player == 0 {
            Occupied::Red
        } else {
            Occupied::Blue
        }
    }

    /// Owner of the checker on this hex, if any
    pub fn owner(&self) -> Option<PlayerId> {
        match self {
            Occupied::Red => Some(0),
            Occupied::Blue => Some(1),
            Occupied::Empty | Occupied::Ball => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Occupied::Empty
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Occupied::Empty => "empty",
            Occupied::Ball => "ball",
            Occupied::Red => "red",
            Occupied::Blue => "blue",
        }
    }
}

impl fmt::Display for Occupied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Occupied {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "empty" => Ok(Occupied::Empty),
            "ball" => Ok(Occupied::Ball),
            "red" => Ok(Occupied::Red),
            "blue" => Ok(Occupied::Blue),
            other => Err(BoardError::InvalidEnumValue {
                kind: "occupant".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// A single hex on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hex {
    coord: HexCoord,
    index: usize,
    hex_type: HexType,
    occupied: Occupied,
}

impl Hex {
    fn new(coord: HexCoord, index: usize) -> Self {
        Self {
            coord,
            index,
            hex_type: HexType::PlayArea,
            occupied: Occupied::Empty,
        }
    }

    /// Position on the grid
    pub fn coord(&self) -> HexCoord {
        self.coord
    }

    /// Stable index assigned at construction
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn hex_type(&self) -> HexType {
        self.hex_type
    }

    pub fn occupied(&self) -> Occupied {
        self.occupied
    }

    pub fn set_hex_type(&mut self, hex_type: HexType) {
        self.hex_type = hex_type;
    }

    pub fn set_occupied(&mut self, occupied: Occupied) {
        self.occupied = occupied;
    }
}

/// The hexagonal game board
#[derive(Debug, Clone, Serialize)]
pub struct Board {
    /// Distance from the center to the edge
    radius: i32,
    /// All hexes in index order
    hexes: Vec<Hex>,
    /// Coordinate to index
    #[serde(skip)]
    index: HashMap<HexCoord, usize>,
}

impl Board {
    /// Create a board of open play area with the given radius.
    ///
    /// Indices run q-major from `-radius` to `radius`, then r ascending within each
    /// column. Views map their cells to hexes by this order.
    pub fn new(radius: i32) -> Self {
        let mut hexes = Vec::new();
        let mut index = HashMap::new();

        for q in -radius..=radius {
            let r1 = (-radius).max(-q - radius);
            let r2 = radius.min(-q + radius);
            for r in r1..=r2 {
                let coord = HexCoord::new(q, r);
                index.insert(coord, hexes.len());
                hexes.push(Hex::new(coord, hexes.len()));
            }
        }

        Self {
            radius,
            hexes,
            index,
        }
    }

    /// Create the standard Jokerball starting layout
    pub fn standard() -> Result<Self, BoardError> {
        let mut board = Self::new(BOARD_RADIUS);

        board.set_occupied(HexCoord::new(0, 0), Occupied::Ball)?;
        board.place_checkers()?;
        board.build_walls()?;
        board.build_goals()?;

        Ok(board)
    }

    /// Two rows of checkers in front of each goal, point-mirrored between players
    fn place_checkers(&mut self) -> Result<(), BoardError> {
        let red_rows = [(4, -5..=1), (5, -5..=0)];
        for (r, qs) in red_rows {
            for q in qs {
                self.set_occupied(HexCoord::new(q, r), Occupied::Red)?;
            }
        }

        let blue_rows = [(-5, 0..=5), (-4, -1..=5)];
        for (r, qs) in blue_rows {
            for q in qs {
                self.set_occupied(HexCoord::new(q, r), Occupied::Blue)?;
            }
        }

        Ok(())
    }

    /// Wall chains along the east and west borders
    fn build_walls(&mut self) -> Result<(), BoardError> {
        let chains = [
            (HexCoord::new(-1, -5), Direction::SouthWest, Direction::SouthEast),
            (HexCoord::new(6, -5), Direction::SouthEast, Direction::SouthWest),
        ];

        for (start, first, second) in chains {
            let mut coord = start;
            for _ in 0..5 {
                self.set_hex_type(coord, HexType::Wall)?;
                coord = coord.neighbor(first);
            }
            for _ in 0..6 {
                self.set_hex_type(coord, HexType::Wall)?;
                coord = coord.neighbor(second);
            }
        }

        Ok(())
    }

    fn build_goals(&mut self) -> Result<(), BoardError> {
        for q in 0..=self.radius {
            self.set_hex_type(HexCoord::new(q, -self.radius), HexType::Goal)?;
        }
        for q in -self.radius..=0 {
            self.set_hex_type(HexCoord::new(q, self.radius), HexType::Goal)?;
        }
        Ok(())
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// All hexes in index order
    pub fn hexes(&self) -> &[Hex] {
        &self.hexes
    }

    pub fn len(&self) -> usize {
        self.hexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hexes.is_empty()
    }

    /// Look up a hex by coordinate
    pub fn get(&self, coord: HexCoord) -> Option<&Hex> {
        self.index.get(&coord).map(|&idx| &self.hexes[idx])
    }

    /// Look up a hex that must exist
    pub fn require(&self, coord: HexCoord) -> Result<&Hex, BoardError> {
        self.get(coord).ok_or(BoardError::CoordinateOutOfRange {
            q: coord.q,
            r: coord.r,
        })
    }

    fn require_mut(&mut self, coord: HexCoord) -> Result<&mut Hex, BoardError> {
        match self.index.get(&coord) {
            Some(&idx) => Ok(&mut self.hexes[idx]),
            None => Err(BoardError::CoordinateOutOfRange {
                q: coord.q,
                r: coord.r,
            }),
        }
    }

    /// Look up a hex by its index
    pub fn hex(&self, index: usize) -> Option<&Hex> {
        self.hexes.get(index)
    }

    pub(crate) fn hex_mut(&mut self, index: usize) -> Option<&mut Hex> {
        self.hexes.get_mut(index)
    }

    pub fn set_hex_type(&mut self, coord: HexCoord, hex_type: HexType) -> Result<(), BoardError> {
        self.require_mut(coord)?.set_hex_type(hex_type);
        Ok(())
    }

    pub fn set_occupied(&mut self, coord: HexCoord, occupied: Occupied) -> Result<(), BoardError> {
        self.require_mut(coord)?.set_occupied(occupied);
        Ok(())
    }

    /// Number of checkers a player still has on the board
    pub fn checker_count(&self, player: PlayerId) -> usize {
        let color = Occupied::for_player(player);
        self.hexes.iter().filter(|h| h.occupied == color).count()
    }

    /// Convert to a JSON-friendly representation, one entry per hex in index order
    pub fn to_json_friendly(&self) -> Vec<HexJson> {
        self.hexes
            .iter()
            .map(|hex| HexJson {
                index: hex.index,
                q: hex.coord.q,
                r: hex.coord.r,
                s: hex.coord.s(),
                hex_type: hex.hex_type,
                occupied: hex.occupied,
            })
            .collect()
    }
}

/// JSON-friendly hex representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexJson {
    pub index: usize,
    pub q: i32,
    pub r: i32,
    pub s: i32,
    pub hex_type: HexType,
    pub occupied: Occupied,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_count() {
        for radius in 0..=6 {
            let board = Board::new(radius);
            let expected = (3 * radius * radius + 3 * radius + 1) as usize;
            assert_eq!(board.len(), expected);
        }
        assert_eq!(Board::new(BOARD_RADIUS).len(), 127);
    }

    #[test]
    fn test_coordinates_within_radius() {
        let board = Board::new(BOARD_RADIUS);
        for hex in board.hexes() {
            let c = hex.coord();
            assert_eq!(c.q + c.r + c.s(), 0);
            assert!(c.q.abs() <= BOARD_RADIUS);
            assert!(c.r.abs() <= BOARD_RADIUS);
            assert!(c.s().abs() <= BOARD_RADIUS);
        }
    }

    #[test]
    fn test_index_order_is_q_major() {
        let board = Board::new(BOARD_RADIUS);
        let hexes = board.hexes();

        assert_eq!(hexes[0].coord(), HexCoord::new(-6, 0));
        assert_eq!(hexes[6].coord(), HexCoord::new(-6, 6));
        assert_eq!(hexes[7].coord(), HexCoord::new(-5, -1));
        assert_eq!(hexes[126].coord(), HexCoord::new(6, 0));

        for (i, hex) in hexes.iter().enumerate() {
            assert_eq!(hex.index(), i);
        }
        for pair in hexes.windows(2) {
            let (a, b) = (pair[0].coord(), pair[1].coord());
            assert!((a.q, a.r) < (b.q, b.r));
        }
    }

    #[test]
    fn test_lookup_and_require() {
        let board = Board::new(BOARD_RADIUS);
        let hex = board.get(HexCoord::new(2, -3)).unwrap();
        assert_eq!(board.hex(hex.index()).unwrap().coord(), HexCoord::new(2, -3));

        assert!(board.get(HexCoord::new(4, 4)).is_none());
        assert_eq!(
            board.require(HexCoord::new(4, 4)),
            Err(BoardError::CoordinateOutOfRange { q: 4, r: 4 })
        );
    }

    #[test]
    fn test_mutation_off_board_is_rejected() {
        let mut board = Board::new(2);
        let before = board.to_json_friendly();
        assert!(board.set_hex_type(HexCoord::new(3, 0), HexType::Wall).is_err());
        assert!(board.set_occupied(HexCoord::new(0, 3), Occupied::Ball).is_err());
        assert_eq!(board.to_json_friendly(), before);
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("goal".parse::<HexType>().unwrap(), HexType::Goal);
        assert_eq!("blue".parse::<Occupied>().unwrap(), Occupied::Blue);
        assert!(matches!(
            "lava".parse::<HexType>(),
            Err(BoardError::InvalidEnumValue { .. })
        ));
        assert!("green".parse::<Occupied>().is_err());
        for t in [HexType::PlayArea, HexType::Goal, HexType::Wall] {
            assert_eq!(t.to_string().parse::<HexType>().unwrap(), t);
        }
    }

    #[test]
    fn test_standard_walls_and_goals() {
        let board = Board::standard().unwrap();
        let walls = board
            .hexes()
            .iter()
            .filter(|h| h.hex_type() == HexType::Wall)
            .count();
        let goals: Vec<_> = board
            .hexes()
            .iter()
            .filter(|h| h.hex_type() == HexType::Goal)
            .collect();

        assert_eq!(walls, 22);
        assert_eq!(goals.len(), 14);
        assert!(goals.iter().all(|h| h.coord().r.abs() == BOARD_RADIUS));

        assert_eq!(board.get(HexCoord::new(-6, 0)).unwrap().hex_type(), HexType::Wall);
        assert_eq!(board.get(HexCoord::new(1, 5)).unwrap().hex_type(), HexType::Wall);
        assert_eq!(board.get(HexCoord::new(6, -6)).unwrap().hex_type(), HexType::Goal);
    }

    #[test]
    fn test_standard_pieces() {
        let board = Board::standard().unwrap();
        assert_eq!(board.checker_count(0), 13);
        assert_eq!(board.checker_count(1), 13);

        let balls: Vec<_> = board
            .hexes()
            .iter()
            .filter(|h| h.occupied() == Occupied::Ball)
            .collect();
        assert_eq!(balls.len(), 1);
        assert_eq!(balls[0].coord(), HexCoord::new(0, 0));

        // Blue is Red rotated half a turn around the center
        for hex in board.hexes().iter().filter(|h| h.occupied() == Occupied::Red) {
            let c = hex.coord();
            let mirror = board.get(HexCoord::new(-c.q, -c.r)).unwrap();
            assert_eq!(mirror.occupied(), Occupied::Blue);
        }
    }

    #[test]
    fn test_checkers_stay_in_play_area() {
        let board = Board::standard().unwrap();
        for hex in board.hexes() {
            if !hex.occupied().is_empty() {
                assert_eq!(hex.hex_type(), HexType::PlayArea);
            }
        }
    }

    #[test]
    fn test_json_friendly_covers_every_hex() {
        let board = Board::standard().unwrap();
        let json = board.to_json_friendly();
        assert_eq!(json.len(), board.len());
        assert_eq!(json[3].index, 3);
        assert_eq!(json[3].s, -json[3].q - json[3].r);
    }
}
