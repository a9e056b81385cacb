//! Jokerball - a two-player hex-grid dice and ball game engine
//!
//! This crate provides the rules engine for Jokerball, including:
//! - Hex coordinate system and compass directions
//! - The hexagonal board with walls, goals, checkers and the ball
//! - Move legality for checkers and the ball
//! - The turn state machine (roll, select checker, move checker, move ball)
//!
//! # Architecture
//!
//! The engine has no rendering of its own. A view reads a [`GameSnapshot`],
//! highlights the selectable hexes, and forwards the player's picks back as
//! [`GameAction`]s. It can be compiled to:
//! - Native Rust for a terminal or desktop front end
//! - WebAssembly for a browser front end (`wasm` feature)
//!
//! # Modules
//!
//! - [`hex`]: Axial coordinates and directions
//! - [`board`]: Terrain, occupancy and the standard layout
//! - [`moves`]: Checker and ball destination search
//! - [`game`]: Turn state machine
//! - [`observer`]: Render callback wrapper

pub mod actions;
pub mod board;
pub mod game;
pub mod hex;
pub mod moves;
pub mod observer;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use actions::{GameAction, GameEvent};
pub use board::{Board, BoardError, Hex, HexJson, HexType, Occupied, PlayerId, BOARD_RADIUS};
pub use game::{Dice, GameError, GameSnapshot, GameState, TurnState};
pub use hex::{Direction, HexCoord};
pub use observer::{ObservedGame, Observer};
