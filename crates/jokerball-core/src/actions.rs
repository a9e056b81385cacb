//! Player inputs and the events they produce.
//!
//! A view forwards inputs as [`GameAction`]s and receives the resulting
//! [`GameEvent`]s from every successful transition.

use crate::board::PlayerId;
use crate::hex::HexCoord;
use serde::{Deserialize, Serialize};

/// All inputs a player can give
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// The confirm button: roll, or skip a phase with no legal move
    PressOk,
    /// Pick a highlighted hex by index
    SelectSpace(usize),
    /// Put back the checker picked this turn
    UnselectChecker,
}

/// Events that occur as a result of actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Both dice were rolled
    DiceRolled {
        player: PlayerId,
        checker_die: u8,
        ball_die: u8,
    },

    /// A checker was picked to move
    CheckerSelected { player: PlayerId, at: HexCoord },

    /// The picked checker was put back
    CheckerUnselected { player: PlayerId, at: HexCoord },

    /// A checker moved to another play-area hex
    CheckerMoved {
        player: PlayerId,
        from: HexCoord,
        to: HexCoord,
    },

    /// An opponent's checker was displaced by a landing checker
    CheckerCaptured { owner: PlayerId, at: HexCoord },

    /// A checker entered a goal and left the board
    CheckerExited {
        player: PlayerId,
        from: HexCoord,
        goal: HexCoord,
    },

    /// No checker could move this turn
    CheckerMoveSkipped { player: PlayerId },

    /// The ball was pushed
    BallMoved {
        player: PlayerId,
        from: HexCoord,
        to: HexCoord,
    },

    /// The ball had nowhere to go
    BallMoveSkipped { player: PlayerId },

    /// Turn passed to the other player
    TurnEnded {
        player: PlayerId,
        next_player: PlayerId,
    },

    /// The ball reached a goal
    GameWon { winner: PlayerId, goal: HexCoord },
}
