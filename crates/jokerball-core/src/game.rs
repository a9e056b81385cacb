//! Core game state machine.
//!
//! This module contains the main `GameState` struct and the turn cycle:
//! roll, select a checker, move it, push the ball, then pass the turn.

use crate::actions::{GameAction, GameEvent};
use crate::board::{Board, BoardError, Hex, HexJson, HexType, Occupied, PlayerId};
use crate::hex::{Direction, HexCoord};
use crate::moves;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Where the current turn stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    /// Waiting for the player to roll
    Roll,
    /// Pick one of the highlighted checkers
    SelectChecker,
    /// Pick a destination for the chosen checker
    MoveChecker {
        /// Index of the checker being moved
        checker: usize,
    },
    /// Pick where the ball stops
    MoveBall,
    /// The ball reached a goal
    End { winner: PlayerId },
}

/// Errors that can occur when applying actions
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// One roll of both dice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dice {
    /// How far a checker may move
    pub checker: u8,
    /// Which way the ball is pushed (1 = East ... 6 = SouthEast)
    pub ball: u8,
}

impl Dice {
    pub fn roll<R: Rng>(rng: &mut R) -> Self {
        Self {
            checker: rng.gen_range(1..=6),
            ball: rng.gen_range(1..=6),
        }
    }

    pub fn ball_direction(&self) -> Result<Direction, BoardError> {
        Direction::from_die(self.ball)
    }
}

/// The complete game state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// The game board
    board: Board,
    /// Where the ball is
    ball: HexCoord,
    /// Player whose turn it is
    current_player: PlayerId,
    /// Dice for the current turn, `None` before the first roll
    dice: Option<Dice>,
    /// Turn state
    state: TurnState,
    /// Hex indices the player may pick next
    selectable: Vec<usize>,
    /// Turn number (starts at 1)
    turn_number: u32,
    /// Random number generator seed (for deterministic replays)
    rng_seed: u64,
    #[serde(skip)]
    rng: StdRng,
}

impl GameState {
    /// Create a new game with a random seed
    pub fn new() -> Result<Self, GameError> {
        let seed = rand::thread_rng().gen();
        Self::with_seed(seed)
    }

    /// Create a new game whose dice are determined by `seed`
    pub fn with_seed(seed: u64) -> Result<Self, GameError> {
        let board = Board::standard()?;

        Ok(Self {
            board,
            ball: HexCoord::new(0, 0),
            current_player: 0,
            dice: None,
            state: TurnState::Roll,
            selectable: Vec::new(),
            turn_number: 1,
            rng_seed: seed,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn ball(&self) -> HexCoord {
        self.ball
    }

    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    pub fn dice(&self) -> Option<Dice> {
        self.dice
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Hex indices the player may pick next
    pub fn selectable(&self) -> &[usize] {
        &self.selectable
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    pub fn seed(&self) -> u64 {
        self.rng_seed
    }

    /// Index of the checker being moved, if one is picked
    pub fn selected_checker(&self) -> Option<usize> {
        match self.state {
            TurnState::MoveChecker { checker } => Some(checker),
            _ => None,
        }
    }

    /// Check if the game is finished
    pub fn is_finished(&self) -> bool {
        matches!(self.state, TurnState::End { .. })
    }

    /// Get the winner if the game is finished
    pub fn winner(&self) -> Option<PlayerId> {
        match self.state {
            TurnState::End { winner } => Some(winner),
            _ => None,
        }
    }

    /// Get all currently valid actions
    pub fn valid_actions(&self) -> Vec<GameAction> {
        let mut actions = Vec::new();

        match self.state {
            TurnState::Roll => actions.push(GameAction::PressOk),
            TurnState::SelectChecker | TurnState::MoveBall => {
                if self.selectable.is_empty() {
                    actions.push(GameAction::PressOk);
                }
            }
            TurnState::MoveChecker { .. } => actions.push(GameAction::UnselectChecker),
            TurnState::End { .. } => return actions,
        }

        actions.extend(self.selectable.iter().map(|&idx| GameAction::SelectSpace(idx)));
        actions
    }

    /// Apply an action to the game state
    pub fn apply_action(&mut self, action: GameAction) -> Result<Vec<GameEvent>, GameError> {
        match action {
            GameAction::PressOk => self.press_ok(),
            GameAction::SelectSpace(index) => self.select_space(index),
            GameAction::UnselectChecker => self.unselect_checker(),
        }
    }

    /// Confirm button: roll the dice, or pass a phase in which nothing can move
    pub fn press_ok(&mut self) -> Result<Vec<GameEvent>, GameError> {
        let player = self.current_player;
        let mut events = Vec::new();

        match self.state {
            TurnState::Roll => {
                let dice = Dice::roll(&mut self.rng);
                debug!(player, checker_die = dice.checker, ball_die = dice.ball, "dice rolled");

                self.dice = Some(dice);
                self.state = TurnState::SelectChecker;
                self.selectable = moves::movable_checkers(&self.board, player, dice.checker);

                events.push(GameEvent::DiceRolled {
                    player,
                    checker_die: dice.checker,
                    ball_die: dice.ball,
                });
            }

            TurnState::SelectChecker => {
                if !self.selectable.is_empty() {
                    return Err(GameError::InvalidOperation(
                        "cannot skip the checker move while a checker can move".to_string(),
                    ));
                }

                let destinations = self.ball_destinations()?;
                debug!(player, "no checker can move");

                self.state = TurnState::MoveBall;
                self.selectable = destinations;
                events.push(GameEvent::CheckerMoveSkipped { player });
            }

            TurnState::MoveChecker { .. } => {
                return Err(GameError::InvalidOperation(
                    "a destination must be selected for the picked checker".to_string(),
                ));
            }

            TurnState::MoveBall => {
                if !self.selectable.is_empty() {
                    return Err(GameError::InvalidOperation(
                        "cannot skip the ball move while the ball can move".to_string(),
                    ));
                }

                debug!(player, "ball cannot move");
                events.push(GameEvent::BallMoveSkipped { player });
                self.end_turn(&mut events);
            }

            TurnState::End { .. } => {
                debug!("game is over, nothing to confirm");
            }
        }

        Ok(events)
    }

    /// Pick one of the selectable hexes
    pub fn select_space(&mut self, index: usize) -> Result<Vec<GameEvent>, GameError> {
        if !self.selectable.contains(&index) {
            return Err(GameError::InvalidOperation(format!(
                "hex {} is not selectable",
                index
            )));
        }

        let player = self.current_player;
        let mut events = Vec::new();

        match self.state {
            TurnState::SelectChecker => {
                let dice = self.rolled()?;
                let at = self.hex(index)?.coord();
                debug!(player, q = at.q, r = at.r, "checker selected");

                self.selectable =
                    moves::checker_destinations(&self.board, index, player, dice.checker);
                self.state = TurnState::MoveChecker { checker: index };
                events.push(GameEvent::CheckerSelected { player, at });
            }

            TurnState::MoveChecker { checker } => {
                let direction = self.rolled()?.ball_direction()?;
                self.move_checker(checker, index, &mut events)?;

                self.state = TurnState::MoveBall;
                self.selectable = moves::ball_destinations(&self.board, self.ball, direction);
            }

            TurnState::MoveBall => {
                let entered_goal = self.move_ball(index, &mut events)?;
                self.selectable.clear();

                if entered_goal {
                    let winner = goal_attacker(self.ball);
                    info!(winner, turn = self.turn_number, "ball reached a goal, game over");
                    self.state = TurnState::End { winner };
                    events.push(GameEvent::GameWon {
                        winner,
                        goal: self.ball,
                    });
                } else {
                    self.end_turn(&mut events);
                }
            }

            TurnState::Roll | TurnState::End { .. } => {
                return Err(GameError::InvalidOperation(
                    "nothing can be selected right now".to_string(),
                ));
            }
        }

        Ok(events)
    }

    /// Put back the checker picked this turn. Does nothing outside of `MoveChecker`.
    pub fn unselect_checker(&mut self) -> Result<Vec<GameEvent>, GameError> {
        let mut events = Vec::new();

        if let TurnState::MoveChecker { checker } = self.state {
            let player = self.current_player;
            let dice = self.rolled()?;
            let at = self.hex(checker)?.coord();
            debug!(player, q = at.q, r = at.r, "checker unselected");

            self.state = TurnState::SelectChecker;
            self.selectable = moves::movable_checkers(&self.board, player, dice.checker);
            events.push(GameEvent::CheckerUnselected { player, at });
        }

        Ok(events)
    }

    /// Current read surface for a view
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            current_player: self.current_player,
            state: self.state,
            dice: self.dice,
            selectable: self.selectable.clone(),
            ball: self.ball,
            turn_number: self.turn_number,
            seed: self.rng_seed,
            hexes: self.board.to_json_friendly(),
        }
    }

    fn rolled(&self) -> Result<Dice, GameError> {
        self.dice
            .ok_or_else(|| GameError::InvalidOperation("dice have not been rolled".to_string()))
    }

    fn hex(&self, index: usize) -> Result<&Hex, GameError> {
        self.board
            .hex(index)
            .ok_or_else(|| GameError::InvalidOperation(format!("no hex with index {}", index)))
    }

    fn ball_destinations(&self) -> Result<Vec<usize>, GameError> {
        let direction = self.rolled()?.ball_direction()?;
        Ok(moves::ball_destinations(&self.board, self.ball, direction))
    }

    /// Move the picked checker. A checker entering a goal leaves the board.
    fn move_checker(
        &mut self,
        from: usize,
        to: usize,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), GameError> {
        let player = self.current_player;
        let (from_coord, mover) = {
            let hex = self.hex(from)?;
            (hex.coord(), hex.occupied())
        };
        let (to_coord, to_type, displaced) = {
            let hex = self.hex(to)?;
            (hex.coord(), hex.hex_type(), hex.occupied())
        };

        if let Some(owner) = displaced.owner().filter(|&owner| owner != player) {
            debug!(owner, q = to_coord.q, r = to_coord.r, "checker captured");
            events.push(GameEvent::CheckerCaptured { owner, at: to_coord });
        }

        if to_type == HexType::Goal {
            debug!(player, q = to_coord.q, r = to_coord.r, "checker left through goal");
            events.push(GameEvent::CheckerExited {
                player,
                from: from_coord,
                goal: to_coord,
            });
        } else {
            if let Some(hex) = self.board.hex_mut(to) {
                hex.set_occupied(mover);
            }
            debug!(player, from = ?from_coord, to = ?to_coord, "checker moved");
            events.push(GameEvent::CheckerMoved {
                player,
                from: from_coord,
                to: to_coord,
            });
        }

        if let Some(hex) = self.board.hex_mut(from) {
            hex.set_occupied(Occupied::Empty);
        }
        Ok(())
    }

    /// Move the ball, returning whether it entered a goal
    fn move_ball(&mut self, to: usize, events: &mut Vec<GameEvent>) -> Result<bool, GameError> {
        let from = self.ball;
        self.board.require(from)?;
        let (to_coord, to_type) = {
            let hex = self.hex(to)?;
            (hex.coord(), hex.hex_type())
        };

        self.board.set_occupied(from, Occupied::Empty)?;
        self.board.set_occupied(to_coord, Occupied::Ball)?;
        self.ball = to_coord;

        debug!(player = self.current_player, from = ?from, to = ?to_coord, "ball moved");
        events.push(GameEvent::BallMoved {
            player: self.current_player,
            from,
            to: to_coord,
        });
        Ok(to_type == HexType::Goal)
    }

    fn end_turn(&mut self, events: &mut Vec<GameEvent>) {
        let player = self.current_player;
        let next_player = 1 - player;

        self.current_player = next_player;
        self.state = TurnState::Roll;
        self.selectable.clear();
        self.turn_number += 1;

        debug!(player, next_player, turn = self.turn_number, "turn ended");
        events.push(GameEvent::TurnEnded {
            player,
            next_player,
        });
    }
}

/// The player whose checkers advance toward `goal`
fn goal_attacker(goal: HexCoord) -> PlayerId {
    if goal.r < 0 {
        0
    } else {
        1
    }
}

/// Everything a view needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub current_player: PlayerId,
    pub state: TurnState,
    pub dice: Option<Dice>,
    pub selectable: Vec<usize>,
    pub ball: HexCoord,
    pub turn_number: u32,
    pub seed: u64,
    /// Every hex in index order
    pub hexes: Vec<HexJson>,
}
