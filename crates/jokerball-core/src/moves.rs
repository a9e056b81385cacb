//! Move legality: where a checker or the ball may go.
//!
//! Both searches are pure functions of the board snapshot and the dice. They
//! return hex indices, the same handles the turn state machine publishes as
//! its selectable set.

use crate::board::{Board, Hex, HexType, Occupied, PlayerId};
use crate::hex::{Direction, HexCoord};

/// All hexes the checker at `origin` may move to with a checker die of `checker_die`.
///
/// Each of the six directions contributes at most one destination. Forward
/// directions (toward the goal the player attacks) may stop short of an
/// obstacle or enter the goal. Other directions only produce a destination
/// by landing on an opponent's checker within range.
pub fn checker_destinations(
    board: &Board,
    origin: usize,
    player: PlayerId,
    checker_die: u8,
) -> Vec<usize> {
    let Some(start) = board.hex(origin) else {
        return Vec::new();
    };
    let forward = Direction::forward_for(player);

    let mut destinations = Vec::new();
    for direction in Direction::ALL {
        let is_forward = forward.contains(&direction);
        if let Some(dest) = walk_checker(board, start, player, direction, is_forward, checker_die) {
            if dest != origin && !destinations.contains(&dest) {
                destinations.push(dest);
            }
        }
    }
    destinations
}

/// Walk up to `distance` steps in one direction and report where the checker may stop
fn walk_checker(
    board: &Board,
    start: &Hex,
    player: PlayerId,
    direction: Direction,
    forward: bool,
    distance: u8,
) -> Option<usize> {
    let own = Occupied::for_player(player);
    let mut prior = start;
    let mut accum = start;

    for _ in 0..distance {
        accum = board.get(prior.coord().neighbor(direction))?;
        let occupant = accum.occupied();

        // Landing on an opponent is always allowed
        if occupant.owner().is_some() && occupant != own {
            return Some(accum.index());
        }

        if forward {
            match accum.hex_type() {
                HexType::Goal => return Some(accum.index()),
                HexType::Wall => return Some(prior.index()),
                HexType::PlayArea => {}
            }
            if !occupant.is_empty() {
                return Some(prior.index());
            }
        } else if !occupant.is_empty() || accum.hex_type() != HexType::PlayArea {
            return None;
        }

        prior = accum;
    }

    // Sideways and backward moves must end on an opponent
    forward.then(|| accum.index())
}

/// All hexes the ball may be dropped on when pushed from `ball` toward `direction`.
///
/// The ball travels in a straight line over empty play area. It may stop on
/// any empty hex along the way, or on the first goal hex it reaches. Walls,
/// occupied hexes and the board edge stop it without becoming destinations.
pub fn ball_destinations(board: &Board, ball: HexCoord, direction: Direction) -> Vec<usize> {
    let mut destinations = Vec::new();
    let mut current = ball;

    while let Some(next) = board.get(current.neighbor(direction)) {
        match next.hex_type() {
            HexType::Goal => {
                destinations.push(next.index());
                break;
            }
            HexType::Wall => break,
            HexType::PlayArea if !next.occupied().is_empty() => break,
            HexType::PlayArea => {
                destinations.push(next.index());
                current = next.coord();
            }
        }
    }
    destinations
}

/// Checkers of `player` that have at least one legal destination
pub fn movable_checkers(board: &Board, player: PlayerId, checker_die: u8) -> Vec<usize> {
    let color = Occupied::for_player(player);
    board
        .hexes()
        .iter()
        .filter(|hex| hex.occupied() == color)
        .filter(|hex| !checker_destinations(board, hex.index(), player, checker_die).is_empty())
        .map(|hex| hex.index())
        .collect()
}
