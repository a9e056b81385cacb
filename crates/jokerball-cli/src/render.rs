//! Text rendering of a game snapshot.

use jokerball_core::{Direction, GameSnapshot, HexJson, HexType, Occupied, PlayerId, TurnState};
use std::collections::BTreeMap;
use std::fmt::Write;

fn player_name(player: PlayerId) -> &'static str {
    if player == 0 {
        "Red"
    } else {
        "Blue"
    }
}

fn cell_glyph(hex: &HexJson) -> char {
    match (hex.occupied, hex.hex_type) {
        (Occupied::Red, _) => 'R',
        (Occupied::Blue, _) => 'B',
        (Occupied::Ball, _) => 'o',
        (Occupied::Empty, HexType::Wall) => '#',
        (Occupied::Empty, HexType::Goal) => '=',
        (Occupied::Empty, HexType::PlayArea) => '.',
    }
}

/// Draw the board rows (north at the top) followed by a status block
pub fn render(snapshot: &GameSnapshot) -> String {
    let mut rows: BTreeMap<i32, Vec<&HexJson>> = BTreeMap::new();
    for hex in &snapshot.hexes {
        rows.entry(hex.r).or_default().push(hex);
    }

    let mut out = String::new();
    for (r, mut hexes) in rows {
        hexes.sort_by_key(|h| h.q);
        out.push_str(&" ".repeat(2 * r.unsigned_abs() as usize));
        for hex in hexes {
            let glyph = cell_glyph(hex);
            if snapshot.selectable.contains(&hex.index) {
                let _ = write!(out, "[{}] ", glyph);
            } else {
                let _ = write!(out, " {}  ", glyph);
            }
        }
        out.truncate(out.trim_end().len());
        out.push('\n');
    }

    out.push_str(&status_line(snapshot));
    out
}

fn status_line(snapshot: &GameSnapshot) -> String {
    let mut out = String::new();
    let player = player_name(snapshot.current_player);

    let turn = snapshot.turn_number;
    let _ = match snapshot.state {
        TurnState::Roll => writeln!(out, "Turn {}: {} to roll", turn, player),
        TurnState::SelectChecker => writeln!(out, "Turn {}: {} picks a checker", turn, player),
        TurnState::MoveChecker { checker } => {
            writeln!(out, "Turn {}: {} moves checker {}", turn, player, checker)
        }
        TurnState::MoveBall => writeln!(out, "Turn {}: {} pushes the ball", turn, player),
        TurnState::End { winner } => writeln!(out, "Game over: {} wins", player_name(winner)),
    };

    if let Some(dice) = snapshot.dice {
        let arrow = Direction::from_die(dice.ball).map(|d| d.arrow()).unwrap_or('?');
        let _ = writeln!(out, "Dice: checker {}, ball {} {}", dice.checker, dice.ball, arrow);
    }

    if !snapshot.selectable.is_empty() {
        let picks: Vec<String> = snapshot
            .selectable
            .iter()
            .filter_map(|&idx| snapshot.hexes.get(idx))
            .map(|h| format!("{}({},{})", h.index, h.q, h.r))
            .collect();
        let _ = writeln!(out, "Selectable: {}", picks.join(" "));
    } else if !matches!(snapshot.state, TurnState::End { .. }) {
        let _ = writeln!(out, "Nothing to pick, type 'ok'");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use jokerball_core::{GameState, BOARD_RADIUS};

    #[test]
    fn test_board_rows() {
        let snapshot = GameState::with_seed(1).unwrap().snapshot();
        let text = render(&snapshot);
        let rows: Vec<&str> = text.lines().take((2 * BOARD_RADIUS + 1) as usize).collect();

        // North goal row: seven goal cells
        assert_eq!(rows[0].matches('=').count(), 7);
        // Center row: walls at both ends and the ball in the middle
        assert!(rows[6].trim_start().starts_with('#'));
        assert!(rows[6].ends_with('#'));
        assert_eq!(rows[6].matches('o').count(), 1);
        let board = rows.concat();
        assert_eq!(board.matches('R').count(), 13);
        assert_eq!(board.matches('B').count(), 13);
    }

    #[test]
    fn test_selectable_cells_are_bracketed() {
        let mut game = GameState::with_seed(1).unwrap();
        game.press_ok().unwrap();
        let snapshot = game.snapshot();
        let text = render(&snapshot);

        assert_eq!(text.matches("[R]").count(), snapshot.selectable.len());
        assert!(text.contains("Red picks a checker"));
        assert!(text.contains("Dice: checker"));
    }

    #[test]
    fn test_status_before_roll() {
        let snapshot = GameState::with_seed(1).unwrap().snapshot();
        let text = render(&snapshot);
        assert!(text.contains("Turn 1: Red to roll"));
        assert!(!text.contains("Dice"));
    }
}
