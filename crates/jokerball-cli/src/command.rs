//! Typed terminal input.

use jokerball_core::GameAction;

pub const HELP: &str = "\
Commands:
  ok               roll, or pass when nothing can move
  select <index>   pick a highlighted hex (a bare index works too)
  undo             put back the picked checker
  json             print the current snapshot as JSON
  help             show this message
  quit             leave the game";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Action(GameAction),
    Json,
    Help,
    Quit,
}

/// Parse one line of input. Returns `None` for anything unrecognized.
pub fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let first = words.next()?.to_ascii_lowercase();

    let command = match first.as_str() {
        "ok" | "o" | "roll" => Command::Action(GameAction::PressOk),
        "select" | "s" => {
            let index = words.next()?.parse().ok()?;
            Command::Action(GameAction::SelectSpace(index))
        }
        "undo" | "u" => Command::Action(GameAction::UnselectChecker),
        "json" => Command::Json,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => Command::Action(GameAction::SelectSpace(other.parse().ok()?)),
    };

    if words.next().is_some() {
        return None;
    }
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions() {
        assert_eq!(parse_command("ok"), Some(Command::Action(GameAction::PressOk)));
        assert_eq!(
            parse_command("  select 17 "),
            Some(Command::Action(GameAction::SelectSpace(17)))
        );
        assert_eq!(parse_command("42"), Some(Command::Action(GameAction::SelectSpace(42))));
        assert_eq!(parse_command("UNDO"), Some(Command::Action(GameAction::UnselectChecker)));
    }

    #[test]
    fn test_meta_commands() {
        assert_eq!(parse_command("json"), Some(Command::Json));
        assert_eq!(parse_command("?"), Some(Command::Help));
        assert_eq!(parse_command("q"), Some(Command::Quit));
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("select"), None);
        assert_eq!(parse_command("select x"), None);
        assert_eq!(parse_command("select 1 2"), None);
        assert_eq!(parse_command("-3"), None);
        assert_eq!(parse_command("dance"), None);
    }
}
