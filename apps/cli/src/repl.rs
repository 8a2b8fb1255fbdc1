//! Line commands for the interactive mode.

use shared::domain::{SortKey, StoryId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Free text replaces the search input.
    Input(String),
    Submit,
    Sort(SortKey),
    Dismiss(StoryId),
    List,
    Help,
    Quit,
}

pub const HELP: &str = "\
Type text to edit the search term, then:
  :submit          run the search (an empty line does the same)
  :sort KEY        order by none, title, author, comments or points
  :dismiss ID      hide one story
  :list            redraw the list
  :quit            exit";

pub fn parse_line(line: &str) -> Result<ReplCommand, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(ReplCommand::Submit);
    }

    let Some(rest) = line.trim().strip_prefix(':') else {
        return Ok(ReplCommand::Input(line.to_string()));
    };

    let mut parts = rest.splitn(2, char::is_whitespace);
    let verb = parts.next().unwrap_or_default();
    let arg = parts.next().map(str::trim).unwrap_or_default();

    match verb {
        "submit" | "s" => Ok(ReplCommand::Submit),
        "sort" => arg
            .parse::<SortKey>()
            .map(ReplCommand::Sort)
            .map_err(|err| err.to_string()),
        "dismiss" | "d" if !arg.is_empty() => Ok(ReplCommand::Dismiss(StoryId::from(arg))),
        "dismiss" | "d" => Err("usage: :dismiss ID".to_string()),
        "list" | "l" => Ok(ReplCommand::List),
        "help" | "h" | "?" => Ok(ReplCommand::Help),
        "quit" | "q" | "exit" => Ok(ReplCommand::Quit),
        other => Err(format!("unknown command ':{other}' (try :help)")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_input_and_blank_submits() {
        assert_eq!(
            parse_line("rust async\n").expect("input"),
            ReplCommand::Input("rust async".to_string())
        );
        assert_eq!(parse_line("   ").expect("blank"), ReplCommand::Submit);
    }

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(
            parse_line(":sort comments").expect("sort"),
            ReplCommand::Sort(SortKey::CommentCount)
        );
        assert_eq!(
            parse_line(":dismiss 8863").expect("dismiss"),
            ReplCommand::Dismiss(StoryId::from("8863"))
        );
        assert_eq!(parse_line(":q").expect("quit"), ReplCommand::Quit);
    }

    #[test]
    fn rejects_bad_commands() {
        assert!(parse_line(":sort rank").is_err());
        assert!(parse_line(":dismiss").is_err());
        assert!(parse_line(":frobnicate").is_err());
    }
}
