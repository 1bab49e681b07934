//! Line command parser for the interactive board.

use std::error::Error;
use std::fmt::{Display, Formatter};
use taskdeck_core::{ParseFilterError, TaskAction, TaskForm, TaskId, UiEvent, ViewFilter};

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Ui(UiEvent),
    Sorted,
    Search(String),
    Export,
    Help,
    Quit,
}

/// Input line that could not be turned into a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Unknown(String),
    MissingArgument(&'static str),
    InvalidId(String),
    InvalidFilter(ParseFilterError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(word) => write!(f, "unknown command `{word}`; type `help`"),
            Self::MissingArgument(what) => write!(f, "missing {what}"),
            Self::InvalidId(value) => write!(f, "invalid task id `{value}`"),
            Self::InvalidFilter(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidFilter(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseFilterError> for CommandError {
    fn from(value: ParseFilterError) -> Self {
        Self::InvalidFilter(value)
    }
}

pub const HELP: &str = "\
commands:
  add <title> [--priority low|medium|high] [--category <name>]
  toggle <id>           flip completion
  delete <id>           remove a task
  filter <name>         all | completed | pending | high-priority
  clear                 remove completed tasks
  sorted                list tasks by priority
  search <text>         find tasks by title
  export                print all tasks as JSON
  help | quit";

/// Parses one line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(word, rest)| (word, rest.trim()));

    let command = match word.to_ascii_lowercase().as_str() {
        "" => return Ok(None),
        "add" => Command::Ui(UiEvent::Submit(parse_form(rest))),
        "toggle" => task_event(rest, TaskAction::Toggle)?,
        "delete" | "rm" => task_event(rest, TaskAction::Delete)?,
        "filter" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument("filter name"));
            }
            Command::Ui(UiEvent::SelectFilter(rest.parse::<ViewFilter>()?))
        }
        "clear" => Command::Ui(UiEvent::ClearCompleted),
        "sorted" => Command::Sorted,
        "search" => Command::Search(rest.to_string()),
        "export" => Command::Export,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn task_event(rest: &str, action: TaskAction) -> Result<Command, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingArgument("task id"));
    }
    let id = rest
        .parse::<TaskId>()
        .map_err(|_| CommandError::InvalidId(rest.to_string()))?;
    Ok(Command::Ui(UiEvent::Task { id, action }))
}

/// Splits `add` arguments into form fields. Words that are not flags form the title.
///
/// Title validation is left to the board, which ignores blank titles.
fn parse_form(rest: &str) -> TaskForm {
    let mut form = TaskForm::default();
    let mut title = Vec::new();
    let mut words = rest.split_whitespace();
    while let Some(word) = words.next() {
        match word {
            "--priority" | "-p" => form.priority = words.next().unwrap_or_default().to_string(),
            "--category" | "-c" => form.category = words.next().unwrap_or_default().to_string(),
            other => title.push(other),
        }
    }
    form.title = title.join(" ");
    form
}

#[cfg(test)]
mod tests {
    use super::{parse, Command, CommandError};
    use taskdeck_core::{TaskAction, TaskForm, UiEvent, ViewFilter};

    #[test]
    fn add_collects_title_and_flags() {
        let command = parse("add Ship the feature --priority high -c work")
            .unwrap()
            .unwrap();
        assert_eq!(
            command,
            Command::Ui(UiEvent::Submit(TaskForm {
                title: "Ship the feature".to_string(),
                priority: "high".to_string(),
                category: "work".to_string(),
            }))
        );
    }

    #[test]
    fn add_without_title_still_parses() {
        let command = parse("add --priority low").unwrap().unwrap();
        let Command::Ui(UiEvent::Submit(form)) = command else {
            panic!("expected submit");
        };
        assert!(form.title.is_empty());
    }

    #[test]
    fn row_actions_require_numeric_id() {
        assert_eq!(
            parse("toggle 3").unwrap(),
            Some(Command::Ui(UiEvent::Task {
                id: 3,
                action: TaskAction::Toggle
            }))
        );
        assert_eq!(
            parse("delete x1"),
            Err(CommandError::InvalidId("x1".to_string()))
        );
        assert_eq!(
            parse("toggle"),
            Err(CommandError::MissingArgument("task id"))
        );
    }

    #[test]
    fn filter_names_are_validated() {
        assert_eq!(
            parse("filter high-priority").unwrap(),
            Some(Command::Ui(UiEvent::SelectFilter(ViewFilter::HighPriority)))
        );
        let err = parse("filter archived").unwrap_err();
        assert!(matches!(err, CommandError::InvalidFilter(_)));
    }

    #[test]
    fn blank_and_unknown_lines() {
        assert_eq!(parse("   ").unwrap(), None);
        assert_eq!(
            parse("dance"),
            Err(CommandError::Unknown("dance".to_string()))
        );
        assert_eq!(parse("QUIT").unwrap(), Some(Command::Quit));
    }
}
