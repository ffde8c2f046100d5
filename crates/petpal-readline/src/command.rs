//! Parsing of REPL input lines.
//!
//! A line starting with `/` is a command; `quit` and `exit` end the
//! session; anything else is a message for the selected pet.

use std::str::FromStr;

use petpal_core::error::{PetPalError, Result};
use petpal_core::pet::{PetKind, PetTrait};

/// Slash commands offered for completion, with their argument synopsis.
pub const COMMANDS: &[(&str, &str)] = &[
    ("/pets", "list your pets"),
    ("/new", "<name> <kind> [breed=\"..\"] [traits=a,b]"),
    ("/select", "<id>"),
    ("/edit", "<id> [name=..] [kind=..] [breed=..] [traits=..]"),
    ("/delete", "<id>"),
    ("/history", "show the current conversation"),
    ("/breeds", "<kind>"),
    ("/traits", "list personality traits"),
    ("/help", "show this help"),
];

/// Field changes requested by `/edit`. `None` leaves a field alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetEdit {
    pub name: Option<String>,
    pub kind: Option<PetKind>,
    /// `Some(None)` clears the breed
    pub breed: Option<Option<String>>,
    pub traits: Option<Vec<PetTrait>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Pets,
    New {
        name: String,
        kind: PetKind,
        breed: Option<String>,
        traits: Vec<PetTrait>,
    },
    Select(String),
    Edit {
        id: String,
        edit: PetEdit,
    },
    Delete(String),
    History,
    Breeds(PetKind),
    Traits,
    Help,
    Quit,
    Say(String),
}

/// Parses one input line. Blank lines yield `Ok(None)`.
///
/// # Errors
///
/// Returns `Validation` for unknown commands, missing arguments, unknown
/// kinds or traits, and unterminated quotes.
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if trimmed == "quit" || trimmed == "exit" {
        return Ok(Some(Command::Quit));
    }
    if !trimmed.starts_with('/') {
        return Ok(Some(Command::Say(trimmed.to_string())));
    }

    let tokens = tokenize(trimmed)?;
    let (head, args) = match tokens.split_first() {
        Some((head, args)) => (head.as_str(), args),
        None => return Ok(None),
    };

    let command = match head {
        "/pets" => Command::Pets,
        "/history" => Command::History,
        "/traits" => Command::Traits,
        "/help" => Command::Help,
        "/select" => Command::Select(single_arg(head, args, "<id>")?),
        "/delete" => Command::Delete(single_arg(head, args, "<id>")?),
        "/breeds" => Command::Breeds(PetKind::from_str(&single_arg(head, args, "<kind>")?)?),
        "/new" => parse_new(args)?,
        "/edit" => parse_edit(args)?,
        other => {
            return Err(PetPalError::validation(format!(
                "unknown command '{}', try /help",
                other
            )));
        }
    };
    Ok(Some(command))
}

fn parse_new(args: &[String]) -> Result<Command> {
    let (name, kind, options) = match args {
        [name, kind, options @ ..] => (name, kind, options),
        _ => return Err(usage("/new")),
    };

    let mut breed = None;
    let mut traits = Vec::new();
    for option in options {
        let (key, value) = key_value(option)?;
        match key {
            "breed" => breed = non_blank(value),
            "traits" => traits = parse_traits(value)?,
            _ => return Err(unknown_option("/new", key)),
        }
    }

    Ok(Command::New {
        name: name.clone(),
        kind: PetKind::from_str(kind)?,
        breed,
        traits,
    })
}

fn parse_edit(args: &[String]) -> Result<Command> {
    let (id, options) = args.split_first().ok_or_else(|| usage("/edit"))?;

    let mut edit = PetEdit::default();
    for option in options {
        let (key, value) = key_value(option)?;
        match key {
            "name" => edit.name = Some(value.to_string()),
            "kind" | "type" => edit.kind = Some(PetKind::from_str(value)?),
            "breed" => edit.breed = Some(non_blank(value)),
            "traits" => edit.traits = Some(parse_traits(value)?),
            _ => return Err(unknown_option("/edit", key)),
        }
    }

    Ok(Command::Edit {
        id: id.clone(),
        edit,
    })
}

/// Parses a comma separated trait list; an empty value is an empty list.
pub fn parse_traits(value: &str) -> Result<Vec<PetTrait>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| {
            PetTrait::from_str(name)
                .map_err(|_| PetPalError::validation(format!("unknown trait '{}'", name)))
        })
        .collect()
}

/// Splits a line on whitespace, keeping double-quoted runs together.
///
/// Quotes may appear inside a token (`breed="Golden Retriever"`) and are
/// removed from the result.
pub fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                in_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_quotes {
        return Err(PetPalError::validation("unterminated quote"));
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

fn key_value(option: &str) -> Result<(&str, &str)> {
    option
        .split_once('=')
        .map(|(key, value)| (key.trim(), value.trim()))
        .ok_or_else(|| PetPalError::validation(format!("expected key=value, got '{}'", option)))
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn single_arg(command: &str, args: &[String], synopsis: &str) -> Result<String> {
    match args {
        [only] => Ok(only.clone()),
        _ => Err(PetPalError::validation(format!(
            "usage: {} {}",
            command, synopsis
        ))),
    }
}

fn usage(command: &str) -> PetPalError {
    let synopsis = COMMANDS
        .iter()
        .find(|(name, _)| *name == command)
        .map(|(_, synopsis)| *synopsis)
        .unwrap_or_default();
    PetPalError::validation(format!("usage: {} {}", command, synopsis))
}

fn unknown_option(command: &str, key: &str) -> PetPalError {
    PetPalError::validation(format!("{} does not take '{}'", command, key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_a_message() {
        assert_eq!(
            parse_line("  Do you want to play ball? ").unwrap(),
            Some(Command::Say("Do you want to play ball?".to_string()))
        );
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("exit").unwrap(), Some(Command::Quit));
    }

    #[test]
    fn test_tokenize_keeps_quoted_runs() {
        assert_eq!(
            tokenize(r#"/new "Mr Wiggles" dog breed="Golden Retriever""#).unwrap(),
            vec!["/new", "Mr Wiggles", "dog", "breed=Golden Retriever"]
        );
        assert_eq!(tokenize(r#"/edit x name="""#).unwrap(), vec!["/edit", "x", "name="]);
        assert!(tokenize(r#"/new "Rex dog"#).is_err());
    }

    #[test]
    fn test_parse_new() {
        let line = r#"/new Buddy Dog breed="labrador retriever" traits=playful,Loyal"#;
        let command = parse_line(line).unwrap().unwrap();
        assert_eq!(
            command,
            Command::New {
                name: "Buddy".to_string(),
                kind: PetKind::Dog,
                breed: Some("labrador retriever".to_string()),
                traits: vec![PetTrait::Playful, PetTrait::Loyal],
            }
        );
    }

    #[test]
    fn test_parse_new_rejects_bad_input() {
        assert!(parse_line("/new Buddy").unwrap_err().is_validation());
        assert!(parse_line("/new Buddy dragon").unwrap_err().is_validation());
        assert!(parse_line("/new Buddy other").unwrap_err().is_validation());
        assert!(parse_line("/new Buddy dog traits=grumpy").is_err());
        assert!(parse_line("/new Buddy dog color=brown").is_err());
        assert!(parse_line("/summon Buddy").is_err());
    }

    #[test]
    fn test_parse_edit() {
        let command = parse_line("/edit rex_dog name=Max breed= traits=")
            .unwrap()
            .unwrap();
        assert_eq!(
            command,
            Command::Edit {
                id: "rex_dog".to_string(),
                edit: PetEdit {
                    name: Some("Max".to_string()),
                    kind: None,
                    breed: Some(None),
                    traits: Some(Vec::new()),
                },
            }
        );
    }

    #[test]
    fn test_single_argument_commands() {
        assert_eq!(
            parse_line("/select whiskers_cat").unwrap(),
            Some(Command::Select("whiskers_cat".to_string()))
        );
        assert_eq!(
            parse_line("/breeds rabbit").unwrap(),
            Some(Command::Breeds(PetKind::Rabbit))
        );
        assert!(parse_line("/delete").is_err());
        assert!(parse_line("/select a b").is_err());
    }
}
