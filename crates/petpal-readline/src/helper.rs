//! Line-editing support for the PetPal prompt.

use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::command::COMMANDS;

/// Rustyline helper for the pet prompt.
///
/// Slash commands complete by prefix. While the command word is being
/// typed the hint finishes it; once it is complete (with or without the
/// trailing space) the hint shows its argument synopsis.
#[derive(Clone)]
pub struct CliHelper {
    commands: &'static [(&'static str, &'static str)],
}

impl CliHelper {
    pub fn new() -> Self {
        Self { commands: COMMANDS }
    }

    fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|(name, _)| *name)
    }

    /// Hint text for the input typed so far, if any.
    pub fn hint_for(&self, typed: &str) -> Option<String> {
        if !typed.starts_with('/') {
            return None;
        }

        let word = typed.trim_end();
        let has_space = word.len() != typed.len();
        if word.contains(' ') {
            return None;
        }

        if let Some((_, synopsis)) = self.commands.iter().find(|(name, _)| *name == word) {
            let lead = if has_space { "" } else { " " };
            return Some(format!("{}{}", lead, synopsis));
        }
        if has_space {
            return None;
        }
        self.names()
            .find(|name| name.starts_with(word))
            .map(|name| name[word.len()..].to_string())
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let typed = &line[..pos];
        if !typed.starts_with('/') || typed.contains(' ') {
            return Ok((0, Vec::new()));
        }

        let candidates = self
            .names()
            .filter(|name| name.starts_with(typed))
            .map(|name| Pair {
                display: name.to_string(),
                replacement: format!("{} ", name),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        // only hint at the end of the line
        if pos < line.len() {
            return None;
        }
        self.hint_for(line)
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        match line.split_once(' ') {
            Some((head, rest)) if head.starts_with('/') => {
                Owned(format!("{} {}", head.bright_cyan(), rest))
            }
            None if line.starts_with('/') => Owned(line.bright_cyan().to_string()),
            _ => Borrowed(line),
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.bright_black().to_string())
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Validator for CliHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_completes_partial_command() {
        let helper = CliHelper::new();
        assert_eq!(helper.hint_for("/sel").as_deref(), Some("ect"));
        assert_eq!(helper.hint_for("/zzz"), None);
        assert_eq!(helper.hint_for("hello"), None);
    }

    #[test]
    fn test_hint_shows_synopsis_for_full_command() {
        let helper = CliHelper::new();
        assert_eq!(helper.hint_for("/delete").as_deref(), Some(" <id>"));
        assert_eq!(helper.hint_for("/breeds ").as_deref(), Some("<kind>"));
        assert_eq!(helper.hint_for("/select rex_dog"), None);
    }
}
