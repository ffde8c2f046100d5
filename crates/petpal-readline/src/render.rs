//! Terminal rendering of pets, messages and notifications.

use chrono::Local;
use colored::Colorize;
use once_cell::sync::Lazy;
use petpal_application::{Notification, NotificationLevel};
use petpal_core::message::Message;
use petpal_core::pet::Pet;
use regex::Regex;

static ACTION_SPAN: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"\*([^*]+)\*").ok());

/// A piece of message content: plain speech or an `*action*` span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Speech(&'a str),
    Action(&'a str),
}

/// Splits content into speech and action segments. Action text is returned
/// without its asterisks; an unpaired asterisk stays in the speech.
pub fn segments(content: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut last = 0;
    let captures = ACTION_SPAN
        .as_ref()
        .into_iter()
        .flat_map(|re| re.captures_iter(content));
    for caps in captures {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            out.push(Segment::Speech(&content[last..whole.start()]));
        }
        out.push(Segment::Action(inner.as_str()));
        last = whole.end();
    }
    if last < content.len() {
        out.push(Segment::Speech(&content[last..]));
    }
    out
}

/// Pet speech in blue with action spans in blue italics.
///
/// Every segment is coloured on its own: an outer colour does not survive
/// the reset that ends an italic span.
pub fn pet_speech(content: &str) -> String {
    segments(content)
        .into_iter()
        .map(|segment| match segment {
            Segment::Speech(text) => text.bright_blue().to_string(),
            Segment::Action(text) => text.bright_blue().italic().to_string(),
        })
        .collect()
}

/// One chat line, plus a sticker line when the message carries one.
pub fn message_lines(message: &Message, pet: Option<&Pet>) -> Vec<String> {
    let time = message.timestamp.with_timezone(&Local).format("%H:%M");
    let mut lines = Vec::new();

    if message.is_from_user() {
        lines.push(format!(
            "{} {} {}",
            time.to_string().bright_black(),
            "You:".green().bold(),
            message.content.green()
        ));
    } else {
        let speaker = match pet {
            Some(pet) => format!("{} {}:", pet.avatar, pet.name),
            None => format!("{}:", message.pet_id),
        };
        lines.push(format!(
            "{} {} {}",
            time.to_string().bright_black(),
            speaker.bright_magenta().bold(),
            pet_speech(&message.content)
        ));
    }

    if let Some(url) = &message.sticker_url {
        lines.push(format!("      {} {}", "sticker".bright_black(), url.cyan()));
    }
    lines
}

/// Roster line; the selected pet is marked with an arrow.
pub fn pet_line(pet: &Pet, selected: bool) -> String {
    let marker = if selected { "→" } else { " " };
    let line = format!(
        "{} {} {} ({}) [{}] {}",
        marker,
        pet.avatar,
        pet.name,
        pet.kind,
        pet.id,
        pet.summary()
    );
    if selected {
        line.bright_yellow().to_string()
    } else {
        line
    }
}

pub fn notification_line(notification: &Notification) -> String {
    let text = format!("{}: {}", notification.title, notification.description);
    match notification.level {
        NotificationLevel::Info => text.bright_green().to_string(),
        NotificationLevel::Warning => text.yellow().bold().to_string(),
    }
}
