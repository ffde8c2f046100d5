//! Command dispatch for the interactive session.

use anyhow::Result;
use colored::Colorize;
use petpal_application::{ChatUseCase, Notification, SelectOutcome, SendOutcome};
use petpal_core::message::Message;
use petpal_core::pet::{Pet, PetDraft, PetKind, PetTrait};
use strum::IntoEnumIterator;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::command::{COMMANDS, Command, PetEdit};
use crate::render;

/// Whether the REPL keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Repl {
    chat: ChatUseCase,
    notifications: UnboundedReceiver<Notification>,
}

impl Repl {
    pub fn new(chat: ChatUseCase, notifications: UnboundedReceiver<Notification>) -> Self {
        Self {
            chat,
            notifications,
        }
    }

    /// Name of the selected pet, for the prompt.
    pub async fn prompt(&self) -> String {
        match self.chat.snapshot().await.selected {
            Some(pet) => format!("{} {} > ", pet.avatar, pet.name),
            None => "> ".to_string(),
        }
    }

    pub async fn handle(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => print_help(),
            Command::Pets => self.list_pets().await,
            Command::History => self.show_history().await,
            Command::Traits => {
                let names: Vec<String> = PetTrait::iter().map(|t| t.to_string()).collect();
                println!("{}", names.join(", ").cyan());
            }
            Command::Breeds(kind) => print_breeds(kind),
            Command::New {
                name,
                kind,
                breed,
                traits,
            } => {
                let mut draft = PetDraft::new(name, kind).with_traits(traits);
                if let Some(breed) = breed {
                    draft = draft.with_breed(breed);
                }
                match self.chat.create_pet(draft).await {
                    Ok(Some(pet)) => {
                        println!(
                            "{}",
                            format!("Created {} {} [{}]", pet.avatar, pet.name, pet.id).green()
                        );
                        self.show_history().await;
                    }
                    Ok(None) => println!("{}", "A pet needs a name.".yellow()),
                    Err(e) => eprintln!("{}", e.to_string().red()),
                }
            }
            Command::Select(id) => match self.chat.select_pet(&id).await {
                SelectOutcome::Selected { .. } => self.show_history().await,
                SelectOutcome::UnknownPet => print_unknown(&id),
            },
            Command::Edit { id, edit } => {
                let current = {
                    let store = self.chat.store();
                    let store = store.read().await;
                    store.pet(&id).cloned()
                };
                match current {
                    Some(pet) => match self.chat.update_pet(apply_edit(pet, edit)).await {
                        Ok(Some(_)) => {}
                        Ok(None) => println!("{}", "A pet needs a name.".yellow()),
                        Err(e) => eprintln!("{}", e.to_string().red()),
                    },
                    None => print_unknown(&id),
                }
            }
            Command::Delete(id) => {
                if self.chat.delete_pet(&id).await.is_none() {
                    print_unknown(&id);
                }
            }
            Command::Say(text) => self.say(&text).await,
        }
        Ok(Flow::Continue)
    }

    /// Prints notifications raised since the last call.
    pub fn flush_notifications(&mut self) {
        while let Ok(notification) = self.notifications.try_recv() {
            println!("{}", render::notification_line(&notification));
        }
    }

    async fn say(&self, text: &str) {
        let Some(pet) = self.chat.snapshot().await.selected else {
            println!("{}", "Select a pet first with /select <id>.".yellow());
            return;
        };

        println!("{}", format!("{} is thinking...", pet.name).bright_black());
        match self.chat.send_message(text).await {
            SendOutcome::Replied { reply, .. } => print_message(&reply, Some(&pet)),
            SendOutcome::Discarded { .. } => println!(
                "{}",
                format!("{} was removed before replying.", pet.name).bright_black()
            ),
            SendOutcome::Ignored => {}
        }
    }

    async fn list_pets(&self) {
        let snapshot = self.chat.snapshot().await;
        if snapshot.pets.is_empty() {
            println!(
                "{}",
                "No pets yet. Create one with /new <name> <kind>.".bright_black()
            );
            return;
        }
        let selected = snapshot.selected.as_ref().map(|pet| pet.id.as_str());
        for pet in &snapshot.pets {
            println!("{}", render::pet_line(pet, selected == Some(pet.id.as_str())));
        }
    }

    async fn show_history(&self) {
        let snapshot = self.chat.snapshot().await;
        if let Some(pet) = &snapshot.selected {
            println!(
                "{}",
                format!("=== {} {} ===", pet.avatar, pet.name).bright_magenta().bold()
            );
        }
        for message in &snapshot.messages {
            let pet = snapshot.pets.iter().find(|pet| pet.id == message.pet_id);
            print_message(message, pet);
        }
    }
}

/// Applies `/edit` changes to a pet.
///
/// Changing the kind drops a breed the new kind does not have and swaps a
/// default avatar for the new kind's.
pub fn apply_edit(mut pet: Pet, edit: PetEdit) -> Pet {
    if let Some(name) = edit.name {
        pet.name = name;
    }
    if let Some(kind) = edit.kind {
        if kind != pet.kind {
            if pet.avatar == pet.kind.avatar() {
                pet.avatar = kind.avatar().to_string();
            }
            pet.breed = pet
                .breed
                .as_deref()
                .and_then(|breed| kind.canonical_breed(breed))
                .map(str::to_string);
            pet.kind = kind;
        }
    }
    if let Some(breed) = edit.breed {
        pet.breed = breed;
    }
    if let Some(traits) = edit.traits {
        pet.traits = traits;
    }
    pet
}

fn print_message(message: &Message, pet: Option<&Pet>) {
    for line in render::message_lines(message, pet) {
        println!("{}", line);
    }
}

fn print_unknown(id: &str) {
    println!("{}", format!("No pet with id '{}'. Try /pets.", id).yellow());
}

fn print_breeds(kind: PetKind) {
    println!("{}", format!("{} breeds:", kind).bright_magenta());
    for breed in kind.breeds() {
        println!("  {}", breed);
    }
}

fn print_help() {
    for (name, synopsis) in COMMANDS {
        println!("  {} {}", name.bright_cyan(), synopsis.bright_black());
    }
    println!(
        "  {} {}",
        "quit".bright_cyan(),
        "leave PetPal (or exit)".bright_black()
    );
    println!(
        "{}",
        "Anything else is sent to the selected pet.".bright_black()
    );
}
