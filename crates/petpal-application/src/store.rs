//! In-memory pet roster and chat log.
//!
//! `PetStore` is a plain owned value: every operation is a synchronous
//! `&mut self` method with an explicit outcome, so it can be tested without
//! any runtime. The async send flow lives in [`crate::ChatUseCase`], which
//! splits a send into [`PetStore::begin_send`] and
//! [`PetStore::complete_send`] around the responder call.

use petpal_core::error::{PetPalError, Result};
use petpal_core::message::Message;
use petpal_core::pet::{Pet, PetDraft, derive_pet_id, request::resolve_breed, welcome_message};
use petpal_interaction::PetReply;
use serde::Serialize;

/// Result of [`PetStore::select_pet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The pet is now selected; `welcomed` is true when a welcome message was
    /// appended because the pet had no messages yet.
    Selected { welcomed: bool },
    /// No pet with that identifier exists; nothing changed.
    UnknownPet,
}

/// A send that has recorded the user's message and is waiting for a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    /// The pet as it was when the user hit send
    pub pet: Pet,
    /// The raw message text
    pub text: String,
    /// The user message that was appended
    pub user_message: Message,
}

/// Read-only view handed to front ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreSnapshot {
    pub pets: Vec<Pet>,
    pub selected: Option<Pet>,
    /// Log of the selected pet, or the whole log when nothing is selected
    pub messages: Vec<Message>,
    pub is_loading: bool,
}

/// The pet roster, the chronological message log and the current selection.
///
/// Invariants:
/// - pet identifiers are unique
/// - every message belongs to a pet in the roster
/// - the selection, when set, names a pet in the roster
#[derive(Debug, Clone, Default)]
pub struct PetStore {
    pets: Vec<Pet>,
    messages: Vec<Message>,
    selected: Option<String>,
}

impl PetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from existing state.
    ///
    /// # Errors
    ///
    /// Returns `Validation` on duplicate pet identifiers and `NotFound` when
    /// a message or the selection references a missing pet.
    pub fn from_parts(
        pets: Vec<Pet>,
        messages: Vec<Message>,
        selected: Option<String>,
    ) -> Result<Self> {
        let mut store = Self::new();
        for pet in pets {
            if store.pet(&pet.id).is_some() {
                return Err(PetPalError::validation(format!(
                    "duplicate pet id '{}'",
                    pet.id
                )));
            }
            store.pets.push(pet);
        }
        for message in messages {
            store.append_message(message)?;
        }
        if let Some(id) = &selected {
            if store.pet(id).is_none() {
                return Err(PetPalError::not_found("Pet", id.clone()));
            }
        }
        store.selected = selected;
        Ok(store)
    }

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn pet(&self, id: &str) -> Option<&Pet> {
        self.pets.iter().find(|pet| pet.id == id)
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_pet(&self) -> Option<&Pet> {
        self.selected.as_deref().and_then(|id| self.pet(id))
    }

    /// The whole log in chronological order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn messages_for<'a>(&'a self, pet_id: &'a str) -> impl Iterator<Item = &'a Message> {
        self.messages.iter().filter(move |m| m.pet_id == pet_id)
    }

    /// Messages a chat view shows: the selected pet's conversation, or
    /// everything when no pet is selected.
    pub fn visible_messages(&self) -> Vec<&Message> {
        match self.selected.as_deref() {
            Some(id) => self.messages_for(id).collect(),
            None => self.messages.iter().collect(),
        }
    }

    pub fn snapshot(&self, is_loading: bool) -> StoreSnapshot {
        StoreSnapshot {
            pets: self.pets.clone(),
            selected: self.selected_pet().cloned(),
            messages: self.visible_messages().into_iter().cloned().collect(),
            is_loading,
        }
    }

    /// Adds a pet, selects it and appends its welcome message.
    ///
    /// Returns `Ok(None)` without touching the store when the name is blank.
    /// A derived identifier that is already taken gets a numeric suffix.
    ///
    /// # Errors
    ///
    /// Returns `Validation` when the breed does not belong to the kind.
    pub fn create_pet(&mut self, draft: PetDraft) -> Result<Option<Pet>> {
        let Some(name) = draft.trimmed_name() else {
            tracing::debug!("Ignoring pet draft with blank name");
            return Ok(None);
        };

        let breed = resolve_breed(draft.kind, draft.breed.as_deref())?;
        let id = self.unique_id(derive_pet_id(name, draft.kind, breed.as_deref()));
        let pet = draft.into_pet(id)?;

        tracing::info!(pet_id = %pet.id, kind = %pet.kind, "Created pet");
        self.pets.push(pet.clone());
        self.selected = Some(pet.id.clone());
        self.push_welcome(&pet);

        Ok(Some(pet))
    }

    /// Selects a pet, greeting the user if the conversation is empty.
    pub fn select_pet(&mut self, id: &str) -> SelectOutcome {
        let Some(pet) = self.pet(id).cloned() else {
            tracing::debug!(pet_id = id, "Ignoring selection of unknown pet");
            return SelectOutcome::UnknownPet;
        };

        self.selected = Some(pet.id.clone());
        let welcomed = self.messages_for(&pet.id).next().is_none();
        if welcomed {
            self.push_welcome(&pet);
        }
        SelectOutcome::Selected { welcomed }
    }

    /// Replaces the stored pet that has `pet.id`.
    ///
    /// The selection is held by identifier, so a selected pet is refreshed
    /// automatically. Returns `Ok(None)` for an unknown identifier or a blank
    /// name.
    ///
    /// # Errors
    ///
    /// Returns `Validation` when the breed does not belong to the kind.
    pub fn update_pet(&mut self, pet: Pet) -> Result<Option<Pet>> {
        let Some(index) = self.pets.iter().position(|p| p.id == pet.id) else {
            tracing::debug!(pet_id = %pet.id, "Ignoring update of unknown pet");
            return Ok(None);
        };

        let draft = PetDraft {
            name: pet.name,
            kind: pet.kind,
            breed: pet.breed,
            traits: pet.traits,
            avatar: Some(pet.avatar),
        };
        if draft.trimmed_name().is_none() {
            tracing::debug!(pet_id = %pet.id, "Ignoring update with blank name");
            return Ok(None);
        }

        let updated = draft.into_pet(pet.id)?;
        tracing::info!(pet_id = %updated.id, "Updated pet");
        self.pets[index] = updated.clone();
        Ok(Some(updated))
    }

    /// Removes a pet together with its whole conversation.
    ///
    /// Clears the selection if it pointed at the removed pet. Returns the
    /// removed pet, or `None` if the identifier was unknown.
    pub fn delete_pet(&mut self, id: &str) -> Option<Pet> {
        let index = self.pets.iter().position(|pet| pet.id == id)?;
        let pet = self.pets.remove(index);

        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }

        let before = self.messages.len();
        self.messages.retain(|m| m.pet_id != id);
        tracing::info!(
            pet_id = id,
            removed_messages = before - self.messages.len(),
            "Deleted pet"
        );

        Some(pet)
    }

    /// Appends a message to the log.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the message's pet is not in the roster.
    pub fn append_message(&mut self, message: Message) -> Result<()> {
        if self.pet(&message.pet_id).is_none() {
            return Err(PetPalError::not_found("Pet", message.pet_id));
        }
        self.messages.push(message);
        Ok(())
    }

    /// First half of a send: records the user's message for the selected pet.
    ///
    /// Returns `None` and leaves the store untouched when no pet is selected
    /// or the text is blank.
    pub fn begin_send(&mut self, text: &str) -> Option<PendingReply> {
        if text.trim().is_empty() {
            return None;
        }
        let pet = self.selected_pet()?.clone();

        let user_message = Message::from_user(pet.id.clone(), text);
        self.messages.push(user_message.clone());
        tracing::debug!(pet_id = %pet.id, message_id = %user_message.id, "Recorded user message");

        Some(PendingReply {
            pet,
            text: text.to_string(),
            user_message,
        })
    }

    /// Second half of a send: stores the pet's reply.
    ///
    /// Returns `None` when the pet was deleted while the reply was in flight.
    /// The exchange is tracked by its user message, which a delete cascades
    /// away, so a pet recreated under the same id does not receive the
    /// stale reply.
    pub fn complete_send(&mut self, pending: &PendingReply, reply: PetReply) -> Option<Message> {
        let exchange_alive = self.pet(&pending.pet.id).is_some()
            && self
                .messages
                .iter()
                .any(|m| m.id == pending.user_message.id);
        if !exchange_alive {
            tracing::warn!(
                pet_id = %pending.pet.id,
                "Discarding reply for a pet that no longer exists"
            );
            return None;
        }

        let message = Message::from_pet(pending.pet.id.clone(), reply.content)
            .with_action(reply.action)
            .with_sticker(reply.sticker_url);
        self.messages.push(message.clone());
        Some(message)
    }

    fn push_welcome(&mut self, pet: &Pet) {
        self.messages
            .push(Message::from_pet(pet.id.clone(), welcome_message(pet.kind)));
    }

    fn unique_id(&self, base: String) -> String {
        let mut candidate = base.clone();
        let mut suffix = 2;
        while self.pet(&candidate).is_some() {
            candidate = format!("{}_{}", base, suffix);
            suffix += 1;
        }
        candidate
    }
}
