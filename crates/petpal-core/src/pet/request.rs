//! Pet creation request model.

use serde::{Deserialize, Serialize};

use super::model::{Pet, PetKind, PetTrait};
use crate::error::{PetPalError, Result};

/// Everything needed to create a pet except its identifier.
///
/// The identifier is assigned by the store, which derives it from the name,
/// kind and breed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetDraft {
    /// Display name (required, blank drafts are ignored)
    pub name: String,

    /// Species
    #[serde(rename = "type")]
    pub kind: PetKind,

    /// Optional breed, must belong to `kind`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,

    /// Personality tags
    #[serde(default)]
    pub traits: Vec<PetTrait>,

    /// Display glyph, defaults to the kind's avatar
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl PetDraft {
    pub fn new(name: impl Into<String>, kind: PetKind) -> Self {
        Self {
            name: name.into(),
            kind,
            breed: None,
            traits: Vec::new(),
            avatar: None,
        }
    }

    pub fn with_breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = Some(breed.into());
        self
    }

    pub fn with_traits(mut self, traits: impl IntoIterator<Item = PetTrait>) -> Self {
        self.traits = traits.into_iter().collect();
        self
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// The trimmed name, or `None` when it is blank.
    pub fn trimmed_name(&self) -> Option<&str> {
        let name = self.name.trim();
        (!name.is_empty()).then_some(name)
    }

    /// Builds the pet under the given identifier.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the name is blank or the breed does not belong
    /// to the draft's kind.
    pub fn into_pet(self, id: String) -> Result<Pet> {
        let name = self
            .trimmed_name()
            .ok_or_else(|| PetPalError::validation("Name is required and cannot be empty"))?
            .to_string();
        let breed = resolve_breed(self.kind, self.breed.as_deref())?;
        let avatar = self
            .avatar
            .filter(|glyph| !glyph.trim().is_empty())
            .unwrap_or_else(|| self.kind.avatar().to_string());

        Ok(Pet {
            id,
            name,
            kind: self.kind,
            breed,
            traits: self.traits,
            avatar,
        })
    }
}

/// Normalizes an optional breed for `kind`.
///
/// A missing or blank breed yields `Ok(None)`; a known breed yields its
/// catalog spelling.
///
/// # Errors
///
/// Returns `Validation` when the breed is not listed for `kind`.
pub fn resolve_breed(kind: PetKind, breed: Option<&str>) -> Result<Option<String>> {
    match breed.map(str::trim).filter(|b| !b.is_empty()) {
        None => Ok(None),
        Some(candidate) => kind
            .canonical_breed(candidate)
            .map(|canonical| Some(canonical.to_string()))
            .ok_or_else(|| {
                PetPalError::validation(format!("'{}' is not a known {} breed", candidate, kind))
            }),
    }
}

/// Derives the base identifier for a pet: lower-cased name and breed with
/// whitespace runs replaced by underscores, joined with the kind.
///
/// ```
/// use petpal_core::pet::{derive_pet_id, PetKind};
///
/// assert_eq!(derive_pet_id("Buddy", PetKind::Dog, None), "buddy_dog");
/// assert_eq!(
///     derive_pet_id("Mr Whiskers", PetKind::Cat, Some("Maine Coon")),
///     "mr_whiskers_cat_maine_coon"
/// );
/// ```
pub fn derive_pet_id(name: &str, kind: PetKind, breed: Option<&str>) -> String {
    let mut id = format!("{}_{}", underscored(name), kind);
    if let Some(breed) = breed.filter(|b| !b.trim().is_empty()) {
        id.push('_');
        id.push_str(&underscored(breed));
    }
    id
}

fn underscored(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}
