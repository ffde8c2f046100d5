//! Pet domain model.
//!
//! A pet is a simulated companion the user chats with. Its kind drives the
//! response rules, its breed and trait tags flavour the generated text.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use super::catalog;
use crate::error::PetPalError;

/// The species of a pet.
///
/// `Other` is never offered for creation; it is what unknown kinds in
/// serialized data collapse into, and it gets the neutral greeting and
/// generic lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PetKind {
    Dog,
    Cat,
    Bird,
    Rabbit,
    Fish,
    #[serde(other)]
    Other,
}

impl FromStr for PetKind {
    type Err = PetPalError;

    /// Parses one of the selectable kinds; `other` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PetKind::selectable()
            .find(|kind| kind.to_string().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PetPalError::validation(format!("unknown pet type '{}'", wanted)))
    }
}

impl PetKind {
    /// Kinds that can be chosen when creating a pet.
    pub fn selectable() -> impl Iterator<Item = PetKind> {
        PetKind::iter().filter(|kind| *kind != PetKind::Other)
    }

    /// Default display glyph for this kind.
    pub fn avatar(self) -> &'static str {
        match self {
            PetKind::Dog => "🐕",
            PetKind::Cat => "🐈",
            PetKind::Bird => "🐦",
            PetKind::Rabbit => "🐰",
            PetKind::Fish => "🐠",
            PetKind::Other => "🐾",
        }
    }

    /// Breeds that may be assigned to a pet of this kind.
    pub fn breeds(self) -> &'static [&'static str] {
        catalog::breeds_for(self)
    }

    /// Resolves `candidate` against this kind's breed list, ignoring case and
    /// surrounding whitespace. Returns the catalog spelling.
    pub fn canonical_breed(self, candidate: &str) -> Option<&'static str> {
        let wanted = candidate.trim();
        self.breeds()
            .iter()
            .copied()
            .find(|breed| breed.eq_ignore_ascii_case(wanted))
    }
}

/// Personality tags a pet may carry.
///
/// Duplicates are allowed in a pet's trait list; the store does not dedupe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PetTrait {
    Playful,
    Loyal,
    Energetic,
    Curious,
    Independent,
    Affectionate,
    Shy,
    Brave,
    Calm,
    Talkative,
}

/// A pet in the user's roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    /// Identifier derived from name, kind and breed at creation time
    pub id: String,
    /// Display name
    pub name: String,
    /// Species
    #[serde(rename = "type")]
    pub kind: PetKind,
    /// Optional breed, always one of `kind.breeds()`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    /// Personality tags
    #[serde(default)]
    pub traits: Vec<PetTrait>,
    /// Display glyph
    pub avatar: String,
}

impl Pet {
    pub fn has_trait(&self, temperament: PetTrait) -> bool {
        self.traits.contains(&temperament)
    }

    /// One-line description used by list views: breed and traits joined by
    /// bullets, or a placeholder when neither is set.
    pub fn summary(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(breed) = &self.breed {
            parts.push(breed.clone());
        }
        parts.extend(self.traits.iter().map(ToString::to_string));

        if parts.is_empty() {
            "No traits selected".to_string()
        } else {
            parts.join(" • ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parses_case_insensitively() {
        assert_eq!(PetKind::from_str("Dog").unwrap(), PetKind::Dog);
        assert_eq!(PetKind::from_str("rabbit").unwrap(), PetKind::Rabbit);
        assert!(PetKind::from_str("other").is_err());
        assert!(PetKind::from_str("dragon").is_err());
    }

    #[test]
    fn test_unknown_kind_deserializes_to_other() {
        let pet: Pet = serde_json::from_str(
            r#"{"id":"x","name":"Nessie","type":"dragon","traits":[],"avatar":"?"}"#,
        )
        .unwrap();
        assert_eq!(pet.kind, PetKind::Other);
    }

    #[test]
    fn test_selectable_kinds_exclude_other() {
        let kinds: Vec<PetKind> = PetKind::selectable().collect();
        assert_eq!(kinds.len(), 5);
        assert!(!kinds.contains(&PetKind::Other));
    }

    #[test]
    fn test_canonical_breed() {
        assert_eq!(
            PetKind::Dog.canonical_breed("  golden retriever "),
            Some("Golden Retriever")
        );
        assert_eq!(PetKind::Dog.canonical_breed("Siamese"), None);
        assert_eq!(PetKind::Other.canonical_breed("Anything"), None);
    }

    #[test]
    fn test_summary() {
        let mut pet = Pet {
            id: "rex_dog".to_string(),
            name: "Rex".to_string(),
            kind: PetKind::Dog,
            breed: Some("Beagle".to_string()),
            traits: vec![PetTrait::Playful, PetTrait::Loyal],
            avatar: "🐕".to_string(),
        };
        assert_eq!(pet.summary(), "Beagle • playful • loyal");

        pet.breed = None;
        pet.traits.clear();
        assert_eq!(pet.summary(), "No traits selected");
    }
}
