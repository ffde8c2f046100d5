//! Keyword-and-trait driven reply generation.

use petpal_core::config::DEFAULT_STICKER_BASE_URL;
use petpal_core::message::MessageAction;
use petpal_core::pet::Pet;
use petpal_core::random::RandomSource;

use crate::rules::{Script, script_for};
use crate::stickers::{self, Sticker};
use crate::{PetReply, ReplyOrigin};

/// Action type stamped on every simulated reply.
pub const MESSAGE_PET_ACTION: &str = "message_pet";

const TRAIT_TRIGGER_THRESHOLD: f64 = 0.5;
const BREED_MENTION_THRESHOLD: f64 = 0.6;
const TRAIT_MENTION_THRESHOLD: f64 = 0.6;
const RANDOM_STICKER_THRESHOLD: f64 = 0.5;

/// Turns a pet and a user message into a reply.
///
/// Resolution order:
/// 1. keyword rules for the pet's kind (first match wins, no randomness)
/// 2. trait triggers for traits the pet has, each behind its own coin flip
/// 3. a generic line, optionally followed by a breed mention and a trait
///    mention, optionally decorated with a random sticker
///
/// All randomness is drawn from the caller's [`RandomSource`].
#[derive(Debug, Clone)]
pub struct ResponseSimulator {
    sticker_base_url: String,
}

impl Default for ResponseSimulator {
    fn default() -> Self {
        Self::new(DEFAULT_STICKER_BASE_URL)
    }
}

impl ResponseSimulator {
    pub fn new(sticker_base_url: impl Into<String>) -> Self {
        Self {
            sticker_base_url: sticker_base_url.into(),
        }
    }

    pub fn sticker_base_url(&self) -> &str {
        &self.sticker_base_url
    }

    pub fn compose(&self, pet: &Pet, message: &str, rng: &mut dyn RandomSource) -> PetReply {
        let lowered = message.to_lowercase();
        let script = script_for(pet.kind);

        let (content, sticker, origin) = if let Some(rule) = script.match_keywords(&lowered) {
            (rule.response.to_string(), rule.sticker, ReplyOrigin::Keyword)
        } else if let Some(trigger) = script
            .trait_triggers
            .iter()
            .filter(|trigger| pet.has_trait(trigger.temperament))
            .find(|_| rng.exceeds(TRAIT_TRIGGER_THRESHOLD))
        {
            (trigger.response.to_string(), trigger.sticker, ReplyOrigin::Trait)
        } else {
            let (content, sticker) = self.generic_reply(pet, script, rng);
            (content, sticker, ReplyOrigin::Generic)
        };

        tracing::debug!(
            pet_id = %pet.id,
            origin = ?origin,
            sticker = sticker.map(|s| s.label),
            "Composed simulated reply"
        );

        PetReply {
            content,
            sticker_url: sticker.map(|s| s.url(&self.sticker_base_url)),
            action: Some(MessageAction {
                action_type: MESSAGE_PET_ACTION.to_string(),
                target_pet_id: Some(pet.id.clone()),
                details: Some(format!("Simulated AI response to: {}", message)),
            }),
            origin,
        }
    }

    fn generic_reply(
        &self,
        pet: &Pet,
        script: &Script,
        rng: &mut dyn RandomSource,
    ) -> (String, Option<Sticker>) {
        let line = script.generic_lines[rng.pick_index(script.generic_lines.len())];
        let mut content = line.to_string();

        if let Some(breed) = &pet.breed {
            if rng.exceeds(BREED_MENTION_THRESHOLD) {
                content.push_str(&format!(" As a {},", breed));
            }
        }

        if !pet.traits.is_empty() && rng.exceeds(TRAIT_MENTION_THRESHOLD) {
            let temperament = pet.traits[rng.pick_index(pet.traits.len())];
            content.push_str(&format!(" I'm feeling {}!", temperament));
        }

        let table = stickers::stickers_for(pet.kind);
        let sticker = if !table.is_empty() && rng.exceeds(RANDOM_STICKER_THRESHOLD) {
            Some(table[rng.pick_index(table.len())])
        } else {
            None
        };

        (content, sticker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petpal_core::pet::{PetKind, PetTrait};
    use petpal_core::random::ScriptedRandom;

    fn pet(kind: PetKind, breed: Option<&str>, traits: &[PetTrait]) -> Pet {
        Pet {
            id: format!("test_{}", kind),
            name: "Test".to_string(),
            kind,
            breed: breed.map(str::to_string),
            traits: traits.to_vec(),
            avatar: kind.avatar().to_string(),
        }
    }

    #[test]
    fn test_keyword_reply_consumes_no_randomness() {
        let simulator = ResponseSimulator::default();
        let mut rng = ScriptedRandom::new([0.99, 0.99, 0.99]);
        let reply = simulator.compose(
            &pet(PetKind::Dog, None, &[PetTrait::Energetic]),
            "Let's PLAY ball",
            &mut rng,
        );

        assert_eq!(reply.origin, ReplyOrigin::Keyword);
        assert!(reply.content.starts_with("BALL?!"));
        assert_eq!(
            reply.sticker_url.as_deref(),
            Some("https://cdn.jsdelivr.net/gh/twitter/twemoji@14.0.2/assets/svg/1f3be.svg")
        );
        assert_eq!(rng.remaining(), 3);
    }

    #[test]
    fn test_trait_triggers_checked_in_table_order() {
        let simulator = ResponseSimulator::default();
        // energetic loses its flip, loyal wins
        let mut rng = ScriptedRandom::new([0.2, 0.7]);
        let reply = simulator.compose(
            &pet(PetKind::Dog, None, &[PetTrait::Loyal, PetTrait::Energetic]),
            "hello",
            &mut rng,
        );

        assert_eq!(reply.origin, ReplyOrigin::Trait);
        assert_eq!(reply.content, "Always by your side! *leans on you*");
        assert!(reply.sticker_url.unwrap().ends_with("1f917.svg"));
    }

    #[test]
    fn test_absent_traits_do_not_draw() {
        let simulator = ResponseSimulator::default();
        // only the curious trigger is eligible; its flip wins
        let mut rng = ScriptedRandom::new([0.9]);
        let reply = simulator.compose(
            &pet(PetKind::Cat, None, &[PetTrait::Curious]),
            "hmm",
            &mut rng,
        );
        assert_eq!(reply.content, "What's over there? *peeks around corner*");
        assert!(reply.sticker_url.is_none());
    }

    #[test]
    fn test_generic_reply_with_all_decorations() {
        let simulator = ResponseSimulator::new("https://stickers.test/");
        // line 0, breed yes, trait yes, trait index 1, sticker yes, sticker index 2
        let mut rng = ScriptedRandom::new([0.0, 0.7, 0.7, 0.6, 0.9, 0.5]);
        let reply = simulator.compose(
            &pet(
                PetKind::Fish,
                Some("Betta"),
                &[PetTrait::Brave, PetTrait::Playful],
            ),
            "hello there",
            &mut rng,
        );

        assert_eq!(reply.origin, ReplyOrigin::Generic);
        assert_eq!(
            reply.content,
            "*gentle swimming* *bubbles* *fin wiggle* 🐟 As a Betta, I'm feeling playful!"
        );
        assert_eq!(
            reply.sticker_url.as_deref(),
            Some("https://stickers.test/1f9bd.svg")
        );
    }

    #[test]
    fn test_generic_reply_without_breed_or_traits_skips_those_draws() {
        let simulator = ResponseSimulator::default();
        // line index, then straight to the sticker gate (fails)
        let mut rng = ScriptedRandom::new([0.0, 0.1]).then_repeat(0.99);
        let reply = simulator.compose(&pet(PetKind::Rabbit, None, &[]), "hi", &mut rng);

        assert_eq!(
            reply.content,
            "*curious hop* *sniffs the air* *wiggles ears* 🐇"
        );
        assert!(reply.sticker_url.is_none());
    }

    #[test]
    fn test_other_kind_uses_neutral_line() {
        let simulator = ResponseSimulator::default();
        let mut rng = ScriptedRandom::default().then_repeat(0.99);
        let reply = simulator.compose(&pet(PetKind::Other, None, &[]), "food", &mut rng);
        assert_eq!(reply.content, "I'm happy to chat!");
        assert!(reply.sticker_url.is_none());
    }

    #[test]
    fn test_action_metadata() {
        let simulator = ResponseSimulator::default();
        let mut rng = ScriptedRandom::default();
        let subject = pet(PetKind::Bird, None, &[]);
        let reply = simulator.compose(&subject, "Sing me a Song", &mut rng);

        let action = reply.action.unwrap();
        assert_eq!(action.action_type, MESSAGE_PET_ACTION);
        assert_eq!(action.target_pet_id.as_deref(), Some(subject.id.as_str()));
        assert_eq!(
            action.details.as_deref(),
            Some("Simulated AI response to: Sing me a Song")
        );
    }
}
