//! Deterministic reply used when the responder fails.

use petpal_core::pet::Pet;

use crate::rules::script_for;
use crate::{PetReply, ReplyOrigin};

/// Picks the first matching keyword response for the pet's kind, otherwise
/// the kind's resting line. Never draws randomness, never attaches a sticker
/// or action metadata.
pub fn fallback_reply(pet: &Pet, message: &str) -> PetReply {
    let script = script_for(pet.kind);
    let content = script
        .match_keywords(&message.to_lowercase())
        .map(|rule| rule.response)
        .unwrap_or(script.resting_line);

    PetReply {
        content: content.to_string(),
        sticker_url: None,
        action: None,
        origin: ReplyOrigin::Fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petpal_core::pet::PetKind;

    fn pet(kind: PetKind) -> Pet {
        Pet {
            id: "p".to_string(),
            name: "P".to_string(),
            kind,
            breed: None,
            traits: Vec::new(),
            avatar: kind.avatar().to_string(),
        }
    }

    #[test]
    fn test_fallback_uses_keyword_response() {
        let reply = fallback_reply(&pet(PetKind::Cat), "want a TREAT?");
        assert!(reply.content.starts_with("Meow... I suppose"));
        assert!(reply.sticker_url.is_none());
        assert!(reply.action.is_none());
        assert_eq!(reply.origin, ReplyOrigin::Fallback);
    }

    #[test]
    fn test_fallback_resting_lines() {
        assert_eq!(
            fallback_reply(&pet(PetKind::Fish), "hello").content,
            "*gentle swimming* *bubbles* *fin wiggle* 🐟"
        );
        assert_eq!(
            fallback_reply(&pet(PetKind::Other), "hello").content,
            "I'm so happy to be chatting with you! 💖"
        );
    }
}
