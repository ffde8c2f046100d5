//! Per-kind reply scripts.
//!
//! A script lists, in priority order, the keyword rules and trait triggers
//! for one kind of pet, plus the generic lines used when nothing matches and
//! the resting line used by the deterministic fallback.

use petpal_core::pet::{PetKind, PetTrait};

use crate::stickers::{self, Sticker};

/// Fires when the lower-cased message contains any of `keywords`.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub keywords: &'static [&'static str],
    pub response: &'static str,
    pub sticker: Option<Sticker>,
}

impl KeywordRule {
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// Fires, subject to a coin flip, when the pet carries `temperament`.
#[derive(Debug, Clone, Copy)]
pub struct TraitTrigger {
    pub temperament: PetTrait,
    pub response: &'static str,
    pub sticker: Option<Sticker>,
}

#[derive(Debug)]
pub struct Script {
    pub keyword_rules: &'static [KeywordRule],
    pub trait_triggers: &'static [TraitTrigger],
    pub generic_lines: &'static [&'static str],
    pub resting_line: &'static str,
}

impl Script {
    /// First keyword rule matching an already lower-cased message.
    pub fn match_keywords(&self, lowered: &str) -> Option<&'static KeywordRule> {
        self.keyword_rules.iter().find(|rule| rule.matches(lowered))
    }
}

const fn rule(
    keywords: &'static [&'static str],
    response: &'static str,
    sticker: Option<Sticker>,
) -> KeywordRule {
    KeywordRule {
        keywords,
        response,
        sticker,
    }
}

const fn trigger(
    temperament: PetTrait,
    response: &'static str,
    sticker: Option<Sticker>,
) -> TraitTrigger {
    TraitTrigger {
        temperament,
        response,
        sticker,
    }
}

static DOG: Script = Script {
    keyword_rules: &[
        rule(
            &["walk", "outside"],
            "WALK?! YES YES YES!! I LOVE WALKS! 🐕🦮🐾",
            Some(stickers::DOG_FACE),
        ),
        rule(
            &["treat", "food"],
            "Treats?! *wags tail frantically* Yes please! 🦴",
            Some(stickers::DOG),
        ),
        rule(
            &["play", "ball"],
            "BALL?! THROW IT! THROW IT! I'LL CATCH IT! *bounces excitedly* 🎾",
            Some(stickers::TENNIS_BALL),
        ),
        rule(
            &["good", "pet"],
            "*tail wagging intensifies* I love you too! You're my favorite human! 💕",
            Some(stickers::HUGGING_FACE),
        ),
    ],
    trait_triggers: &[
        trigger(
            PetTrait::Energetic,
            "I'm bursting with energy! Let's run!",
            Some(stickers::SWEAT_DROPLETS),
        ),
        trigger(
            PetTrait::Loyal,
            "Always by your side! *leans on you*",
            Some(stickers::HUGGING_FACE),
        ),
    ],
    generic_lines: &[
        "Woof! I'm just happy you're talking to me! *tail wagging* 🐶",
        "*sniffs your hand curiously* Woof woof!",
        "*tilts head* Arf? Tell me more!",
        "*rolls over for belly rubs* 🐕",
    ],
    resting_line: "Woof! I'm just happy you're talking to me! *tail wagging* 🐶",
};

static CAT: Script = Script {
    keyword_rules: &[
        rule(
            &["food", "treat"],
            "Meow... I suppose I could eat something. If it's premium quality. 😼",
            Some(stickers::CAT_FACE),
        ),
        rule(
            &["pet", "scratch"],
            "*purrs softly* Right behind the ears, please... 😺",
            Some(stickers::GRINNING_CAT),
        ),
        rule(
            &["toy", "play"],
            "*eyes dilate* Is that a toy? *crouches, ready to pounce* 🐱",
            None,
        ),
        rule(
            &["love", "good"],
            "*slow blink* I tolerate you more than most humans. That's high praise. 💤",
            None,
        ),
    ],
    trait_triggers: &[
        trigger(
            PetTrait::Curious,
            "What's over there? *peeks around corner*",
            None,
        ),
        trigger(
            PetTrait::Independent,
            "I'll just be over here... doing my own thing.",
            None,
        ),
    ],
    generic_lines: &[
        "*stares at you judgmentally while purring* Meow. 🐱",
        "*knocks something off the table* Oops. 😼",
        "*stretches lazily* Mrrrow?",
        "*curls up in a sunbeam* Purrr... 💤",
    ],
    resting_line: "*stares at you judgmentally while purring* Meow. 🐱",
};

static BIRD: Script = Script {
    keyword_rules: &[
        rule(
            &["sing", "song"],
            "*chirps melodically* 🎵 Tweet-tweet-TWEEEET! 🎵 *head bobs* 🐦",
            Some(stickers::MUSICAL_NOTE),
        ),
        rule(
            &["food", "seed"],
            "*flutters wings* Seeds! My favorite! *hops excitedly* 🌱",
            Some(stickers::BIRD),
        ),
    ],
    trait_triggers: &[trigger(
        PetTrait::Talkative,
        "Chirp chirp chirp! I have so much to tell you!",
        Some(stickers::LOUDSPEAKER),
    )],
    generic_lines: &[
        "*tilts head curiously* Chirp? *fluffs feathers* 🐦",
        "*whistles a little tune* Tweet!",
        "*preens feathers* Chirp chirp!",
    ],
    resting_line: "*tilts head curiously* Chirp? *fluffs feathers* 🐦",
};

static RABBIT: Script = Script {
    keyword_rules: &[
        rule(
            &["carrot", "food"],
            "*nose twitches rapidly* Carrots?! *thumps foot excitedly* 🥕",
            Some(stickers::CARROT),
        ),
        rule(
            &["pet", "soft"],
            "*closes eyes contentedly* *soft purring sound* 🐰",
            Some(stickers::RABBIT_FACE),
        ),
    ],
    trait_triggers: &[trigger(
        PetTrait::Shy,
        "*hides behind you* A little scared...",
        None,
    )],
    generic_lines: &[
        "*curious hop* *sniffs the air* *wiggles ears* 🐇",
        "*binkies across the room* 🐰",
        "*nibbles on some hay* ...",
    ],
    resting_line: "*curious hop* *sniffs the air* *wiggles ears* 🐇",
};

static FISH: Script = Script {
    keyword_rules: &[
        rule(
            &["food", "feed"],
            "*swims to surface excitedly* Blub blub! *mouth opens and closes* 🐠",
            Some(stickers::FISH),
        ),
        rule(
            &["tank", "water"],
            "*swims in a circle* Blub! *bubbles rise* My underwater palace! 💧",
            Some(stickers::DIVING_MASK),
        ),
    ],
    trait_triggers: &[trigger(
        PetTrait::Calm,
        "Just peacefully swimming... Ahh.",
        None,
    )],
    generic_lines: &[
        "*gentle swimming* *bubbles* *fin wiggle* 🐟",
        "*blows a bubble* Blub!",
        "*darts behind a plant* ...blub?",
    ],
    resting_line: "*gentle swimming* *bubbles* *fin wiggle* 🐟",
};

static OTHER: Script = Script {
    keyword_rules: &[],
    trait_triggers: &[],
    generic_lines: &["I'm happy to chat!"],
    resting_line: "I'm so happy to be chatting with you! 💖",
};

/// The script for pets of `kind`.
pub fn script_for(kind: PetKind) -> &'static Script {
    match kind {
        PetKind::Dog => &DOG,
        PetKind::Cat => &CAT,
        PetKind::Bird => &BIRD,
        PetKind::Rabbit => &RABBIT,
        PetKind::Fish => &FISH,
        PetKind::Other => &OTHER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_rules_match_in_order() {
        // "good walk" hits both the walk and the good rule; walk comes first
        let rule = script_for(PetKind::Dog).match_keywords("good walk").unwrap();
        assert!(rule.response.starts_with("WALK?!"));
    }

    #[test]
    fn test_keyword_match_is_substring() {
        assert!(script_for(PetKind::Bird).match_keywords("birdsong").is_some());
        assert!(script_for(PetKind::Fish).match_keywords("hello").is_none());
    }

    #[test]
    fn test_every_script_has_generic_lines() {
        for kind in [
            PetKind::Dog,
            PetKind::Cat,
            PetKind::Bird,
            PetKind::Rabbit,
            PetKind::Fish,
            PetKind::Other,
        ] {
            assert!(!script_for(kind).generic_lines.is_empty());
        }
    }
}
