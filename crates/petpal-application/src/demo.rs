//! Sample roster shown on first launch.

use chrono::{Duration, Utc};
use petpal_core::error::Result;
use petpal_core::message::Message;
use petpal_core::pet::{Pet, PetKind, PetTrait};
use petpal_interaction::stickers;

use crate::store::PetStore;

/// Rex and Whiskers, with Rex selected and a short conversation already
/// under way. Sticker URLs are built from `sticker_base_url`, the same
/// prefix live replies use.
pub fn demo_store(sticker_base_url: &str) -> Result<PetStore> {
    let rex = Pet {
        id: "rex_dog".to_string(),
        name: "Rex".to_string(),
        kind: PetKind::Dog,
        breed: Some("Golden Retriever".to_string()),
        traits: vec![PetTrait::Playful, PetTrait::Loyal, PetTrait::Energetic],
        avatar: PetKind::Dog.avatar().to_string(),
    };
    let whiskers = Pet {
        id: "whiskers_cat".to_string(),
        name: "Whiskers".to_string(),
        kind: PetKind::Cat,
        breed: Some("Siamese".to_string()),
        traits: vec![
            PetTrait::Curious,
            PetTrait::Independent,
            PetTrait::Affectionate,
        ],
        avatar: PetKind::Cat.avatar().to_string(),
    };

    let now = Utc::now();
    let ago = |secs: i64| now - Duration::seconds(secs);
    let conversation = vec![
        Message::from_pet(
            &rex.id,
            "Woof! I'm so happy to see you! What should we do today? 🐾",
        )
        .with_timestamp(ago(30)),
        Message::from_user(&rex.id, "Hey Rex! Want to play fetch?").with_timestamp(ago(20)),
        Message::from_pet(
            &rex.id,
            "BALL?! THROW IT! THROW IT! I'LL CATCH IT! *bounces excitedly* 🎾",
        )
        .with_sticker(Some(stickers::TENNIS_BALL.url(sticker_base_url)))
        .with_timestamp(ago(10)),
        Message::from_user(&rex.id, "Haha, okay! You're so energetic!").with_timestamp(ago(5)),
        Message::from_pet(
            &rex.id,
            "Woof! I'm just happy you're talking to me! *tail wagging* 🐶",
        )
        .with_sticker(Some(stickers::DOG_FACE.url(sticker_base_url)))
        .with_timestamp(now),
    ];

    let selected = Some(rex.id.clone());
    PetStore::from_parts(vec![rex, whiskers], conversation, selected)
}
