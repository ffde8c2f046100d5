//! Static pet catalog: breeds per kind and the greeting each kind opens a
//! conversation with.

use super::model::PetKind;

const DOG_BREEDS: &[&str] = &[
    "Golden Retriever",
    "Labrador Retriever",
    "German Shepherd",
    "Poodle",
    "Bulldog",
    "Beagle",
    "Pug",
    "Dachshund",
];

const CAT_BREEDS: &[&str] = &[
    "Siamese",
    "Persian",
    "Maine Coon",
    "Ragdoll",
    "Sphynx",
    "British Shorthair",
    "Abyssinian",
    "Bengal",
];

const BIRD_BREEDS: &[&str] = &[
    "Parakeet",
    "Cockatiel",
    "Cockatoo",
    "African Grey Parrot",
    "Macaw",
    "Finch",
    "Canary",
];

const RABBIT_BREEDS: &[&str] = &[
    "Holland Lop",
    "Mini Rex",
    "Netherland Dwarf",
    "Lionhead",
    "Flemish Giant",
];

const FISH_BREEDS: &[&str] = &[
    "Goldfish",
    "Betta",
    "Guppy",
    "Neon Tetra",
    "Angelfish",
    "Clownfish",
];

pub(crate) fn breeds_for(kind: PetKind) -> &'static [&'static str] {
    match kind {
        PetKind::Dog => DOG_BREEDS,
        PetKind::Cat => CAT_BREEDS,
        PetKind::Bird => BIRD_BREEDS,
        PetKind::Rabbit => RABBIT_BREEDS,
        PetKind::Fish => FISH_BREEDS,
        PetKind::Other => &[],
    }
}

/// The greeting a pet sends when a conversation with it starts.
pub fn welcome_message(kind: PetKind) -> &'static str {
    match kind {
        PetKind::Dog => "Woof! I'm so excited to see you! Let's play! 🐾",
        PetKind::Cat => "Meow~ Hello there. I might let you pet me if you're lucky. 😺",
        PetKind::Bird => "*Chirp chirp* Hello! Want to hear a song? 🐦",
        PetKind::Rabbit => "*Twitches nose* Hi there! Got any carrots? 🐰",
        PetKind::Fish => "*Blub blub* Welcome to my underwater world! 🐠",
        PetKind::Other => "Hello! I'm so happy to see you!",
    }
}
