//! Decorative sticker tables.
//!
//! Stickers are twemoji SVGs. A [`Sticker`] only knows its file name; the
//! URL prefix comes from configuration.

use petpal_core::pet::PetKind;

/// A sticker image, identified by its twemoji file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sticker {
    pub file: &'static str,
    pub label: &'static str,
}

impl Sticker {
    const fn new(file: &'static str, label: &'static str) -> Self {
        Self { file, label }
    }

    /// Joins the sticker file onto `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        if base_url.is_empty() || base_url.ends_with('/') {
            format!("{}{}", base_url, self.file)
        } else {
            format!("{}/{}", base_url, self.file)
        }
    }
}

pub const DOG_FACE: Sticker = Sticker::new("1f436.svg", "dog face");
pub const DOG: Sticker = Sticker::new("1f415.svg", "dog");
pub const YAWNING_FACE: Sticker = Sticker::new("1f971.svg", "yawning face");
pub const TENNIS_BALL: Sticker = Sticker::new("1f3be.svg", "tennis ball");
pub const SWEAT_DROPLETS: Sticker = Sticker::new("1f4a6.svg", "sweat droplets");
pub const HUGGING_FACE: Sticker = Sticker::new("1f917.svg", "hugging face");

pub const CAT_FACE: Sticker = Sticker::new("1f431.svg", "cat face");
pub const GRINNING_CAT: Sticker = Sticker::new("1f63a.svg", "grinning cat");
pub const HEART_EYES_CAT: Sticker = Sticker::new("1f63b.svg", "heart-eyes cat");
pub const CAT: Sticker = Sticker::new("1f408.svg", "cat");
pub const ZZZ: Sticker = Sticker::new("1f4a4.svg", "zzz");
pub const WEARY_CAT: Sticker = Sticker::new("1f640.svg", "weary cat");

pub const BIRD: Sticker = Sticker::new("1f426.svg", "bird");
pub const HATCHING_CHICK: Sticker = Sticker::new("1f425.svg", "hatching chick");
pub const MUSICAL_NOTE: Sticker = Sticker::new("1f3b5.svg", "musical note");
pub const LOUDSPEAKER: Sticker = Sticker::new("1f4e2.svg", "loudspeaker");

pub const RABBIT: Sticker = Sticker::new("1f407.svg", "rabbit");
pub const RABBIT_FACE: Sticker = Sticker::new("1f430.svg", "rabbit face");
pub const CARROT: Sticker = Sticker::new("1f955.svg", "carrot");
pub const EYES: Sticker = Sticker::new("1f440.svg", "eyes");

pub const FISH: Sticker = Sticker::new("1f41f.svg", "fish");
pub const TROPICAL_FISH: Sticker = Sticker::new("1f420.svg", "tropical fish");
pub const DIVING_MASK: Sticker = Sticker::new("1f9bd.svg", "diving mask");
pub const DROPLET: Sticker = Sticker::new("1f4a7.svg", "droplet");

const DOG_STICKERS: &[Sticker] = &[
    DOG_FACE,
    DOG,
    YAWNING_FACE,
    TENNIS_BALL,
    SWEAT_DROPLETS,
    HUGGING_FACE,
];
const CAT_STICKERS: &[Sticker] = &[CAT_FACE, GRINNING_CAT, HEART_EYES_CAT, CAT, ZZZ, WEARY_CAT];
const BIRD_STICKERS: &[Sticker] = &[BIRD, HATCHING_CHICK, MUSICAL_NOTE, LOUDSPEAKER];
const RABBIT_STICKERS: &[Sticker] = &[RABBIT, RABBIT_FACE, CARROT, EYES];
const FISH_STICKERS: &[Sticker] = &[FISH, TROPICAL_FISH, DIVING_MASK, DROPLET];

/// Stickers a pet of `kind` may attach at random.
pub fn stickers_for(kind: PetKind) -> &'static [Sticker] {
    match kind {
        PetKind::Dog => DOG_STICKERS,
        PetKind::Cat => CAT_STICKERS,
        PetKind::Bird => BIRD_STICKERS,
        PetKind::Rabbit => RABBIT_STICKERS,
        PetKind::Fish => FISH_STICKERS,
        PetKind::Other => &[],
    }
}
