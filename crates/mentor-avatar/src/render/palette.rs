//! Colour lookup tables
//!
//! Base palette follows the Boliden blues (#3C577C, #75A7D4).

use image::Rgb;

use crate::domain::{Mood, Profile, Reliability, Role, TraitRecord, Warmth};

pub const CANVAS_BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
pub const TITLE_COLOR: Rgb<u8> = Rgb([60, 87, 124]);
pub const TEXT_COLOR: Rgb<u8> = Rgb([31, 41, 51]);
pub const CAPTION_COLOR: Rgb<u8> = Rgb([107, 123, 140]);
pub const INK: Rgb<u8> = Rgb([40, 40, 48]);
pub const EYE_WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const SHOE_COLOR: Rgb<u8> = Rgb([52, 46, 44]);

/// Overall colour theme of the person panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Soft green panel, Boliden blue shirt
    Positive,
    /// Dusty red panel, brick shirt
    Negative,
    /// Pale blue panel, light blue shirt
    Neutral,
}

impl Theme {
    /// The profile hint wins over mood on each branch, checked positive first
    pub fn for_traits(profile: Profile, mood: Mood) -> Self {
        if profile == Profile::Ultimate || mood == Mood::Good {
            Theme::Positive
        } else if profile == Profile::Worst || mood == Mood::Bad {
            Theme::Negative
        } else {
            Theme::Neutral
        }
    }

    pub fn panel_background(&self) -> Rgb<u8> {
        match self {
            Theme::Positive => Rgb([227, 242, 235]),
            Theme::Negative => Rgb([246, 226, 224]),
            Theme::Neutral => Rgb([232, 238, 246]),
        }
    }

    pub fn shirt(&self) -> Rgb<u8> {
        match self {
            Theme::Positive => Rgb([60, 87, 124]),
            Theme::Negative => Rgb([128, 58, 58]),
            Theme::Neutral => Rgb([117, 167, 212]),
        }
    }
}

/// Every colour used to draw one person
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub panel_background: Rgb<u8>,
    pub shirt: Rgb<u8>,
    /// Slightly darker than the shirt so arms read against the torso
    pub sleeve: Rgb<u8>,
    pub pants: Rgb<u8>,
    pub skin: Rgb<u8>,
    pub hair: Rgb<u8>,
}

impl Palette {
    pub fn for_traits(traits: &TraitRecord) -> Self {
        let theme = Theme::for_traits(traits.profile, traits.mood);

        let shirt = match traits.role {
            Role::Mentor => theme.shirt(),
            Role::Trainee => lighten(theme.shirt(), 0.4),
        };

        let pants = match traits.reliability {
            Reliability::High => Rgb([44, 58, 82]),
            Reliability::Low => Rgb([150, 146, 140]),
        };

        let (skin, hair) = match traits.warmth {
            Warmth::Warm => (Rgb([248, 213, 180]), Rgb([126, 76, 40])),
            Warmth::Cold => (Rgb([228, 222, 222]), Rgb([46, 46, 56])),
            Warmth::Neutral => (Rgb([240, 205, 176]), Rgb([88, 64, 46])),
        };

        Self {
            panel_background: theme.panel_background(),
            shirt,
            sleeve: darken(shirt, 0.2),
            pants,
            skin,
            hair,
        }
    }
}

/// Blend `color` toward white by `amount` (0.0..=1.0)
pub fn lighten(color: Rgb<u8>, amount: f32) -> Rgb<u8> {
    let amount = amount.clamp(0.0, 1.0);
    let channel = |c: u8| (c as f32 + (255.0 - c as f32) * amount).round() as u8;
    Rgb([channel(color[0]), channel(color[1]), channel(color[2])])
}

/// Blend `color` toward black by `amount` (0.0..=1.0)
pub fn darken(color: Rgb<u8>, amount: f32) -> Rgb<u8> {
    let keep = 1.0 - amount.clamp(0.0, 1.0);
    let channel = |c: u8| (c as f32 * keep).round() as u8;
    Rgb([channel(color[0]), channel(color[1]), channel(color[2])])
}
