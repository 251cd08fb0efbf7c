//! Expression and posture lookup tables

use crate::domain::{Energy, Mood, Openness, TraitRecord};

/// Pixel offsets applied to the whole figure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posture {
    /// Vertical head offset, negative is up
    pub head_dy: i32,
    /// Horizontal lean of head and torso
    pub body_dx: i32,
    /// Horizontal offset of the legs
    pub leg_dx: i32,
}

impl Posture {
    pub fn for_traits(energy: Energy, mood: Mood) -> Self {
        let (head_dy, body_dx, leg_dx) = match (energy, mood) {
            (Energy::High, _) => (-12, 0, 0),
            (Energy::Low, _) => (14, -16, 6),
            (Energy::Medium, Mood::Bad) => (6, 10, -4),
            (Energy::Medium, _) => (0, 0, 0),
        };
        Self {
            head_dy,
            body_dx,
            leg_dx,
        }
    }
}

/// How the eyes are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EyeStyle {
    Open,
    /// Closed-looking line segments
    Closed,
}

impl EyeStyle {
    pub fn for_traits(energy: Energy, mood: Mood) -> Self {
        match (energy, mood) {
            (Energy::Low, _) | (Energy::Medium, Mood::Bad) => EyeStyle::Closed,
            _ => EyeStyle::Open,
        }
    }
}

/// Eyebrow slant preset as (inner end, outer end) vertical offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowSlant {
    pub inner_dy: i32,
    pub outer_dy: i32,
}

impl BrowSlant {
    pub fn for_mood(mood: Mood) -> Self {
        let (inner_dy, outer_dy) = match mood {
            Mood::Good => (-3, 2),
            Mood::Bad => (6, -5),
            Mood::Neutral => (0, 0),
        };
        Self { inner_dy, outer_dy }
    }
}

/// Mouth shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouthShape {
    Smile,
    Frown,
    Flat,
}

impl MouthShape {
    pub fn for_mood(mood: Mood) -> Self {
        match mood {
            Mood::Good => MouthShape::Smile,
            Mood::Bad => MouthShape::Frown,
            Mood::Neutral => MouthShape::Flat,
        }
    }
}

/// Arm pose presets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmPose {
    /// Both arms up, celebrating
    Raised,
    /// Arms angled out and down, welcoming
    OpenLow,
    /// Arms folded across the chest
    Crossed,
    /// Arms hanging along the torso
    StraightDown,
}

impl ArmPose {
    pub fn for_traits(openness: Openness, mood: Mood, energy: Energy) -> Self {
        match (openness, mood, energy) {
            (Openness::Open, Mood::Good, Energy::High) => ArmPose::Raised,
            (Openness::Open, _, _) => ArmPose::OpenLow,
            (Openness::Closed, _, _) => ArmPose::Crossed,
            (Openness::Medium, _, _) => ArmPose::StraightDown,
        }
    }
}

/// All expression and posture choices for one figure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pose {
    pub posture: Posture,
    pub eyes: EyeStyle,
    pub brows: BrowSlant,
    pub mouth: MouthShape,
    pub arms: ArmPose,
}

impl Pose {
    pub fn for_traits(traits: &TraitRecord) -> Self {
        Self {
            posture: Posture::for_traits(traits.energy, traits.mood),
            eyes: EyeStyle::for_traits(traits.energy, traits.mood),
            brows: BrowSlant::for_mood(traits.mood),
            mouth: MouthShape::for_mood(traits.mood),
            arms: ArmPose::for_traits(traits.openness, traits.mood, traits.energy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{analyze_text, Profile, Role};

    #[test]
    fn test_arm_pose_table() {
        assert_eq!(
            ArmPose::for_traits(Openness::Open, Mood::Good, Energy::High),
            ArmPose::Raised
        );
        assert_eq!(
            ArmPose::for_traits(Openness::Open, Mood::Good, Energy::Medium),
            ArmPose::OpenLow
        );
        assert_eq!(
            ArmPose::for_traits(Openness::Open, Mood::Bad, Energy::High),
            ArmPose::OpenLow
        );
        assert_eq!(
            ArmPose::for_traits(Openness::Closed, Mood::Bad, Energy::Low),
            ArmPose::Crossed
        );
        assert_eq!(
            ArmPose::for_traits(Openness::Medium, Mood::Neutral, Energy::High),
            ArmPose::StraightDown
        );
    }

    #[test]
    fn test_posture_offsets() {
        let cases = [
            (Energy::High, Mood::Bad, (-12, 0, 0)),
            (Energy::Low, Mood::Good, (14, -16, 6)),
            (Energy::Medium, Mood::Bad, (6, 10, -4)),
            (Energy::Medium, Mood::Neutral, (0, 0, 0)),
        ];

        for (energy, mood, (head_dy, body_dx, leg_dx)) in cases {
            assert_eq!(
                Posture::for_traits(energy, mood),
                Posture {
                    head_dy,
                    body_dx,
                    leg_dx
                },
                "{:?} / {:?}",
                energy,
                mood
            );
        }
    }

    #[test]
    fn test_tired_worst_mentor_pose() {
        let traits = analyze_text("tired and drained, exhausted", Role::Mentor, Profile::Worst);
        let pose = Pose::for_traits(&traits);

        assert_eq!(pose.eyes, EyeStyle::Closed);
        assert_eq!(pose.mouth, MouthShape::Frown);
        assert_eq!(pose.arms, ArmPose::Crossed);
        assert_eq!(pose.posture, Posture::for_traits(Energy::Low, Mood::Bad));
        assert!(pose.posture.head_dy > 0);
    }

    #[test]
    fn test_good_mood_smiles_with_open_eyes() {
        let traits = analyze_text("Listens and encourages", Role::Mentor, Profile::Mixed);
        let pose = Pose::for_traits(&traits);

        assert_eq!(pose.eyes, EyeStyle::Open);
        assert_eq!(pose.mouth, MouthShape::Smile);
        assert_eq!(pose.brows, BrowSlant::for_mood(Mood::Good));
    }
}
