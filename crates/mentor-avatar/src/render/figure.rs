//! Cartoon person drawn inside a box
//!
//! Z-order: panel, head, hair, eyes, eyebrows, mouth, neck, torso, arms,
//! legs, shoes. All sizes are fractions of the box.

use image::RgbImage;
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_ellipse_mut};

use super::palette::{Palette, EYE_WHITE, INK, SHOE_COLOR};
use super::pose::{ArmPose, EyeStyle, MouthShape, Pose};
use super::shapes::{fill_ellipse_above, fill_rect, stroke_arc, thick_line};
use crate::domain::TraitRecord;

/// Pixel box (left, top, right, bottom)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl BoundingBox {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn center_x(&self) -> i32 {
        (self.left + self.right) / 2
    }
}

const ARM_WIDTH: f32 = 26.0;
const HAND_RADIUS: i32 = 14;
const FEATURE_STROKE: f32 = 4.0;

/// Draw the whole person for `traits` into `area`
pub fn draw_person(image: &mut RgbImage, area: BoundingBox, traits: &TraitRecord) {
    let palette = Palette::for_traits(traits);
    let pose = Pose::for_traits(traits);

    fill_rect(
        image,
        area.left,
        area.top,
        area.width(),
        area.height(),
        palette.panel_background,
    );

    let width = area.width();
    let height = area.height();

    // Head
    let head_rx = width / 6;
    let head_ry = head_rx * 11 / 10;
    let head_x = area.center_x() + pose.posture.body_dx;
    let head_y = area.top + height / 5 + pose.posture.head_dy;
    draw_filled_ellipse_mut(image, (head_x, head_y), head_rx, head_ry, palette.skin);

    // Hair, clipped to the top of the head
    fill_ellipse_above(
        image,
        (head_x, head_y - head_rx / 5),
        (head_rx + 6, head_ry * 17 / 20),
        head_y - head_rx / 2,
        palette.hair,
    );

    draw_face(image, (head_x, head_y), head_rx, &pose);

    // Neck and torso
    let torso_top = head_y + head_ry + 16;
    let torso_w = width * 21 / 50;
    let torso_h = height * 3 / 10;
    let torso_x = area.center_x() + pose.posture.body_dx - torso_w / 2;
    let neck_w = head_rx / 2;
    fill_rect(
        image,
        head_x - neck_w / 2,
        head_y + head_ry - 6,
        neck_w,
        torso_top - (head_y + head_ry - 6) + 4,
        palette.skin,
    );
    fill_rect(image, torso_x, torso_top, torso_w, torso_h, palette.shirt);

    draw_arms(image, (torso_x, torso_top, torso_w), pose.arms, &palette);

    // Legs and shoes
    let leg_w = 42;
    let leg_h = height * 6 / 25;
    let leg_top = torso_top + torso_h;
    let legs_center = torso_x + torso_w / 2 + pose.posture.leg_dx;
    for leg_x in [legs_center - leg_w - 6, legs_center + 6] {
        fill_rect(image, leg_x, leg_top, leg_w, leg_h, palette.pants);
        fill_rect(image, leg_x - 6, leg_top + leg_h, leg_w + 12, 20, SHOE_COLOR);
    }
}

fn draw_face(image: &mut RgbImage, head: (i32, i32), head_rx: i32, pose: &Pose) {
    let (head_x, head_y) = head;
    let eye_y = head_y - head_rx / 8;
    let eye_dx = head_rx * 2 / 5;

    for side in [-1, 1] {
        let eye_x = head_x + side * eye_dx;

        match pose.eyes {
            EyeStyle::Open => {
                draw_filled_ellipse_mut(image, (eye_x, eye_y), 10, 8, EYE_WHITE);
                draw_filled_circle_mut(image, (eye_x, eye_y), 4, INK);
            }
            EyeStyle::Closed => {
                thick_line(
                    image,
                    ((eye_x - 10) as f32, eye_y as f32),
                    ((eye_x + 10) as f32, (eye_y + 2) as f32),
                    3.0,
                    INK,
                );
            }
        }

        // Inner end points toward the nose
        let brow_y = eye_y - 20;
        let inner = (eye_x - side * 12, brow_y + pose.brows.inner_dy);
        let outer = (eye_x + side * 12, brow_y + pose.brows.outer_dy);
        thick_line(
            image,
            (inner.0 as f32, inner.1 as f32),
            (outer.0 as f32, outer.1 as f32),
            FEATURE_STROKE,
            INK,
        );
    }

    let mouth_y = (head_y + head_rx * 2 / 5) as f32;
    let mouth_x = head_x as f32;
    match pose.mouth {
        MouthShape::Smile => stroke_arc(
            image,
            (mouth_x, mouth_y - 8.0),
            (24.0, 14.0),
            (20.0, 160.0),
            FEATURE_STROKE,
            INK,
        ),
        MouthShape::Frown => stroke_arc(
            image,
            (mouth_x, mouth_y + 10.0),
            (22.0, 12.0),
            (200.0, 340.0),
            FEATURE_STROKE,
            INK,
        ),
        MouthShape::Flat => thick_line(
            image,
            (mouth_x - 20.0, mouth_y),
            (mouth_x + 20.0, mouth_y),
            FEATURE_STROKE,
            INK,
        ),
    }
}

/// `torso` is (left, top, width)
fn draw_arms(image: &mut RgbImage, torso: (i32, i32, i32), pose: ArmPose, palette: &Palette) {
    let (left, top, width) = torso;
    let right = left + width;
    let shoulder_y = (top + 18) as f32;
    let left_shoulder = ((left + 4) as f32, shoulder_y);
    let right_shoulder = ((right - 4) as f32, shoulder_y);

    let arms: [((f32, f32), (f32, f32)); 2] = match pose {
        ArmPose::Raised => [
            (left_shoulder, (left_shoulder.0 - 70.0, shoulder_y - 120.0)),
            (right_shoulder, (right_shoulder.0 + 70.0, shoulder_y - 120.0)),
        ],
        ArmPose::OpenLow => [
            (left_shoulder, (left_shoulder.0 - 90.0, shoulder_y + 150.0)),
            (right_shoulder, (right_shoulder.0 + 90.0, shoulder_y + 150.0)),
        ],
        ArmPose::Crossed => [
            (left_shoulder, ((right - 30) as f32, shoulder_y + 90.0)),
            (right_shoulder, ((left + 30) as f32, shoulder_y + 110.0)),
        ],
        ArmPose::StraightDown => [
            (((left - 10) as f32, shoulder_y), ((left - 14) as f32, shoulder_y + 175.0)),
            (((right + 10) as f32, shoulder_y), ((right + 14) as f32, shoulder_y + 175.0)),
        ],
    };

    for (shoulder, hand) in arms {
        thick_line(image, shoulder, hand, ARM_WIDTH, palette.sleeve);
        draw_filled_circle_mut(
            image,
            (hand.0.round() as i32, hand.1.round() as i32),
            HAND_RADIUS,
            palette.skin,
        );
    }
}
