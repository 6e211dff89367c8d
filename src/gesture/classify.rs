//! Landmark-based gesture classification.
//!
//! Landmarks follow the common 21-point hand model: 0 is the wrist, then
//! four points per digit from the base outwards (thumb 1-4, index 5-8,
//! middle 9-12, ring 13-16, pinky 17-20). x/y are normalized to the frame
//! with y growing downwards, so "above" means a smaller y.

use glam::{Vec2, Vec3};

use super::label::Gesture;

/// Number of landmarks in a hand
pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;

/// (tip, pip) pairs for index, middle, ring and pinky
const FINGER_JOINTS: [(usize, usize); 4] = [(8, 6), (12, 10), (16, 14), (20, 18)];

/// One detected hand
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandLandmarks {
    pub points: [Vec3; LANDMARK_COUNT],
}

impl HandLandmarks {
    pub fn new(points: [Vec3; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Build from a detector's output; `None` unless exactly 21 points
    pub fn from_slice(points: &[Vec3]) -> Option<Self> {
        let points: [Vec3; LANDMARK_COUNT] = points.try_into().ok()?;
        Some(Self { points })
    }

    /// Wrist position in pixels
    pub fn wrist_px(&self, width: u32, height: u32) -> Vec2 {
        self.to_px(WRIST, width, height)
    }

    /// Index fingertip position in pixels
    pub fn index_tip_px(&self, width: u32, height: u32) -> Vec2 {
        self.to_px(INDEX_TIP, width, height)
    }

    fn to_px(&self, index: usize, width: u32, height: u32) -> Vec2 {
        let p = self.points[index];
        Vec2::new(p.x * width as f32, p.y * height as f32)
    }
}

/// Count extended digits (0-5).
pub fn count_extended_fingers(hand: &HandLandmarks) -> u8 {
    let p = &hand.points;
    let thumb = u8::from(p[THUMB_TIP].x < p[THUMB_IP].x);
    let fingers = FINGER_JOINTS
        .iter()
        .filter(|&&(tip, pip)| p[tip].y < p[pip].y)
        .count() as u8;
    thumb + fingers
}

/// Thumb pointing up with the four fingers curled.
pub fn is_thumb_up(hand: &HandLandmarks) -> bool {
    let p = &hand.points;
    let thumb_up = p[THUMB_TIP].y < p[THUMB_MCP].y;
    let fingers_down = FINGER_JOINTS
        .iter()
        .all(|&(tip, pip)| p[tip].y > p[pip].y);
    thumb_up && fingers_down
}

/// Classify a hand pose.
///
/// Thumb-up is tested before finger counting; a thumb-up pose counts at
/// most one extended digit and would otherwise read as `Delete` or `Move`.
pub fn classify(hand: &HandLandmarks) -> Option<Gesture> {
    if is_thumb_up(hand) {
        return Some(Gesture::ChangeColor);
    }

    match count_extended_fingers(hand) {
        5 => Some(Gesture::Place),
        0 => Some(Gesture::Delete),
        1 => Some(Gesture::Move),
        2 => Some(Gesture::Rotate),
        _ => None,
    }
}
