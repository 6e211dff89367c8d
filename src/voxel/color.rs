//! Block colors and the selectable palette

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};

/// Linear RGB color, channels in [0, 1]
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const NEON_BLUE: Color = Color::new(0.0, 0.8, 1.0);
    pub const CYAN: Color = Color::new(0.0, 1.0, 0.8);
    pub const PURPLE: Color = Color::new(0.8, 0.0, 1.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.3);
    pub const ORANGE: Color = Color::new(1.0, 0.5, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Whether every channel lies in [0, 1]
    pub fn is_valid(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert to 8-bit RGB, rounding each channel
    pub fn to_rgb8(self) -> [u8; 3] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }
}

impl From<[f32; 3]> for Color {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// Ordered, non-empty list of colors with a cyclic selection.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
    current: usize,
}

impl Palette {
    /// Create a palette. Fails on an empty list or an out-of-range channel.
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        if colors.is_empty() {
            return Err(Error::InvalidConfig("color palette is empty".into()));
        }
        if let Some((i, c)) = colors.iter().enumerate().find(|(_, c)| !c.is_valid()) {
            return Err(Error::InvalidConfig(format!(
                "palette color {} has a channel outside [0, 1]: {:?}",
                i, c
            )));
        }
        Ok(Self { colors, current: 0 })
    }

    /// The active color
    pub fn current(&self) -> Color {
        self.colors[self.current]
    }

    pub fn index(&self) -> usize {
        self.current
    }

    /// Advance to the next color, wrapping after the last entry
    pub fn cycle(&mut self) -> Color {
        self.current = (self.current + 1) % self.colors.len();
        self.current()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: default_colors(),
            current: 0,
        }
    }
}

/// The five hologram colors, neon blue first
pub fn default_colors() -> Vec<Color> {
    vec![
        Color::NEON_BLUE,
        Color::CYAN,
        Color::PURPLE,
        Color::GREEN,
        Color::ORANGE,
    ]
}
