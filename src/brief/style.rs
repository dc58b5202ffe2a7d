//! Palette and type styles for the onboarding brief.

/// Face within the Helvetica family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontKind {
    Regular,
    Bold,
    Oblique,
}

/// 8-bit RGB triple.
pub type Rgb8 = (u8, u8, u8);

pub const DARK: Rgb8 = (30, 30, 30);
/// Gold.
pub const ACCENT: Rgb8 = (212, 175, 55);
pub const GRAY: Rgb8 = (100, 100, 100);
pub const LIGHT_BG: Rgb8 = (245, 245, 245);

/// Face, size and color for one run of text.
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub font: FontKind,
    /// Point size.
    pub size: f32,
    pub color: Rgb8,
}

impl TextStyle {
    pub const fn new(font: FontKind, size: f32, color: Rgb8) -> Self {
        Self { font, size, color }
    }

    pub const fn regular(size: f32, color: Rgb8) -> Self {
        Self::new(FontKind::Regular, size, color)
    }

    pub const fn bold(size: f32, color: Rgb8) -> Self {
        Self::new(FontKind::Bold, size, color)
    }

    pub const fn oblique(size: f32, color: Rgb8) -> Self {
        Self::new(FontKind::Oblique, size, color)
    }
}
