//! Palette and style helpers for the gallery chrome.

use iced::{
    Background, Border, Color, Shadow, Theme, theme,
    widget::container,
};

/// Dark gallery palette with white indicator accents.
#[derive(Debug, Clone, Copy)]
pub struct GalleryTheme;

impl GalleryTheme {
    // Surfaces
    pub const BACKDROP: Color = Color::from_rgb(0.04, 0.04, 0.05); // #0A0A0D
    pub const PLACEHOLDER_BG: Color = Color::from_rgb(0.10, 0.10, 0.11); // #1A1A1C

    // Indicator dots
    pub const DOT_ACTIVE: Color = Color::from_rgb(1.0, 1.0, 1.0); // #FFFFFF
    pub const DOT_INACTIVE: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.35);

    // Busy spinner
    pub const SPINNER: Color = Color::from_rgb(0.85, 0.85, 0.88);

    // Text
    pub const TEXT_PRIMARY: Color = Color::from_rgb(1.0, 1.0, 1.0);
    pub const TEXT_DIMMED: Color = Color::from_rgb(0.5, 0.5, 0.5);

    /// Application theme matching the gallery palette.
    pub fn theme() -> Theme {
        let mut palette = theme::Palette::DARK;
        palette.background = Self::BACKDROP;
        palette.text = Self::TEXT_PRIMARY;

        Theme::custom("Galerie".to_string(), palette)
    }
}

/// Style for a cell that is still waiting for its image.
pub fn placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(GalleryTheme::TEXT_DIMMED),
        background: Some(Background::Color(GalleryTheme::PLACEHOLDER_BG)),
        border: Border::default(),
        shadow: Shadow::default(),
    }
}

/// Style for the clipped page frame around each cell.
pub fn cell_frame(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: None,
        background: Some(Background::Color(GalleryTheme::BACKDROP)),
        border: Border::default(),
        shadow: Shadow::default(),
    }
}

/// Style for one indicator dot.
pub fn dot(active: bool, diameter: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        text_color: None,
        background: Some(Background::Color(if active {
            GalleryTheme::DOT_ACTIVE
        } else {
            GalleryTheme::DOT_INACTIVE
        })),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: (diameter / 2.0).into(),
        },
        shadow: Shadow::default(),
    }
}
