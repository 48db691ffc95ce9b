// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens: palette, spacing, sizing, typography.

use iced::Color;

pub mod palette {
    use super::Color;

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

/// Spacing scale (8px baseline grid).
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    pub const FLASH_WIDTH: f32 = 340.0;
    pub const FORM_WIDTH: f32 = 520.0;
}

/// Font size scale.
pub mod typography {
    pub const CAPTION: u32 = 12;
    pub const BODY: u32 = 14;
    pub const TITLE: u32 = 24;
}

pub mod radius {
    pub const MD: f32 = 6.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}
