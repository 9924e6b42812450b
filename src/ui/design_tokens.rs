// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens: palette, opacity, spacing, sizing, typography,
//! radii, and shadows. Components never hard-code raw values; they pull from
//! here so the gallery, modal, and toasts stay visually consistent.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.45, 0.5);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.78);

    // Night-sky surfaces
    pub const SURFACE_900: Color = Color::from_rgb(0.05, 0.06, 0.1);
    pub const SURFACE_700: Color = Color::from_rgb(0.1, 0.12, 0.18);
    pub const SURFACE_500: Color = Color::from_rgb(0.16, 0.18, 0.26);

    // Brand colors (indigo scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.45, 0.55, 0.95);
    pub const PRIMARY_500: Color = Color::from_rgb(0.35, 0.45, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.25, 0.35, 0.8);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Width of one gallery card.
    pub const CARD_WIDTH: f32 = 260.0;

    /// Height reserved for a card's thumbnail, loaded or not.
    pub const THUMB_HEIGHT: f32 = 170.0;

    /// Date input field width (fits `YYYY-MM-DD` with room to edit).
    pub const DATE_INPUT_WIDTH: f32 = 140.0;

    /// Upper bound on the modal card's width.
    pub const MODAL_MAX_WIDTH: f32 = 640.0;

    /// Height of the modal's image region.
    pub const MODAL_IMAGE_HEIGHT: f32 = 320.0;

    /// Height of the modal's scrolling explanation region.
    pub const MODAL_TEXT_HEIGHT: f32 = 160.0;

    /// Toast card width.
    pub const TOAST_WIDTH: f32 = 320.0;

    /// Large glyph used by the gallery placeholders.
    pub const PLACEHOLDER_GLYPH: f32 = 48.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Modal title.
    pub const TITLE_MD: f32 = 20.0;

    /// Card titles, section labels.
    pub const TITLE_SM: f32 = 16.0;

    /// Most UI text.
    pub const BODY: f32 = 14.0;

    /// Dates, hints, toast text.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > opacity::OVERLAY_SUBTLE);
    assert!(opacity::OVERLAY_STRONG > opacity::OVERLAY_MEDIUM);

    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::MODAL_MAX_WIDTH > sizing::CARD_WIDTH);
    assert!(sizing::THUMB_HEIGHT < sizing::MODAL_IMAGE_HEIGHT);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }
}
