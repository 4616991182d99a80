// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the carousel and the window chrome around it.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Carousel control sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_slides::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Scrim behind slide captions
let scrim = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

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
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Panel that is leaving the stage.
    pub const EXITING_PANEL: f32 = 0.6;

    /// Pagination dot that is not current.
    pub const DOT_INACTIVE: f32 = 0.45;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Previous/next arrow buttons - WCAG 2.5.5 compliant (44x44 minimum)
    pub const ARROW_BUTTON: f32 = 44.0;

    /// Pagination dot diameter.
    pub const DOT: f32 = 10.0;

    /// Width of the current pagination dot (pill).
    pub const DOT_ACTIVE_WIDTH: f32 = 28.0;

    /// Height of the autoplay progress track.
    pub const PROGRESS_TRACK: f32 = 4.0;

    /// Width of the play/pause toggle.
    pub const TOGGLE_WIDTH: f32 = 96.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Slide headline.
    pub const TITLE_LG: f32 = 36.0;

    /// Slide caption.
    pub const BODY_LG: f32 = 18.0;

    /// Standard body - buttons, labels
    pub const BODY: f32 = 14.0;

    /// Caption - slide counter
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_SUBTLE > 0.0);
    assert!(opacity::OVERLAY_MEDIUM > opacity::OVERLAY_SUBTLE);
    assert!(opacity::OVERLAY_STRONG > opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_PRESSED < opacity::OPAQUE);
    assert!(opacity::EXITING_PANEL > 0.0 && opacity::EXITING_PANEL < 1.0);
    assert!(opacity::DOT_INACTIVE > 0.0 && opacity::DOT_INACTIVE < 1.0);

    // Sizing validation
    assert!(sizing::DOT_ACTIVE_WIDTH > sizing::DOT);
    assert!(sizing::ARROW_BUTTON >= 44.0);
    assert!(sizing::PROGRESS_TRACK > 0.0);

    // Typography validation
    assert!(typography::TITLE_LG > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Color validation
    assert!(palette::PRIMARY_500.r >= 0.0 && palette::PRIMARY_500.r <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn active_dot_is_a_pill_of_the_inactive_dot() {
        assert!(sizing::DOT_ACTIVE_WIDTH / sizing::DOT > 2.0);
    }

    #[test]
    fn radius_scale_is_ordered() {
        assert_eq!(radius::NONE, 0.0);
        assert!(radius::SM < radius::LG);
        assert!(radius::LG < radius::FULL);
    }

    #[test]
    fn overlay_opacities_stay_translucent() {
        for alpha in [
            opacity::OVERLAY_SUBTLE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_STRONG,
            opacity::OVERLAY_HOVER,
            opacity::OVERLAY_PRESSED,
        ] {
            assert!(alpha > 0.0 && alpha < opacity::OPAQUE);
        }
    }
}
