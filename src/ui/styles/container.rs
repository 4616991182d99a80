// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::slider::Rgb;
use crate::ui::design_tokens::{opacity, palette::WHITE, radius};
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Radians, Theme};
use std::f32::consts::FRAC_PI_4;

fn rgb_color(stop: Rgb, alpha: f32) -> Color {
    Color {
        a: alpha,
        ..Color::from_rgb8(stop.r, stop.g, stop.b)
    }
}

/// Slide panel painted with its diagonal gradient.
///
/// An exiting panel is drawn faded.
pub fn slide_panel(gradient: [Rgb; 2], exiting: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let alpha = if exiting {
            opacity::EXITING_PANEL
        } else {
            opacity::OPAQUE
        };
        let linear = Linear::new(Radians(FRAC_PI_4))
            .add_stop(0.0, rgb_color(gradient[0], alpha))
            .add_stop(1.0, rgb_color(gradient[1], alpha));

        container::Style {
            background: Some(Background::Gradient(linear.into())),
            text_color: Some(Color { a: alpha, ..WHITE }),
            border: Border {
                radius: radius::LG.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Placeholder surface shown when there is nothing to rotate.
///
/// Derived from the active Iced `Theme` background so it reads well in both
/// light and dark modes.
pub fn empty_panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STOPS: [Rgb; 2] = [Rgb { r: 0, g: 0, b: 0 }, Rgb { r: 255, g: 255, b: 255 }];

    #[test]
    fn slide_panel_uses_gradient_background() {
        let style = slide_panel(STOPS, false)(&Theme::Dark);
        assert!(matches!(style.background, Some(Background::Gradient(_))));
        assert_eq!(style.text_color, Some(WHITE));
    }

    #[test]
    fn exiting_panel_text_is_faded() {
        let style = slide_panel(STOPS, true)(&Theme::Dark);
        let text = style.text_color.expect("text color");
        assert!(text.a < 1.0);
    }
}
