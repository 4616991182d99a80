// SPDX-License-Identifier: MPL-2.0
//! Autoplay progress indicator style.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::progress_bar;
use iced::{Background, Border, Color, Theme};

/// Thin track with a brand-colored fill.
pub fn autoplay(theme: &Theme) -> progress_bar::Style {
    let track = if matches!(theme, Theme::Light) {
        palette::GRAY_200
    } else {
        palette::GRAY_700
    };

    progress_bar::Style {
        background: Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..track
        }),
        bar: Background::Color(palette::PRIMARY_500),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
    }
}
