// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::carousel::{self, ViewContext as CarouselViewContext};
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub carousel: &'a carousel::State,
    /// Message keys of startup warnings to show above the carousel.
    pub notice: Option<&'a str>,
}

/// Renders the notice banner (if any) above the carousel.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let carousel_view = carousel::view(
        ctx.carousel,
        CarouselViewContext { i18n: ctx.i18n },
    )
    .map(Message::Carousel);

    let mut column = Column::new().spacing(spacing::XS);
    if let Some(key) = ctx.notice {
        column = column.push(notice_banner(ctx.i18n, key));
    }
    column = column.push(carousel_view);

    Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn notice_banner<'a>(i18n: &'a I18n, key: &'a str) -> Element<'a, Message> {
    let row = Row::new()
        .align_y(Vertical::Center)
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr(key)).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new("×").size(typography::BODY))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button_primary)
                .on_press(Message::DismissNotice),
        );

    Container::new(row)
        .padding([spacing::XS, spacing::MD])
        .width(Length::Fill)
        .style(styles::overlay::indicator(radius::NONE))
        .into()
}
