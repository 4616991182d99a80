// SPDX-License-Identifier: MPL-2.0
//! Carousel rendering: the slide stage, arrows, pagination and progress.

use super::component::{Message, State};
use crate::domain::slider::PanelState;
use crate::i18n::fluent::I18n;
use crate::slider::Slide;
use crate::ui::design_tokens::{opacity, palette::WHITE, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, mouse_area, progress_bar, Column, Container, Row, Space, Stack, Text};
use iced::{Element, Length};

/// Context required to render the carousel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Renders the carousel, wrapped in a hover-tracking area.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    if state.deck().is_empty() {
        return empty(ctx.i18n);
    }

    let content = Column::new()
        .spacing(spacing::SM)
        .push(stage(state, ctx.i18n))
        .push(progress(state))
        .push(controls(state, ctx.i18n));

    mouse_area(
        Container::new(content)
            .padding(spacing::LG)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .on_enter(Message::HoverEnter)
    .on_exit(Message::HoverExit)
    .into()
}

fn empty(i18n: &I18n) -> Element<'_, Message> {
    Container::new(Text::new(i18n.tr("slider-empty")).size(typography::BODY_LG))
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::empty_panel)
        .into()
}

fn stage<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let rotation = state.rotation();
    let mut stack = Stack::new().width(Length::Fill).height(Length::Fill);

    for (index, slide) in state.deck().iter().enumerate() {
        let panel_state = rotation.panel_state(index);
        if panel_state.is_displayed() {
            stack = stack.push(panel(slide, panel_state == PanelState::Exiting));
        }
    }

    let counter = i18n.tr_with_args(
        "slider-counter",
        &[
            ("current", &(rotation.current_index() + 1).to_string()),
            ("total", &rotation.slide_count().to_string()),
        ],
    );
    stack = stack.push(
        Container::new(
            Container::new(Text::new(counter).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::overlay::indicator(radius::FULL)),
        )
        .padding(spacing::MD)
        .width(Length::Fill)
        .align_x(Horizontal::Right),
    );

    if rotation.slide_count() > 1 {
        stack = stack
            .push(arrow("◀", Message::Previous, Horizontal::Left))
            .push(arrow("▶", Message::Next, Horizontal::Right));
    }

    stack.into()
}

fn panel(slide: &Slide, exiting: bool) -> Element<'_, Message> {
    let mut text_block = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(slide.title.as_str()).size(typography::TITLE_LG));
    if !slide.caption.is_empty() {
        text_block = text_block.push(Text::new(slide.caption.as_str()).size(typography::BODY_LG));
    }
    if let Some(action) = &slide.action {
        text_block = text_block.push(
            Container::new(Text::new(action.as_str()).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(styles::overlay::indicator(radius::SM)),
        );
    }

    let caption = Container::new(text_block)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::overlay::caption_scrim);

    Container::new(caption)
        .padding([spacing::XXL, spacing::XXL + sizing::ARROW_BUTTON])
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Bottom)
        .style(styles::container::slide_panel(slide.gradient, exiting))
        .into()
}

fn arrow(glyph: &'static str, message: Message, side: Horizontal) -> Element<'static, Message> {
    let arrow_button = button(Text::new(glyph).size(typography::BODY_LG))
        .padding(spacing::SM)
        .style(styles::button_overlay(
            WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press(message);

    Container::new(arrow_button)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(side)
        .align_y(Vertical::Center)
        .into()
}

fn progress(state: &State) -> Element<'_, Message> {
    progress_bar(0.0..=1.0, state.rotation().progress())
        .girth(sizing::PROGRESS_TRACK)
        .style(styles::progress::autoplay)
        .into()
}

fn controls<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let rotation = state.rotation();

    let dots = rotation
        .pagination()
        .enumerate()
        .fold(Row::new().spacing(spacing::XS).align_y(Vertical::Center), |row, (index, active)| {
            let width = if active {
                sizing::DOT_ACTIVE_WIDTH
            } else {
                sizing::DOT
            };
            row.push(
                button(Space::new())
                    .width(width)
                    .height(sizing::DOT)
                    .padding(0.0)
                    .style(styles::button::dot(active))
                    .on_press(Message::GoTo(index)),
            )
        });

    let (label, message) = if rotation.autoplay_enabled() {
        (i18n.tr("slider-pause"), Message::Pause)
    } else {
        (i18n.tr("slider-play"), Message::Play)
    };
    let toggle = button(Text::new(label).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .width(sizing::TOGGLE_WIDTH)
        .style(styles::button_primary)
        .on_press_maybe((rotation.slide_count() > 1).then_some(message));

    Row::new()
        .align_y(Vertical::Center)
        .push(dots)
        .push(Space::new().width(Length::Fill))
        .push(toggle)
        .into()
}
