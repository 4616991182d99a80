// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events are routed to the carousel as raw events; window close
//! requests are intercepted so the carousel can be torn down first.

use super::Message;
use crate::ui::carousel;
use iced::{event, window, Subscription};

/// Routes keyboard, touch and window focus events to the carousel.
///
/// Events already captured by a widget (a pressed button, for instance) are
/// not forwarded. Window events are always forwarded.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        if let event::Event::Window(window::Event::CloseRequested) = &event {
            return Some(Message::WindowCloseRequested(window_id));
        }

        let forward = matches!(
            event,
            event::Event::Window(window::Event::Focused | window::Event::Unfocused)
        ) || status == event::Status::Ignored;

        forward.then(move || {
            Message::Carousel(carousel::Message::RawEvent {
                window: window_id,
                event,
            })
        })
    })
}

/// Frame wake-ups requested by the carousel while its timers are pending.
pub fn create_carousel_subscription(carousel: &carousel::State) -> Subscription<Message> {
    carousel.subscription().map(Message::Carousel)
}
