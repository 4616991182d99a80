// SPDX-License-Identifier: MPL-2.0
//! Carousel component encapsulating state and update logic.

use crate::slider::{
    Direction, RotationEvent, Slide, SlideDeck, SlideRotation, SliderOptions, SwipeTracker,
};
use iced::{event, keyboard, touch, window, Subscription};
use std::time::Instant;

/// Messages emitted by carousel widgets and routed raw events.
#[derive(Debug, Clone)]
pub enum Message {
    Previous,
    Next,
    GoTo(usize),
    Play,
    Pause,
    /// Pointer entered the carousel area.
    HoverEnter,
    /// Pointer left the carousel area.
    HoverExit,
    /// Frame wake-up while timers are pending.
    Frame(Instant),
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
}

/// A deck together with the rotation that cycles through it.
#[derive(Debug)]
pub struct State {
    deck: SlideDeck,
    rotation: SlideRotation,
    swipe: SwipeTracker,
}

impl State {
    #[must_use]
    pub fn new(deck: SlideDeck, options: SliderOptions, now: Instant) -> Self {
        let rotation = SlideRotation::new(deck.len(), options, now);
        Self {
            deck,
            rotation,
            swipe: SwipeTracker::new(),
        }
    }

    #[must_use]
    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    #[must_use]
    pub fn rotation(&self) -> &SlideRotation {
        &self.rotation
    }

    /// The slide currently on display, if the deck is not empty.
    #[must_use]
    pub fn current_slide(&self) -> Option<&Slide> {
        self.deck.get(self.rotation.current_index())
    }

    /// Applies `message`; `now` is the clock for everything but frame wake-ups,
    /// which carry their own timestamp.
    pub fn handle_message(&mut self, message: Message, now: Instant) -> Vec<RotationEvent> {
        match message {
            Message::Previous => {
                self.rotation.advance(Direction::Previous, now);
            }
            Message::Next => {
                self.rotation.advance(Direction::Next, now);
            }
            Message::GoTo(index) => {
                self.rotation.go_to(index, now);
            }
            Message::Play => self.rotation.play(now),
            Message::Pause => self.rotation.pause(),
            Message::HoverEnter => self.rotation.set_hovered(true, now),
            Message::HoverExit => self.rotation.set_hovered(false, now),
            Message::Frame(at) => return self.rotation.tick(at),
            Message::RawEvent { event, .. } => self.handle_raw_event(event, now),
        }
        Vec::new()
    }

    fn handle_raw_event(&mut self, event: event::Event, now: Instant) {
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::ArrowLeft),
                ..
            }) => {
                self.rotation.advance(Direction::Previous, now);
            }
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::ArrowRight),
                ..
            }) => {
                self.rotation.advance(Direction::Next, now);
            }
            event::Event::Touch(touch_event) => match touch_event {
                touch::Event::FingerPressed { id, position } => self.swipe.press(id.0, position.x),
                touch::Event::FingerLifted { id, position } => {
                    if let Some(direction) = self.swipe.lift(id.0, position.x) {
                        self.rotation.advance(direction, now);
                    }
                }
                touch::Event::FingerLost { id, .. } => self.swipe.lost(id.0),
                _ => {}
            },
            event::Event::Window(window::Event::Focused) => self.rotation.set_hidden(false, now),
            event::Event::Window(window::Event::Unfocused) => self.rotation.set_hidden(true, now),
            _ => {}
        }
    }

    /// Frame wake-ups while the rotation has pending timers.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.rotation.wants_frames() {
            window::frames().map(Message::Frame)
        } else {
            Subscription::none()
        }
    }

    /// Stops every timer; the carousel stays frozen on its current slide.
    pub fn teardown(&mut self) {
        self.rotation.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::slider::{AutoplayDelay, TransitionDuration};
    use iced::Point;
    use std::time::Duration;

    const DECK: &str = r##"
[[slides]]
title = "One"
gradient = ["#000000", "#111111"]

[[slides]]
title = "Two"
gradient = ["#222222", "#333333"]

[[slides]]
title = "Three"
gradient = ["#444444", "#555555"]
"##;

    fn state(autoplay: bool, now: Instant) -> State {
        let deck = SlideDeck::from_toml_str(DECK).expect("parse deck");
        let options = SliderOptions {
            autoplay,
            autoplay_delay: AutoplayDelay::from_millis(5000),
            transition_duration: TransitionDuration::from_millis(600),
        };
        State::new(deck, options, now)
    }

    fn raw(event: event::Event) -> Message {
        Message::RawEvent {
            window: window::Id::unique(),
            event,
        }
    }

    fn key(named: keyboard::key::Named, code: keyboard::key::Code) -> Message {
        raw(event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            modified_key: keyboard::Key::Named(named),
            physical_key: keyboard::key::Physical::Code(code),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
            repeat: false,
        }))
    }

    fn finger(pressed: bool, id: u64, x: f32) -> Message {
        let position = Point::new(x, 10.0);
        let id = touch::Finger(id);
        raw(event::Event::Touch(if pressed {
            touch::Event::FingerPressed { id, position }
        } else {
            touch::Event::FingerLifted { id, position }
        }))
    }

    fn settle(carousel: &mut State, from: Instant) {
        carousel.handle_message(Message::Frame(from + Duration::from_millis(700)), from);
    }

    #[test]
    fn arrow_keys_navigate() {
        let t0 = Instant::now();
        let mut carousel = state(false, t0);

        carousel.handle_message(
            key(keyboard::key::Named::ArrowRight, keyboard::key::Code::ArrowRight),
            t0,
        );
        settle(&mut carousel, t0);
        assert_eq!(carousel.rotation().current_index(), 1);

        let t1 = t0 + Duration::from_secs(1);
        carousel.handle_message(
            key(keyboard::key::Named::ArrowLeft, keyboard::key::Code::ArrowLeft),
            t1,
        );
        settle(&mut carousel, t1);
        assert_eq!(carousel.rotation().current_index(), 0);
    }

    #[test]
    fn short_swipe_does_nothing() {
        let t0 = Instant::now();
        let mut carousel = state(false, t0);
        carousel.handle_message(finger(true, 1, 200.0), t0);
        carousel.handle_message(finger(false, 1, 170.0), t0);
        assert!(!carousel.rotation().is_animating());
    }

    #[test]
    fn long_swipe_left_goes_to_next() {
        let t0 = Instant::now();
        let mut carousel = state(false, t0);
        carousel.handle_message(finger(true, 1, 300.0), t0);
        carousel.handle_message(finger(false, 1, 100.0), t0);
        settle(&mut carousel, t0);
        assert_eq!(carousel.rotation().current_index(), 1);
    }

    #[test]
    fn long_swipe_right_goes_to_previous() {
        let t0 = Instant::now();
        let mut carousel = state(false, t0);
        carousel.handle_message(finger(true, 4, 100.0), t0);
        carousel.handle_message(finger(false, 4, 300.0), t0);
        settle(&mut carousel, t0);
        assert_eq!(carousel.rotation().current_index(), 2);
    }

    #[test]
    fn focus_events_drive_visibility() {
        let t0 = Instant::now();
        let mut carousel = state(true, t0);

        carousel.handle_message(raw(event::Event::Window(window::Event::Unfocused)), t0);
        assert!(carousel.rotation().is_hidden());
        assert!(!carousel.rotation().is_autoplay_running());

        carousel.handle_message(raw(event::Event::Window(window::Event::Focused)), t0);
        assert!(carousel.rotation().is_autoplay_running());
    }

    #[test]
    fn hover_messages_pause_and_resume() {
        let t0 = Instant::now();
        let mut carousel = state(true, t0);
        carousel.handle_message(Message::HoverEnter, t0);
        assert!(!carousel.rotation().is_autoplay_running());
        carousel.handle_message(Message::HoverExit, t0);
        assert!(carousel.rotation().is_autoplay_running());
    }

    #[test]
    fn frame_messages_return_rotation_events() {
        let t0 = Instant::now();
        let mut carousel = state(true, t0);
        let events = carousel.handle_message(Message::Frame(t0 + Duration::from_millis(5100)), t0);
        assert_eq!(
            events,
            vec![
                RotationEvent::AutoplayFired,
                RotationEvent::SlideChanged { from: 0, to: 1 },
            ]
        );
        assert_eq!(
            carousel.current_slide().map(|slide| slide.title.as_str()),
            Some("Two")
        );
    }

    #[test]
    fn dot_press_jumps_to_slide() {
        let t0 = Instant::now();
        let mut carousel = state(false, t0);
        carousel.handle_message(Message::GoTo(2), t0);
        settle(&mut carousel, t0);
        assert_eq!(carousel.rotation().current_index(), 2);
    }

    #[test]
    fn play_and_pause_toggle_autoplay() {
        let t0 = Instant::now();
        let mut carousel = state(false, t0);
        carousel.handle_message(Message::Play, t0);
        assert!(carousel.rotation().is_autoplay_running());
        carousel.handle_message(Message::Pause, t0);
        assert!(!carousel.rotation().autoplay_enabled());
    }

    #[test]
    fn empty_deck_has_no_current_slide() {
        let t0 = Instant::now();
        let mut carousel = State::new(SlideDeck::default(), SliderOptions::default(), t0);
        carousel.handle_message(Message::Next, t0);
        assert!(carousel.current_slide().is_none());
        assert!(carousel.rotation().is_inert());
    }

    #[test]
    fn teardown_freezes_carousel() {
        let t0 = Instant::now();
        let mut carousel = state(true, t0);
        carousel.teardown();
        let events =
            carousel.handle_message(Message::Frame(t0 + Duration::from_secs(60)), t0);
        assert!(events.is_empty());
        assert_eq!(carousel.rotation().current_index(), 0);
    }
}
