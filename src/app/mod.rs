// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct wires the carousel to localization and persisted
//! preferences, and owns the window lifecycle: a close request tears the
//! carousel down before the window goes away.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::slider::{SlideDeck, SliderOptions};
use crate::ui::carousel;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    carousel: carousel::State,
    /// Resolved once at startup; `System` detection is not free.
    theme: Theme,
    /// Message key of a startup warning still shown to the user.
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("slides", &self.carousel.deck().len())
            .field("current", &self.carousel.rotation().current_index())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 360;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings.
///
/// Close requests are delivered to `update` instead of closing the window
/// directly, so the carousel can stop its timers first.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires the boot function to be Fn; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Resolves carousel options from the `[slider]` section and CLI overrides.
#[must_use]
pub fn slider_options(config: &Config, flags: &Flags) -> SliderOptions {
    let mut slider = config.slider.clone();
    if flags.no_autoplay {
        slider.autoplay = Some(false);
    }
    if let Some(ms) = flags.autoplay_delay_ms {
        slider.autoplay_delay_ms = Some(ms);
    }
    if let Some(ms) = flags.transition_duration_ms {
        slider.transition_duration_ms = Some(ms);
    }
    slider.options()
}

impl App {
    /// Loads preferences and the deck, then starts the carousel.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        (
            Self::with_config(flags, &config, config_warning, Instant::now()),
            Task::none(),
        )
    }

    /// Builds the application from already-loaded preferences.
    fn with_config(
        flags: Flags,
        config: &Config,
        config_warning: Option<String>,
        now: Instant,
    ) -> Self {
        let i18n = I18n::new(flags.lang.clone(), config);
        let options = slider_options(config, &flags);
        let (deck, deck_warning) = SlideDeck::locate(flags.deck_path.as_deref());
        log::info!(
            "Starting carousel with {} slides (autoplay: {})",
            deck.len(),
            options.autoplay
        );

        Self {
            i18n,
            carousel: carousel::State::new(deck, options, now),
            theme: config.general.theme_mode.to_theme(),
            notice: config_warning.or(deck_warning),
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.carousel.current_slide() {
            Some(slide) => format!("{} - {app_name}", slide.title),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_carousel_subscription(&self.carousel),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.update_at(message, Instant::now())
    }

    fn update_at(&mut self, message: Message, now: Instant) -> Task<Message> {
        match message {
            Message::Carousel(carousel_message) => {
                for event in self.carousel.handle_message(carousel_message, now) {
                    log::trace!("Carousel: {:?}", event);
                }
                Task::none()
            }
            Message::WindowCloseRequested(id) => {
                self.carousel.teardown();
                window::close(id)
            }
            Message::DismissNotice => {
                self.notice = None;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            carousel: &self.carousel,
            notice: self.notice.as_deref(),
        })
    }
}
