// SPDX-License-Identifier: MPL-2.0
//! Slide rotation controller.
//!
//! `SlideRotation` cycles the current panel among `N` panels, on a repeating
//! autoplay timer and on demand, while keeping the pagination in sync and
//! refusing overlapping transitions.
//!
//! The controller never reads a clock. Every operation receives `now`, and
//! the host calls [`SlideRotation::tick`] on each frame while
//! [`SlideRotation::wants_frames`] is true. `tick` replays every due event in
//! chronological order at its own due time, so a late wake-up produces the
//! same state as a punctual one.
//!
//! Autoplay and the progress indicator are started and stopped as a unit.
//! Both are stopped for the whole of a transition and come back afterwards
//! only when autoplay is enabled, the window is visible and the pointer is
//! not over the carousel.

use super::input::Direction;
use super::schedule::{FrameTask, OneShotTask, RepeatingTask};
use crate::config::EXIT_PHASE_MS;
use crate::domain::slider::{
    AutoplayDelay, PanelState, TransitionDuration, TransitionPhase, TransitionStage,
};
use std::time::{Duration, Instant};

/// Options recognized at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderOptions {
    /// Rotate automatically.
    pub autoplay: bool,
    /// Interval between automatic advances.
    pub autoplay_delay: AutoplayDelay,
    /// Settle time after the swap.
    pub transition_duration: TransitionDuration,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            autoplay: crate::config::DEFAULT_AUTOPLAY,
            autoplay_delay: AutoplayDelay::default(),
            transition_duration: TransitionDuration::default(),
        }
    }
}

/// Something observable that happened during [`SlideRotation::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationEvent {
    /// The autoplay timer fired and requested the next panel.
    AutoplayFired,
    /// The active panel changed.
    SlideChanged { from: usize, to: usize },
    /// A transition completed; new requests are accepted again.
    TransitionSettled { index: usize },
}

#[derive(Debug, Clone, Copy)]
enum Wake {
    Autoplay,
    Transition,
}

/// Timer-driven, single-owner slide rotation state machine.
#[derive(Debug)]
pub struct SlideRotation {
    slide_count: usize,
    options: SliderOptions,
    current: usize,
    phase: TransitionPhase,
    autoplay_timer: Option<RepeatingTask>,
    progress_task: Option<FrameTask>,
    transition_timer: Option<OneShotTask>,
    progress_fill: f32,
    hovered: bool,
    hidden: bool,
    torn_down: bool,
}

impl SlideRotation {
    /// Creates a rotation over `slide_count` panels, starting at panel 0.
    ///
    /// With zero panels the rotation is inert. Autoplay starts right away
    /// when enabled.
    #[must_use]
    pub fn new(slide_count: usize, options: SliderOptions, now: Instant) -> Self {
        let mut rotation = Self {
            slide_count,
            options,
            current: 0,
            phase: TransitionPhase::Idle,
            autoplay_timer: None,
            progress_task: None,
            transition_timer: None,
            progress_fill: 0.0,
            hovered: false,
            hidden: false,
            torn_down: false,
        };
        if rotation.options.autoplay {
            rotation.start_autoplay(now);
        }
        rotation
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns true when no operation has any effect.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.slide_count == 0 || self.torn_down
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn options(&self) -> SliderOptions {
        self.options
    }

    #[must_use]
    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// True between an accepted change request and its visual completion.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.phase.is_transitioning()
    }

    /// Whether autoplay is configured on (it may still be suspended).
    #[must_use]
    pub fn autoplay_enabled(&self) -> bool {
        self.options.autoplay
    }

    /// Whether the autoplay timer is currently live.
    #[must_use]
    pub fn is_autoplay_running(&self) -> bool {
        self.autoplay_timer.is_some()
    }

    /// When the autoplay timer fires next, if it is live.
    #[must_use]
    pub fn next_autoplay_at(&self) -> Option<Instant> {
        self.autoplay_timer.as_ref().map(RepeatingTask::next_due)
    }

    /// Start timestamp of the running progress cycle.
    #[must_use]
    pub fn progress_started_at(&self) -> Option<Instant> {
        self.progress_task.as_ref().map(FrameTask::started_at)
    }

    /// Progress indicator fill in `[0, 1]`, as of the last refresh.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress_fill
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Visual state of panel `index`.
    #[must_use]
    pub fn panel_state(&self, index: usize) -> PanelState {
        if self.phase.exiting_panel() == Some(index) {
            PanelState::Exiting
        } else if index == self.current && index < self.slide_count {
            PanelState::Active
        } else {
            PanelState::Inactive
        }
    }

    /// Pagination markers, one per panel; exactly one is active.
    pub fn pagination(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.slide_count).map(move |index| index == self.current)
    }

    /// Whether the host should keep delivering frame wake-ups.
    #[must_use]
    pub fn wants_frames(&self) -> bool {
        !self.is_inert()
            && (self.autoplay_timer.is_some()
                || self.progress_task.is_some()
                || self.transition_timer.is_some())
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        let autoplay = self.autoplay_timer.as_ref().map(RepeatingTask::next_due);
        let transition = self.transition_timer.as_ref().map(OneShotTask::due);
        match (autoplay, transition) {
            (Some(a), Some(t)) => Some(a.min(t)),
            (a, t) => a.or(t),
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Requests the neighbouring panel in `direction`, wrapping around.
    ///
    /// Returns whether the request was accepted.
    pub fn advance(&mut self, direction: Direction, now: Instant) -> bool {
        if self.is_inert() || self.is_animating() {
            return false;
        }
        let target = direction.step(self.current, self.slide_count);
        self.go_to(target, now)
    }

    /// Requests panel `index`.
    ///
    /// Ignored when `index` is current or out of range, or while another
    /// transition is in flight. Returns whether the request was accepted.
    pub fn go_to(&mut self, index: usize, now: Instant) -> bool {
        if self.is_inert() {
            return false;
        }
        if index >= self.slide_count {
            log::debug!(
                "Ignoring request for slide {} of {}",
                index,
                self.slide_count
            );
            return false;
        }
        if self.is_animating() {
            log::debug!("Dropping request for slide {}: transition in flight", index);
            return false;
        }
        if index == self.current {
            return false;
        }

        log::debug!("Slide transition {} -> {}", self.current, index);
        self.stop_autoplay();
        self.phase = TransitionPhase::Transitioning {
            from: self.current,
            to: index,
            stage: TransitionStage::Exiting,
        };
        self.transition_timer = Some(OneShotTask::new(
            Duration::from_millis(EXIT_PHASE_MS),
            now,
        ));
        true
    }

    // =========================================================================
    // Autoplay
    // =========================================================================

    /// (Re)starts the autoplay timer and a fresh progress cycle.
    ///
    /// Any running timer is cancelled first. Does nothing while a transition
    /// is in flight (the transition resumes autoplay when it settles) or when
    /// there is nothing to rotate to.
    pub fn start_autoplay(&mut self, now: Instant) {
        if self.is_inert() || self.slide_count < 2 || self.is_animating() {
            return;
        }
        self.stop_autoplay();
        let period = self.options.autoplay_delay.as_duration();
        self.autoplay_timer = Some(RepeatingTask::new(period, now));
        self.progress_task = Some(FrameTask::new(now));
        log::trace!("Autoplay started, next advance in {:?}", period);
    }

    /// Cancels the autoplay timer and the progress cycle, emptying the indicator.
    pub fn stop_autoplay(&mut self) {
        if self.autoplay_timer.take().is_some() {
            log::trace!("Autoplay stopped");
        }
        self.progress_task = None;
        self.progress_fill = 0.0;
    }

    /// Stops autoplay without changing whether it is enabled.
    pub fn suspend(&mut self) {
        self.stop_autoplay();
    }

    /// Restarts autoplay if it is enabled, no transition is in flight, the
    /// window is visible and the pointer is not over the carousel.
    pub fn resume(&mut self, now: Instant) {
        if self.options.autoplay && !self.is_animating() && !self.hidden && !self.hovered {
            self.start_autoplay(now);
        }
    }

    /// Enables autoplay and starts it when nothing holds it back.
    pub fn play(&mut self, now: Instant) {
        if self.is_inert() {
            return;
        }
        self.options.autoplay = true;
        self.resume(now);
    }

    /// Disables autoplay and stops it.
    pub fn pause(&mut self) {
        if self.is_inert() {
            return;
        }
        self.options.autoplay = false;
        self.stop_autoplay();
    }

    // =========================================================================
    // Interaction signals
    // =========================================================================

    /// Pointer entered (`true`) or left (`false`) the carousel.
    pub fn set_hovered(&mut self, hovered: bool, now: Instant) {
        if self.is_inert() || self.hovered == hovered {
            return;
        }
        self.hovered = hovered;
        if hovered {
            self.suspend();
        } else {
            self.resume(now);
        }
    }

    /// The window became hidden (`true`) or visible again (`false`).
    pub fn set_hidden(&mut self, hidden: bool, now: Instant) {
        if self.is_inert() || self.hidden == hidden {
            return;
        }
        self.hidden = hidden;
        if hidden {
            self.suspend();
        } else {
            self.resume(now);
        }
    }

    // =========================================================================
    // Host wake-ups
    // =========================================================================

    /// Runs every event due at or before `now`, then refreshes the progress fill.
    pub fn tick(&mut self, now: Instant) -> Vec<RotationEvent> {
        let mut events = Vec::new();
        if self.is_inert() {
            return events;
        }

        while let Some((wake, due)) = self.next_wake(now) {
            match wake {
                Wake::Transition => self.on_transition_due(due, &mut events),
                Wake::Autoplay => self.on_autoplay_due(&mut events),
            }
        }

        self.refresh_progress(now);
        events
    }

    /// Stops every timer, completes a pending swap, and makes the rotation inert.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        if let TransitionPhase::Transitioning { to, .. } = self.phase {
            self.current = to;
        }
        self.phase = TransitionPhase::Idle;
        self.transition_timer = None;
        self.stop_autoplay();
        self.torn_down = true;
        log::debug!("Slide rotation torn down on slide {}", self.current);
    }

    fn next_wake(&self, now: Instant) -> Option<(Wake, Instant)> {
        let transition = self
            .transition_timer
            .as_ref()
            .map(|task| (Wake::Transition, task.due()));
        let autoplay = self
            .autoplay_timer
            .as_ref()
            .map(|task| (Wake::Autoplay, task.next_due()));

        let earliest = match (transition, autoplay) {
            (Some(t), Some(a)) => Some(if a.1 < t.1 { a } else { t }),
            (t, a) => t.or(a),
        };
        earliest.filter(|(_, due)| *due <= now)
    }

    fn on_transition_due(&mut self, due: Instant, events: &mut Vec<RotationEvent>) {
        self.transition_timer = None;
        match self.phase {
            TransitionPhase::Transitioning {
                from,
                to,
                stage: TransitionStage::Exiting,
            } => {
                self.current = to;
                self.phase = self.phase.swapped();
                self.transition_timer = Some(OneShotTask::new(
                    self.options.transition_duration.as_duration(),
                    due,
                ));
                events.push(RotationEvent::SlideChanged { from, to });
            }
            TransitionPhase::Transitioning {
                to,
                stage: TransitionStage::Settling,
                ..
            } => {
                self.phase = TransitionPhase::Idle;
                events.push(RotationEvent::TransitionSettled { index: to });
                self.resume(due);
            }
            TransitionPhase::Idle => {}
        }
    }

    fn on_autoplay_due(&mut self, events: &mut Vec<RotationEvent>) {
        let Some(timer) = self.autoplay_timer.as_mut() else {
            return;
        };
        let due = timer.fire();
        events.push(RotationEvent::AutoplayFired);
        // The timer only lives while idle with two or more slides.
        self.advance(Direction::Next, due);
    }

    fn refresh_progress(&mut self, now: Instant) {
        let Some(task) = self.progress_task.as_ref() else {
            return;
        };
        let fraction = task.fraction(now, self.options.autoplay_delay);
        self.progress_fill = fraction;
        if fraction >= 1.0 {
            self.progress_task = None;
        }
    }
}
