// SPDX-License-Identifier: MPL-2.0
//! Slide transition state machine.
//!
//! A rotation is either `Idle` or `Transitioning` between two panels. A
//! transition first lets the outgoing panel play its exit styling, then
//! swaps the active panel and waits for the incoming one to settle.

/// Stage of an in-flight transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStage {
    /// The outgoing panel is still active and carries exit styling.
    Exiting,
    /// The incoming panel is active and settling.
    Settling,
}

/// Current transition state of a rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPhase {
    /// No transition in flight; autoplay may run.
    #[default]
    Idle,
    /// A slide change was accepted and has not completed yet.
    Transitioning {
        from: usize,
        to: usize,
        stage: TransitionStage,
    },
}

impl TransitionPhase {
    /// Returns true while a slide change is in flight.
    #[must_use]
    pub fn is_transitioning(self) -> bool {
        matches!(self, Self::Transitioning { .. })
    }

    /// Returns the panel currently carrying exit styling, if any.
    #[must_use]
    pub fn exiting_panel(self) -> Option<usize> {
        match self {
            Self::Transitioning {
                from,
                stage: TransitionStage::Exiting,
                ..
            } => Some(from),
            _ => None,
        }
    }

    /// Moves an `Exiting` transition to `Settling`. Other phases are unchanged.
    #[must_use]
    pub fn swapped(self) -> Self {
        match self {
            Self::Transitioning {
                from,
                to,
                stage: TransitionStage::Exiting,
            } => Self::Transitioning {
                from,
                to,
                stage: TransitionStage::Settling,
            },
            other => other,
        }
    }
}

/// Visual state of a single panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Inactive,
    Active,
    /// Still the current panel, but leaving.
    Exiting,
}

impl PanelState {
    /// Returns true if the panel is the one on display (including while exiting).
    #[must_use]
    pub fn is_displayed(self) -> bool {
        matches!(self, Self::Active | Self::Exiting)
    }
}
