//! Phase State Machine
//!
//! Gates whether the physics and collision systems run. Serving on start and
//! resume is applied by the simulation, which owns the ball.

use serde::{Deserialize, Serialize};

/// Game phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Paused,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseAction {
    Start,
    TogglePause,
}

impl PhaseAction {
    /// Parse an action string (for host interop)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "START" => Some(PhaseAction::Start),
            "TOGGLE_PAUSE" => Some(PhaseAction::TogglePause),
            _ => None,
        }
    }
}

/// Result of a phase transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    success: bool,
    from_state: Phase,
    to_state: Phase,
    action: PhaseAction,
}

impl TransitionResult {
    pub fn success(&self) -> bool {
        self.success
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn from_state(&self) -> Phase {
        self.from_state
    }

    pub fn to_state(&self) -> Phase {
        self.to_state
    }

    pub fn action(&self) -> PhaseAction {
        self.action
    }
}

/// Phase controller: `Idle -> Running <-> Paused`
#[derive(Debug, Clone, Default)]
pub struct PhaseController {
    state: Phase,
}

impl PhaseController {
    pub fn new() -> Self {
        Self { state: Phase::Idle }
    }

    /// Get current phase
    pub fn state(&self) -> Phase {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: PhaseAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: PhaseAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            tracing::debug!(?from_state, to_state = ?next_state, ?action, "phase transition");
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Get next phase for a given action (if valid)
    fn get_next_state(&self, action: PhaseAction) -> Option<Phase> {
        match (self.state, action) {
            (Phase::Idle, PhaseAction::Start) => Some(Phase::Running),
            (Phase::Running, PhaseAction::TogglePause) => Some(Phase::Paused),
            (Phase::Paused, PhaseAction::TogglePause) => Some(Phase::Running),
            // Start is one-shot; pausing needs a game in progress
            _ => None,
        }
    }

    /// Physics and collisions only run here
    pub fn is_running(&self) -> bool {
        self.state == Phase::Running
    }

    /// Advisory hint for the host: show the cursor unless play is live
    pub fn cursor_visible(&self) -> bool {
        !self.is_running()
    }

    /// Advisory hint for the host: the start control only matters before the first serve
    pub fn start_control_visible(&self) -> bool {
        self.state == Phase::Idle
    }
}
