//! Running/paused membership of an animation box.

use crate::constants::{PAUSED_CLASS, RUNNING_CLASS};

/// Whether a box's animation plays.
///
/// A box carrying neither class is treated as running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayState {
    /// Animation plays
    Running,
    /// Animation is frozen
    Paused,
}

impl PlayState {
    /// State requested by a start/stop control.
    pub fn from_running(running: bool) -> Self {
        if running { Self::Running } else { Self::Paused }
    }

    /// State implied by a box's `paused` class membership.
    pub fn from_paused_class(has_paused: bool) -> Self {
        if has_paused { Self::Paused } else { Self::Running }
    }

    /// Class that marks this state.
    pub fn class(self) -> &'static str {
        match self {
            Self::Running => RUNNING_CLASS,
            Self::Paused => PAUSED_CLASS,
        }
    }

    /// Class that must be removed when entering this state.
    pub fn opposite_class(self) -> &'static str {
        self.toggled().class()
    }

    /// The other state.
    pub fn toggled(self) -> Self {
        match self {
            Self::Running => Self::Paused,
            Self::Paused => Self::Running,
        }
    }

    /// True for [`PlayState::Running`].
    pub fn is_running(self) -> bool {
        self == Self::Running
    }

    /// Word used in diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Paused => "paused",
        }
    }
}
