//! Application message types.
//!
//! Every control click is turned into a [`Message`] before anything happens,
//! so the handlers can be driven without a live page.

/// Actions a control click can request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Flip play/pause on one card's box
    ToggleAnimation {
        /// Id of the card
        target: String,
    },
    /// Random palette color on one card's box
    ChangeColor {
        /// Id of the card
        target: String,
    },
    /// Run every box
    StartAll,
    /// Pause every box
    StopAll,
    /// Clear all play state, colors and effects
    ResetAll,
    /// Apply the selected effect to the interactive box
    ApplyAnimation,
    /// Add the duration and delay inputs and show the total
    CalculateTiming,
}

impl Message {
    /// Toggle message for `target`.
    pub fn toggle(target: impl Into<String>) -> Self {
        Self::ToggleAnimation {
            target: target.into(),
        }
    }

    /// Color message for `target`.
    pub fn change_color(target: impl Into<String>) -> Self {
        Self::ChangeColor {
            target: target.into(),
        }
    }
}
