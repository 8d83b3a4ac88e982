//! Global constants for the animation demo page

/// Class carried by every animated card surface
pub const ANIMATION_BOX_CLASS: &str = "animation-box";

/// Class marking a box whose animation plays
pub const RUNNING_CLASS: &str = "running";

/// Class marking a box whose animation is paused
pub const PAUSED_CLASS: &str = "paused";

/// Class of the per-card play/pause buttons
pub const TOGGLE_ANIMATION_CLASS: &str = "toggle-animation";

/// Class of the per-card color buttons
pub const CHANGE_COLOR_CLASS: &str = "change-color";

/// Attribute on card buttons naming the card they control
pub const DATA_TARGET_ATTR: &str = "data-target";

/// Element ids of the page's fixed controls.
pub mod ids {
    /// Box that receives the selectable effects
    pub const INTERACTIVE_BOX: &str = "interactive-box";
    /// Start every animation
    pub const START_ALL: &str = "start-all";
    /// Pause every animation
    pub const STOP_ALL: &str = "stop-all";
    /// Reset every box to its stylesheet defaults
    pub const RESET_ALL: &str = "reset-all";
    /// Apply the selected effect to the interactive box
    pub const APPLY_ANIMATION: &str = "apply-animation";
    /// Effect selector
    pub const ANIMATION_SELECT: &str = "animation-select";
    /// Compute duration + delay
    pub const CALCULATE_TIMING: &str = "calculate-timing";
    /// Duration input (ms)
    pub const DURATION_INPUT: &str = "duration-input";
    /// Delay input (ms)
    pub const DELAY_INPUT: &str = "delay-input";
    /// Where the computed total is shown
    pub const TIMING_RESULT: &str = "timing-result";
}

/// Box press feedback.
pub mod press {
    /// How long the pressed transform stays applied
    pub const FEEDBACK_MS: u64 = 300;
    /// Transform applied while pressed
    pub const TRANSFORM: &str = "scale(0.95)";
}

/// Colors drawn by the per-card color buttons
pub const DEFAULT_PALETTE: [&str; 5] = ["#4cb5ae", "#ff6b6b", "#ffd166", "#06d6a0", "#118ab2"];

/// Stylesheet colors of the three demo cards
pub const DEFAULT_BOX_COLORS: [&str; 3] = ["#4cb5ae", "#4a6fa5", "#166088"];

/// Effect classes the interactive box understands
pub const DEFAULT_EFFECTS: [&str; 4] = ["bounce", "shake", "flip", "swing"];

/// Number of cards in the native demo layout
pub const DEFAULT_CARD_COUNT: usize = 3;
