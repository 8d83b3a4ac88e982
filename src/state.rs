//! Page-wide animation state.

use serde::Serialize;

use crate::constants::DEFAULT_BOX_COLORS;

/// Shared record owned by the controller.
///
/// `all_animations_running` is advisory: start/stop/reset write it and the
/// diagnostics read it, nothing else branches on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationState {
    /// Last value requested by start-all/stop-all
    pub all_animations_running: bool,
    /// Stylesheet colors of the demo cards
    pub box_colors: Vec<String>,
}

impl AnimationState {
    /// JSON form used by the initialization log line.
    pub fn to_json(&self) -> String {
        // Serializing a bool and a list of strings cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            all_animations_running: true,
            box_colors: DEFAULT_BOX_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}
