//! Message handlers for the demo page.
//!
//! Each handler runs one controller operation and logs the outcome the way
//! the page reports it on the developer console.

use rand::Rng;

use crate::controller::{DemoController, calculate_total_time};
use crate::error::DemoError;
use crate::message::Message;
use crate::model::PlayState;
use crate::page::Page;
use crate::state::AnimationState;

/// Dispatch `msg` to the controller.
pub fn handle_message<P: Page, R: Rng>(
    msg: Message,
    controller: &mut DemoController<P>,
    rng: &mut R,
) -> Result<(), DemoError> {
    match msg {
        Message::ToggleAnimation { target } => handle_toggle(&target, controller),
        Message::ChangeColor { target } => handle_change_color(&target, controller, rng),
        Message::StartAll => handle_toggle_all(true, controller),
        Message::StopAll => handle_toggle_all(false, controller),
        Message::ResetAll => handle_reset(controller),
        Message::ApplyAnimation => handle_apply_animation(controller),
        Message::CalculateTiming => handle_calculate_timing(controller),
    }
}

/// Dispatch `msg` and log a failure instead of returning it.
///
/// A failed click leaves the page and the other controls untouched.
pub fn dispatch<P: Page, R: Rng>(msg: Message, controller: &mut DemoController<P>, rng: &mut R) {
    let description = format!("{:?}", msg);
    if let Err(e) = handle_message(msg, controller, rng) {
        log::warn!("{} failed: {}", description, e);
    }
}

fn toggle_line(target: &str, state: PlayState) -> String {
    format!("Animation for {} is now {}", target, state.label())
}

fn color_line(target: &str, color: &str) -> String {
    format!("Changed color of {} to {}", target, color)
}

fn toggle_all_line(running: bool) -> String {
    format!("All animations {}", if running { "started" } else { "paused" })
}

fn apply_line(effect: &str) -> String {
    format!("Applied {} animation to interactive box", effect)
}

fn timing_line(total: i64) -> String {
    format!("Calculated total animation time: {}ms", total)
}

fn state_line(state: &AnimationState) -> String {
    format!("Global animation state: {}", state.to_json())
}

const RESET_LINE: &str = "All animations reset";
const INITIALIZED_LINE: &str = "Interactive Web Page initialized";

fn handle_toggle<P: Page>(target: &str, controller: &mut DemoController<P>) -> Result<(), DemoError> {
    let running = controller.toggle_animation(target)?;
    log::info!("{}", toggle_line(target, PlayState::from_running(running)));
    Ok(())
}

fn handle_change_color<P: Page, R: Rng>(
    target: &str,
    controller: &mut DemoController<P>,
    rng: &mut R,
) -> Result<(), DemoError> {
    let color = controller.change_color(target, rng)?;
    log::info!("{}", color_line(target, &color));
    Ok(())
}

fn handle_toggle_all<P: Page>(
    should_run: bool,
    controller: &mut DemoController<P>,
) -> Result<(), DemoError> {
    let running = controller.toggle_all_animations(should_run)?;
    log::info!("{}", toggle_all_line(running));
    Ok(())
}

fn handle_reset<P: Page>(controller: &mut DemoController<P>) -> Result<(), DemoError> {
    if controller.reset_all_animations()? {
        log::info!("{}", RESET_LINE);
    }
    Ok(())
}

fn handle_apply_animation<P: Page>(controller: &mut DemoController<P>) -> Result<(), DemoError> {
    let effect = controller.selected_effect()?;
    if controller.apply_box_animation(&effect)? {
        log::info!("{}", apply_line(&effect));
    }
    Ok(())
}

fn handle_calculate_timing<P: Page>(controller: &mut DemoController<P>) -> Result<(), DemoError> {
    let (duration, delay) = controller.timing_inputs()?;
    let total = calculate_total_time(duration, delay);
    controller.show_total_time(total)?;
    log::info!("{}", timing_line(total));
    Ok(())
}

/// Log the startup lines.
pub fn log_initialized<P: Page>(controller: &DemoController<P>) {
    log::info!("{}", INITIALIZED_LINE);
    log::info!("{}", state_line(controller.state()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_lines() {
        assert_eq!(
            toggle_line("card-1", PlayState::Running),
            "Animation for card-1 is now running"
        );
        assert_eq!(
            toggle_line("card-2", PlayState::Paused),
            "Animation for card-2 is now paused"
        );
        assert_eq!(toggle_all_line(true), "All animations started");
        assert_eq!(toggle_all_line(false), "All animations paused");
    }

    #[test]
    fn test_operation_lines() {
        assert_eq!(
            color_line("card-3", "#ffd166"),
            "Changed color of card-3 to #ffd166"
        );
        assert_eq!(
            apply_line("swing"),
            "Applied swing animation to interactive box"
        );
        assert_eq!(timing_line(1250), "Calculated total animation time: 1250ms");
        assert_eq!(RESET_LINE, "All animations reset");
    }

    #[test]
    fn test_startup_lines() {
        assert_eq!(INITIALIZED_LINE, "Interactive Web Page initialized");
        assert_eq!(
            state_line(&AnimationState::default()),
            r##"Global animation state: {"allAnimationsRunning":true,"boxColors":["#4cb5ae","#4a6fa5","#166088"]}"##
        );

        let stopped = AnimationState {
            all_animations_running: false,
            ..AnimationState::default()
        };
        assert!(state_line(&stopped).contains(r#""allAnimationsRunning":false"#));
    }
}
