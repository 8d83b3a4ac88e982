//! Demo page controller.
//!
//! Owns the page handle, the animation state record and the pending press
//! feedback tasks. Every operation is synchronous; a missing element is
//! reported before anything on the page changes.

use rand::Rng;
use web_time::{Duration, Instant};

use crate::config::DemoConfig;
use crate::constants::{ANIMATION_BOX_CLASS, ids};
use crate::error::{DemoError, PageError};
use crate::model::{EffectSet, Palette, PlayState};
use crate::page::{Page, StyleProperty};
use crate::scheduler::{Scheduler, TaskId};
use crate::state::AnimationState;

/// Work deferred until after a box press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredTask<E> {
    /// Drop the pressed transform from the element
    ClearTransform(E),
}

/// Sum of an animation's duration and delay, in milliseconds.
///
/// Saturates at the `i64` bounds instead of overflowing.
pub fn calculate_total_time(duration: i64, delay: i64) -> i64 {
    duration.saturating_add(delay)
}

/// Applies click actions to a [`Page`].
pub struct DemoController<P: Page> {
    page: P,
    state: AnimationState,
    palette: Palette,
    effects: EffectSet,
    press_feedback: Duration,
    press_transform: String,
    tasks: Scheduler<DeferredTask<P::Element>>,
}

impl<P: Page> DemoController<P> {
    /// Create a controller over `page` starting from `state`.
    pub fn new(page: P, state: AnimationState, config: &DemoConfig) -> Self {
        Self {
            page,
            state,
            palette: config.palette(),
            effects: config.effect_set(),
            press_feedback: config.press_feedback(),
            press_transform: config.press_transform.clone(),
            tasks: Scheduler::new(),
        }
    }

    /// The underlying page.
    pub fn page(&self) -> &P {
        &self.page
    }

    /// Mutable access to the underlying page.
    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    /// Current animation state record.
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Palette used by [`Self::change_color`].
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// How long a pressed box keeps its transform.
    pub fn press_feedback(&self) -> Duration {
        self.press_feedback
    }

    /// Effects cleared by [`Self::apply_box_animation`].
    pub fn effects(&self) -> &EffectSet {
        &self.effects
    }

    fn card_box(&self, target_id: &str) -> Result<P::Element, DemoError> {
        self.page
            .card_box(target_id)
            .ok_or_else(|| DemoError::missing(format!("#{target_id} .{ANIMATION_BOX_CLASS}")))
    }

    fn by_id(&self, id: &str) -> Result<P::Element, DemoError> {
        self.page
            .element_by_id(id)
            .ok_or_else(|| DemoError::missing(format!("#{id}")))
    }

    fn set_play_state(&mut self, element: &P::Element, state: PlayState) -> Result<(), DemoError> {
        self.page.remove_classes(element, &[state.opposite_class()])?;
        self.page.add_class(element, state.class())?;
        Ok(())
    }

    /// Flip the play state of the box inside card `target_id`.
    ///
    /// Returns `true` when the box is now running.
    pub fn toggle_animation(&mut self, target_id: &str) -> Result<bool, DemoError> {
        let element = self.card_box(target_id)?;
        let current = PlayState::from_paused_class(
            self.page.has_class(&element, PlayState::Paused.class()),
        );
        let next = current.toggled();
        self.set_play_state(&element, next)?;
        Ok(next.is_running())
    }

    /// Give the box inside card `target_id` a random palette color.
    pub fn change_color<R: Rng>(
        &mut self,
        target_id: &str,
        rng: &mut R,
    ) -> Result<String, DemoError> {
        let element = self.card_box(target_id)?;
        let color = self.palette.pick(rng).to_string();
        self.page
            .set_style(&element, StyleProperty::BackgroundColor, &color);
        Ok(color)
    }

    fn check_effects(&self) -> Result<(), DemoError> {
        for name in self.effects.names() {
            PageError::check_token(name)?;
        }
        Ok(())
    }

    /// Replace whatever effect the interactive box has with `effect_name`.
    ///
    /// Unknown names are applied as-is.
    pub fn apply_box_animation(&mut self, effect_name: &str) -> Result<bool, DemoError> {
        let element = self.by_id(ids::INTERACTIVE_BOX)?;
        PageError::check_token(effect_name)?;
        self.check_effects()?;
        if !self.effects.contains(effect_name) {
            log::debug!("Applying unrecognized effect '{}'", effect_name);
        }
        self.page.remove_classes(&element, &self.effects.as_strs())?;
        self.page.add_class(&element, effect_name)?;
        Ok(true)
    }

    /// Run or pause every box and record the choice.
    pub fn toggle_all_animations(&mut self, should_run: bool) -> Result<bool, DemoError> {
        let state = PlayState::from_running(should_run);
        for element in self.page.animation_boxes() {
            self.set_play_state(&element, state)?;
        }
        self.state.all_animations_running = should_run;
        Ok(should_run)
    }

    /// Return every box and the interactive box to their stylesheet state.
    ///
    /// Lookups and class names are checked first so a failure leaves the
    /// page and the running flag untouched.
    pub fn reset_all_animations(&mut self) -> Result<bool, DemoError> {
        let interactive = self.by_id(ids::INTERACTIVE_BOX)?;
        self.check_effects()?;
        let play_classes = [PlayState::Running.class(), PlayState::Paused.class()];

        for element in self.page.animation_boxes() {
            self.page.remove_classes(&element, &play_classes)?;
            self.page.set_style(&element, StyleProperty::Animation, "");
            self.page
                .set_style(&element, StyleProperty::BackgroundColor, "");
        }

        self.page
            .remove_classes(&interactive, &self.effects.as_strs())?;
        self.state.all_animations_running = true;
        Ok(true)
    }

    /// Shrink a clicked box and queue the transform reset.
    pub fn press_box(&mut self, element: &P::Element, now: Instant) -> TaskId {
        self.page
            .set_style(element, StyleProperty::Transform, &self.press_transform);
        self.tasks.schedule(
            now,
            self.press_feedback,
            DeferredTask::ClearTransform(element.clone()),
        )
    }

    /// Cancel a queued press reset. The transform stays applied.
    pub fn cancel_task(&mut self, id: TaskId) -> bool {
        self.tasks.cancel(id)
    }

    /// Run one queued task now, whatever its due time.
    pub fn finish_task(&mut self, id: TaskId) -> bool {
        match self.tasks.take(id) {
            Some(task) => {
                self.run_task(task);
                true
            }
            None => false,
        }
    }

    /// Run every task due at `now`. Returns how many ran.
    pub fn run_due(&mut self, now: Instant) -> usize {
        let due = self.tasks.take_due(now);
        let count = due.len();
        for task in due {
            self.run_task(task);
        }
        count
    }

    /// Number of queued tasks.
    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }

    fn run_task(&mut self, task: DeferredTask<P::Element>) {
        match task {
            DeferredTask::ClearTransform(element) => {
                self.page.set_style(&element, StyleProperty::Transform, "");
            }
        }
    }

    /// Effect currently chosen in the effect selector.
    pub fn selected_effect(&self) -> Result<String, DemoError> {
        let select = self.by_id(ids::ANIMATION_SELECT)?;
        Ok(self.page.value(&select))
    }

    /// Duration and delay inputs, coerced like `parseInt(..) || 0`.
    pub fn timing_inputs(&self) -> Result<(i64, i64), DemoError> {
        let duration = self.by_id(ids::DURATION_INPUT)?;
        let delay = self.by_id(ids::DELAY_INPUT)?;
        Ok((
            parse_int_or_zero(&self.page.value(&duration)),
            parse_int_or_zero(&self.page.value(&delay)),
        ))
    }

    /// Show the computed total in the result element.
    pub fn show_total_time(&mut self, total: i64) -> Result<(), DemoError> {
        let result = self.by_id(ids::TIMING_RESULT)?;
        self.page
            .set_text(&result, &format!("Total time: {total}ms"));
        Ok(())
    }
}

/// Leading integer of `input`, or 0 when there is none.
///
/// Skips leading whitespace and accepts one sign. A `0x`/`0X` prefix switches
/// to hexadecimal, otherwise the longest run of decimal digits is read.
/// Trailing garbage is ignored. Values past the `i64` range saturate.
pub fn parse_int_or_zero(input: &str) -> i64 {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let mut value: i64 = 0;
    for digit in rest.chars().map_while(|c| c.to_digit(radix)) {
        let digit = i64::from(digit);
        let shifted = value.saturating_mul(i64::from(radix));
        value = if negative {
            shifted.saturating_sub(digit)
        } else {
            shifted.saturating_add(digit)
        };
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_time() {
        assert_eq!(calculate_total_time(0, 0), 0);
        assert_eq!(calculate_total_time(1000, 250), 1250);
        assert_eq!(calculate_total_time(i64::MAX, 1), i64::MAX);
    }

    #[test]
    fn test_parse_int_like_js() {
        assert_eq!(parse_int_or_zero("500"), 500);
        assert_eq!(parse_int_or_zero("  42ms"), 42);
        assert_eq!(parse_int_or_zero("-15"), -15);
        assert_eq!(parse_int_or_zero("+7"), 7);
        assert_eq!(parse_int_or_zero("12.9"), 12);
        assert_eq!(parse_int_or_zero(""), 0);
        assert_eq!(parse_int_or_zero("abc"), 0);
        assert_eq!(parse_int_or_zero("-"), 0);
        assert_eq!(parse_int_or_zero("99999999999999999999999"), i64::MAX);
    }

    #[test]
    fn test_parse_int_reads_hex_prefix() {
        assert_eq!(parse_int_or_zero("0x10"), 16);
        assert_eq!(parse_int_or_zero("-0X1f"), -31);
        assert_eq!(parse_int_or_zero(" 0xffzz"), 255);
        assert_eq!(parse_int_or_zero("0x"), 0);
        assert_eq!(parse_int_or_zero("0xg"), 0);
        assert_eq!(parse_int_or_zero("010"), 10);
    }
}
