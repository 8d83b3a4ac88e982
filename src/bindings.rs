//! Declarative mapping from page controls to messages.
//!
//! Built once at startup. The browser build walks the table to attach click
//! listeners; the native console resolves clicked elements through it.

use crate::constants::{CHANGE_COLOR_CLASS, TOGGLE_ANIMATION_CLASS, ids};
use crate::message::Message;

/// How a control is found on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSelector {
    /// A single element with this id
    Id(&'static str),
    /// Every element with this class
    Class(&'static str),
}

impl ControlSelector {
    /// CSS selector string.
    pub fn css(&self) -> String {
        match self {
            ControlSelector::Id(id) => format!("#{id}"),
            ControlSelector::Class(class) => format!(".{class}"),
        }
    }
}

/// What a click on a bound control produces.
#[derive(Debug, Clone)]
pub enum ControlAction {
    /// Always the same message
    Fixed(Message),
    /// Message built from the control's `data-target`
    Targeted(fn(String) -> Message),
}

impl ControlAction {
    /// Message for a click, given the control's `data-target` attribute.
    pub fn message(&self, data_target: Option<&str>) -> Option<Message> {
        match self {
            ControlAction::Fixed(message) => Some(message.clone()),
            ControlAction::Targeted(build) => data_target.map(|t| build(t.to_string())),
        }
    }
}

/// One row of the control table.
#[derive(Debug, Clone)]
pub struct ControlBinding {
    /// Which elements the row covers
    pub selector: ControlSelector,
    /// What clicking them does
    pub action: ControlAction,
}

/// The page's control table.
#[derive(Debug, Clone)]
pub struct ControlMap {
    bindings: Vec<ControlBinding>,
}

impl Default for ControlMap {
    fn default() -> Self {
        let targeted = |class: &'static str, build: fn(String) -> Message| ControlBinding {
            selector: ControlSelector::Class(class),
            action: ControlAction::Targeted(build),
        };
        let fixed = |id: &'static str, message: Message| ControlBinding {
            selector: ControlSelector::Id(id),
            action: ControlAction::Fixed(message),
        };

        Self {
            bindings: vec![
                targeted(TOGGLE_ANIMATION_CLASS, Message::toggle),
                targeted(CHANGE_COLOR_CLASS, Message::change_color),
                fixed(ids::START_ALL, Message::StartAll),
                fixed(ids::STOP_ALL, Message::StopAll),
                fixed(ids::RESET_ALL, Message::ResetAll),
                fixed(ids::APPLY_ANIMATION, Message::ApplyAnimation),
                fixed(ids::CALCULATE_TIMING, Message::CalculateTiming),
            ],
        }
    }
}

impl ControlMap {
    /// All rows in order.
    pub fn bindings(&self) -> &[ControlBinding] {
        &self.bindings
    }

    /// Message for a click on an element described by its id, a class
    /// membership test and its `data-target`. The first matching row wins.
    pub fn resolve(
        &self,
        id: Option<&str>,
        has_class: impl Fn(&str) -> bool,
        data_target: Option<&str>,
    ) -> Option<Message> {
        self.bindings
            .iter()
            .find(|binding| match binding.selector {
                ControlSelector::Id(bound) => id == Some(bound),
                ControlSelector::Class(class) => has_class(class),
            })
            .and_then(|binding| binding.action.message(data_target))
    }
}
