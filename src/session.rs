//! Line-oriented console over an in-memory demo page.
//!
//! Lets the page logic be driven without a browser: each command stands for
//! a click or an edit a visitor would make, and `wait` advances a virtual
//! clock so press feedback tasks come due.

use std::fmt::Write as _;
use std::str::FromStr;

use rand::Rng;
use thiserror::Error;
use web_time::{Duration, Instant};

use crate::bindings::ControlMap;
use crate::config::DemoConfig;
use crate::constants::{CHANGE_COLOR_CLASS, DATA_TARGET_ATTR, TOGGLE_ANIMATION_CLASS, ids};
use crate::controller::DemoController;
use crate::error::DemoError;
use crate::handlers::{handle_message, log_initialized};
use crate::memory_page::{MemoryPage, NodeId};
use crate::page::{Page, StyleProperty};
use crate::state::AnimationState;

/// Which timing input an `input` command edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingField {
    /// `duration-input`
    Duration,
    /// `delay-input`
    Delay,
}

impl TimingField {
    fn element_id(self) -> &'static str {
        match self {
            TimingField::Duration => ids::DURATION_INPUT,
            TimingField::Delay => ids::DELAY_INPUT,
        }
    }
}

/// One console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Click the control with this id
    Click(String),
    /// Click a card's play/pause button
    Toggle(String),
    /// Click a card's color button
    Color(String),
    /// Click a card's animation box
    Press(String),
    /// Choose an effect in the selector
    Select(String),
    /// Type into a timing input
    Input(TimingField, String),
    /// Advance the clock by this many milliseconds
    Wait(u64),
    /// Print the page state
    State,
    /// Print the command list
    Help,
    /// Leave the console
    Quit,
}

/// Why a command line could not be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// Blank line
    #[error("Empty command")]
    Empty,

    /// First word is not a command
    #[error("Unknown command '{0}' (try 'help')")]
    Unknown(String),

    /// Required argument absent
    #[error("'{command}' needs a {argument}")]
    MissingArgument {
        /// Command name
        command: &'static str,
        /// What was expected
        argument: &'static str,
    },

    /// Argument was not a number
    #[error("Invalid number '{0}'")]
    InvalidNumber(String),

    /// `input` named neither field
    #[error("Unknown input '{0}', expected 'duration' or 'delay'")]
    UnknownField(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;
        let mut arg = |command: &'static str, argument: &'static str| {
            words
                .next()
                .map(str::to_string)
                .ok_or(CommandError::MissingArgument { command, argument })
        };

        match name.to_ascii_lowercase().as_str() {
            "click" => Ok(Command::Click(arg("click", "control id")?)),
            "toggle" => Ok(Command::Toggle(arg("toggle", "card id")?)),
            "color" => Ok(Command::Color(arg("color", "card id")?)),
            "press" => Ok(Command::Press(arg("press", "card id")?)),
            "select" => Ok(Command::Select(arg("select", "effect name")?)),
            "input" => {
                let field = match arg("input", "field")?.as_str() {
                    "duration" => TimingField::Duration,
                    "delay" => TimingField::Delay,
                    other => return Err(CommandError::UnknownField(other.to_string())),
                };
                // Missing value means an empty input box.
                let value = arg("input", "value").unwrap_or_default();
                Ok(Command::Input(field, value))
            }
            "wait" => {
                let ms = arg("wait", "duration in ms")?;
                ms.parse()
                    .map(Command::Wait)
                    .map_err(|_| CommandError::InvalidNumber(ms))
            }
            "state" => Ok(Command::State),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Result of running one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Nothing to print
    Done,
    /// Text for the user
    Text(String),
    /// Stop reading commands
    Quit,
}

/// Command list printed by `help`.
pub const HELP: &str = "\
commands:
  click <control-id>            start-all | stop-all | reset-all | apply-animation | calculate-timing
  toggle <card>                 play/pause a card's box
  color <card>                  random color for a card's box
  press <card>                  click a card's box
  select <effect>               choose the effect to apply
  input <duration|delay> <ms>   type into a timing input
  wait <ms>                     advance the clock
  state                         show the page
  help | quit";

/// Controller, control table and clock for the console.
pub struct Session<R: Rng> {
    controller: DemoController<MemoryPage>,
    controls: ControlMap,
    rng: R,
    clock: Instant,
}

impl<R: Rng> Session<R> {
    /// Demo layout with `card_count` cards.
    pub fn new(config: &DemoConfig, card_count: usize, rng: R) -> Self {
        let controller =
            DemoController::new(MemoryPage::demo(card_count), AnimationState::default(), config);
        log_initialized(&controller);
        Self {
            controller,
            controls: ControlMap::default(),
            rng,
            clock: Instant::now(),
        }
    }

    /// The controller being driven.
    pub fn controller(&self) -> &DemoController<MemoryPage> {
        &self.controller
    }

    /// Run one command.
    pub fn execute(&mut self, command: Command) -> Result<Reply, DemoError> {
        match command {
            Command::Click(id) => {
                let node = self.lookup(&id)?;
                self.click(node)
            }
            Command::Toggle(card) => {
                let node = self.card_control(TOGGLE_ANIMATION_CLASS, &card)?;
                self.click(node)
            }
            Command::Color(card) => {
                let node = self.card_control(CHANGE_COLOR_CLASS, &card)?;
                self.click(node)
            }
            Command::Press(card) => {
                let node = self
                    .controller
                    .page()
                    .card_box(&card)
                    .ok_or_else(|| DemoError::missing(format!("#{card} .animation-box")))?;
                self.controller.press_box(&node, self.clock);
                Ok(Reply::Done)
            }
            Command::Select(effect) => {
                let node = self.lookup(ids::ANIMATION_SELECT)?;
                self.controller.page_mut().set_value(node, &effect);
                Ok(Reply::Done)
            }
            Command::Input(field, value) => {
                let node = self.lookup(field.element_id())?;
                self.controller.page_mut().set_value(node, &value);
                Ok(Reply::Done)
            }
            Command::Wait(ms) => {
                self.clock += Duration::from_millis(ms);
                let ran = self.controller.run_due(self.clock);
                log::debug!("Advanced clock {}ms, {} task(s) ran", ms, ran);
                Ok(Reply::Done)
            }
            Command::State => Ok(Reply::Text(self.describe())),
            Command::Help => Ok(Reply::Text(HELP.to_string())),
            Command::Quit => Ok(Reply::Quit),
        }
    }

    fn lookup(&self, id: &str) -> Result<NodeId, DemoError> {
        self.controller
            .page()
            .element_by_id(id)
            .ok_or_else(|| DemoError::missing(format!("#{id}")))
    }

    fn card_control(&self, class: &str, card: &str) -> Result<NodeId, DemoError> {
        self.controller
            .page()
            .find_control(class, card)
            .ok_or_else(|| DemoError::missing(format!(".{class}[{DATA_TARGET_ATTR}=\"{card}\"]")))
    }

    fn click(&mut self, node: NodeId) -> Result<Reply, DemoError> {
        let page = self.controller.page();
        let message = self.controls.resolve(
            page.id(node),
            |class| page.has_class(&node, class),
            page.attribute(node, DATA_TARGET_ATTR),
        );

        match message {
            Some(message) => {
                handle_message(message, &mut self.controller, &mut self.rng)?;
                Ok(Reply::Done)
            }
            None => Ok(Reply::Text("Nothing is bound to that element".to_string())),
        }
    }

    /// Text rendering of every box, the interactive box and the timing result.
    pub fn describe(&self) -> String {
        let page = self.controller.page();
        let mut out = String::new();

        for (index, node) in page.animation_boxes().into_iter().enumerate() {
            let _ = write!(out, "box {}: classes=[{}]", index + 1, page.classes(node).join(" "));
            for property in [
                StyleProperty::BackgroundColor,
                StyleProperty::Animation,
                StyleProperty::Transform,
            ] {
                if let Some(value) = page.style(node, property) {
                    let _ = write!(out, " {}={}", property.css_name(), value);
                }
            }
            out.push('\n');
        }

        if let Some(node) = page.element_by_id(ids::INTERACTIVE_BOX) {
            let _ = writeln!(out, "interactive box: classes=[{}]", page.classes(node).join(" "));
        }
        if let Some(node) = page.element_by_id(ids::TIMING_RESULT) {
            let _ = writeln!(out, "timing result: {}", page.text(node));
        }
        let _ = write!(
            out,
            "all animations running: {} ({} pending task(s))",
            self.controller.state().all_animations_running,
            self.controller.pending_tasks()
        );
        out
    }
}
