use std::fmt::Display;

use super::{Action, Command, CommandTable, State, EMPTY_TOKEN, INITIAL_STATE};

// A snapshot of the machine during recognition: control state, unread
// input, and the stack stored bottom to top (the top is the last char).
// `branched` records whether the command application that produced this
// configuration offered more than one action.
#[derive(Debug, PartialEq, Clone)]
pub struct Configuration {
    pub state: State,
    pub input: String,
    pub stack: String,
    pub branched: bool,
}

impl Configuration {
    // The configuration a recognition attempt starts from: the whole
    // input unread and the start symbol alone on the stack
    pub fn start(table: &CommandTable, input: &str) -> Self {
        Configuration {
            state: INITIAL_STATE,
            input: input.to_string(),
            stack: table.start.to_string(),
            branched: false,
        }
    }

    // Applies one action of a matched command: the stack top is replaced
    // by the action's push string, and a consuming command drops the
    // first unread input symbol
    pub fn apply(&self, command: &Command, action: &Action) -> Self {
        let input: String = match command.key.input {
            Some(_) => self.input.chars().skip(1).collect(),
            None => self.input.clone(),
        };

        let mut stack = self.stack.clone();
        stack.pop();
        stack.push_str(&action.push);

        Configuration {
            state: action.state,
            input,
            stack,
            branched: command.actions.len() > 1,
        }
    }

    pub fn is_accepting(&self) -> bool {
        self.input.is_empty() && self.stack.is_empty()
    }
}

impl Display for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let input = if self.input.is_empty() { EMPTY_TOKEN } else { self.input.as_str() };
        write!(f, "(s{}, {}, h0{})", self.state, input, self.stack)
    }
}

// The ordered history of configurations along the current search path.
// Grows by one configuration per expansion and shrinks only when a
// branch is undone; once the search accepts, it is the derivation trace.
#[derive(Debug, PartialEq, Default)]
pub struct TransitionChain {
    configurations: Vec<Configuration>,
}

impl TransitionChain {
    pub fn new() -> Self {
        TransitionChain::default()
    }

    pub fn push(&mut self, configuration: Configuration) {
        self.configurations.push(configuration);
    }

    pub fn pop(&mut self) -> Option<Configuration> {
        self.configurations.pop()
    }

    pub fn last(&self) -> Option<&Configuration> {
        self.configurations.last()
    }

    pub fn len(&self) -> usize {
        self.configurations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configurations.is_empty()
    }

    pub fn clear(&mut self) {
        self.configurations.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Configuration> {
        self.configurations.iter()
    }
}

impl Display for TransitionChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for configuration in self.iter() {
            write!(f, "{} | ", configuration)?;
        }

        // The synthetic final entry stands for discharging h0 itself
        write!(f, "(s{}, {}, {})", INITIAL_STATE, EMPTY_TOKEN, EMPTY_TOKEN)
    }
}
