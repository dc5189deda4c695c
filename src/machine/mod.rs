/*
    This module defines the pushdown machine: compiled commands, the
    command table, and the configurations explored during recognition
*/

mod chain;

pub use chain::{Configuration, TransitionChain};

use std::collections::BTreeSet;
use std::fmt::Display;

use indexmap::IndexSet;
use itertools::Itertools;

// Control state of the machine. Compilation only ever produces a
// single-state machine, but commands and configurations carry the
// state explicitly.
pub type State = u8;

pub const INITIAL_STATE: State = 0;

// Implied beneath every stack; discharged by the acceptance command
pub const STACK_BOTTOM: char = '|';

// Separates alternatives in a rule body
pub const ALT_SEPARATOR: char = '|';

// How the empty symbol is rendered
pub const EMPTY_TOKEN: &str = "lambda";

// What a command matches against: the control state, the next unread
// input symbol (`None` matches without consuming) and the stack top
#[derive(Debug, PartialEq)]
pub struct CommandKey {
    pub state: State,
    pub input: Option<char>,
    pub top: char,
}

// One way a matched command may rewrite the machine: the target state
// and the string pushed in place of the consumed stack top. An empty
// push string pushes nothing.
#[derive(Debug, PartialEq)]
pub struct Action {
    pub state: State,
    pub push: String,
}

// A transition rule. Multiple actions under one key are the
// nondeterministic choice between the alternatives of a rule.
#[derive(Debug, PartialEq)]
pub struct Command {
    pub key: CommandKey,
    pub actions: Vec<Action>,
}

impl Command {
    // Whether this command applies to the given configuration. The stack
    // must end in the required top symbol; epsilon commands match any
    // remaining input, including none at all.
    pub fn matches(&self, configuration: &Configuration) -> bool {
        self.key.state == configuration.state
            && configuration.stack.ends_with(self.key.top)
            && self.key.input.map_or(true, |symbol| configuration.input.starts_with(symbol))
    }
}

// The compiled transition relation of a grammar. Command order is search
// priority: one command per rule line, then one per terminal symbol,
// then the acceptance command. Never mutated after compilation.
#[derive(Debug, PartialEq)]
pub struct CommandTable {
    pub commands: Vec<Command>,
    pub terminals: BTreeSet<char>,
    pub nonterminals: IndexSet<char>,
    pub start: char,
}

impl CommandTable {
    // The commands applicable to a configuration, in table order
    pub fn matching<'a>(
        &'a self,
        configuration: &'a Configuration,
    ) -> impl Iterator<Item = &'a Command> + 'a {
        self.commands.iter().filter(move |command| command.matches(configuration))
    }
}

fn stack_symbol(symbol: char) -> String {
    if symbol == STACK_BOTTOM {
        "h0".to_string()
    } else {
        symbol.to_string()
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let input = match self.key.input {
            Some(symbol) => symbol.to_string(),
            None => EMPTY_TOKEN.to_string(),
        };

        let actions = self.actions.iter()
            .map(|action| {
                let push = if action.push.is_empty() { EMPTY_TOKEN } else { action.push.as_str() };
                format!("(s{}, {})", action.state, push)
            })
            .join("; ");

        write!(f, "f(s{}, {}, {}) = {{{}}}", self.key.state, input, stack_symbol(self.key.top), actions)
    }
}

impl Display for CommandTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Input alphabet:")?;
        writeln!(f, "P = {{{}}}", self.terminals.iter().join(", "))?;

        // The stack alphabet also holds every terminal, since terminals
        // are pushed when a rule is expanded
        let stack_alphabet = self.nonterminals.iter()
            .chain(self.terminals.iter())
            .map(ToString::to_string)
            .chain(["h0".to_string()])
            .join(", ");
        writeln!(f, "Stack alphabet:")?;
        writeln!(f, "Z = {{{}}}", stack_alphabet)?;

        writeln!(f, "Commands:")?;
        for command in &self.commands {
            writeln!(f, "{}", command)?;
        }

        Ok(())
    }
}
