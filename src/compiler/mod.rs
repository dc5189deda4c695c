/*
    This module compiles grammar text into a pushdown command table
*/

mod classify;
mod line;

use std::fmt::Display;
use std::path::Path;

use itertools::Itertools;
use log::debug;

use crate::error_handling::*;
use crate::machine::*;
use classify::classify;
use line::Production;

#[derive(Debug)]
pub enum CompileErrorType {
    // A line which should contain a rule does not have the rule shape
    MalformedRule,
    // A rule ends with the alternative separator (empty last alternative)
    TrailingSeparator,
    // A rule body starts with the alternative separator (empty first alternative)
    LeadingSeparator,
    // There was an issue with reading a file
    FileError(std::io::Error),
}

impl ErrorType for CompileErrorType {}

impl PartialEq for CompileErrorType {
    fn eq(&self, other: &Self) -> bool {
        if let CompileErrorType::FileError(a) = self {
            if let CompileErrorType::FileError(b) = other {
                return a.kind() == b.kind();
            }
        }
        return std::mem::discriminant(self) == std::mem::discriminant(other);
    }
}

impl Display for CompileErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileErrorType::MalformedRule => write!(f, "Expected a rule of the form `X>body`"),
            CompileErrorType::TrailingSeparator => write!(f, "Rule ends with an empty alternative"),
            CompileErrorType::LeadingSeparator => write!(f, "Rule starts with an empty alternative"),
            CompileErrorType::FileError(e) => write!(f, "File error: {}", e),
        }
    }
}

pub type CompileError = Error<CompileErrorType>;
pub type CompileErrors = Errors<CompileErrorType>;

pub type Result<T> = std::result::Result<T, CompileErrorType>;
pub type LineResult<T> = std::result::Result<T, CompileError>;
pub type FileResult<T> = std::result::Result<T, CompileErrors>;

pub fn io_error(error: std::io::Error, file: &Path) -> CompileError {
    CompileError {
        location: Location::whole_file(file.to_path_buf()),
        error: CompileErrorType::FileError(error),
    }
}

// Returns the non-blank lines of the grammar text, numbered from 1
fn rule_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(num, line)| (num + 1, line))
}

fn parse_rule_lines(text: &str, source: &Path) -> FileResult<Vec<Production>> {
    let parsed_lines = rule_lines(text).map(|(num, line)| {
        line::parse_rule_line(line).map_err(|error| CompileError {
            location: Location::new(source.to_path_buf(), num),
            error,
        })
    });

    let (productions, errors): (Vec<_>, Vec<_>) = parsed_lines.partition(LineResult::is_ok);
    if errors.len() > 0 {
        return Err(errors.into_iter().map(LineResult::unwrap_err).collect_vec());
    }

    return Ok(productions.into_iter().map(LineResult::unwrap).collect_vec());
}

// The expansion command of one rule: matches the head on the stack top
// without consuming input, one action per alternative in textual order
fn expansion_command(production: Production) -> Command {
    Command {
        key: CommandKey { state: INITIAL_STATE, input: None, top: production.head },
        actions: production.alternatives.into_iter()
            .map(|alternative| Action { state: INITIAL_STATE, push: alternative })
            .collect(),
    }
}

// The command discharging one terminal from input and stack at once
fn terminal_command(terminal: char) -> Command {
    Command {
        key: CommandKey { state: INITIAL_STATE, input: Some(terminal), top: terminal },
        actions: vec![Action { state: INITIAL_STATE, push: String::new() }],
    }
}

fn acceptance_command() -> Command {
    Command {
        key: CommandKey { state: INITIAL_STATE, input: None, top: STACK_BOTTOM },
        actions: vec![Action { state: INITIAL_STATE, push: String::new() }],
    }
}

fn table_from_productions(productions: Vec<Production>) -> CommandTable {
    let sets = classify(&productions);
    let start = productions.first().map_or(STACK_BOTTOM, |production| production.head);

    let mut commands = productions.into_iter().map(expansion_command).collect_vec();
    commands.extend(sets.terminals.iter().copied().map(terminal_command));
    commands.push(acceptance_command());

    return CommandTable {
        commands,
        terminals: sets.terminals,
        nonterminals: sets.nonterminals,
        start,
    };
}

// Compiles grammar text into the command table driving recognition.
// Every malformed line in the text is reported, located by `source`.
pub fn compile(text: &str, source: &Path) -> FileResult<CommandTable> {
    let productions = parse_rule_lines(text, source)?;
    let table = table_from_productions(productions);

    debug!(
        "compiled {} commands over {} terminals and {} nonterminals",
        table.commands.len(),
        table.terminals.len(),
        table.nonterminals.len()
    );

    return Ok(table);
}
