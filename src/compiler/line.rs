use once_cell::sync::Lazy;
use regex::Regex;

use super::{CompileErrorType, Result};
use crate::machine::ALT_SEPARATOR;

// One uppercase head, the rewrite marker, then a printable body
static RULE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z]>[[:print:]]+$").expect("rule line pattern is well formed")
});

// A parsed rule line: the head nonterminal and its alternatives. Each
// alternative is stored in reverse reading order, so that pushing it
// onto a stack string leaves the first symbol on top.
#[derive(Debug, PartialEq)]
pub struct Production {
    pub head: char,
    pub alternatives: Vec<String>,
}

pub fn parse_rule_line(line: &str) -> Result<Production> {
    if !RULE_LINE.is_match(line) {
        return Err(CompileErrorType::MalformedRule);
    }

    if line.ends_with(ALT_SEPARATOR) {
        return Err(CompileErrorType::TrailingSeparator);
    }

    let mut symbols = line.chars();
    let head = symbols.next().ok_or(CompileErrorType::MalformedRule)?;
    symbols.next(); // the rewrite marker, already validated
    let body = symbols.as_str();

    if body.starts_with(ALT_SEPARATOR) {
        return Err(CompileErrorType::LeadingSeparator);
    }

    let mut alternatives = Vec::new();
    let mut current = String::new();
    for symbol in body.chars() {
        if symbol == ALT_SEPARATOR {
            // Adjacent separators merge rather than opening an empty
            // alternative
            if !current.is_empty() {
                alternatives.push(current);
                current = String::new();
            }
        } else {
            current.push(symbol);
        }
    }
    alternatives.push(current);

    for alternative in &mut alternatives {
        *alternative = alternative.chars().rev().collect();
    }

    return Ok(Production { head, alternatives });
}
