/*
    This module runs the depth-first backtracking search for an
    accepting configuration chain
*/

use log::trace;

use crate::machine::{CommandTable, Configuration, TransitionChain};

// Bound on the recursion depth. A grammar whose rules can expand
// without consuming input or growing the stack would otherwise recurse
// forever; past the bound the attempt is given up, not rejected.
pub const DEFAULT_DEPTH_LIMIT: usize = 4096;

// The result of one recognition attempt
#[derive(Debug, PartialEq)]
pub enum Outcome {
    // The input is derivable; the chain is the accepting derivation
    Accepted(TransitionChain),
    // No accepting derivation exists in first-match search order
    Rejected,
    // The depth ceiling was hit before the search could settle
    Exhausted,
}

// Verdict of one level of the recursion
#[derive(Debug, PartialEq)]
enum Verdict {
    Accept,
    Reject,
    Exhaust,
}

pub fn recognize(table: &CommandTable, input: &str) -> Outcome {
    recognize_with_limit(table, input, DEFAULT_DEPTH_LIMIT)
}

// Runs a recognition attempt with an explicit depth ceiling. The chain
// lives and dies inside the attempt: it is handed to the caller only on
// acceptance, and no partial chain survives any other outcome.
pub fn recognize_with_limit(table: &CommandTable, input: &str, depth_limit: usize) -> Outcome {
    let mut chain = TransitionChain::new();
    chain.push(Configuration::start(table, input));

    match explore(table, &mut chain, depth_limit) {
        Verdict::Accept => {
            trace!("accepted with {} configurations", chain.len());
            Outcome::Accepted(chain)
        }
        Verdict::Reject => {
            chain.clear();
            Outcome::Rejected
        }
        Verdict::Exhaust => {
            chain.clear();
            trace!("gave up after {} levels", depth_limit);
            Outcome::Exhausted
        }
    }
}

// Expands the last configuration of the chain, trying every matching
// command and every action in table order. Exactly one configuration is
// appended per explored action, and it is popped again on every
// non-accepting return, so the chain always leaves this level at its
// incoming length unless the search accepted.
fn explore(table: &CommandTable, chain: &mut TransitionChain, depth_left: usize) -> Verdict {
    let current = match chain.last() {
        Some(configuration) => configuration.clone(),
        None => return Verdict::Reject,
    };

    if current.is_accepting() {
        return Verdict::Accept;
    }

    if depth_left == 0 {
        return Verdict::Exhaust;
    }

    for command in table.matching(&current) {
        for action in &command.actions {
            let candidate = current.apply(command, action);

            // Every stack symbol still costs one input symbol to
            // discharge, so a stack longer than the unread input can
            // never empty in time
            if candidate.input.len() < candidate.stack.len() {
                trace!("pruned {}", candidate);
                continue;
            }

            chain.push(candidate);
            match explore(table, chain, depth_left - 1) {
                Verdict::Accept => return Verdict::Accept,
                Verdict::Exhaust => {
                    chain.pop();
                    return Verdict::Exhaust;
                }
                Verdict::Reject => {
                    chain.pop();
                }
            }
        }
    }

    return Verdict::Reject;
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::compiler::compile;

    use super::*;

    fn test_table(text: &str) -> CommandTable {
        compile(text, Path::new("test.grammar")).unwrap()
    }

    fn accepted_chain(table: &CommandTable, input: &str) -> TransitionChain {
        match recognize(table, input) {
            Outcome::Accepted(chain) => chain,
            other => panic!("expected {:?} to be accepted, got {:?}", input, other),
        }
    }

    #[test]
    fn accept_single_terminals() {
        let table = test_table("S>a|b");

        assert!(matches!(recognize(&table, "a"), Outcome::Accepted(_)));
        assert!(matches!(recognize(&table, "b"), Outcome::Accepted(_)));
    }

    #[test]
    fn reject_foreign_terminal() {
        let table = test_table("S>a|b");

        assert_eq!(recognize(&table, "c"), Outcome::Rejected);
    }

    #[test]
    fn reject_empty_input() {
        // The start symbol needs at least one terminal to discharge
        let table = test_table("S>a|b");

        assert_eq!(recognize(&table, ""), Outcome::Rejected);
    }

    #[test]
    fn accept_through_nonterminal_rules() {
        let table = test_table("S>AB\nA>a\nB>b");

        assert!(matches!(recognize(&table, "ab"), Outcome::Accepted(_)));
        assert_eq!(recognize(&table, "ba"), Outcome::Rejected);
    }

    #[test]
    fn accept_nested_rule() {
        let table = test_table("S>aSb|ab");

        assert!(matches!(recognize(&table, "ab"), Outcome::Accepted(_)));
        assert!(matches!(recognize(&table, "aabb"), Outcome::Accepted(_)));
        assert!(matches!(recognize(&table, "aaabbb"), Outcome::Accepted(_)));
        assert_eq!(recognize(&table, "aab"), Outcome::Rejected);
        assert_eq!(recognize(&table, "abab"), Outcome::Rejected);
    }

    #[test]
    fn accepted_chain_spans_full_derivation() {
        let table = test_table("S>aSb|ab");
        let chain = accepted_chain(&table, "aabb");

        let first = chain.iter().next().unwrap();
        assert_eq!(first.input, "aabb");
        assert_eq!(first.stack, "S");

        let last = chain.iter().last().unwrap();
        assert!(last.input.is_empty());
        assert!(last.stack.is_empty());
    }

    #[test]
    fn unread_input_always_covers_stack() {
        let table = test_table("S>aSb|ab");
        let chain = accepted_chain(&table, "aaabbb");

        for configuration in chain.iter() {
            assert!(configuration.input.len() >= configuration.stack.len());
        }
    }

    #[test]
    fn branch_points_are_marked() {
        let table = test_table("S>aSb|ab");
        let chain = accepted_chain(&table, "aabb");

        // Expansions of S offer two actions; terminal consumptions one
        let branched: Vec<bool> = chain.iter().map(|configuration| configuration.branched).collect();
        assert_eq!(branched, vec![false, true, false, true, false, false, false]);
    }

    #[test]
    fn reject_restores_chain() {
        let table = test_table("S>a|b");
        let mut chain = TransitionChain::new();
        chain.push(Configuration::start(&table, "c"));

        let verdict = explore(&table, &mut chain, DEFAULT_DEPTH_LIMIT);

        assert_eq!(verdict, Verdict::Reject);
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn repeated_attempts_are_deterministic() {
        let table = test_table("S>aSb|ab");

        let first = accepted_chain(&table, "aabb");
        let second = accepted_chain(&table, "aabb");

        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn renders_accepting_trace() {
        let table = test_table("S>a");
        let chain = accepted_chain(&table, "a");

        assert_eq!(
            chain.to_string(),
            "(s0, a, h0S) | (s0, a, h0a) | (s0, lambda, h0) | (s0, lambda, lambda)"
        );
    }

    #[test]
    fn cyclic_expansion_exhausts_depth() {
        // S can rewrite to itself forever without consuming anything;
        // the ceiling must turn that into Exhausted, not a hang
        let table = test_table("S>S|a");

        assert_eq!(recognize_with_limit(&table, "b", 64), Outcome::Exhausted);
    }

    #[test]
    fn cycle_after_accepting_alternative_still_accepts() {
        let table = test_table("S>a|S");

        assert!(matches!(recognize_with_limit(&table, "a", 64), Outcome::Accepted(_)));
    }
}
