use std::collections::BTreeSet;

use indexmap::IndexSet;

use super::line::Production;

// The disjoint symbol sets of a grammar. Nonterminals keep declaration
// order; terminals iterate sorted.
#[derive(Debug, PartialEq)]
pub struct SymbolSets {
    pub terminals: BTreeSet<char>,
    pub nonterminals: IndexSet<char>,
}

// Every rule head is a nonterminal; every other symbol appearing in a
// rule body is a terminal. A symbol used as a head is never also a
// terminal, even where it appears inside other bodies.
pub fn classify(productions: &[Production]) -> SymbolSets {
    let nonterminals: IndexSet<char> = productions.iter()
        .map(|production| production.head)
        .collect();

    let terminals = productions.iter()
        .flat_map(|production| production.alternatives.iter())
        .flat_map(|alternative| alternative.chars())
        .filter(|symbol| !nonterminals.contains(symbol))
        .collect();

    SymbolSets { terminals, nonterminals }
}
