use std::collections::BTreeSet;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::term::Term;

/// Identity of a term; glossary content is deliberately left out
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct TermKey {
    expression: String,
    reading: String,
    rules: BTreeSet<String>,
    tags: BTreeSet<String>,
}

impl TermKey {
    fn of(term: &Term) -> Self {
        Self {
            expression: term.expression().to_string(),
            reading: term.reading().to_string(),
            rules: term.rules().clone(),
            tags: term.tags().clone(),
        }
    }
}

/// Merge terms sharing (expression, reading, rules, tags).
///
/// Glossaries are concatenated in encounter order and the merged record
/// keeps the smallest sequence. Output is stably sorted by sequence, so
/// distinct terms from the same entry keep their emission order.
/// Must see the whole source: it is not incremental.
pub fn crush(terms: Vec<Term>) -> Vec<Term> {
    let mut index: HashMap<TermKey, usize> = HashMap::with_capacity(terms.len());
    let mut crushed: Vec<Term> = Vec::with_capacity(terms.len());

    for term in terms {
        match index.entry(TermKey::of(&term)) {
            Entry::Occupied(slot) => crushed[*slot.get()].absorb(term),
            Entry::Vacant(slot) => {
                slot.insert(crushed.len());
                crushed.push(term);
            }
        }
    }

    crushed.sort_by_key(Term::sequence);
    crushed
}
