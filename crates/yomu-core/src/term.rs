use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One dictionary entry as delivered by a source loader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    pub heading: String,
    pub text: String,
}

impl RawEntry {
    pub fn new(heading: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            text: text.into(),
        }
    }
}

/// A single definition value. Display order is the order inside `Term::glossary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Glossary {
    Text(String),
    Structured(serde_json::Value),
}

impl From<String> for Glossary {
    fn from(text: String) -> Self {
        Glossary::Text(text)
    }
}

impl From<&str> for Glossary {
    fn from(text: &str) -> Self {
        Glossary::Text(text.to_string())
    }
}

/// Canonical output unit of every extractor.
///
/// Terms are only created through [`TermBuilder`], which guarantees a
/// non-empty expression. After extraction the only mutation is the
/// glossary concatenation done by [`crate::crush`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Term {
    expression: String,
    reading: String,
    rules: BTreeSet<String>,
    tags: BTreeSet<String>,
    glossary: Vec<Glossary>,
    sequence: u64,
}

impl Term {
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Empty when the expression is pronounced as written
    pub fn reading(&self) -> &str {
        &self.reading
    }

    pub fn rules(&self) -> &BTreeSet<String> {
        &self.rules
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    pub fn glossary(&self) -> &[Glossary] {
        &self.glossary
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Fold a duplicate of this term into it
    pub(crate) fn absorb(&mut self, other: Term) {
        self.glossary.extend(other.glossary);
        self.sequence = self.sequence.min(other.sequence);
    }
}

/// Accumulates rules, tags and glossary entries before a [`Term`] is frozen
#[derive(Debug, Clone, Default)]
pub struct TermBuilder {
    expression: String,
    reading: String,
    rules: BTreeSet<String>,
    tags: BTreeSet<String>,
    glossary: Vec<Glossary>,
    sequence: u64,
}

impl TermBuilder {
    pub fn new(expression: impl Into<String>, reading: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            reading: reading.into(),
            ..Default::default()
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn sequence(&mut self, sequence: u64) -> &mut Self {
        self.sequence = sequence;
        self
    }

    pub fn add_rule(&mut self, rule: impl Into<String>) -> &mut Self {
        self.rules.insert(rule.into());
        self
    }

    pub fn add_tags<I>(&mut self, tags: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn add_glossary<I>(&mut self, glossary: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Glossary>,
    {
        self.glossary.extend(glossary.into_iter().map(Into::into));
        self
    }

    /// Freeze the term.
    ///
    /// An empty expression falls back to the reading (and the reading is
    /// cleared). Returns `None` when both are empty.
    pub fn build(self) -> Option<Term> {
        let (expression, reading) = if self.expression.is_empty() {
            (self.reading, String::new())
        } else {
            (self.expression, self.reading)
        };

        if expression.is_empty() {
            return None;
        }

        Some(Term {
            expression,
            reading,
            rules: self.rules,
            tags: self.tags,
            glossary: self.glossary,
            sequence: self.sequence,
        })
    }
}

/// Per-character record. No shipped extractor fills it yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kanji {
    pub character: String,
    pub onyomi: Vec<String>,
    pub kunyomi: Vec<String>,
    pub tags: Vec<String>,
    pub meanings: Vec<String>,
}

/// Display metadata for a tag, built once per source vocabulary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagMeta {
    pub class: String,
    pub order: i32,
    pub notes: String,
}
