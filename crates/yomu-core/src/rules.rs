use std::collections::BTreeSet;

use regex::Regex;

use crate::error::ImportError;
use crate::term::TermBuilder;

/// Which annotation codes a rule reacts to
#[derive(Debug, Clone)]
pub enum TagPattern {
    /// Fires for every tag found on the entry
    Any,
    Exact(String),
    /// Unanchored regex match
    Matches(Regex),
}

impl TagPattern {
    pub fn matches(&self, tag: &str) -> bool {
        match self {
            TagPattern::Any => true,
            TagPattern::Exact(code) => code == tag,
            TagPattern::Matches(re) => re.is_match(tag),
        }
    }
}

/// Condition on the term's own expression
#[derive(Debug, Clone)]
pub enum ExpressionGuard {
    Any,
    EndsWith(Vec<String>),
    Equals(String),
}

impl ExpressionGuard {
    pub fn allows(&self, expression: &str) -> bool {
        match self {
            ExpressionGuard::Any => true,
            ExpressionGuard::EndsWith(suffixes) => {
                suffixes.iter().any(|s| expression.ends_with(s.as_str()))
            }
            ExpressionGuard::Equals(literal) => expression == literal,
        }
    }
}

/// (tag pattern, expression guard) -> canonical rule
#[derive(Debug, Clone)]
pub struct TagRule {
    pattern: TagPattern,
    guard: ExpressionGuard,
    rule: String,
}

impl TagRule {
    pub fn new(pattern: TagPattern, guard: ExpressionGuard, rule: impl Into<String>) -> Self {
        Self {
            pattern,
            guard,
            rule: rule.into(),
        }
    }

    pub fn rule(&self) -> &str {
        &self.rule
    }

    fn fires(&self, tag: &str, expression: &str) -> bool {
        self.pattern.matches(tag) && self.guard.allows(expression)
    }
}

/// Tag -> conjugation rule inference for one source.
///
/// Every rule is evaluated against every tag; a term can pick up zero, one
/// or several rules. Tags no rule recognizes are ignored.
#[derive(Debug, Clone)]
pub struct RuleSet {
    vocabulary: BTreeSet<String>,
    rules: Vec<TagRule>,
}

impl RuleSet {
    /// Fails if a rule produces a value outside `vocabulary`
    pub fn new<I, S>(
        source_name: &str,
        vocabulary: I,
        rules: Vec<TagRule>,
    ) -> Result<Self, ImportError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let vocabulary: BTreeSet<String> = vocabulary.into_iter().map(Into::into).collect();

        if let Some(stray) = rules.iter().find(|r| !vocabulary.contains(r.rule())) {
            return Err(ImportError::UnknownRule {
                rule: stray.rule().to_string(),
                source_name: source_name.to_string(),
            });
        }

        Ok(Self { vocabulary, rules })
    }

    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.vocabulary.iter().map(String::as_str)
    }

    /// Rules that apply to `expression` given the entry's tags
    pub fn infer<I>(&self, expression: &str, tags: I) -> BTreeSet<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut found = BTreeSet::new();

        for tag in tags {
            let tag = tag.as_ref();
            for rule in &self.rules {
                if rule.fires(tag, expression) {
                    found.insert(rule.rule.clone());
                }
            }
        }

        found
    }

    /// Add inferred rules to a term under construction
    pub fn apply<I>(&self, builder: &mut TermBuilder, tags: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for rule in self.infer(builder.expression(), tags) {
            builder.add_rule(rule);
        }
    }
}
