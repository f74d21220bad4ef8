use regex::Regex;
use yomu_core::{
    ExpressionGuard, Extractor, GlyphTables, ImportError, RawEntry, RuleSet, TagPattern, TagRule,
    Term, TermBuilder,
};

use crate::heading::HeadingParser;

const REVISION: &str = "daijisen2";

/// Conjugation classes Daijisen annotations map onto
pub const RULE_VOCABULARY: [&str; 5] = ["adj-i", "vs", "vk", "v5", "v1"];

/// Extractor for the 大辞泉 monolingual dictionary
pub struct DaijisenExtractor {
    headings: HeadingParser,
    meta: Regex,
    rules: RuleSet,
    glyphs: GlyphTables,
}

impl DaijisenExtractor {
    pub fn new() -> Result<Self, ImportError> {
        let glyphs = GlyphTables::from_json(include_str!("../data/daijisen_glyphs.json"))?;
        tracing::debug!(
            narrow = glyphs.narrow.len(),
            wide = glyphs.wide.len(),
            "loaded Daijisen glyph tables"
        );

        Ok(Self {
            headings: HeadingParser::new()?,
            meta: Regex::new(r"［([^］]*)］")?,
            rules: daijisen_rules()?,
            glyphs,
        })
    }

    /// Annotation codes: the first ［…］ group of every body line, split on ・
    pub fn tags(&self, text: &str) -> Vec<String> {
        text.split('\n')
            .filter_map(|line| self.meta.captures(line))
            .flat_map(|caps| caps[1].split('・').map(str::to_string).collect::<Vec<_>>())
            .collect()
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}

fn daijisen_rules() -> Result<RuleSet, ImportError> {
    let rules = vec![
        TagRule::new(
            TagPattern::Exact("形".into()),
            ExpressionGuard::Any,
            "adj-i",
        ),
        // 動サ変 alone also marks nouns that merely take する
        TagRule::new(
            TagPattern::Exact("動サ変".into()),
            ExpressionGuard::EndsWith(vec!["する".into(), "為る".into()]),
            "vs",
        ),
        TagRule::new(
            TagPattern::Any,
            ExpressionGuard::Equals("来る".into()),
            "vk",
        ),
        TagRule::new(
            TagPattern::Matches(Regex::new(r"(動.[四五](［[^］]+］)?)|(動..二)")?),
            ExpressionGuard::Any,
            "v5",
        ),
        TagRule::new(
            TagPattern::Matches(Regex::new(r"(動..一)")?),
            ExpressionGuard::Any,
            "v1",
        ),
    ];

    RuleSet::new("daijisen", RULE_VOCABULARY, rules)
}

impl Extractor for DaijisenExtractor {
    type Entry = RawEntry;

    fn extract_terms(&self, entry: &RawEntry, sequence: u64) -> Vec<Term> {
        let Some(heading) = self.headings.decompose(&entry.heading) else {
            tracing::debug!(sequence, heading = %entry.heading, "unparsable heading");
            return Vec::new();
        };

        let tags = self.tags(&entry.text);

        heading
            .forms()
            .into_iter()
            .filter_map(|(expression, reading)| {
                let mut builder = TermBuilder::new(expression, reading);
                builder
                    .add_glossary([entry.text.as_str()])
                    .sequence(sequence);
                self.rules.apply(&mut builder, &tags);
                builder.build()
            })
            .collect()
    }

    fn revision(&self) -> &str {
        REVISION
    }

    fn glyph_tables(&self) -> &GlyphTables {
        &self.glyphs
    }
}
