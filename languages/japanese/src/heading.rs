use regex::{NoExpand, Regex};

/// Result of splitting a `READING【EXPRESSION・…】` heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub reading: String,
    /// Written forms in display order; empty when the heading has none
    pub expressions: Vec<String>,
}

impl Heading {
    /// (expression, reading) pairs to emit.
    ///
    /// Without a written form the reading is the expression and the reading
    /// slot stays empty.
    pub fn forms(&self) -> Vec<(String, String)> {
        if self.expressions.is_empty() {
            return vec![(self.reading.clone(), String::new())];
        }

        self.expressions
            .iter()
            .map(|expression| (expression.clone(), self.reading.clone()))
            .collect()
    }
}

/// Regex-driven heading decomposition for kana+kanji headwords
#[derive(Debug, Clone)]
pub struct HeadingParser {
    parts: Regex,
    multi: Regex,
    shapes: Regex,
    optional: Regex,
    reading_marks: Regex,
}

impl HeadingParser {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            parts: Regex::new(r"([^【]+)(?:【(.*)】)?")?,
            // 】…【 between two bracket groups separates independent headwords
            multi: Regex::new(r"】[^【】]*【")?,
            shapes: Regex::new(r"[×△＝‐]+")?,
            optional: Regex::new(r"（([^）]*)）")?,
            reading_marks: Regex::new(r"[‐・]+")?,
        })
    }

    /// `None` when the heading does not have a recognizable shape
    pub fn decompose(&self, heading: &str) -> Option<Heading> {
        let caps = self.parts.captures(heading)?;
        let reading = caps.get(1).map_or("", |m| m.as_str());
        let segment = caps.get(2).map_or("", |m| m.as_str());

        if segment.is_empty() {
            return Some(Heading {
                reading: reading.to_string(),
                expressions: Vec::new(),
            });
        }

        let segment = self.multi.replace_all(segment, "・");
        let segment = self.shapes.replace_all(&segment, "");

        let mut expressions = Vec::new();
        for candidate in segment.split('・').filter(|c| !c.is_empty()) {
            // "with" before "without"
            let inlined = self.optional.replace_all(candidate, "${1}");
            let changed = inlined != candidate;
            if !inlined.is_empty() {
                expressions.push(inlined.into_owned());
            }
            if changed {
                let removed = self.optional.replace_all(candidate, NoExpand(""));
                if !removed.is_empty() {
                    expressions.push(removed.into_owned());
                }
            }
        }

        // Parentheses in the reading are pronunciation notes: always dropped, never expanded
        let reading = self.reading_marks.replace_all(reading, NoExpand(""));
        let reading = self.optional.replace_all(&reading, NoExpand(""));

        Some(Heading {
            reading: reading.into_owned(),
            expressions,
        })
    }
}
