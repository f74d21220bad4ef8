use std::collections::BTreeMap;

use yomu_core::{Extractor, TagMeta, Term, TermBuilder};
use yomu_dictionary::{JmnedictEntry, JmnedictKanji, JmnedictReading};

const REVISION: &str = "jmnedict1";

/// Name-type entities, grouped under the "name" tag class
const NAME_TYPES: [&str; 12] = [
    "company",
    "fem",
    "given",
    "masc",
    "organization",
    "person",
    "place",
    "product",
    "station",
    "surname",
    "unclass",
    "work",
];

/// Display metadata for every entity JMnedict declares
pub fn compute_tag_meta(entities: &BTreeMap<String, String>) -> BTreeMap<String, TagMeta> {
    entities
        .iter()
        .map(|(name, notes)| {
            let mut meta = TagMeta {
                notes: notes.clone(),
                ..Default::default()
            };
            if NAME_TYPES.contains(&name.as_str()) {
                meta.class = "name".to_string();
                meta.order = 4;
            }
            (name.clone(), meta)
        })
        .collect()
}

/// Extractor for the JMnedict proper-name dictionary
#[derive(Debug, Clone, Copy, Default)]
pub struct JmnedictExtractor;

impl JmnedictExtractor {
    pub fn new() -> Self {
        Self
    }

    fn convert(
        &self,
        entry: &JmnedictEntry,
        reading: &JmnedictReading,
        kanji: Option<&JmnedictKanji>,
        sequence: u64,
    ) -> Option<Term> {
        let mut builder = match kanji {
            None => TermBuilder::new(reading.reading.as_str(), ""),
            Some(kanji) => {
                // Restrictions list the kanji forms the reading does not apply to
                if reading.restrictions.contains(&kanji.expression) {
                    return None;
                }
                TermBuilder::new(
                    kanji.expression.as_str(),
                    reading.reading.as_str(),
                )
            }
        };

        builder.add_tags(reading.information.iter().cloned());

        if let Some(kanji) = kanji {
            builder.add_tags(kanji.information.iter().cloned());
            builder.add_tags(
                kanji
                    .priorities
                    .iter()
                    .filter(|p| reading.priorities.contains(*p))
                    .cloned(),
            );
        }

        // Shared by every term of the entry
        for trans in &entry.translations {
            builder
                .add_glossary(trans.translations.iter().cloned())
                .add_tags(trans.name_types.iter().cloned());
        }

        builder.sequence(sequence);
        builder.build()
    }
}

impl Extractor for JmnedictExtractor {
    type Entry = JmnedictEntry;

    fn extract_terms(&self, entry: &JmnedictEntry, sequence: u64) -> Vec<Term> {
        if entry.kanji.is_empty() {
            return entry
                .readings
                .iter()
                .filter_map(|reading| self.convert(entry, reading, None, sequence))
                .collect();
        }

        entry
            .kanji
            .iter()
            .flat_map(|kanji| {
                entry
                    .readings
                    .iter()
                    .filter_map(move |reading| self.convert(entry, reading, Some(kanji), sequence))
            })
            .collect()
    }

    fn revision(&self) -> &str {
        REVISION
    }
}
