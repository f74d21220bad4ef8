use rayon::prelude::*;

use crate::crush::crush;
use crate::extractor::Extractor;
use crate::term::{Kanji, Term};

/// Result of converting one source, ready for serialization
#[derive(Debug, Clone)]
pub struct ImportOutput {
    pub revision: String,
    pub terms: Vec<Term>,
    pub kanji: Vec<Kanji>,
    /// Entries that produced no terms
    pub skipped: usize,
}

/// Drives an extractor over a whole source.
///
/// Each entry gets its index as sequence number, extraction runs per entry
/// (in parallel unless disabled), then the accumulated terms are crushed.
pub struct Importer<'a, E: Extractor> {
    extractor: &'a E,
    parallel: bool,
}

impl<'a, E: Extractor> Importer<'a, E> {
    pub fn new(extractor: &'a E) -> Self {
        Self {
            extractor,
            parallel: true,
        }
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn run(&self, entries: &[E::Entry]) -> ImportOutput {
        let extracted: Vec<(Vec<Term>, Vec<Kanji>)> = if self.parallel {
            entries
                .par_iter()
                .enumerate()
                .map(|(i, entry)| self.extract(i as u64, entry))
                .collect()
        } else {
            entries
                .iter()
                .enumerate()
                .map(|(i, entry)| self.extract(i as u64, entry))
                .collect()
        };

        let mut terms = Vec::new();
        let mut kanji = Vec::new();
        let mut skipped = 0;

        for (sequence, (entry_terms, entry_kanji)) in extracted.into_iter().enumerate() {
            if entry_terms.is_empty() {
                tracing::debug!(sequence, "entry produced no terms");
                skipped += 1;
            }
            terms.extend(entry_terms);
            kanji.extend(entry_kanji);
        }

        tracing::info!(
            revision = self.extractor.revision(),
            entries = entries.len(),
            terms = terms.len(),
            skipped,
            "extracted terms"
        );

        let terms = crush(terms);
        tracing::info!(terms = terms.len(), "crushed terms");

        ImportOutput {
            revision: self.extractor.revision().to_string(),
            terms,
            kanji,
            skipped,
        }
    }

    fn extract(&self, sequence: u64, entry: &E::Entry) -> (Vec<Term>, Vec<Kanji>) {
        (
            self.extractor.extract_terms(entry, sequence),
            self.extractor.extract_kanji(entry),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::{RawEntry, TermBuilder};

    /// Heading becomes the expression, empty headings are skipped
    struct Echo;

    impl Extractor for Echo {
        type Entry = RawEntry;

        fn extract_terms(&self, entry: &RawEntry, sequence: u64) -> Vec<Term> {
            let mut builder = TermBuilder::new(entry.heading.as_str(), "");
            builder
                .add_glossary([entry.text.as_str()])
                .sequence(sequence);
            builder.build().into_iter().collect()
        }

        fn revision(&self) -> &str {
            "echo1"
        }
    }

    fn entries() -> Vec<RawEntry> {
        vec![
            RawEntry::new("a", "first"),
            RawEntry::new("", "nothing"),
            RawEntry::new("b", "second"),
            RawEntry::new("a", "third"),
        ]
    }

    #[test]
    fn assigns_sequences_and_crushes() {
        let output = Importer::new(&Echo).parallel(false).run(&entries());

        assert_eq!(output.revision, "echo1");
        assert_eq!(output.skipped, 1);
        assert_eq!(output.terms.len(), 2);
        assert_eq!(output.terms[0].expression(), "a");
        assert_eq!(output.terms[0].sequence(), 0);
        assert_eq!(output.terms[0].glossary().len(), 2);
        assert_eq!(output.terms[1].expression(), "b");
        assert_eq!(output.terms[1].sequence(), 2);
        assert!(output.kanji.is_empty());
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let entries = entries();
        let sequential = Importer::new(&Echo).parallel(false).run(&entries);
        let parallel = Importer::new(&Echo).parallel(true).run(&entries);
        assert_eq!(sequential.terms, parallel.terms);
    }
}
