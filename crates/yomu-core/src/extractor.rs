use crate::glyph::{GlyphTables, NO_GLYPHS};
use crate::term::{Kanji, Term};

/// Capability set every dictionary source implements.
///
/// Extraction is a pure function of one entry and its sequence number, so
/// entries can be fanned out across threads. Entries whose shape is not
/// recognized yield no terms instead of an error.
pub trait Extractor: Send + Sync {
    /// Entry shape delivered by the source loader
    type Entry: Sync;

    /// Terms for a single entry
    fn extract_terms(&self, entry: &Self::Entry, sequence: u64) -> Vec<Term>;

    /// Single-character records for a single entry
    fn extract_kanji(&self, _entry: &Self::Entry) -> Vec<Kanji> {
        Vec::new()
    }

    /// Schema/version identifier embedded in the output
    fn revision(&self) -> &str;

    /// Substitution tables handed to the upstream decoder
    fn glyph_tables(&self) -> &GlyphTables {
        &NO_GLYPHS
    }
}
