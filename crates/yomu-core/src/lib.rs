pub mod crush;
pub mod error;
pub mod extractor;
pub mod glyph;
pub mod importer;
pub mod rules;
pub mod term;

pub use crush::crush;
pub use error::ImportError;
pub use extractor::Extractor;
pub use glyph::{Glyph, GlyphTable, GlyphTables, NO_GLYPHS};
pub use importer::{ImportOutput, Importer};
pub use rules::{ExpressionGuard, RuleSet, TagPattern, TagRule};
pub use term::{Glossary, Kanji, RawEntry, TagMeta, Term, TermBuilder};
