use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use regex::{Captures, Regex};
use serde::Deserialize;
use yomu_core::{GlyphTables, RawEntry};

use crate::error::LoadError;

// zero-epwing JSON dump
#[derive(Debug, Deserialize)]
struct BookJson {
    subbooks: Vec<SubbookJson>,
}

#[derive(Debug, Deserialize)]
struct SubbookJson {
    #[serde(default)]
    title: String,
    #[serde(default)]
    entries: Vec<EntryJson>,
}

#[derive(Debug, Deserialize)]
struct EntryJson {
    #[serde(default)]
    heading: String,
    #[serde(default)]
    text: String,
}

/// Reads an EPWING dump and resolves gaiji markers.
///
/// Markers look like `{{n_a121}}` (narrow) or `{{w_b021}}` (wide) with a
/// hexadecimal code. Codes missing from the tables stay as literal markers.
pub struct EpwingLoader {
    gaiji: Regex,
}

impl EpwingLoader {
    pub fn new() -> Result<Self, LoadError> {
        Ok(Self {
            gaiji: Regex::new(r"\{\{([nw])_([0-9a-fA-F]+)\}\}")?,
        })
    }

    /// Load all subbook entries from file path, in book order
    pub fn load_from_file(
        &self,
        path: &Path,
        glyphs: &GlyphTables,
    ) -> Result<Vec<RawEntry>, LoadError> {
        tracing::info!("Loading EPWING dump from file: {}", path.display());
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        let file = File::open(path)?;
        let entries = self.load_from_reader(BufReader::new(file), glyphs)?;
        tracing::info!("Loaded {} EPWING entries", entries.len());
        Ok(entries)
    }

    pub fn load_from_reader(
        &self,
        reader: impl Read,
        glyphs: &GlyphTables,
    ) -> Result<Vec<RawEntry>, LoadError> {
        let book: BookJson = serde_json::from_reader(reader)?;
        if book.subbooks.is_empty() {
            return Err(LoadError::InvalidFormat("book has no subbooks".to_string()));
        }

        let mut entries = Vec::new();
        let mut unknown = 0;

        for subbook in book.subbooks {
            tracing::debug!(
                title = %subbook.title,
                entries = subbook.entries.len(),
                "reading subbook"
            );
            for entry in subbook.entries {
                let (heading, heading_misses) = self.substitute(&entry.heading, glyphs);
                let (text, text_misses) = self.substitute(&entry.text, glyphs);
                unknown += heading_misses + text_misses;
                entries.push(RawEntry { heading, text });
            }
        }

        if unknown > 0 {
            tracing::debug!(unknown, "gaiji markers without a substitution");
        }

        Ok(entries)
    }

    /// Replace gaiji markers; also returns how many markers had no mapping
    pub fn substitute(&self, text: &str, glyphs: &GlyphTables) -> (String, usize) {
        let mut misses = 0;

        let replaced = self.gaiji.replace_all(text, |caps: &Captures<'_>| {
            let table = if &caps[1] == "n" {
                &glyphs.narrow
            } else {
                &glyphs.wide
            };

            let glyph = u32::from_str_radix(&caps[2], 16)
                .ok()
                .and_then(|code| table.substitute(code));

            match glyph {
                Some(value) => value.to_string(),
                None => {
                    misses += 1;
                    caps[0].to_string()
                }
            }
        });

        (replaced.into_owned(), misses)
    }
}
