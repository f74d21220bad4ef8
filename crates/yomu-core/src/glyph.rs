use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ImportError;

/// Replacement text for one legacy glyph code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glyph {
    /// May be empty: marker glyphs (camera, audio icons) are deleted outright
    pub value: String,
    /// Known rendering approximation, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Legacy code point -> Unicode substitution table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphTable {
    glyphs: BTreeMap<u32, Glyph>,
}

impl GlyphTable {
    pub const fn new() -> Self {
        Self {
            glyphs: BTreeMap::new(),
        }
    }

    /// Returns the previous glyph if the code was already mapped
    pub fn insert(&mut self, code: u32, glyph: Glyph) -> Option<Glyph> {
        self.glyphs.insert(code, glyph)
    }

    pub fn get(&self, code: u32) -> Option<&Glyph> {
        self.glyphs.get(&code)
    }

    pub fn substitute(&self, code: u32) -> Option<&str> {
        self.get(code).map(|g| g.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &Glyph)> {
        self.glyphs.iter().map(|(code, glyph)| (*code, glyph))
    }
}

/// Narrow (half-width) and wide (full-width) tables owned by one source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphTables {
    pub narrow: GlyphTable,
    pub wide: GlyphTable,
}

/// Tables for sources without legacy glyphs
pub static NO_GLYPHS: GlyphTables = GlyphTables {
    narrow: GlyphTable::new(),
    wide: GlyphTable::new(),
};

// On-disk shape: `{"narrow": [{"code": "a121", "value": " "}], "wide": [...]}`
#[derive(Deserialize)]
struct GlyphTablesJson {
    #[serde(default)]
    narrow: Vec<GlyphJson>,
    #[serde(default)]
    wide: Vec<GlyphJson>,
}

#[derive(Deserialize)]
struct GlyphJson {
    code: String,
    value: String,
    #[serde(default)]
    note: Option<String>,
}

impl GlyphTables {
    /// Parse a glyph data asset. Codes are hexadecimal, with or without `0x`.
    pub fn from_json(json: &str) -> Result<Self, ImportError> {
        let data: GlyphTablesJson = serde_json::from_str(json)?;

        Ok(Self {
            narrow: build_table("narrow", data.narrow)?,
            wide: build_table("wide", data.wide)?,
        })
    }
}

fn build_table(name: &str, raw: Vec<GlyphJson>) -> Result<GlyphTable, ImportError> {
    let mut table = GlyphTable::new();

    for entry in raw {
        let digits = entry.code.trim_start_matches("0x");
        let code = u32::from_str_radix(digits, 16).map_err(|e| {
            ImportError::GlyphTable(format!("{name} table: bad code `{}`: {e}", entry.code))
        })?;

        let glyph = Glyph {
            value: entry.value,
            note: entry.note,
        };
        if table.insert(code, glyph).is_some() {
            return Err(ImportError::GlyphTable(format!(
                "{name} table: duplicate code `{}`",
                entry.code
            )));
        }
    }

    Ok(table)
}
