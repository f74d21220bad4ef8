use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use yomu_core::{ImportOutput, Kanji, TagMeta, Term};

/// Everything handed to the lookup application for one source
#[derive(Debug, Serialize)]
pub struct Database {
    pub title: String,
    pub revision: String,
    pub sequenced: bool,
    pub terms: Vec<Term>,
    pub kanji: Vec<Kanji>,
    pub tags: BTreeMap<String, TagMeta>,
}

impl Database {
    pub fn new(title: &str, import: ImportOutput, tags: BTreeMap<String, TagMeta>) -> Self {
        Self {
            title: title.to_string(),
            revision: import.revision,
            sequenced: true,
            terms: import.terms,
            kanji: import.kanji,
            tags,
        }
    }
}

/// Serialize the whole database, then move it into place.
/// A failed run never leaves a partial file at `path`.
pub fn write_database(path: &Path, database: &Database, pretty: bool) -> anyhow::Result<()> {
    let bytes = if pretty {
        serde_json::to_vec_pretty(database)?
    } else {
        serde_json::to_vec(database)?
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let staging = staging_path(path);
    if let Err(e) = fs::write(&staging, &bytes).and_then(|()| fs::rename(&staging, path)) {
        let _ = fs::remove_file(&staging);
        return Err(e.into());
    }

    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote database");
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".partial");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use yomu_core::TermBuilder;

    fn database() -> Database {
        let mut builder = TermBuilder::new("愛", "あい");
        builder.add_rule("vs").add_glossary(["love"]);

        let import = ImportOutput {
            revision: "daijisen2".to_string(),
            terms: builder.build().into_iter().collect(),
            kanji: Vec::new(),
            skipped: 0,
        };
        Database::new("大辞泉", import, BTreeMap::new())
    }

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("yomu-output-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn writes_compact_and_pretty() {
        let compact = scratch("compact.json");
        write_database(&compact, &database(), false).unwrap();
        let text = fs::read_to_string(&compact).unwrap();
        assert!(!text.contains('\n'));

        let pretty = scratch("pretty.json");
        write_database(&pretty, &database(), true).unwrap();
        let text = fs::read_to_string(&pretty).unwrap();
        assert!(text.contains("\n  \"title\""));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["title"], "大辞泉");
        assert_eq!(value["revision"], "daijisen2");
        assert_eq!(value["sequenced"], true);
        assert_eq!(value["terms"][0]["expression"], "愛");
        assert_eq!(value["terms"][0]["reading"], "あい");
        assert_eq!(value["terms"][0]["rules"], serde_json::json!(["vs"]));
        assert_eq!(value["terms"][0]["glossary"], serde_json::json!(["love"]));
        assert_eq!(value["terms"][0]["sequence"], 0);

        assert!(!staging_path(&pretty).exists());
        let _ = fs::remove_dir_all(compact.parent().unwrap());
    }

    #[test]
    fn failed_rename_removes_staging_file() {
        // A directory in the way makes the final rename fail
        let blocked = std::env::temp_dir()
            .join(format!("yomu-output-blocked-{}", std::process::id()))
            .join("blocked.json");
        fs::create_dir_all(&blocked).unwrap();

        assert!(write_database(&blocked, &database(), false).is_err());
        assert!(!staging_path(&blocked).exists());
        assert!(blocked.is_dir());
        let _ = fs::remove_dir_all(blocked.parent().unwrap());
    }
}
