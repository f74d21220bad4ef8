use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use yomu_config::{JobConfig, SourceKind};
use yomu_core::{Extractor, Importer};
use yomu_dictionary::{EpwingLoader, JmnedictLoader};
use yomu_lang_japanese::{DaijisenExtractor, JmnedictExtractor, compute_tag_meta};

use crate::output::{self, Database};

#[derive(Debug)]
pub struct Summary {
    pub title: String,
    pub output: PathBuf,
    pub terms: usize,
    pub skipped: usize,
}

/// Load, extract, crush and write one source. Blocking.
pub fn convert(job: &JobConfig, parallel: bool, pretty: bool) -> anyhow::Result<Summary> {
    let started = Instant::now();
    tracing::info!(source = %job.source, input = %job.input.display(), "converting");

    let (import, tags) = match job.source {
        SourceKind::Daijisen => {
            let extractor = DaijisenExtractor::new().context("building Daijisen extractor")?;
            let entries = EpwingLoader::new()?
                .load_from_file(&job.input, extractor.glyph_tables())
                .with_context(|| format!("loading {}", job.input.display()))?;

            let import = Importer::new(&extractor).parallel(parallel).run(&entries);
            (import, BTreeMap::new())
        }
        SourceKind::Jmnedict => {
            let dict = JmnedictLoader::load_from_file(&job.input)
                .with_context(|| format!("loading {}", job.input.display()))?;

            let extractor = JmnedictExtractor::new();
            let import = Importer::new(&extractor)
                .parallel(parallel)
                .run(&dict.entries);
            (import, compute_tag_meta(&dict.entities))
        }
    };

    let summary = Summary {
        title: job.title().to_string(),
        output: job.output.clone(),
        terms: import.terms.len(),
        skipped: import.skipped,
    };

    let database = Database::new(job.title(), import, tags);
    output::write_database(&job.output, &database, pretty)
        .with_context(|| format!("writing {}", job.output.display()))?;

    tracing::info!(
        source = %job.source,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "conversion finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("yomu-convert-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[test]
    fn converts_epwing_dump() {
        let input = scratch("daijisen-in.json");
        fs::write(
            &input,
            r#"{"subbooks": [{"entries": [
                {"heading": "あいする【愛する】", "text": "［動サ変］{{w_c463}}"},
                {"heading": "あいする【愛する】", "text": "second"}
            ]}]}"#,
        )
        .unwrap();

        let job = JobConfig {
            source: SourceKind::Daijisen,
            input,
            output: scratch("daijisen-out.json"),
            title: None,
        };
        let summary = convert(&job, false, false).unwrap();
        assert_eq!(summary.title, "大辞泉");
        // Same heading, different rules: not merged
        assert_eq!(summary.terms, 2);

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&job.output).unwrap()).unwrap();
        assert_eq!(value["revision"], "daijisen2");
        assert_eq!(value["terms"][0]["glossary"][0], "［動サ変］");
        assert_eq!(value["terms"][0]["rules"], serde_json::json!(["vs"]));
    }

    #[test]
    fn converts_jmnedict_with_tag_meta() {
        let input = scratch("jmnedict-in.json");
        fs::write(
            &input,
            r#"{"entities": {"surname": "family or surname"},
                "entries": [{"ent_seq": 1, "k_ele": [{"keb": "佐藤"}], "r_ele": [{"reb": "さとう"}],
                             "trans": [{"name_type": ["surname"], "trans_det": ["Satou"]}]}]}"#,
        )
        .unwrap();

        let job = JobConfig {
            source: SourceKind::Jmnedict,
            input,
            output: scratch("jmnedict-out.json"),
            title: Some("Names".to_string()),
        };
        let summary = convert(&job, true, true).unwrap();
        assert_eq!(summary.terms, 1);

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&job.output).unwrap()).unwrap();
        assert_eq!(value["title"], "Names");
        assert_eq!(value["tags"]["surname"]["class"], "name");
        assert_eq!(value["terms"][0]["tags"], serde_json::json!(["surname"]));
    }

    #[test]
    fn failed_load_writes_nothing() {
        let job = JobConfig {
            source: SourceKind::Jmnedict,
            input: scratch("missing.json"),
            output: scratch("never-written.json"),
            title: None,
        };
        assert!(convert(&job, false, false).is_err());
        assert!(!job.output.exists());
    }
}
