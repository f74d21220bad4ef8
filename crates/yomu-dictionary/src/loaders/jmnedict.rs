use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::LoadError;
use crate::types::Jmnedict;

pub struct JmnedictLoader;

impl JmnedictLoader {
    /// Load JMnedict from file path
    pub fn load_from_file(path: &Path) -> Result<Jmnedict, LoadError> {
        tracing::info!("Loading JMnedict from file: {}", path.display());
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        let file = File::open(path)?;
        let dict = Self::from_reader(BufReader::new(file))?;
        tracing::info!(
            "Loaded {} JMnedict entries, {} entities",
            dict.entries.len(),
            dict.entities.len()
        );
        Ok(dict)
    }

    pub fn from_reader(reader: impl Read) -> Result<Jmnedict, LoadError> {
        let dict: Jmnedict = serde_json::from_reader(reader)?;
        Self::validate(dict)
    }

    pub fn from_json(json: &str) -> Result<Jmnedict, LoadError> {
        let dict: Jmnedict = serde_json::from_str(json)?;
        Self::validate(dict)
    }

    // Every entry needs at least one reading; a document that breaks this is
    // not JMnedict and the whole run is rejected.
    fn validate(dict: Jmnedict) -> Result<Jmnedict, LoadError> {
        if let Some(entry) = dict.entries.iter().find(|e| e.readings.is_empty()) {
            return Err(LoadError::InvalidFormat(format!(
                "entry {} has no r_ele",
                entry.sequence
            )));
        }
        Ok(dict)
    }
}
