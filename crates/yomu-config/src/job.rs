use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Dictionary sources the importer knows how to convert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// EPWING dump of 大辞泉
    Daijisen,
    /// JMnedict JSON
    Jmnedict,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Daijisen => "daijisen",
            SourceKind::Jmnedict => "jmnedict",
        }
    }

    /// Title used when the job does not set one
    pub fn default_title(&self) -> &'static str {
        match self {
            SourceKind::Daijisen => "大辞泉",
            SourceKind::Jmnedict => "JMnedict",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One source file -> one output database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobConfig {
    pub source: SourceKind,
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(default)]
    pub title: Option<String>,
}

impl JobConfig {
    pub fn title(&self) -> &str {
        self.title
            .as_deref()
            .unwrap_or_else(|| self.source.default_title())
    }
}
