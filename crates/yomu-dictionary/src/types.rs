use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Whole JMnedict document: entries plus the entity (code -> description) table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Jmnedict {
    #[serde(default)]
    pub entities: BTreeMap<String, String>,
    #[serde(default)]
    pub entries: Vec<JmnedictEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JmnedictEntry {
    #[serde(rename = "ent_seq", default)]
    pub sequence: u64,
    #[serde(rename = "k_ele", default)]
    pub kanji: Vec<JmnedictKanji>,
    #[serde(rename = "r_ele", default)]
    pub readings: Vec<JmnedictReading>,
    #[serde(rename = "trans", default)]
    pub translations: Vec<JmnedictTranslation>,
}

/// Kanji form (`k_ele`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JmnedictKanji {
    #[serde(rename = "keb")]
    pub expression: String,
    #[serde(rename = "ke_inf", default)]
    pub information: Vec<String>,
    #[serde(rename = "ke_pri", default)]
    pub priorities: Vec<String>,
}

/// Reading form (`r_ele`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JmnedictReading {
    #[serde(rename = "reb")]
    pub reading: String,
    /// Kanji forms this reading does NOT apply to
    #[serde(rename = "re_restr", default)]
    pub restrictions: Vec<String>,
    #[serde(rename = "re_inf", default)]
    pub information: Vec<String>,
    #[serde(rename = "re_pri", default)]
    pub priorities: Vec<String>,
}

/// Translation group (`trans`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JmnedictTranslation {
    #[serde(rename = "name_type", default)]
    pub name_types: Vec<String>,
    #[serde(rename = "trans_det", default)]
    pub translations: Vec<String>,
}
