//! The normalized record schema shared by the extractor and the tabulator.

use serde::{Deserialize, Deserializer, Serialize};

/// Title substituted when the source text names no title for an entry.
pub const DEFAULT_TITLE: &str = "aucun";

/// One extracted saint/martyr entry.
///
/// Field names are the on-disk JSON keys (`lieu`, `epoque`, `nom`, `titres`);
/// the per-day output files are arrays of this type. `lieu` and `epoque` may
/// be empty when the source text does not mention them. `titres` is never
/// empty: absent, empty or null title data all normalize to
/// `[DEFAULT_TITLE]`.
///
/// Deserialization is tolerant of the legacy single-title form, so both
/// `{"titre": "évêque"}` and `{"titres": ["évêque"]}` produce the same
/// record. Unknown keys are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Place associated with the entry, or `""` when not mentioned.
    #[serde(default)]
    pub lieu: String,

    /// Era or period, or `""` when not mentioned.
    #[serde(default)]
    pub epoque: String,

    /// Name of the saint or martyr.
    #[serde(default)]
    pub nom: String,

    /// Titles (e.g. "évêque", "abbé"). Always non-empty.
    #[serde(
        default = "default_titles",
        deserialize_with = "deserialize_titles",
        alias = "titre"
    )]
    pub titres: Vec<String>,
}

impl Record {
    /// The principal title: the first element of `titres`.
    pub fn primary_title(&self) -> &str {
        self.titres.first().map(String::as_str).unwrap_or(DEFAULT_TITLE)
    }
}

impl Default for Record {
    fn default() -> Self {
        Self {
            lieu: String::new(),
            epoque: String::new(),
            nom: String::new(),
            titres: default_titles(),
        }
    }
}

fn default_titles() -> Vec<String> {
    vec![DEFAULT_TITLE.to_string()]
}

/// Accept either a single title string (legacy `titre` key) or a list of
/// titles, coercing null, empty strings and empty lists to the default.
fn deserialize_titles<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TitleField {
        One(String),
        Many(Vec<String>),
    }

    let titles = match Option::<TitleField>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(TitleField::One(title)) => {
            if title.is_empty() {
                Vec::new()
            } else {
                vec![title]
            }
        }
        Some(TitleField::Many(titles)) => {
            titles.into_iter().filter(|t| !t.is_empty()).collect()
        }
    };

    if titles.is_empty() {
        Ok(default_titles())
    } else {
        Ok(titles)
    }
}
