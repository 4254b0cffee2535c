// crates/whereis-core/src/raw.rs
use serde::Deserialize;

/// Raw building row as it comes from the dataset JSON.
///
/// ```json
/// { "code": "ERIE", "name": "Erie Hall", "aliases": ["Engineering Building"] }
/// ```
///
/// No validation happens here; see [`crate::model::convert::from_raw`].
#[derive(Debug, Clone, Deserialize)]
pub struct BuildingRaw {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl BuildingRaw {
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.to_owned(),
            name: name.to_owned(),
            aliases: Vec::new(),
        }
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }
}

impl From<(&str, &str)> for BuildingRaw {
    fn from((code, name): (&str, &str)) -> Self {
        BuildingRaw::new(code, name)
    }
}

pub type BuildingsRaw = Vec<BuildingRaw>;
