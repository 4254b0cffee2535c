// crates/whereis-core/src/model/convert.rs
use super::domain::{canonical_code, Building, Directory};
use crate::error::{DirectoryError, Result};
use crate::raw::BuildingRaw;
use crate::text::normalize;
use std::collections::{BTreeMap, HashSet};

/// **Standard Converter:** Raw rows -> validated [`Directory`].
///
/// All-or-nothing: the first invalid row aborts the build and no partial
/// directory is returned.
pub fn from_raw<I>(rows: I) -> Result<Directory>
where
    I: IntoIterator<Item = BuildingRaw>,
{
    let mut buildings = BTreeMap::new();
    // Codes that only differ by folding ("LT" / "lt." / "Lt") collide on the code stage.
    let mut code_keys = HashSet::new();

    for (idx, row) in rows.into_iter().enumerate() {
        let code = canonical_code(&row.code);
        let code_key = normalize(&code);
        if code_key.is_empty() {
            return Err(DirectoryError::Malformed(format!(
                "row {idx}: building code `{}` is empty",
                row.code
            )));
        }
        if code.chars().any(char::is_whitespace) {
            return Err(DirectoryError::Malformed(format!(
                "row {idx}: building code `{code}` contains whitespace"
            )));
        }

        let name = row.name.trim().to_owned();
        if normalize(&name).is_empty() {
            return Err(DirectoryError::Malformed(format!(
                "row {idx}: building `{code}` has an empty full name"
            )));
        }

        let mut aliases = Vec::with_capacity(row.aliases.len());
        for alias in row.aliases {
            let alias = alias.trim().to_owned();
            if normalize(&alias).is_empty() {
                return Err(DirectoryError::Malformed(format!(
                    "row {idx}: building `{code}` has an empty alias"
                )));
            }
            aliases.push(alias);
        }

        if !code_keys.insert(code_key) {
            return Err(DirectoryError::DuplicateCode { code });
        }

        buildings.insert(code.clone(), Building::new(code, name, aliases));
    }

    Ok(Directory { buildings })
}

impl Directory {
    /// Validate and build a directory from `(code, name, aliases)` rows.
    ///
    /// Fails with [`DirectoryError::DuplicateCode`] when two rows share a code
    /// (case-insensitive) and with [`DirectoryError::Malformed`] on empty codes,
    /// names or aliases.
    pub fn from_records<I, R>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: Into<BuildingRaw>,
    {
        let dir = from_raw(rows.into_iter().map(Into::into))?;
        let stats = dir.stats();
        tracing::info!(
            buildings = stats.buildings,
            aliases = stats.aliases,
            "building directory loaded"
        );
        Ok(dir)
    }
}
