// crates/whereis-core/src/text.rs

//! Query text normalization.
//!
//! Every comparison in the resolver (codes, names, aliases, fuzzy scores) runs
//! on the output of [`normalize`], so formatting noise in user input never
//! decides a match.

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Łódź` -> `Lodz`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use whereis_core::text::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key("ERIE"), "erie");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Canonicalize free-form query text.
///
/// - folds with [`fold_key`]
/// - collapses whitespace runs to a single space and trims both ends
/// - strips leading/trailing characters that are neither alphanumeric nor
///   whitespace (`"(Erie Hall)!"` → `"erie hall"`)
///
/// Internal punctuation such as hyphens is kept. Total: any input, including
/// the empty string, yields a value.
///
/// ```rust
/// use whereis_core::text::normalize;
///
/// assert_eq!(normalize("  Erie   HALL!! "), "erie hall");
/// assert_eq!(normalize("Jackman Dramatic-Art"), "jackman dramatic-art");
/// assert_eq!(normalize("   "), "");
/// ```
pub fn normalize(text: &str) -> String {
    let folded = fold_key(text);
    let collapsed = folded.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_owned()
}
