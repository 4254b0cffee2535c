//! Error handling example for whereis-rs
//!
//! Load-time errors are fatal; lookups that miss are plain values.

use whereis_core::{
    Directory, DirectoryError, MatchConfig, MatchResult, Resolver, Result, SimilarityMetric,
};

fn main() -> Result<()> {
    println!("=== whereis-rs Error Handling Example ===\n");

    // Example 1: duplicate codes abort the whole load
    println!("--- Example 1: Duplicate building codes ---");
    match Directory::from_records([("ERIE", "Erie Hall"), ("erie", "Erie Hall Annex")]) {
        Ok(_) => println!("✗ unexpectedly loaded"),
        Err(e @ DirectoryError::DuplicateCode { .. }) => println!("✓ rejected: {e}"),
        Err(e) => return Err(e),
    }
    println!();

    // Example 2: malformed JSON
    println!("--- Example 2: Malformed dataset ---");
    match Directory::from_json_str(r#"[{"code": "LT"}]"#) {
        Ok(_) => println!("✗ unexpectedly loaded"),
        Err(e) => println!("✓ rejected: {e}"),
    }
    println!();

    let directory = Directory::from_records([
        ("EHW", "Erie Hall West"),
        ("EHE", "Erie Hall East"),
        ("LT", "Lambton Tower"),
    ])?;

    // Example 3: ambiguous queries are NotFound, not an arbitrary pick
    println!("--- Example 3: Ambiguous query ---");
    let resolver = Resolver::new(&directory);
    match resolver.resolve_by_text("erie hall") {
        MatchResult::Resolved(code) => println!("  resolved to {code}"),
        MatchResult::NotFound => println!("  'erie hall' is ambiguous -> not found"),
    }
    println!();

    // Example 4: calling display_name with an unresolved code is a bug
    println!("--- Example 4: Unknown code ---");
    if let Err(e) = resolver.display_name("ZZZ") {
        println!("  {e}");
    }
    println!();

    // Example 5: thresholds are validated up front
    println!("--- Example 5: Invalid threshold ---");
    match MatchConfig::for_metric(SimilarityMetric::JaroWinkler).with_min_score(0.0) {
        Ok(config) => {
            let resolver = Resolver::with_config(&directory, config);
            println!("✗ accepted threshold {}", resolver.config().min_score());
        }
        Err(e) => println!("  {e}"),
    }

    Ok(())
}
