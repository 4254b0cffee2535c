//! Basic usage example for whereis-rs
//!
//! Resolves a few queries against the bundled building directory.

use whereis_core::{Directory, MatchResult, Resolver, Result};

fn main() -> Result<()> {
    println!("=== whereis-rs Basic Usage ===\n");

    let directory = Directory::bundled()?;
    let stats = directory.stats();
    println!("Loaded {} buildings ({} aliases)\n", stats.buildings, stats.aliases);

    let resolver = Resolver::new(directory);

    // Codes, names, aliases and typos all go through the same call
    for query in ["ERIE", "lambton tower", "Leddy", "odete building", "xyz123", "   "] {
        match resolver.resolve_by_text(query) {
            MatchResult::Resolved(code) => {
                println!("  {query:?} -> {} ({code})", resolver.display_name(&code)?);
            }
            MatchResult::NotFound => println!("  {query:?} -> not found"),
        }
    }
    println!();

    println!("--- All buildings ---");
    for (code, name) in resolver.list_all().iter() {
        println!("  {code:<8} {name}");
    }

    Ok(())
}
