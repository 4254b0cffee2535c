use pretty_assertions::assert_eq;
use proptest::prelude::*;
use whereis_core::{
    BuildingRaw, Directory, DirectoryError, MatchConfig, MatchResult, Resolver, SimilarityMetric,
};

fn example_dir() -> Directory {
    Directory::from_records([
        ("ERIE", "Erie Hall"),
        ("BABC", "Biological and Agricultural Building Complex"),
    ])
    .unwrap()
}

/// Flip the case of each char according to `mask`.
fn recase(s: &str, mask: &[bool]) -> String {
    s.chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| {
            if *upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

#[test]
fn worked_example() {
    let dir = example_dir();
    let r = Resolver::new(&dir);
    assert_eq!(r.resolve_by_text("erie"), MatchResult::Resolved("ERIE".into()));
    assert_eq!(r.resolve_by_text("erie haull"), MatchResult::Resolved("ERIE".into()));
    assert_eq!(r.resolve_by_text("xyz123"), MatchResult::NotFound);
}

#[test]
fn blank_queries_are_not_found() {
    let dir = Directory::bundled().unwrap();
    let r = Resolver::new(dir);
    assert_eq!(r.resolve_by_text(""), MatchResult::NotFound);
    assert_eq!(r.resolve_by_text("   "), MatchResult::NotFound);
}

#[test]
fn every_bundled_code_and_name_resolves_to_itself() {
    let dir = Directory::bundled().unwrap();
    for metric in [SimilarityMetric::SorensenDice, SimilarityMetric::JaroWinkler] {
        let r = Resolver::with_config(dir, MatchConfig::for_metric(metric));
        for b in dir.buildings() {
            let want = MatchResult::Resolved(b.code().to_owned());
            assert_eq!(r.resolve_by_text(b.code()), want);
            assert_eq!(r.resolve_by_text(&b.code().to_lowercase()), want);
            assert_eq!(r.resolve_by_text(b.name()), want);
            for alias in b.aliases() {
                assert_eq!(r.resolve_by_text(alias), want, "alias {alias}");
            }
            assert_eq!(r.display_name(b.code()).unwrap(), b.name());
        }
    }
}

#[test]
fn bundled_typos_resolve() {
    let dir = Directory::bundled().unwrap();
    let r = Resolver::new(dir);
    for (query, code) in [
        ("leddy libary", "LEDDY"),
        ("odete building", "ODET"),
        ("toldo centr", "TC"),
        ("lambton towr", "LT"),
        ("macdonald", "MACD"),
    ] {
        assert_eq!(r.resolve_by_text(query), MatchResult::Resolved(code.into()), "{query}");
    }
}

#[test]
fn generic_words_do_not_pick_a_building() {
    let dir = Directory::bundled().unwrap();
    let r = Resolver::new(dir);
    for word in ["hall", "Building", "centre", "chrysler"] {
        assert_eq!(r.resolve_by_text(word), MatchResult::NotFound, "{word}");
    }
    // words only one building carries still resolve
    for (word, code) in [("essex", "EH"), ("dillon", "DH"), ("vanier", "VH")] {
        assert_eq!(r.resolve_by_text(word), MatchResult::Resolved(code.into()), "{word}");
    }
    // an exact alias is decided before the fuzzy stage
    assert_eq!(r.resolve_by_text("library"), MatchResult::Resolved("LEDDY".into()));
}

#[test]
fn near_identical_names_tie_to_not_found() {
    let dir = Directory::from_records([
        ("EHW", "Erie Hall West"),
        ("EHE", "Erie Hall East"),
        ("LT", "Lambton Tower"),
    ])
    .unwrap();
    let r = Resolver::new(&dir);
    assert_eq!(r.resolve_by_text("Erie Hall"), MatchResult::NotFound);
    // the stages above fuzzy still resolve each record
    assert_eq!(r.resolve_by_text("erie hall east"), MatchResult::Resolved("EHE".into()));
}

#[test]
fn list_all_is_aligned_and_idempotent() {
    let dir = Directory::bundled().unwrap();
    let r = Resolver::new(dir);
    let first = r.list_all();
    let second = r.list_all();
    assert_eq!(first, second);
    assert_eq!(first.codes.len(), first.full_names.len());
    assert_eq!(first.len(), dir.len());

    let mut sorted = first.codes.clone();
    sorted.sort_unstable();
    assert_eq!(first.codes, sorted);

    for (code, name) in first.iter() {
        assert_eq!(dir.get(code).unwrap().name(), name);
    }
}

#[test]
fn list_order_ignores_dataset_order() {
    let rows = vec![
        BuildingRaw::new("LT", "Lambton Tower"),
        BuildingRaw::new("DH", "Dillon Hall"),
        BuildingRaw::new("ERIE", "Erie Hall"),
    ];
    let mut reversed = rows.clone();
    reversed.reverse();

    let a = Directory::from_records(rows).unwrap();
    let b = Directory::from_records(reversed).unwrap();
    assert_eq!(Resolver::new(&a).list_all(), Resolver::new(&b).list_all());
}

#[test]
fn unknown_code_is_a_contract_error() {
    let dir = example_dir();
    let err = Resolver::new(&dir).display_name("ZZZ").unwrap_err();
    assert!(matches!(err, DirectoryError::UnknownCode(_)));
    assert_eq!(err.to_string(), "unknown building code `ZZZ`");
}

#[test]
fn duplicate_code_aborts_load() {
    let result = Directory::from_records([
        ("ERIE", "Erie Hall"),
        ("LT", "Lambton Tower"),
        ("Erie", "Erie Hall Annex"),
    ]);
    assert!(matches!(result, Err(DirectoryError::DuplicateCode { .. })));
}

proptest! {
    #[test]
    fn code_resolves_in_any_casing(mask in proptest::collection::vec(any::<bool>(), 1..8)) {
        let dir = Directory::bundled().unwrap();
        let r = Resolver::new(dir);
        for b in dir.buildings() {
            let query = recase(b.code(), &mask);
            prop_assert_eq!(r.resolve_by_text(&query), MatchResult::Resolved(b.code().to_owned()));
        }
    }

    #[test]
    fn name_resolves_in_any_casing_and_spacing(
        mask in proptest::collection::vec(any::<bool>(), 1..16),
        pad in "[ \t]{0,3}",
        gap in "[ ]{1,3}",
    ) {
        let dir = Directory::bundled().unwrap();
        let r = Resolver::new(dir);
        for b in dir.buildings() {
            let spaced = b.name().split(' ').collect::<Vec<_>>().join(&gap);
            let query = format!("{pad}{}{pad}", recase(&spaced, &mask));
            prop_assert_eq!(r.resolve_by_text(&query), MatchResult::Resolved(b.code().to_owned()));
        }
    }

    #[test]
    fn resolution_never_panics(query in ".{0,40}") {
        let dir = Directory::bundled().unwrap();
        let r = Resolver::new(dir);
        if let MatchResult::Resolved(code) = r.resolve_by_text(&query) {
            prop_assert!(r.display_name(&code).is_ok());
        }
    }
}
