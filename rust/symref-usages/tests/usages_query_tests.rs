mod common;

use itertools::Itertools;
use symref_common::error::ErrorKind;
use symref_index_core::{Occur, Query};
use symref_usages::{SearchScopeType, StandardScope, UsageMask, UsageType};

use common::{ids, segment, session};

fn pattern_texts(query: &Query) -> Vec<String> {
    match query {
        Query::Boolean(boolean) => boolean
            .clauses()
            .iter()
            .flat_map(|clause| pattern_texts(&clause.query))
            .collect(),
        other => vec![other.as_pattern().unwrap().term().text().to_string()],
    }
}

#[test]
fn test_should_has_one_clause_per_kind() {
    let session = session();
    let mask = UsageMask::SUPER_CLASS | UsageMask::TYPE_REFERENCE | UsageMask::FIELD_REFERENCE;
    let query = session
        .usages_query("java.util.List", mask, Occur::Should)
        .unwrap();

    let boolean = query.as_boolean().unwrap();
    assert_eq!(boolean.len(), 3);
    assert!(boolean.clauses().iter().all(|c| c.occur == Occur::Should));
    assert!(
        boolean
            .clauses()
            .iter()
            .all(|c| matches!(c.query, Query::Wildcard(_)))
    );
    assert_eq!(
        pattern_texts(&query),
        vec![
            "java.util.List+?????",
            "java.util.List??+???",
            "java.util.List????+?",
        ]
    );
}

#[test]
fn test_must_is_single_combined_query() {
    let session = session();
    let mask = UsageMask::TYPE_REFERENCE | UsageMask::METHOD_REFERENCE;
    let query = session
        .usages_query("java.util.List", mask, Occur::Must)
        .unwrap();
    assert!(matches!(query, Query::Wildcard(_)));
    assert_eq!(pattern_texts(&query), vec!["java.util.List??++??"]);
    assert_eq!(query.as_pattern().unwrap().field(), "references");
}

#[test]
fn test_invalid_arguments() {
    let session = session();
    let all = UsageMask::all();
    for result in [
        session.usages_query("java.util.List", all, Occur::MustNot),
        session.usages_query("", all, Occur::Should),
        session.usages_query("java.util.List", UsageMask::empty(), Occur::Must),
        session.package_usages_query("java.util", UsageMask::empty(), Occur::Should),
        session.package_usages_query("java.util", all, Occur::MustNot),
    ] {
        let err = result.unwrap_err();
        assert!(
            matches!(err.kind(), ErrorKind::InvalidArgument { .. }),
            "unexpected error: {err}"
        );
    }
}

#[test]
fn test_should_matches_any_kind() {
    let session = session();
    let segment = segment(&session);
    let scope: [&dyn SearchScopeType; 1] = [&StandardScope::Source];

    let find = |name: &str, mask: UsageMask, operator: Occur| {
        ids(&session.find_usages(&segment, name, mask, operator, &scope).unwrap())
    };

    assert_eq!(find("java.util.List", UsageMask::TYPE_REFERENCE, Occur::Should), vec![0, 1]);
    assert_eq!(
        find(
            "java.util.List",
            UsageMask::TYPE_REFERENCE | UsageMask::METHOD_REFERENCE,
            Occur::Should
        ),
        vec![0, 1, 4]
    );
    assert_eq!(find("java.util.List", UsageMask::all(), Occur::Should), vec![0, 1, 2, 4]);
    assert_eq!(find("java.util.Lis", UsageMask::all(), Occur::Should), Vec::<u32>::new());
}

#[test]
fn test_must_requires_every_kind_jointly() {
    let session = session();
    let segment = segment(&session);
    let scope: [&dyn SearchScopeType; 1] = [&StandardScope::Source];
    let mask = UsageMask::TYPE_REFERENCE | UsageMask::METHOD_REFERENCE;

    let hits = session
        .find_usages(&segment, "java.util.List", mask, Occur::Must, &scope)
        .unwrap();
    assert_eq!(ids(&hits), vec![1]);

    let hits = session
        .find_usages(&segment, "com.foo.Bar", UsageMask::SUPER_CLASS, Occur::Must, &scope)
        .unwrap();
    assert_eq!(ids(&hits), vec![0]);
}

#[test]
fn test_package_usages_one_level_only() {
    let session = session();
    let segment = segment(&session);
    let scope: [&dyn SearchScopeType; 1] = [&StandardScope::Source];

    let find = |package: &str, mask: UsageMask, operator: Occur| {
        let hits = session
            .find_package_usages(&segment, package, mask, operator, &scope)
            .unwrap();
        ids(&hits)
    };

    // com.foo.impl.Baz (doc 2) is a subpackage resource; com.foobar.X (doc 5)
    // only shares the text prefix.
    assert_eq!(find("com.foo", UsageMask::all(), Occur::Should), vec![0, 1, 3]);
    assert_eq!(find("com.foo.impl", UsageMask::all(), Occur::Should), vec![2]);
    assert_eq!(find("java.util", UsageMask::TYPE_REFERENCE, Occur::Should), vec![0, 1, 3]);
    assert_eq!(
        find(
            "java.util",
            UsageMask::TYPE_REFERENCE | UsageMask::METHOD_REFERENCE,
            Occur::Must
        ),
        vec![1]
    );
    assert_eq!(find("", UsageMask::all(), Occur::Should), vec![4]);
    assert_eq!(find("java", UsageMask::all(), Occur::Should), Vec::<u32>::new());
}

#[test]
fn test_package_usages_query_shape() {
    let session = session();
    let query = session
        .package_usages_query("com.foo", UsageMask::SUPER_CLASS, Occur::Should)
        .unwrap();
    let boolean = query.as_boolean().unwrap();
    assert_eq!(boolean.len(), 1);
    let clause = &boolean.clauses()[0];
    assert!(matches!(clause.query, Query::Regexp(_)));
    assert_eq!(pattern_texts(&query), vec![r"com\.foo\.[^\.]+\+....."]);
    assert_eq!(clause.query.as_pattern().unwrap().literal_prefix(), "com.foo.");
}

#[test]
fn test_round_trip_random_masks() {
    fastrand::seed(7_340_221);
    let session = session();
    for _ in 0..32 {
        let mask = UsageMask::from_bits_truncate(fastrand::u8(1..64));

        // One document per kind, plus one referring to another symbol.
        let mut documents = UsageType::ALL
            .into_iter()
            .map(|usage| common::document_with("a.b", "x.Target", usage))
            .collect_vec();
        documents.push(common::document_with("a.b", "x.Other", UsageType::SuperClass));
        let segment = common::index(&session, &documents);

        let hits = session
            .find_usages(
                &segment,
                "x.Target",
                mask,
                Occur::Should,
                &[&StandardScope::Dependencies],
            )
            .unwrap();
        let expected = mask.types().map(|usage| usage.offset() as u32).collect_vec();
        assert_eq!(ids(&hits), expected, "mask {mask:?}");
    }
}
