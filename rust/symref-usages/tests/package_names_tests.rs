mod common;

use itertools::Itertools;
use symref_index_core::{IndexSegment, MemorySegment, Term};
use symref_usages::{TermStep, package_names, stoppable_terms};

use common::{segment, session};

fn packages_segment() -> MemorySegment {
    let mut builder = MemorySegment::builder();
    for package in ["com.foo.bar.Baz", "com.foo.qux.Quux", "com.other.X", "com.foo.bar"] {
        builder
            .add_document([
                Term::new("packageName", package),
                Term::new("references", "a.B+-----"),
            ])
            .unwrap();
    }
    builder.build()
}

#[test]
fn test_direct_children_of_prefix() {
    let segment = packages_segment();
    let names = package_names(&segment, "packageName", Some("com.foo."), true).unwrap();
    assert_eq!(names.into_iter().collect_vec(), vec!["com.foo.bar", "com.foo.qux"]);
}

#[test]
fn test_direct_children_of_prefix_without_trailing_dot() {
    let segment = packages_segment();
    let names = package_names(&segment, "packageName", Some("com.foo"), true).unwrap();
    assert_eq!(names.into_iter().collect_vec(), vec!["com.foo.bar", "com.foo.qux"]);
}

#[test]
fn test_all_packages() {
    let segment = packages_segment();
    let names = package_names(&segment, "packageName", None, false).unwrap();
    assert_eq!(
        names.into_iter().collect_vec(),
        vec!["com.foo.bar", "com.foo.bar.Baz", "com.foo.qux.Quux", "com.other.X"]
    );

    let names = package_names(&segment, "packageName", None, true).unwrap();
    assert_eq!(names.into_iter().collect_vec(), vec!["com"]);
}

#[test]
fn test_walk_steps_over_one_field() {
    let segment = packages_segment();
    let (filter, start) = session().package_filter(Some("com.foo."), true);
    let steps = segment
        .terms_from(&start)
        .unwrap()
        .map(|term| filter.convert(&term))
        .collect_vec();
    assert_eq!(
        steps,
        vec![
            TermStep::Produce("com.foo.bar".to_string()),
            TermStep::Produce("com.foo.bar".to_string()),
            TermStep::Produce("com.foo.qux".to_string()),
            TermStep::Skip,
            TermStep::Stop,
        ]
    );

    let names = stoppable_terms(segment.terms_from(&start).unwrap(), |term| filter.convert(term))
        .collect_vec();
    assert_eq!(names, vec!["com.foo.bar", "com.foo.bar", "com.foo.qux"]);
}

#[test]
fn test_session_uses_configured_field() {
    let session = session();
    let segment = segment(&session);
    let names = session.package_names(&segment, Some("com."), true).unwrap();
    assert_eq!(
        names.into_iter().collect_vec(),
        vec!["com.bar", "com.foo", "com.foobar"]
    );

    let names = session.package_names(&segment, None, false).unwrap();
    assert_eq!(
        names.into_iter().collect_vec(),
        vec!["", "com.bar", "com.foo", "com.foo.impl", "com.foobar", "org.test"]
    );
}
