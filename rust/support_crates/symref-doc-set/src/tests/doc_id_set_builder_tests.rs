use itertools::Itertools;
use symref_common::error::ErrorKind;

use crate::{DocIdSet, DocIdSetBuilder};

#[test]
fn test_builder_unions_postings() {
    let mut builder = DocIdSetBuilder::new(4);
    assert_eq!(builder.extend_sorted([1, 2]), 2);
    assert_eq!(builder.extend_sorted([2, 3]), 1);
    assert_eq!(builder.count(), 3);

    let set = builder.build();
    assert_eq!(set.span(), 4);
    assert_eq!(set.doc_ids().collect_vec(), vec![1, 2, 3]);
}

#[test]
fn test_builder_set_reports_new_bits() {
    let mut builder = DocIdSetBuilder::new(2);
    assert!(builder.set(0));
    assert!(!builder.set(0));
    assert_eq!(builder.build(), DocIdSet::from_doc_ids(2, [0]));
}

#[test]
fn test_empty_builder() {
    let builder = DocIdSetBuilder::new(7);
    assert_eq!(builder.span(), 7);
    assert_eq!(builder.build(), DocIdSet::empty(7));
}

#[test]
#[should_panic(expected = "out of span")]
fn test_builder_rejects_out_of_span() {
    let mut builder = DocIdSetBuilder::new(3);
    builder.set(3);
}

#[test]
fn test_try_extend_sorted_reports_out_of_span() {
    let mut builder = DocIdSetBuilder::new(2);
    assert_eq!(builder.try_extend_sorted([0, 1]).unwrap(), 2);

    let err = builder.try_extend_sorted([1, 5, 0]).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidFormat { .. }));
    assert!(err.to_string().contains("doc id 5 out of span 2"));
    assert_eq!(builder.build(), DocIdSet::from_doc_ids(2, [0, 1]));
}
