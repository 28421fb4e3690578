#![allow(dead_code)]

use itertools::Itertools;
use symref_index_core::{DocIdSet, MemorySegment};
use symref_usages::{SessionOptions, UsageDocument, UsageType, UsagesSession};

use UsageType::*;

pub fn session() -> UsagesSession {
    UsagesSession::new(SessionOptions::default()).unwrap()
}

/// Six documents:
/// 0: com.foo       java.util.List{type}, com.foo.Bar{super-class}
/// 1: com.foo.impl  java.util.List{type, method}, com.foo.Bar{method}
/// 2: com.bar       java.util.List{super-interface}, com.foo.impl.Baz{type}
/// 3: org.test      java.util.Map{type}, com.foo.Bar{field}
/// 4: (unnamed)     Main{method}, java.util.List{method}
/// 5: com.foobar    com.foobar.X{type}
pub fn documents() -> Vec<UsageDocument> {
    vec![
        UsageDocument::new("com.foo")
            .with_reference("java.util.List", [TypeReference])
            .with_reference("com.foo.Bar", [SuperClass]),
        UsageDocument::new("com.foo.impl")
            .with_reference("java.util.List", [TypeReference, MethodReference])
            .with_reference("com.foo.Bar", [MethodReference]),
        UsageDocument::new("com.bar")
            .with_reference("java.util.List", [SuperInterface])
            .with_reference("com.foo.impl.Baz", [TypeReference]),
        UsageDocument::new("org.test")
            .with_reference("java.util.Map", [TypeReference])
            .with_reference("com.foo.Bar", [FieldReference]),
        UsageDocument::new("")
            .with_reference("Main", [MethodReference])
            .with_reference("java.util.List", [MethodReference]),
        UsageDocument::new("com.foobar").with_reference("com.foobar.X", [TypeReference]),
    ]
}

pub fn index(session: &UsagesSession, documents: &[UsageDocument]) -> MemorySegment {
    let mut builder = MemorySegment::builder();
    for document in documents {
        builder.add_document(session.document_terms(document)).unwrap();
    }
    builder.build()
}

pub fn segment(session: &UsagesSession) -> MemorySegment {
    index(session, &documents())
}

pub fn ids(set: &DocIdSet) -> Vec<u32> {
    set.doc_ids().collect_vec()
}

pub fn document_with(package: &str, name: &str, usage: UsageType) -> UsageDocument {
    UsageDocument::new(package).with_reference(name, [usage])
}
