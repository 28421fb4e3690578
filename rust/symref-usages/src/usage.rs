//! Usage kinds and usage masks.

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use symref_common::{Result, error::Error};

/// How a document refers to a symbol.
///
/// The declaration order is the slot order of the references term encoding.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UsageType {
    SuperClass,
    SuperInterface,
    TypeReference,
    MethodReference,
    FieldReference,
    FunctionalImplementors,
}

impl UsageType {
    pub const COUNT: usize = 6;

    pub const ALL: [UsageType; UsageType::COUNT] = [
        UsageType::SuperClass,
        UsageType::SuperInterface,
        UsageType::TypeReference,
        UsageType::MethodReference,
        UsageType::FieldReference,
        UsageType::FunctionalImplementors,
    ];

    /// Position of this kind's slot in an encoded references term.
    pub const fn offset(&self) -> usize {
        *self as usize
    }

    pub const fn name(&self) -> &'static str {
        match self {
            UsageType::SuperClass => "super-class",
            UsageType::SuperInterface => "super-interface",
            UsageType::TypeReference => "type-reference",
            UsageType::MethodReference => "method-reference",
            UsageType::FieldReference => "field-reference",
            UsageType::FunctionalImplementors => "functional-implementors",
        }
    }

    pub const fn mask(&self) -> UsageMask {
        UsageMask::from_bits_truncate(1 << self.offset())
    }
}

impl TryFrom<&str> for UsageType {
    type Error = Error;

    fn try_from(name: &str) -> Result<Self> {
        UsageType::ALL
            .into_iter()
            .find(|usage| usage.name() == name)
            .ok_or_else(|| {
                Error::invalid_arg("usage", format!("Unrecognized usage kind: {name}"))
            })
    }
}

impl fmt::Display for UsageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// A set of [`UsageType`] values.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct UsageMask: u8 {
        const SUPER_CLASS = 1 << 0;
        const SUPER_INTERFACE = 1 << 1;
        const TYPE_REFERENCE = 1 << 2;
        const METHOD_REFERENCE = 1 << 3;
        const FIELD_REFERENCE = 1 << 4;
        const FUNCTIONAL_IMPLEMENTORS = 1 << 5;
    }
}

impl UsageMask {
    /// Kinds of the mask, in slot order.
    pub fn types(self) -> impl Iterator<Item = UsageType> {
        UsageType::ALL
            .into_iter()
            .filter(move |usage| self.contains(usage.mask()))
    }

    pub fn contains_type(self, usage: UsageType) -> bool {
        self.contains(usage.mask())
    }

    /// Parses a comma separated list of usage kind names, e.g.
    /// `"type-reference,method-reference"`. `"all"` selects every kind.
    pub fn parse(names: &str) -> Result<UsageMask> {
        names
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .try_fold(UsageMask::empty(), |mask, name| {
                if name == "all" {
                    Ok(UsageMask::all())
                } else {
                    Ok(mask | UsageType::try_from(name)?.mask())
                }
            })
    }
}

impl From<UsageType> for UsageMask {
    fn from(usage: UsageType) -> Self {
        usage.mask()
    }
}

impl FromIterator<UsageType> for UsageMask {
    fn from_iter<T: IntoIterator<Item = UsageType>>(iter: T) -> Self {
        iter.into_iter()
            .fold(UsageMask::empty(), |mask, usage| mask | usage.mask())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_follow_declaration_order() {
        for (i, usage) in UsageType::ALL.iter().enumerate() {
            assert_eq!(usage.offset(), i);
        }
        assert_eq!(UsageType::FieldReference.mask(), UsageMask::FIELD_REFERENCE);
    }

    #[test]
    fn test_mask_types_in_slot_order() {
        let mask = UsageMask::FIELD_REFERENCE | UsageMask::SUPER_CLASS | UsageMask::TYPE_REFERENCE;
        let types: Vec<_> = mask.types().collect();
        assert_eq!(
            types,
            vec![
                UsageType::SuperClass,
                UsageType::TypeReference,
                UsageType::FieldReference
            ]
        );
        assert_eq!(UsageMask::empty().types().count(), 0);
        assert_eq!(UsageMask::all().types().count(), UsageType::COUNT);
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            UsageMask::parse("type-reference, method-reference").unwrap(),
            UsageMask::TYPE_REFERENCE | UsageMask::METHOD_REFERENCE
        );
        assert_eq!(UsageMask::parse("all").unwrap(), UsageMask::all());
        assert_eq!(UsageMask::parse("").unwrap(), UsageMask::empty());
        assert!(UsageMask::parse("type-reference,calls").is_err());
    }

    #[test]
    fn test_collect_from_types() {
        let mask: UsageMask = [UsageType::SuperInterface, UsageType::SuperInterface]
            .into_iter()
            .collect();
        assert_eq!(mask, UsageMask::SUPER_INTERFACE);
        assert!(mask.contains_type(UsageType::SuperInterface));
        assert!(!mask.contains_type(UsageType::SuperClass));
    }

    #[test]
    fn test_names_round_trip() {
        for usage in UsageType::ALL {
            assert_eq!(UsageType::try_from(usage.name()).unwrap(), usage);
            let json = format!("\"{}\"", usage.name());
            let parsed: UsageType = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, usage);
        }
    }
}
