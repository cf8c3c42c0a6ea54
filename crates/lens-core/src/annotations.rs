//! Test metadata keyed by a fixed annotation vocabulary.
//!
//! PHPUnit accepts the same metadata through two syntaxes: docblock tags
//! (`@depends test_passed`) and attributes (`#[Depends('test_passed')]`).
//! Both land in the same [`Annotations`] map under the same [`AnnotationKey`].

use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::identity::NAMESPACE_SEPARATOR;

/// Metadata keys carried on a test case.
///
/// Serialized in lower camel case (`depends`, `dataProvider`, `testdox`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum AnnotationKey {
    #[serde(rename = "depends")]
    Depends,
    #[serde(rename = "dataProvider")]
    DataProvider,
    #[serde(rename = "testdox")]
    Testdox,
}

impl AnnotationKey {
    pub const ALL: [Self; 3] = [Self::Depends, Self::DataProvider, Self::Testdox];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Depends => "depends",
            Self::DataProvider => "dataProvider",
            Self::Testdox => "testdox",
        }
    }

    /// Docblock tag that introduces this key, including the `@`.
    #[must_use]
    pub const fn doc_tag(self) -> &'static str {
        match self {
            Self::Depends => "@depends",
            Self::DataProvider => "@dataProvider",
            Self::Testdox => "@testdox",
        }
    }

    /// Attribute class name that carries this key.
    #[must_use]
    pub const fn attribute_name(self) -> &'static str {
        match self {
            Self::Depends => "Depends",
            Self::DataProvider => "DataProvider",
            Self::Testdox => "TestDox",
        }
    }

    /// Whether the docblock argument is the rest of the line rather than a
    /// single token.
    #[must_use]
    pub const fn takes_free_text(self) -> bool {
        matches!(self, Self::Testdox)
    }

    /// Resolve an attribute name, qualified or not, to its key.
    ///
    /// Only the last namespace segment is compared, so
    /// `PHPUnit\Framework\Attributes\Depends` and `Depends` are equivalent.
    #[must_use]
    pub fn from_attribute(name: &str) -> Option<Self> {
        let short = name.rsplit(NAMESPACE_SEPARATOR).next().unwrap_or(name);
        Self::ALL
            .into_iter()
            .find(|key| key.attribute_name() == short)
    }

    /// Resolve a docblock tag such as `@dataProvider` to its key.
    #[must_use]
    pub fn from_doc_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.doc_tag() == tag)
    }
}

impl fmt::Display for AnnotationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered arguments per annotation key.
///
/// A key is present only once at least one non-empty argument was recorded
/// for it. Arguments keep the order in which they were pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Annotations(BTreeMap<AnnotationKey, Vec<String>>);

impl Annotations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one argument. Blank arguments are dropped.
    pub fn push(&mut self, key: AnnotationKey, value: impl Into<String>) {
        let value = value.into();
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        self.0.entry(key).or_default().push(value.to_string());
    }

    pub fn extend<I, S>(&mut self, key: AnnotationKey, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for value in values {
            self.push(key, value);
        }
    }

    /// Append every argument of `other` after the ones already held here.
    pub fn merge(&mut self, other: Self) {
        for (key, values) in other.0 {
            self.extend(key, values);
        }
    }

    #[must_use]
    pub fn get(&self, key: AnnotationKey) -> Option<&[String]> {
        self.0.get(&key).map(Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, key: AnnotationKey) -> bool {
        self.0.contains_key(&key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AnnotationKey, &[String])> {
        self.0.iter().map(|(key, values)| (*key, values.as_slice()))
    }
}

impl<S: Into<String>> FromIterator<(AnnotationKey, S)> for Annotations {
    fn from_iter<T: IntoIterator<Item = (AnnotationKey, S)>>(iter: T) -> Self {
        let mut annotations = Self::new();
        for (key, value) in iter {
            annotations.push(key, value);
        }
        annotations
    }
}
