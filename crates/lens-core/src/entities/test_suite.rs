use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::TestCase;
use crate::position::Position;

/// The test methods of one concrete class, in declaration order.
///
/// The suite `id` is the qualified class name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestSuite {
    pub file: String,
    pub id: String,
    pub qualified_class: String,
    pub namespace: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub start: Position,
    pub end: Position,
    pub children: Vec<TestCase>,
}

impl TestSuite {
    /// Look up a child by method name.
    #[must_use]
    pub fn find(&self, method: &str) -> Option<&TestCase> {
        self.children.iter().find(|test| test.method == method)
    }
}
