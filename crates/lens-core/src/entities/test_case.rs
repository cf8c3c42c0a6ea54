use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::annotations::Annotations;
use crate::position::Position;

/// A single test method.
///
/// `start` is the first modifier of the method declaration and `end` is one
/// past its closing brace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub file: String,
    pub id: String,
    pub qualified_class: String,
    pub namespace: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub method: String,
    pub annotations: Annotations,
    pub start: Position,
    pub end: Position,
}
