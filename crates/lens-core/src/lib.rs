//! # lens-core
//!
//! Core record types for the Lens test inventory.
//!
//! This crate provides the types shared across all Lens crates:
//! - Source positions in editor conventions (1-based lines, 0-based columns)
//! - The annotation map attached to each test (`depends`, `dataProvider`, `testdox`)
//! - `TestCase` and `TestSuite` records, serializable to the camelCase JSON
//!   shape consumed by editor and test-runner integrations
//! - Identity helpers deriving qualified class names and unique test ids

pub mod annotations;
pub mod entities;
pub mod identity;
pub mod position;

pub use annotations::{AnnotationKey, Annotations};
pub use entities::{TestCase, TestSuite};
pub use identity::{NAMESPACE_SEPARATOR, qualified_class, unique_id};
pub use position::Position;
