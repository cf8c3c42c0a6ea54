//! Deciding which class members are tests.

use lens_core::NAMESPACE_SEPARATOR;

use crate::ast::{Member, MethodDecl};

const TEST_METHOD_PREFIX: &str = "test";
const TEST_DOC_MARKER: &str = "@test";
const TEST_ATTRIBUTE: &str = "Test";

/// Whether a class member is a test method.
///
/// Properties, constants and trait imports never are.
#[must_use]
pub fn is_test_candidate(member: &Member) -> bool {
    member.as_method().is_some_and(is_test_method)
}

/// A method is a test when its name starts with `test`, when a leading
/// comment mentions `@test`, or when it carries `#[Test]`.
///
/// Visibility and `static` play no part.
#[must_use]
pub fn is_test_method(method: &MethodDecl) -> bool {
    let matched = method.name.starts_with(TEST_METHOD_PREFIX)
        || has_doc_marker(method)
        || has_test_attribute(method);
    tracing::trace!(method = %method.name, matched, "classified method");
    matched
}

fn has_doc_marker(method: &MethodDecl) -> bool {
    !method.comments.is_empty() && method.comments.join("\n").contains(TEST_DOC_MARKER)
}

fn has_test_attribute(method: &MethodDecl) -> bool {
    method.attributes.iter().any(|attribute| {
        let short = attribute
            .name
            .rsplit(NAMESPACE_SEPARATOR)
            .next()
            .unwrap_or(&attribute.name);
        short == TEST_ATTRIBUTE
    })
}

#[cfg(test)]
mod tests {
    use lens_core::Position;
    use rstest::rstest;

    use super::*;
    use crate::ast::{Attribute, Span};

    fn method(name: &str) -> MethodDecl {
        MethodDecl::new(name, Span::at(Position::new(1, 4)))
    }

    #[rstest]
    #[case::snake_case("test_passed", true)]
    #[case::camel_case("testAdd", true)]
    #[case::bare_prefix("test", true)]
    #[case::capitalized("TestAdd", false)]
    #[case::suffix("addition_test", false)]
    #[case::provider("additionProvider", false)]
    fn name_prefix_is_case_sensitive(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_test_method(&method(name)), expected);
    }

    #[test]
    fn doc_marker_qualifies_any_name() {
        let annotated = method("annotation_test").with_comment("/**\n     * @test\n     */");
        assert!(is_test_method(&annotated));
    }

    #[test]
    fn doc_marker_is_found_in_any_leading_comment() {
        let annotated = method("firstLeadingComments")
            .with_comment("// first comment")
            .with_comment("/** @test */");
        assert!(is_test_method(&annotated));
    }

    #[test]
    fn plain_comment_does_not_qualify() {
        let commented = method("helper").with_comment("/** Builds the fixture. */");
        assert!(!is_test_method(&commented));
    }

    #[rstest]
    #[case::short("Test")]
    #[case::qualified("PHPUnit\\Framework\\Attributes\\Test")]
    #[case::fully_qualified("\\PHPUnit\\Framework\\Attributes\\Test")]
    fn test_attribute_qualifies(#[case] name: &str) {
        let attributed = method("hi").with_attribute(Attribute::new(name, Vec::<String>::new()));
        assert!(is_test_method(&attributed));
    }

    #[test]
    fn other_attributes_do_not_qualify() {
        let attributed = method("hi")
            .with_attribute(Attribute::new("DataProvider", ["additionProvider"]))
            .with_attribute(Attribute::new("TestWith", ["[1, 2]"]));
        assert!(!is_test_method(&attributed));
    }

    #[test]
    fn only_methods_are_candidates() {
        assert!(is_test_candidate(&Member::Method(method("test_passed"))));
        assert!(!is_test_candidate(&Member::Property("testProperty".into())));
        assert!(!is_test_candidate(&Member::Constant("TEST_VALUE".into())));
        assert!(!is_test_candidate(&Member::TraitUse(vec!["TestHelpers".into()])));
    }
}
