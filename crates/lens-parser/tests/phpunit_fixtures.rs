//! End-to-end extraction over the PHPUnit fixtures in `tests/fixtures`.

use std::path::{Path, PathBuf};

use lens_core::{AnnotationKey, Annotations, Position, TestCase, TestSuite};
use lens_parser::{ParseOptions, parse, parse_file};
use pretty_assertions::assert_eq;
use rstest::rstest;

const TESTS_NS: &str = "Recca0120\\VSCode\\Tests";
const SUB_FOLDER_NS: &str = "Recca0120\\VSCode\\Tests\\SubFolder";

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn parse_fixture(name: &str) -> Vec<TestSuite> {
    let path = fixture_path(name);
    let source = std::fs::read_to_string(&path).expect("fixture should be readable");
    parse(&source, &format!("tests/{name}")).expect("fixture should parse")
}

fn given_test<'a>(suites: &'a [TestSuite], method: &str) -> &'a TestCase {
    suites
        .iter()
        .find_map(|suite| suite.find(method))
        .unwrap_or_else(|| panic!("should find test '{method}'"))
}

fn annotations<const N: usize>(pairs: [(AnnotationKey, &str); N]) -> Annotations {
    pairs.into_iter().collect()
}

struct Expected<'a> {
    fixture: &'a str,
    namespace: &'a str,
    class: &'a str,
    method: &'a str,
    annotations: Annotations,
    lines: (u32, u32),
}

impl Expected<'_> {
    fn test_case(&self) -> TestCase {
        let qualified_class = if self.namespace.is_empty() {
            self.class.to_string()
        } else {
            format!("{}\\{}", self.namespace, self.class)
        };
        TestCase {
            file: format!("tests/{}", self.fixture),
            id: format!("{qualified_class}::{}", self.method),
            qualified_class,
            namespace: self.namespace.to_string(),
            class_name: self.class.to_string(),
            method: self.method.to_string(),
            annotations: self.annotations.clone(),
            start: Position::new(self.lines.0, 4),
            end: Position::new(self.lines.1, 5),
        }
    }
}

fn assertions(method: &str, annotations: Annotations, lines: (u32, u32)) -> Expected<'_> {
    Expected {
        fixture: "AssertionsTest.php",
        namespace: TESTS_NS,
        class: "AssertionsTest",
        method,
        annotations,
        lines,
    }
}

fn attribute(method: &str, annotations: Annotations, lines: (u32, u32)) -> Expected<'_> {
    Expected {
        fixture: "AttributeTest.php",
        namespace: TESTS_NS,
        class: "AttributeTest",
        method,
        annotations,
        lines,
    }
}

#[rstest]
#[case::passed(assertions("test_passed", Annotations::new(), (12, 15)))]
#[case::failed_depends(assertions(
    "test_failed",
    annotations([(AnnotationKey::Depends, "test_passed")]),
    (20, 23)
))]
#[case::not_same(assertions("test_is_not_same", Annotations::new(), (25, 28)))]
#[case::risky(assertions("test_risky", Annotations::new(), (30, 33)))]
#[case::doc_marker(assertions("annotation_test", Annotations::new(), (38, 41)))]
#[case::skipped(assertions("test_skipped", Annotations::new(), (43, 46)))]
#[case::incomplete(assertions("test_incomplete", Annotations::new(), (48, 51)))]
#[case::provider_and_depends(assertions(
    "addition_provider",
    annotations([
        (AnnotationKey::DataProvider, "additionProvider"),
        (AnnotationKey::Depends, "test_passed"),
    ]),
    (60, 63)
))]
#[case::testdox(assertions(
    "balanceIsInitiallyZero",
    annotations([(AnnotationKey::Testdox, "has an initial balance of zero")]),
    (79, 82)
))]
#[case::test_attribute(attribute("hi", Annotations::new(), (14, 17)))]
#[case::data_provider_attribute(attribute(
    "testAdd",
    annotations([(AnnotationKey::DataProvider, "additionProvider")]),
    (20, 23)
))]
#[case::depends_attribute(attribute(
    "testPush",
    annotations([(AnnotationKey::Depends, "testEmpty")]),
    (44, 51)
))]
#[case::testdox_attribute(attribute(
    "balanceIsInitiallyZero",
    annotations([(AnnotationKey::Testdox, "has an initial balance of zero")]),
    (55, 58)
))]
#[case::static_method(Expected {
    fixture: "StaticMethodTest.php",
    namespace: TESTS_NS,
    class: "StaticMethodTest",
    method: "test_static_public_fail",
    annotations: Annotations::new(),
    lines: (9, 11),
})]
#[case::has_property(Expected {
    fixture: "SubFolder/HasPropertyTest.php",
    namespace: SUB_FOLDER_NS,
    class: "HasPropertyTest",
    method: "property",
    annotations: Annotations::new(),
    lines: (17, 20),
})]
#[case::leading_comments(Expected {
    fixture: "SubFolder/LeadingCommentsTest.php",
    namespace: SUB_FOLDER_NS,
    class: "LeadingCommentsTest",
    method: "firstLeadingComments",
    annotations: Annotations::new(),
    lines: (10, 13),
})]
#[case::use_trait(Expected {
    fixture: "SubFolder/UseTraitTest.php",
    namespace: SUB_FOLDER_NS,
    class: "UseTraitTest",
    method: "use_trait",
    annotations: Annotations::new(),
    lines: (12, 15),
})]
#[case::no_namespace(Expected {
    fixture: "NoNamespaceTest.php",
    namespace: "",
    class: "NoNamespaceTest",
    method: "test_no_namespace",
    annotations: Annotations::new(),
    lines: (7, 10),
})]
fn fixture_test_case(#[case] expected: Expected<'_>) {
    let suites = parse_fixture(expected.fixture);

    assert_eq!(given_test(&suites, expected.method), &expected.test_case());
}

#[test]
fn assertions_suite_lists_tests_in_declaration_order() {
    let suites = parse_fixture("AssertionsTest.php");

    assert_eq!(suites.len(), 1);
    let suite = &suites[0];
    assert_eq!(suite.id, "Recca0120\\VSCode\\Tests\\AssertionsTest");
    assert_eq!(suite.qualified_class, suite.id);
    assert_eq!(suite.class_name, "AssertionsTest");
    assert_eq!(suite.start, Position::new(8, 0));
    assert_eq!(suite.end, Position::new(83, 1));

    let methods: Vec<_> = suite.children.iter().map(|t| t.method.as_str()).collect();
    assert_eq!(
        methods,
        vec![
            "test_passed",
            "test_failed",
            "test_is_not_same",
            "test_risky",
            "annotation_test",
            "test_skipped",
            "test_incomplete",
            "addition_provider",
            "balanceIsInitiallyZero",
        ]
    );
}

#[test]
fn providers_and_helpers_are_not_tests() {
    let suites = parse_fixture("AttributeTest.php");

    let methods: Vec<_> = suites[0].children.iter().map(|t| t.method.as_str()).collect();
    assert_eq!(
        methods,
        vec!["hi", "testAdd", "testEmpty", "testPush", "balanceIsInitiallyZero"]
    );
}

#[rstest]
#[case::abstract_class("AbstractTest.php", 0)]
#[case::abstract_sibling_skipped("StaticMethodTest.php", 1)]
#[case::trait_skipped("SubFolder/UseTraitTest.php", 1)]
fn suite_counts(#[case] fixture: &str, #[case] expected: usize) {
    assert_eq!(parse_fixture(fixture).len(), expected);
}

#[test]
fn braced_namespaces_do_not_leak_into_each_other() {
    let suites = parse_fixture("MultipleNamespacesTest.php");

    let ids: Vec<_> = suites
        .iter()
        .flat_map(|suite| &suite.children)
        .map(|test| test.id.as_str())
        .collect();
    assert_eq!(
        ids,
        vec![
            "App\\Unit\\CalculatorTest::test_adds",
            "App\\Feature\\CheckoutTest::test_checkout",
        ]
    );

    let checkout = given_test(&suites, "test_checkout");
    assert_eq!(
        checkout.annotations.get(AnnotationKey::Depends),
        Some(&["\\App\\Unit\\CalculatorTest::test_adds".to_string()][..])
    );
}

#[test]
fn one_line_method_keeps_start_and_end_on_one_line() {
    let suites = parse_fixture("MultipleNamespacesTest.php");

    let adds = given_test(&suites, "test_adds");
    assert_eq!(adds.start, Position::new(8, 8));
    assert_eq!(adds.end, Position::new(8, 68));
}

#[test]
fn ids_are_unique_and_stable_across_runs() {
    let first = parse_fixture("AssertionsTest.php");
    let second = parse_fixture("AssertionsTest.php");
    assert_eq!(first, second);

    let mut ids: Vec<_> = first[0].children.iter().map(|t| t.id.clone()).collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[test]
fn parse_file_labels_records_with_the_given_path() {
    let path = fixture_path("NoNamespaceTest.php");

    let suites = parse_file(&path, &ParseOptions::default()).expect("fixture should parse");

    assert_eq!(suites[0].file, path.to_string_lossy());
    assert_eq!(suites[0].children[0].file, path.to_string_lossy());
}

#[test]
fn serialized_suite_uses_camel_case_fields() {
    let suites = parse_fixture("SubFolder/LeadingCommentsTest.php");

    let json = serde_json::to_value(&suites[0]).expect("suite should serialize");

    assert_eq!(json["qualifiedClass"], "Recca0120\\VSCode\\Tests\\SubFolder\\LeadingCommentsTest");
    assert_eq!(json["class"], "LeadingCommentsTest");
    assert_eq!(json["children"][0]["method"], "firstLeadingComments");
    assert_eq!(json["children"][0]["annotations"], serde_json::json!({}));
    assert_eq!(json["children"][0]["start"], serde_json::json!({"line": 10, "character": 4}));
}

#[test]
fn docblock_after_attribute_feeds_classification_and_annotations() {
    let source = "<?php\nclass LateDocTest\n{\n    #[DataProvider('provide')]\n    /**\n     * @test\n     * @depends test_one\n     */\n    public function checks_late_doc() {}\n}\n";

    let suites = parse(source, "LateDocTest.php").expect("source should parse");

    let test = given_test(&suites, "checks_late_doc");
    assert_eq!(
        test.annotations,
        annotations([
            (AnnotationKey::Depends, "test_one"),
            (AnnotationKey::DataProvider, "provide"),
        ])
    );
    assert_eq!(test.start, Position::new(9, 4));
}
