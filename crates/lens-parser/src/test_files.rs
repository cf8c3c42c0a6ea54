//! PHPUnit file and directory naming conventions.
//!
//! Used by `lens scan` to decide which files are worth parsing and which
//! directories to skip while walking a project.

/// Directory names PHP projects conventionally keep their tests in.
const TEST_DIRS: &[&str] = &["tests", "test", "Tests", "unit", "Unit", "Feature", "Integration"];

/// Directories holding third-party code that is never scanned.
const VENDORED_DIRS: &[&str] = &["vendor", "node_modules"];

const TEST_FILE_SUFFIX: &str = "Test.php";

/// Returns `true` if `dir_name` matches a known test directory convention.
///
/// Comparison is case-sensitive.
///
/// # Examples
///
/// ```
/// use lens_parser::is_test_dir;
/// assert!(is_test_dir("tests"));
/// assert!(is_test_dir("Feature"));
/// assert!(!is_test_dir("src"));
/// ```
#[must_use]
pub fn is_test_dir(dir_name: &str) -> bool {
    TEST_DIRS.contains(&dir_name)
}

/// Returns `true` if `file_name` follows PHPUnit's default `*Test.php`
/// naming.
///
/// The suffix is case-sensitive; a bare `Test.php` has no class name and is
/// rejected.
///
/// # Examples
///
/// ```
/// use lens_parser::is_test_file;
/// assert!(is_test_file("AssertionsTest.php"));
/// assert!(!is_test_file("Assertions.php"));
/// ```
#[must_use]
pub fn is_test_file(file_name: &str) -> bool {
    file_name.len() > TEST_FILE_SUFFIX.len() && file_name.ends_with(TEST_FILE_SUFFIX)
}

/// Returns `true` for dependency directories such as `vendor`.
#[must_use]
pub fn is_vendored_dir(dir_name: &str) -> bool {
    VENDORED_DIRS.contains(&dir_name)
}
