use std::fmt::Write as _;

use lens_core::{TestCase, TestSuite};
use serde::Serialize;

use crate::cli::OutputFormat;

/// Plain-text rendering for `--format text`.
pub trait TextView {
    fn render_text(&self) -> String;
}

/// Render a response to a string in the requested format.
pub fn render<T: Serialize + TextView + ?Sized>(
    value: &T,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Text => Ok(value.render_text()),
    }
}

/// Print a response in the requested format.
pub fn output<T: Serialize + TextView + ?Sized>(
    value: &T,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

impl TextView for [TestSuite] {
    fn render_text(&self) -> String {
        if self.is_empty() {
            return String::from("(no tests)");
        }
        let mut out = String::new();
        for suite in self {
            let _ = writeln!(
                out,
                "{} ({} {}-{})",
                suite.qualified_class, suite.file, suite.start, suite.end
            );
            for test in &suite.children {
                let _ = writeln!(out, "  {}", test_line(test));
            }
        }
        out.trim_end().to_string()
    }
}

impl TextView for Vec<TestSuite> {
    fn render_text(&self) -> String {
        self.as_slice().render_text()
    }
}

impl TextView for serde_json::Value {
    fn render_text(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| String::from("<invalid-json>"))
    }
}

fn test_line(test: &TestCase) -> String {
    let mut line = format!("{} {}-{}", test.method, test.start, test.end);
    let annotations: Vec<String> = test
        .annotations
        .iter()
        .map(|(key, values)| format!("{key}: {}", values.join(", ")))
        .collect();
    if !annotations.is_empty() {
        let _ = write!(line, " [{}]", annotations.join("; "));
    }
    line
}
