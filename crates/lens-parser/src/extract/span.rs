//! Normalizing parser spans into start/end positions.

use lens_core::Position;

use crate::ast::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSpan {
    pub start: Position,
    pub end: Position,
}

/// Resolve a span to concrete start and end positions.
///
/// The end is one past the last character of the declaration. When the parser
/// did not report it, it is derived from the captured source text; with
/// neither available the span collapses onto its start.
#[must_use]
pub fn resolve_span(span: &Span) -> ResolvedSpan {
    let end = span
        .end
        .or_else(|| span.text.as_deref().map(|text| end_of_text(span.start, text)))
        .unwrap_or_else(|| {
            tracing::debug!(start = %span.start, "span has no end information, using start");
            span.start
        });

    ResolvedSpan {
        start: span.start,
        end,
    }
}

/// Position right after the last character of `text`, when `text` begins at
/// `start`.
fn end_of_text(start: Position, text: &str) -> Position {
    let text = text.trim_end_matches(['\r', '\n']);
    let newlines = text.matches('\n').count();
    let last_line = text.rsplit('\n').next().unwrap_or(text);
    let last_width = saturating_u32(last_line.trim_end_matches('\r').chars().count());

    if newlines == 0 {
        Position::new(start.line, start.character.saturating_add(last_width))
    } else {
        Position::new(start.line.saturating_add(saturating_u32(newlines)), last_width)
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
