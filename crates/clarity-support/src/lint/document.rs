// Copyright 2026 the clarity-support authors
// SPDX-License-Identifier: Apache-2.0

//! A lint view over a source buffer.
//!
//! Lint rules mix whole-document scans with per-line scans. `Document`
//! computes the line-start offsets once so every rule shares the same
//! bookkeeping instead of re-splitting the text per check.

use crate::source_analysis::Span;

/// Full document text with precomputed line boundaries.
#[derive(Debug, Clone)]
pub struct Document<'src> {
    text: &'src str,
    line_starts: Vec<u32>,
}

impl<'src> Document<'src> {
    /// Creates a document view, computing line boundaries in one pass.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "source buffers over 4GB are not supported"
    )]
    pub fn new(text: &'src str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| (i + 1) as u32))
            .collect();
        Self { text, line_starts }
    }

    /// Returns the full document text.
    #[must_use]
    pub fn text(&self) -> &'src str {
        self.text
    }

    /// Returns the document length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true if the document is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns a span covering the whole document.
    #[must_use]
    pub fn full_span(&self) -> Span {
        Span::from(0..self.text.len())
    }

    /// Returns the number of lines (a trailing newline starts a final empty
    /// line, matching editor row counting).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Iterates over lines as `(span, text)` pairs, excluding the newline.
    pub fn lines(&self) -> impl Iterator<Item = (Span, &'src str)> + '_ {
        (0..self.line_starts.len()).map(move |i| {
            let start = self.line_starts[i] as usize;
            let end = self
                .line_starts
                .get(i + 1)
                .map_or(self.text.len(), |&next| next as usize - 1);
            (Span::from(start..end), &self.text[start..end])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_has_one_empty_line() {
        let doc = Document::new("");
        assert!(doc.is_empty());
        assert_eq!(doc.line_count(), 1);
        let lines: Vec<_> = doc.lines().collect();
        assert_eq!(lines, vec![(Span::new(0, 0), "")]);
    }

    #[test]
    fn lines_exclude_the_newline() {
        let doc = Document::new("(ok 1)\n;; two\nend");
        let lines: Vec<_> = doc.lines().collect();
        assert_eq!(
            lines,
            vec![
                (Span::new(0, 6), "(ok 1)"),
                (Span::new(7, 13), ";; two"),
                (Span::new(14, 17), "end"),
            ]
        );
    }

    #[test]
    fn trailing_newline_yields_final_empty_line() {
        let doc = Document::new("a\n");
        let lines: Vec<_> = doc.lines().collect();
        assert_eq!(lines, vec![(Span::new(0, 1), "a"), (Span::new(2, 2), "")]);
    }

    #[test]
    fn full_span_covers_everything() {
        let doc = Document::new("hello\nworld");
        assert_eq!(doc.full_span(), Span::new(0, 11));
        assert_eq!(doc.len(), 11);
    }
}
