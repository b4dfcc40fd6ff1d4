// Copyright 2026 the clarity-support authors
// SPDX-License-Identifier: Apache-2.0

//! Completion provider for the language service.
//!
//! Suggests completions at the cursor position based on the typed query
//! prefix. Candidates come from the symbol tables and the snippet template
//! table; there is no scope analysis — every table entry whose label starts
//! with the query is eligible.
//!
//! # Design
//!
//! - The query is the maximal trailing identifier run before the cursor.
//! - An empty query only completes when the host marks the request explicit,
//!   so auto-popups stay quiet on ordinary keystrokes.
//! - On a comment-only line the provider proposes section headers instead of
//!   code symbols.
//! - Matching is literal, case-sensitive prefix matching; no fuzzy or
//!   subsequence matching.
//! - A small promoted set ranks first: definition skeletons, then the
//!   transaction-context keywords, then other snippet-backed entries. Ties
//!   keep symbol-table order.

use std::collections::HashSet;

use tracing::trace;

use crate::language_service::{Completion, CompletionKind, Position, TextEdit};
use crate::source_analysis::Span;
use crate::symbols::{
    BUILTIN_FUNCTIONS, CONSTANTS, CONTROL_KEYWORDS, DEFINE_KEYWORDS, LOGIC_OPERATORS, OPERATORS,
    SECTION_HEADERS, TEMPLATES, TYPE_SIGNATURES, template_for,
};

/// Definition keywords promoted above every other candidate.
const PROMOTED_DEFINITIONS: &[&str] = &[
    "define-public",
    "define-private",
    "define-read-only",
    "define-constant",
    "define-data-var",
    "define-map",
];

/// Context keywords promoted above snippet-backed candidates.
const PROMOTED_CONTEXT_KEYWORDS: &[&str] = &["tx-sender", "block-height", "contract-caller"];

const RANK_PROMOTED_DEFINITION: u8 = 3;
const RANK_CONTEXT_KEYWORD: u8 = 2;
const RANK_TEMPLATE: u8 = 1;

/// Computes code completions at a given position.
///
/// # Arguments
///
/// * `source` - The source text
/// * `position` - The cursor position
/// * `explicit` - Whether the author explicitly requested completion
///
/// # Examples
///
/// ```
/// use clarity_support::language_service::Position;
/// use clarity_support::queries::completion_provider::compute_completions;
///
/// let completions = compute_completions("(def", Position::new(0, 4), false);
/// assert!(completions.iter().any(|c| c.label == "define-public"));
/// ```
#[must_use]
pub fn compute_completions(source: &str, position: Position, explicit: bool) -> Vec<Completion> {
    let Some(offset) = position.to_byte_offset(source) else {
        return Vec::new();
    };
    let cursor = offset.get() as usize;
    let query_start = query_start(source, cursor);
    let query = &source[query_start..cursor];

    if query.is_empty() && !explicit {
        return Vec::new();
    }

    if on_comment_only_line(source, cursor) {
        return section_header_completions(query);
    }

    let replace_range = Span::from(query_start..cursor);
    let mut completions = Vec::new();
    add_table_completions(query, replace_range, &mut completions);
    add_template_completions(query, replace_range, &mut completions);
    rank_and_deduplicate(&mut completions);

    trace!(query, count = completions.len(), "computed completions");
    completions
}

/// Returns the start of the maximal identifier run ending at `cursor`.
fn query_start(source: &str, cursor: usize) -> usize {
    let bytes = source.as_bytes();
    let mut start = cursor;
    while start > 0 && is_query_char(bytes[start - 1]) {
        start -= 1;
    }
    start
}

/// Identifier characters for query extraction: alphanumerics, underscore,
/// hyphen, and the `?`/`!` suffixes Clarity names carry.
fn is_query_char(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'?' | b'!')
}

/// Returns true when the line containing `cursor` holds only a comment.
fn on_comment_only_line(source: &str, cursor: usize) -> bool {
    let line_start = source[..cursor].rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[line_start..]
        .find('\n')
        .map_or(source.len(), |i| line_start + i);
    source[line_start..line_end].trim_start().starts_with(';')
}

/// Section headers proposed on comment-only lines.
fn section_header_completions(query: &str) -> Vec<Completion> {
    SECTION_HEADERS
        .iter()
        .filter(|header| header.starts_with(query))
        .map(|header| {
            Completion::new(*header, CompletionKind::Section).with_detail("Section header")
        })
        .collect()
}

/// Adds prefix-matching entries from every symbol table.
fn add_table_completions(query: &str, replace_range: Span, completions: &mut Vec<Completion>) {
    let tables: [(&[&str], CompletionKind, &str); 7] = [
        (DEFINE_KEYWORDS, CompletionKind::Keyword, "Definition keyword"),
        (CONTROL_KEYWORDS, CompletionKind::Keyword, "Control flow"),
        (BUILTIN_FUNCTIONS, CompletionKind::Function, "Built-in function"),
        (CONSTANTS, CompletionKind::Constant, "Constant value"),
        (OPERATORS, CompletionKind::Operator, "Arithmetic operator"),
        (LOGIC_OPERATORS, CompletionKind::Operator, "Logic operator"),
        (TYPE_SIGNATURES, CompletionKind::Type, "Type signature"),
    ];

    for (table, kind, detail) in tables {
        for &label in table {
            if !label.starts_with(query) {
                continue;
            }
            let mut completion = Completion::new(label, kind)
                .with_detail(detail)
                .with_rank(rank_for(label));
            if let Some(template) = template_for(label) {
                completion = completion
                    .with_documentation(template.detail)
                    .with_edit(TextEdit::new(replace_range, template.snippet));
            }
            completions.push(completion);
        }
    }
}

/// Adds prefix-matching entries from the template table.
fn add_template_completions(query: &str, replace_range: Span, completions: &mut Vec<Completion>) {
    for template in TEMPLATES {
        if !template.label.starts_with(query) {
            continue;
        }
        completions.push(
            Completion::new(template.label, CompletionKind::Snippet)
                .with_detail(template.detail)
                .with_rank(rank_for(template.label))
                .with_edit(TextEdit::new(replace_range, template.snippet)),
        );
    }
}

/// Returns the rank boost for a label.
fn rank_for(label: &str) -> u8 {
    if PROMOTED_DEFINITIONS.contains(&label) {
        RANK_PROMOTED_DEFINITION
    } else if PROMOTED_CONTEXT_KEYWORDS.contains(&label) {
        RANK_CONTEXT_KEYWORD
    } else if template_for(label).is_some() {
        RANK_TEMPLATE
    } else {
        0
    }
}

/// Sorts by rank (stable, so ties keep table order) and removes duplicate
/// labels, keeping the highest-ranked occurrence.
fn rank_and_deduplicate(completions: &mut Vec<Completion>) {
    completions.sort_by(|a, b| b.rank.cmp(&a.rank));
    let mut seen = HashSet::new();
    completions.retain(|completion| seen.insert(completion.label.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Completions with the cursor at the end of `source`.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "test sources are tiny"
    )]
    fn completions_at_end(source: &str, explicit: bool) -> Vec<Completion> {
        let line = source.matches('\n').count() as u32;
        let column = (source.len() - source.rfind('\n').map_or(0, |i| i + 1)) as u32;
        compute_completions(source, Position::new(line, column), explicit)
    }

    #[test]
    fn empty_query_without_explicit_request_is_quiet() {
        assert!(completions_at_end("(ok ", false).is_empty());
        assert!(completions_at_end("", false).is_empty());
    }

    #[test]
    fn empty_query_with_explicit_request_offers_everything() {
        let completions = completions_at_end("", true);
        assert!(!completions.is_empty());
        assert!(completions.iter().any(|c| c.label == "define-public"));
        assert!(completions.iter().any(|c| c.label == "tx-sender"));
    }

    #[test]
    fn def_prefix_includes_all_matching_definition_keywords() {
        let completions = completions_at_end("(def", false);
        for keyword in DEFINE_KEYWORDS {
            if keyword.starts_with("def") {
                assert!(
                    completions.iter().any(|c| c.label == *keyword),
                    "missing {keyword}"
                );
            }
        }
    }

    #[test]
    fn definition_keywords_rank_above_builtin_matches() {
        // `default-to` is a builtin that also matches the `def` prefix.
        let completions = completions_at_end("(def", false);
        let index_of = |label: &str| {
            completions
                .iter()
                .position(|c| c.label == label)
                .unwrap_or_else(|| panic!("{label} missing"))
        };
        let builtin_at = index_of("default-to");
        for keyword in DEFINE_KEYWORDS {
            if keyword.starts_with("def") {
                assert!(
                    index_of(keyword) < builtin_at,
                    "{keyword} ranked below default-to"
                );
            }
        }
    }

    #[test]
    fn context_keywords_rank_above_plain_builtins() {
        let completions = completions_at_end("tx", false);
        assert_eq!(completions[0].label, "tx-sender");
        assert!(completions.iter().any(|c| c.label == "tx-hash"));
    }

    #[test]
    fn no_match_returns_empty_list() {
        assert!(completions_at_end("zzzzz", false).is_empty());
    }

    #[test]
    fn duplicate_labels_collapse_to_the_highest_ranked() {
        // `ok` appears twice among builtins and twice among constants.
        let completions = completions_at_end("ok", false);
        let ok_entries: Vec<_> = completions.iter().filter(|c| c.label == "ok").collect();
        assert_eq!(ok_entries.len(), 1);
        assert_eq!(ok_entries[0].kind, CompletionKind::Function);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let completions = completions_at_end("DEFINE", false);
        assert!(completions.iter().all(|c| c.label.starts_with("DEFINE")));
        assert!(!completions.iter().any(|c| c.label == "define-public"));
    }

    #[test]
    fn template_backed_entries_carry_a_snippet_edit() {
        let completions = completions_at_end("(define-pu", false);
        let public = completions
            .iter()
            .find(|c| c.label == "define-public")
            .expect("define-public offered");
        let edit = public.edit.as_ref().expect("snippet edit attached");
        // The edit replaces the typed query span, not the whole line.
        assert_eq!(edit.range, Span::new(1, 10));
        assert!(edit.replacement.starts_with("(define-public"));
        assert!(edit.replacement.contains('\n'));
    }

    #[test]
    fn plain_entries_carry_no_edit() {
        let completions = completions_at_end("sha", false);
        let sha = completions
            .iter()
            .find(|c| c.label == "sha256")
            .expect("sha256 offered");
        assert!(sha.edit.is_none());
    }

    #[test]
    fn comment_only_line_offers_section_headers() {
        let completions = completions_at_end(";; Pub", false);
        assert_eq!(completions.len(), 1);
        assert_eq!(completions[0].label, "Public Functions");
        assert_eq!(completions[0].kind, CompletionKind::Section);
    }

    #[test]
    fn comment_line_after_code_lines_still_offers_headers() {
        let completions = completions_at_end("(ok 1)\n;; Data", false);
        assert!(
            completions
                .iter()
                .any(|c| c.label == "Data Variables")
        );
        assert!(
            completions
                .iter()
                .any(|c| c.label == "Data Maps")
        );
    }

    #[test]
    fn code_after_comment_marker_elsewhere_is_not_a_comment_line() {
        let completions = completions_at_end("(def", false);
        assert!(completions.iter().any(|c| c.label == "define-public"));
    }

    #[test]
    fn out_of_bounds_position_is_empty() {
        assert!(compute_completions("(ok 1)", Position::new(9, 9), true).is_empty());
    }

    #[test]
    fn query_extraction_spans_hyphenated_names() {
        let completions = completions_at_end("(map-g", false);
        assert!(completions.iter().any(|c| c.label == "map-get?"));
    }
}
