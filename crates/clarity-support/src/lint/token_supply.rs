// Copyright 2026 the clarity-support authors
// SPDX-License-Identifier: Apache-2.0

//! Lint: recommend a total supply for token definitions.
//!
//! A contract that mints a fungible or non-fungible token without any
//! mention of a total-supply concept is easy to deploy with unbounded
//! issuance by accident. This is a heuristic nudge, not a semantic check.

use crate::lint::{Document, LintPass};
use crate::source_analysis::{Diagnostic, Span};

const TOKEN_DEFINITIONS: [&str; 2] = ["define-fungible-token", "define-non-fungible-token"];

/// Lint pass that warns when a token is defined but no total supply is
/// mentioned anywhere in the document.
pub(crate) struct TokenSupplyPass;

impl LintPass for TokenSupplyPass {
    fn check(&self, doc: &Document<'_>, diagnostics: &mut Vec<Diagnostic>) {
        let text = doc.text();
        if text.contains("total-supply") {
            return;
        }
        let earliest = TOKEN_DEFINITIONS
            .iter()
            .filter_map(|needle| text.find(needle).map(|i| (i, needle.len())))
            .min_by_key(|&(i, _)| i);
        if let Some((start, len)) = earliest {
            diagnostics.push(Diagnostic::warning(
                "Consider defining total supply for tokens",
                Span::from(start..start + len),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lint::lint_source;
    use crate::source_analysis::{Diagnostic, Span};

    fn supply_findings(source: &str) -> Vec<Diagnostic> {
        lint_source(source)
            .into_iter()
            .filter(|d| d.message.contains("total supply"))
            .collect()
    }

    #[test]
    fn fungible_token_without_supply_warns() {
        let diags = supply_findings("(define-fungible-token stackaroo)");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].span, Span::new(1, 22));
    }

    #[test]
    fn non_fungible_token_without_supply_warns() {
        let diags = supply_findings("(define-non-fungible-token art uint)");
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn token_with_supply_mention_is_clean() {
        let source = "\
(define-fungible-token stackaroo)
(define-read-only (get-total-supply) (ok (ft-get-supply stackaroo)))
;; total-supply is fixed at mint time
";
        assert!(supply_findings(source).is_empty());
    }

    #[test]
    fn contract_without_tokens_is_clean() {
        assert!(supply_findings("(define-public (go) (ok true))").is_empty());
    }
}
