// Copyright 2026 the clarity-support authors
// SPDX-License-Identifier: Apache-2.0

//! Lint passes for Clarity source code.
//!
//! Lint checks are shallow structural heuristics, not a compiler front end:
//! they match patterns over the raw text and flag likely mistakes for the
//! author to double-check. Findings are advisory — they never block editing
//! or deployment.
//!
//! The linter never fails: a rule that cannot find its pattern contributes
//! nothing, and ill-formed input yields an empty diagnostic list rather
//! than an error.
//!
//! # Adding a New Lint
//!
//! 1. Create `src/lint/<your_lint>.rs`.
//! 2. Declare `pub(crate) struct YourLintPass;` implementing [`LintPass`].
//! 3. Add `mod your_lint;` below (keep alphabetical).
//! 4. Push `Box::new(your_lint::YourLintPass)` into `all_passes()` (keep
//!    alphabetical).

mod document;
mod missing_definition;
mod paren_balance;
mod token_supply;
mod trait_implementation;
mod unbounded_list;
mod unchecked_map_access;
// ── add new lint modules here (alphabetical) ──────────────────────────────

pub use document::Document;

use crate::source_analysis::Diagnostic;
use tracing::debug;

/// A single lint pass.
///
/// Implementors inspect `doc` and push any findings into `diagnostics`.
/// Passes are independent: no pass reads another's output.
pub(crate) trait LintPass {
    fn check(&self, doc: &Document<'_>, diagnostics: &mut Vec<Diagnostic>);
}

/// Construct the ordered list of all active lint passes.
///
/// **To register a new pass:** append `Box::new(your_module::YourPass)` in
/// alphabetical order. This is the only line that needs to change per lint.
fn all_passes() -> Vec<Box<dyn LintPass>> {
    vec![
        Box::new(missing_definition::MissingDefinitionPass),
        Box::new(paren_balance::ParenBalancePass),
        Box::new(token_supply::TokenSupplyPass),
        Box::new(trait_implementation::TraitImplementationPass),
        Box::new(unbounded_list::UnboundedListPass),
        Box::new(unchecked_map_access::UncheckedMapAccessPass),
        // ── add new passes here (alphabetical) ────────────────────────────
    ]
}

/// Run all lint passes over a document and return the findings.
///
/// Diagnostics are recomputed fresh on every call; nothing is cached across
/// edits.
#[must_use]
pub fn run_lint_passes(doc: &Document<'_>) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for pass in all_passes() {
        pass.check(doc, &mut diagnostics);
    }
    debug!(count = diagnostics.len(), "lint pass complete");
    diagnostics
}

/// Convenience entry point: lint raw source text.
#[must_use]
pub fn lint_source(text: &str) -> Vec<Diagnostic> {
    run_lint_passes(&Document::new(text))
}
