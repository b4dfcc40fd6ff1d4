// Copyright 2026 the clarity-support authors
// SPDX-License-Identifier: Apache-2.0

//! Lint: remind authors implementing a trait to cover its functions.
//!
//! Without resolving the trait's definition (a cross-contract concern this
//! linter does not attempt), the best available nudge is: the contract both
//! declares `impl-trait` and exposes public functions, so the author should
//! verify the trait's required functions are all present.

use std::sync::LazyLock;

use regex::Regex;

use crate::lint::{Document, LintPass};
use crate::source_analysis::{Diagnostic, Span};

static IMPL_TRAIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"impl-trait\s+([^\s)]+)").expect("valid pattern"));

/// Lint pass that warns when a trait implementation may be incomplete.
pub(crate) struct TraitImplementationPass;

impl LintPass for TraitImplementationPass {
    fn check(&self, doc: &Document<'_>, diagnostics: &mut Vec<Diagnostic>) {
        let text = doc.text();
        if !text.contains("impl-trait") || !text.contains("define-public") {
            return;
        }
        if let Some(captures) = IMPL_TRAIT.captures(text) {
            let (Some(whole), Some(name)) = (captures.get(0), captures.get(1)) else {
                return;
            };
            diagnostics.push(Diagnostic::warning(
                format!(
                    "Verify all functions required by {} are implemented",
                    name.as_str()
                ),
                Span::from(whole.range()),
            ));
        }
    }
}
