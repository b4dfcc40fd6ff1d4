// Copyright 2026 the clarity-support authors
// SPDX-License-Identifier: Apache-2.0

//! Lint: require a declared maximum length on list constructions.
//!
//! Clarity lists are fixed-capacity; a `(list ...)` form whose first
//! argument is not a literal integer length will not type-check on chain.
//! Flagging it in the editor saves a failed deploy.

use std::sync::LazyLock;

use regex::Regex;

use crate::lint::{Document, LintPass};
use crate::source_analysis::{Diagnostic, Span};

static LIST_FORM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(list\s").expect("valid pattern"));
static BOUNDED_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(list\s+[0-9]").expect("valid pattern"));

/// Lint pass that flags list constructions with no literal length.
pub(crate) struct UnboundedListPass;

impl LintPass for UnboundedListPass {
    fn check(&self, doc: &Document<'_>, diagnostics: &mut Vec<Diagnostic>) {
        let text = doc.text();
        for form in LIST_FORM.find_iter(text) {
            if !BOUNDED_LIST.is_match(&text[form.start()..]) {
                diagnostics.push(Diagnostic::error(
                    "Lists must have a specified maximum length",
                    Span::from(form.start()..form.start() + "(list".len()),
                ));
            }
        }
    }
}
