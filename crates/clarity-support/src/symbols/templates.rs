// Copyright 2026 the clarity-support authors
// SPDX-License-Identifier: Apache-2.0

//! Insertion templates for code completion.
//!
//! Each template pairs a completable label with a multi-line Clarity
//! skeleton. Snippets are plain text with placeholder names the author is
//! expected to edit; there is no tab-stop protocol. The table is immutable
//! and built into the binary alongside the symbol tables.

/// A completable code skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    /// The label the author types to reach this template.
    pub label: &'static str,
    /// A short description shown alongside the completion.
    pub detail: &'static str,
    /// The text inserted in place of the typed query.
    pub snippet: &'static str,
}

/// Section-header labels proposed on comment-only lines.
pub const SECTION_HEADERS: &[&str] = &[
    "Constants",
    "Data Variables",
    "Data Maps",
    "Public Functions",
    "Read-Only Functions",
    "Private Functions",
    "Traits",
    "Token Definitions",
];

/// All registered insertion templates, in table order.
pub const TEMPLATES: &[Template] = &[
    Template {
        label: "define-public",
        detail: "Public function skeleton",
        snippet: "(define-public (function-name (param uint))\n  (begin\n    (ok true)))",
    },
    Template {
        label: "define-private",
        detail: "Private function skeleton",
        snippet: "(define-private (helper-name (param uint))\n  param)",
    },
    Template {
        label: "define-read-only",
        detail: "Read-only function skeleton",
        snippet: "(define-read-only (getter-name)\n  (ok u0))",
    },
    Template {
        label: "define-map",
        detail: "Data map declaration",
        snippet: "(define-map map-name\n  { key: principal }\n  { value: uint })",
    },
    Template {
        label: "define-data-var",
        detail: "Data variable declaration",
        snippet: "(define-data-var var-name uint u0)",
    },
    Template {
        label: "define-constant",
        detail: "Constant declaration",
        snippet: "(define-constant constant-name u0)",
    },
    Template {
        label: "define-fungible-token",
        detail: "Fungible token declaration",
        snippet: "(define-fungible-token token-name u1000000)",
    },
    Template {
        label: "define-non-fungible-token",
        detail: "Non-fungible token declaration",
        snippet: "(define-non-fungible-token token-name uint)",
    },
    Template {
        label: "define-trait",
        detail: "Trait declaration",
        snippet: "(define-trait trait-name\n  ((function-name (uint) (response bool uint))))",
    },
    Template {
        label: "impl-trait",
        detail: "Trait implementation",
        snippet: "(impl-trait .contract-name.trait-name)",
    },
    Template {
        label: "use-trait",
        detail: "Trait import",
        snippet: "(use-trait trait-alias .contract-name.trait-name)",
    },
    Template {
        label: "define-versioned",
        detail: "Versioned definition",
        snippet: "(define-versioned contract-name u1)",
    },
    Template {
        label: "define-persistent-map",
        detail: "Persistent map declaration",
        snippet: "(define-persistent-map map-name\n  { key: principal }\n  { value: uint })",
    },
    Template {
        label: "define-dynamic-contract",
        detail: "Dynamic contract binding",
        snippet: "(define-dynamic-contract contract-name .contract-name)",
    },
    Template {
        label: "let",
        detail: "Local bindings",
        snippet: "(let ((binding-name u0))\n  binding-name)",
    },
    Template {
        label: "begin",
        detail: "Expression sequence",
        snippet: "(begin\n  (ok true))",
    },
    Template {
        label: "if",
        detail: "Conditional expression",
        snippet: "(if condition\n  true-branch\n  false-branch)",
    },
    Template {
        label: "match",
        detail: "Optional/response destructuring",
        snippet: "(match optional-value\n  value (ok value)\n  (err u404))",
    },
    Template {
        label: "asserts!",
        detail: "Guard assertion",
        snippet: "(asserts! condition (err u403))",
    },
    Template {
        label: "unwrap!",
        detail: "Optional unwrap with early return",
        snippet: "(unwrap! optional-value (err u404))",
    },
    Template {
        label: "map-get?",
        detail: "Map read",
        snippet: "(map-get? map-name { key: tx-sender })",
    },
    Template {
        label: "contract-call?",
        detail: "Cross-contract call",
        snippet: "(contract-call? .contract-name function-name)",
    },
];

/// Looks up the template registered for a label, if any.
#[must_use]
pub fn template_for(label: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.label == label)
}
