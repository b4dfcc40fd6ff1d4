// Copyright 2026 the clarity-support authors
// SPDX-License-Identifier: Apache-2.0

//! Symbol tables for the Clarity language.
//!
//! The tables are pure data: read-only name lists, built into the binary,
//! shared by the tokenizer and the completion engine. They are safe for
//! concurrent reads — nothing in this crate mutates them.
//!
//! Word classification uses a fixed precedence order so that a name
//! appearing in more than one table always resolves to exactly one
//! [`TokenKind`] (e.g. `ok` is listed both as a builtin and as a constant,
//! and classifies as [`TokenKind::Function`]).

mod tables;
mod templates;

pub use tables::{
    BUILTIN_FUNCTIONS, CONSTANTS, CONTROL_KEYWORDS, DEFINE_KEYWORDS, LOGIC_OPERATORS, OPERATORS,
    TYPE_SIGNATURES,
};
pub use templates::{SECTION_HEADERS, TEMPLATES, Template, template_for};

use crate::source_analysis::TokenKind;

/// Classifies a bare word by symbol-table membership.
///
/// Tables are consulted in precedence order: definition keywords, control
/// keywords, built-in functions, constants, arithmetic operators, logic
/// operators, type signatures. The first table containing the word wins;
/// words in no table classify as [`TokenKind::Variable`].
///
/// # Examples
///
/// ```
/// use clarity_support::source_analysis::TokenKind;
/// use clarity_support::symbols::classify_word;
///
/// assert_eq!(classify_word("define-public"), TokenKind::DefinitionKeyword);
/// assert_eq!(classify_word("tx-sender"), TokenKind::Atom);
/// assert_eq!(classify_word("my-counter"), TokenKind::Variable);
/// ```
#[must_use]
pub fn classify_word(word: &str) -> TokenKind {
    if DEFINE_KEYWORDS.contains(&word) {
        TokenKind::DefinitionKeyword
    } else if CONTROL_KEYWORDS.contains(&word) {
        TokenKind::ControlKeyword
    } else if BUILTIN_FUNCTIONS.contains(&word) {
        TokenKind::Function
    } else if CONSTANTS.contains(&word) {
        TokenKind::Atom
    } else if OPERATORS.contains(&word) {
        TokenKind::Operator
    } else if LOGIC_OPERATORS.contains(&word) {
        TokenKind::Operator
    } else if TYPE_SIGNATURES.contains(&word) {
        TokenKind::Type
    } else {
        TokenKind::Variable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_definition_keywords() {
        assert_eq!(classify_word("define-public"), TokenKind::DefinitionKeyword);
        assert_eq!(classify_word("define-map"), TokenKind::DefinitionKeyword);
        assert_eq!(classify_word("impl-trait"), TokenKind::DefinitionKeyword);
    }

    #[test]
    fn classify_control_keywords() {
        assert_eq!(classify_word("let"), TokenKind::ControlKeyword);
        assert_eq!(classify_word("unwrap!"), TokenKind::ControlKeyword);
        assert_eq!(classify_word("map-get?"), TokenKind::ControlKeyword);
    }

    #[test]
    fn classify_builtins_and_constants() {
        assert_eq!(classify_word("ft-transfer?"), TokenKind::Function);
        assert_eq!(classify_word("concat"), TokenKind::Function);
        assert_eq!(classify_word("tx-sender"), TokenKind::Atom);
        assert_eq!(classify_word("block-height"), TokenKind::Atom);
        assert_eq!(classify_word("true"), TokenKind::Atom);
    }

    #[test]
    fn classify_operators_and_types() {
        assert_eq!(classify_word("-"), TokenKind::Operator);
        assert_eq!(classify_word("and"), TokenKind::Operator);
        assert_eq!(classify_word("not"), TokenKind::Operator);
        assert_eq!(classify_word("uint"), TokenKind::Type);
        assert_eq!(classify_word("principal"), TokenKind::Type);
        assert_eq!(classify_word("trait"), TokenKind::Type);
    }

    #[test]
    fn classify_fallback_is_variable() {
        assert_eq!(classify_word("my-balance"), TokenKind::Variable);
        assert_eq!(classify_word("x"), TokenKind::Variable);
        assert_eq!(classify_word(""), TokenKind::Variable);
    }

    #[test]
    fn overlapping_names_resolve_by_precedence() {
        // Listed as builtin function, constant, and (for pow/is-eq) operator;
        // the builtin table wins every time.
        assert_eq!(classify_word("ok"), TokenKind::Function);
        assert_eq!(classify_word("err"), TokenKind::Function);
        assert_eq!(classify_word("some"), TokenKind::Function);
        assert_eq!(classify_word("none"), TokenKind::Function);
        assert_eq!(classify_word("pow"), TokenKind::Function);
        assert_eq!(classify_word("is-eq"), TokenKind::Function);
    }

    #[test]
    fn classification_is_idempotent() {
        for _ in 0..3 {
            assert_eq!(classify_word("define-public"), TokenKind::DefinitionKeyword);
            assert_eq!(classify_word("tx-sender"), TokenKind::Atom);
        }
    }
}
