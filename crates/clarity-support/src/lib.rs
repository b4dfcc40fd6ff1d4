// Copyright 2026 the clarity-support authors
// SPDX-License-Identifier: Apache-2.0

//! Clarity language-support core.
//!
//! This crate contains the editor-facing language tooling for the Clarity
//! smart-contract language:
//! - Lexical analysis (streaming tokenization for syntax highlighting)
//! - Code completion (keyword, builtin, and snippet-template suggestions)
//! - Structural linting (heuristic diagnostics over the full document)
//!
//! The crate is designed as a language service, prioritizing editor
//! responsiveness: every entry point is a synchronous, total function of its
//! input and tolerates malformed mid-edit text without failing.
//!
//! It has no process boundary of its own; a hosting editor consumes it
//! in-process through [`language_service::LanguageService`].

pub mod language_service;
pub mod lint;
pub mod queries;
pub mod source_analysis;
pub mod symbols;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::language_service::{
        Completion, CompletionKind, LanguageService, Position, SimpleLanguageService, TextEdit,
    };
    pub use crate::source_analysis::{Diagnostic, Lexer, Severity, Span, Token, TokenKind};
}
