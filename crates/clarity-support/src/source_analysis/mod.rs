// Copyright 2026 the clarity-support authors
// SPDX-License-Identifier: Apache-2.0

//! Lexical analysis for Clarity source code.
//!
//! This module contains the streaming lexer and the token and diagnostic
//! value types shared across the crate.
//!
//! # Lexical Analysis
//!
//! The [`Lexer`] converts source text into a stream of [`Token`]s. Each
//! token carries its classification ([`TokenKind`]) and exact byte range
//! ([`Span`]). Tokens map directly onto highlighting styles; no syntax tree
//! is built.
//!
//! ```
//! use clarity_support::source_analysis::{Lexer, TokenKind};
//!
//! let tokens: Vec<_> = Lexer::new("(ok 1)").collect();
//! assert_eq!(tokens.len(), 4); // (, ok, 1, )
//! ```
//!
//! # Error Handling
//!
//! The lexer uses error recovery: input it cannot classify is consumed one
//! character at a time as [`TokenKind::Unclassified`] rather than stopping.
//! Tokenization therefore terminates on any finite input, including
//! malformed or partially-typed text.

mod diagnostic;
mod lexer;
mod span;
mod token;


pub use diagnostic::{Diagnostic, Severity};
pub use lexer::{Lexer, lex};
pub use span::Span;
pub use token::{Token, TokenKind};
