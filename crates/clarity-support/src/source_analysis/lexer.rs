// Copyright 2026 the clarity-support authors
// SPDX-License-Identifier: Apache-2.0

//! Lexical analysis for Clarity source code.
//!
//! This module converts source text into a stream of [`Token`]s. The lexer
//! is hand-written for maximum control over error recovery and editor
//! responsiveness.
//!
//! # Design Principles
//!
//! - **Error recovery**: never fail on malformed input; unrecognized
//!   characters are consumed one at a time as [`TokenKind::Unclassified`]
//! - **Streaming**: tokens are produced lazily, one per advance, so a host
//!   can highlight only the visible region and stop
//! - **Precise spans**: every token carries its exact byte range
//!
//! # Matching order
//!
//! Each advance tries a fixed sequence of patterns at the current position
//! and takes the first that matches: comment, bracket, parenthesized numeric
//! type shape, word (classified through the symbol tables), number, string
//! literal, hex buffer, principal literal. Whitespace is consumed silently
//! between tokens.
//!
//! # Example
//!
//! ```
//! use clarity_support::source_analysis::{Lexer, TokenKind};
//!
//! let tokens: Vec<_> = Lexer::new("(ok 1)").collect();
//! assert_eq!(tokens.len(), 4); // (, ok, 1, )
//! assert_eq!(tokens[1].kind(), TokenKind::Function);
//! ```

use crate::symbols::classify_word;

use super::{Span, Token, TokenKind};

/// A streaming lexer over Clarity source text.
///
/// Implements [`Iterator`]; the stream ends at end of input. The lexer never
/// fails: any finite input produces a finite token stream, including
/// truncated or unbalanced text mid-edit.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    /// The full source buffer.
    source: &'src str,
    /// Current byte position in `source`.
    position: usize,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer over the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Creates a lexer that starts scanning at a byte offset.
    ///
    /// Spans in the produced tokens remain absolute within `source`, so a
    /// host can re-highlight just the visible region. Offsets past the end
    /// of the buffer or inside a multi-byte character are snapped back to
    /// the nearest valid boundary.
    #[must_use]
    pub fn with_offset(source: &'src str, offset: usize) -> Self {
        let mut position = offset.min(source.len());
        while !source.is_char_boundary(position) {
            position -= 1;
        }
        Self { source, position }
    }

    /// Consumes whitespace without producing a token.
    fn skip_whitespace(&mut self) {
        let rest = &self.source[self.position..];
        self.position += rest.len() - rest.trim_start().len();
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        let start = self.position;
        let rest = &self.source[start..];
        let first = rest.chars().next()?;

        let (kind, len) = scan_token(rest, first);
        debug_assert!(len > 0, "scanner must always advance");
        self.position = start + len;

        Some(Token::new(
            kind,
            &self.source[start..self.position],
            Span::from(start..self.position),
        ))
    }
}

/// Convenience function to lex source into a vector of tokens.
///
/// For most use cases, prefer using the [`Lexer`] iterator directly.
#[must_use]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Classifies the longest-matching pattern at the start of `rest`.
///
/// `first` is the first character of `rest`. Falls back to consuming that
/// single character as [`TokenKind::Unclassified`], which guarantees
/// termination over any input.
fn scan_token(rest: &str, first: char) -> (TokenKind, usize) {
    if let Some(len) = match_comment(rest) {
        return (TokenKind::Comment, len);
    }
    if let Some((kind, len)) = match_bracket(rest) {
        return (kind, len);
    }
    if let Some(len) = match_type_shape(rest) {
        return (TokenKind::Type, len);
    }
    if let Some(len) = match_word(rest) {
        return (classify_word(&rest[..len]), len);
    }
    if let Some(len) = match_number(rest) {
        return (TokenKind::Number, len);
    }
    if let Some(len) = match_string_literal(rest) {
        return (TokenKind::String, len);
    }
    if let Some(len) = match_hex_buffer(rest) {
        return (TokenKind::String, len);
    }
    if let Some(len) = match_principal(rest) {
        return (TokenKind::String, len);
    }
    (TokenKind::Unclassified, first.len_utf8())
}

/// A semicolon run to end of line: `;; comment`.
fn match_comment(rest: &str) -> Option<usize> {
    rest.starts_with(';')
        .then(|| rest.find('\n').unwrap_or(rest.len()))
}

/// A single bracketing character.
fn match_bracket(rest: &str) -> Option<(TokenKind, usize)> {
    match rest.as_bytes().first()? {
        b'(' | b')' => Some((TokenKind::Bracket, 1)),
        b'{' | b'}' | b'[' | b']' => Some((TokenKind::Delimiter, 1)),
        _ => None,
    }
}

/// A parenthesized name-and-size shape: `(buff 32)`.
fn match_type_shape(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    if bytes.first() != Some(&b'(') {
        return None;
    }
    let mut i = 1;
    let name_start = i;
    while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'-') {
        i += 1;
    }
    if i == name_start {
        return None;
    }
    let ws_start = i;
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    if i == ws_start {
        return None;
    }
    let digit_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == digit_start {
        return None;
    }
    (bytes.get(i) == Some(&b')')).then_some(i + 1)
}

/// A word: letters, hyphen, `?`, `!`.
fn match_word(rest: &str) -> Option<usize> {
    let len = rest
        .bytes()
        .take_while(|&b| b.is_ascii_alphabetic() || matches!(b, b'-' | b'?' | b'!'))
        .count();
    (len > 0).then_some(len)
}

/// A numeral, optionally prefixed by the unsigned-integer marker `u`.
fn match_number(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let digits_from = usize::from(bytes.first() == Some(&b'u'));
    let len = digits_from
        + bytes[digits_from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
    (len > digits_from).then_some(len)
}

/// A double-quoted string literal with backslash escapes.
///
/// An unterminated string does not match; the opening quote then falls
/// through to single-character consumption.
fn match_string_literal(rest: &str) -> Option<usize> {
    let mut chars = rest.char_indices();
    if !matches!(chars.next(), Some((_, '"'))) {
        return None;
    }
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next()?;
            }
            '"' => return Some(i + 1),
            _ => {}
        }
    }
    None
}

/// A hex buffer literal: `0x` followed by hex digits.
fn match_hex_buffer(rest: &str) -> Option<usize> {
    if !rest.starts_with("0x") {
        return None;
    }
    let len = 2 + rest.as_bytes()[2..]
        .iter()
        .take_while(|b| b.is_ascii_hexdigit())
        .count();
    Some(len)
}

/// A principal literal: a quote mark followed by uppercase alphanumerics.
fn match_principal(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    if bytes.first() != Some(&b'\'') {
        return None;
    }
    let len = bytes[1..]
        .iter()
        .take_while(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        .count();
    (len > 0).then_some(1 + len)
}
